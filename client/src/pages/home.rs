//! Landing page: browse and search every listing.

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::components::listing_modal::ListingModal;
use crate::net::types::Listing;
use crate::state::listings::ListingsState;

/// Fetches the collection once on mount; search filters locally.
#[component]
pub fn HomePage() -> impl IntoView {
    let listings = RwSignal::new(ListingsState::loading());
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Listing>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let loaded = crate::state::listings::load_with(crate::net::api::fetch_listings).await;
        let _ = listings.try_set(loaded);
    });

    let visible = Memo::new(move |_| listings.with(|l| l.filter(&query.get())));
    let on_open = Callback::new(move |listing: Listing| selected.set(Some(listing)));

    let grid = move || {
        let state = listings.get();
        if state.loading {
            return view! { <p class="page-status">"Loading listings..."</p> }.into_any();
        }
        if let Some(msg) = state.error {
            return view! { <p class="page-status page-status--error">{msg}</p> }.into_any();
        }
        let items = visible.get();
        if items.is_empty() {
            return view! { <p class="page-status">"No items found"</p> }.into_any();
        }
        view! {
            <div class="listing-grid">
                {items
                    .into_iter()
                    .map(|listing| view! { <ListingCard listing=listing on_open=on_open/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="home-page">
            <header class="page-header">
                <h1>"Marketplace"</h1>
                <p>"Find and buy items from other users"</p>
            </header>
            <div class="search-bar">
                <input
                    type="search"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
            {grid}
            {move || {
                selected
                    .get()
                    .map(|listing| {
                        view! {
                            <ListingModal
                                listing=listing
                                on_close=Callback::new(move |()| selected.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}
