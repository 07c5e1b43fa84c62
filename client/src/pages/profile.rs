//! Signed-in user's profile: own listings and the "sell an item" flow.

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::components::listing_modal::ListingModal;
use crate::components::sell_item_modal::SellItemModal;
use crate::components::toast::ToastStack;
use crate::net::types::Listing;
use crate::state::listing_form::ListingFormController;
use crate::state::listings::ListingsState;
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;
use crate::util::auth::RequireSession;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireSession>
            <ProfileView/>
        </RequireSession>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let user = session.get_untracked().user.unwrap_or_default();

    let listings = RwSignal::new(ListingsState::loading());
    let controller = RwSignal::new(ListingFormController::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let selected = RwSignal::new(None::<Listing>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let loaded = crate::state::listings::load_with(crate::net::api::fetch_listings).await;
        let _ = listings.try_set(loaded);
    });

    let username = user.username.clone();
    let own = Memo::new(move |_| listings.with(|l| l.by_seller(&username)));
    let on_open = Callback::new(move |listing: Listing| selected.set(Some(listing)));
    let open_form = move |_| controller.update(ListingFormController::open);

    let grid = move || {
        if listings.with(|l| l.loading) {
            return view! { <p class="page-status">"Loading listings..."</p> }.into_any();
        }
        if let Some(msg) = listings.with(|l| l.error.clone()) {
            return view! { <p class="page-status page-status--error">{msg}</p> }.into_any();
        }
        let items = own.get();
        if items.is_empty() {
            return view! {
                <div class="empty-state">
                    <p>"You have not listed anything yet."</p>
                    <button class="button button--primary" type="button" on:click=open_form>
                        "Sell your first item"
                    </button>
                </div>
            }
            .into_any();
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

    let seller = user.username.clone();

    view! {
        <section class="profile-page">
            <header class="profile-header">
                <div class="profile-header__avatar" aria-hidden="true">
                    {user.username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                </div>
                <div>
                    <h1>{user.username.clone()}</h1>
                    <p class="profile-header__email">{user.email.clone()}</p>
                </div>
                <button class="button button--primary" type="button" on:click=open_form>
                    "Sell an item"
                </button>
            </header>
            <h2>"Your listings"</h2>
            {grid}
            <Show when=move || controller.with(|c| c.open)>
                <SellItemModal
                    controller=controller
                    listings=listings
                    notifications=notifications
                    seller=seller.clone()
                />
            </Show>
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
            <ToastStack notifications=notifications/>
        </section>
    }
}
