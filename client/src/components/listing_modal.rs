//! Listing detail dialog with an image carousel.

use leptos::prelude::*;

use crate::components::seller_modal::SellerModal;
use crate::net::types::Listing;
use crate::util::carousel::{CarouselKey, key_action, next_index, prev_index};

#[component]
pub fn ListingModal(listing: Listing, on_close: Callback<()>) -> impl IntoView {
    let images = listing.image_urls();
    let count = images.len();
    let index = RwSignal::new(0_usize);
    let seller_open = RwSignal::new(false);
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Take focus so arrow keys reach the dialog immediately.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = dialog_ref.get() {
            let _ = el.focus();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        // The seller dialog handles its own keys.
        if seller_open.get_untracked() {
            return;
        }
        match key_action(&ev.key()) {
            Some(CarouselKey::Previous) => index.update(|i| *i = prev_index(*i, count)),
            Some(CarouselKey::Next) => index.update(|i| *i = next_index(*i, count)),
            Some(CarouselKey::Close) => on_close.run(()),
            None => return,
        }
        ev.prevent_default();
    };

    let carousel = if images.is_empty() {
        view! { <div class="listing-modal__no-image">"Images not available"</div> }.into_any()
    } else {
        let current = move || images.get(index.get()).cloned().unwrap_or_default();
        let controls = (count > 1).then(|| {
            view! {
                <button
                    class="listing-modal__nav listing-modal__nav--prev"
                    type="button"
                    aria-label="Previous image"
                    on:click=move |_| index.update(|i| *i = prev_index(*i, count))
                >
                    "‹"
                </button>
                <button
                    class="listing-modal__nav listing-modal__nav--next"
                    type="button"
                    aria-label="Next image"
                    on:click=move |_| index.update(|i| *i = next_index(*i, count))
                >
                    "›"
                </button>
                <span class="listing-modal__counter">
                    {move || format!("{} / {count}", index.get() + 1)}
                </span>
            }
        });
        view! {
            <div class="listing-modal__carousel">
                <img class="listing-modal__image" src=current alt=listing.title.clone()/>
                {controls}
            </div>
        }
        .into_any()
    };

    let seller = listing.seller.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog listing-modal"
                node_ref=dialog_ref
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button
                    class="dialog__close"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                {carousel}
                <div class="listing-modal__details">
                    <h2>{listing.title}</h2>
                    <p class="listing-modal__price">{format!("€ {}", listing.price)}</p>
                    <p class="listing-modal__description">{listing.description}</p>
                    <p class="listing-modal__meta">
                        {format!("Sold by {} on {}", listing.seller, listing.date)}
                    </p>
                    <button
                        class="button button--primary"
                        type="button"
                        on:click=move |_| seller_open.set(true)
                    >
                        "Contact seller"
                    </button>
                </div>
            </div>
        </div>
        <Show when=move || seller_open.get()>
            <SellerModal
                username=seller.clone()
                on_close=Callback::new(move |()| seller_open.set(false))
            />
        </Show>
    }
}
