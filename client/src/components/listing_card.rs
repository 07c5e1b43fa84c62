//! Card for one listing in the browse and profile grids.

use leptos::prelude::*;

use crate::net::types::Listing;

#[component]
pub fn ListingCard(listing: Listing, on_open: Callback<Listing>) -> impl IntoView {
    let images = listing.image_urls();
    let selected = RwSignal::new(0_usize);

    let gallery = if images.is_empty() {
        view! { <div class="listing-card__no-image">"Images not available"</div> }.into_any()
    } else {
        let main_images = images.clone();
        let main_src = move || main_images.get(selected.get()).cloned().unwrap_or_default();
        let thumbnails = (images.len() > 1).then(|| {
            images
                .iter()
                .enumerate()
                .map(|(idx, src)| {
                    view! {
                        <button
                            class="listing-card__thumb"
                            class:listing-card__thumb--active=move || selected.get() == idx
                            type="button"
                            on:click=move |_| selected.set(idx)
                        >
                            <img src=src.clone() alt=format!("Thumbnail {}", idx + 1)/>
                        </button>
                    }
                })
                .collect::<Vec<_>>()
        });
        let zoom_listing = listing.clone();
        view! {
            <div class="listing-card__gallery">
                <img class="listing-card__image" src=main_src alt=listing.title.clone()/>
                <button
                    class="listing-card__zoom"
                    type="button"
                    aria-label="Open details"
                    on:click=move |_| on_open.run(zoom_listing.clone())
                >
                    "🔍"
                </button>
                <div class="listing-card__thumbs">{thumbnails}</div>
            </div>
        }
        .into_any()
    };

    let open_listing = listing.clone();
    view! {
        <article class="listing-card">
            {gallery}
            <div class="listing-card__body">
                <h3
                    class="listing-card__title"
                    on:click=move |_| on_open.run(open_listing.clone())
                >
                    {listing.title}
                </h3>
                <p class="listing-card__description">{listing.description}</p>
                <p class="listing-card__price">{format!("€ {}", listing.price)}</p>
                <p class="listing-card__meta">
                    <span class="listing-card__seller">{listing.seller}</span>
                    <span class="listing-card__date">{listing.date}</span>
                </p>
            </div>
        </article>
    }
}
