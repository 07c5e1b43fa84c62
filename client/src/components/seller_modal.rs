//! Seller contact dialog.

use leptos::prelude::*;

use crate::net::error::ApiError;

pub const EMAIL_UNAVAILABLE: &str = "Email not available";

#[derive(Clone, Debug, PartialEq, Eq)]
enum Lookup {
    Loading,
    Found(String),
    Failed,
}

fn lookup_from(result: Result<String, ApiError>) -> Lookup {
    match result {
        Ok(email) => Lookup::Found(email),
        Err(e) => {
            log::warn!("seller email lookup failed: {e}");
            Lookup::Failed
        }
    }
}

/// Fetches the seller's email on mount via `POST /user`.
#[component]
pub fn SellerModal(username: String, on_close: Callback<()>) -> impl IntoView {
    let lookup = RwSignal::new(Lookup::Loading);

    #[cfg(feature = "hydrate")]
    {
        let username = username.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_seller_email(&username).await;
            let _ = lookup.try_set(lookup_from(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = lookup_from;

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ev.stop_propagation();
            on_close.run(());
        }
    };

    let body = move || match lookup.get() {
        Lookup::Loading => view! { <p class="seller-modal__status">"Loading..."</p> }.into_any(),
        Lookup::Found(email) => {
            let href = format!("mailto:{email}");
            view! { <a class="seller-modal__email" href=href>{email}</a> }.into_any()
        }
        Lookup::Failed => view! { <p class="seller-modal__status">{EMAIL_UNAVAILABLE}</p> }.into_any(),
    };

    view! {
        <div
            class="dialog-backdrop dialog-backdrop--stacked"
            on:click=move |ev| {
                ev.stop_propagation();
                on_close.run(());
            }
        >
            <div
                class="dialog seller-modal"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>"Contact seller"</h2>
                <p class="seller-modal__name">{username}</p>
                {body}
                <button class="button" type="button" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
