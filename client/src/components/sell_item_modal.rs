//! "Sell an item" dialog hosting the listing form.

use leptos::prelude::*;

use crate::components::image_uploader::ImageUploader;
use crate::state::listing_form::ListingFormController;
use crate::state::listings::ListingsState;
use crate::state::notifications::{NotificationRequest, NotificationsState};

fn read_error_message(failed: usize) -> String {
    if failed == 1 {
        "1 image could not be read".to_owned()
    } else {
        format!("{failed} images could not be read")
    }
}

#[component]
pub fn SellItemModal(
    controller: RwSignal<ListingFormController>,
    listings: RwSignal<ListingsState>,
    notifications: RwSignal<NotificationsState>,
    seller: String,
) -> impl IntoView {
    let submitting = Signal::derive(move || controller.with(|c| c.submitting));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let date = crate::util::date::today();
        let Some(draft) = controller.try_update(|c| c.prepare(&seller, &date)).flatten() else {
            return;
        };
        let payload = draft.to_payload();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::publish_listing(&payload).await;
            let Some(note) = listings.try_update(|l| controller.try_update(|c| c.complete(draft, result, l))).flatten()
            else {
                return;
            };
            notifications.update(|n| {
                n.show(note);
            });
        });
    };

    let on_cancel = move |_| controller.update(ListingFormController::cancel);

    let on_images = Callback::new(move |images: Vec<String>| controller.update(|c| c.set_images(images)));
    let on_read_error = Callback::new(move |failed: usize| {
        notifications.update(|n| {
            n.show(NotificationRequest::error(read_error_message(failed)));
        });
    });

    view! {
        <div class="dialog-backdrop">
            <div class="dialog sell-modal" on:click=move |ev| ev.stop_propagation()>
                <h2>"Sell an item"</h2>
                <Show when=move || controller.with(|c| c.error.is_some())>
                    <p class="form-error">{move || controller.with(|c| c.error.clone().unwrap_or_default())}</p>
                </Show>
                <form class="listing-form" on:submit=on_submit>
                    <label class="listing-form__field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            prop:value=move || controller.with(|c| c.form.title.clone())
                            on:input=move |ev| controller.update(|c| c.form.title = event_target_value(&ev))
                        />
                    </label>
                    <label class="listing-form__field">
                        <span>"Description"</span>
                        <textarea
                            rows="4"
                            prop:value=move || controller.with(|c| c.form.description.clone())
                            on:input=move |ev| controller.update(|c| c.form.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="listing-form__field">
                        <span>"Price (€)"</span>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || controller.with(|c| c.form.price.clone())
                            on:input=move |ev| controller.update(|c| c.form.price = event_target_value(&ev))
                        />
                    </label>
                    <ImageUploader on_change=on_images on_read_error=on_read_error disabled=submitting/>
                    <div class="listing-form__actions">
                        <button class="button" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="button button--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Publishing..." } else { "Publish" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
