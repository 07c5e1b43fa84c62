//! Image picker with staged thumbnails for the listing form.
//!
//! DESIGN
//! ======
//! Staging state is local to the component; the form only ever sees the
//! ordered payload list through `on_change`. A selection is decoded in full
//! before the batch is appended, and removal waits for the thumbnail's exit
//! animation (`animationend`) before the entry is spliced out.

use leptos::prelude::*;

use crate::state::staging::ImageStaging;

#[component]
pub fn ImageUploader(
    /// Receives the ordered data URLs after every change.
    on_change: Callback<Vec<String>>,
    /// Receives the number of files in a selection that could not be read.
    on_read_error: Callback<usize>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let staging = RwSignal::new(ImageStaging::default());
    let decoding = RwSignal::new(false);

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::staging::stage_decoded;
            use crate::util::file_reader::{files_of, read_data_url};

            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let files = input.files().map(|list| files_of(&list)).unwrap_or_default();
            // Allow picking the same file again.
            input.set_value("");
            if files.is_empty() {
                return;
            }
            decoding.set(true);
            leptos::task::spawn_local(async move {
                let results = futures::future::join_all(files.into_iter().map(read_data_url)).await;
                for err in results.iter().filter_map(|r| r.as_ref().err()) {
                    log::warn!("image decode failed: {err}");
                }
                let (batch, failed) = stage_decoded(results);
                let Some(payloads) = staging.try_update(|s| s.append_batch(batch)) else {
                    return;
                };
                decoding.set(false);
                on_change.run(payloads);
                if failed > 0 {
                    on_read_error.run(failed);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, on_read_error);
    };

    view! {
        <div class="image-uploader">
            <label class="image-uploader__picker">
                <span>{move || if decoding.get() { "Reading images..." } else { "Add images" }}</span>
                <input
                    type="file"
                    accept="image/*"
                    multiple=true
                    disabled=move || disabled.get() || decoding.get()
                    on:change=on_files
                />
            </label>
            <p class="image-uploader__summary">{move || staging.with(ImageStaging::summary)}</p>
            <div class="image-uploader__grid">
                <For
                    each=move || staging.with(|s| s.images().to_vec())
                    key=|image| image.id.clone()
                    let:image
                >
                    {
                        let id = image.id;
                        let removing = {
                            let id = id.clone();
                            move || staging.with(|s| s.is_removing(&id))
                        };
                        let on_remove = {
                            let id = id.clone();
                            move |_| {
                                staging.update(|s| {
                                    s.mark_removing(&id);
                                });
                            }
                        };
                        let on_exit_done = move |_| {
                            if let Some(payloads) = staging.try_update(|s| s.confirm_removed(&id)).flatten() {
                                on_change.run(payloads);
                            }
                        };
                        view! {
                            <div
                                class="staged-image"
                                class:staged-image--removing=removing
                                on:animationend=on_exit_done
                            >
                                <img src=image.data_url alt="Selected image"/>
                                <button
                                    class="staged-image__remove"
                                    type="button"
                                    aria-label="Remove image"
                                    on:click=on_remove
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                </For>
            </div>
        </div>
    }
}
