//! Listing authoring form: validation, draft construction, and submit outcome.
//!
//! DESIGN
//! ======
//! Submission is split around the single network call so the page can hold
//! the controller in a signal without borrowing it across an `await`:
//! `prepare` validates and builds the draft (no draft means no request),
//! the page sends it, and `complete` applies the result. Failures are turned
//! into notifications here and never escape to the caller.

#[cfg(test)]
#[path = "listing_form_test.rs"]
mod listing_form_test;

use crate::net::error::ApiError;
use crate::net::types::{Listing, NewListingPayload};
use crate::state::listings::ListingsState;
use crate::state::notifications::NotificationRequest;

pub const PUBLISHED_MESSAGE: &str = "Listing published successfully!";
pub const PUBLISH_FAILED_MESSAGE: &str = "Publishing failed!";

/// Validation failure; the message is shown inline above the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Enter a valid price")]
    InvalidPrice,
}

/// Raw field values plus the staged image payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub images: Vec<String>,
}

impl ListingForm {
    /// Check fields in order, first failure wins. Returns the normalized price.
    ///
    /// # Errors
    ///
    /// `MissingFields` when a text field is blank or no image is staged,
    /// `InvalidPrice` when the price is not a positive number.
    pub fn validate(&self) -> Result<String, FormError> {
        let blank = [&self.title, &self.description, &self.price]
            .iter()
            .any(|field| field.trim().is_empty());
        if blank || self.images.is_empty() {
            return Err(FormError::MissingFields);
        }
        normalize_price(&self.price)
    }
}

/// Parse a positive price and format it with two decimals.
///
/// # Errors
///
/// Returns `InvalidPrice` for unparseable, non-finite, zero, or negative input.
pub fn normalize_price(raw: &str) -> Result<String, FormError> {
    let value = raw.trim().parse::<f64>().map_err(|_| FormError::InvalidPrice)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(FormError::InvalidPrice);
    }
    Ok(format!("{value:.2}"))
}

/// A validated listing ready to publish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    /// Two-decimal price text.
    pub price: String,
    pub images: Vec<String>,
    pub seller: String,
    pub date: String,
}

impl ListingDraft {
    /// Request body for `POST /newproduct`; images are sent JSON-encoded.
    #[must_use]
    pub fn to_payload(&self) -> NewListingPayload {
        NewListingPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            images: encode_images(&self.images),
            seller: self.seller.clone(),
            date: self.date.clone(),
        }
    }

    /// Local copy appended to the seller's list after a successful publish.
    #[must_use]
    pub fn into_listing(self) -> Listing {
        let images = encode_images(&self.images);
        Listing {
            id: None,
            title: self.title,
            description: self.description,
            price: self.price,
            images,
            seller: self.seller,
            date: self.date,
        }
    }
}

fn encode_images(images: &[String]) -> String {
    serde_json::to_string(images).unwrap_or_else(|_| "[]".to_owned())
}

/// Form state for the "sell an item" surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFormController {
    pub form: ListingForm,
    /// Inline validation message.
    pub error: Option<String>,
    /// Whether the authoring surface is shown.
    pub open: bool,
    /// A submission is in flight.
    pub submitting: bool,
}

impl ListingFormController {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Abandon the draft: clear everything and close.
    pub fn cancel(&mut self) {
        self.reset();
        self.open = false;
    }

    /// Receive the staged image payloads from the uploader.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.form.images = images;
    }

    pub fn reset(&mut self) {
        self.form = ListingForm::default();
        self.error = None;
        self.submitting = false;
    }

    /// Validate and build the draft to send.
    ///
    /// Returns `None`, and sends nothing, when validation fails (the message
    /// lands in `error`, fields untouched) or a submission is already running.
    pub fn prepare(&mut self, seller: &str, date: &str) -> Option<ListingDraft> {
        if self.submitting {
            return None;
        }
        let price = match self.form.validate() {
            Ok(price) => price,
            Err(e) => {
                self.error = Some(e.to_string());
                return None;
            }
        };
        self.error = None;
        self.submitting = true;
        Some(ListingDraft {
            title: self.form.title.clone(),
            description: self.form.description.clone(),
            price,
            images: self.form.images.clone(),
            seller: seller.to_owned(),
            date: date.to_owned(),
        })
    }

    /// Apply the publish result.
    ///
    /// Success appends the draft to `listings`, resets, and closes. Any
    /// failure keeps every field and image so the user can retry.
    pub fn complete(
        &mut self,
        draft: ListingDraft,
        result: Result<(), ApiError>,
        listings: &mut ListingsState,
    ) -> NotificationRequest {
        self.submitting = false;
        match result {
            Ok(()) => {
                listings.push_published(draft.into_listing());
                self.reset();
                self.open = false;
                NotificationRequest::success(PUBLISHED_MESSAGE)
            }
            Err(e) => {
                log::error!("publishing listing failed: {e}");
                NotificationRequest::error(PUBLISH_FAILED_MESSAGE)
            }
        }
    }
}
