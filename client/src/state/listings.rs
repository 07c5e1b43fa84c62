//! Listing collection shared by the browse and profile pages.
//!
//! The collection is fetched once per page mount; search runs entirely on the
//! client over the loaded items.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::Listing;

pub const LOAD_FAILED_MESSAGE: &str = "Could not load listings. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingsState {
    pub items: Vec<Listing>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ListingsState {
    /// Initial state of a page that is about to fetch.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Record the fetch outcome. A failure keeps whatever was already loaded.
    pub fn apply(&mut self, result: Result<Vec<Listing>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::error!("loading listings failed: {e}");
                self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
    }

    /// Show a listing the user just published.
    ///
    /// The item exists on the server now, so a stale load failure no longer
    /// describes what the page shows.
    pub fn push_published(&mut self, listing: Listing) {
        self.items.push(listing);
        self.loading = false;
        self.error = None;
    }

    /// Listings whose title or description contains `query`, ignoring case.
    /// Only the empty query matches everything; whitespace is significant.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<Listing> {
        filter_listings(&self.items, query)
    }

    /// Listings published by `seller`.
    #[must_use]
    pub fn by_seller(&self, seller: &str) -> Vec<Listing> {
        self.items.iter().filter(|listing| listing.seller == seller).cloned().collect()
    }
}

/// Run one fetch and fold it into a fresh state.
pub async fn load_with<F, Fut>(fetch: F) -> ListingsState
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Listing>, ApiError>>,
{
    let mut state = ListingsState::loading();
    state.apply(fetch().await);
    state
}

#[must_use]
pub fn filter_listings(items: &[Listing], query: &str) -> Vec<Listing> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|listing| {
            listing.title.to_lowercase().contains(&needle) || listing.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
