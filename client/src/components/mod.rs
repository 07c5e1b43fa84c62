//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, listing surfaces, and dialogs. Shared
//! session state comes from Leptos context; everything else is passed in as
//! props by the owning page.

pub mod footer;
pub mod image_uploader;
pub mod listing_card;
pub mod listing_modal;
pub mod navbar;
pub mod seller_modal;
pub mod sell_item_modal;
pub mod toast;
