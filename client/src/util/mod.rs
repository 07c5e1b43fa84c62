//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod carousel;
pub mod date;
#[cfg(feature = "hydrate")]
pub mod file_reader;
pub mod nav;
pub mod timer;
