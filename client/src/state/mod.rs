//! Client state modules.
//!
//! DESIGN
//! ======
//! State types are plain Rust values held in `RwSignal`s by pages and
//! components. All transitions live here as methods so they can be tested
//! natively without a browser or reactive runtime.

pub mod listing_form;
pub mod listings;
pub mod notifications;
pub mod session;
pub mod staging;
