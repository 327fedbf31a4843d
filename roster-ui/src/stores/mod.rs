//! Store types for UI state management
//!
//! The web app owns the catalog controller and copies the parts the views
//! need into these stores after every change. Each store derives `Store` for
//! fine-grained reactivity via lensing.

pub mod catalog;
pub mod toasts;

pub use catalog::*;
pub use toasts::*;
