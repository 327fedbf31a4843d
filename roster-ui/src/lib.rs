//! roster-ui - View components and stores for the character catalog
//!
//! Components here only render what they are given and report clicks through
//! callbacks. Fetching, storage and the catalog controller live in roster-web.

pub mod components;
pub mod stores;

pub use components::*;
