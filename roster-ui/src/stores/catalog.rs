//! Catalog view state store

use dioxus::prelude::*;
use roster_common::{CharacterCardView, DisplayState, Section};

/// State for the catalog page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogUiState {
    /// Section whose navigation button is marked active
    pub section: Section,
    /// Which banner or the grid is visible
    pub display: DisplayState,
    /// Cards of the current render, in order
    pub cards: Vec<CharacterCardView>,
}
