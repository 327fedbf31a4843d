//! Catalog view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<CatalogUiState>` and uses lenses so the navigation bar
//! and the grid only re-render when their own fields change.

use crate::components::character_card::CharacterCard;
use crate::components::helpers::{EmptyState, ErrorDisplay, LoadingSpinner};
use crate::components::section_nav::SectionNavView;
use crate::stores::catalog::{CatalogUiState, CatalogUiStateStoreExt};
use dioxus::prelude::*;
use roster_common::{CatalogCommand, CharacterCardView, DisplayState};

#[component]
pub fn CatalogView(
    state: ReadStore<CatalogUiState>,
    /// Navigation clicks and favorite toggles
    on_command: EventHandler<CatalogCommand>,
) -> Element {
    let section = *state.section().read();
    let display = *state.display().read();

    rsx! {
        div { class: "flex-grow overflow-y-auto flex flex-col py-10",
            div { class: "container mx-auto px-4 flex flex-col gap-6",
                div { class: "flex flex-wrap items-center justify-between gap-4",
                    h1 { class: "text-3xl font-bold text-white", "Characters" }
                    SectionNavView { active: section, on_command }
                }
                {
                    match display {
                        DisplayState::Loading => rsx! { LoadingSpinner {} },
                        DisplayState::Error => rsx! { ErrorDisplay {} },
                        DisplayState::Empty => rsx! { EmptyState {} },
                        DisplayState::Populated => rsx! {
                            CharacterGrid { cards: state.cards().read().clone(), on_command }
                        },
                    }
                }
            }
        }
    }
}

/// Card grid, one keyed card per character
#[component]
fn CharacterGrid(cards: Vec<CharacterCardView>, on_command: EventHandler<CatalogCommand>) -> Element {
    rsx! {
        div {
            id: "charactersGrid",
            class: "grid gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4",
            for card in cards {
                CharacterCard { key: "{card.character.id}", card, on_command }
            }
        }
    }
}
