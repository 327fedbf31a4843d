//! Character card component - pure view with a toggle callback

use crate::components::icons::{HeartIcon, XIcon};
use dioxus::prelude::*;
use roster_common::{CatalogCommand, CharacterCardView};

/// A single character card
///
/// The favorite button reports a `ToggleFavorite` command carrying this card's
/// id and the action the button currently shows.
#[component]
pub fn CharacterCard(card: CharacterCardView, on_command: EventHandler<CatalogCommand>) -> Element {
    let character = &card.character;
    let toggle = &card.toggle;
    let id = character.id;
    let action = toggle.action;

    let toggle_class = if toggle.is_favorite {
        "favorite-toggle-btn is-favorite w-full mt-3 inline-flex justify-center items-center gap-2 rounded-lg px-3 py-2 text-sm bg-rose-700/40 text-rose-100 hover:bg-rose-700/60 transition-colors"
    } else {
        "favorite-toggle-btn w-full mt-3 inline-flex justify-center items-center gap-2 rounded-lg px-3 py-2 text-sm bg-gray-700 text-gray-100 hover:bg-gray-600 transition-colors"
    };

    rsx! {
        div {
            class: "character-card bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300",
            "data-testid": "character-card",
            "data-id": "{id}",
            img {
                class: "w-full aspect-square object-cover bg-gray-700",
                src: "{character.image}",
                alt: "{character.name}",
                "loading": "lazy",
            }
            div { class: "character-info p-4",
                h3 {
                    class: "font-bold text-white text-lg mb-1 truncate",
                    title: "{character.name}",
                    "{character.name}"
                }
                p { class: "text-gray-400 text-sm",
                    strong { "Status: " }
                    "{character.status}"
                }
                p { class: "text-gray-400 text-sm",
                    strong { "Species: " }
                    "{character.species}"
                }
                button {
                    class: "{toggle_class}",
                    r#type: "button",
                    "data-action": "{action}",
                    aria_pressed: if toggle.is_favorite { "true" } else { "false" },
                    onclick: move |_| on_command.call(CatalogCommand::ToggleFavorite { id, action }),
                    if toggle.is_favorite {
                        XIcon { class: "w-4 h-4" }
                    } else {
                        HeartIcon { class: "w-4 h-4" }
                    }
                    span { "{toggle.label}" }
                }
            }
        }
    }
}
