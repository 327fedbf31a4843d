//! Section navigation - a row of buttons where exactly one is active

use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;
use roster_common::{CatalogCommand, Section};

#[component]
pub fn SectionNavView(active: Section, on_command: EventHandler<CatalogCommand>) -> Element {
    rsx! {
        nav { class: "nav-buttons flex gap-1 bg-gray-800/50 rounded-lg p-1",
            for section in Section::ALL {
                Button {
                    key: "{section}",
                    variant: if section == active { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    class: if section == active { Some("active".to_string()) } else { None },
                    aria_pressed: Some(section == active),
                    onclick: move |_| on_command.call(CatalogCommand::ChangeSection(section)),
                    "{section.label()}"
                }
            }
        }
    }
}
