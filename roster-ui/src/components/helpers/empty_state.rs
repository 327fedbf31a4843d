use crate::components::icons::UsersIcon;
use dioxus::prelude::*;

#[component]
pub fn EmptyState(#[props(default = "No characters to show.".to_string())] message: String) -> Element {
    rsx! {
        div { class: "text-center py-12", "data-testid": "empty-message",
            div { class: "text-gray-500 mb-4",
                UsersIcon { class: "w-16 h-16 mx-auto" }
            }
            p { class: "text-xl text-gray-300", "{message}" }
        }
    }
}
