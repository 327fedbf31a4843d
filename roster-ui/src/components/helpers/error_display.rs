//! Error banner for failed character loads

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Red error box. There is no retry button: picking a section again refetches.
#[component]
pub fn ErrorDisplay(
    #[props(default = "Could not load characters. Pick a section to try again.".to_string())]
    message: String,
) -> Element {
    rsx! {
        div {
            class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded flex items-center gap-3",
            role: "alert",
            "data-testid": "error-message",
            AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0" }
            p { "{message}" }
        }
    }
}
