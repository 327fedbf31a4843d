pub mod api;
pub mod pages;
pub mod service;
pub mod storage;

use dioxus::prelude::*;
use pages::{AppLayout, CatalogPage};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    CatalogPage {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Roster - Character Catalog" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900", Router::<Route> {} }
    }
}
