use crate::service::{dispatch_command, CatalogService};
use dioxus::prelude::*;
use roster_common::CatalogCommand;
use roster_ui::stores::CatalogUiState;
use roster_ui::CatalogView;

#[component]
pub fn CatalogPage() -> Element {
    let service: Signal<CatalogService> = use_context();
    let state: Store<CatalogUiState> = use_context();

    rsx! {
        CatalogView {
            state,
            on_command: move |command: CatalogCommand| dispatch_command(service, command),
        }
    }
}
