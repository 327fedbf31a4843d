use crate::service::{run_fetch, CatalogService};
use crate::Route;
use dioxus::prelude::*;
use roster_common::{CatalogConfig, SectionLoad};
use roster_ui::stores::{CatalogUiState, ToastState, ToastStateStoreExt};
use roster_ui::ToastStackView;

/// Owns the catalog service for the whole app and draws the toast stack.
#[component]
pub fn AppLayout() -> Element {
    let config = use_context_provider(CatalogConfig::default);
    let catalog_store = use_store(CatalogUiState::default);
    use_context_provider(|| catalog_store);
    let toast_store = use_store(ToastState::default);

    let mut service = use_context_provider(|| {
        Signal::new(CatalogService::new(config, catalog_store, toast_store))
    });

    use_hook(move || {
        spawn(async move {
            let load = service.write().restore();
            if let SectionLoad::Fetch(request) = load {
                run_fetch(service, request).await;
            }
        });
    });

    let toasts = toast_store.toasts().read().clone();

    rsx! {
        div { class: "flex flex-col min-h-screen",
            header { class: "border-b border-gray-800 px-6 py-4",
                p { class: "text-sm uppercase tracking-widest text-teal-400", "Roster" }
            }
            Outlet::<Route> {}
        }
        ToastStackView {
            toasts,
            on_dismiss: move |id: u64| service.write().dismiss_toast(id),
        }
    }
}
