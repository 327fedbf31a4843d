use crate::api;
use crate::storage::LocalStorage;
use dioxus::prelude::*;
use roster_common::{
    Catalog, CatalogCommand, CatalogConfig, Character, CommandOutcome, FetchApplied, FetchError,
    FetchRequest, SectionLoad, ToastQueue, ToggleRefresh,
};
use roster_ui::stores::{CatalogUiState, CatalogUiStateStoreExt, ToastState, ToastStateStoreExt};
use tracing::debug;

/// Web catalog service: owns the catalog controller and the toast queue, and
/// mirrors both into the UI stores after every change.
pub struct CatalogService {
    catalog: Catalog<LocalStorage>,
    toasts: ToastQueue,
    store: Store<CatalogUiState>,
    toast_store: Store<ToastState>,
}

impl CatalogService {
    pub fn new(
        config: CatalogConfig,
        store: Store<CatalogUiState>,
        toast_store: Store<ToastState>,
    ) -> Self {
        Self {
            catalog: Catalog::new(config, LocalStorage),
            toasts: ToastQueue::new(),
            store,
            toast_store,
        }
    }

    /// Load favorites and the last section from local storage
    pub fn restore(&mut self) -> SectionLoad {
        let load = self.catalog.restore(&mut self.toasts);
        self.sync_catalog_to_store();
        self.sync_toasts_to_store();
        load
    }

    pub fn dispatch(&mut self, command: CatalogCommand) -> CommandOutcome {
        let outcome = self.catalog.dispatch(command, &mut self.toasts);
        match outcome {
            CommandOutcome::Toggled(ToggleRefresh::Patched(id)) => self.sync_card_to_store(id),
            CommandOutcome::Toggled(ToggleRefresh::Ignored) => {}
            _ => self.sync_catalog_to_store(),
        }
        self.sync_toasts_to_store();
        outcome
    }

    pub fn finish_fetch(&mut self, token: u64, result: Result<Vec<Character>, FetchError>) {
        if self.catalog.finish_fetch(token, result) == FetchApplied::Applied {
            self.sync_catalog_to_store();
        }
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        if self.toasts.dismiss(id) {
            self.sync_toasts_to_store();
        }
    }

    pub fn api_base_url(&self) -> String {
        self.catalog.config().api_base_url.clone()
    }

    fn sync_catalog_to_store(&self) {
        self.store.section().set(self.catalog.section());
        self.store.display().set(self.catalog.display_state());
        self.store.cards().set(self.catalog.cards());
    }

    /// Replace a single card in place, leaving the rest of the grid untouched
    fn sync_card_to_store(&self, id: i64) {
        let Some(card) = self.catalog.card(id) else {
            return;
        };
        self.store.cards().with_mut(|cards| {
            if let Some(slot) = cards.iter_mut().find(|c| c.character.id == id) {
                *slot = card;
            }
        });
    }

    fn sync_toasts_to_store(&self) {
        self.toast_store
            .toasts()
            .set(self.toasts.toasts().to_vec());
    }
}

/// Run a fetch issued by the catalog and hand the result back to it
pub async fn run_fetch(mut service: Signal<CatalogService>, request: FetchRequest) {
    let base_url = service.read().api_base_url();
    debug!(
        "Loading section '{}' (request {})",
        request.section, request.token
    );
    let result = api::fetch_characters(&base_url, request.status).await;
    service.write().finish_fetch(request.token, result);
}

/// Dispatch a command and start the fetch it asks for, if any
pub fn dispatch_command(mut service: Signal<CatalogService>, command: CatalogCommand) {
    let outcome = service.write().dispatch(command);
    if let CommandOutcome::Fetch(request) = outcome {
        spawn(run_fetch(service, request));
    }
}
