//! Durable favorites and last-section persistence
//!
//! Values are strings under two fixed keys: the favorites list as a JSON
//! array and the last section as its plain name. Missing data falls back to
//! defaults; corrupt favorites surface as [`StorageError::CorruptFavorites`]
//! so the caller can tell the user.

use crate::character::Character;
use crate::config::CatalogConfig;
use crate::error::StorageError;
use crate::section::Section;
use std::collections::HashMap;
use tracing::{debug, warn};

/// String key-value store, e.g. browser `localStorage`
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and environments without local storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Favorites and section persistence over a [`KeyValueStore`]
pub struct FavoritesStore<S> {
    store: S,
    favorites_key: String,
    last_section_key: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S, config: &CatalogConfig) -> Self {
        Self {
            store,
            favorites_key: config.favorites_key.clone(),
            last_section_key: config.last_section_key.clone(),
        }
    }

    /// Underlying store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Stored favorites. An absent or blank value is an empty list.
    pub fn load_favorites(&self) -> Result<Vec<Character>, StorageError> {
        let Some(raw) = self.store.get_item(&self.favorites_key) else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|e| StorageError::CorruptFavorites(e.to_string()))
    }

    /// Replace the stored favorites with `favorites`. Failures are logged only.
    pub fn save_favorites(&mut self, favorites: &[Character]) {
        let json = match serde_json::to_string(favorites) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize favorites: {e}");
                return;
            }
        };
        match self.store.set_item(&self.favorites_key, &json) {
            Ok(()) => debug!("Saved {} favorites", favorites.len()),
            Err(e) => warn!("Failed to save favorites: {e}"),
        }
    }

    pub fn load_last_section(&self) -> Section {
        let Some(raw) = self.store.get_item(&self.last_section_key) else {
            return Section::default();
        };
        raw.parse().unwrap_or_else(|e| {
            warn!("Ignoring stored section: {e}");
            Section::default()
        })
    }

    pub fn save_last_section(&mut self, section: Section) {
        if let Err(e) = self
            .store
            .set_item(&self.last_section_key, section.as_str())
        {
            warn!("Failed to save last section: {e}");
        }
    }
}
