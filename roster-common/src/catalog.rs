//! Catalog controller - section switching and favorites management
//!
//! [`Catalog`] owns all mutable catalog state: the favorites list, the active
//! section, the records of the current render and the display state. Every
//! change goes through one of its methods, and network work is returned to
//! the caller as a [`FetchRequest`] instead of being performed here.

use crate::character::{Character, FavoriteAction};
use crate::config::CatalogConfig;
use crate::error::FetchError;
use crate::favorites::{AddOutcome, FavoritesList, RemoveOutcome};
use crate::notification::{Notification, Notifier, NotifyOverrides, Severity};
use crate::persistence::{FavoritesStore, KeyValueStore};
use crate::section::Section;
use crate::view::{build_cards, CharacterCardView, DisplayState};
use tracing::{debug, error, info, warn};

/// A fetch the caller has to run and report back through [`Catalog::finish_fetch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Increases with every fetch issued by a catalog
    pub token: u64,
    pub section: Section,
    /// `status` query parameter, `None` for the unfiltered listing
    pub status: Option<&'static str>,
}

/// What a section change needs from the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLoad {
    /// Rendered from local data, nothing left to do
    Rendered,
    Fetch(FetchRequest),
}

/// Whether a fetch result made it to the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    Applied,
    /// A newer section change superseded the request
    Stale,
}

/// How the view changed after a favorite toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRefresh {
    /// Favorites section: the grid was rebuilt from the favorites list
    Rerendered,
    /// Only the toggle of this card changed
    Patched(i64),
    /// Click referred to a record that is not on screen
    Ignored,
}

pub struct Catalog<S> {
    config: CatalogConfig,
    storage: FavoritesStore<S>,
    favorites: FavoritesList,
    section: Section,
    display: DisplayState,
    /// Records of the current render, addressable by id
    visible: Vec<Character>,
    last_token: u64,
    pending_token: Option<u64>,
}

impl<S: KeyValueStore> Catalog<S> {
    /// Create an idle catalog with no favorites loaded
    pub fn new(config: CatalogConfig, store: S) -> Self {
        let storage = FavoritesStore::new(store, &config);
        Self {
            config,
            storage,
            favorites: FavoritesList::new(),
            section: Section::default(),
            display: DisplayState::default(),
            visible: Vec::new(),
            last_token: 0,
            pending_token: None,
        }
    }

    /// Startup: load favorites and the last section, then enter that section.
    pub fn start(
        config: CatalogConfig,
        store: S,
        notifier: &mut impl Notifier,
    ) -> (Self, SectionLoad) {
        let mut catalog = Self::new(config, store);
        let load = catalog.restore(notifier);
        (catalog, load)
    }

    /// Load favorites and re-enter the section saved by the previous session.
    pub fn restore(&mut self, notifier: &mut impl Notifier) -> SectionLoad {
        self.load_favorites(notifier);
        let section = self.storage.load_last_section();
        info!("Restoring section '{section}'");
        self.change_section(section)
    }

    /// Replace the in-memory favorites with what storage holds.
    ///
    /// Corrupt data resets the list to empty and raises a toast that stays
    /// until the user confirms it.
    pub fn load_favorites(&mut self, notifier: &mut impl Notifier) {
        match self.storage.load_favorites() {
            Ok(stored) => {
                self.favorites = FavoritesList::from_vec(stored);
                info!("Loaded {} favorites", self.favorites.len());
            }
            Err(e) => {
                error!("Error loading favorites from local storage: {e}");
                self.favorites = FavoritesList::new();
                notifier.notify(
                    self.notification(
                        "Error",
                        "There was a problem loading your favorites.",
                        Severity::Error,
                    )
                    .with_overrides(NotifyOverrides::persistent()),
                );
            }
        }
    }

    /// Switch to `section`, persist it, and either render favorites or ask
    /// the caller to fetch.
    pub fn change_section(&mut self, section: Section) -> SectionLoad {
        debug!("Changing section to '{section}'");
        self.section = section;
        self.storage.save_last_section(section);

        if !section.is_remote() {
            self.pending_token = None;
            let favorites = self.favorites.to_vec();
            self.render(favorites);
            return SectionLoad::Rendered;
        }

        self.last_token += 1;
        self.pending_token = Some(self.last_token);
        self.visible.clear();
        self.set_display_state(DisplayState::Loading);

        SectionLoad::Fetch(FetchRequest {
            token: self.last_token,
            section,
            status: section.status_filter(),
        })
    }

    /// Apply the outcome of a fetch started by [`Catalog::change_section`].
    pub fn finish_fetch(
        &mut self,
        token: u64,
        result: Result<Vec<Character>, FetchError>,
    ) -> FetchApplied {
        if self.pending_token != Some(token) {
            debug!("Dropping stale response for request {token}");
            return FetchApplied::Stale;
        }
        self.pending_token = None;

        match result {
            Ok(characters) => self.render(characters),
            Err(e) => {
                if e.is_network() {
                    error!("Error loading characters: {e}");
                } else {
                    error!("Unreadable character listing: {e}");
                }
                self.visible.clear();
                self.set_display_state(DisplayState::Error);
            }
        }
        FetchApplied::Applied
    }

    /// Replace the visible records. Empty input shows the empty banner.
    pub fn render(&mut self, characters: Vec<Character>) {
        self.visible = characters;
        if self.visible.is_empty() {
            self.set_display_state(DisplayState::Empty);
        } else {
            self.set_display_state(DisplayState::Populated);
        }
    }

    pub fn set_display_state(&mut self, state: DisplayState) {
        self.display = state;
    }

    /// Add or remove `character`, persist, notify, and refresh the view.
    pub fn toggle_favorite(
        &mut self,
        character: Character,
        action: FavoriteAction,
        notifier: &mut impl Notifier,
    ) -> ToggleRefresh {
        let id = character.id;
        match action {
            FavoriteAction::Add => {
                let name = character.name.clone();
                match self.favorites.add(character) {
                    AddOutcome::Added => {
                        self.storage.save_favorites(self.favorites.as_slice());
                        notifier.notify(self.notification(
                            "Added!",
                            format!("{name} was added to favorites."),
                            Severity::Success,
                        ));
                    }
                    AddOutcome::AlreadyPresent => {
                        notifier.notify(self.notification(
                            "Already a favorite!",
                            format!("{name} is already in your list."),
                            Severity::Warning,
                        ));
                    }
                }
            }
            FavoriteAction::Remove => match self.favorites.remove(id) {
                RemoveOutcome::Removed(removed) => {
                    self.storage.save_favorites(self.favorites.as_slice());
                    notifier.notify(self.notification(
                        "Removed!",
                        format!("{} was removed from favorites.", removed.name),
                        Severity::Info,
                    ));
                }
                RemoveOutcome::NotPresent => {
                    debug!("Character {id} is not a favorite, nothing to remove");
                }
            },
        }

        if self.section == Section::Favorites {
            let favorites = self.favorites.to_vec();
            self.render(favorites);
            ToggleRefresh::Rerendered
        } else {
            ToggleRefresh::Patched(id)
        }
    }

    /// Toggle the card with `id` from the current render.
    ///
    /// The record comes from the current render, or from favorites if it was
    /// saved earlier. Unknown ids are ignored.
    pub fn toggle_by_id(
        &mut self,
        id: i64,
        action: FavoriteAction,
        notifier: &mut impl Notifier,
    ) -> ToggleRefresh {
        let record = self
            .favorites
            .get(id)
            .or_else(|| self.visible.iter().find(|c| c.id == id))
            .cloned();

        match record {
            Some(character) => self.toggle_favorite(character, action, notifier),
            None => {
                warn!("Toggle for character {id} which is not on screen");
                ToggleRefresh::Ignored
            }
        }
    }

    /// Cards for the current render, in order
    pub fn cards(&self) -> Vec<CharacterCardView> {
        build_cards(&self.visible, &self.favorites)
    }

    /// Card for one record of the current render
    pub fn card(&self, id: i64) -> Option<CharacterCardView> {
        self.visible
            .iter()
            .find(|c| c.id == id)
            .map(|c| CharacterCardView::new(c.clone(), &self.favorites))
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn display_state(&self) -> DisplayState {
        self.display
    }

    pub fn favorites(&self) -> &FavoritesList {
        &self.favorites
    }

    pub fn visible(&self) -> &[Character] {
        &self.visible
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn storage(&self) -> &FavoritesStore<S> {
        &self.storage
    }

    fn notification(
        &self,
        title: &str,
        message: impl Into<String>,
        severity: Severity,
    ) -> Notification {
        Notification::new(title, message, severity, self.config.toast_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn character(id: i64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
            status: "Alive".to_string(),
            species: "Human".to_string(),
        }
    }

    fn catalog() -> Catalog<MemoryStore> {
        Catalog::new(CatalogConfig::default(), MemoryStore::new())
    }

    fn fetch_token(load: SectionLoad) -> u64 {
        match load {
            SectionLoad::Fetch(request) => request.token,
            SectionLoad::Rendered => panic!("expected a fetch"),
        }
    }

    #[test]
    fn test_render_empty_shows_empty_state() {
        let mut catalog = catalog();
        catalog.render(vec![]);
        assert_eq!(catalog.display_state(), DisplayState::Empty);
        assert!(catalog.cards().is_empty());
    }

    #[test]
    fn test_render_marks_favorites() {
        let mut catalog = catalog();
        let mut notes = Vec::new();
        catalog.toggle_favorite(character(2, "Morty"), FavoriteAction::Add, &mut notes);

        catalog.render(vec![
            character(1, "Rick"),
            character(2, "Morty"),
            character(3, "Summer"),
        ]);

        let cards = catalog.cards();
        assert_eq!(catalog.display_state(), DisplayState::Populated);
        assert_eq!(cards.len(), 3);
        for card in cards {
            let expected = if card.character.id == 2 {
                FavoriteAction::Remove
            } else {
                FavoriteAction::Add
            };
            assert_eq!(card.toggle.action, expected);
        }
    }

    #[test]
    fn test_remote_section_goes_loading() {
        let mut catalog = catalog();
        catalog.render(vec![character(1, "Rick")]);

        let load = catalog.change_section(Section::Alive);
        assert_eq!(
            load,
            SectionLoad::Fetch(FetchRequest {
                token: 1,
                section: Section::Alive,
                status: Some("Alive"),
            })
        );
        assert_eq!(catalog.display_state(), DisplayState::Loading);
        assert!(catalog.visible().is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut catalog = catalog();
        let first = fetch_token(catalog.change_section(Section::Alive));
        let second = fetch_token(catalog.change_section(Section::Dead));
        assert!(second > first);

        assert_eq!(
            catalog.finish_fetch(first, Ok(vec![character(1, "Rick")])),
            FetchApplied::Stale
        );
        assert_eq!(catalog.display_state(), DisplayState::Loading);

        assert_eq!(
            catalog.finish_fetch(second, Ok(vec![character(8, "Adjudicator Rick")])),
            FetchApplied::Applied
        );
        assert_eq!(catalog.visible()[0].id, 8);
    }

    #[test]
    fn test_response_after_switching_to_favorites_is_dropped() {
        let mut catalog = catalog();
        let token = fetch_token(catalog.change_section(Section::All));
        assert_eq!(catalog.change_section(Section::Favorites), SectionLoad::Rendered);

        assert_eq!(
            catalog.finish_fetch(token, Ok(vec![character(1, "Rick")])),
            FetchApplied::Stale
        );
        assert_eq!(catalog.display_state(), DisplayState::Empty);
    }

    #[test]
    fn test_toggle_outside_favorites_patches_card() {
        let mut catalog = catalog();
        let token = fetch_token(catalog.change_section(Section::All));
        catalog.finish_fetch(token, Ok(vec![character(1, "Rick"), character(2, "Morty")]));

        let mut notes = Vec::new();
        let refresh = catalog.toggle_by_id(1, FavoriteAction::Add, &mut notes);

        assert_eq!(refresh, ToggleRefresh::Patched(1));
        assert_eq!(catalog.visible().len(), 2);
        assert_eq!(catalog.display_state(), DisplayState::Populated);
        assert_eq!(catalog.card(1).unwrap().toggle.action, FavoriteAction::Remove);
        assert_eq!(catalog.card(2).unwrap().toggle.action, FavoriteAction::Add);
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let mut catalog = catalog();
        let mut notes = Vec::new();
        assert_eq!(
            catalog.toggle_by_id(99, FavoriteAction::Add, &mut notes),
            ToggleRefresh::Ignored
        );
        assert!(notes.is_empty());
        assert!(catalog.favorites().is_empty());
    }

    #[test]
    fn test_removing_last_favorite_in_favorites_section_shows_empty() {
        let mut catalog = catalog();
        let mut notes = Vec::new();
        catalog.toggle_favorite(character(1, "Rick"), FavoriteAction::Add, &mut notes);
        catalog.change_section(Section::Favorites);
        assert_eq!(catalog.display_state(), DisplayState::Populated);

        let refresh = catalog.toggle_by_id(1, FavoriteAction::Remove, &mut notes);
        assert_eq!(refresh, ToggleRefresh::Rerendered);
        assert_eq!(catalog.display_state(), DisplayState::Empty);
        assert!(catalog.cards().is_empty());
    }
}
