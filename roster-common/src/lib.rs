//! roster-common - Pure catalog state and decision logic
//!
//! Holds the character model, the favorites list, section switching and the
//! persistence/notification seams. Nothing in here performs I/O directly:
//! storage goes through [`KeyValueStore`], toasts through [`Notifier`], and
//! network fetches are handed back to the caller as a [`FetchRequest`].

pub mod catalog;
pub mod character;
pub mod command;
pub mod config;
pub mod error;
pub mod favorites;
pub mod notification;
pub mod page;
pub mod persistence;
pub mod section;
pub mod view;

pub use catalog::{Catalog, FetchApplied, FetchRequest, SectionLoad, ToggleRefresh};
pub use character::{Character, FavoriteAction};
pub use command::{CatalogCommand, CommandOutcome};
pub use config::CatalogConfig;
pub use error::{FetchError, StorageError};
pub use favorites::{AddOutcome, FavoritesList, RemoveOutcome};
pub use notification::{Notification, Notifier, NotifyOverrides, Severity, Toast, ToastQueue};
pub use page::{parse_character_page, CharacterPage};
pub use persistence::{FavoritesStore, KeyValueStore, MemoryStore};
pub use section::Section;
pub use view::{CharacterCardView, DisplayState, ToggleControl};
