//! User commands routed to the catalog
//!
//! Navigation buttons and card toggles all produce a [`CatalogCommand`]; the
//! view layer never decides what a click means beyond building one.

use crate::catalog::{Catalog, FetchRequest, SectionLoad, ToggleRefresh};
use crate::character::FavoriteAction;
use crate::notification::Notifier;
use crate::persistence::KeyValueStore;
use crate::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogCommand {
    ChangeSection(Section),
    ToggleFavorite { id: i64, action: FavoriteAction },
}

/// Follow-up work after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Done,
    Fetch(FetchRequest),
    /// A favorite toggle ran; tells the caller how much of the view changed
    Toggled(ToggleRefresh),
}

impl<S: KeyValueStore> Catalog<S> {
    pub fn dispatch(
        &mut self,
        command: CatalogCommand,
        notifier: &mut impl Notifier,
    ) -> CommandOutcome {
        match command {
            CatalogCommand::ChangeSection(section) => match self.change_section(section) {
                SectionLoad::Fetch(request) => CommandOutcome::Fetch(request),
                SectionLoad::Rendered => CommandOutcome::Done,
            },
            CatalogCommand::ToggleFavorite { id, action } => {
                CommandOutcome::Toggled(self.toggle_by_id(id, action, notifier))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;
    use crate::config::CatalogConfig;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_dispatch_section_change() {
        let mut catalog = Catalog::new(CatalogConfig::default(), MemoryStore::new());
        let mut notes = Vec::new();

        let outcome = catalog.dispatch(CatalogCommand::ChangeSection(Section::Dead), &mut notes);
        assert!(matches!(
            outcome,
            CommandOutcome::Fetch(FetchRequest {
                status: Some("Dead"),
                ..
            })
        ));

        let outcome =
            catalog.dispatch(CatalogCommand::ChangeSection(Section::Favorites), &mut notes);
        assert_eq!(outcome, CommandOutcome::Done);
        assert_eq!(catalog.section(), Section::Favorites);
    }

    #[test]
    fn test_dispatch_toggle_reports_refresh() {
        let mut catalog = Catalog::new(CatalogConfig::default(), MemoryStore::new());
        let mut notes = Vec::new();
        let CommandOutcome::Fetch(request) =
            catalog.dispatch(CatalogCommand::ChangeSection(Section::Alive), &mut notes)
        else {
            panic!("expected a fetch");
        };
        catalog.finish_fetch(
            request.token,
            Ok(vec![Character {
                id: 1,
                name: "Rick Sanchez".to_string(),
                image: "https://rickandmortyapi.com/api/character/avatar/1.jpeg".to_string(),
                status: "Alive".to_string(),
                species: "Human".to_string(),
            }]),
        );

        let add = CatalogCommand::ToggleFavorite {
            id: 1,
            action: FavoriteAction::Add,
        };
        assert_eq!(
            catalog.dispatch(add, &mut notes),
            CommandOutcome::Toggled(ToggleRefresh::Patched(1))
        );
        assert_eq!(
            catalog.card(1).map(|card| card.toggle.action),
            Some(FavoriteAction::Remove)
        );

        let unknown = CatalogCommand::ToggleFavorite {
            id: 99,
            action: FavoriteAction::Add,
        };
        assert_eq!(
            catalog.dispatch(unknown, &mut notes),
            CommandOutcome::Toggled(ToggleRefresh::Ignored)
        );

        catalog.dispatch(CatalogCommand::ChangeSection(Section::Favorites), &mut notes);
        let remove = CatalogCommand::ToggleFavorite {
            id: 1,
            action: FavoriteAction::Remove,
        };
        assert_eq!(
            catalog.dispatch(remove, &mut notes),
            CommandOutcome::Toggled(ToggleRefresh::Rerendered)
        );
    }
}
