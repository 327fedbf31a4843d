use crate::character::{Character, FavoriteAction};
use crate::favorites::FavoritesList;

/// Which of the loading/error/empty banners or the card grid is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayState {
    #[default]
    Loading,
    Error,
    Empty,
    Populated,
}

/// Favorite toggle shown on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    pub action: FavoriteAction,
    pub label: &'static str,
    pub is_favorite: bool,
}

impl ToggleControl {
    pub fn for_membership(is_favorite: bool) -> Self {
        Self {
            action: FavoriteAction::for_membership(is_favorite),
            label: if is_favorite {
                "Remove from favorites"
            } else {
                "Add to favorites"
            },
            is_favorite,
        }
    }
}

/// Everything a card needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCardView {
    pub character: Character,
    pub toggle: ToggleControl,
}

impl CharacterCardView {
    pub fn new(character: Character, favorites: &FavoritesList) -> Self {
        let toggle = ToggleControl::for_membership(favorites.contains(character.id));
        Self { character, toggle }
    }
}

/// Build the card batch for `characters`, marking favorites by id.
pub fn build_cards(characters: &[Character], favorites: &FavoritesList) -> Vec<CharacterCardView> {
    characters
        .iter()
        .map(|c| CharacterCardView::new(c.clone(), favorites))
        .collect()
}
