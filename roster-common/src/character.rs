use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A character record as returned by the character API.
///
/// Only these five fields are kept; everything else in the API object is
/// dropped on deserialization, so this is also the shape stored in favorites.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    /// "Alive", "Dead" or "unknown"
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
}

/// What a card's favorite toggle does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteAction {
    Add,
    Remove,
}

impl FavoriteAction {
    /// Action a toggle should carry given current membership
    pub fn for_membership(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteAction::Remove
        } else {
            FavoriteAction::Add
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteAction::Add => "add",
            FavoriteAction::Remove => "remove",
        }
    }
}

impl fmt::Display for FavoriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(FavoriteAction::Add),
            "remove" => Ok(FavoriteAction::Remove),
            other => Err(format!("unknown favorite action: {other}")),
        }
    }
}
