use crate::character::Character;

/// Result of adding a character to the favorites list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Id was already in the list; nothing changed
    AlreadyPresent,
}

/// Result of removing a character from the favorites list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Character),
    /// Id was not in the list; nothing changed
    NotPresent,
}

/// Ordered favorites list, unique by character id.
///
/// Insertion order is kept; removing shifts later entries left. Lookups are
/// linear scans, the list is hand-curated and stays small.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesList {
    items: Vec<Character>,
}

impl FavoritesList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, keeping the first occurrence of each id.
    pub fn from_vec(characters: Vec<Character>) -> Self {
        let mut list = Self::new();
        for character in characters {
            list.add(character);
        }
        list
    }

    pub fn contains(&self, id: i64) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: i64) -> Option<&Character> {
        self.items.iter().find(|c| c.id == id)
    }

    pub fn add(&mut self, character: Character) -> AddOutcome {
        if self.contains(character.id) {
            return AddOutcome::AlreadyPresent;
        }
        self.items.push(character);
        AddOutcome::Added
    }

    pub fn remove(&mut self, id: i64) -> RemoveOutcome {
        match self.position(id) {
            Some(index) => RemoveOutcome::Removed(self.items.remove(index)),
            None => RemoveOutcome::NotPresent,
        }
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<Character> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|c| c.id == id)
    }
}
