use std::fmt;
use std::str::FromStr;

/// Top-level view the user can navigate between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    All,
    Alive,
    Dead,
    Favorites,
}

impl Section {
    /// Navigation order
    pub const ALL: [Section; 4] = [
        Section::All,
        Section::Alive,
        Section::Dead,
        Section::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::All => "all",
            Section::Alive => "alive",
            Section::Dead => "dead",
            Section::Favorites => "favorites",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::All => "All",
            Section::Alive => "Alive",
            Section::Dead => "Dead",
            Section::Favorites => "Favorites",
        }
    }

    /// Value of the `status` query parameter for this section.
    ///
    /// `None` for `All` (no filter) and for `Favorites`, which never fetches.
    pub fn status_filter(&self) -> Option<&'static str> {
        match self {
            Section::Alive => Some("Alive"),
            Section::Dead => Some("Dead"),
            Section::All | Section::Favorites => None,
        }
    }

    /// Whether entering this section goes to the network
    pub fn is_remote(&self) -> bool {
        !matches!(self, Section::Favorites)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_storage_string() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>(), Ok(section));
        }
        assert!("Alive".parse::<Section>().is_err());
    }

    #[test]
    fn test_status_filters() {
        assert_eq!(Section::All.status_filter(), None);
        assert_eq!(Section::Alive.status_filter(), Some("Alive"));
        assert_eq!(Section::Dead.status_filter(), Some("Dead"));
        assert!(!Section::Favorites.is_remote());
        assert!(Section::All.is_remote());
    }
}
