use serde::{Deserialize, Serialize};
use std::fmt;

use crate::genre::Genre;
use crate::movie::Movie;

/// Label shown for the "no restriction" entry at the top of the genre list.
pub const ALL_GENRES_LABEL: &str = "All Genres";

/// Genre restriction applied to the movie collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum GenreFilter {
    /// No restriction.
    #[default]
    All,
    /// Only movies whose genre name equals this one.
    Genre(String),
}

impl GenreFilter {
    pub fn from_genre(genre: &Genre) -> Self {
        GenreFilter::Genre(genre.name.clone())
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Genre(name) => movie.genre_name() == name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, GenreFilter::All)
    }

    /// Whether a user-typed key names the sentinel rather than a real genre.
    pub fn is_all_key(key: &str) -> bool {
        let key = key.trim();
        key.is_empty() || key.eq_ignore_ascii_case("all") || key.eq_ignore_ascii_case(ALL_GENRES_LABEL)
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => write!(f, "{}", ALL_GENRES_LABEL),
            GenreFilter::Genre(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys() {
        assert!(GenreFilter::is_all_key("all"));
        assert!(GenreFilter::is_all_key("All Genres"));
        assert!(GenreFilter::is_all_key(""));
        assert!(!GenreFilter::is_all_key("Action"));
    }

    #[test]
    fn test_display() {
        assert_eq!(GenreFilter::All.to_string(), "All Genres");
        assert_eq!(GenreFilter::Genre("Drama".into()).to_string(), "Drama");
    }
}
