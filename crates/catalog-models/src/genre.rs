use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::ValidationError;

/// A movie genre as served by the catalog API.
///
/// The backend is Mongo-flavoured and sends `_id`; older fixtures use `id`.
/// Both are accepted, `id` is what gets written back out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Genre {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

impl Genre {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingId { kind: "genre" });
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                kind: "genre",
                id: self.id.clone(),
                field: "name",
            });
        }
        Ok(())
    }

    /// Case-insensitive match on either the id or the display name.
    pub fn matches_key(&self, key: &str) -> bool {
        let key = key.trim();
        self.id == key || self.name.to_lowercase() == key.to_lowercase()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mongo_id() {
        let genre: Genre = serde_json::from_str(r#"{"_id":"5b21","name":"Action","__v":0}"#).unwrap();
        assert_eq!(genre.id, "5b21");
        assert_eq!(genre.name, "Action");
    }

    #[test]
    fn test_matches_key() {
        let genre = Genre::new("g1", "Science Fiction");
        assert!(genre.matches_key("g1"));
        assert!(genre.matches_key("science fiction"));
        assert!(genre.matches_key("  SCIENCE FICTION "));
        assert!(!genre.matches_key("science"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let genre = Genre::new("g1", "   ");
        assert!(matches!(
            genre.validate(),
            Err(ValidationError::EmptyField { field: "name", .. })
        ));
        assert!(Genre::new("", "Drama").validate().is_err());
        assert!(Genre::new("g2", "Drama").validate().is_ok());
    }
}
