use serde::{Deserialize, Serialize};

use crate::genre::Genre;
use crate::validation::ValidationError;

/// A rentable movie. `genre` is denormalized: the API embeds `{id, name}`
/// rather than a bare reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub number_in_stock: u32,
    pub daily_rental_rate: f64,
}

impl Movie {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingId { kind: "movie" });
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                kind: "movie",
                id: self.id.clone(),
                field: "title",
            });
        }
        if !self.daily_rental_rate.is_finite() {
            return Err(ValidationError::NotFinite {
                kind: "movie",
                id: self.id.clone(),
                field: "dailyRentalRate",
            });
        }
        if self.daily_rental_rate < 0.0 {
            return Err(ValidationError::Negative {
                kind: "movie",
                id: self.id.clone(),
                field: "dailyRentalRate",
                value: self.daily_rental_rate,
            });
        }
        self.genre.validate()
    }

    pub fn genre_name(&self) -> &str {
        &self.genre.name
    }

    /// Lower-cased substring match against the title. An empty query matches everything.
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}
