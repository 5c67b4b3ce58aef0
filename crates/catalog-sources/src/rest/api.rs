use catalog_models::{Genre, Movie, ValidationError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SourceError;

/// Longest error body we keep from a failed response.
const MAX_ERROR_BODY: usize = 512;

/// Genre as sent on the wire. Missing fields decode to empty strings so the
/// validation step can name the problem instead of serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiGenre {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMovie {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub genre: ApiGenre,
    #[serde(default)]
    pub number_in_stock: Option<i64>,
    #[serde(default)]
    pub daily_rental_rate: Option<f64>,
}

impl TryFrom<ApiGenre> for Genre {
    type Error = ValidationError;

    fn try_from(api: ApiGenre) -> Result<Self, Self::Error> {
        let genre = Genre::new(api.id, api.name);
        genre.validate()?;
        Ok(genre)
    }
}

impl TryFrom<ApiMovie> for Movie {
    type Error = ValidationError;

    fn try_from(api: ApiMovie) -> Result<Self, Self::Error> {
        let missing = |field: &'static str| ValidationError::MissingField {
            kind: "movie",
            id: api.id.clone(),
            field,
        };
        let stock = api.number_in_stock.ok_or_else(|| missing("numberInStock"))?;
        let daily_rental_rate = api.daily_rental_rate.ok_or_else(|| missing("dailyRentalRate"))?;

        if stock < 0 {
            return Err(ValidationError::Negative {
                kind: "movie",
                id: api.id,
                field: "numberInStock",
                value: stock as f64,
            });
        }
        let number_in_stock = u32::try_from(stock).map_err(|_| ValidationError::OutOfRange {
            kind: "movie",
            id: api.id.clone(),
            field: "numberInStock",
            value: stock,
        })?;

        let movie = Movie {
            id: api.id,
            title: api.title,
            genre: Genre::new(api.genre.id, api.genre.name),
            number_in_stock,
            daily_rental_rate,
        };
        movie.validate()?;
        Ok(movie)
    }
}

/// GET a JSON array from `url` and decode it into wire records.
pub async fn fetch_collection<T: DeserializeOwned>(client: &Client, url: &str) -> Result<Vec<T>, SourceError> {
    debug!(operation = "fetch_collection", url, "Requesting collection");

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| SourceError::from_reqwest(url, e))?;

    if !response.status().is_success() {
        let status = response.status();
        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        warn!(operation = "fetch_collection", url, status = status.as_u16(), "Unexpected response status");
        return Err(SourceError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| SourceError::from_reqwest(url, e))?;

    serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse {
        url: url.to_string(),
        message: e.to_string(),
    })
}

pub async fn get_movies(client: &Client, url: &str) -> Result<Vec<Movie>, SourceError> {
    let records: Vec<ApiMovie> = fetch_collection(client, url).await?;
    let movies = records
        .into_iter()
        .map(Movie::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(operation = "get_movies", count = movies.len(), "Decoded movies");
    Ok(movies)
}

pub async fn get_genres(client: &Client, url: &str) -> Result<Vec<Genre>, SourceError> {
    let records: Vec<ApiGenre> = fetch_collection(client, url).await?;
    let genres = records
        .into_iter()
        .map(Genre::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(operation = "get_genres", count = genres.len(), "Decoded genres");
    Ok(genres)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_movie(stock: i64, rate: f64) -> ApiMovie {
        ApiMovie {
            id: "m1".to_string(),
            title: "Airplane".to_string(),
            genre: ApiGenre {
                id: "g3".to_string(),
                name: "Comedy".to_string(),
            },
            number_in_stock: Some(stock),
            daily_rental_rate: Some(rate),
        }
    }

    #[test]
    fn test_movie_conversion() {
        let movie = Movie::try_from(api_movie(7, 3.5)).unwrap();
        assert_eq!(movie.number_in_stock, 7);
        assert_eq!(movie.genre.name, "Comedy");
    }

    #[test]
    fn test_negative_stock_rejected() {
        let err = Movie::try_from(api_movie(-2, 3.5)).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { field: "numberInStock", .. }));
    }

    #[test]
    fn test_huge_stock_rejected() {
        let err = Movie::try_from(api_movie(i64::MAX, 3.5)).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_missing_id_reported_by_validation() {
        let api: ApiGenre = serde_json::from_str(r#"{"name":"Thriller"}"#).unwrap();
        assert_eq!(Genre::try_from(api).unwrap_err(), ValidationError::MissingId { kind: "genre" });
    }

    #[test]
    fn test_missing_stock_and_rate_rejected() {
        let api: ApiMovie =
            serde_json::from_str(r#"{"_id":"m1","title":"Heat","genre":{"_id":"g1","name":"Action"}}"#).unwrap();
        assert_eq!(
            Movie::try_from(api).unwrap_err(),
            ValidationError::MissingField {
                kind: "movie",
                id: "m1".to_string(),
                field: "numberInStock",
            }
        );

        let api: ApiMovie = serde_json::from_str(
            r#"{"_id":"m1","title":"Heat","genre":{"_id":"g1","name":"Action"},"numberInStock":4}"#,
        )
        .unwrap();
        assert!(matches!(
            Movie::try_from(api),
            Err(ValidationError::MissingField { field: "dailyRentalRate", .. })
        ));
    }

    #[test]
    fn test_null_stock_rejected() {
        let api: ApiMovie = serde_json::from_str(
            r#"{"_id":"m1","title":"Heat","genre":{"_id":"g1","name":"Action"},"numberInStock":null,"dailyRentalRate":2}"#,
        )
        .unwrap();
        assert!(matches!(
            Movie::try_from(api),
            Err(ValidationError::MissingField { field: "numberInStock", .. })
        ));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let api: ApiMovie = serde_json::from_str(
            r#"{"_id":"m9","title":"Up","genre":{"_id":"g1","name":"Animation"},"numberInStock":1,"dailyRentalRate":1,"liked":true,"__v":0}"#,
        )
        .unwrap();
        let movie = Movie::try_from(api).unwrap();
        assert_eq!(movie.daily_rental_rate, 1.0);
    }
}
