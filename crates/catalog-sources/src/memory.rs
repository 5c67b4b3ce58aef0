use async_trait::async_trait;
use catalog_models::{Genre, Movie};
use std::time::Duration;

use crate::error::SourceError;
use crate::traits::CatalogSource;

/// In-memory catalog with optional per-collection latency and failures.
///
/// Lets callers drive the loader through slow, failing or out-of-order reads
/// without a server.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    movies: Result<Vec<Movie>, String>,
    genres: Result<Vec<Genre>, String>,
    movies_delay: Duration,
    genres_delay: Duration,
}

impl StaticCatalogSource {
    pub fn new(movies: Vec<Movie>, genres: Vec<Genre>) -> Self {
        Self {
            movies: Ok(movies),
            genres: Ok(genres),
            movies_delay: Duration::ZERO,
            genres_delay: Duration::ZERO,
        }
    }

    pub fn with_movies_delay(mut self, delay: Duration) -> Self {
        self.movies_delay = delay;
        self
    }

    pub fn with_genres_delay(mut self, delay: Duration) -> Self {
        self.genres_delay = delay;
        self
    }

    pub fn failing_movies(mut self, reason: impl Into<String>) -> Self {
        self.movies = Err(reason.into());
        self
    }

    pub fn failing_genres(mut self, reason: impl Into<String>) -> Self {
        self.genres = Err(reason.into());
        self
    }
}

impl Default for StaticCatalogSource {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn source_name(&self) -> &str {
        "static"
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError> {
        if !self.movies_delay.is_zero() {
            tokio::time::sleep(self.movies_delay).await;
        }
        self.movies.clone().map_err(SourceError::Unavailable)
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, SourceError> {
        if !self.genres_delay.is_zero() {
            tokio::time::sleep(self.genres_delay).await;
        }
        self.genres.clone().map_err(SourceError::Unavailable)
    }
}
