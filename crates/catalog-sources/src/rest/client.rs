use async_trait::async_trait;
use catalog_config::ApiConfig;
use catalog_models::{Genre, Movie};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::error::SourceError;
use crate::rest::api;
use crate::traits::CatalogSource;

/// Reads the catalog from the REST backend.
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: Arc<Client>,
    movies_url: String,
    genres_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(concat!("vidly/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| SourceError::Unavailable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client: Arc::new(client),
            movies_url: config.movies_url(),
            genres_url: config.genres_url(),
        }
    }

    pub fn movies_url(&self) -> &str {
        &self.movies_url
    }

    pub fn genres_url(&self) -> &str {
        &self.genres_url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    fn source_name(&self) -> &str {
        "http"
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError> {
        let movies = api::get_movies(&self.client, &self.movies_url).await?;
        info!(operation = "fetch_movies", count = movies.len(), url = %self.movies_url, "Fetched movies");
        Ok(movies)
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, SourceError> {
        let genres = api::get_genres(&self.client, &self.genres_url).await?;
        info!(operation = "fetch_genres", count = genres.len(), url = %self.genres_url, "Fetched genres");
        Ok(genres)
    }
}
