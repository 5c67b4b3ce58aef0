use async_trait::async_trait;
use catalog_models::{Genre, Movie};

use crate::error::SourceError;

/// A backend that serves the full movie and genre collections.
///
/// Both reads are whole-collection reads: no paging, filtering or query
/// parameters are sent. Filtering happens client-side.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn source_name(&self) -> &str;

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError>;
    async fn fetch_genres(&self) -> Result<Vec<Genre>, SourceError>;
}
