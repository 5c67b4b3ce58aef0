use catalog_config::Config;
use std::sync::Arc;
use tracing::debug;

use crate::error::SourceError;
use crate::rest::HttpCatalogClient;
use crate::traits::CatalogSource;

/// Builds the catalog source described by `config`.
pub fn source_from_config(config: &Config) -> Result<Arc<dyn CatalogSource>, SourceError> {
    let client = HttpCatalogClient::new(&config.api)?;
    debug!(
        movies_url = client.movies_url(),
        genres_url = client.genres_url(),
        timeout_seconds = config.api.timeout_seconds,
        "Created HTTP catalog source"
    );
    Ok(Arc::new(client))
}
