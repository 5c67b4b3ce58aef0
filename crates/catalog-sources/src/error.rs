use catalog_models::ValidationError;
use thiserror::Error;

/// Failure of a single collection read.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    UnexpectedStatus { url: String, status: u16, body: String },

    #[error("could not decode response from {url}: {message}")]
    Parse { url: String, message: String },

    #[error("invalid record: {0}")]
    Invalid(#[from] ValidationError),

    #[error("{0}")]
    Unavailable(String),
}

impl SourceError {
    pub(crate) fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SourceError::Timeout { url: url.to_string() }
        } else {
            SourceError::Http {
                url: url.to_string(),
                source: e,
            }
        }
    }
}
