pub mod api;
pub mod client;

pub use api::{ApiGenre, ApiMovie};
pub use client::HttpCatalogClient;
