pub mod error;
pub mod factory;
pub mod memory;
pub mod rest;
pub mod traits;

pub use error::SourceError;
pub use factory::source_from_config;
pub use memory::StaticCatalogSource;
pub use rest::HttpCatalogClient;
pub use traits::CatalogSource;
