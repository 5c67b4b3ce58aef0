pub mod config;
pub mod paths;

pub use config::{ApiConfig, CatalogOptions, Config, API_URL_ENV, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use paths::{PathManager, base_path_override};
