use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "VIDLY_API_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_movies_path")]
    pub movies_path: String,
    #[serde(default = "default_genres_path")]
    pub genres_path: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogOptions {
    /// Rows per page. Fixed for the lifetime of a view.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_movies_path() -> String {
    "movies".to_string()
}

fn default_genres_path() -> String {
    "genres".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            movies_path: default_movies_path(),
            genres_path: default_genres_path(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl ApiConfig {
    pub fn movies_url(&self) -> String {
        join_url(&self.base_url, &self.movies_path)
    }

    pub fn genres_url(&self) -> String {
        join_url(&self.base_url, &self.genres_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the file when it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            debug!(path = %path.display(), "Loading config file");
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Applies `VIDLY_API_URL` on top of the file values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_api_url_override(std::env::var(API_URL_ENV).ok());
    }

    pub fn apply_api_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.catalog.page_size == 0 {
            return Err(anyhow::anyhow!("catalog.page_size must be at least 1"));
        }

        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            ));
        }

        if self.api.movies_path.trim().is_empty() {
            return Err(anyhow::anyhow!("api.movies_path cannot be empty"));
        }
        if self.api.genres_path.trim().is_empty() {
            return Err(anyhow::anyhow!("api.genres_path cannot be empty"));
        }
        if self.api.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("api.timeout_seconds must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            api: ApiConfig {
                base_url: "https://vidly.example.com/api".to_string(),
                ..ApiConfig::default()
            },
            catalog: CatalogOptions { page_size: 10 },
        };

        config.save_to_file(file.path()).unwrap();

        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[catalog]\npage_size = 8\n").unwrap();
        assert_eq!(config.catalog.page_size, 8);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_seconds, 30);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_endpoint_urls() {
        let mut api = ApiConfig::default();
        assert_eq!(api.movies_url(), "http://localhost:4000/api/movies");
        assert_eq!(api.genres_url(), "http://localhost:4000/api/genres");

        api.base_url = "http://host/api/".to_string();
        api.genres_path = "/genres".to_string();
        assert_eq!(api.genres_url(), "http://host/api/genres");
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.catalog.page_size = 0;
        assert!(config.validate().is_err());
        config.catalog.page_size = 5;

        config.api.base_url = "localhost:4000".to_string();
        assert!(config.validate().is_err());
        config.api.base_url = DEFAULT_BASE_URL.to_string();

        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_url_override() {
        let mut config = Config::default();
        config.apply_api_url_override(Some("   ".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

        config.apply_api_url_override(Some("https://staging/api".to_string()));
        assert_eq!(config.api.base_url, "https://staging/api");
    }
}
