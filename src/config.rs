// Runtime configuration

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::search::DEFAULT_DEBOUNCE;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
const DEFAULT_STORAGE_PATH: &str = "flicklist.db";
const DEFAULT_DEBOUNCE_MS: i64 = DEFAULT_DEBOUNCE.as_millis() as i64;

/// Everything [`App::open`](crate::App::open) needs to wire the core.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    pub storage: StorageConfig,
    pub search: SearchConfig,
}

/// Catalog connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfig {
    /// TMDB v3 API key. The one setting with no default.
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory the sled database lives in.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl AppConfig {
    /// Loads configuration from defaults, then `flicklist.toml` in the
    /// working directory if present, then `FLICKLIST_*` environment
    /// variables (nested keys joined by `__`, e.g.
    /// `FLICKLIST_TMDB__API_KEY`).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("tmdb.base_url", DEFAULT_BASE_URL)?
            .set_default("tmdb.image_base_url", DEFAULT_IMAGE_BASE_URL)?
            .set_default("storage.path", DEFAULT_STORAGE_PATH)?
            .set_default("search.debounce_ms", DEFAULT_DEBOUNCE_MS)?
            .add_source(File::with_name("flicklist").required(false))
            // Single underscore after the prefix, double between nested
            // keys, so `api_key` survives the split.
            .add_source(
                Environment::with_prefix("FLICKLIST")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
