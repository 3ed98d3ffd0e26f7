use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Upstream marketplace API
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: Option<u64>,
}

/// Catalog snapshot cache
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CacheSettings {
    pub capacity: Option<u64>,
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with DARS__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables
            // e.g., DARS__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DARS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Substitute credentials supplied through plain environment variables
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DARS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the unprefixed credential variables used by deploy tooling
///
/// We check CATALOG_BASE_URL first, then DARS__CATALOG__BASE_URL; same for
/// the API key. Unset variables leave the file values untouched.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let base_url = env::var("CATALOG_BASE_URL")
        .or_else(|_| env::var("DARS__CATALOG__BASE_URL"))
        .ok();
    let api_key = env::var("CATALOG_API_KEY")
        .or_else(|_| env::var("DARS__CATALOG__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(base_url) = base_url {
        builder = builder.set_override("catalog.base_url", base_url)?;
    }
    if let Some(api_key) = api_key {
        builder = builder.set_override("catalog.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_minimal_settings_deserialize() {
        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")
            .unwrap()
            .set_default("server.port", 8080)
            .unwrap()
            .set_default("catalog.base_url", "http://localhost:9000")
            .unwrap()
            .set_default("catalog.api_key", "test_key")
            .unwrap()
            .build()
            .unwrap();

        let settings: Settings = config.try_deserialize().unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.cache.capacity.is_none());
    }
}
