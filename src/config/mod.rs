//! Application configuration loading.
//!
//! Settings come from an optional `config.toml` file; the `DATABASE_URL`
//! environment variable always wins for the store URL. The fulfillment core
//! never reads configuration - only the binary entry point and the store
//! setup consume it.

/// Database configuration and connection management
pub mod database;

pub use database::DatabaseConfig;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Relational store settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads `./config.toml` when present, otherwise starts from defaults, then
/// applies environment overrides.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = if Path::new("config.toml").exists() {
        load_config("config.toml")?
    } else {
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database.url = url;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
            [database]
            url = "sqlite://var/warehouse.sqlite"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.database.url, "sqlite://var/warehouse.sqlite");
    }

    #[test]
    fn test_missing_database_section_falls_back_to_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.database.url, DatabaseConfig::default().url);
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let dir = std::env::temp_dir().join("stockroom-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[database\nurl = ").unwrap();

        let result = load_config(&path);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("definitely/not/a/real/config.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
