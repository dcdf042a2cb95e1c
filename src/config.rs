//! Configuration module
//!
//! Loaded from a TOML file (default `~/.config/northwind-employees/config.toml`):
//!
//! ```toml
//! [database]
//! url = "sqlite://./northwind.db?mode=rwc"
//! max_connections = 10
//!
//! [logging]
//! level = "info"
//! format = "pretty"   # or "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shared::AppError;

/// Full application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

/// `[database]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub sqlx_logging: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./northwind.db?mode=rwc".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            sqlx_logging: false,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. "info" or "northwind_employees=debug,sqlx=warn"
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file yields defaults; `DATABASE_URL`
    /// overrides `[database].url` either way.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let mut cfg = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
            Self::from_toml(&raw)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("DATABASE_URL") {
            cfg.database.url = url;
        }

        Ok(cfg)
    }

    pub fn from_toml(raw: &str) -> Result<Self, AppError> {
        toml::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }
}

/// `~/.config/northwind-employees/config.toml` (platform config dir),
/// or `./config.toml` when no config dir is known.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("northwind-employees").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}
