//! Configuration loading and management
//!
//! Sources, lowest to highest precedence: built-in defaults, the YAML file
//! named by `INVOICE_TRACKER_CONFIG`, then the individual environment
//! overrides listed on [`AppConfig::apply_overrides`].

use crate::core::ConfigError;
use crate::ui::PageVariant;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "INVOICE_TRACKER_CONFIG";
pub const BIND_ENV: &str = "INVOICE_TRACKER_BIND";
pub const CORS_ENV: &str = "INVOICE_TRACKER_CORS";
pub const VARIANT_ENV: &str = "INVOICE_TRACKER_VARIANT";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `host:port` to listen on
    pub bind: String,

    /// Attach a permissive CORS layer
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            cors: false,
        }
    }
}

/// Page settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Variant served at `/`
    pub default_variant: PageVariant,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "invoice_tracker=info,tower_http=info".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::parse(&content, Some(path.display().to_string()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_yaml_file(path.trim())?,
            _ => Self::default(),
        };

        base.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `INVOICE_TRACKER_BIND`, `INVOICE_TRACKER_CORS` and
    /// `INVOICE_TRACKER_VARIANT` as returned by `lookup`
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(BIND_ENV) {
            self.server.bind = bind.trim().to_string();
        }

        if let Some(cors) = lookup(CORS_ENV) {
            self.server.cors = parse_flag(CORS_ENV, &cors)?;
        }

        if let Some(variant) = lookup(VARIANT_ENV) {
            self.ui.default_variant = variant.parse().map_err(|message| ConfigError::InvalidValue {
                field: VARIANT_ENV.to_string(),
                value: variant.clone(),
                message,
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid_bind = |message: &str| ConfigError::InvalidValue {
            field: "server.bind".to_string(),
            value: self.server.bind.clone(),
            message: message.to_string(),
        };

        let (host, port) = self
            .server
            .bind
            .rsplit_once(':')
            .ok_or_else(|| invalid_bind("expected host:port"))?;

        if host.is_empty() {
            return Err(invalid_bind("host is empty"));
        }
        port.parse::<u16>()
            .map_err(|_| invalid_bind("port must be a number between 0 and 65535"))?;

        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log.filter".to_string(),
                value: self.log.filter.clone(),
                message: "filter must not be empty".to_string(),
            });
        }

        Ok(())
    }

    fn parse(yaml: &str, file: Option<String>) -> Result<Self, ConfigError> {
        // An empty file is a valid "all defaults" config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            file,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            message: "expected true or false".to_string(),
        }),
    }
}
