use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Runtime configuration, merged from defaults, `datasweeper.toml`,
/// and `DATASWEEPER_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bind host for the local HTTP server
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Number of rows returned in table previews (default: 5)
    pub preview_rows: usize,

    /// Upload size limit per file, in bytes (default: 16 MiB)
    pub max_file_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            preview_rows: 5,
            max_file_bytes: 16 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("datasweeper.toml"))
            .merge(Env::prefixed("DATASWEEPER_"))
            .extract()
            .map_err(|e| AppError::ValidationError(format!("invalid configuration: {}", e)))?;

        config
            .validate()
            .map_err(AppError::ValidationError)?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.preview_rows == 0 {
            return Err("preview_rows must be > 0".to_string());
        }
        if self.max_file_bytes == 0 {
            return Err("max_file_bytes must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn test_zero_preview_rows_is_rejected() {
        let config = AppConfig {
            preview_rows: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
