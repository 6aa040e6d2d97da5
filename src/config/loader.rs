use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::MarqueeConfig;
use crate::scroll::SceneError;
use crate::typing::OptionsError;
use crate::viewport::GateError;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl From<OptionsError> for ConfigError {
    fn from(err: OptionsError) -> Self {
        ConfigError::ValidationError {
            message: err.to_string(),
        }
    }
}

impl From<SceneError> for ConfigError {
    fn from(err: SceneError) -> Self {
        ConfigError::ValidationError {
            message: err.to_string(),
        }
    }
}

impl From<GateError> for ConfigError {
    fn from(err: GateError) -> Self {
        ConfigError::ValidationError {
            message: err.to_string(),
        }
    }
}

impl MarqueeConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/marquee/marquee.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config directory is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("marquee").join("marquee.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields the built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads and validates configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: MarqueeConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates timing values and panel content.
    ///
    /// Anything that would construct an invalid machine is rejected here
    /// so a bad interval can never reach a timer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms must be greater than zero"));
        }
        self.typing.options().validate()?;
        self.rotation.options().validate()?;
        self.scenes.gate_options().validate()?;
        if self.scenes.panels.is_empty() {
            return Err(invalid("at least one panel must be configured"));
        }
        self.scenes.scene_set()?;
        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
