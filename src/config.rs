//! Configuration support for the upload dialog.
//!
//! A dialog can carry its configuration as JSON in the container's
//! `data-fc-config` attribute; the simulator reads the same format from a
//! file. Every field is optional and falls back to the defaults below.

use serde::{Deserialize, Serialize};
use web_time::Duration;

use picdrop_core::{Thumbnail, UploaderSettings};

use crate::constants::{DEFAULT_PLACEHOLDER_SRC, DEFAULT_SPINNER_SRC};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to the log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Dialog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploaderConfig {
    /// Version of the configuration format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Delay between simulated transfer ticks, in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Progress added per tick, in percent
    #[serde(default = "default_progress_step")]
    pub progress_step: u8,

    /// Image shown while a thumbnail is loading
    #[serde(default = "default_spinner_src")]
    pub spinner_src: String,

    /// Image shown when no thumbnail can be read
    #[serde(default = "default_placeholder_src")]
    pub placeholder_src: String,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_tick_interval_ms() -> u64 {
    picdrop_core::settings::DEFAULT_TICK_INTERVAL.as_millis() as u64
}

fn default_progress_step() -> u8 {
    picdrop_core::settings::DEFAULT_PROGRESS_STEP
}

fn default_spinner_src() -> String {
    DEFAULT_SPINNER_SRC.to_string()
}

fn default_placeholder_src() -> String {
    DEFAULT_PLACEHOLDER_SRC.to_string()
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            tick_interval_ms: default_tick_interval_ms(),
            progress_step: default_progress_step(),
            spinner_src: default_spinner_src(),
            placeholder_src: default_placeholder_src(),
            log_level: LogLevel::default(),
        }
    }
}

impl UploaderConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the timing values make sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        if !(1..=100).contains(&self.progress_step) {
            return Err(ConfigError::Invalid {
                field: "progress_step",
                message: format!("{} is outside 1-100", self.progress_step),
            });
        }
        Ok(())
    }

    /// Read the configuration from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Image source for a thumbnail.
    pub fn thumbnail_src<'a>(&'a self, thumbnail: &'a Thumbnail) -> &'a str {
        match thumbnail {
            Thumbnail::Loading => &self.spinner_src,
            Thumbnail::DataUrl(url) => url,
            Thumbnail::Placeholder => &self.placeholder_src,
        }
    }

    /// Transfer timing for the dialog controller.
    pub fn settings(&self) -> UploaderSettings {
        UploaderSettings {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            progress_step: self.progress_step,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A field holds an unusable value
    #[error("Invalid {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
