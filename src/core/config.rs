//! Pacer configuration
//!
//! Loaded from RON or JSON; every field has a default so partial files work.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pacer::Pacing;

/// How the process is hosted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostMode {
    /// Dedicated server: no display surface, fixed tick rate
    Headless,
    /// Interactive window driven by the local event loop
    Windowed,
    /// An external runtime calls into us once per output frame
    Embedded {
        /// Run the fixed-step server cadence inside the host's frames
        headless: bool,
    },
}

/// Pacer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacerConfig {
    /// Hosting mode
    pub mode: HostMode,
    /// Seconds per simulation step in headless and fixed-step modes
    pub tick_rate: f64,
    /// Headless yield between clock samples, in milliseconds
    pub yield_ms: u64,
    /// Input wait while paused, hidden or blocked, in milliseconds
    pub idle_wait_ms: u64,
    /// Input wait while in the background, in milliseconds
    pub unfocused_wait_ms: u64,
    /// Output frame rate an embedding host drives us at
    pub host_fps: f64,
    /// Seconds between frame statistics log lines (0 disables)
    pub stats_interval: f64,
    /// Window title
    pub title: String,
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// `env_logger` filter overriding `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            mode: HostMode::Headless,
            tick_rate: 0.05,
            yield_ms: 1,
            idle_wait_ms: 50,
            unfocused_wait_ms: 20,
            host_fps: 60.0,
            stats_interval: 5.0,
            title: String::from("hostloop"),
            width: 640,
            height: 480,
            log_filter: None,
        }
    }
}

impl PacerConfig {
    /// Set the hosting mode
    pub fn with_mode(mut self, mode: HostMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set seconds per simulation step
    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Set window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set window dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Timing parameters handed to the pacers
    pub fn pacing(&self) -> Pacing {
        Pacing {
            tick: self.tick_rate,
            yield_interval: Duration::from_millis(self.yield_ms),
            idle_wait: Duration::from_millis(self.idle_wait_ms),
            unfocused_wait: Duration::from_millis(self.unfocused_wait_ms),
            stats_interval: self.stats_interval,
        }
    }

    /// Check values the pacers cannot run with
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tick_rate must be positive, got {}",
                self.tick_rate
            )));
        }
        if !(self.host_fps.is_finite() && self.host_fps > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "host_fps must be positive, got {}",
                self.host_fps
            )));
        }
        if self.stats_interval.is_nan() || self.stats_interval < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "stats_interval must not be negative, got {}",
                self.stats_interval
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Load from a `.json` file, or RON for any other extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::load_json(path)
        } else {
            Self::load_ron(path)
        }
    }

    /// Save to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, ron_string).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        ron::from_str(&content).map_err(|e| ConfigError::DeserializeError(e.to_string()))
    }

    /// Save to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::DeserializeError(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// IO error
    IoError(String),
    /// Serialization error
    SerializeError(String),
    /// Deserialization error
    DeserializeError(String),
    /// A value the pacer cannot run with
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialization error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
            Self::Invalid(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
