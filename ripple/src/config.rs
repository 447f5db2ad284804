//! Demo configuration, loaded from a JSON5 file.
//!
//! The path comes from `RIPPLE_CONFIG`, falling back to `config/ripple.json5`.
//! A missing default file means "use the defaults"; a missing file named by
//! `RIPPLE_CONFIG` is an error.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the config path.
pub const CONFIG_ENV: &str = "RIPPLE_CONFIG";
/// Config path used when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/ripple.json5";

/// An error that can occur while loading the config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read, including when it does not exist.
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid JSON5 or does not match the schema.
    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json5::Error,
    },
    /// A value is outside its allowed range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How the demo moves through noise space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkMode {
    /// Step `x` along the `y = 0` line.
    #[default]
    Line,
    /// Trace a circle, so the output repeats seamlessly.
    Cycle,
}

/// Circle traced in [`WalkMode::Cycle`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CycleConfig {
    /// Circle centre, x.
    pub center_x: f64,
    /// Circle centre, y.
    pub center_y: f64,
    /// Circle radius in noise units.
    pub radius: f64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            radius: 1.0,
        }
    }
}

/// Top-level demo configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RippleConfig {
    /// Walk strategy.
    pub mode: WalkMode,
    /// Per-frame increment of `x` (line) or of the angle in radians (cycle).
    pub step: f64,
    /// Delay between frames. Zero renders as fast as possible.
    pub frame_delay_ms: u64,
    /// Output width multiplier; a sample of `n` is drawn `(n + 1) * scale` columns in.
    pub scale: u32,
    /// Print running statistics after every frame.
    pub show_stats: bool,
    /// Stop after this many frames. `None` runs until cancelled.
    pub max_frames: Option<u64>,
    /// Circle parameters for [`WalkMode::Cycle`].
    pub cycle: CycleConfig,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            mode: WalkMode::Line,
            step: 0.02,
            frame_delay_ms: 10,
            scale: 40,
            show_stats: false,
            max_frames: None,
            cycle: CycleConfig::default(),
        }
    }
}

impl RippleConfig {
    /// Load from the path in `RIPPLE_CONFIG`, or from [`DEFAULT_CONFIG_PATH`].
    ///
    /// Only the implicit default path may be absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Like [`load`](Self::load), but returns the defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_json5::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check that every value can drive a walk.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "step must be a positive number, got {}",
                self.step
            )));
        }
        if self.scale == 0 {
            return Err(ConfigError::Invalid("scale must be at least 1".to_owned()));
        }

        let cycle = &self.cycle;
        if !cycle.center_x.is_finite() || !cycle.center_y.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "cycle centre must be finite, got ({}, {})",
                cycle.center_x, cycle.center_y
            )));
        }
        if !cycle.radius.is_finite() || cycle.radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cycle radius must be a positive number, got {}",
                cycle.radius
            )));
        }

        Ok(())
    }
}
