//! Configuration for netwatch
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/netwatch/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod display;
mod observability;
mod serialization;
mod share;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use display::{DisplayConfig, FileColors, FileDisplay, DEFAULT_DATE_FORMAT};
pub use observability::{FileLogFile, FileLogging, LogFileConfig, LogRotation, LoggingConfig};
pub use share::{FileShareConfig, ShareConfig, ShareKind};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Where shared reports go
    pub share: ShareConfig,

    /// Detail view settings (hidden attributes, copy keys, colors)
    pub display: DisplayConfig,
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [share] section
    pub share: Option<FileShareConfig>,

    /// Optional [display] section
    pub display: Option<FileDisplay>,

    /// Optional [colors] section
    pub colors: Option<FileColors>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/netwatch/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("netwatch").join("config.toml"))
    }

    /// Load configuration: file -> env vars -> defaults
    ///
    /// A missing config file means defaults. A file that exists but cannot be
    /// read or parsed is an error; silently falling back would hide typos.
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => load_file_config(&path)?,
            None => FileConfig::default(),
        };
        let config = Self::resolve(file, |key| std::env::var(key).ok());
        config.display.validate()?;
        Ok(config)
    }

    /// Merge a parsed file with environment overrides
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut logging = LoggingConfig::from_file(file.logging);
        let mut share = ShareConfig::from_file(file.share);
        let display = DisplayConfig::from_file(file.display, file.colors);

        // Log level: env > file > default
        if let Some(level) = env("NETWATCH_LOG_LEVEL") {
            logging.level = level;
        }

        // Share target: env > file > default
        if let Some(target) = env("NETWATCH_SHARE") {
            share.target = ShareKind::from_str(&target);
        }

        // Export directory: env > file > default
        if let Some(dir) = env("NETWATCH_EXPORT_DIR") {
            share.dir = PathBuf::from(dir);
        }

        Self {
            logging,
            share,
            display,
        }
    }
}

/// Read and parse a config file; a missing file yields defaults
pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(e) => Err(e).with_context(|| format!("Cannot read config file {}", path.display())),
    }
}
