//! `[logging]` settings
//!
//! Where console logs go is not configurable: headless commands write to
//! stderr and the detail screen captures into its footer buffer. The file only
//! sets the level and, through an optional `[logging.file]` table, JSON log
//! files next to that console output.

use serde::Deserialize;
use std::path::PathBuf;

/// How often JSON log files roll over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file forever
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// JSON log file output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileConfig {
    pub dir: PathBuf,
    pub rotation: LogRotation,
    /// File name prefix; the appender adds the date suffix
    pub prefix: String,
}

impl Default for LogFileConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./logs"),
            rotation: LogRotation::Daily,
            prefix: "netwatch".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level for netwatch's own targets (RUST_LOG still wins)
    pub level: String,
    /// `None` keeps logs on the console only
    pub file: Option<LogFileConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file: Option<FileLogFile>,
}

/// `[logging.file]`; the table being present turns file output on
#[derive(Debug, Deserialize, Default)]
pub struct FileLogFile {
    pub dir: Option<String>,
    pub rotation: Option<LogRotation>,
    pub prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            level: file.level.unwrap_or_else(|| Self::default().level),
            file: file.file.map(|out| {
                let defaults = LogFileConfig::default();
                LogFileConfig {
                    dir: out.dir.map(PathBuf::from).unwrap_or(defaults.dir),
                    rotation: out.rotation.unwrap_or(defaults.rotation),
                    prefix: out.prefix.unwrap_or(defaults.prefix),
                }
            }),
        }
    }

    /// Default `EnvFilter` directive when RUST_LOG is unset
    pub fn filter_directive(&self) -> String {
        format!("netwatch={}", self.level)
    }
}
