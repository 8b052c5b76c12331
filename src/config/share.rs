//! Share destination configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where shared reports go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShareKind {
    /// One text file per share in the export directory (default)
    #[default]
    File,
    /// Print to stdout
    Stdout,
    /// System clipboard
    Clipboard,
}

impl ShareKind {
    /// Parse target string from config or env
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            "clipboard" => Self::Clipboard,
            _ => Self::File, // Unknown targets fall back to files
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Stdout => "stdout",
            Self::Clipboard => "clipboard",
        }
    }
}

/// Share configuration
#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub target: ShareKind,
    /// Directory for the file target
    pub dir: PathBuf,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            target: ShareKind::File,
            dir: PathBuf::from("./exports"),
        }
    }
}

/// Share settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileShareConfig {
    pub target: Option<String>,
    pub dir: Option<String>,
}

impl ShareConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileShareConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            target: file
                .target
                .map(|s| ShareKind::from_str(&s))
                .unwrap_or(defaults.target),
            dir: file.dir.map(PathBuf::from).unwrap_or(defaults.dir),
        }
    }
}
