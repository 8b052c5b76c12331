//! Detail view configuration: extra hidden attributes, copy affordances, badge colors

use crate::filter::ExclusionSet;
use crate::sections::{SectionFormatter, DEFAULT_COPY_KEY};
use crate::status::StatusPalette;
use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

/// Default date format for the timing header
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Display configuration
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Keys hidden from GENERAL and header sections on top of the reserved set
    pub extra_excluded_attributes: Vec<String>,
    /// GENERAL keys that get a copy affordance
    pub copy_keys: Vec<String>,
    /// strftime format for start dates (rendered in UTC)
    pub date_format: String,
    /// Badge colors
    pub colors: StatusPalette,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            extra_excluded_attributes: Vec::new(),
            copy_keys: vec![DEFAULT_COPY_KEY.to_string()],
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            colors: StatusPalette::default(),
        }
    }
}

/// Display settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDisplay {
    pub extra_excluded_attributes: Option<Vec<String>>,
    pub copy_keys: Option<Vec<String>>,
    pub date_format: Option<String>,
}

/// Badge colors as loaded from config file (`[colors]`)
#[derive(Debug, Deserialize, Default)]
pub struct FileColors {
    pub success: Option<String>,
    pub redirect: Option<String>,
    pub error: Option<String>,
    pub pending: Option<String>,
    pub action: Option<String>,
}

impl DisplayConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDisplay>, colors: Option<FileColors>) -> Self {
        let file = file.unwrap_or_default();
        let colors = colors.unwrap_or_default();
        let defaults = Self::default();
        let palette = defaults.colors;

        Self {
            extra_excluded_attributes: file
                .extra_excluded_attributes
                .unwrap_or(defaults.extra_excluded_attributes),
            copy_keys: file.copy_keys.unwrap_or(defaults.copy_keys),
            date_format: file.date_format.unwrap_or(defaults.date_format),
            colors: StatusPalette {
                success: colors.success.unwrap_or(palette.success),
                redirect: colors.redirect.unwrap_or(palette.redirect),
                error: colors.error.unwrap_or(palette.error),
                pending: colors.pending.unwrap_or(palette.pending),
                action: colors.action.unwrap_or(palette.action),
            },
        }
    }

    /// Reject settings that would only fail at render time
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            bail!(
                "Invalid [display] date_format {:?}: not a strftime format",
                self.date_format
            );
        }
        Ok(())
    }

    /// Formatter hiding the reserved keys plus any configured extras
    pub fn formatter(&self) -> SectionFormatter {
        SectionFormatter::new(ExclusionSet::reserved_with(
            self.extra_excluded_attributes.iter().cloned(),
        ))
        .with_copy_keys(self.copy_keys.iter().cloned())
    }
}
