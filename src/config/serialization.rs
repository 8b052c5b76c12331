//! TOML rendering of the effective configuration

use super::{Config, LogFileConfig};

/// Quote a string as a TOML basic string
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

/// Render a string list as a TOML inline array
fn toml_array(items: &[String]) -> String {
    toml::Value::Array(items.iter().cloned().map(toml::Value::String).collect()).to_string()
}

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# netwatch configuration

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}

# Where shared reports go: file, stdout, clipboard
[share]
target = {share_target}
# Directory for the file target
dir = {share_dir}

# Detail view
[display]
# Attributes hidden from GENERAL and header sections, in addition to the
# reserved ones already shown by the badge, timing header and body sections
extra_excluded_attributes = {excluded}
# GENERAL rows with a copy action
copy_keys = {copy_keys}
# Start date format (strftime, UTC)
date_format = {date_format}

# Badge colors (#rrggbb)
[colors]
success = {success}
redirect = {redirect}
error = {error}
pending = {pending}
action = {action}
{log_file}"#,
            log_level = toml_string(&self.logging.level),
            share_target = toml_string(self.share.target.as_str()),
            share_dir = toml_string(&self.share.dir.display().to_string()),
            excluded = toml_array(&self.display.extra_excluded_attributes),
            copy_keys = toml_array(&self.display.copy_keys),
            date_format = toml_string(&self.display.date_format),
            success = toml_string(&self.display.colors.success),
            redirect = toml_string(&self.display.colors.redirect),
            error = toml_string(&self.display.colors.error),
            pending = toml_string(&self.display.colors.pending),
            action = toml_string(&self.display.colors.action),
            log_file = self.log_file_section(),
        )
    }

    /// `[logging.file]`, commented out while file output is off
    fn log_file_section(&self) -> String {
        let (prefix, file) = match &self.logging.file {
            Some(file) => ("", file.clone()),
            None => ("# ", LogFileConfig::default()),
        };
        format!(
            r#"
# JSON log files alongside console output (uncomment to enable)
{p}[logging.file]
{p}dir = {dir}
{p}rotation = {rotation}  # hourly, daily, never
{p}prefix = {file_prefix}
"#,
            p = prefix,
            dir = toml_string(&file.dir.display().to_string()),
            rotation = toml_string(file.rotation.as_str()),
            file_prefix = toml_string(&file.prefix),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}
