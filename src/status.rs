//! Status badge: color bucket plus two short labels
//!
//! Requests are bucketed by HTTP status class. Actions skip the numeric
//! mapping entirely and always show a fixed "ACT" / "-" badge.

use crate::record::LogRecord;
use ratatui::style::Color;

/// Badge text for actions
pub const ACTION_LABEL: &str = "ACT";
pub const ACTION_SUB_LABEL: &str = "-";

/// Badge text for a request with no method
pub const MISSING_METHOD_LABEL: &str = "???";
/// Badge sub-label while a request is in flight
pub const IN_FLIGHT_SUB_LABEL: &str = "...";

/// Color category for a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    /// 2xx
    Success,
    /// 3xx
    Redirect,
    /// 4xx and 5xx
    Error,
    /// No status yet (in flight) or outside the known classes
    Pending,
    /// Action records
    Action,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Redirect => "redirect",
            Self::Error => "error",
            Self::Pending => "pending",
            Self::Action => "action",
        }
    }
}

/// Map an HTTP-like status code to its color bucket
pub fn color_for(status: Option<u16>) -> StatusColor {
    match status {
        Some(200..=299) => StatusColor::Success,
        Some(300..=399) => StatusColor::Redirect,
        Some(400..=599) => StatusColor::Error,
        _ => StatusColor::Pending,
    }
}

/// Hex colors for each bucket
#[derive(Debug, Clone, PartialEq)]
pub struct StatusPalette {
    pub success: String,
    pub redirect: String,
    pub error: String,
    pub pending: String,
    pub action: String,
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self {
            success: "#81c784".to_string(),
            redirect: "#ffb74d".to_string(),
            error: "#e57373".to_string(),
            pending: "#e0e0e0".to_string(),
            action: "#64b5f6".to_string(),
        }
    }
}

impl StatusPalette {
    pub fn hex(&self, color: StatusColor) -> &str {
        match color {
            StatusColor::Success => &self.success,
            StatusColor::Redirect => &self.redirect,
            StatusColor::Error => &self.error,
            StatusColor::Pending => &self.pending,
            StatusColor::Action => &self.action,
        }
    }

    /// Terminal color for a bucket; unparseable hex falls back to gray
    pub fn color(&self, color: StatusColor) -> Color {
        parse_hex(self.hex(color)).unwrap_or(Color::Gray)
    }
}

/// Parse `#rrggbb` (leading `#` optional)
pub fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Compact badge summarizing a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub sub_label: String,
    pub color: StatusColor,
}

impl Badge {
    /// Badge for a record; `Unknown` has none
    pub fn for_record(record: &LogRecord) -> Option<Self> {
        match record {
            LogRecord::NetworkRequest(request) | LogRecord::BridgeNetworkRequest(request) => {
                let label = if request.method.is_empty() {
                    MISSING_METHOD_LABEL.to_string()
                } else {
                    request.method.clone()
                };
                Some(Self {
                    label,
                    sub_label: request
                        .status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| IN_FLIGHT_SUB_LABEL.to_string()),
                    color: color_for(request.status),
                })
            }
            LogRecord::ReduxAction(_) => Some(Self::action()),
            LogRecord::Unknown => None,
        }
    }

    pub fn action() -> Self {
        Self {
            label: ACTION_LABEL.to_string(),
            sub_label: ACTION_SUB_LABEL.to_string(),
            color: StatusColor::Action,
        }
    }
}
