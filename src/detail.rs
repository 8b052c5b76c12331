//! Complete detail view model for one record
//!
//! Bundles everything the detail screen shows: the badge, the timing header
//! and the formatted sections. The view is a snapshot; if the record changes
//! (a request completing), build a new one.

use crate::record::LogRecord;
use crate::sections::{Section, SectionBody, SectionFormatter};
use crate::status::Badge;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Header lines shown next to the badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingHeader {
    pub primary: String,
    pub secondary: String,
}

impl TimingHeader {
    /// Requests: start date + duration. Actions: uppercased type + start date.
    pub fn for_record(record: &LogRecord, date_format: &str) -> Option<Self> {
        match record {
            LogRecord::NetworkRequest(request) | LogRecord::BridgeNetworkRequest(request) => {
                Some(Self {
                    primary: format_date(request.start_time, date_format),
                    secondary: format_duration(request.duration_ms()),
                })
            }
            LogRecord::ReduxAction(action) => Some(Self {
                primary: action.type_upper(),
                secondary: format_date(action.start_time, date_format),
            }),
            LogRecord::Unknown => None,
        }
    }
}

/// Format epoch milliseconds as a UTC date
///
/// Out-of-range timestamps and unusable format strings render the raw
/// millisecond value instead.
pub fn format_date(epoch_ms: i64, format: &str) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(epoch_ms) else {
        return epoch_ms.to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", dt.format(format)) {
        Ok(()) => out,
        Err(_) => epoch_ms.to_string(),
    }
}

/// `Duration 250ms`, or `Duration pending` while in flight
pub fn format_duration(duration_ms: Option<i64>) -> String {
    match duration_ms {
        Some(ms) => format!("Duration {}ms", ms),
        None => "Duration pending".to_string(),
    }
}

/// Everything rendered for a single record
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub badge: Badge,
    pub header: TimingHeader,
    pub sections: Vec<Section>,
}

impl DetailView {
    /// Build the view; `Unknown` records have none
    pub fn build(formatter: &SectionFormatter, record: &LogRecord, date_format: &str) -> Option<Self> {
        Some(Self {
            badge: Badge::for_record(record)?,
            header: TimingHeader::for_record(record, date_format)?,
            sections: formatter.sections(record),
        })
    }

    /// Plain-text rendering for headless output
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "[{} {}] {} | {}\n",
            self.badge.label, self.badge.sub_label, self.header.primary, self.header.secondary
        );

        for section in &self.sections {
            out.push('\n');
            out.push_str(section.title());
            out.push('\n');
            match &section.body {
                SectionBody::Rows(rows) => {
                    for row in rows {
                        let marker = if row.copyable { " (copy)" } else { "" };
                        out.push_str(&format!("  {}: {}{}\n", row.label, row.value, marker));
                    }
                }
                SectionBody::Text { text, .. } => {
                    for line in text.lines() {
                        out.push_str("  ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
            }
        }
        out
    }
}
