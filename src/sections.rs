//! Section formatting for the detail view
//!
//! A record is rendered as a list of named sections. Attribute sections
//! (general fields, headers) become label/value rows after reserved keys are
//! filtered out; body sections carry their raw text untouched.
//!
//! Every section has two renderings:
//! - display: rows (or a text blob) for the detail screen
//! - export: a flat `label: value` text block for sharing

use crate::filter::ExclusionSet;
use crate::record::{Attribute, LogRecord, NetworkRequest, ReduxAction};
use serde_json::Value;
use std::collections::HashSet;

/// Key whose General row gets a copy affordance by default
pub const DEFAULT_COPY_KEY: &str = "url";

/// The named sections a record can render into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    General,
    RequestHeaders,
    RequestData,
    ResponseHeaders,
    ResponseBody,
    Payload,
}

impl SectionKind {
    /// Heading shown above the section and used as the export header line
    pub fn title(&self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::RequestHeaders => "REQUEST HEADERS",
            Self::RequestData => "REQUEST DATA",
            Self::ResponseHeaders => "RESPONSE HEADERS",
            Self::ResponseBody => "RESPONSE BODY",
            Self::Payload => "PAYLOAD",
        }
    }
}

/// One label/value row of an attribute section
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub label: String,
    pub value: String,
    /// Original value, used for clipboard copies
    pub raw: Value,
    pub copyable: bool,
}

/// What a section shows
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// Filtered key/value attributes
    Rows(Vec<DisplayRow>),
    /// Raw body text, never filtered
    Text { text: String, copyable: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub body: SectionBody,
}

impl Section {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Export block for this section alone
    pub fn export(&self) -> String {
        match &self.body {
            SectionBody::Rows(rows) => {
                stringify_rows(rows.iter().map(|row| (row.label.as_str(), row.value.as_str())))
            }
            SectionBody::Text { text, .. } => text.clone(),
        }
    }

    /// Copyable rows and bodies in display order
    pub fn copy_targets(&self) -> Vec<Value> {
        match &self.body {
            SectionBody::Rows(rows) => rows
                .iter()
                .filter(|row| row.copyable)
                .map(|row| row.raw.clone())
                .collect(),
            SectionBody::Text { text, copyable } if *copyable => {
                vec![Value::String(text.clone())]
            }
            SectionBody::Text { .. } => Vec::new(),
        }
    }
}

/// Formats records into sections
///
/// Owns the exclusion set so display and export always filter with the
/// same keys.
#[derive(Debug, Clone)]
pub struct SectionFormatter {
    exclusions: ExclusionSet,
    copy_keys: HashSet<String>,
}

impl SectionFormatter {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self {
            exclusions,
            copy_keys: HashSet::from([DEFAULT_COPY_KEY.to_string()]),
        }
    }

    /// Replace the General keys that get a copy affordance
    pub fn with_copy_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.copy_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Display rows for an attribute set
    ///
    /// Only General rows can be copyable; headers never are.
    pub fn display_rows(&self, kind: SectionKind, entries: &[Attribute]) -> Vec<DisplayRow> {
        self.exclusions
            .filter(entries)
            .into_iter()
            .map(|entry| DisplayRow {
                label: entry.key.clone(),
                value: entry.text(),
                raw: entry.value.clone(),
                copyable: kind == SectionKind::General && self.copy_keys.contains(&entry.key),
            })
            .collect()
    }

    /// Export block for an attribute set
    pub fn export_rows(&self, entries: &[Attribute]) -> String {
        let kept = self.exclusions.filter(entries);
        let texts: Vec<(&str, String)> = kept
            .iter()
            .map(|entry| (entry.key.as_str(), entry.text()))
            .collect();
        stringify_rows(texts.iter().map(|(key, text)| (*key, text.as_str())))
    }

    /// Display sections for a record; `Unknown` yields none
    pub fn sections(&self, record: &LogRecord) -> Vec<Section> {
        match record {
            LogRecord::NetworkRequest(request) | LogRecord::BridgeNetworkRequest(request) => {
                self.request_sections(request)
            }
            LogRecord::ReduxAction(action) => vec![action_section(action)],
            LogRecord::Unknown => Vec::new(),
        }
    }

    fn request_sections(&self, request: &NetworkRequest) -> Vec<Section> {
        let mut sections = vec![
            self.rows_section(SectionKind::General, &request.attributes),
            self.rows_section(SectionKind::RequestHeaders, &request.request_headers),
        ];

        if request.has_request_body() {
            sections.push(Section {
                kind: SectionKind::RequestData,
                body: SectionBody::Text {
                    text: request.data_sent.clone(),
                    copyable: false,
                },
            });
        }

        sections.push(self.rows_section(SectionKind::ResponseHeaders, &request.response_headers));

        if request.has_response_body() {
            sections.push(Section {
                kind: SectionKind::ResponseBody,
                body: SectionBody::Text {
                    text: request.response.clone(),
                    copyable: true,
                },
            });
        }

        sections
    }

    fn rows_section(&self, kind: SectionKind, entries: &[Attribute]) -> Section {
        Section {
            kind,
            body: SectionBody::Rows(self.display_rows(kind, entries)),
        }
    }
}

impl Default for SectionFormatter {
    fn default() -> Self {
        Self::new(ExclusionSet::default())
    }
}

fn action_section(action: &ReduxAction) -> Section {
    Section {
        kind: SectionKind::Payload,
        body: SectionBody::Text {
            text: action.payload_pretty(),
            copyable: true,
        },
    }
}

/// `label: value` per entry, each line newline-terminated, entries separated
/// by a newline (so consecutive entries have a blank line between them)
fn stringify_rows<'a>(rows: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    rows.map(|(label, value)| format!("{}: {}\n", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_record(data_sent: &str, response: &str) -> LogRecord {
        LogRecord::classify(&json!({
            "_id": 1,
            "type": "RN",
            "method": "POST",
            "url": "https://api.example.com/login",
            "status": 200,
            "timeout": 0,
            "startTime": 1000,
            "endTime": 1250,
            "dataSent": data_sent,
            "response": response,
            "requestHeaders": { "Content-Type": "text/plain", "status": "shadowed" },
            "responseHeaders": { "Server": "nginx", "Date": "Mon" }
        }))
    }

    fn kinds(sections: &[Section]) -> Vec<SectionKind> {
        sections.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_full_request_section_order() {
        let formatter = SectionFormatter::default();
        let sections = formatter.sections(&request_record("a=1", "ok"));
        assert_eq!(
            kinds(&sections),
            vec![
                SectionKind::General,
                SectionKind::RequestHeaders,
                SectionKind::RequestData,
                SectionKind::ResponseHeaders,
                SectionKind::ResponseBody,
            ]
        );
    }

    #[test]
    fn test_empty_bodies_drop_body_sections_only() {
        let formatter = SectionFormatter::default();
        let sections = formatter.sections(&request_record("", ""));
        assert_eq!(
            kinds(&sections),
            vec![
                SectionKind::General,
                SectionKind::RequestHeaders,
                SectionKind::ResponseHeaders,
            ]
        );
    }

    #[test]
    fn test_request_data_is_raw() {
        let formatter = SectionFormatter::default();
        let sections = formatter.sections(&request_record("a=1", ""));
        let data = sections
            .iter()
            .find(|s| s.kind == SectionKind::RequestData)
            .unwrap();
        assert_eq!(
            data.body,
            SectionBody::Text {
                text: "a=1".to_string(),
                copyable: false
            }
        );
        assert_eq!(data.export(), "a=1");
    }

    #[test]
    fn test_general_rows_filtered_with_url_copyable() {
        let formatter = SectionFormatter::default();
        let sections = formatter.sections(&request_record("", ""));
        let SectionBody::Rows(rows) = &sections[0].body else {
            panic!("general should be rows");
        };

        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["url", "timeout"]);
        assert!(rows[0].copyable);
        assert_eq!(rows[0].raw, json!("https://api.example.com/login"));
        assert!(!rows[1].copyable);
        assert_eq!(rows[1].value, "0");
    }

    #[test]
    fn test_header_rows_filtered_and_never_copyable() {
        let formatter = SectionFormatter::default();
        let sections = formatter.sections(&request_record("", ""));
        let SectionBody::Rows(rows) = &sections[1].body else {
            panic!("request headers should be rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Content-Type");
        assert!(!rows[0].copyable);
    }

    #[test]
    fn test_header_named_url_is_not_copyable() {
        let formatter = SectionFormatter::default();
        let rows = formatter.display_rows(
            SectionKind::RequestHeaders,
            &[Attribute::new("url", "https://example.com")],
        );
        assert!(!rows[0].copyable);
    }

    #[test]
    fn test_export_rows_layout() {
        let formatter = SectionFormatter::default();
        let entries = vec![
            Attribute::new("url", "https://example.com"),
            Attribute::new("method", "GET"),
            Attribute::new("timeout", 30),
        ];
        assert_eq!(
            formatter.export_rows(&entries),
            "url: https://example.com\n\ntimeout: 30\n"
        );
        assert_eq!(formatter.export_rows(&[]), "");
    }

    #[test]
    fn test_display_and_export_share_exclusions() {
        let formatter = SectionFormatter::new(ExclusionSet::new(["timeout"]));
        let entries = vec![
            Attribute::new("timeout", 30),
            Attribute::new("method", "GET"),
        ];
        let rows = formatter.display_rows(SectionKind::General, &entries);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "method");
        assert_eq!(formatter.export_rows(&entries), "method: GET\n");
    }

    #[test]
    fn test_action_has_single_payload_section() {
        let formatter = SectionFormatter::default();
        let record = LogRecord::classify(&json!({
            "action": { "type": "SET_USER", "payload": { "type": "admin", "status": 1 } }
        }));
        let sections = formatter.sections(&record);
        assert_eq!(kinds(&sections), vec![SectionKind::Payload]);
        // Payload keys are not subject to the exclusion set
        assert_eq!(
            sections[0].export(),
            "{\n  \"type\": \"admin\",\n  \"status\": 1\n}"
        );
        assert_eq!(sections[0].copy_targets().len(), 1);
    }

    #[test]
    fn test_unknown_renders_nothing() {
        let formatter = SectionFormatter::default();
        assert!(formatter.sections(&LogRecord::Unknown).is_empty());
    }

    #[test]
    fn test_custom_copy_keys() {
        let formatter = SectionFormatter::default().with_copy_keys(["timeout"]);
        let rows = formatter.display_rows(
            SectionKind::General,
            &[Attribute::new("url", "u"), Attribute::new("timeout", 5)],
        );
        assert!(!rows[0].copyable);
        assert!(rows[1].copyable);
    }
}
