// Normalized record shapes
//
// The capture layer hands us loosely shaped JSON. Classification turns it into
// one of these fully-populated structs once, so the formatter never has to deal
// with missing headers or bodies: absent maps become empty vectors and absent
// bodies become empty strings.

use serde::Serialize;
use serde_json::Value;

/// A single key/value attribute in capture order
///
/// The value keeps its JSON shape so copy actions can tell text from
/// structured data. Use [`Attribute::text`] for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub value: Value,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Display text for the value
    pub fn text(&self) -> String {
        value_text(&self.value)
    }
}

/// Render a JSON value as a single display string
///
/// Strings are shown raw (no quotes), everything else as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Lifecycle stage of an XHR-style request (0 = unsent … 4 = done)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadyState {
    Unsent,
    Opened,
    HeadersReceived,
    Loading,
    Done,
}

impl ReadyState {
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Self::Unsent),
            1 => Some(Self::Opened),
            2 => Some(Self::HeadersReceived),
            3 => Some(Self::Loading),
            4 => Some(Self::Done),
            _ => None,
        }
    }
}

/// An intercepted HTTP request, native or bridge captured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkRequest {
    pub id: Option<String>,
    pub method: String,
    pub url: String,
    /// HTTP status, `None` while the request is in flight
    pub status: Option<u16>,
    /// Epoch milliseconds
    pub start_time: i64,
    pub end_time: Option<i64>,
    /// Request body, empty when nothing was sent
    pub data_sent: String,
    /// Response body, empty when nothing came back (yet)
    pub response: String,
    pub response_size: Option<u64>,
    pub response_type: Option<String>,
    pub response_content_type: Option<String>,
    pub ready_state: Option<ReadyState>,
    pub request_headers: Vec<Attribute>,
    pub response_headers: Vec<Attribute>,
    /// Every top-level field of the captured object, in capture order.
    /// Feeds the GENERAL section after reserved keys are filtered out.
    pub attributes: Vec<Attribute>,
}

impl NetworkRequest {
    /// Milliseconds between start and end
    ///
    /// `None` while in flight, and for timestamps too far apart to subtract.
    pub fn duration_ms(&self) -> Option<i64> {
        self.end_time?.checked_sub(self.start_time)
    }

    pub fn has_request_body(&self) -> bool {
        !self.data_sent.is_empty()
    }

    pub fn has_response_body(&self) -> bool {
        !self.response.is_empty()
    }
}

/// A dispatched state-management action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReduxAction {
    pub id: Option<String>,
    /// Epoch milliseconds
    pub start_time: i64,
    pub action_type: String,
    pub payload: Value,
}

impl ReduxAction {
    /// Payload as indented JSON (two spaces per level)
    pub fn payload_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| value_text(&self.payload))
    }

    pub fn type_upper(&self) -> String {
        self.action_type.to_uppercase()
    }
}
