//! Record classification and normalization
//!
//! Every captured log record is one of three things: a natively intercepted
//! request, a request captured on the JS bridge (fetch/XHR hook), or a
//! dispatched action. Anything else is `Unknown` and renders as nothing.
//!
//! Classification is total: it never fails, it only picks a variant. The
//! loose capture JSON is normalized here so downstream code sees a
//! fully-populated shape.

pub mod models;

pub use models::{value_text, Attribute, NetworkRequest, ReadyState, ReduxAction};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Source tag the capture layer writes for natively intercepted requests
const NATIVE_SOURCE: &str = "native";

/// A classified log record
#[derive(Debug, Clone, PartialEq)]
pub enum LogRecord {
    /// Request intercepted by the native HTTP hook
    NetworkRequest(NetworkRequest),
    /// Request intercepted by the bridge-level fetch/XHR hook
    BridgeNetworkRequest(NetworkRequest),
    /// Dispatched state-management action
    ReduxAction(ReduxAction),
    /// Not a shape we know how to render
    Unknown,
}

/// Coarse variant tag used to pick a rendering path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    NetworkRequest,
    ReduxAction,
    Unknown,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkRequest => "network_request",
            Self::ReduxAction => "redux_action",
            Self::Unknown => "unknown",
        }
    }
}

/// Classify a raw value without keeping the normalized record
pub fn classify(value: &Value) -> RecordKind {
    LogRecord::classify(value).kind()
}

impl LogRecord {
    /// Classify and normalize a captured value
    pub fn classify(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::Unknown;
        };

        if let Some(action) = parse_action(obj) {
            return Self::ReduxAction(action);
        }

        match parse_request(obj) {
            Some(request) if is_native(obj) => Self::NetworkRequest(request),
            Some(request) => Self::BridgeNetworkRequest(request),
            None => Self::Unknown,
        }
    }

    /// Parse a JSON document and classify it
    ///
    /// Only malformed JSON is an error. Well-formed JSON of an unknown
    /// shape classifies as `Unknown`.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input).context("Record is not valid JSON")?;
        Ok(Self::classify(&value))
    }

    /// Read a record from a file, or stdin when the path is `-`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = if path == Path::new("-") {
            std::io::read_to_string(std::io::stdin()).context("Failed to read record from stdin")?
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read record file {}", path.display()))?
        };

        let record = Self::from_json_str(&contents)?;
        tracing::debug!("Classified {} as {}", path.display(), record.kind().as_str());
        Ok(record)
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::NetworkRequest(_) | Self::BridgeNetworkRequest(_) => RecordKind::NetworkRequest,
            Self::ReduxAction(_) => RecordKind::ReduxAction,
            Self::Unknown => RecordKind::Unknown,
        }
    }

    /// Request view shared by both capture paths
    pub fn as_request(&self) -> Option<&NetworkRequest> {
        match self {
            Self::NetworkRequest(request) | Self::BridgeNetworkRequest(request) => Some(request),
            Self::ReduxAction(_) | Self::Unknown => None,
        }
    }

    pub fn as_action(&self) -> Option<&ReduxAction> {
        match self {
            Self::ReduxAction(action) => Some(action),
            Self::NetworkRequest(_) | Self::BridgeNetworkRequest(_) | Self::Unknown => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Normalization
// ─────────────────────────────────────────────────────────────────────────────

fn parse_action(obj: &Map<String, Value>) -> Option<ReduxAction> {
    let action = obj.get("action")?.as_object()?;
    let action_type = action.get("type")?.as_str()?.to_string();

    Some(ReduxAction {
        id: record_id(obj),
        start_time: millis(obj.get("startTime")).unwrap_or(0),
        action_type,
        payload: action.get("payload").cloned().unwrap_or(Value::Null),
    })
}

fn parse_request(obj: &Map<String, Value>) -> Option<NetworkRequest> {
    let url = obj.get("url")?.as_str()?.to_string();
    let method = obj.get("method")?.as_str()?.to_string();

    Some(NetworkRequest {
        id: record_id(obj),
        method,
        url,
        status: obj
            .get("status")
            .and_then(Value::as_u64)
            .filter(|code| (1..=999).contains(code))
            .map(|code| code as u16),
        start_time: millis(obj.get("startTime")).unwrap_or(0),
        end_time: millis(obj.get("endTime")),
        data_sent: body_text(obj.get("dataSent")),
        response: body_text(obj.get("response")),
        response_size: obj.get("responseSize").and_then(Value::as_u64),
        response_type: string_field(obj, "responseType"),
        response_content_type: string_field(obj, "responseContentType"),
        ready_state: obj
            .get("readyState")
            .and_then(Value::as_u64)
            .and_then(ReadyState::from_code),
        request_headers: header_entries(obj.get("requestHeaders")),
        response_headers: header_entries(obj.get("responseHeaders")),
        attributes: obj
            .iter()
            .map(|(key, value)| Attribute::new(key.clone(), value.clone()))
            .collect(),
    })
}

fn is_native(obj: &Map<String, Value>) -> bool {
    obj.get("type")
        .and_then(Value::as_str)
        .is_some_and(|tag| tag.eq_ignore_ascii_case(NATIVE_SOURCE))
}

fn record_id(obj: &Map<String, Value>) -> Option<String> {
    obj.get("_id")
        .or_else(|| obj.get("id"))
        .filter(|v| !v.is_null())
        .map(value_text)
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Epoch milliseconds, tolerating float timestamps
fn millis(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

/// Body text: strings raw, null/missing empty, anything else compact JSON
fn body_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => value_text(v),
    }
}

/// Header map entries in capture order; anything but an object is empty
fn header_entries(value: Option<&Value>) -> Vec<Attribute> {
    value
        .and_then(Value::as_object)
        .map(|headers| {
            headers
                .iter()
                .map(|(key, value)| Attribute::new(key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}
