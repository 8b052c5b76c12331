//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use anyhow::{Context, Result};
use arboard::Clipboard;
use serde_json::Value;

/// Copy text to the system clipboard
///
/// Returns Ok(()) on success, or an error if clipboard access fails.
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Somewhere copied text can go
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Copy a value if it is text
///
/// Returns `Ok(false)` without touching the sink for anything that is not a
/// JSON string.
pub fn copy_value(sink: &mut dyn ClipboardSink, value: &Value) -> Result<bool> {
    let Value::String(text) = value else {
        tracing::debug!("Skipping clipboard copy of non-text value");
        return Ok(false);
    };
    sink.set_text(text)?;
    tracing::info!("Copied {} bytes to clipboard", text.len());
    Ok(true)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// In-memory clipboard for tests
    #[derive(Default)]
    pub(crate) struct MemoryClipboard {
        pub contents: Option<String>,
        pub writes: usize,
    }

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.contents = Some(text.to_string());
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_copy_text_value() {
        let mut sink = MemoryClipboard::default();
        let copied = copy_value(&mut sink, &json!("https://example.com/?a=1")).unwrap();
        assert!(copied);
        assert_eq!(sink.contents.as_deref(), Some("https://example.com/?a=1"));
    }

    #[test]
    fn test_non_text_is_noop() {
        let mut sink = MemoryClipboard::default();
        for value in [json!(1), json!(null), json!({ "a": 1 }), json!(["x"]), json!(true)] {
            assert!(!copy_value(&mut sink, &value).unwrap());
        }
        assert_eq!(sink.writes, 0);
        assert!(sink.contents.is_none());
    }
}
