//! Sharing export text
//!
//! A share target is the one collaborator that can fail at runtime. Failures
//! are contained here: they are logged, handed to a [`Notifier`] as a
//! user-visible error, and turned into [`ShareOutcome::Failed`]. Nothing
//! propagates past [`share_text`].

use crate::clipboard::copy_to_clipboard;
use crate::config::{ShareConfig, ShareKind};
use crate::export::export_record;
use crate::record::LogRecord;
use crate::sections::SectionFormatter;
use anyhow::{Context, Result};
use chrono::Utc;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

/// Title used for share failure notifications
pub const SHARE_ERROR_TITLE: &str = "Error";

/// Boxed future returned by share targets
pub type ShareFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// Destination for shared text
pub trait ShareTarget: Send + Sync {
    /// Short name for logs and toasts
    fn name(&self) -> &'static str;

    /// Hand the text to the destination
    fn share<'a>(&'a self, text: &'a str) -> ShareFuture<'a>;
}

/// User-visible failure surface
pub trait Notifier: Send + Sync {
    fn notify_error(&self, title: &str, message: &str);
}

/// Result of a share attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared { target: &'static str, bytes: usize },
    Failed { message: String },
}

impl ShareOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Shared { .. })
    }

    /// Message for a toast or status line
    pub fn toast_message(&self) -> String {
        match self {
            Self::Shared { target, .. } => format!("✓ Shared via {}", target),
            Self::Failed { message } => format!("✗ {}", message),
        }
    }
}

/// Share text, containing any failure
pub async fn share_text(
    target: &dyn ShareTarget,
    notifier: &dyn Notifier,
    text: &str,
) -> ShareOutcome {
    match target.share(text).await {
        Ok(()) => {
            tracing::info!("Shared {} bytes via {}", text.len(), target.name());
            ShareOutcome::Shared {
                target: target.name(),
                bytes: text.len(),
            }
        }
        Err(e) => {
            let message = format!("{:#}", e);
            tracing::warn!("Share via {} failed: {}", target.name(), message);
            notifier.notify_error(SHARE_ERROR_TITLE, &message);
            ShareOutcome::Failed { message }
        }
    }
}

/// Export a record and share it; `Unknown` records share nothing
pub async fn share_record(
    formatter: &SectionFormatter,
    record: &LogRecord,
    target: &dyn ShareTarget,
    notifier: &dyn Notifier,
) -> Option<ShareOutcome> {
    if matches!(record, LogRecord::Unknown) {
        tracing::debug!("Nothing to share for unknown record");
        return None;
    }
    let text = export_record(formatter, record);
    Some(share_text(target, notifier, &text).await)
}

/// Build the configured share target
pub fn build_target(config: &ShareConfig) -> Box<dyn ShareTarget> {
    match config.target {
        ShareKind::File => Box::new(FileShare::new(config.dir.clone())),
        ShareKind::Stdout => Box::new(StdoutShare),
        ShareKind::Clipboard => Box::new(ClipboardShare),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Targets
// ─────────────────────────────────────────────────────────────────────────────

/// Writes each share to its own text file
#[derive(Debug, Clone)]
pub struct FileShare {
    dir: PathBuf,
}

impl FileShare {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Format: netwatch-YYYYMMDD-HHMMSS-mmm.txt
    fn file_path(&self) -> PathBuf {
        let stamp = Utc::now().format("%Y%m%d-%H%M%S-%3f");
        self.dir.join(format!("netwatch-{}.txt", stamp))
    }
}

impl ShareTarget for FileShare {
    fn name(&self) -> &'static str {
        "file"
    }

    fn share<'a>(&'a self, text: &'a str) -> ShareFuture<'a> {
        Box::pin(async move {
            tokio::fs::create_dir_all(&self.dir)
                .await
                .context("Failed to create export directory")?;

            let path = self.file_path();
            tokio::fs::write(&path, text)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;

            tracing::debug!("Export written to {}", path.display());
            Ok(())
        })
    }
}

/// Prints the text to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutShare;

impl ShareTarget for StdoutShare {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn share<'a>(&'a self, text: &'a str) -> ShareFuture<'a> {
        Box::pin(async move {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(text.as_bytes())
                .await
                .context("Failed to write to stdout")?;
            stdout
                .write_all(b"\n")
                .await
                .context("Failed to write to stdout")?;
            stdout.flush().await.context("Failed to flush stdout")?;
            Ok(())
        })
    }
}

/// Places the text on the system clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardShare;

impl ShareTarget for ClipboardShare {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn share<'a>(&'a self, text: &'a str) -> ShareFuture<'a> {
        let text = text.to_string();
        Box::pin(async move {
            // arboard blocks on some platforms; keep it off the runtime threads
            tokio::task::spawn_blocking(move || copy_to_clipboard(&text))
                .await
                .context("Clipboard task panicked")?
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Prints notifications to stderr (headless commands)
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}

/// A notification waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Forwards notifications to the UI loop
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn new(sender: mpsc::UnboundedSender<Notice>) -> Self {
        Self { sender }
    }
}

impl Notifier for ChannelNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        // Receiver gone means the view closed; nobody left to tell
        let _ = self.sender.send(Notice {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_error(&self, title: &str, message: &str) {
            self.notices
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
        }
    }

    struct FailingShare;

    impl ShareTarget for FailingShare {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn share<'a>(&'a self, _text: &'a str) -> ShareFuture<'a> {
            Box::pin(async { Err(anyhow::anyhow!("share sheet dismissed")) })
        }
    }

    #[derive(Default)]
    struct CapturingShare {
        shared: Mutex<Vec<String>>,
    }

    impl ShareTarget for CapturingShare {
        fn name(&self) -> &'static str {
            "capture"
        }

        fn share<'a>(&'a self, text: &'a str) -> ShareFuture<'a> {
            Box::pin(async move {
                self.shared.lock().unwrap().push(text.to_string());
                Ok(())
            })
        }
    }

    #[tokio::test]
    async fn test_failure_is_contained_and_notified() {
        let notifier = RecordingNotifier::default();
        let outcome = share_text(&FailingShare, &notifier, "report").await;

        assert_eq!(
            outcome,
            ShareOutcome::Failed {
                message: "share sheet dismissed".to_string()
            }
        );
        let notices = notifier.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, "Error");
        assert_eq!(notices[0].1, "share sheet dismissed");
    }

    #[tokio::test]
    async fn test_success_does_not_notify() {
        let notifier = RecordingNotifier::default();
        let target = CapturingShare::default();
        let outcome = share_text(&target, &notifier, "hello").await;

        assert!(outcome.is_success());
        assert_eq!(outcome.toast_message(), "✓ Shared via capture");
        assert!(notifier.notices.lock().unwrap().is_empty());
        assert_eq!(*target.shared.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_share_record_action_text() {
        let record = LogRecord::classify(&json!({
            "action": { "type": "get_user", "payload": { "id": 1 } }
        }));
        let target = CapturingShare::default();
        let outcome = share_record(
            &SectionFormatter::default(),
            &record,
            &target,
            &RecordingNotifier::default(),
        )
        .await;

        assert!(outcome.unwrap().is_success());
        assert_eq!(
            target.shared.lock().unwrap()[0],
            "GET_USER\n{\n  \"id\": 1\n}"
        );
    }

    #[tokio::test]
    async fn test_share_unknown_is_noop() {
        let target = CapturingShare::default();
        let outcome = share_record(
            &SectionFormatter::default(),
            &LogRecord::Unknown,
            &target,
            &RecordingNotifier::default(),
        )
        .await;

        assert!(outcome.is_none());
        assert!(target.shared.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_share_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let target = FileShare::new(dir.path().join("exports"));
        let outcome = share_text(&target, &RecordingNotifier::default(), "GENERAL\n").await;
        assert!(outcome.is_success());

        let entries: Vec<_> = std::fs::read_dir(target.dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(std::fs::read_to_string(&entries[0]).unwrap(), "GENERAL\n");
    }

    #[tokio::test]
    async fn test_file_share_failure_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the export directory should be
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "x").unwrap();

        let notifier = RecordingNotifier::default();
        let outcome = share_text(&FileShare::new(blocker), &notifier, "report").await;

        assert!(!outcome.is_success());
        assert_eq!(notifier.notices.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_channel_notifier_forwards() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let outcome = share_text(&FailingShare, &ChannelNotifier::new(tx), "x").await;
        assert!(!outcome.is_success());

        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "share sheet dismissed");
    }

    #[test]
    fn test_build_target_from_config() {
        let mut config = ShareConfig::default();
        config.target = ShareKind::Stdout;
        assert_eq!(build_target(&config).name(), "stdout");
        config.target = ShareKind::Clipboard;
        assert_eq!(build_target(&config).name(), "clipboard");
        config.target = ShareKind::File;
        assert_eq!(build_target(&config).name(), "file");
    }
}
