// Detail screen state
//
// Holds one immutable record snapshot plus its derived view, and turns key
// presses into actions. Side effects (clipboard writes, shares) are handed
// back to the event loop as `AppAction`s so this state stays testable.

use super::components::toast::Toast;
use super::scroll::ScrollState;
use crate::clipboard::{copy_value, ClipboardSink};
use crate::config::Config;
use crate::detail::DetailView;
use crate::export::export_record;
use crate::logging::LogBuffer;
use crate::record::LogRecord;
use crate::sections::{SectionFormatter, SectionKind};
use crate::share::{Notice, ShareOutcome};
use crate::status::StatusPalette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    None,
    Quit,
    /// Share this text through the configured target
    Share(String),
    /// Copy the General `url` row
    CopyUrl,
    /// Copy the response body or action payload
    CopyBody,
}

/// Detail screen state
pub struct App {
    pub record: LogRecord,
    /// `None` for unknown records: the screen renders empty
    pub view: Option<DetailView>,
    pub formatter: SectionFormatter,
    pub palette: StatusPalette,
    pub scroll: ScrollState,
    pub toast: Option<Toast>,
    pub log_buffer: Option<LogBuffer>,
    /// A share is running; further share presses are ignored
    pub share_in_flight: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(record: LogRecord, config: &Config) -> Self {
        let formatter = config.display.formatter();
        let view = DetailView::build(&formatter, &record, &config.display.date_format);

        Self {
            record,
            view,
            formatter,
            palette: config.display.colors.clone(),
            scroll: ScrollState::new(),
            toast: None,
            log_buffer: None,
            share_in_flight: false,
            should_quit: false,
        }
    }

    pub fn with_log_buffer(mut self, buffer: LogBuffer) -> Self {
        self.log_buffer = Some(buffer);
        self
    }

    /// Map a key press to an action
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return AppAction::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                AppAction::Quit
            }
            KeyCode::Char('s') => self.begin_share(),
            KeyCode::Char('y') => AppAction::CopyUrl,
            KeyCode::Char('c') => AppAction::CopyBody,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll.scroll_up();
                AppAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll.scroll_down();
                AppAction::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.scroll.scroll_left();
                AppAction::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.scroll.scroll_right();
                AppAction::None
            }
            KeyCode::PageUp => {
                self.scroll.page_up();
                AppAction::None
            }
            KeyCode::PageDown => {
                self.scroll.page_down();
                AppAction::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll.scroll_to_top();
                AppAction::None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll.scroll_to_bottom();
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    fn begin_share(&mut self) -> AppAction {
        if self.share_in_flight || self.view.is_none() {
            return AppAction::None;
        }
        self.share_in_flight = true;
        AppAction::Share(export_record(&self.formatter, &self.record))
    }

    /// Raw value behind a copy action, if the record has one
    pub fn copy_target(&self, action: &AppAction) -> Option<Value> {
        let view = self.view.as_ref()?;
        let wanted = match action {
            AppAction::CopyUrl => SectionKind::General,
            AppAction::CopyBody => match self.record {
                LogRecord::ReduxAction(_) => SectionKind::Payload,
                _ => SectionKind::ResponseBody,
            },
            _ => return None,
        };
        view.sections
            .iter()
            .filter(|section| section.kind == wanted)
            .flat_map(|section| section.copy_targets())
            .next()
    }

    /// Perform a copy action against a clipboard sink and toast the result
    pub fn copy(&mut self, action: &AppAction, sink: &mut dyn ClipboardSink) {
        let Some(value) = self.copy_target(action) else {
            self.show_toast("Nothing to copy");
            return;
        };

        match copy_value(sink, &value) {
            Ok(true) => self.show_toast("✓ Copied to clipboard"),
            Ok(false) => self.show_toast("Nothing to copy"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    /// A share task finished
    ///
    /// Failures already arrived as a notice; only successes toast here.
    pub fn on_share_finished(&mut self, outcome: ShareOutcome) {
        self.share_in_flight = false;
        if outcome.is_success() {
            self.show_toast(outcome.toast_message());
        }
    }

    /// A notification from a share target
    pub fn on_notice(&mut self, notice: Notice) {
        self.toast = Some(Toast::error(&notice.title, &notice.message));
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}
