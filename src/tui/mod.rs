// TUI module - Terminal User Interface
//
// This module manages the detail screen using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Running shares in the background and surfacing their results

pub mod app;
pub mod components;
pub mod scroll;
pub mod ui;

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::record::LogRecord;
use crate::share::{build_target, share_text, ChannelNotifier, Notice, ShareOutcome, ShareTarget};
use anyhow::{Context, Result};
use app::{App, AppAction};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Channels and collaborators the event loop needs besides the app state
struct Runtime {
    target: Arc<dyn ShareTarget>,
    notifier: Arc<ChannelNotifier>,
    notice_rx: mpsc::UnboundedReceiver<Notice>,
    done_tx: mpsc::UnboundedSender<ShareOutcome>,
    done_rx: mpsc::UnboundedReceiver<ShareOutcome>,
}

/// Show the detail screen for one record
///
/// Sets up the terminal, runs the event loop until the user backs out, and
/// restores the terminal even if the loop failed.
pub async fn run_detail_view(
    record: LogRecord,
    config: &Config,
    log_buffer: LogBuffer,
) -> Result<()> {
    let mut app = App::new(record, config).with_log_buffer(log_buffer);

    let (notice_tx, notice_rx) = mpsc::unbounded_channel();
    let (done_tx, done_rx) = mpsc::unbounded_channel();
    let mut runtime = Runtime {
        target: Arc::from(build_target(&config.share)),
        notifier: Arc::new(ChannelNotifier::new(notice_tx)),
        notice_rx,
        done_tx,
        done_rx,
    };

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut runtime).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on keyboard input, a redraw tick, share failure notices and share
/// completions, responding to whichever arrives first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runtime: &mut Runtime,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            key = poll_key() => {
                if let Some(key) = key {
                    let action = app.handle_key(key);
                    dispatch(app, runtime, action);
                }
            }

            _ = tick_interval.tick() => {
                app.clear_expired_toast();
            }

            Some(notice) = runtime.notice_rx.recv() => {
                app.on_notice(notice);
            }

            Some(outcome) = runtime.done_rx.recv() => {
                app.on_share_finished(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

async fn poll_key() -> Option<KeyEvent> {
    if !event::poll(Duration::from_millis(10)).unwrap_or(false) {
        return None;
    }
    match event::read() {
        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

fn dispatch(app: &mut App, runtime: &Runtime, action: AppAction) {
    match action {
        AppAction::None | AppAction::Quit => {}
        AppAction::CopyUrl | AppAction::CopyBody => {
            app.copy(&action, &mut SystemClipboard);
        }
        AppAction::Share(text) => {
            let target = Arc::clone(&runtime.target);
            let notifier = Arc::clone(&runtime.notifier);
            let done_tx = runtime.done_tx.clone();
            tokio::spawn(async move {
                let outcome = share_text(target.as_ref(), notifier.as_ref(), &text).await;
                // Receiver gone means the screen already closed
                let _ = done_tx.send(outcome);
            });
        }
    }
}
