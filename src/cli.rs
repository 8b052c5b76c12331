// CLI module - command-line argument parsing and handlers
//
// Every record command takes a path to one captured record as JSON ("-"
// reads stdin):
// - show:   plain-text detail view
// - export: the share report
// - share:  export and hand to the configured share target
// - copy:   put one field on the clipboard
// - badge:  badge labels and color
// - kind:   classification only
// - view:   interactive detail screen
//
// Plus config management (--show, --path, --reset).

use crate::clipboard::SystemClipboard;
use crate::config::{Config, ShareKind, VERSION};
use crate::detail::DetailView;
use crate::export::{copy_text, export_record, CopyField};
use crate::logging::LogBuffer;
use crate::record::LogRecord;
use crate::share::{build_target, share_record, ShareOutcome, StderrNotifier};
use crate::status::Badge;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// netwatch - inspect captured network requests and state actions
#[derive(Parser)]
#[command(name = "netwatch")]
#[command(version = VERSION)]
#[command(about = "Detail views and share reports for captured records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the detail view of a record
    Show {
        /// Record JSON file ("-" for stdin)
        record: PathBuf,
    },

    /// Print the export report of a record
    Export {
        record: PathBuf,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Share the export report
    Share {
        record: PathBuf,

        /// Override the configured share target
        #[arg(long, value_enum)]
        target: Option<TargetArg>,
    },

    /// Copy one field of a record to the clipboard
    Copy {
        record: PathBuf,

        #[arg(long, value_enum, default_value_t = FieldArg::Url)]
        field: FieldArg,
    },

    /// Print the badge labels and color of a record
    Badge { record: PathBuf },

    /// Print how a record is classified
    Kind { record: PathBuf },

    /// Open the interactive detail screen
    View { record: PathBuf },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Commands {
    /// The interactive screen owns the terminal, so logs must not hit stderr
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::View { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    File,
    Stdout,
    Clipboard,
}

impl From<TargetArg> for ShareKind {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::File => ShareKind::File,
            TargetArg::Stdout => ShareKind::Stdout,
            TargetArg::Clipboard => ShareKind::Clipboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Url,
    Body,
    Report,
}

impl From<FieldArg> for CopyField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Url => CopyField::Url,
            FieldArg::Body => CopyField::Body,
            FieldArg::Report => CopyField::Report,
        }
    }
}

/// Run a parsed command
///
/// `log_buffer` is only used by the interactive screen. A failed share has
/// already been reported by its notifier; it only turns into a failing exit
/// code here.
pub async fn run(command: Commands, config: Config, log_buffer: LogBuffer) -> Result<ExitCode> {
    let result = match command {
        Commands::Show { record } => handle_show(&config, &LogRecord::load(&record)?),
        Commands::Export { record, output } => {
            handle_export(&config, &LogRecord::load(&record)?, output)
        }
        Commands::Share { record, target } => {
            let mut config = config;
            if let Some(target) = target {
                config.share.target = target.into();
            }
            if !handle_share(&config, &LogRecord::load(&record)?).await? {
                return Ok(ExitCode::FAILURE);
            }
            Ok(())
        }
        Commands::Copy { record, field } => {
            handle_copy(&config, &LogRecord::load(&record)?, field.into())
        }
        Commands::Badge { record } => handle_badge(&config, &LogRecord::load(&record)?),
        Commands::Kind { record } => {
            println!("{}", LogRecord::load(&record)?.kind().as_str());
            Ok(())
        }
        Commands::View { record } => {
            crate::tui::run_detail_view(LogRecord::load(&record)?, &config, log_buffer).await
        }
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show(&config)
            } else if reset {
                handle_config_reset()
            } else {
                // No flag provided, show help
                println!("Usage: netwatch config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
    };
    result.map(|()| ExitCode::SUCCESS)
}

fn handle_show(config: &Config, record: &LogRecord) -> Result<()> {
    let formatter = config.display.formatter();
    match DetailView::build(&formatter, record, &config.display.date_format) {
        Some(view) => print!("{}", view.to_text()),
        None => tracing::info!("Record is not a request or action; nothing to show"),
    }
    Ok(())
}

fn handle_export(config: &Config, record: &LogRecord, output: Option<PathBuf>) -> Result<()> {
    let report = export_record(&config.display.formatter(), record);
    match output {
        Some(path) => std::fs::write(&path, &report)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => println!("{}", report),
    }
    Ok(())
}

/// Returns whether the share went through
async fn handle_share(config: &Config, record: &LogRecord) -> Result<bool> {
    let target = build_target(&config.share);
    let formatter = config.display.formatter();

    match share_record(&formatter, record, target.as_ref(), &StderrNotifier).await {
        Some(outcome @ ShareOutcome::Shared { .. }) => {
            eprintln!("{}", outcome.toast_message());
            Ok(true)
        }
        // The notifier already printed the error
        Some(ShareOutcome::Failed { .. }) => Ok(false),
        None => {
            tracing::info!("Record is not a request or action; nothing to share");
            Ok(true)
        }
    }
}

fn handle_copy(config: &Config, record: &LogRecord, field: CopyField) -> Result<()> {
    let formatter = config.display.formatter();
    let Some(text) = copy_text(&formatter, record, field) else {
        eprintln!("Nothing to copy");
        return Ok(());
    };

    crate::clipboard::copy_value(&mut SystemClipboard, &serde_json::Value::String(text))?;
    eprintln!("✓ Copied to clipboard");
    Ok(())
}

fn handle_badge(config: &Config, record: &LogRecord) -> Result<()> {
    match Badge::for_record(record) {
        Some(badge) => println!(
            "{} {} {} {}",
            badge.label,
            badge.sub_label,
            badge.color.as_str(),
            config.display.colors.hex(badge.color)
        ),
        None => tracing::info!("Record is not a request or action; no badge"),
    }
    Ok(())
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(config: &Config) -> Result<()> {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Err(e) = Config::default().save() {
        bail!("Error writing config: {}", e);
    }

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
