// netwatch - detail views and share reports for captured records
//
// Loads configuration, installs logging, then runs one CLI command against
// a captured record. The interactive detail screen routes logs into an
// in-memory buffer; every other command logs to stderr.

use anyhow::Result;
use clap::Parser;
use netwatch::cli::{self, Cli};
use netwatch::config::Config;
use netwatch::logging::{self, LogBuffer, LogSink};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    let log_buffer = LogBuffer::new();
    let sink = if cli.command.is_interactive() {
        LogSink::Buffer(log_buffer.clone())
    } else {
        LogSink::Stderr
    };

    // Keep the guard alive for the whole run so file logs flush on exit
    let _log_guard = logging::init(&config.logging, sink)?;

    tracing::debug!(
        "Starting netwatch {} (share target: {})",
        netwatch::config::VERSION,
        config.share.target.as_str()
    );

    cli::run(cli.command, config, log_buffer).await
}
