//! CLI entrypoint for askdeck
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use askdeck_application::{AnswerPanel, AnsweringService, SharedQuestionField, SubmitOutcome};
use askdeck_infrastructure::{ConfigLoader, HttpAnsweringService};
use askdeck_presentation::chat::AskRepl;
use askdeck_presentation::cli::Cli;
use askdeck_presentation::display::TerminalDisplay;
use askdeck_presentation::tui::TuiApp;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli);

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(err) => bail!("Failed to load configuration: {}", err),
        }
    };

    for problem in config.validate() {
        warn!("Config: {}", problem);
    }

    let base_url = cli
        .service_url
        .clone()
        .unwrap_or_else(|| config.service.base_url.clone());

    let interval = if cli.instant {
        Duration::ZERO
    } else {
        config.reveal_interval()
    };

    info!(base_url = %base_url, "Starting askdeck");

    // === Dependency Injection ===
    let service: Arc<dyn AnsweringService> = Arc::new(HttpAnsweringService::new(&base_url));

    if cli.tui {
        let app = TuiApp::new(service, interval);
        app.run().await?;
        return Ok(());
    }

    if cli.chat {
        let field = SharedQuestionField::new();
        let display = Arc::new(TerminalDisplay::new());
        let panel =
            AnswerPanel::new(Arc::new(field.clone()), service, display).with_interval(interval);

        let mut repl = AskRepl::new(panel, field)
            .with_progress(config.repl.show_progress && !cli.quiet)
            .with_history_file(config.repl.history_file.clone().map(PathBuf::from));

        repl.run().await?;
        return Ok(());
    }

    // One-shot mode - a question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("A question is required. Use --chat or --tui for interactive mode."),
    };

    ask_once(service, interval, &question, cli.quiet).await;

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// The reveal owns stdout and the TUI owns the whole screen, so logs go
/// to stderr normally and to a file under the data directory in TUI
/// mode. The returned guard must be held for the life of the program.
fn init_logging(cli: &Cli) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if cli.tui {
        let logs_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("askdeck")
            .join("logs");
        let _ = std::fs::create_dir_all(&logs_dir);

        let file_appender = tracing_appender::rolling::daily(&logs_dir, "askdeck.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(false)
            .init();

        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();

        None
    }
}

/// Ask a single question and type the answer onto stdout
///
/// Failures end up in the display as the fixed failure notice, exactly
/// like the interactive modes, so the exit is clean either way.
async fn ask_once(
    service: Arc<dyn AnsweringService>,
    interval: Duration,
    question: &str,
    quiet: bool,
) {
    let field = SharedQuestionField::new();
    field.set(question);

    let display = Arc::new(TerminalDisplay::new());
    let mut panel = AnswerPanel::new(Arc::new(field), service, display).with_interval(interval);

    let spinner = if quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Waiting for an answer...");
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    };

    let outcome = panel.submit().await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if outcome == SubmitOutcome::RevealStarted {
        panel.wait_for_reveal().await;
    }

    println!();
}
