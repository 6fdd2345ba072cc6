//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for askdeck
#[derive(Parser, Debug)]
#[command(name = "askdeck")]
#[command(author, version, about = "Ask a question and watch the answer type itself out")]
#[command(long_about = r#"
askdeck sends a question to an answering service and reveals the answer
in the terminal one character at a time, the way it appears on the web
panel.

Configuration files are loaded from (later sources win):
1. ~/.config/askdeck/config.toml   Global config
2. ./askdeck.toml or ./.askdeck.toml   Project config
3. --config <path>                 Explicit config file

Examples:
  askdeck "What is the capital of France?"
  askdeck --chat
  askdeck --tui --service-url http://answers.internal:9000
"#)]
pub struct Cli {
    /// The question to ask (omit when using --chat or --tui)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Start the full-screen TUI
    #[arg(short, long)]
    pub tui: bool,

    /// Base URL of the answering service (overrides config)
    #[arg(long, value_name = "URL")]
    pub service_url: Option<String>,

    /// Show the whole answer at once instead of typing it out
    #[arg(long)]
    pub instant: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
