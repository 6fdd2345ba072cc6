//! REPL for asking questions interactively

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

use askdeck_application::{AnswerPanel, SharedQuestionField, SubmitOutcome};

/// Interactive ask REPL
///
/// Every line is submitted exactly as typed, whitespace included, and
/// the answer types itself out below the prompt before the next prompt
/// appears. Slash commands are the only lines that never reach the
/// answering service.
pub struct AskRepl {
    panel: AnswerPanel,
    field: SharedQuestionField,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl AskRepl {
    pub fn new(panel: AnswerPanel, field: SharedQuestionField) -> Self {
        Self {
            panel,
            field,
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether a spinner is shown while waiting for the service
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the REPL until the user quits
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("askdeck").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.starts_with('/') {
                        if self.handle_command(trimmed) {
                            break;
                        }
                        continue;
                    }

                    if !trimmed.is_empty() {
                        let _ = rl.add_history_entry(trimmed);
                    }

                    // The raw line goes through untouched; a blank one
                    // still submits and earns the empty-question notice
                    self.process_question(&line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             askdeck - Chat Mode             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a question and press Enter.");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle a slash command, returning true when the REPL should exit
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                println!("Anything else is sent to the answering service as a question.");
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&mut self, line: &str) {
        println!();

        self.field.set(line);

        let spinner = if self.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Waiting for an answer...");
            pb.enable_steady_tick(Duration::from_millis(80));
            Some(pb)
        } else {
            None
        };

        let outcome = self.panel.submit().await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        if outcome == SubmitOutcome::RevealStarted {
            self.panel.wait_for_reveal().await;
        }

        println!();
        println!();
    }
}
