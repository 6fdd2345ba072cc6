//! Main TUI application

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use askdeck_application::{AnswerPanel, AnsweringService, SharedQuestionField};

use super::event::{PanelCommand, PanelEvent};
use super::keys::{handle_key_event, KeyAction};
use super::layout::PanelLayout;
use super::state::TuiState;
use super::widgets::{AnswerWidget, InputWidget, StatusBarWidget};
use crate::display::{ChannelDisplay, DisplayEvent};

/// Full-screen application wrapping an answer panel
///
/// The panel runs in its own task and talks to the event loop over
/// channels: commands go in, display mutations and lifecycle events come
/// back. The loop itself only edits the input field and redraws.
pub struct TuiApp {
    cmd_tx: mpsc::UnboundedSender<PanelCommand>,
    display_rx: mpsc::UnboundedReceiver<DisplayEvent>,
    event_rx: mpsc::UnboundedReceiver<PanelEvent>,
    panel_task: JoinHandle<()>,
}

impl TuiApp {
    pub fn new(service: Arc<dyn AnsweringService>, interval: Duration) -> Self {
        let field = SharedQuestionField::new();
        let (display, display_rx) = ChannelDisplay::new();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let panel = AnswerPanel::new(Arc::new(field.clone()), service, Arc::new(display))
            .with_interval(interval);

        let panel_task = tokio::spawn(drive_panel(panel, field, cmd_rx, event_tx));

        Self {
            cmd_tx,
            display_rx,
            event_rx,
            panel_task,
        }
    }

    /// Run the event loop until the user quits
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal even when a draw panics
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            handle_terminal_event(&self.cmd_tx, &mut state, event);
                        }
                        Some(Err(_)) => {}
                        None => state.should_quit = true,
                    }
                }
                Some(event) = self.display_rx.recv() => {
                    state.apply_display_event(event);
                }
                Some(event) = self.event_rx.recv() => {
                    state.apply_panel_event(event);
                }
                // Keeps the frame fresh while nothing else is happening
                _ = tick.tick() => {}
            }
        }

        let _ = self.cmd_tx.send(PanelCommand::Quit);
        let _ = self.panel_task.await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}

fn render(frame: &mut Frame, state: &TuiState) {
    let layout = PanelLayout::compute(frame.area());

    frame.render_widget(InputWidget::new(state), layout.input);
    frame.render_widget(AnswerWidget::new(state), layout.answer);
    frame.render_widget(StatusBarWidget::new(state), layout.status);
}

fn handle_terminal_event(
    cmd_tx: &mpsc::UnboundedSender<PanelCommand>,
    state: &mut TuiState,
    event: Event,
) {
    if let Event::Key(key) = event {
        apply_action(cmd_tx, state, handle_key_event(key));
    }
}

fn apply_action(
    cmd_tx: &mpsc::UnboundedSender<PanelCommand>,
    state: &mut TuiState,
    action: KeyAction,
) {
    match action {
        KeyAction::None => {}
        KeyAction::InsertChar(c) => state.insert_char(c),
        KeyAction::DeleteChar => state.delete_char(),
        KeyAction::CursorLeft => state.cursor_left(),
        KeyAction::CursorRight => state.cursor_right(),
        KeyAction::CursorHome => state.cursor_home(),
        KeyAction::CursorEnd => state.cursor_end(),
        KeyAction::Submit => {
            // The field text stays put, exactly like the web panel
            state.waiting = true;
            let _ = cmd_tx.send(PanelCommand::Submit(state.input.clone()));
        }
        KeyAction::Quit => state.should_quit = true,
    }
}

/// Background task that owns the panel
///
/// A select keeps the task responsive while an answer is typing, so a
/// submission arriving mid-reveal supersedes the reveal instead of
/// queueing behind it.
async fn drive_panel(
    mut panel: AnswerPanel,
    field: SharedQuestionField,
    mut cmd_rx: mpsc::UnboundedReceiver<PanelCommand>,
    event_tx: mpsc::UnboundedSender<PanelEvent>,
) {
    loop {
        let cmd = if panel.has_pending_reveal() {
            tokio::select! {
                cmd = cmd_rx.recv() => cmd,
                _ = panel.wait_for_reveal() => {
                    let _ = event_tx.send(PanelEvent::RevealFinished);
                    continue;
                }
            }
        } else {
            cmd_rx.recv().await
        };

        match cmd {
            Some(PanelCommand::Submit(text)) => {
                field.set(text);
                let outcome = panel.submit().await;
                let _ = event_tx.send(PanelEvent::SubmitEnded(outcome));
            }
            Some(PanelCommand::Quit) | None => break,
        }
    }

    panel.cancel_reveal().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use askdeck_application::{AskError, SubmitOutcome};
    use askdeck_domain::{Answer, Notice, Question};

    struct ScriptedService {
        responses: Mutex<VecDeque<Result<Answer, AskError>>>,
    }

    impl ScriptedService {
        fn with(responses: Vec<Result<Answer, AskError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
            })
        }
    }

    #[async_trait]
    impl AnsweringService for ScriptedService {
        async fn ask(&self, _question: &Question) -> Result<Answer, AskError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AskError::Connection("no scripted response".to_string())))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_panel_task_reports_reveal_lifecycle() {
        let service = ScriptedService::with(vec![Ok(Answer::new("hi"))]);
        let mut app = TuiApp::new(service, Duration::from_millis(30));

        app.cmd_tx
            .send(PanelCommand::Submit("why?".to_string()))
            .unwrap();

        assert_eq!(app.display_rx.recv().await, Some(DisplayEvent::Cleared));
        assert_eq!(
            app.event_rx.recv().await,
            Some(PanelEvent::SubmitEnded(SubmitOutcome::RevealStarted))
        );
        assert_eq!(
            app.display_rx.recv().await,
            Some(DisplayEvent::Appended("h".to_string()))
        );
        assert_eq!(
            app.display_rx.recv().await,
            Some(DisplayEvent::Appended("i".to_string()))
        );
        assert_eq!(app.event_rx.recv().await, Some(PanelEvent::RevealFinished));
    }

    #[tokio::test(start_paused = true)]
    async fn test_panel_task_empty_question() {
        let service = ScriptedService::with(vec![]);
        let mut app = TuiApp::new(service, Duration::from_millis(30));

        app.cmd_tx
            .send(PanelCommand::Submit("   ".to_string()))
            .unwrap();

        assert_eq!(app.display_rx.recv().await, Some(DisplayEvent::Cleared));
        assert_eq!(
            app.display_rx.recv().await,
            Some(DisplayEvent::NoticeSet(Notice::EmptyQuestion))
        );
        assert_eq!(
            app.event_rx.recv().await,
            Some(PanelEvent::SubmitEnded(SubmitOutcome::EmptyQuestion))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_mid_reveal_supersedes() {
        let long = "a long answer that keeps typing for a while";
        let service = ScriptedService::with(vec![
            Ok(Answer::new(long)),
            Ok(Answer::new("B")),
        ]);
        let mut app = TuiApp::new(service, Duration::from_millis(30));

        app.cmd_tx
            .send(PanelCommand::Submit("first".to_string()))
            .unwrap();
        assert_eq!(app.display_rx.recv().await, Some(DisplayEvent::Cleared));
        assert_eq!(
            app.event_rx.recv().await,
            Some(PanelEvent::SubmitEnded(SubmitOutcome::RevealStarted))
        );
        assert_eq!(
            app.display_rx.recv().await,
            Some(DisplayEvent::Appended("a".to_string()))
        );

        app.cmd_tx
            .send(PanelCommand::Submit("second".to_string()))
            .unwrap();

        // Drain until the display is cleared for the second submission,
        // then the only content left is the second answer
        loop {
            match app.display_rx.recv().await {
                Some(DisplayEvent::Cleared) => break,
                Some(DisplayEvent::Appended(_)) => {}
                other => panic!("unexpected display event: {:?}", other),
            }
        }
        assert_eq!(
            app.event_rx.recv().await,
            Some(PanelEvent::SubmitEnded(SubmitOutcome::RevealStarted))
        );
        assert_eq!(
            app.display_rx.recv().await,
            Some(DisplayEvent::Appended("B".to_string()))
        );
        assert_eq!(app.event_rx.recv().await, Some(PanelEvent::RevealFinished));
    }

    #[tokio::test]
    async fn test_quit_stops_panel_task() {
        let service = ScriptedService::with(vec![]);
        let app = TuiApp::new(service, Duration::ZERO);

        app.cmd_tx.send(PanelCommand::Quit).unwrap();
        app.panel_task.await.unwrap();
    }
}
