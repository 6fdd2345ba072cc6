//! TUI application state

use askdeck_application::SubmitOutcome;
use askdeck_domain::Notice;

use super::event::PanelEvent;
use crate::display::DisplayEvent;

/// Single source of truth for everything the TUI renders
///
/// The key handler edits the input field; display and panel events from
/// the panel task drive the answer region. The cursor is a byte offset
/// into `input`, always on a character boundary.
#[derive(Debug, Default)]
pub struct TuiState {
    /// Question field text
    pub input: String,
    /// Cursor position as a byte offset into `input`
    pub cursor_pos: usize,
    /// Revealed answer text
    pub answer: String,
    /// Notice shown instead of an answer, if any
    pub notice: Option<Notice>,
    /// A submission is in flight and nothing has reached the display yet
    pub waiting: bool,
    /// An answer is still being typed out
    pub revealing: bool,
    /// The event loop should exit after the next draw
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let before = &self.input[..self.cursor_pos];
            if let Some(c) = before.chars().next_back() {
                self.cursor_pos -= c.len_utf8();
                self.input.remove(self.cursor_pos);
            }
        }
    }

    pub fn cursor_left(&mut self) {
        let before = &self.input[..self.cursor_pos];
        if let Some(c) = before.chars().next_back() {
            self.cursor_pos -= c.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        let after = &self.input[self.cursor_pos..];
        if let Some(c) = after.chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Apply one display mutation from the panel task
    pub fn apply_display_event(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::Cleared => {
                self.answer.clear();
                self.notice = None;
            }
            DisplayEvent::Appended(text) => {
                self.answer.push_str(&text);
                self.waiting = false;
            }
            DisplayEvent::NoticeSet(notice) => {
                self.answer.clear();
                self.notice = Some(notice);
                self.waiting = false;
                self.revealing = false;
            }
        }
    }

    /// Apply a lifecycle event from the panel task
    pub fn apply_panel_event(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::SubmitEnded(SubmitOutcome::RevealStarted) => {
                self.waiting = false;
                self.revealing = true;
            }
            PanelEvent::SubmitEnded(_) => {
                self.waiting = false;
            }
            PanelEvent::RevealFinished => {
                self.revealing = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut state = TuiState::new();
        state.insert_char('h');
        state.insert_char('i');
        assert_eq!(state.input, "hi");
        assert_eq!(state.cursor_pos, 2);

        state.delete_char();
        assert_eq!(state.input, "h");
        assert_eq!(state.cursor_pos, 1);
    }

    #[test]
    fn test_insert_at_cursor_position() {
        let mut state = TuiState::new();
        for c in "word".chars() {
            state.insert_char(c);
        }
        state.cursor_left();
        state.cursor_left();
        state.insert_char('X');
        assert_eq!(state.input, "woXrd");
        assert_eq!(state.cursor_pos, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = TuiState::new();
        state.insert_char('日');
        state.insert_char('本');
        assert_eq!(state.cursor_pos, 6);

        state.cursor_left();
        assert_eq!(state.cursor_pos, 3);
        state.delete_char();
        assert_eq!(state.input, "本");
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut state = TuiState::new();
        state.cursor_left();
        assert_eq!(state.cursor_pos, 0);

        state.insert_char('a');
        state.cursor_right();
        assert_eq!(state.cursor_pos, 1);

        state.cursor_home();
        assert_eq!(state.cursor_pos, 0);
        state.cursor_end();
        assert_eq!(state.cursor_pos, 1);
    }

    #[test]
    fn test_delete_at_start_does_nothing() {
        let mut state = TuiState::new();
        state.insert_char('a');
        state.cursor_home();
        state.delete_char();
        assert_eq!(state.input, "a");
    }

    #[test]
    fn test_successful_exchange_events() {
        let mut state = TuiState::new();
        state.waiting = true;

        state.apply_display_event(DisplayEvent::Cleared);
        state.apply_panel_event(PanelEvent::SubmitEnded(SubmitOutcome::RevealStarted));
        assert!(state.revealing);
        assert!(!state.waiting);

        state.apply_display_event(DisplayEvent::Appended("<p>hi".to_string()));
        state.apply_display_event(DisplayEvent::Appended("</p>".to_string()));
        assert_eq!(state.answer, "<p>hi</p>");

        state.apply_panel_event(PanelEvent::RevealFinished);
        assert!(!state.revealing);
    }

    #[test]
    fn test_notice_replaces_answer() {
        let mut state = TuiState::new();
        state.answer = "old answer".to_string();
        state.revealing = true;

        state.apply_display_event(DisplayEvent::Cleared);
        state.apply_display_event(DisplayEvent::NoticeSet(Notice::RequestFailed));

        assert_eq!(state.answer, "");
        assert_eq!(state.notice, Some(Notice::RequestFailed));
        assert!(!state.revealing);
    }

    #[test]
    fn test_clear_drops_previous_notice() {
        let mut state = TuiState::new();
        state.notice = Some(Notice::EmptyQuestion);

        state.apply_display_event(DisplayEvent::Cleared);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_superseding_submission_resets_answer() {
        let mut state = TuiState::new();
        state.answer = "first ans".to_string();
        state.revealing = true;

        state.apply_display_event(DisplayEvent::Cleared);
        state.apply_panel_event(PanelEvent::SubmitEnded(SubmitOutcome::RevealStarted));
        state.apply_display_event(DisplayEvent::Appended("se".to_string()));

        assert_eq!(state.answer, "se");
        assert!(state.revealing);
    }
}
