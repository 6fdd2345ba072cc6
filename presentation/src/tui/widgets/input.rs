//! Question field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::state::TuiState;

/// Single-line input field with a block cursor
///
/// The character under the cursor is drawn inverted; past the end of the
/// text the cursor is a highlighted space.
pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = &self.state.input;
        let cursor = self.state.cursor_pos.min(text.len());
        let cursor_style = Style::default().fg(Color::Black).bg(Color::Green);

        let mut spans = vec![
            Span::styled(
                "ask> ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(text[..cursor].to_string()),
        ];

        let after = &text[cursor..];
        if after.is_empty() {
            spans.push(Span::styled(" ", cursor_style));
        } else {
            let ch_len = after.chars().next().unwrap().len_utf8();
            spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
            if ch_len < after.len() {
                spans.push(Span::raw(after[ch_len..].to_string()));
            }
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Question ")
                .style(Style::default().fg(Color::Green)),
        );

        paragraph.render(area, buf);
    }
}
