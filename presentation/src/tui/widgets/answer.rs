//! Answer region widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use askdeck_domain::Notice;

use crate::tui::state::TuiState;

/// Scrollable region showing the answer as it types itself out
///
/// The markup arrives verbatim and is shown verbatim; nothing is parsed
/// out of it. While the reveal is running a caret marks the tail.
pub struct AnswerWidget<'a> {
    state: &'a TuiState,
}

impl<'a> AnswerWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for AnswerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(notice) = self.state.notice {
            let color = match notice {
                Notice::EmptyQuestion => Color::Yellow,
                Notice::RequestFailed => Color::Red,
            };
            lines.push(Line::from(Span::styled(
                notice.text(),
                Style::default().fg(color),
            )));
        } else if self.state.waiting {
            lines.push(Line::from(Span::styled(
                "Waiting for an answer...",
                Style::default().fg(Color::DarkGray),
            )));
        } else if self.state.answer.is_empty() && !self.state.revealing {
            lines.push(Line::from(Span::styled(
                "Ask something to see the answer here.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for text_line in self.state.answer.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
            if self.state.revealing {
                lines.push(Line::from(Span::styled(
                    "▌",
                    Style::default().fg(Color::Green),
                )));
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Answer ")
                    .style(Style::default().fg(Color::White)),
            )
            .wrap(Wrap { trim: false });

        paragraph.render(area, buf);
    }
}
