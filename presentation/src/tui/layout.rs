//! Screen layout for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed areas for the three panel regions
///
/// Question field on top, answer region filling the middle, status bar
/// at the bottom.
pub struct PanelLayout {
    pub input: Rect,
    pub answer: Rect,
    pub status: Rect,
}

impl PanelLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        Self {
            input: chunks[0],
            answer: chunks[1],
            status: chunks[2],
        }
    }
}
