//! Screen layout helpers

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum width for the chapter panel
const CHAPTERS_MIN_WIDTH: u16 = 30;

/// Top-level screen regions
#[derive(Debug, Clone, Copy)]
pub struct ScreenChunks {
    pub dashboard: Rect,
    pub browser: Rect,
    pub chapters: Rect,
    pub footer: Rect,
}

/// Split the screen into dashboard, browser columns, chapter panel, footer
pub fn screen_chunks(area: Rect) -> ScreenChunks {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Min(CHAPTERS_MIN_WIDTH)])
        .split(vertical[1]);

    ScreenChunks {
        dashboard: vertical[0],
        browser: middle[0],
        chapters: middle[1],
        footer: vertical[2],
    }
}

/// A rect centered in `area` covering the given percentages of it
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
