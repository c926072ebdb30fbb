//! Overall progress dashboard

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::state::AppState;
use crate::catalog::{Catalog, Testament};
use crate::progress::stats;
use crate::theme::Theme;

/// Draw the overall dashboard: verse, chapter, and book meters plus the
/// testament percentages
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog, theme: &Theme) {
    let block = Block::default()
        .title(" Overall Progress ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let overall = stats::overall_stats(catalog, &state.snapshot);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[0]);

    draw_meter(
        frame,
        columns[0],
        format!("Verses {}/{}", overall.memorized_verses, overall.total_verses),
        overall.percent_complete,
        theme.memorized,
        theme,
    );
    draw_meter(
        frame,
        columns[1],
        format!("Chapters {}/{}", overall.completed_chapters, overall.total_chapters),
        overall.chapter_percent(),
        theme.accent_primary,
        theme,
    );
    draw_meter(
        frame,
        columns[2],
        format!("Books started {}/{}", overall.books_started, overall.total_books),
        overall.book_percent(),
        theme.accent_secondary,
        theme,
    );

    let old = stats::testament_stats(catalog, &state.snapshot, Testament::Old);
    let new = stats::testament_stats(catalog, &state.snapshot, Testament::New);
    let testament_line = Line::from(vec![
        Span::styled("Old Testament ", Style::default().fg(theme.fg_secondary)),
        Span::styled(format!("{}%", old.percent_complete), Style::default().fg(theme.accent_primary)),
        Span::styled("    New Testament ", Style::default().fg(theme.fg_secondary)),
        Span::styled(format!("{}%", new.percent_complete), Style::default().fg(theme.accent_primary)),
    ]);
    frame.render_widget(Paragraph::new(testament_line), rows[1]);
}

fn draw_meter(
    frame: &mut Frame,
    area: Rect,
    title: String,
    percent: u8,
    color: ratatui::style::Color,
    theme: &Theme,
) {
    let gauge = Gauge::default()
        .block(Block::default().title(title).style(Style::default().fg(theme.fg_secondary)))
        .gauge_style(Style::default().fg(color).bg(theme.bg_secondary))
        .ratio(f64::from(percent.min(100)) / 100.0)
        .label(format!("{percent}%"));
    frame.render_widget(gauge, area);
}
