//! Chapter panel for the selected book

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::state::{AppState, Pane};
use crate::catalog::Catalog;
use crate::progress::stats;
use crate::theme::Theme;

/// Draw the chapter list with the book gauge and summary
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, catalog: &Catalog, theme: &Theme) {
    let focused = state.pane == Pane::Chapters;
    let border_color = if focused { theme.border_focused } else { theme.border };

    let Some(book) = state.selected_book(catalog) else {
        let block = Block::default()
            .title(" Chapters ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg_primary));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let msg = Paragraph::new("No book selected").style(Style::default().fg(theme.fg_muted));
        frame.render_widget(msg, inner);
        return;
    };

    let book_stats = stats::book_stats(catalog, &state.snapshot, &book.name);

    let block = Block::default()
        .title(format!(" {} ", book.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.memorized).bg(theme.bg_secondary))
        .ratio(f64::from(book_stats.percent_complete.min(100)) / 100.0)
        .label(format!("{}%", book_stats.percent_complete));
    frame.render_widget(gauge, rows[0]);

    let summary = format!(
        "{}/{} verses, {} complete, {} in progress",
        book_stats.memorized_verses,
        book_stats.total_verses,
        book_stats.completed_chapters,
        book_stats.in_progress_chapters
    );
    frame.render_widget(
        Paragraph::new(summary).style(Style::default().fg(theme.fg_secondary)),
        rows[1],
    );

    // Chapter list with manual scroll
    let list_area = rows[2];
    state.chapter_visible_height = list_area.height as usize;
    state.ensure_chapter_visible();

    let chapters = state.snapshot.chapters(&book.name);
    let mut lines: Vec<Line> = Vec::new();
    for (i, &max) in book.verse_counts.iter().enumerate() {
        let memorized = chapters.and_then(|c| c.get(i)).map_or(0, |c| c.memorized_verses);
        let icon = if memorized >= max {
            "✓"
        } else if memorized > 0 {
            "●"
        } else {
            "○"
        };

        let style = if focused && i == state.chapter_index {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else if memorized >= max {
            Style::default().fg(theme.memorized)
        } else if memorized > 0 {
            Style::default().fg(theme.in_progress)
        } else {
            Style::default().fg(theme.untouched)
        };

        let text = format!("{} Chapter {:>3}  {:>3}/{:<3}", icon, i + 1, memorized, max);
        lines.push(Line::from(Span::styled(text, style)));
    }

    let start = state.chapter_scroll.min(lines.len());
    let end = (start + list_area.height as usize).min(lines.len());
    let visible: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();
    frame.render_widget(Paragraph::new(visible), list_area);
}
