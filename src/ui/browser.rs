//! Testament, group, and book selector columns

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, Pane};
use crate::catalog::Catalog;
use crate::progress::BookStats;
use crate::progress::stats;
use crate::theme::Theme;

/// Status indicators for books
const STATUS_NOT_STARTED: &str = "○";
const STATUS_IN_PROGRESS: &str = "●";
const STATUS_COMPLETED: &str = "✓";

/// Draw the three browser columns
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    draw_testaments(frame, columns[0], state, catalog, theme);
    draw_groups(frame, columns[1], state, catalog, theme);
    draw_books(frame, columns[2], state, catalog, theme);
}

fn draw_testaments(frame: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog, theme: &Theme) {
    let focused = state.pane == Pane::Testaments;
    let inner = render_column_block(frame, area, " Testaments ", focused, theme);

    let lines: Vec<Line> = catalog
        .testaments()
        .iter()
        .enumerate()
        .map(|(i, testament)| {
            let testament_stats = stats::testament_stats(catalog, &state.snapshot, *testament);
            let text = format!(
                "{:<14} {:>3}%",
                testament.label(),
                testament_stats.percent_complete
            );
            Line::from(Span::styled(text, row_style(i == state.testament_index, focused, theme)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_groups(frame: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog, theme: &Theme) {
    let focused = state.pane == Pane::Groups;
    let inner = render_column_block(frame, area, " Groups ", focused, theme);

    let Some(testament) = state.selected_testament(catalog) else { return };
    let lines: Vec<Line> = catalog
        .groups_in_testament(testament)
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let group_stats = stats::group_stats(catalog, &state.snapshot, group);
            let text = format!(
                "{:<18} {:>3}%  {:>3}/{} ch",
                group, group_stats.percent_complete, group_stats.completed_chapters,
                group_stats.total_chapters
            );
            Line::from(Span::styled(text, row_style(i == state.group_index, focused, theme)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_books(frame: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog, theme: &Theme) {
    let focused = state.pane == Pane::Books;
    let inner = render_column_block(frame, area, " Books ", focused, theme);

    let Some(group) = state.selected_group(catalog) else { return };
    let lines: Vec<Line> = catalog
        .books_in_group(&group)
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let book_stats = stats::book_stats(catalog, &state.snapshot, &book.name);
            let text = format!(
                "{} {:<16} {:>3}%",
                book_status_icon(&book_stats),
                book.name,
                book_stats.percent_complete
            );
            Line::from(Span::styled(text, row_style(i == state.book_index, focused, theme)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_column_block(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    focused: bool,
    theme: &Theme,
) -> Rect {
    let border_color = if focused { theme.border_focused } else { theme.border };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn row_style(selected: bool, focused: bool, theme: &Theme) -> Style {
    if selected && focused {
        Style::default()
            .fg(theme.bg_primary)
            .bg(theme.accent_primary)
            .add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(theme.accent_secondary)
    } else {
        Style::default().fg(theme.fg_primary)
    }
}

/// Pick a status icon from a book's aggregate stats
fn book_status_icon(stats: &BookStats) -> &'static str {
    if stats.total_verses > 0 && stats.memorized_verses >= stats.total_verses {
        STATUS_COMPLETED
    } else if stats.memorized_verses > 0 {
        STATUS_IN_PROGRESS
    } else {
        STATUS_NOT_STARTED
    }
}
