//! Help overlay

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout;
use crate::theme::Theme;

/// Draw the help overlay over the current screen
pub fn draw(frame: &mut Frame, theme: &Theme) {
    let area = layout::centered_rect(frame.area(), 60, 70);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        section("Navigation", theme),
        entry("j/k, arrows", "move within the focused column", theme),
        entry("h/l, Enter/Esc", "move between columns", theme),
        entry("g/G", "jump to first/last row", theme),
        Line::default(),
        section("Memorization", theme),
        entry("space or +", "mark one more verse memorized", theme),
        entry("-", "unmark one verse", theme),
        entry("s", "type an exact verse count for the chapter", theme),
        entry("r", "reset the selected chapter", theme),
        entry("R", "reset the selected book", theme),
        Line::default(),
        section("Other", theme),
        entry("?", "toggle this help", theme),
        entry("q", "quit", theme),
        Line::default(),
        Line::from(Span::styled(
            "Groups and testaments can be reset from the command line: selah reset --group Torah",
            Style::default().fg(theme.fg_muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn section(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
    ))
}

fn entry(keys: &'static str, description: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<16}"), Style::default().fg(theme.fg_muted)),
        Span::styled(description, Style::default().fg(theme.fg_primary)),
    ])
}
