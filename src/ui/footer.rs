//! Footer line: key hints, status messages, and the count prompt

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::AppState;
use crate::theme::Theme;

/// Draw the footer
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = if state.set_count.active {
        Line::from(vec![
            Span::styled("Set memorized verses: ", Style::default().fg(theme.fg_secondary)),
            Span::styled(
                state.set_count.input.clone(),
                Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled("▌", Style::default().fg(theme.accent_primary)),
            Span::styled("  [Enter] apply  [Esc] cancel", Style::default().fg(theme.fg_muted)),
        ])
    } else if let Some(status) = &state.status {
        Line::from(Span::styled(status.clone(), Style::default().fg(theme.info)))
    } else {
        hint_line(theme)
    };

    let footer = Paragraph::new(line).style(Style::default().bg(theme.bg_secondary));
    frame.render_widget(footer, area);
}

fn hint_line(theme: &Theme) -> Line<'static> {
    let key = Style::default().fg(theme.fg_muted);
    let label = Style::default().fg(theme.fg_secondary);

    Line::from(vec![
        Span::styled("[j/k]", key),
        Span::styled(" move  ", label),
        Span::styled("[h/l]", key),
        Span::styled(" pane  ", label),
        Span::styled("[space/-]", key),
        Span::styled(" verses  ", label),
        Span::styled("[s]", key),
        Span::styled(" set  ", label),
        Span::styled("[r/R]", key),
        Span::styled(" reset  ", label),
        Span::styled("[?]", key),
        Span::styled(" help  ", label),
        Span::styled("[q]", key),
        Span::styled(" quit", label),
    ])
}
