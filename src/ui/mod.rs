//! UI rendering components

pub mod browser;
pub mod chapters;
pub mod dashboard;
pub mod footer;
pub mod help;
pub mod layout;

use ratatui::Frame;

use crate::app::state::AppState;
use crate::catalog::Catalog;
use crate::config::Config;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, catalog: &Catalog, config: &Config) {
    let theme = config.active_theme();
    let chunks = layout::screen_chunks(frame.area());

    dashboard::draw(frame, chunks.dashboard, state, catalog, &theme);
    browser::draw(frame, chunks.browser, state, catalog, &theme);
    chapters::draw(frame, chunks.chapters, state, catalog, &theme);
    footer::draw(frame, chunks.footer, state, &theme);

    if state.show_help {
        help::draw(frame, &theme);
    }
}
