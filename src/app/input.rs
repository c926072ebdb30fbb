//! Event handling utilities

use crossterm::event::KeyCode;

/// Map a key press to an action. Vim-style letter bindings are only active
/// when vim mode is on; arrows and symbols always work.
pub fn key_to_action(key: KeyCode, vim_mode: bool) -> Option<Action> {
    if vim_mode {
        match key {
            KeyCode::Char('j') => return Some(Action::Down),
            KeyCode::Char('k') => return Some(Action::Up),
            KeyCode::Char('h') => return Some(Action::Left),
            KeyCode::Char('l') => return Some(Action::Right),
            KeyCode::Char('g') => return Some(Action::Top),
            KeyCode::Char('G') => return Some(Action::Bottom),
            _ => {}
        }
    }

    match key {
        KeyCode::Down => Some(Action::Down),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Home => Some(Action::Top),
        KeyCode::End => Some(Action::Bottom),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(' ') => Some(Action::Increment),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::Decrement),
        KeyCode::Char('s') => Some(Action::SetCount),
        KeyCode::Char('r') => Some(Action::ResetChapter),
        KeyCode::Char('R') => Some(Action::ResetBook),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Left,
    Right,
    Top,
    Bottom,

    // Selection
    Select,
    Back,

    // Progress mutations
    Increment,
    Decrement,
    SetCount,
    ResetChapter,
    ResetBook,

    // Modes
    Help,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(key_to_action(KeyCode::Char('j'), true), Some(Action::Down));
    }

    #[test]
    fn vim_letters_ignored_when_vim_mode_off() {
        assert_eq!(key_to_action(KeyCode::Char('j'), false), None);
        assert_eq!(key_to_action(KeyCode::Down, false), Some(Action::Down));
    }

    #[test]
    fn plus_and_space_increment() {
        assert_eq!(key_to_action(KeyCode::Char('+'), true), Some(Action::Increment));
        assert_eq!(key_to_action(KeyCode::Char(' '), true), Some(Action::Increment));
    }

    #[test]
    fn reset_keys_are_case_sensitive() {
        assert_eq!(key_to_action(KeyCode::Char('r'), true), Some(Action::ResetChapter));
        assert_eq!(key_to_action(KeyCode::Char('R'), true), Some(Action::ResetBook));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(key_to_action(KeyCode::Char('x'), true), None);
    }
}
