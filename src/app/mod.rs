//! Application state and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::watch;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::progress::{Progress, ProgressStore};
use crate::storage::ProgressBackend;
use crate::ui;
use input::Action;
use state::{AppState, Pane};

/// The main application
pub struct App<B: ProgressBackend> {
    /// Application configuration
    config: Config,

    /// Canonical book data
    catalog: Arc<Catalog>,

    /// Progress store; shared so the persisted load can run in the background
    store: Arc<ProgressStore<B>>,

    /// Snapshot replacements from the store
    progress_rx: watch::Receiver<Arc<Progress>>,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl<B: ProgressBackend> App<B> {
    /// Create a new application instance
    pub fn new(config: Config, catalog: Arc<Catalog>, store: Arc<ProgressStore<B>>) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let progress_rx = store.subscribe();
        let state = AppState { snapshot: store.snapshot(), ..Default::default() };

        Ok(Self { config, catalog, store, progress_rx, state, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        // The zero-filled snapshot is already on screen; saved state arrives
        // through the watch channel whenever the load finishes
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            store.load_persisted().await;
        });

        loop {
            // Pick up any snapshot replacement before drawing
            if self.progress_rx.has_changed().unwrap_or(false) {
                self.state.snapshot = self.progress_rx.borrow_and_update().clone();
            }

            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.catalog, &self.config);
            })?;

            // Handle events
            if event::poll(std::time::Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key.code) {
                        break;
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyCode) -> bool {
        self.state.status = None;

        // The count prompt swallows everything while active
        if self.state.set_count.active {
            match key {
                KeyCode::Char(c) if c.is_ascii_digit() => self.state.set_count.push_digit(c),
                KeyCode::Backspace => self.state.set_count.pop_digit(),
                KeyCode::Enter => self.apply_set_count(),
                KeyCode::Esc => self.state.set_count.cancel(),
                _ => {}
            }
            return false;
        }

        if self.state.show_help {
            self.state.show_help = false;
            return false;
        }

        let Some(action) = input::key_to_action(key, self.config.vim_mode) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::Down => self.state.move_selection(&self.catalog, 1),
            Action::Up => self.state.move_selection(&self.catalog, -1),
            Action::Top => self.state.move_to_edge(&self.catalog, false),
            Action::Bottom => self.state.move_to_edge(&self.catalog, true),
            Action::Right | Action::Select => self.state.focus_deeper(),
            Action::Left | Action::Back => self.state.focus_shallower(),
            Action::Increment => {
                if let Some((book, chapter)) = self.chapter_target() {
                    self.store.increment_verse(&book, chapter);
                }
            }
            Action::Decrement => {
                if let Some((book, chapter)) = self.chapter_target() {
                    self.store.decrement_verse(&book, chapter);
                }
            }
            Action::SetCount => {
                if self.state.pane == Pane::Chapters {
                    self.state.set_count.start();
                }
            }
            Action::ResetChapter => {
                if let Some((book, chapter)) = self.chapter_target() {
                    self.store.reset_chapter(&book, chapter);
                    self.state.status = Some(format!("{} chapter {} reset", book, chapter + 1));
                }
            }
            Action::ResetBook => {
                if let Some(name) = self.state.selected_book(&self.catalog).map(|b| b.name.clone())
                {
                    self.store.reset_book(&name);
                    self.state.status = Some(format!("{name} reset"));
                }
            }
            Action::Help => self.state.show_help = true,
        }

        if self.state.pane == Pane::Chapters {
            self.state.ensure_chapter_visible();
        }

        false
    }

    /// The chapter the cursor is on, if the chapter pane is focused
    fn chapter_target(&self) -> Option<(String, usize)> {
        if self.state.pane != Pane::Chapters {
            return None;
        }
        let book = self.state.selected_book(&self.catalog)?;
        Some((book.name.clone(), self.state.chapter_index))
    }

    /// Apply the count prompt to the selected chapter.
    ///
    /// The store's contract leaves clamping to the caller, so the value is
    /// clamped to the chapter's verse count here.
    fn apply_set_count(&mut self) {
        let value = self.state.set_count.value();
        self.state.set_count.cancel();

        let Some(value) = value else { return };
        let Some((book, chapter)) = self.chapter_target() else { return };
        let Some(max) = self
            .state
            .selected_book(&self.catalog)
            .and_then(|b| b.verses_in_chapter(chapter))
        else {
            return;
        };

        self.store.set_chapter_progress(&book, chapter, value.min(max));
    }
}

impl<B: ProgressBackend> Drop for App<B> {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
