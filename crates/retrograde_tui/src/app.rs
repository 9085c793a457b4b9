//! Application state: maps input events onto engine transitions.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use retrograde_core::{GameState, SortOrder};
use std::time::Duration;
use tracing::{debug, info};

use crate::{input, ui};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state.
///
/// Holds the current engine state and the board cursor. Every game mutation
/// goes through a pure engine transition; the next draw renders whatever
/// state came back.
pub struct App {
    game: GameState,
    cursor: usize,
    should_quit: bool,
}

impl App {
    /// Creates the application with a fresh game.
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: GameState::with_sort_order(sort_order),
            cursor: 4,
            should_quit: false,
        }
    }

    /// Current engine state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor position (cell index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Runs the event loop: draw, wait for one input event, apply it.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, &self))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        info!("Quitting");
        Ok(())
    }

    /// Applies a single key press.
    ///
    /// Moves on occupied cells or after the game is decided are silent
    /// no-ops; the engine guards them.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                self.place(c as usize - '1' as usize);
            }
            KeyCode::PageUp => self.jump(self.game.step().saturating_sub(1)),
            KeyCode::PageDown => {
                self.jump((self.game.step() + 1).min(self.last_step()));
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.last_step()),
            KeyCode::Char('s') => {
                self.game = self.game.toggle_sort_order();
                debug!(order = %self.game.sort_order(), "Sort order toggled");
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn last_step(&self) -> usize {
        self.game.history().len() - 1
    }

    fn place(&mut self, cell: usize) {
        self.game = self.game.apply_move(cell);
    }

    fn jump(&mut self, step: usize) {
        self.game = self.game.jump_to(step);
        debug!(step, "Jumped to step");
    }

    /// Starts a fresh game, keeping the sort preference.
    fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::with_sort_order(self.game.sort_order());
        self.cursor = 4;
    }
}
