//! Application state: the game session plus view-only cursor and hitboxes.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use derive_getters::Getters;
use ratatui::layout::{Position as ScreenPosition, Rect};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use noughts::{Difficulty, GameSession, Position, Theme};

use super::input;

/// Mutable state behind the terminal view.
#[derive(Debug, Getters)]
pub struct App {
    /// The game state controller.
    session: GameSession,
    /// Keyboard cursor for arrow-key move selection.
    cursor: Position,
    /// Screen rectangle of each cell, recorded during the last render.
    #[getter(skip)]
    cell_hitboxes: [Rect; 9],
    /// Set when the player asks to quit.
    #[getter(skip)]
    should_quit: bool,
}

impl App {
    /// Creates the app with the given initial settings.
    pub fn new(theme: Theme, difficulty: Difficulty) -> Self {
        Self {
            session: GameSession::with_settings(theme, difficulty),
            cursor: Position::Center,
            cell_hitboxes: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// True once the player has asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where each cell was rendered, for mouse hit-testing.
    pub fn set_cell_hitboxes(&mut self, hitboxes: [Rect; 9]) {
        self.cell_hitboxes = hitboxes;
    }

    /// Handles a key press.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.session.restart(),
            KeyCode::Char('t') | KeyCode::Char('T') => self.session.toggle_theme(),
            KeyCode::Char('d') | KeyCode::Char('D') => {
                let next = self.session.difficulty().cycle();
                self.session.set_difficulty(next);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Keys 1-9 map to cells 0-8; '0' falls through the
                // checked_sub and is ignored.
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| d.checked_sub(1))
                    .and_then(|d| Position::from_index(d as usize))
                {
                    self.cursor = pos;
                    self.move_at(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.move_at(self.cursor),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = input::move_cursor(self.cursor, key.code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event: a left click on a cell places the current
    /// mark there.
    #[instrument(skip(self, mouse))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(pos) = self.cell_at(mouse.column, mouse.row) {
            debug!(position = %pos, "cell clicked");
            self.cursor = pos;
            self.move_at(pos);
        }
    }

    /// Maps screen coordinates to the cell rendered there, if any.
    fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        Position::iter()
            .find(|pos| self.cell_hitboxes[pos.index()].contains(ScreenPosition::new(x, y)))
    }

    /// Applies a move at the given position.
    ///
    /// The view enforces the same preconditions the controller does
    /// (double-guarded): clicks on occupied cells or after the game is
    /// decided do nothing.
    fn move_at(&mut self, pos: Position) {
        if self.session.win().is_none() && self.session.board().is_empty(pos) {
            self.session.apply_move(pos);
        }
    }
}
