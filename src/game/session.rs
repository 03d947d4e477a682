//! The game state controller.
//!
//! [`GameSession`] owns the board, the turn flag, the cached win result,
//! and the view-facing theme and difficulty selections. All mutation goes
//! through its operations, and the win result is recomputed inside each
//! mutating call so a caller never observes a board without its matching
//! result.

use tracing::{debug, instrument};

use crate::settings::{Difficulty, Theme};

use super::position::Position;
use super::rules;
use super::types::{Board, Cell, GameStatus, Mark, WinLine};

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell is already occupied.
    #[display("cell {_0} is already occupied")]
    SquareOccupied(Position),

    /// A completed line already exists.
    #[display("the game is already decided")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Complete mutable state for one sitting at the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    win: Option<WinLine>,
    theme: Theme,
    difficulty: Difficulty,
}

impl GameSession {
    /// Creates a new session: empty board, X to move, default settings.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            win: None,
            theme: Theme::default(),
            difficulty: Difficulty::default(),
        }
    }

    /// Creates a session with preselected view settings.
    pub fn with_settings(theme: Theme, difficulty: Difficulty) -> Self {
        Self {
            theme,
            difficulty,
            ..Self::new()
        }
    }

    /// Attempts to place the current mark at `pos`.
    ///
    /// On success the board is replaced wholesale, the turn flag flips, and
    /// the win result is recomputed before this call returns.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if a completed line already exists, or
    /// [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn try_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.win.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board = self.board.with(pos, Cell::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();
        self.win = rules::check_winner(&self.board);
        Ok(())
    }

    /// Places the current mark at `pos`, silently ignoring invalid moves.
    ///
    /// Occupied cells and moves after the game is decided are no-ops; the
    /// only observable signal of rejection is the unchanged board.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position) {
        if let Err(reason) = self.try_move(pos) {
            debug!(%reason, position = %pos, "move ignored");
        }
    }

    /// Resets the board, turn flag, and win result together.
    ///
    /// Theme and difficulty are independent of game state and survive.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.board = Board::new();
        self.to_move = Mark::X;
        self.win = None;
    }

    /// Flips between the light and dark themes.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = self.theme.label(), "theme toggled");
    }

    /// Stores the difficulty selection verbatim.
    ///
    /// Cosmetic: nothing in the game rules consults it.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current win result, if any.
    pub fn win(&self) -> Option<WinLine> {
        self.win
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the selected difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Derives the terminal status from the board and win result.
    pub fn status(&self) -> GameStatus {
        match self.win {
            Some(win) => GameStatus::Won(win),
            None if rules::is_draw(&self.board) => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Renders the status text shown to the player.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(win) => format!("Winner: {}!", win.mark),
            GameStatus::Drawn => "It's a draw!".to_string(),
            GameStatus::InProgress => format!("Next: {}", self.to_move),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
