//! Two-player tic-tac-toe game core.
//!
//! The core is two pieces: a pure win/draw evaluator over the 3x3 board
//! ([`game::rules`]) and a [`GameSession`] controller that owns the board,
//! the turn flag, and the view-facing theme and difficulty selections.
//! Derived state (the win result and status text) is recomputed inside each
//! mutating operation, so a caller never observes a board without its
//! matching result.
//!
//! # Example
//!
//! ```
//! use noughts::{GameSession, Position};
//!
//! let mut session = GameSession::new();
//! session.apply_move(Position::Center);
//! assert_eq!(session.status_line(), "Next: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod settings;

pub use game::position::Position;
pub use game::session::{GameSession, MoveError};
pub use game::types::{Board, Cell, GameStatus, Mark, WinLine};
pub use settings::{Difficulty, Theme};
