//! Game core: board types, named positions, evaluation rules, and the
//! session controller.

pub mod position;
pub mod rules;
pub mod session;
pub mod types;

pub use position::Position;
pub use session::{GameSession, MoveError};
pub use types::{Board, Cell, GameStatus, Mark, WinLine};
