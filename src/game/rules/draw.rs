//! Draw detection.

use tracing::instrument;

use super::super::types::Board;
use super::win::check_winner;

/// Checks whether the game is drawn: every cell occupied with no completed
/// line on the board.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::position::Position;
    use super::super::super::types::{Cell, Mark};
    use super::*;

    #[test]
    fn empty_board_is_not_drawn() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn partial_board_is_not_drawn() {
        let board = Board::new().with(Position::Center, Cell::Occupied(Mark::X));
        assert!(!is_draw(&board));
    }

    #[test]
    fn full_board_without_line_is_drawn() {
        // X O X / O O X / X X O
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::X,
            Mark::O,
        ];
        let board = Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |b, (&pos, mark)| {
                b.with(pos, Cell::Occupied(mark))
            });
        assert!(is_draw(&board));
    }

    #[test]
    fn full_board_with_line_is_not_drawn() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |b, &pos| b.with(pos, Cell::Occupied(Mark::X)));
        assert!(!is_draw(&board));
    }
}
