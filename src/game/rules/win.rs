//! Win detection over the 8 fixed lines.

use tracing::instrument;

use super::super::position::Position;
use super::super::types::{Board, Cell, WinLine};

/// The 8 winning triples in scan priority order: rows top-to-bottom, then
/// columns left-to-right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks the board for a completed line.
///
/// Scans [`LINES`] in order and returns the first triple fully occupied by
/// a single mark, or `None` if no line is complete. Pure and total: every
/// possible board yields a deterministic answer. A board holding more than
/// one complete line (unreachable under alternating play) resolves to the
/// first one in scan order.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Occupied(mark) = board.get(a)
            && board.get(b) == Cell::Occupied(mark)
            && board.get(c) == Cell::Occupied(mark)
        {
            return Some(WinLine { mark, line });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::super::super::types::Mark;
    use super::*;

    fn occupy(board: Board, positions: &[Position], mark: Mark) -> Board {
        positions
            .iter()
            .fold(board, |b, &pos| b.with(pos, Cell::Occupied(mark)))
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn top_row_wins() {
        let board = occupy(
            Board::new(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Mark::X,
        );
        let win = check_winner(&board).expect("top row should win");
        assert_eq!(win.mark, Mark::X);
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn diagonal_wins() {
        let board = occupy(
            Board::new(),
            &[Position::TopLeft, Position::Center, Position::BottomRight],
            Mark::O,
        );
        let win = check_winner(&board).expect("diagonal should win");
        assert_eq!(win.mark, Mark::O);
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn incomplete_line_does_not_win() {
        let board = occupy(
            Board::new(),
            &[Position::TopLeft, Position::TopCenter],
            Mark::X,
        );
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn mixed_marks_do_not_win() {
        let board = occupy(
            Board::new(),
            &[Position::TopLeft, Position::TopCenter],
            Mark::X,
        );
        let board = occupy(board, &[Position::TopRight], Mark::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn first_line_in_scan_order_wins_on_corrupted_board() {
        // Two complete X rows cannot arise in alternating play; the scan
        // still resolves deterministically to the earlier line.
        let board = occupy(
            Board::new(),
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            Mark::X,
        );
        let win = check_winner(&board).expect("corrupted board still wins");
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
