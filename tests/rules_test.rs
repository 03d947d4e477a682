//! Tests for the pure win and draw evaluators.

use noughts::game::rules::win::LINES;
use noughts::game::rules::{check_winner, is_draw};
use noughts::{Board, Cell, Mark, Position};

fn board_with(marked: &[(usize, Mark)]) -> Board {
    marked.iter().fold(Board::new(), |b, &(i, mark)| {
        b.with(
            Position::from_index(i).expect("index in range"),
            Cell::Occupied(mark),
        )
    })
}

#[test]
fn evaluator_is_deterministic() {
    let board = board_with(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
    let first = check_winner(&board);
    for _ in 0..10 {
        assert_eq!(check_winner(&board), first);
    }
}

#[test]
fn evaluator_never_mutates_its_input() {
    let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
    let snapshot = board;
    check_winner(&board);
    assert_eq!(board, snapshot);
}

#[test]
fn every_line_is_detected_for_both_marks() {
    for mark in [Mark::X, Mark::O] {
        for line in LINES {
            let marked: Vec<(usize, Mark)> =
                line.iter().map(|pos| (pos.index(), mark)).collect();
            let board = board_with(&marked);

            let win = check_winner(&board).expect("line should be detected");
            assert_eq!(win.mark, mark);
            assert_eq!(win.line, line);
        }
    }
}

#[test]
fn line_with_foreign_marks_elsewhere_is_still_detected() {
    // O completes the left column; X holds scattered squares.
    let board = board_with(&[
        (0, Mark::O),
        (3, Mark::O),
        (6, Mark::O),
        (1, Mark::X),
        (4, Mark::X),
        (8, Mark::X),
    ]);
    let win = check_winner(&board).expect("left column should win");
    assert_eq!(win.mark, Mark::O);
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );
}

#[test]
fn no_aligned_triple_means_no_winner_at_any_fill_level() {
    assert_eq!(check_winner(&Board::new()), None);

    let partial = board_with(&[(0, Mark::X), (4, Mark::O)]);
    assert_eq!(check_winner(&partial), None);

    // Full board with no three-in-a-row for either mark:
    // X O X / O O X / X X O
    let full = board_with(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (3, Mark::O),
        (4, Mark::O),
        (5, Mark::X),
        (6, Mark::X),
        (7, Mark::X),
        (8, Mark::O),
    ]);
    assert_eq!(check_winner(&full), None);
    assert!(is_draw(&full));
}

#[test]
fn draw_requires_a_full_board() {
    let nearly_full = board_with(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (3, Mark::O),
        (4, Mark::O),
        (5, Mark::X),
        (6, Mark::X),
        (7, Mark::X),
    ]);
    assert!(!is_draw(&nearly_full));
}

#[test]
fn scan_order_breaks_ties_on_corrupted_boards() {
    // A column and a diagonal complete at once (not reachable in play):
    // the column comes earlier in scan order than the diagonal.
    let board = board_with(&[
        (0, Mark::X),
        (3, Mark::X),
        (6, Mark::X),
        (4, Mark::X),
        (8, Mark::X),
    ]);
    let win = check_winner(&board).expect("corrupted board still resolves");
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );
}
