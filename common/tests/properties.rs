//! Property-based tests over random positions reachable by legal play.

use common::tictactoe::{
    Board, CELL_COUNT, Outcome, Player, Position, WINNING_LINES, best_move, evaluate,
    score_moves, search,
};
use proptest::prelude::*;

/// Plays `moves` alternately starting with X, stopping early at a terminal
/// position.
fn play_out(order: &[usize], moves: usize) -> Board {
    let mut board = Board::new();
    let mut to_move = Player::X;
    for &index in order.iter().take(moves) {
        if evaluate(&board) != Outcome::InProgress {
            break;
        }
        let pos = Position::from_index(index).unwrap();
        board.place(pos, to_move).unwrap();
        to_move = to_move.opponent();
    }
    board
}

fn arb_legal_board() -> impl Strategy<Value = Board> {
    (
        Just((0..CELL_COUNT).collect::<Vec<usize>>()).prop_shuffle(),
        0..=CELL_COUNT,
    )
        .prop_map(|(order, moves)| play_out(&order, moves))
}

/// Any assignment of marks, legal or not.
fn arb_any_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0u8..3, CELL_COUNT).prop_map(|cells| {
        let notation: String = cells
            .iter()
            .map(|c| match c {
                0 => '_',
                1 => 'X',
                _ => 'O',
            })
            .collect();
        notation.parse().unwrap()
    })
}

fn has_complete_line(board: &Board) -> bool {
    WINNING_LINES.iter().any(|line| {
        let first = board.cells()[line[0]];
        !first.is_empty() && line.iter().all(|&i| board.cells()[i] == first)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_no_line_and_empty_cell_is_in_progress(board in arb_any_board()) {
        if !has_complete_line(&board) && !board.is_full() {
            prop_assert_eq!(evaluate(&board), Outcome::InProgress);
        }
    }

    #[test]
    fn prop_full_board_without_line_is_draw(board in arb_any_board()) {
        if !has_complete_line(&board) && board.is_full() {
            prop_assert_eq!(evaluate(&board), Outcome::Draw);
        }
    }

    #[test]
    fn prop_complete_line_is_a_win(board in arb_any_board()) {
        let outcome = evaluate(&board);
        prop_assert_eq!(has_complete_line(&board), matches!(outcome, Outcome::Win(_)));
    }

    #[test]
    fn prop_evaluate_is_idempotent(board in arb_any_board()) {
        let before = board;
        prop_assert_eq!(evaluate(&board), evaluate(&board));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_best_move_targets_empty_cell(board in arb_legal_board()) {
        let before = board;
        match best_move(&board) {
            Some(pos) => prop_assert!(board.is_empty(pos).unwrap()),
            None => prop_assert!(board.is_full()),
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_best_move_is_first_max_score(board in arb_legal_board()) {
        let candidates = score_moves(&board);
        let report = search(&board);
        if let Some(max) = candidates.iter().map(|&(_, score)| score).max() {
            let first = candidates.iter().find(|&&(_, score)| score == max).map(|&(pos, _)| pos);
            prop_assert_eq!(report.best_move, first);
            prop_assert_eq!(report.best_score, Some(max));
        } else {
            prop_assert_eq!(report.best_move, None);
        }
    }

    #[test]
    fn prop_immediate_win_is_scored_as_win(board in arb_legal_board()) {
        if evaluate(&board) == Outcome::InProgress {
            let can_win_now = board.available_moves().into_iter().any(|pos| {
                let mut trial = board;
                trial.place(pos, Player::O).unwrap();
                evaluate(&trial) == Outcome::Win(Player::O)
            });
            if can_win_now {
                prop_assert_eq!(search(&board).best_score, Some(1));
            }
        }
    }
}
