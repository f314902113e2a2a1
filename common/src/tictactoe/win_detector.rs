use super::board::Board;
use super::types::{Outcome, Player, Position, WinningLine};

/// Rows top-to-bottom, columns left-to-right, then the two diagonals.
/// When several lines are complete the first one in this order decides.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Player> {
    first_complete_line(board).map(|(player, _)| player)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let (player, line) = first_complete_line(board)?;
    let start = Position::from_index(line[0]).ok()?;
    let end = Position::from_index(line[2]).ok()?;
    Some(WinningLine::new(player, start, end))
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = check_win(board) {
        return Outcome::Win(player);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

fn first_complete_line(board: &Board) -> Option<(Player, [usize; 3])> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = board.mark_at(a);
        if board.mark_at(b) != mark || board.mark_at(c) != mark {
            continue;
        }
        if let Some(player) = mark.player() {
            return Some((player, line));
        }
    }
    None
}
