use super::board::Board;
use super::types::{CELL_COUNT, Mark, Outcome, Player, Position};
use super::win_detector::evaluate;

/// The computer always plays O and maximizes.
pub const BOT_PLAYER: Player = Player::O;

pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

/// Result of one exhaustive search, with effort counters for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Option<Position>,
    pub best_score: Option<i32>,
    pub candidates: Vec<(Position, i32)>,
    pub nodes: u64,
    pub max_depth: usize,
}

/// Chooses O's move. `None` means the board has no empty cell.
pub fn best_move(board: &Board) -> Option<Position> {
    search(board).best_move
}

/// Backed-up minimax value of `board`. `maximizing` is true when O moves next.
pub fn score(board: &Board, maximizing: bool) -> i32 {
    let mut minimax = Minimax::new(board);
    minimax.score(0, maximizing)
}

/// Every legal O move with its minimax score, in row-major order.
pub fn score_moves(board: &Board) -> Vec<(Position, i32)> {
    search(board).candidates
}

pub fn search(board: &Board) -> SearchReport {
    let mut minimax = Minimax::new(board);
    let mut candidates = Vec::new();
    let mut best: Option<(Position, i32)> = None;

    for index in 0..CELL_COUNT {
        if !minimax.board.mark_at(index).is_empty() {
            continue;
        }

        minimax.board.set_at(index, BOT_PLAYER.mark());
        let score = minimax.score(1, false);
        minimax.board.set_at(index, Mark::Empty);

        let Ok(pos) = Position::from_index(index) else {
            continue;
        };
        candidates.push((pos, score));

        // Strictly greater only: the first of equal scores is kept.
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    debug_assert_eq!(&minimax.board, board);

    SearchReport {
        best_move: best.map(|(pos, _)| pos),
        best_score: best.map(|(_, score)| score),
        candidates,
        nodes: minimax.nodes,
        max_depth: minimax.max_depth,
    }
}

fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Win(player) if player == BOT_PLAYER => Some(WIN_SCORE),
        Outcome::Win(_) => Some(LOSS_SCORE),
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::InProgress => None,
    }
}

/// Works on a private copy of the caller's board, placing and reverting
/// trial marks in place.
struct Minimax {
    board: Board,
    nodes: u64,
    max_depth: usize,
}

impl Minimax {
    fn new(board: &Board) -> Self {
        Self {
            board: *board,
            nodes: 0,
            max_depth: 0,
        }
    }

    fn score(&mut self, depth: usize, maximizing: bool) -> i32 {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);

        if let Some(score) = terminal_score(evaluate(&self.board)) {
            return score;
        }

        let mark = if maximizing {
            BOT_PLAYER.mark()
        } else {
            BOT_PLAYER.opponent().mark()
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in 0..CELL_COUNT {
            if !self.board.mark_at(index).is_empty() {
                continue;
            }

            self.board.set_at(index, mark);
            let score = self.score(depth + 1, !maximizing);
            self.board.set_at(index, Mark::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_empty_board_all_openings_draw() {
        let scores = score_moves(&Board::new());
        assert_eq!(scores.len(), CELL_COUNT);
        assert!(scores.iter().all(|&(_, score)| score == DRAW_SCORE));
    }

    #[test]
    fn test_empty_board_opening_is_first_tied_cell() {
        assert_eq!(best_move(&Board::new()), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_completes_own_row() {
        let b = board("OO_/XX_/___");
        assert_eq!(best_move(&b), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_double_threat_found_before_immediate_win() {
        // O at (0, 2) blocks X and threatens both (1, 2) and (2, 0), which
        // scores the same as winning at once and is enumerated first.
        let b = board("XX_/OO_/___");
        let report = search(&b);
        assert_eq!(report.best_move, Some(Position::new(0, 2)));
        assert_eq!(report.best_score, Some(WIN_SCORE));
        assert!(report.candidates.contains(&(Position::new(1, 2), WIN_SCORE)));
    }

    #[test]
    fn test_blocks_forced_loss() {
        let b = board("X__/XO_/___");
        let block = Position::new(2, 0);
        let scores = score_moves(&b);

        assert_eq!(best_move(&b), Some(block));
        assert!(scores.contains(&(block, DRAW_SCORE)));
        assert!(
            scores
                .iter()
                .filter(|(pos, _)| *pos != block)
                .all(|&(_, score)| score == LOSS_SCORE)
        );
    }

    #[test]
    fn test_answers_corner_opening_with_center() {
        let b = board("X__/___/___");
        assert_eq!(best_move(&b), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_answers_center_opening_with_corner() {
        let b = board("___/_X_/___");
        let scores = score_moves(&b);
        for (pos, score) in &scores {
            let is_corner = pos.row != 1 && pos.col != 1;
            let expected = if is_corner { DRAW_SCORE } else { LOSS_SCORE };
            assert_eq!(*score, expected, "{}", pos);
        }
        assert_eq!(best_move(&b), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOX/XOO/OXX");
        let report = search(&b);
        assert_eq!(report.best_move, None);
        assert_eq!(report.best_score, None);
        assert!(report.candidates.is_empty());
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let b = board("X__/_O_/__X");
        let before = b;
        let _ = best_move(&b);
        let _ = score(&b, true);
        assert_eq!(b, before);
    }

    #[test]
    fn test_score_of_terminal_boards() {
        assert_eq!(score(&board("OOO/XX_/X__"), false), WIN_SCORE);
        assert_eq!(score(&board("XXX/OO_/O__"), true), LOSS_SCORE);
        assert_eq!(score(&board("XOX/XOO/OXX"), true), DRAW_SCORE);
    }

    #[test]
    fn test_score_backs_up_side_to_move() {
        let b = board("XX_/OO_/___");
        assert_eq!(score(&b, true), WIN_SCORE);
        assert_eq!(score(&b, false), LOSS_SCORE);
    }

    #[test]
    fn test_report_counts_nodes_and_depth() {
        let report = search(&board("XOX/XO_/O__"));
        assert!(report.nodes > 0);
        assert!(report.max_depth <= 3);
        assert_eq!(report.candidates.len(), 3);
    }
}
