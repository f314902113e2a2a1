mod board;
mod bot_controller;
mod error;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BOT_PLAYER, DRAW_SCORE, LOSS_SCORE, SearchReport, WIN_SCORE, best_move, score, score_moves,
    search,
};
pub use error::{EngineError, Result};
pub use types::{BOARD_SIZE, CELL_COUNT, Mark, Outcome, Player, Position, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
