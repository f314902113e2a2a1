//! Rules engine for 3x3 tic-tac-toe with a perfect-play O opponent, plus the
//! config and logging plumbing shared by front-ends.

pub mod config;
pub mod logger;
pub mod tictactoe;
