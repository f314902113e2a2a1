use std::fmt;

use super::error::{EngineError, Result};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '_' | '.' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

/// Zero-based `(row, col)` coordinate. Construction does not check bounds;
/// every board operation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Result<Self> {
        if index >= CELL_COUNT {
            return Err(EngineError::InvalidIndex(index));
        }
        Ok(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn to_index(&self) -> Result<usize> {
        if !self.is_valid() {
            return Err(EngineError::InvalidPosition(*self));
        }
        Ok(self.row * BOARD_SIZE + self.col)
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Position::new(i / BOARD_SIZE, i % BOARD_SIZE))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(player: Player, start: Position, end: Position) -> Self {
        Self { player, start, end }
    }
}
