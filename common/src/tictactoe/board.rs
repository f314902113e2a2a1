use std::fmt;
use std::str::FromStr;

use super::error::{EngineError, Result};
use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Player, Position};

/// Fixed 3x3 grid stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Result<Mark> {
        Ok(self.cells[pos.to_index()?])
    }

    pub fn is_empty(&self, pos: Position) -> Result<bool> {
        Ok(self.get(pos)?.is_empty())
    }

    /// Writes `player`'s mark into an empty cell. Occupied cells are
    /// rejected with [`EngineError::IllegalMove`] rather than overwritten.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<()> {
        let index = pos.to_index()?;
        if !self.cells[index].is_empty() {
            return Err(EngineError::IllegalMove(pos));
        }
        self.cells[index] = player.mark();
        Ok(())
    }

    pub fn clear(&mut self, pos: Position) -> Result<()> {
        let index = pos.to_index()?;
        self.cells[index] = Mark::Empty;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::all()
            .zip(self.cells.iter())
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    pub(crate) fn mark_at(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub(crate) fn set_at(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Compact single-line notation, rows separated by `/`: `"OO_/XX_/___"`.
    pub fn to_notation(&self) -> String {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|cell| cell.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(notation: &str) -> Result<Self> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for c in notation.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let mark = Mark::from_char(c).ok_or_else(|| {
                EngineError::InvalidNotation(format!("unexpected character '{}'", c))
            })?;
            if count == CELL_COUNT {
                return Err(EngineError::InvalidNotation(format!(
                    "more than {} cells in \"{}\"",
                    CELL_COUNT, notation
                )));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(EngineError::InvalidNotation(format!(
                "expected {} cells, found {}",
                CELL_COUNT, count
            )));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Mark::Empty => write!(f, "   ")?,
                    mark => write!(f, " {} ", mark.to_char())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), CELL_COUNT);
        assert!(Position::all().all(|pos| board.is_empty(pos).unwrap()));
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        let pos = Position::new(1, 1);

        board.place(pos, Player::X).unwrap();
        assert_eq!(board.get(pos).unwrap(), Mark::X);
        assert!(!board.is_empty(pos).unwrap());

        board.clear(pos).unwrap();
        assert!(board.is_empty(pos).unwrap());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected() {
        let mut board = Board::new();
        let pos = Position::new(0, 2);
        board.place(pos, Player::O).unwrap();

        assert_eq!(board.place(pos, Player::X), Err(EngineError::IllegalMove(pos)));
        assert_eq!(board.get(pos).unwrap(), Mark::O);
    }

    #[test]
    fn test_out_of_range_operations_fail() {
        let mut board = Board::new();
        let bad = Position::new(0, 3);

        assert_eq!(board.is_empty(bad), Err(EngineError::InvalidPosition(bad)));
        assert_eq!(board.place(bad, Player::X), Err(EngineError::InvalidPosition(bad)));
        assert_eq!(board.clear(bad), Err(EngineError::InvalidPosition(bad)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_full() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());

        let board: Board = "XOX/XOO/OX_".parse().unwrap();
        assert!(!board.is_full());
        assert_eq!(board.available_moves(), vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board: Board = "X_O/_X_/O__".parse().unwrap();
        assert_eq!(
            board.available_moves(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_notation_parsing() {
        let board: Board = "OO_/XX_/___".parse().unwrap();
        assert_eq!(board.get(Position::new(0, 0)).unwrap(), Mark::O);
        assert_eq!(board.get(Position::new(1, 1)).unwrap(), Mark::X);
        assert_eq!(board.to_notation(), "OO_/XX_/___");

        let multiline: Board = "OO_\nXX_\n___".parse().unwrap();
        assert_eq!(multiline, board);
    }

    #[test]
    fn test_notation_rejects_bad_input() {
        assert!(matches!("OO_/XX_".parse::<Board>(), Err(EngineError::InvalidNotation(_))));
        assert!(matches!("OO_/XX_/___/_".parse::<Board>(), Err(EngineError::InvalidNotation(_))));
        assert!(matches!("OOZ/XX_/___".parse::<Board>(), Err(EngineError::InvalidNotation(_))));
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut board: Board = "XOX/_O_/__X".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_renders_grid() {
        let board: Board = "X__/_O_/___".parse().unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.starts_with(" X |   |   "));
        assert!(rendered.contains("   | O |   "));
    }
}
