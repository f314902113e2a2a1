use common::tictactoe::{BOARD_SIZE, CELL_COUNT, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    NewRound,
    Score,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  1-9          place a mark, numbered left to right, top to bottom
  <row> <col>  place a mark by 1-based row and column
  new | reset  start a new round
  score        show the running score
  help         show this message
  quit         leave the game";

/// Parses one line typed by the player.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Err("Type a cell number or 'help'".to_string()),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "new" | "reset" | "n" => return Ok(Command::NewRound),
        "score" | "s" => return Ok(Command::Score),
        "help" | "h" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let numbers = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| format!("Unknown command '{}'", line))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match numbers.as_slice() {
        [cell] if (1..=CELL_COUNT).contains(cell) => Position::from_index(cell - 1)
            .map(Command::Place)
            .map_err(|e| e.to_string()),
        [cell] => Err(format!("Cell must be between 1 and {}, got {}", CELL_COUNT, cell)),
        [row, col] if (1..=BOARD_SIZE).contains(row) && (1..=BOARD_SIZE).contains(col) => {
            Ok(Command::Place(Position::new(row - 1, col - 1)))
        }
        [row, col] => Err(format!(
            "Row and column must be between 1 and {}, got {} {}",
            BOARD_SIZE, row, col
        )),
        _ => Err(format!("Unknown command '{}'", line)),
    }
}
