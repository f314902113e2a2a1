use std::io::{self, BufRead, Write};

use common::log;
use common::tictactoe::{BOARD_SIZE, BOT_PLAYER, Board, Mark, Player, Position};

use crate::config::FirstPlayerMode;
use crate::game_state::{GameStatus, HUMAN_PLAYER, TicTacToeGameState};
use crate::input::{Command, HELP, parse_command};
use crate::scoreboard::Scoreboard;

/// Interactive loop between one human and the computer over any line-based
/// input and output.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    first_player_mode: FirstPlayerMode,
    show_cell_numbers: bool,
    state: TicTacToeGameState,
    scoreboard: Scoreboard,
    board_dirty: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        player_name: String,
        first_player_mode: FirstPlayerMode,
        show_cell_numbers: bool,
    ) -> Self {
        Self {
            input,
            output,
            first_player_mode,
            show_cell_numbers,
            state: TicTacToeGameState::new(HUMAN_PLAYER),
            scoreboard: Scoreboard::new(player_name),
            board_dirty: true,
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Welcome, {}! You play X, the computer plays O. Type 'help' for commands.",
            self.scoreboard.player_name
        )?;
        self.start_round()?;

        loop {
            if self.state.is_computer_turn() {
                self.computer_turn()?;
                continue;
            }

            if self.board_dirty {
                let rendered = render_board(self.state.board(), self.show_cell_numbers);
                write!(self.output, "\n{}", rendered)?;
                self.board_dirty = false;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::NewRound) => self.start_round()?,
                Ok(Command::Score) => writeln!(self.output, "{}", self.scoreboard)?,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Place(pos)) => self.human_turn(pos)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        writeln!(self.output, "\nFinal score: {}", self.scoreboard)?;
        log!(
            "Session finished after {} round(s): {}",
            self.scoreboard.rounds(),
            self.scoreboard
        );
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn start_round(&mut self) -> io::Result<()> {
        let first_player = match self.first_player_mode {
            FirstPlayerMode::Human => HUMAN_PLAYER,
            FirstPlayerMode::Computer => BOT_PLAYER,
            FirstPlayerMode::Random => {
                if rand::random_bool(0.5) {
                    HUMAN_PLAYER
                } else {
                    BOT_PLAYER
                }
            }
        };

        self.state.reset(first_player);
        self.board_dirty = true;

        let who = self.player_label(self.state.first_player());
        writeln!(
            self.output,
            "\nRound {} - {} moves first.",
            self.scoreboard.rounds() + 1,
            who
        )?;
        log!("Round {} started, {} moves first", self.scoreboard.rounds() + 1, who);
        Ok(())
    }

    fn human_turn(&mut self, pos: Position) -> io::Result<()> {
        if self.state.status() != GameStatus::InProgress {
            writeln!(self.output, "The round is over. Type 'new' to play again or 'quit'.")?;
            return Ok(());
        }

        match self.state.place_mark(pos) {
            Ok(()) => {
                self.board_dirty = true;
                self.after_move()
            }
            Err(message) => writeln!(self.output, "{}", message),
        }
    }

    fn computer_turn(&mut self) -> io::Result<()> {
        match self.state.play_computer_move() {
            Ok(report) => {
                if let Some(pos) = report.best_move {
                    writeln!(
                        self.output,
                        "Computer plays row {}, column {}.",
                        pos.row + 1,
                        pos.col + 1
                    )?;
                    log!(
                        "Computer chose {} with score {:?} after {} nodes (depth {})",
                        pos,
                        report.best_score,
                        report.nodes,
                        report.max_depth
                    );
                }
                self.board_dirty = true;
                self.after_move()
            }
            Err(message) => {
                log!("Computer could not move: {}", message);
                writeln!(self.output, "{}", message)
            }
        }
    }

    fn after_move(&mut self) -> io::Result<()> {
        let status = self.state.status();
        let message = match status {
            GameStatus::InProgress => return Ok(()),
            GameStatus::XWon => format!("{} has won!", self.player_label(Player::X)),
            GameStatus::OWon => format!("{} has won!", self.player_label(Player::O)),
            GameStatus::Draw => "It's a draw!".to_string(),
        };

        let rendered = render_board(self.state.board(), false);
        write!(self.output, "\n{}", rendered)?;
        self.board_dirty = false;

        self.scoreboard.record(status);
        writeln!(self.output, "{}", message)?;
        if let Some(line) = self.state.winning_line() {
            writeln!(
                self.output,
                "Winning line: row {}, column {} to row {}, column {}.",
                line.start.row + 1,
                line.start.col + 1,
                line.end.row + 1,
                line.end.col + 1
            )?;
        }
        writeln!(self.output, "{}", self.scoreboard)?;
        writeln!(self.output, "Type 'new' to play again or 'quit'.")?;
        log!("Round over: {}", message);
        Ok(())
    }

    fn player_label(&self, player: Player) -> String {
        if player == HUMAN_PLAYER {
            format!("{} ({})", self.scoreboard.player_name, player)
        } else {
            format!("Computer ({})", player)
        }
    }
}

/// Renders the grid; empty cells optionally show their 1-9 shortcut.
pub fn render_board(board: &Board, show_cell_numbers: bool) -> String {
    let mut out = String::new();
    for (index, cell) in board.cells().iter().enumerate() {
        let (row, col) = (index / BOARD_SIZE, index % BOARD_SIZE);
        if col > 0 {
            out.push('|');
        } else if row > 0 {
            out.push_str("---+---+---\n");
        }
        let symbol = match cell {
            Mark::Empty if show_cell_numbers => char::from_digit(index as u32 + 1, 10).unwrap_or(' '),
            Mark::Empty => ' ',
            mark => mark.to_char(),
        };
        out.push(' ');
        out.push(symbol);
        out.push(' ');
        if col == BOARD_SIZE - 1 {
            out.push('\n');
        }
    }
    out
}
