use common::tictactoe::{
    BOT_PLAYER, Board, Outcome, Player, Position, SearchReport, WinningLine, check_win_with_line,
    evaluate, search,
};

pub const HUMAN_PLAYER: Player = Player::X;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => GameStatus::InProgress,
            Outcome::Win(Player::X) => GameStatus::XWon,
            Outcome::Win(Player::O) => GameStatus::OWon,
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

/// One round: the board plus whose turn it is. The human plays X, the
/// computer O.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    first_player: Player,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            first_player,
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_player == BOT_PLAYER
    }

    pub fn place_mark(&mut self, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Round is already over".to_string());
        }

        self.board
            .place(pos, self.current_player)
            .map_err(|e| e.to_string())?;
        self.last_move = Some(pos);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    /// Lets the computer pick and play its move.
    pub fn play_computer_move(&mut self) -> Result<SearchReport, String> {
        if !self.is_computer_turn() {
            return Err("It is not the computer's turn".to_string());
        }

        let report = search(&self.board);
        let pos = report
            .best_move
            .ok_or_else(|| "No move available".to_string())?;
        self.place_mark(pos)?;
        Ok(report)
    }

    pub fn reset(&mut self, first_player: Player) {
        *self = Self::new(first_player);
    }

    fn check_game_over(&mut self) {
        self.status = GameStatus::from(evaluate(&self.board));
        self.winning_line = check_win_with_line(&self.board);
    }
}
