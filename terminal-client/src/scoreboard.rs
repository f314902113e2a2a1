use std::fmt;

use crate::game_state::GameStatus;

/// Running tally for the current process only.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub player_name: String,
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new(player_name: String) -> Self {
        Self {
            player_name,
            ..Self::default()
        }
    }

    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.human_wins += 1,
            GameStatus::OWon => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} Computer (draws: {})",
            self.player_name, self.human_wins, self.computer_wins, self.draws
        )
    }
}
