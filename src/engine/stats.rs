//! Per-session results across several games

use super::game::GameState;

/// Running tally of finished games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub guesser_wins: usize,
    pub host_wins: usize,
    /// `guess_distribution[n]` counts guesser wins that took `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game; in-progress states are ignored
    pub fn record(&mut self, state: GameState, guesses: usize) {
        match state {
            GameState::InProgress => return,
            GameState::WonByGuesser => {
                self.guesser_wins += 1;
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
            }
            GameState::WonByHost => self.host_wins += 1,
        }
        self.games_played += 1;
    }

    /// Share of games the guesser won, as a percentage
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.guesser_wins as f64 / self.games_played as f64 * 100.0
        }
    }
}
