//! Game configuration

use crate::core::Palette;

/// Number of guesses a game allows unless configured otherwise
pub const DEFAULT_ATTEMPTS: usize = 8;

/// Who sets the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// The engine generates the solution
    #[default]
    SinglePlayer,
    /// A host player supplies the solution
    TwoPlayer,
}

/// Configuration for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub palette: Palette,
    pub allow_duplicates: bool,
    pub mode: GameMode,
    pub attempts: usize,
    /// Seed for solution generation; `None` draws one from the thread RNG
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(palette: Palette, allow_duplicates: bool, mode: GameMode) -> Self {
        Self {
            palette,
            allow_duplicates,
            mode,
            attempts: DEFAULT_ATTEMPTS,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Palette::classic(), false, GameMode::SinglePlayer)
    }
}
