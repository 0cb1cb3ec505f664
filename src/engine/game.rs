//! Turn controller
//!
//! `Game` owns the solution, the board, the turn counter and the win/loss
//! state. Every mutation goes through `submit_guess`, `supply_solution` or
//! `restart`.

use super::board::{Board, Turn};
use super::config::{GameConfig, GameMode};
use super::evaluate::validate_guess;
use super::generator::SolutionGenerator;
use crate::core::{Code, Color, ConfigError, Feedback, InvalidGuess, InvalidSolution, NotTerminal};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Game progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    /// The guesser scored four exact pegs
    WonByGuesser,
    /// The guesser ran out of attempts
    WonByHost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::WonByGuesser => write!(f, "won by guesser"),
            Self::WonByHost => write!(f, "won by host"),
        }
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub feedback: Feedback,
    /// Board row the guess was recorded in
    pub row: usize,
    pub state: GameState,
}

/// A single Mastermind game
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    generator: SolutionGenerator,
    rng: StdRng,
    solution: Option<Code>,
    board: Board,
    remaining: usize,
    state: GameState,
}

impl Game {
    /// Start a new game
    ///
    /// In single-player mode the solution is generated immediately; in
    /// two-player mode the game waits for [`Game::supply_solution`].
    ///
    /// # Errors
    /// Returns `ConfigError` for an unusable palette or zero attempts.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    /// use mastermind::engine::{Game, GameConfig, GameState};
    ///
    /// let mut game = Game::new(GameConfig::default().with_seed(1)).unwrap();
    /// let outcome = game
    ///     .submit_guess(&[Color::Red, Color::Blue, Color::Yellow, Color::Green])
    ///     .unwrap();
    ///
    /// assert_eq!(outcome.row, 7);
    /// assert_eq!(game.turn_counter(), 7);
    /// assert!(outcome.state == GameState::InProgress || outcome.feedback.is_perfect());
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        if config.attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        let generator = SolutionGenerator::new(config.palette.clone(), config.allow_duplicates)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut game = Self {
            board: Board::new(config.attempts),
            remaining: config.attempts,
            config,
            generator,
            rng,
            solution: None,
            state: GameState::InProgress,
        };
        game.deal_solution();

        info!(
            "New game: {:?}, palette [{}], duplicates {}, {} attempts",
            game.config.mode,
            game.config.palette,
            game.config.allow_duplicates,
            game.config.attempts
        );
        Ok(game)
    }

    /// Set the solution in two-player mode
    ///
    /// # Errors
    /// Returns `InvalidSolution::SolutionLocked` outside two-player mode or
    /// when a solution is already set, or the validation error for a
    /// malformed solution. The game is unchanged on error.
    pub fn supply_solution(&mut self, colors: &[Color]) -> Result<(), InvalidSolution> {
        if self.config.mode != GameMode::TwoPlayer || self.solution.is_some() {
            warn!("Solution supplied while locked ({:?})", self.config.mode);
            return Err(InvalidSolution::SolutionLocked);
        }

        let code = self
            .generator
            .validate(colors)
            .inspect_err(|e| debug!("Rejected supplied solution: {e}"))?;
        self.solution = Some(code);
        info!("Solution supplied by host");
        Ok(())
    }

    /// Submit a guess for the current row
    ///
    /// # Errors
    /// Returns `InvalidGuess` when the game is over, no solution is set yet,
    /// or the guess is malformed. Rejected guesses change nothing.
    pub fn submit_guess(&mut self, guess: &[Color]) -> Result<SubmitOutcome, InvalidGuess> {
        let (code, solution) = self.check_guess(guess).inspect_err(|e| match e {
            InvalidGuess::GameOver | InvalidGuess::AwaitingSolution => {
                warn!("Guess submitted out of turn: {e}");
            }
            _ => debug!("Rejected guess: {e}"),
        })?;

        let feedback = Feedback::calculate(&code, &solution);
        let row = self.remaining - 1;
        self.board.record(row, Turn {
            guess: code,
            feedback,
        });
        self.remaining -= 1;

        if feedback.is_perfect() {
            self.state = GameState::WonByGuesser;
        } else if self.remaining == 0 {
            self.state = GameState::WonByHost;
        }

        debug!("Guess {code} on row {row}: {feedback}");
        if self.state.is_terminal() {
            info!("Game over ({}) after {} guesses", self.state, self.guesses_made());
        }

        Ok(SubmitOutcome {
            feedback,
            row,
            state: self.state,
        })
    }

    /// Submit a row being edited, where `None` marks an empty cell
    ///
    /// # Errors
    /// Returns `InvalidGuess::IncompleteRow` if any cell is empty, otherwise
    /// the same errors as [`Game::submit_guess`].
    pub fn submit_row(&mut self, row: &[Option<Color>]) -> Result<SubmitOutcome, InvalidGuess> {
        let missing = row.iter().filter(|cell| cell.is_none()).count();
        if missing > 0 {
            debug!("Rejected incomplete row ({missing} empty)");
            return Err(InvalidGuess::IncompleteRow { missing });
        }

        let guess: Vec<Color> = row.iter().flatten().copied().collect();
        self.submit_guess(&guess)
    }

    /// Start over with a fresh board
    ///
    /// Single-player games get a new solution; two-player games wait for the
    /// host to supply one.
    pub fn restart(&mut self) {
        self.board.clear();
        self.remaining = self.config.attempts;
        self.state = GameState::InProgress;
        self.solution = None;
        self.deal_solution();
        info!("Game restarted");
    }

    /// The solution, once the game is over
    ///
    /// # Errors
    /// Returns `NotTerminal` while the game is in progress.
    pub fn reveal_solution(&self) -> Result<&Code, NotTerminal> {
        match &self.solution {
            Some(code) if self.state.is_terminal() => Ok(code),
            _ => Err(NotTerminal),
        }
    }

    /// Board slots, row 0 first; guesses fill from the last row upwards
    #[inline]
    #[must_use]
    pub fn board(&self) -> &[Option<Turn>] {
        self.board.rows()
    }

    /// Accepted turns in play order
    pub fn history(&self) -> impl Iterator<Item = &Turn> {
        self.board.turns()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Attempts remaining
    #[inline]
    #[must_use]
    pub const fn turn_counter(&self) -> usize {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.config.attempts - self.remaining
    }

    /// Row the next guess will be recorded in, if the game is still running
    #[must_use]
    pub const fn current_row(&self) -> Option<usize> {
        match self.state {
            GameState::InProgress if self.remaining > 0 => Some(self.remaining - 1),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True while a two-player game has no solution yet
    #[inline]
    #[must_use]
    pub const fn awaiting_solution(&self) -> bool {
        self.solution.is_none()
    }

    fn check_guess(&self, guess: &[Color]) -> Result<(Code, Code), InvalidGuess> {
        if self.state.is_terminal() {
            return Err(InvalidGuess::GameOver);
        }
        let solution = self.solution.ok_or(InvalidGuess::AwaitingSolution)?;
        let code = validate_guess(guess, self.generator.palette())?;
        Ok((code, solution))
    }

    fn deal_solution(&mut self) {
        if self.config.mode == GameMode::SinglePlayer {
            self.solution = Some(self.generator.generate(&mut self.rng));
            debug!("Solution generated");
        }
    }
}
