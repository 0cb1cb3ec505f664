//! Mastermind game engine
//!
//! Solution generation, guess evaluation and the turn-by-turn state machine.
//! Nothing in here renders or reads input.

mod board;
mod config;
mod evaluate;
mod game;
mod generator;
mod stats;

pub use board::{Board, Turn};
pub use config::{DEFAULT_ATTEMPTS, GameConfig, GameMode};
pub use evaluate::{evaluate, validate_guess};
pub use game::{Game, GameState, SubmitOutcome};
pub use generator::SolutionGenerator;
pub use stats::Statistics;
