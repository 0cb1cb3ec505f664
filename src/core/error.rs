//! Engine error types
//!
//! All of these are recoverable: the engine reports them and leaves its state
//! untouched, and the caller decides whether to re-prompt.

use super::{CODE_LENGTH, Color};
use std::fmt;

/// Invalid game or generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPalette,
    PaletteTooSmall { size: usize, required: usize },
    ZeroAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "Palette must contain at least one color"),
            Self::PaletteTooSmall { size, required } => write!(
                f,
                "Palette has {size} colors but {required} are needed without duplicates"
            ),
            Self::ZeroAttempts => write!(f, "A game needs at least one attempt"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Externally supplied solution that breaks the solution invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSolution {
    WrongLength(usize),
    ColorNotInPalette(Color),
    DuplicateColor(Color),
    UnknownSymbol(char),
    /// A solution is already in place (or the game generates its own)
    SolutionLocked,
}

impl fmt::Display for InvalidSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "Solution must have exactly {CODE_LENGTH} colors, got {len}"
            ),
            Self::ColorNotInPalette(color) => {
                write!(f, "Color {} is not in this game's palette", color.name())
            }
            Self::DuplicateColor(color) => write!(
                f,
                "Color {} appears twice but duplicates are off",
                color.name()
            ),
            Self::UnknownSymbol(symbol) => write!(f, "'{symbol}' is not a color symbol"),
            Self::SolutionLocked => write!(f, "This game does not accept a solution now"),
        }
    }
}

impl std::error::Error for InvalidSolution {}

/// Rejected guess; the game state is unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    WrongLength(usize),
    ColorNotInPalette(Color),
    UnknownSymbol(char),
    IncompleteRow { missing: usize },
    AwaitingSolution,
    GameOver,
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Guess must have exactly {CODE_LENGTH} colors, got {len}")
            }
            Self::ColorNotInPalette(color) => {
                write!(f, "Color {} is not in this game's palette", color.name())
            }
            Self::UnknownSymbol(symbol) => write!(f, "'{symbol}' is not a color symbol"),
            Self::IncompleteRow { missing } => {
                write!(f, "Row is incomplete, {missing} more peg(s) needed")
            }
            Self::AwaitingSolution => write!(f, "No solution has been set yet"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for InvalidGuess {}

/// The solution was requested while the game is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotTerminal;

impl fmt::Display for NotTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The solution stays hidden until the game is over")
    }
}

impl std::error::Error for NotTerminal {}
