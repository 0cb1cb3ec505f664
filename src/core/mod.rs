//! Core domain types for Mastermind
//!
//! Pure data types with no I/O: colors, palettes, codes, feedback and the
//! engine's error taxonomy.

mod code;
mod color;
pub mod error;
mod feedback;
mod palette;

pub use code::{CODE_LENGTH, Code};
pub use color::{Color, parse_colors};
pub use error::{ConfigError, InvalidGuess, InvalidSolution, NotTerminal};
pub use feedback::{Feedback, Peg};
pub use palette::Palette;
