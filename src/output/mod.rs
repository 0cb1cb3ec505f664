//! Terminal output formatting
//!
//! Display utilities for the prompt front end and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_outcome, print_score, print_statistics};
