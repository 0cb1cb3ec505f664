//! Mastermind
//!
//! A code-breaking game engine: a hidden four-peg solution, guesses scored
//! with exact and color-only pegs, and a fixed budget of attempts.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Color, Palette};
//! use mastermind::engine::{Game, GameConfig, GameMode, GameState};
//!
//! let config = GameConfig::new(Palette::classic(), true, GameMode::TwoPlayer);
//! let mut game = Game::new(config).unwrap();
//! game.supply_solution(&[Color::Red, Color::Green, Color::Red, Color::Yellow]).unwrap();
//!
//! let outcome = game.submit_guess(&[Color::Red; 4]).unwrap();
//! assert_eq!((outcome.feedback.exact(), outcome.feedback.color_only()), (2, 0));
//! assert_eq!(outcome.state, GameState::InProgress);
//! ```

// Core domain types
pub mod core;

// Game engine: generation, scoring, turn control
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
