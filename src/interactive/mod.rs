//! Interactive TUI board
//!
//! Full-screen board with arrow-key peg editing.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
