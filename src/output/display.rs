//! Display functions for game results

use super::formatters::{format_code, format_pegs, hidden_code, palette_legend, shuffled_pegs};
use crate::core::{Code, Feedback};
use crate::engine::{Game, GameState, Statistics, SubmitOutcome};
use colored::Colorize;
use rand::Rng;

/// Print the board, top row first, with the solution row hidden until the end
pub fn print_board<R: Rng + ?Sized>(game: &Game, rng: &mut R) {
    println!("\n{}", "─".repeat(40).cyan());
    match game.reveal_solution() {
        Ok(solution) => println!("  {}", format_code(solution)),
        Err(_) => println!("  {}", hidden_code().bright_black()),
    }
    println!("{}", "─".repeat(40).cyan());

    for (row, slot) in game.board().iter().enumerate() {
        let marker = if game.current_row() == Some(row) { "▶" } else { " " };
        match slot {
            Some(turn) => println!(
                "{marker}{:>2}  {}   {}",
                row + 1,
                format_code(&turn.guess),
                format_pegs(&shuffled_pegs(turn.feedback, rng))
            ),
            None => println!("{marker}{:>2}  {}", row + 1, "· · · ·".bright_black()),
        }
    }

    println!("{}", "─".repeat(40).cyan());
    println!("  {}", palette_legend(&game.config().palette));
}

/// Print the feedback for an accepted guess
pub fn print_outcome<R: Rng + ?Sized>(outcome: &SubmitOutcome, remaining: usize, rng: &mut R) {
    println!(
        "  Feedback: {}   ({} exact, {} color only)",
        format_pegs(&shuffled_pegs(outcome.feedback, rng)),
        outcome.feedback.exact(),
        outcome.feedback.color_only()
    );
    if outcome.state == GameState::InProgress {
        println!(
            "  {} {} left",
            remaining,
            if remaining == 1 { "guess" } else { "guesses" }
        );
    }
}

/// Print the end-of-game banner with the revealed solution
pub fn print_game_over(game: &Game) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match game.state() {
        GameState::WonByGuesser => {
            let guesses = game.guesses_made();
            println!(
                "{}",
                format!(
                    "  🎉 Code broken in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameState::WonByHost => {
            println!("{}", "  💀 Out of guesses, the codemaker wins!".red().bold());
        }
        GameState::InProgress => {}
    }
    if let Ok(solution) = game.reveal_solution() {
        println!("  Solution: {}", format_code(solution));
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Session:".bright_cyan().bold());
    println!("   Games played:   {}", stats.games_played);
    println!(
        "   Guesser wins:   {} ({:.0}%)",
        stats.guesser_wins,
        stats.win_rate()
    );
    println!("   Codemaker wins: {}", stats.host_wins);

    for (guesses, &count) in stats.guess_distribution.iter().enumerate() {
        if count > 0 {
            println!("   {guesses:>2}: {} {count}", "█".repeat(count).green());
        }
    }
}

/// Print the result of scoring one guess against one solution
pub fn print_score(solution: &Code, guess: &Code, feedback: Feedback) {
    println!("\n  Solution: {}", format_code(solution));
    println!("  Guess:    {}", format_code(guess));
    println!(
        "  Feedback: {}   {} exact, {} color only{}",
        format_pegs(&feedback.pegs()),
        feedback.exact().to_string().bright_yellow().bold(),
        feedback.color_only().to_string().bright_yellow().bold(),
        if feedback.is_perfect() {
            " (solved)".green().to_string()
        } else {
            String::new()
        }
    );
}
