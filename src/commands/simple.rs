//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::core::{InvalidGuess, InvalidSolution, parse_colors};
use crate::engine::{Game, GameConfig, Statistics};
use crate::output::{print_board, print_game_over, print_outcome, print_statistics};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if the configuration is unusable or there's an I/O error
/// reading user input.
pub fn run_simple(config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(config, stdin.lock())?;
    Ok(())
}

/// Run the simple CLI mode reading commands from `input`
///
/// End of input behaves like `quit`. Returns the statistics of the games
/// finished before quitting.
///
/// # Errors
///
/// Returns an error if the configuration is unusable or reading input fails.
pub fn run_simple_with<R: BufRead>(config: GameConfig, mut input: R) -> Result<Statistics> {
    let mut game = Game::new(config)?;
    let mut stats = Statistics::default();
    let mut rng = rand::rng();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Mastermind - Terminal Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Break the hidden {}-peg code in {} guesses.",
        crate::core::CODE_LENGTH,
        game.config().attempts
    );
    println!("Enter guesses as color symbols, e.g. RGBY.");
    println!("  - B: right color, right position");
    println!("  - W: right color, wrong position");
    let duplicates = game.config().allow_duplicates;
    println!(
        "  - Duplicate colors in the solution: {}\n",
        if duplicates { "yes" } else { "no" }
    );
    println!("Commands: 'quit' to exit, 'new' for new game, 'board' to show the board\n");

    'game: loop {
        if game.awaiting_solution() && !read_solution(&mut game, &mut input)? {
            break 'game;
        }

        print_board(&game, &mut rng);

        while !game.state().is_terminal() {
            let prompt = format!(
                "Guess {} of {}",
                game.guesses_made() + 1,
                game.config().attempts
            );
            let Some(line) = get_user_input(&mut input, &prompt)? else {
                break 'game;
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => break 'game,
                "new" | "n" => {
                    game.restart();
                    println!("\n🔄 New game started!\n");
                    continue 'game;
                }
                "board" => {
                    print_board(&game, &mut rng);
                    continue;
                }
                _ => {}
            }

            let colors = match parse_colors(&line) {
                Ok(colors) => colors,
                Err(symbol) => {
                    println!("❌ {}\n", InvalidGuess::UnknownSymbol(symbol));
                    continue;
                }
            };

            match game.submit_guess(&colors) {
                Ok(outcome) => print_outcome(&outcome, game.turn_counter(), &mut rng),
                Err(e) => println!("❌ {e}\n"),
            }
        }

        stats.record(game.state(), game.guesses_made());
        print_board(&game, &mut rng);
        print_game_over(&game);
        print_statistics(&stats);

        match get_user_input(&mut input, "\nPlay again? (yes/no)")?
            .map(|answer| answer.to_lowercase())
            .as_deref()
        {
            Some("yes" | "y") => {
                game.restart();
                println!("\n🔄 New game started!\n");
            }
            _ => break 'game,
        }
    }

    farewell();
    Ok(stats)
}

/// Ask the host for a solution until a valid one is entered
///
/// Returns `false` if the host quit or input ended.
fn read_solution<R: BufRead>(game: &mut Game, input: &mut R) -> Result<bool> {
    println!("Codemaker: have the other player look away and enter your solution.");
    println!("Colors: {}\n", game.config().palette);

    loop {
        let Some(line) = get_user_input(input, "Solution")? else {
            return Ok(false);
        };
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(false);
        }

        let supplied = parse_colors(&line)
            .map_err(InvalidSolution::UnknownSymbol)
            .and_then(|colors| game.supply_solution(&colors));

        match supplied {
            Ok(()) => {
                execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
                println!("✓ Solution locked in. Guesser, you're up!\n");
                return Ok(true);
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

fn farewell() {
    println!("\n👋 Thanks for playing!\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use crate::engine::GameMode;
    use std::io::Cursor;

    fn two_player() -> GameConfig {
        GameConfig::new(Palette::classic(), false, GameMode::TwoPlayer)
    }

    #[test]
    fn quits_immediately() {
        let input = Cursor::new("quit\n");
        let stats = run_simple_with(GameConfig::default().with_seed(1), input).unwrap();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn end_of_input_acts_like_quit() {
        let stats = run_simple_with(GameConfig::default(), Cursor::new("")).unwrap();
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn invalid_guesses_are_reprompted_without_using_a_turn() {
        let input = Cursor::new("YRGB\nRGB\nRGBX\nYRGP\nboard\nYRGB\nno\n");
        let stats = run_simple_with(two_player(), input).unwrap();

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.guesser_wins, 1);
        assert_eq!(stats.guess_distribution, vec![0, 1]);
    }

    #[test]
    fn two_player_game_to_victory() {
        let input = Cursor::new("RGRY\nRGXY\nYRGB\nBGRY\nOOOO\nYRGB\nno\n");
        let stats = run_simple_with(two_player(), input).unwrap();

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.guesser_wins, 1);
        assert_eq!(stats.host_wins, 0);
        assert_eq!(stats.guess_distribution[3], 1);
    }

    #[test]
    fn two_player_game_lost_then_replayed() {
        let mut script = String::from("YRGB\n");
        script.push_str(&"OOOO\n".repeat(8));
        script.push_str("yes\nRGBY\nRGBY\nno\n");
        let stats = run_simple_with(two_player(), Cursor::new(script)).unwrap();

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.host_wins, 1);
        assert_eq!(stats.guesser_wins, 1);
        assert_eq!(stats.guess_distribution, vec![0, 1]);
    }

    #[test]
    fn new_game_mid_round_resets_the_board() {
        let input = Cursor::new("YRGB\nOOOO\nnew\nBGRY\nBGRY\nno\n");
        let stats = run_simple_with(two_player(), input).unwrap();

        // The abandoned round is not counted and its guess does not carry over
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.guess_distribution, vec![0, 1]);
    }

    #[test]
    fn rejects_unusable_config() {
        let config = GameConfig::new(Palette::first(2), false, GameMode::SinglePlayer);
        assert!(run_simple_with(config, Cursor::new("quit\n")).is_err());
    }
}
