//! Mastermind - CLI
//!
//! Code-breaking game with TUI and terminal prompt modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_simple, score_codes},
    core::Palette,
    engine::{GameConfig, GameMode},
    output::print_score,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break the hidden four-peg color code before your guesses run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Allow the same color more than once in the solution
    #[arg(short, long, global = true)]
    duplicates: bool,

    /// Palette size: the first N of R B Y G W O P
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 6,
        value_parser = clap::value_parser!(u8).range(1..=7)
    )]
    colors: u8,

    /// Number of guesses per game
    #[arg(short, long, global = true, default_value_t = mastermind::engine::DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Seed for reproducible solutions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log verbosity (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI board (default)
    Play,

    /// Simple CLI mode (prompt-based, supports two players)
    Simple {
        /// 1: the computer hides the code, 2: a second player does
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u8).range(1..=2)
        )]
        players: u8,
    },

    /// Score one guess against a solution
    Score {
        /// The solution, e.g. RGRY
        solution: String,

        /// The guess, e.g. RRRR
        guess: String,
    },
}

impl Cli {
    fn game_config(&self, mode: GameMode) -> GameConfig {
        let mut config = GameConfig::new(self.palette(), self.duplicates, mode)
            .with_attempts(self.attempts);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    fn palette(&self) -> Palette {
        Palette::first(usize::from(self.colors))
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.game_config(GameMode::SinglePlayer)),
        Commands::Simple { players } => {
            let mode = if players == 2 {
                GameMode::TwoPlayer
            } else {
                GameMode::SinglePlayer
            };
            run_simple(cli.game_config(mode))
        }
        Commands::Score { solution, guess } => {
            run_score_command(&solution, &guess, &cli.palette(), cli.duplicates)
        }
    }
}

fn run_score_command(
    solution: &str,
    guess: &str,
    palette: &Palette,
    allow_duplicates: bool,
) -> Result<()> {
    let result = score_codes(solution, guess, palette, allow_duplicates)?;
    print_score(&result.solution, &result.guess, result.feedback);
    Ok(())
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(config)?;
    run_tui(app)
}
