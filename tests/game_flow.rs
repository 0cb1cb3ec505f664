// End-to-end tests for the public engine API
// These drive a whole game the way a front end would

use mastermind::core::{
    Code, Color, Feedback, InvalidGuess, InvalidSolution, NotTerminal, Palette, parse_colors,
};
use mastermind::engine::{Game, GameConfig, GameMode, GameState, evaluate};

fn colors(symbols: &str) -> Vec<Color> {
    parse_colors(symbols).unwrap()
}

fn hosted_game(solution: &str, duplicates: bool) -> Game {
    let config = GameConfig::new(Palette::classic(), duplicates, GameMode::TwoPlayer);
    let mut game = Game::new(config).unwrap();
    game.supply_solution(&colors(solution)).unwrap();
    game
}

#[test]
fn scoring_examples_from_the_rules() {
    let palette = Palette::classic();

    let no_dupes: Code = "YRGB".parse().unwrap();
    let cases = [
        ("BGRY", (0, 4)),
        ("YYYY", (1, 0)),
        ("OOOO", (0, 0)),
        ("YRGB", (4, 0)),
        ("RYYY", (0, 2)),
    ];
    for (guess, expected) in cases {
        let feedback = evaluate(&colors(guess), &no_dupes, &palette).unwrap();
        assert_eq!(
            (feedback.exact(), feedback.color_only()),
            expected,
            "guess {guess} vs YRGB"
        );
    }

    let with_dupes: Code = "RGRY".parse().unwrap();
    let feedback = evaluate(&colors("RRRR"), &with_dupes, &palette).unwrap();
    assert_eq!((feedback.exact(), feedback.color_only()), (2, 0));
}

#[test]
fn full_game_won_by_guesser() {
    let mut game = hosted_game("RGRY", true);

    let guesses = ["WWWW", "RRRR", "RGRR", "RGRY"];
    let mut last = None;
    for guess in guesses {
        last = Some(game.submit_guess(&colors(guess)).unwrap());
    }

    let last = last.unwrap();
    assert_eq!(last.feedback, Feedback::PERFECT);
    assert_eq!(last.state, GameState::WonByGuesser);
    assert_eq!(last.row, 4);
    assert_eq!(game.turn_counter(), 4);

    let played: Vec<(String, Feedback)> = game
        .history()
        .map(|turn| (turn.guess.to_string(), turn.feedback))
        .collect();
    assert_eq!(
        played,
        vec![
            ("WWWW".to_string(), Feedback::new(0, 0)),
            ("RRRR".to_string(), Feedback::new(2, 0)),
            ("RGRR".to_string(), Feedback::new(3, 0)),
            ("RGRY".to_string(), Feedback::PERFECT),
        ]
    );
    assert_eq!(game.reveal_solution().unwrap().to_string(), "RGRY");
}

#[test]
fn full_game_won_by_host_after_eighth_miss() {
    let mut game = hosted_game("YRGB", false);

    for attempt in 1..=8 {
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.reveal_solution(), Err(NotTerminal));
        let outcome = game.submit_guess(&colors("BGRY")).unwrap();
        assert_eq!(outcome.feedback, Feedback::new(0, 4));
        assert_eq!(outcome.row, 8 - attempt);
    }

    assert_eq!(game.state(), GameState::WonByHost);
    assert_eq!(
        game.submit_guess(&colors("YRGB")),
        Err(InvalidGuess::GameOver)
    );
    assert_eq!(game.board().iter().flatten().count(), 8);
}

#[test]
fn rejected_input_changes_nothing() {
    let mut game = hosted_game("YRGB", false);
    game.submit_guess(&colors("OOOO")).unwrap();
    let before = game.board().to_vec();

    assert_eq!(
        game.submit_guess(&colors("YRG")),
        Err(InvalidGuess::WrongLength(3))
    );
    assert_eq!(
        game.submit_guess(&colors("YRGP")),
        Err(InvalidGuess::ColorNotInPalette(Color::Purple))
    );
    assert_eq!(
        game.submit_row(&[Some(Color::Yellow), None, None, None]),
        Err(InvalidGuess::IncompleteRow { missing: 3 })
    );

    assert_eq!(game.board(), before.as_slice());
    assert_eq!(game.turn_counter(), 7);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn host_can_retry_an_invalid_solution() {
    let config = GameConfig::new(Palette::classic(), false, GameMode::TwoPlayer);
    let mut game = Game::new(config).unwrap();

    assert_eq!(
        game.supply_solution(&colors("RRGB")),
        Err(InvalidSolution::DuplicateColor(Color::Red))
    );
    assert!(game.awaiting_solution());
    game.supply_solution(&colors("RWGB")).unwrap();
    assert!(!game.awaiting_solution());
}

#[test]
fn independent_games_do_not_share_state() {
    let mut first = hosted_game("YRGB", false);
    let second = hosted_game("BGRY", false);

    first.submit_guess(&colors("YRGB")).unwrap();

    assert_eq!(first.state(), GameState::WonByGuesser);
    assert_eq!(second.state(), GameState::InProgress);
    assert_eq!(second.turn_counter(), 8);
}

#[test]
fn single_player_generated_solution_is_valid() {
    for seed in 0..50 {
        let mut game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
        while !game.state().is_terminal() {
            game.submit_guess(&colors("WWWW")).unwrap();
        }

        let solution = game.reveal_solution().unwrap();
        assert!(solution.first_duplicate().is_none(), "seed {seed}: {solution}");
        assert!(
            solution
                .colors()
                .iter()
                .all(|&c| Palette::classic().contains(c))
        );
    }
}
