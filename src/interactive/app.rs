//! TUI application state and logic

use crate::core::{CODE_LENGTH, Color, Peg};
use crate::engine::{Game, GameConfig, GameState, Statistics};
use crate::output::formatters::shuffled_pegs;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::rngs::ThreadRng;
use std::io;

const NEW_GAME_HINT: &str = "Press space for a new game or 'q' to quit.";

/// Application state
pub struct App {
    pub game: Game,
    /// Row being edited; `None` is an empty cell
    pub draft: [Option<Color>; CODE_LENGTH],
    /// Selected column in the draft row
    pub cursor: usize,
    /// Shuffled feedback pegs per board row, fixed when the row is scored
    pub row_pegs: Vec<Option<Vec<Peg>>>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: ThreadRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app with a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot start a game.
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = Game::new(config)?;
        let rows = game.board().len();

        let mut app = Self {
            game,
            draft: [None; CODE_LENGTH],
            cursor: 0,
            row_pegs: vec![None; rows],
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng: rand::rng(),
        };
        app.add_message(
            "Welcome! ←/→ pick a peg, ↑/↓ change its color, Enter to submit.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor + 1 < CODE_LENGTH {
            self.cursor += 1;
        }
    }

    /// Step the selected cell's color forwards or backwards through the palette
    ///
    /// Stops at either end of the palette. An empty cell takes the first color.
    pub fn cycle_color(&mut self, forward: bool) {
        if self.game.state().is_terminal() {
            return;
        }

        let palette = &self.game.config().palette;
        let colors = palette.colors();
        let Some(&first) = colors.first() else {
            return;
        };

        let cell = &mut self.draft[self.cursor];
        *cell = Some(match cell.and_then(|c| palette.index_of(c)) {
            None => first,
            Some(i) if forward => colors[(i + 1).min(colors.len() - 1)],
            Some(i) => colors[i.saturating_sub(1)],
        });
    }

    /// Set the selected cell directly by color symbol and advance the cursor
    pub fn place_symbol(&mut self, symbol: char) {
        if self.game.state().is_terminal() {
            return;
        }

        match Color::from_symbol(symbol) {
            Some(color) if self.game.config().palette.contains(color) => {
                self.draft[self.cursor] = Some(color);
                self.move_right();
            }
            _ => self.add_message(
                &format!("'{symbol}' is not a color in this game"),
                MessageStyle::Error,
            ),
        }
    }

    pub fn clear_cell(&mut self) {
        self.draft[self.cursor] = None;
        self.move_left();
    }

    /// Submit the draft row
    pub fn submit(&mut self) {
        match self.game.submit_row(&self.draft) {
            Ok(outcome) => {
                self.row_pegs[outcome.row] = Some(shuffled_pegs(outcome.feedback, &mut self.rng));
                self.draft = [None; CODE_LENGTH];
                self.cursor = 0;

                match outcome.state {
                    GameState::InProgress => self.add_message(
                        &format!(
                            "{} exact, {} color only. {} left.",
                            outcome.feedback.exact(),
                            outcome.feedback.color_only(),
                            self.game.turn_counter()
                        ),
                        MessageStyle::Info,
                    ),
                    GameState::WonByGuesser => {
                        self.stats.record(outcome.state, self.game.guesses_made());
                        let celebration = match self.game.guesses_made() {
                            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                            2 | 3 => "🔥 MAGNIFICENT! Code broken! 🔥",
                            4..=6 => "✨ NICE WORK! Code broken! ✨",
                            _ => "😅 PHEW! Just in time! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(NEW_GAME_HINT, MessageStyle::Info);
                    }
                    GameState::WonByHost => {
                        self.stats.record(outcome.state, self.game.guesses_made());
                        self.add_message(
                            "Out of guesses, the codemaker wins!",
                            MessageStyle::Error,
                        );
                        self.add_message(NEW_GAME_HINT, MessageStyle::Info);
                    }
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.game.restart();
        self.draft = [None; CODE_LENGTH];
        self.cursor = 0;
        self.row_pegs.fill(None);
        self.messages.clear();
        self.add_message("New game started! A fresh code is hidden.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char(' ') if self.game.state().is_terminal() => self.new_game(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.cycle_color(true),
            KeyCode::Down => self.cycle_color(false),
            KeyCode::Backspace | KeyCode::Delete => self.clear_cell(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.place_symbol(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use crate::engine::GameMode;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn seeded_app() -> App {
        App::new(GameConfig::default().with_seed(17)).unwrap()
    }

    #[test]
    fn cursor_stays_on_the_board() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, CODE_LENGTH - 1);
    }

    #[test]
    fn up_and_down_walk_the_palette() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.draft[0], Some(Color::Red));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.draft[0], Some(Color::Blue));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.draft[0], Some(Color::Red));

        for _ in 0..20 {
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.draft[0], Some(Color::Orange));
    }

    #[test]
    fn incomplete_row_is_not_submitted() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.turn_counter(), 8);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.draft[0], Some(Color::Red));
    }

    #[test]
    fn symbols_fill_the_row_and_submit() {
        let mut app = seeded_app();
        for c in ['w', 'w', 'w', 'w'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.turn_counter(), 7);
        assert!(app.row_pegs[7].is_some());
        assert_eq!(app.draft, [None; CODE_LENGTH]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn symbol_outside_palette_is_refused() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.draft[0], None);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn finished_game_records_stats_and_space_restarts() {
        let mut app = seeded_app();
        for _ in 0..8 {
            for _ in 0..4 {
                press(&mut app, KeyCode::Char('w'));
            }
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.game.state(), GameState::WonByHost);
        assert_eq!(app.stats.host_wins, 1);

        // Input is ignored once the game is over
        press(&mut app, KeyCode::Up);
        assert_eq!(app.draft[0], None);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game.state(), GameState::InProgress);
        assert!(app.row_pegs.iter().all(Option::is_none));
    }

    #[test]
    fn quit_keys() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = seeded_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn rejects_unusable_config() {
        let config = GameConfig::new(Palette::first(3), false, GameMode::SinglePlayer);
        assert!(App::new(config).is_err());
    }
}
