//! TUI rendering with ratatui
//!
//! Board, legend, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{Color as PegColor, Peg};
use crate::engine::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const PEG: &str = "●";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn peg_color(color: PegColor) -> Color {
    match color {
        PegColor::Red => Color::Red,
        PegColor::Blue => Color::Blue,
        PegColor::Yellow => Color::Yellow,
        PegColor::Green => Color::Green,
        PegColor::White => Color::White,
        PegColor::Orange => Color::Rgb(255, 165, 0),
        PegColor::Purple => Color::Magenta,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn code_spans(colors: &[PegColor]) -> Vec<Span<'static>> {
    colors
        .iter()
        .map(|&c| Span::styled(format!(" {PEG} "), Style::default().fg(peg_color(c))))
        .collect()
}

fn feedback_spans(pegs: &[Peg]) -> Vec<Span<'static>> {
    let mut spans: Vec<Span> = pegs
        .iter()
        .map(|peg| match peg {
            Peg::Exact => Span::styled(
                "B",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Peg::ColorOnly => Span::styled("W", Style::default().fg(Color::Black).bg(Color::White)),
        })
        .collect();
    while spans.len() < crate::core::CODE_LENGTH {
        spans.push(Span::styled("·", Style::default().fg(Color::DarkGray)));
    }
    spans
}

fn draft_spans(app: &App) -> Vec<Span<'static>> {
    app.draft
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let mut style = match cell {
                Some(c) => Style::default().fg(peg_color(*c)),
                None => Style::default().fg(Color::DarkGray),
            };
            if i == app.cursor {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            let glyph = if cell.is_some() { PEG } else { "○" };
            Span::styled(format!(" {glyph} "), style)
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut lines = Vec::new();

    // Solution row, hidden until the game ends
    let mut solution_line = vec![Span::raw("      ")];
    match game.reveal_solution() {
        Ok(solution) => solution_line.extend(code_spans(solution.colors())),
        Err(_) => solution_line.push(Span::styled(
            " ?  ?  ?  ? ",
            Style::default().fg(Color::DarkGray),
        )),
    }
    lines.push(Line::from(solution_line));
    lines.push(Line::from("    ────────────────────────"));

    for (row, slot) in game.board().iter().enumerate() {
        let is_current = game.current_row() == Some(row);
        let marker = if is_current { " ▶" } else { "  " };
        let mut spans = vec![Span::raw(format!("{marker}{:>2}  ", row + 1))];

        match slot {
            Some(turn) => {
                spans.extend(code_spans(turn.guess.colors()));
                spans.push(Span::raw("   "));
                let pegs = app.row_pegs[row]
                    .clone()
                    .unwrap_or_else(|| turn.feedback.pegs());
                spans.extend(feedback_spans(&pegs));
            }
            None if is_current => spans.extend(draft_spans(app)),
            None => spans.push(Span::styled(
                " ·  ·  ·  · ",
                Style::default().fg(Color::DarkGray),
            )),
        }
        lines.push(Line::from(spans));
    }

    let title = match game.state() {
        GameState::InProgress => " Board ".to_string(),
        GameState::WonByGuesser => " 🎉 Code broken! ".to_string(),
        GameState::WonByHost => " 💀 Codemaker wins ".to_string(),
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Legend
            Constraint::Min(5),         // Messages
            Constraint::Length(6),      // Stats
        ])
        .split(area);

    render_legend(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_legend(f: &mut Frame, app: &App, area: Rect) {
    let mut palette_line = Vec::new();
    for &color in app.game.config().palette.colors() {
        palette_line.push(Span::styled(
            format!("{PEG} "),
            Style::default().fg(peg_color(color)),
        ));
        palette_line.push(Span::raw(format!("{}  ", color.symbol())));
    }

    let content = vec![
        Line::from(palette_line),
        Line::from(vec![
            Span::styled("B", Style::default().fg(Color::White).bg(Color::Black)),
            Span::raw(" right color, right place"),
        ]),
        Line::from(vec![
            Span::styled("W", Style::default().fg(Color::Black).bg(Color::White)),
            Span::raw(" right color, wrong place"),
        ]),
        Line::from(format!(
            "Duplicates: {}",
            if app.game.config().allow_duplicates { "on" } else { "off" }
        )),
    ];

    let legend = Paragraph::new(content).block(
        Block::default()
            .title(" Legend ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let content = vec![
        Line::from(format!("Games:          {}", stats.games_played)),
        Line::from(format!(
            "Guesser wins:   {} ({:.0}%)",
            stats.guesser_wins,
            stats.win_rate()
        )),
        Line::from(format!("Codemaker wins: {}", stats.host_wins)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let turn_text = format!(
        "Guess {}/{}",
        (app.game.guesses_made() + 1).min(app.game.config().attempts),
        app.game.config().attempts
    );
    f.render_widget(
        Paragraph::new(turn_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if app.game.state().is_terminal() {
        "q: Quit | space/n: New Game"
    } else {
        "←/→: Peg | ↑/↓: Color | R B Y G W O: Set | Enter: Submit | n: New | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
