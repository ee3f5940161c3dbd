//! Interactive Firebreak game in the terminal.
//!
//! A city of grass, house, and water blocks burns down around you: fire
//! advances one ring of 4-connected neighbors every two seconds. Move the
//! firefighter and detonate water charges to cut firebreaks. Dousing a
//! burning cell scores points; flooding a house costs them.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-tui
//! ```
//!
//! # Controls
//!
//! - Arrow keys / WASD - move (wraps around the board edge)
//! - Enter / Space - detonate a water charge on the current cell
//! - `r` - restart with a fresh random city
//! - `q` / Esc - quit

use firebreak_core::{Direction, GameConfig, GameSession, TileType};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// How long one input poll blocks; keeps the fire clock responsive without
/// busy-spinning.
const INPUT_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn Error>> {
    // Logs are off by default so they cannot bleed into the alternate
    // screen; RUST_LOG=debug etc. re-enables them on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::default();
    let session = GameSession::new(config, &mut rand::rng())?;

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, config, session);
    ratatui::restore();
    result
}

fn run(
    terminal: &mut DefaultTerminal,
    config: GameConfig,
    mut session: GameSession,
) -> Result<(), Box<dyn Error>> {
    let fire_interval = Duration::from_millis(config.fire_interval_ms);
    let mut last_spread = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, &session))?;

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up | KeyCode::Char('w') => {
                        session.move_firefighter(Direction::Up);
                    }
                    KeyCode::Down | KeyCode::Char('s') => {
                        session.move_firefighter(Direction::Down);
                    }
                    KeyCode::Left | KeyCode::Char('a') => {
                        session.move_firefighter(Direction::Left);
                    }
                    KeyCode::Right | KeyCode::Char('d') => {
                        session.move_firefighter(Direction::Right);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        session.detonate();
                    }
                    KeyCode::Char('r') => {
                        session = GameSession::new(config, &mut rand::rng())?;
                        last_spread = Instant::now();
                        info!("game restarted");
                    }
                    _ => {}
                }
            }
        }

        // The fire clock runs independently of input.
        if last_spread.elapsed() >= fire_interval {
            session.advance_fire();
            last_spread = Instant::now();
        }
    }
}

fn draw(frame: &mut Frame, session: &GameSession) {
    let (width, height) = session.grid().dimensions();
    let areas = Layout::vertical([
        Constraint::Length(height as u16 + 2),
        Constraint::Length(5),
    ])
    .split(frame.area());

    let firefighter_at = session.firefighter().position();
    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let tile = session
                .grid()
                .query(row, col)
                .map_or(TileType::Grass, |cell| cell.tile);
            let style = Style::default().bg(tile_color(tile));
            // Cells are two columns wide to look square in the terminal.
            if (row, col) == firefighter_at {
                spans.push(Span::styled(
                    "@ ",
                    style.fg(Color::White).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled("  ", style));
            }
        }
        rows.push(Line::from(spans));
    }

    let board = Paragraph::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Firebreak "),
    );
    frame.render_widget(board, areas[0]);

    let turns = match session.turns_remaining() {
        Some(turns) => turns.to_string(),
        None => "unlimited".to_string(),
    };
    let status = vec![
        Line::from(format!(
            "Charges: {}   Score: {}   Turns: {}",
            session.charges(),
            session.score(),
            turns
        )),
        Line::from(format!(
            "Fire: {}   Grass: {}   Houses: {}   Water: {}",
            session.grid().count_of(TileType::Fire),
            session.grid().count_of(TileType::Grass),
            session.grid().count_of(TileType::House),
            session.grid().count_of(TileType::Water),
        )),
        Line::from("arrows/wasd move - enter/space detonate - r restart - q quit"),
    ];
    let status = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, areas[1]);
}

fn tile_color(tile: TileType) -> Color {
    match tile {
        TileType::Fire => Color::Red,
        TileType::Grass => Color::Green,
        TileType::House => Color::Yellow,
        TileType::Water => Color::Blue,
    }
}
