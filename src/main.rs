//! Timeline Tic-Tac-Toe - Unified CLI
//!
//! Interactive terminal play or headless replay of a move sequence.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use timeline_tictactoe::{GameEvent, GameState, GameView, Position, Session, Settings};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    let settings = if cli.descending {
        settings.descending()
    } else {
        settings
    };

    match cli.command {
        Command::Play => tui::run_tui(&settings),
        Command::Replay { moves, jump, json } => run_replay(&settings, &moves, jump, json),
    }
}

/// Apply the given clicks headlessly and print the resulting view.
#[instrument(skip(settings))]
fn run_replay(
    settings: &Settings,
    moves: &[String],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let positions = parse_moves(moves)?;
    info!(moves = positions.len(), "Replaying moves");

    let session = replay(*settings.ascending(), &positions, jump)?;

    let view = GameView::from(session.state());
    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize game view")?;
        println!("{}", out);
    } else {
        print!("{}", view.to_text());
    }
    Ok(())
}

/// Clicks each position in turn, then jumps to `jump` if given.
fn replay(ascending: bool, positions: &[Position], jump: Option<usize>) -> Result<Session> {
    let mut session = Session::new(GameState::with_order(ascending));
    for &pos in positions {
        if !session.dispatch(GameEvent::CellClicked(pos)) {
            debug!(position = %pos, "Click had no effect");
        }
    }
    if let Some(step) = jump {
        let len = session.state().history().len();
        if step >= len {
            bail!("Cannot jump to step {}: history has {} entries", step, len);
        }
        session.dispatch(GameEvent::HistoryClicked(step));
    }
    Ok(session)
}

/// Parses cell arguments given as an index (0-8) or a label such as "center".
fn parse_moves(moves: &[String]) -> Result<Vec<Position>> {
    moves
        .iter()
        .map(|m| {
            Position::from_label_or_number(m).with_context(|| {
                format!("Invalid cell '{}': expected 0-8 or a label like \"top-left\"", m)
            })
        })
        .collect()
}
