//! Strictly Coach - terminal front end
//!
//! A thin presentation layer over the coaching core: it reads cell
//! choices, hands them to the move controller and prints what comes back.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use strictly_coach::{CoachConfig, GameState, MoveController, Position, is_full};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CoachConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(policy = ?config.advisory_policy(), "Starting Strictly Coach");

    let controller = config.controller();
    match cli.command {
        Command::Play => run_play(controller),
        Command::Replay { moves, json } => run_replay(controller, &moves, json),
    }
}

/// Interactive game loop on stdin/stdout.
#[instrument(skip(controller))]
fn run_play(controller: MoveController) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = String::new();
    let mut state = controller.reset_game();

    loop {
        render(&mut stdout, &state)?;
        if state.winner().is_some() || is_full(state.board()) {
            writeln!(stdout, "Game over. Type 'reset' to play again or 'quit'.")?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(());
        }

        match input.trim() {
            "quit" | "q" | "exit" => return Ok(()),
            "reset" | "r" => state = controller.reset_game(),
            other => match parse_move(other) {
                Some(index) => state = controller.attempt_move(state, index),
                None => writeln!(stdout, "Enter a cell 0-8 or a label like 'top-left'.")?,
            },
        }
    }
}

/// Applies `moves` in order and prints the final state.
#[instrument(skip(controller))]
fn run_replay(controller: MoveController, moves: &[String], json: bool) -> Result<()> {
    let mut state = controller.reset_game();
    for mov in moves {
        let Some(index) = parse_move(mov) else {
            bail!("Unrecognized move {:?}", mov);
        };
        state = controller.attempt_move(state, index);
    }

    let mut stdout = io::stdout();
    if json {
        let text = serde_json::to_string_pretty(&state).context("Failed to serialize state")?;
        writeln!(stdout, "{}", text)?;
    } else {
        render(&mut stdout, &state)?;
    }
    Ok(())
}

/// Reads a move as a raw index or a position label.
///
/// Raw numbers are passed through unchecked so the controller's bound check
/// decides what happens to them.
fn parse_move(s: &str) -> Option<usize> {
    let s = s.trim();
    s.parse::<usize>()
        .ok()
        .or_else(|| Position::from_label_or_number(s).map(Position::to_index))
}

fn render(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", state.status_line())?;
    if let Some(message) = state.advisory_line() {
        writeln!(out, "{}", message)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", state.board().display())?;
    writeln!(out)
}
