//! Command-line interface for strictly_coach.

use clap::{Parser, Subcommand};

/// Strictly Coach - tic-tac-toe with opening advice for X
#[derive(Parser, Debug)]
#[command(name = "strictly_coach")]
#[command(about = "Tic-tac-toe with an opening coach", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "coach.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of moves and print the final state
    Replay {
        /// Moves as cell indices (0-8) or labels such as "top-left"
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
