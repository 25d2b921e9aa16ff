//! Command-line interface for tictactoe_tournament.

use clap::{Parser, Subcommand};

use tictactoe_tournament::ModeChoice;

/// Tic-tac-toe tournaments for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tournament")]
#[command(about = "Two-player tic-tac-toe with best-of-N tournaments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(long, global = true, default_value = "tournament.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Name pre-filled for player X
        #[arg(long)]
        player_x: Option<String>,

        /// Name pre-filled for player O
        #[arg(long)]
        player_o: Option<String>,

        /// Mode selected on the setup screen
        #[arg(long, value_enum)]
        mode: Option<ModeChoice>,
    },

    /// Apply a scripted session without a terminal and print the final state as JSON
    Replay {
        /// Player X name
        #[arg(long)]
        player_x: String,

        /// Player O name
        #[arg(long)]
        player_o: String,

        /// Series length
        #[arg(long, value_enum, default_value = "single")]
        mode: ModeChoice,

        /// Comma-separated steps: a square (0-8 or a label such as `center`),
        /// or one of `next`, `reset`, `exit`
        #[arg(long, alias = "moves", value_delimiter = ',')]
        script: Vec<String>,

        /// Insert a `next` step after every N moves
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        next_between: Option<u32>,
    },
}
