//! Tic Tac Toe Tournament - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_tournament::{
    AppConfig, SeriesMode, Snapshot, insert_next_every, parse_script, run_script, run_tui,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play {
        player_x: None,
        player_o: None,
        mode: None,
    }) {
        Command::Play {
            player_x,
            player_o,
            mode,
        } => run_tui(config.with_overrides(player_x, player_o, mode)).await,
        Command::Replay {
            player_x,
            player_o,
            mode,
            script,
            next_between,
        } => run_replay(
            &config,
            &player_x,
            &player_o,
            mode.into(),
            &script,
            next_between,
        ),
    }
}

/// Run a scripted session and print the final snapshot.
#[instrument(skip(config, script))]
fn run_replay(
    config: &AppConfig,
    player_x: &str,
    player_o: &str,
    mode: SeriesMode,
    script: &[String],
    next_between: Option<u32>,
) -> Result<()> {
    initialize_replay_tracing(config);

    let mut intents = parse_script(script)?;
    if let Some(every) = next_between {
        intents = insert_next_every(intents, every);
    }
    info!(steps = intents.len(), "Replaying script");

    let tournament = run_script(player_x, player_o, mode, intents);
    let snapshot = Snapshot::from(&tournament);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

/// Replay logs go to stderr so stdout stays valid JSON.
fn initialize_replay_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
