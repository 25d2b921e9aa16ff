//! Tic-tac-toe tournaments in the terminal.
//!
//! The game and tournament rules live in [`tictactoe_core`]; this crate adds
//! the terminal presentation, configuration, and a headless replay runner.
//!
//! # Architecture
//!
//! - **Core**: [`Tournament`] aggregate driven by [`Intent`]s
//! - **TUI**: setup and playing screens that dispatch intents
//! - **Replay**: scripted sessions exported as JSON [`Snapshot`]s
//! - **Config**: TOML defaults for names, mode and logging
//!
//! # Example
//!
//! ```
//! use tictactoe_tournament::{SeriesMode, Snapshot, parse_script, run_script};
//!
//! let steps: Vec<String> = ["0", "4", "1", "3", "2"].map(String::from).to_vec();
//! let script = parse_script(&steps).expect("valid script");
//! let t = run_script("Ada", "Grace", SeriesMode::Single, script);
//! assert_eq!(Snapshot::from(&t).headline, "Ada Wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, ModeChoice};

// Crate-level exports - Replay
pub use replay::{ScriptError, Snapshot, insert_next_every, parse_script, parse_step, run_script};

// Crate-level exports - Terminal UI
pub use tui::{App, Screen, ScreenAction, run_tui};

// Crate-level exports - Game types
pub use tictactoe_core::{
    Board, EndOfMatch, FollowUp, GamePhase, Intent, LINES, Line, Mark, MatchState, MoveRejected,
    Outcome, Player, Position, SeriesMode, SeriesStanding, Square, Tournament, evaluate, rules,
};
