//! Tic-tac-toe match and tournament state machine.
//!
//! Pure game logic with no I/O. A presentation layer holds one
//! [`Tournament`], feeds it [`Intent`]s through [`Tournament::reduce`], and
//! re-renders from the returned state.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Intent, Mark, SeriesMode, Tournament};
//!
//! let t = Tournament::new().reduce(Intent::Start {
//!     name1: "Ada".into(),
//!     name2: "Grace".into(),
//!     mode: SeriesMode::BestOf(3),
//! });
//! let t = [0, 4, 1, 3, 2]
//!     .into_iter()
//!     .fold(t, |t, i| t.reduce(Intent::Move(i)));
//! assert_eq!(t.player(Mark::X).wins(), &1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod intent;
mod outcome;
mod player;
mod position;
pub mod rules;
mod summary;
mod tournament;
mod types;

pub use action::MoveRejected;
pub use game::MatchState;
pub use intent::Intent;
pub use outcome::Outcome;
pub use player::Player;
pub use position::Position;
pub use rules::{LINES, Line, evaluate};
pub use summary::{EndOfMatch, FollowUp};
pub use tournament::{GamePhase, SeriesMode, SeriesStanding, Tournament};
pub use types::{Board, Mark, Square};
