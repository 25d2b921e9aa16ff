//! Tournament participants.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::Mark;

/// A named player holding one mark for the whole tournament.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name, trimmed. Empty only while no tournament is running.
    name: String,
    /// The mark this player places.
    mark: Mark,
    /// Matches won in the current series.
    wins: u32,
}

impl Player {
    /// Creates a player with zero wins.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            wins: 0,
        }
    }

    /// A nameless placeholder used before a tournament starts.
    pub fn unnamed(mark: Mark) -> Self {
        Self::new(String::new(), mark)
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn clear_wins(&mut self) {
        self.wins = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
