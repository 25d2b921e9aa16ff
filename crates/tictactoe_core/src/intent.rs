//! User intents and the reducer that applies them.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{SeriesMode, Tournament};

/// Everything the presentation layer can ask of a [`Tournament`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Start a tournament; `name1` plays X.
    Start {
        /// First player's name.
        name1: String,
        /// Second player's name.
        name2: String,
        /// Series length.
        mode: SeriesMode,
    },
    /// Place the current mark at a board index (0-8).
    Move(usize),
    /// After a decided match: next match in a series, or replay a single match.
    NextOrReplay,
    /// Zero both scores and restart from match 1.
    ResetScore,
    /// Abandon the tournament and return to setup.
    Exit,
}

impl Tournament {
    /// Applies one intent and returns the next state.
    ///
    /// Invalid intents are no-ops: the returned state equals the input.
    #[instrument(skip(self))]
    pub fn reduce(self, intent: Intent) -> Self {
        match intent {
            Intent::Start { name1, name2, mode } => self.start_tournament(&name1, &name2, mode),
            Intent::Move(index) => self.apply_move(index),
            Intent::NextOrReplay => self.advance_match(),
            Intent::ResetScore => self.reset_score(),
            Intent::Exit => self.exit_tournament(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GamePhase;

    fn start() -> Intent {
        Intent::Start {
            name1: "Ada".into(),
            name2: "Grace".into(),
            mode: SeriesMode::BestOf(3),
        }
    }

    #[test]
    fn test_play_intents_ignored_in_setup() {
        for intent in [Intent::Move(4), Intent::NextOrReplay, Intent::ResetScore] {
            assert_eq!(Tournament::new().reduce(intent), Tournament::new());
        }
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let t = Tournament::new().reduce(start());
        assert_eq!(t.phase(), &GamePhase::Playing);
        let again = t.clone().reduce(Intent::Start {
            name1: "Linus".into(),
            name2: "Ken".into(),
            mode: SeriesMode::Single,
        });
        assert_eq!(again, t);
    }

    #[test]
    fn test_next_ignored_mid_match() {
        let t = Tournament::new().reduce(start()).reduce(Intent::Move(0));
        assert_eq!(t.clone().reduce(Intent::NextOrReplay), t);
    }
}
