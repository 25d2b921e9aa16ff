//! Best-of-N tournament controller.
//!
//! [`Tournament`] is the single aggregate the presentation layer talks to.
//! Every operation consumes the current state and returns the next one, so
//! board, turn, outcome and scores always change together. Invalid requests
//! return the state unchanged and log the reason at `debug` level.
//!
//! Derived values ([`Tournament::is_series_complete`],
//! [`Tournament::series_winner`], ...) are computed from the aggregate on
//! every call and never stored.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{Mark, MatchState, MoveRejected, Outcome, Player};

/// Top-level phase of a session.
///
/// The end-of-match dialog is not a phase: it is shown whenever the current
/// match is decided while [`GamePhase::Playing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entering player names and choosing a mode.
    #[default]
    Setup,
    /// Matches are being played.
    Playing,
}

/// How many matches the series runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum SeriesMode {
    /// One match, replayable, no series winner.
    #[default]
    #[display("Single Match")]
    Single,
    /// Exactly `n` matches, then the player with more wins takes the series.
    #[display("Best of {_0} Tournament")]
    BestOf(u32),
}

impl SeriesMode {
    /// Modes offered on the setup screen.
    pub const PRESETS: [SeriesMode; 3] = [
        SeriesMode::Single,
        SeriesMode::BestOf(3),
        SeriesMode::BestOf(5),
    ];

    /// Number of matches in the series, `None` for a single match.
    pub fn target(self) -> Option<u32> {
        match self {
            SeriesMode::Single => None,
            SeriesMode::BestOf(n) => Some(n),
        }
    }

    /// Whether this is a multi-match series.
    pub fn is_series(self) -> bool {
        self.target().is_some()
    }
}

/// Final standing of a completed series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesStanding {
    /// One player has strictly more wins.
    Champion(Player),
    /// Both players finished with the same number of wins.
    Tied,
}

/// The tournament aggregate: players, series progress and the current match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tournament {
    /// Setup or playing.
    phase: GamePhase,
    /// Player X then player O.
    players: [Player; 2],
    /// Series length.
    mode: SeriesMode,
    /// 1-based index of the match being played.
    match_index: u32,
    /// The match being played.
    current: MatchState,
}

impl Default for Tournament {
    fn default() -> Self {
        Self {
            phase: GamePhase::Setup,
            players: [Player::unnamed(Mark::X), Player::unnamed(Mark::O)],
            mode: SeriesMode::Single,
            match_index: 1,
            current: MatchState::new(),
        }
    }
}

impl Tournament {
    /// Creates a session in the setup phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`Tournament::start_tournament`] would accept these names.
    pub fn can_start(name1: &str, name2: &str) -> bool {
        !name1.trim().is_empty() && !name2.trim().is_empty()
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Starts a tournament: `name1` plays X, `name2` plays O.
    ///
    /// Ignored unless both names are non-blank after trimming and no
    /// tournament is already running. `BestOf(0)` is refused as well.
    #[instrument(skip(self))]
    pub fn start_tournament(mut self, name1: &str, name2: &str, mode: SeriesMode) -> Self {
        if self.phase != GamePhase::Setup {
            debug!("Start ignored: tournament already running");
            return self;
        }
        if !Self::can_start(name1, name2) {
            debug!("Start ignored: blank player name");
            return self;
        }
        if mode == SeriesMode::BestOf(0) {
            debug!("Start ignored: empty series");
            return self;
        }

        self.players = [
            Player::new(name1.trim(), Mark::X),
            Player::new(name2.trim(), Mark::O),
        ];
        self.mode = mode;
        self.match_index = 1;
        self.current.reset();
        self.phase = GamePhase::Playing;

        info!(
            player_x = %self.players[0],
            player_o = %self.players[1],
            mode = %mode,
            "Tournament started"
        );
        self
    }

    /// Places the current mark at `index` (0-8).
    ///
    /// Ignored when not playing, when the square is taken or off the board,
    /// or when the match is already decided. A move that decides the match
    /// credits the winner exactly once.
    #[instrument(skip(self), fields(match_index = self.match_index))]
    pub fn apply_move(mut self, index: usize) -> Self {
        if let Err(rejection) = self.try_move(index) {
            debug!(%rejection, "Move ignored");
        }
        self
    }

    fn try_move(&mut self, index: usize) -> Result<(), MoveRejected> {
        if self.phase != GamePhase::Playing {
            return Err(MoveRejected::NotPlaying);
        }
        let outcome = self.current.apply_move(index)?;
        if outcome.is_decided() {
            self.on_match_decided();
        }
        Ok(())
    }

    /// Credits the winner of the match that was just decided.
    ///
    /// Only called by the move that moved the outcome off `InProgress`, and
    /// a decided match accepts no further moves, so each match counts once.
    fn on_match_decided(&mut self) {
        let outcome = *self.current.outcome();
        if let Some(mark) = outcome.winner() {
            self.player_mut(mark).record_win();
        }
        info!(
            match_index = self.match_index,
            outcome = %outcome,
            wins_x = self.players[0].wins(),
            wins_o = self.players[1].wins(),
            "Match decided"
        );
        if self.is_series_complete() {
            info!(standing = ?self.series_standing(), "Series complete");
        }
    }

    /// Moves on after a decided match.
    ///
    /// In a series with matches remaining, the match index advances and the
    /// board is cleared; scores are kept. In single-match mode the board is
    /// cleared for a replay. Ignored while the match is undecided or once the
    /// series is complete.
    #[instrument(skip(self), fields(match_index = self.match_index))]
    pub fn advance_match(mut self) -> Self {
        if self.phase != GamePhase::Playing || !self.current.is_decided() {
            debug!("Advance ignored: match still in progress");
            return self;
        }
        if self.is_series_complete() {
            debug!("Advance ignored: series complete");
            return self;
        }

        if let Some(target) = self.mode.target()
            && self.match_index < target
        {
            self.match_index += 1;
        }
        self.current.reset();
        debug!(match_index = self.match_index, "Next match ready");
        self
    }

    /// Zeroes both scores and restarts the series from match 1.
    #[instrument(skip(self))]
    pub fn reset_score(mut self) -> Self {
        for player in &mut self.players {
            player.clear_wins();
        }
        self.match_index = 1;
        self.current.reset();
        info!("Score reset");
        self
    }

    /// Abandons the tournament and returns to setup.
    #[instrument(skip(self))]
    pub fn exit_tournament(self) -> Self {
        info!("Tournament exited");
        Self::new()
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived values
    // ─────────────────────────────────────────────────────────────

    /// Player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    fn player_mut(&mut self, mark: Mark) -> &mut Player {
        match mark {
            Mark::X => &mut self.players[0],
            Mark::O => &mut self.players[1],
        }
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current.turn())
    }

    /// Outcome of the current match.
    pub fn outcome(&self) -> &Outcome {
        self.current.outcome()
    }

    /// Player who won the current match, if any.
    pub fn match_winner(&self) -> Option<&Player> {
        self.outcome().winner().map(|mark| self.player(mark))
    }

    /// True once the last match of a best-of-N series is decided.
    ///
    /// A drawn final match still completes the series. Always false in
    /// single-match mode.
    pub fn is_series_complete(&self) -> bool {
        match self.mode.target() {
            Some(target) => self.match_index >= target && self.current.is_decided(),
            None => false,
        }
    }

    /// Winner of a completed series.
    ///
    /// The player with strictly more wins; on equal wins this returns
    /// player X. Use [`Tournament::series_standing`] to tell a tie apart.
    pub fn series_winner(&self) -> Option<&Player> {
        if !self.is_series_complete() {
            return None;
        }
        let [x, o] = &self.players;
        if o.wins() > x.wins() { Some(o) } else { Some(x) }
    }

    /// Standing of a completed series, with ties made explicit.
    pub fn series_standing(&self) -> Option<SeriesStanding> {
        if !self.is_series_complete() {
            return None;
        }
        Some(match self.leader_by_wins() {
            Some(player) => SeriesStanding::Champion(player.clone()),
            None => SeriesStanding::Tied,
        })
    }

    /// Player currently ahead in a series, `None` when level or single-match.
    pub fn leader(&self) -> Option<&Player> {
        if !self.mode.is_series() {
            return None;
        }
        self.leader_by_wins()
    }

    fn leader_by_wins(&self) -> Option<&Player> {
        let [x, o] = &self.players;
        match x.wins().cmp(o.wins()) {
            std::cmp::Ordering::Greater => Some(x),
            std::cmp::Ordering::Less => Some(o),
            std::cmp::Ordering::Equal => None,
        }
    }
}
