//! Headless scripted sessions.
//!
//! A script is a list of steps applied to a freshly started tournament. The
//! resulting state is exported as a [`Snapshot`], the same view the terminal
//! UI renders from.

use derive_more::{Display, Error};
use serde::Serialize;
use tictactoe_core::{
    GamePhase, Intent, Mark, Player, Position, SeriesMode, SeriesStanding, Tournament,
};
use tracing::{debug, info, instrument};

/// A script step that could not be understood.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses one script step into an intent.
#[instrument]
pub fn parse_step(step: &str) -> Result<Intent, ScriptError> {
    match step.trim().to_lowercase().as_str() {
        "next" | "replay" => Ok(Intent::NextOrReplay),
        "reset" => Ok(Intent::ResetScore),
        "exit" => Ok(Intent::Exit),
        other => Position::from_label_or_number(other)
            .map(|pos| Intent::Move(pos.to_index()))
            .ok_or_else(|| ScriptError::new(format!("Unknown step '{}'", step))),
    }
}

/// Parses every step, failing on the first bad one.
pub fn parse_script(steps: &[String]) -> Result<Vec<Intent>, ScriptError> {
    steps
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_step(s))
        .collect()
}

/// Inserts [`Intent::NextOrReplay`] after every `every` moves.
///
/// Non-move steps do not count toward the interval. An interval of zero
/// leaves the script untouched.
pub fn insert_next_every(script: Vec<Intent>, every: u32) -> Vec<Intent> {
    if every == 0 {
        return script;
    }
    let mut moves = 0u32;
    let mut out = Vec::with_capacity(script.len());
    for intent in script {
        let is_move = matches!(intent, Intent::Move(_));
        out.push(intent);
        if is_move {
            moves += 1;
            if moves % every == 0 {
                out.push(Intent::NextOrReplay);
            }
        }
    }
    debug!(every, steps = out.len(), "Inserted next steps");
    out
}

/// Starts a tournament and applies `script` to it.
#[instrument(skip(script), fields(steps = script.len()))]
pub fn run_script(
    player_x: &str,
    player_o: &str,
    mode: SeriesMode,
    script: Vec<Intent>,
) -> Tournament {
    let start = Intent::Start {
        name1: player_x.to_string(),
        name2: player_o.to_string(),
        mode,
    };
    let tournament = std::iter::once(start)
        .chain(script)
        .fold(Tournament::new(), |t, intent| {
            debug!(?intent, "Applying step");
            t.reduce(intent)
        });
    info!(phase = ?tournament.phase(), "Script finished");
    tournament
}

/// Serializable view of a tournament, including derived values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Setup or playing.
    pub phase: GamePhase,
    /// Player X then player O.
    pub players: [Player; 2],
    /// Series length.
    pub mode: SeriesMode,
    /// Number of matches in the series, if any.
    pub target: Option<u32>,
    /// 1-based index of the current match.
    pub match_index: u32,
    /// Squares in row-major order, `null` for empty.
    pub board: Vec<Option<Mark>>,
    /// Board drawn as text.
    pub board_text: String,
    /// Mark to move.
    pub to_move: Mark,
    /// Status line.
    pub headline: String,
    /// Indices of the winning line, if the match was won.
    pub winning_line: Option<[usize; 3]>,
    /// Whether the series is over.
    pub series_complete: bool,
    /// Series winner (first player on a tie).
    pub series_winner: Option<String>,
    /// Series standing with ties made explicit.
    pub series_standing: Option<SeriesStanding>,
}

impl From<&Tournament> for Snapshot {
    fn from(t: &Tournament) -> Self {
        let current = t.current();
        Self {
            phase: *t.phase(),
            players: t.players().clone(),
            mode: *t.mode(),
            target: t.mode().target(),
            match_index: *t.match_index(),
            board: current.board().squares().iter().map(|s| s.mark()).collect(),
            board_text: current.board().display(),
            to_move: current.turn(),
            headline: t.headline(),
            winning_line: current.winning_line().map(|line| line.indices()),
            series_complete: t.is_series_complete(),
            series_winner: t.series_winner().map(|p| p.name().clone()),
            series_standing: t.series_standing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(s: &str) -> Vec<String> {
        s.split(',').map(str::to_string).collect()
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!(parse_step("4").expect("index"), Intent::Move(4));
        assert_eq!(parse_step("Center").expect("label"), Intent::Move(4));
        assert_eq!(parse_step(" next ").expect("next"), Intent::NextOrReplay);
        assert_eq!(parse_step("reset").expect("reset"), Intent::ResetScore);
        assert_eq!(parse_step("exit").expect("exit"), Intent::Exit);
    }

    #[test]
    fn test_unknown_step_is_an_error() {
        let err = parse_step("9").expect_err("off the board");
        assert!(err.message.contains("'9'"));
        assert!(parse_script(&steps("0,jump")).is_err());
    }

    #[test]
    fn test_snapshot_of_scripted_series() {
        let script = parse_script(&steps("0,3,1,4,2,next,0,3,1,4,8,5,next")).expect("script");
        let t = run_script("Ada", "Grace", SeriesMode::BestOf(3), script);
        let snap = Snapshot::from(&t);
        assert_eq!(snap.match_index, 3);
        assert_eq!(snap.players[0].wins(), &1);
        assert_eq!(snap.players[1].wins(), &1);
        assert_eq!(snap.headline, "Ada's Turn");
        assert!(!snap.series_complete);
        assert_eq!(snap.board, vec![None; 9]);
    }

    #[test]
    fn test_insert_next_every_counts_moves_only() {
        let script = parse_script(&steps("0,1,reset,2")).expect("script");
        assert_eq!(
            insert_next_every(script.clone(), 2),
            vec![
                Intent::Move(0),
                Intent::Move(1),
                Intent::NextOrReplay,
                Intent::ResetScore,
                Intent::Move(2),
            ]
        );
        assert_eq!(insert_next_every(script.clone(), 0), script);
    }

    #[test]
    fn test_next_every_move_plays_a_series() {
        // "next" between moves is ignored mid-match and advances once decided.
        let x_wins = parse_script(&steps("0,3,1,4,2,0,3,1,4,2")).expect("script");
        let t = run_script(
            "Ada",
            "Grace",
            SeriesMode::BestOf(3),
            insert_next_every(x_wins, 1),
        );
        assert_eq!(t.match_index(), &3);
        assert_eq!(t.player(Mark::X).wins(), &2);
        assert!(!t.current().is_decided());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let script = parse_script(&steps("0,4,1,3,2")).expect("script");
        let t = run_script("Ada", "Grace", SeriesMode::Single, script);
        let json = serde_json::to_value(Snapshot::from(&t)).expect("json");
        assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["headline"], "Ada Wins!");
        assert_eq!(json["board"][4], "O");
        assert_eq!(json["board"][8], serde_json::Value::Null);
    }
}
