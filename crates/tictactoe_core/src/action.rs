//! Reasons a move can be refused.

use crate::Position;

/// Why the match refused a move.
///
/// The tournament layer treats every rejection as a silent no-op; this type
/// only exists so callers and logs can tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The index is not on the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The match already has a winner or is drawn.
    #[display("Match is already decided")]
    MatchDecided,

    /// No tournament is running.
    #[display("No tournament in progress")]
    NotPlaying,
}

impl std::error::Error for MoveRejected {}
