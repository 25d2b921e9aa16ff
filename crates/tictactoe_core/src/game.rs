//! Single-match state machine.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules::evaluate;
use crate::{Board, Line, Mark, MoveRejected, Outcome, Position, Square};

/// One match of tic-tac-toe, from empty board to win or draw.
///
/// The outcome is recomputed by [`evaluate`] after every accepted move and
/// never set any other way. Once it is decided the match refuses moves until
/// [`MatchState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchState {
    /// The board.
    board: Board,
    /// Mark to move next.
    to_move: Mark,
    /// Latest evaluation of the board.
    outcome: Outcome,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
        }
    }
}

impl MatchState {
    /// Creates an empty match with X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark whose turn it is.
    pub fn turn(&self) -> Mark {
        self.to_move
    }

    /// The completed line, if the match was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.line()
    }

    /// Whether the match is won or drawn.
    pub fn is_decided(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        self.board.count(Mark::X) + self.board.count(Mark::O)
    }

    /// Whether a move at `index` would be accepted.
    pub fn check_move(&self, index: usize) -> Result<Position, MoveRejected> {
        let pos = Position::from_index(index).ok_or(MoveRejected::OutOfBounds(index))?;
        if self.is_decided() {
            return Err(MoveRejected::MatchDecided);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveRejected::SquareOccupied(pos));
        }
        Ok(pos)
    }

    /// Places the current mark at `index`, flips the turn and re-evaluates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected`] and leaves the match untouched if the index
    /// is off the board, the square is taken, or the match is decided.
    #[instrument(skip(self), fields(mark = %self.turn()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveRejected> {
        let pos = self.check_move(index)?;
        let mark = self.turn();

        self.board.set(pos, Square::Occupied(mark));
        self.to_move = mark.opponent();
        self.outcome = evaluate(&self.board);

        debug!(position = %pos, outcome = %self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// Clears the board for a fresh match with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_is_empty_with_x_to_move() {
        let game = MatchState::new();
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.outcome(), &Outcome::InProgress);
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = MatchState::new();
        assert_eq!(game.apply_move(9), Err(MoveRejected::OutOfBounds(9)));
        assert_eq!(game, MatchState::new());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = MatchState::new();
        game.apply_move(4).expect("first move");
        let before = game.clone();
        assert_eq!(
            game.apply_move(4),
            Err(MoveRejected::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_decided_match_rejects_moves() {
        let mut game = MatchState::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index).expect("legal move");
        }
        assert_eq!(game.outcome().winner(), Some(Mark::X));
        let before = game.clone();
        assert_eq!(game.apply_move(8), Err(MoveRejected::MatchDecided));
        assert_eq!(game, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = MatchState::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index).expect("legal move");
        }
        game.reset();
        assert_eq!(game, MatchState::new());
    }
}
