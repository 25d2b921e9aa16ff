//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Mark, Position, Square};

/// Three positions that win when uniformly occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Returns the three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Every winning line, rows then columns then diagonals.
///
/// Order decides which line is reported if more than one is complete.
pub const LINES: [Line; 8] = {
    use Position::*;
    [
        // Rows
        Line([TopLeft, TopCenter, TopRight]),
        Line([MiddleLeft, Center, MiddleRight]),
        Line([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        Line([TopLeft, MiddleLeft, BottomLeft]),
        Line([TopCenter, Center, BottomCenter]),
        Line([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        Line([TopLeft, Center, BottomRight]),
        Line([TopRight, Center, BottomLeft]),
    ]
};

/// Returns the first completed line and the mark holding it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let first = board.get(a);
        match first {
            Square::Occupied(mark) if board.get(b) == first && board.get(c) == first => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in cells {
            board.set(*pos, Square::Occupied(*mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        let (mark, line) = winning_line(&board).expect("top row wins");
        assert_eq!(mark, Mark::X);
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        let (mark, line) = winning_line(&board).expect("diagonal wins");
        assert_eq!(mark, Mark::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // Column 0 and row 0 both complete; row 0 comes first.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
        ]);
        let (_, line) = winning_line(&board).expect("win");
        assert_eq!(line, LINES[0]);
    }

    #[test]
    fn test_lines_are_the_eight_expected_triples() {
        let indices: Vec<[usize; 3]> = LINES.iter().map(Line::indices).collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }
}
