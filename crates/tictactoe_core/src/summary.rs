//! Text the presentation layer shows about the current state.

use serde::{Deserialize, Serialize};

use crate::{Intent, Outcome, SeriesStanding, Tournament};

/// What the end-of-match dialog offers next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowUp {
    /// More matches remain in the series.
    NextMatch,
    /// Single-match mode: clear the board and play again.
    PlayAgain,
    /// The series is over: leave to setup.
    BackToMenu,
}

impl FollowUp {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            FollowUp::NextMatch => "Next Match",
            FollowUp::PlayAgain => "Play Again",
            FollowUp::BackToMenu => "Back to Menu",
        }
    }

    /// Intent dispatched when the follow-up is chosen.
    pub fn intent(self) -> Intent {
        match self {
            FollowUp::NextMatch | FollowUp::PlayAgain => Intent::NextOrReplay,
            FollowUp::BackToMenu => Intent::Exit,
        }
    }
}

/// Contents of the end-of-match dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndOfMatch {
    /// Headline of the dialog.
    pub title: String,
    /// Body lines.
    pub detail: Vec<String>,
    /// The single action the dialog offers.
    pub follow_up: FollowUp,
}

impl Tournament {
    /// One-line status above the board.
    pub fn headline(&self) -> String {
        if let Some(winner) = self.match_winner() {
            return format!("{} Wins!", winner.name());
        }
        match self.outcome() {
            Outcome::InProgress => format!("{}'s Turn", self.current_player().name()),
            _ => "It's a Draw!".to_string(),
        }
    }

    /// The end-of-match dialog, present only once the current match is decided.
    pub fn end_of_match(&self) -> Option<EndOfMatch> {
        if !self.outcome().is_decided() {
            return None;
        }

        if let Some(standing) = self.series_standing() {
            let title = match standing {
                SeriesStanding::Champion(player) => {
                    format!("{} Wins the Tournament!", player.name())
                }
                SeriesStanding::Tied => "The Tournament Ends in a Tie!".to_string(),
            };
            let detail = std::iter::once("Final Score:".to_string())
                .chain(
                    self.players()
                        .iter()
                        .map(|p| format!("{}: {} wins", p.name(), p.wins())),
                )
                .collect();
            return Some(EndOfMatch {
                title,
                detail,
                follow_up: FollowUp::BackToMenu,
            });
        }

        let detail = match self.mode().target() {
            Some(target) => format!("Match {} of {} complete!", self.match_index(), target),
            None => "Great game!".to_string(),
        };
        let follow_up = match self.mode().target() {
            Some(target) if *self.match_index() < target => FollowUp::NextMatch,
            _ => FollowUp::PlayAgain,
        };
        Some(EndOfMatch {
            title: self.headline(),
            detail: vec![detail],
            follow_up,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeriesMode;

    fn play(t: Tournament, moves: &[usize]) -> Tournament {
        moves.iter().fold(t, |t, &index| t.apply_move(index))
    }

    #[test]
    fn test_headline_follows_turn_and_outcome() {
        let t = Tournament::new().start_tournament("Ada", "Grace", SeriesMode::Single);
        assert_eq!(t.headline(), "Ada's Turn");
        let t = t.apply_move(0);
        assert_eq!(t.headline(), "Grace's Turn");
        let t = play(t, &[3, 1, 4, 2]);
        assert_eq!(t.headline(), "Ada Wins!");
    }

    #[test]
    fn test_no_dialog_while_in_progress() {
        let t = Tournament::new().start_tournament("Ada", "Grace", SeriesMode::Single);
        assert_eq!(t.end_of_match(), None);
    }

    #[test]
    fn test_single_match_dialog_offers_replay() {
        let t = Tournament::new().start_tournament("Ada", "Grace", SeriesMode::Single);
        let t = play(t, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let dialog = t.end_of_match().expect("decided");
        assert_eq!(dialog.title, "It's a Draw!");
        assert_eq!(dialog.detail, vec!["Great game!".to_string()]);
        assert_eq!(dialog.follow_up, FollowUp::PlayAgain);
    }

    #[test]
    fn test_series_dialogs() {
        let t = Tournament::new().start_tournament("Ada", "Grace", SeriesMode::BestOf(3));
        let t = play(t, &[0, 3, 1, 4, 2]);
        let dialog = t.end_of_match().expect("decided");
        assert_eq!(dialog.detail, vec!["Match 1 of 3 complete!".to_string()]);
        assert_eq!(dialog.follow_up, FollowUp::NextMatch);

        let t = play(t.advance_match(), &[0, 3, 1, 4, 2]).advance_match();
        let t = play(t, &[0, 3, 1, 4, 2]);
        let dialog = t.end_of_match().expect("decided");
        assert_eq!(dialog.title, "Ada Wins the Tournament!");
        assert_eq!(
            dialog.detail,
            vec![
                "Final Score:".to_string(),
                "Ada: 3 wins".to_string(),
                "Grace: 0 wins".to_string(),
            ]
        );
        assert_eq!(dialog.follow_up, FollowUp::BackToMenu);
        assert_eq!(dialog.follow_up.intent(), Intent::Exit);
    }
}
