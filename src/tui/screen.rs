//! Screen trait and the actions screens hand back to the app loop.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tictactoe_core::{Intent, Tournament};

/// The result of handling a key on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing for the tournament to do.
    Stay,
    /// Forward an intent to the tournament.
    Dispatch(Intent),
    /// Leave the application.
    Quit,
}

/// A screen renders from the tournament and turns keys into actions.
///
/// Screens never mutate the tournament directly; the app loop applies any
/// [`ScreenAction::Dispatch`]ed intent and re-renders.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, tournament: &Tournament);

    /// Handles a key event and returns the resulting [`ScreenAction`].
    fn handle_key(&mut self, key: KeyEvent, tournament: &Tournament) -> ScreenAction;
}
