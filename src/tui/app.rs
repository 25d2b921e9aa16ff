//! Application state and the event loop driving the screens.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tictactoe_core::{GamePhase, Intent, SeriesMode, Tournament};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::AppConfig;
use crate::tui::screen::{Screen, ScreenAction};
use crate::tui::screens::{PlayingScreen, SetupScreen};

/// Screen currently shown.
#[derive(Debug)]
enum ActiveScreen {
    Setup(SetupScreen),
    Playing(PlayingScreen),
}

/// Owns the tournament for one session and routes keys through the screens.
#[derive(Debug, Getters)]
pub struct App {
    /// The session's tournament.
    tournament: Tournament,
    #[getter(skip)]
    screen: ActiveScreen,
    /// Defaults used whenever the setup screen is rebuilt.
    config: AppConfig,
    /// Cleared when the user quits.
    running: bool,
}

impl App {
    /// Creates the app on the setup screen.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        info!("Creating App");
        let screen = ActiveScreen::Setup(Self::setup_screen(&config));
        Self {
            tournament: Tournament::new(),
            screen,
            config,
            running: true,
        }
    }

    fn setup_screen(config: &AppConfig) -> SetupScreen {
        SetupScreen::new(
            config.player_x().clone(),
            config.player_o().clone(),
            SeriesMode::from(*config.default_mode()),
        )
    }

    /// Whether the setup screen is showing.
    pub fn on_setup_screen(&self) -> bool {
        matches!(self.screen, ActiveScreen::Setup(_))
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // crossterm reports both press and release on some platforms.
        if key.kind == KeyEventKind::Release {
            return;
        }

        let action = match &mut self.screen {
            ActiveScreen::Setup(s) => s.handle_key(key, &self.tournament),
            ActiveScreen::Playing(s) => s.handle_key(key, &self.tournament),
        };

        match action {
            ScreenAction::Stay => {}
            ScreenAction::Dispatch(intent) => self.dispatch(intent),
            ScreenAction::Quit => {
                info!("Quit requested");
                self.running = false;
            }
        }
    }

    /// Applies an intent and switches screens if the phase changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) {
        let before = *self.tournament.phase();
        self.tournament = std::mem::take(&mut self.tournament).reduce(intent);
        let after = *self.tournament.phase();

        if before != after {
            debug!(?before, ?after, "Phase changed");
            self.screen = match after {
                GamePhase::Setup => ActiveScreen::Setup(Self::setup_screen(&self.config)),
                GamePhase::Playing => ActiveScreen::Playing(PlayingScreen::new()),
            };
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        while self.running {
            terminal.draw(|f| match &self.screen {
                ActiveScreen::Setup(s) => s.render(f, &self.tournament),
                ActiveScreen::Playing(s) => s.render(f, &self.tournament),
            })?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }

            sleep(Duration::from_millis(10)).await;
        }

        info!("Event loop finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tictactoe_core::Mark;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn configured() -> AppConfig {
        AppConfig::default().with_overrides(
            Some("Ada".into()),
            Some("Grace".into()),
            Some(crate::ModeChoice::BestOf3),
        )
    }

    #[test]
    fn test_full_series_through_keys() {
        let mut app = App::new(configured());
        assert!(app.on_setup_screen());
        press(&mut app, KeyCode::Enter);
        assert!(!app.on_setup_screen());
        assert_eq!(app.tournament().mode(), &SeriesMode::BestOf(3));

        for _ in 0..3 {
            for digit in ['1', '4', '2', '5', '3'] {
                press(&mut app, KeyCode::Char(digit));
            }
            press(&mut app, KeyCode::Enter);
        }

        // The third Enter hit "Back to Menu".
        assert!(app.on_setup_screen());
        assert_eq!(app.tournament(), &Tournament::new());
    }

    #[test]
    fn test_series_complete_before_back_to_menu() {
        let mut app = App::new(configured());
        press(&mut app, KeyCode::Enter);
        for round in 0..3 {
            for digit in ['1', '4', '2', '5', '3'] {
                press(&mut app, KeyCode::Char(digit));
            }
            if round < 2 {
                press(&mut app, KeyCode::Enter);
            }
        }
        let t = app.tournament();
        assert!(t.is_series_complete());
        assert_eq!(t.player(Mark::X).wins(), &3);
        assert_eq!(t.series_winner().map(|p| p.name().as_str()), Some("Ada"));
    }

    #[test]
    fn test_exit_returns_to_prefilled_setup() {
        let mut app = App::new(configured());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.on_setup_screen());
        assert_eq!(app.tournament().phase(), &GamePhase::Setup);
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Esc);
        assert!(!app.running());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(configured());
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(app.on_setup_screen());
    }
}
