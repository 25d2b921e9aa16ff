//! Setup screen: player names and series length.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_core::{Intent, SeriesMode, Tournament};
use tracing::{debug, instrument};

use crate::tui::screen::{Screen, ScreenAction};

const MAX_NAME_LEN: usize = 24;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Player 1 (X) name input.
    PlayerX,
    /// Player 2 (O) name input.
    PlayerO,
    /// Mode list.
    Mode,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::PlayerX => Self::PlayerO,
            Self::PlayerO => Self::Mode,
            Self::Mode => Self::PlayerX,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::PlayerX => Self::Mode,
            Self::PlayerO => Self::PlayerX,
            Self::Mode => Self::PlayerO,
        }
    }
}

/// State for the setup screen.
#[derive(Debug, Getters)]
pub struct SetupScreen {
    player_x: String,
    player_o: String,
    #[getter(skip)]
    focus: Field,
    #[getter(skip)]
    mode_state: ListState,
}

impl SetupScreen {
    /// Creates the setup screen with pre-filled names and mode.
    #[instrument]
    pub fn new(player_x: String, player_o: String, mode: SeriesMode) -> Self {
        let selected = SeriesMode::PRESETS
            .iter()
            .position(|m| *m == mode)
            .unwrap_or(0);
        let mut mode_state = ListState::default();
        mode_state.select(Some(selected));
        Self {
            player_x,
            player_o,
            focus: Field::PlayerX,
            mode_state,
        }
    }

    /// Mode currently highlighted in the list.
    pub fn selected_mode(&self) -> SeriesMode {
        let idx = self.mode_state.selected().unwrap_or(0);
        SeriesMode::PRESETS[idx.min(SeriesMode::PRESETS.len() - 1)]
    }

    /// Whether Enter would start a tournament.
    pub fn ready(&self) -> bool {
        Tournament::can_start(&self.player_x, &self.player_o)
    }

    fn focused_name(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::PlayerX => Some(&mut self.player_x),
            Field::PlayerO => Some(&mut self.player_o),
            Field::Mode => None,
        }
    }

    fn cycle_mode(&mut self, forward: bool) {
        let count = SeriesMode::PRESETS.len();
        let i = self.mode_state.selected().unwrap_or(0);
        let i = if forward { (i + 1) % count } else { (i + count - 1) % count };
        self.mode_state.select(Some(i));
    }

    fn name_block(&self, field: Field, title: &'static str) -> Block<'static> {
        let style = if self.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(style)
    }
}

impl Screen for SetupScreen {
    #[instrument(skip(self, frame, _tournament))]
    fn render(&self, frame: &mut Frame, _tournament: &Tournament) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Tic Tac Toe Tournament")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let player_x = Paragraph::new(self.player_x.as_str())
            .block(self.name_block(Field::PlayerX, "Player 1 Name (X)"));
        frame.render_widget(player_x, chunks[1]);

        let player_o = Paragraph::new(self.player_o.as_str())
            .block(self.name_block(Field::PlayerO, "Player 2 Name (O)"));
        frame.render_widget(player_o, chunks[2]);

        let items: Vec<ListItem> = SeriesMode::PRESETS
            .iter()
            .map(|m| ListItem::new(m.to_string()))
            .collect();
        let highlight = if self.focus == Field::Mode {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Select Game Mode"))
            .highlight_style(highlight)
            .highlight_symbol("▶ ");
        let mut state = self.mode_state.clone();
        frame.render_stateful_widget(list, chunks[3], &mut state);

        let (help, color) = if self.ready() {
            ("Tab: next field  ↑↓: mode  Enter: start  Esc: quit", Color::DarkGray)
        } else {
            ("Enter both player names to start  (Esc: quit)", Color::Red)
        };
        let footer = Paragraph::new(help)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[4]);
    }

    #[instrument(skip(self, key, _tournament))]
    fn handle_key(&mut self, key: KeyEvent, _tournament: &Tournament) -> ScreenAction {
        match key.code {
            KeyCode::Esc => ScreenAction::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                ScreenAction::Stay
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                ScreenAction::Stay
            }
            KeyCode::Up | KeyCode::Down if self.focus == Field::Mode => {
                self.cycle_mode(key.code == KeyCode::Down);
                ScreenAction::Stay
            }
            KeyCode::Up => {
                self.focus = self.focus.previous();
                ScreenAction::Stay
            }
            KeyCode::Down => {
                self.focus = self.focus.next();
                ScreenAction::Stay
            }
            KeyCode::Backspace => {
                if let Some(name) = self.focused_name() {
                    name.pop();
                }
                ScreenAction::Stay
            }
            KeyCode::Char(c) => {
                if let Some(name) = self.focused_name()
                    && name.chars().count() < MAX_NAME_LEN
                {
                    name.push(c);
                }
                ScreenAction::Stay
            }
            KeyCode::Enter => {
                if !self.ready() {
                    debug!("Start disabled: blank player name");
                    return ScreenAction::Stay;
                }
                ScreenAction::Dispatch(Intent::Start {
                    name1: self.player_x.clone(),
                    name2: self.player_o.clone(),
                    mode: self.selected_mode(),
                })
            }
            _ => ScreenAction::Stay,
        }
    }
}
