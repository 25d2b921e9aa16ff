//! Playing screen: scoreboard, board, and the end-of-match dialog.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Intent, Mark, Position, Tournament};
use tracing::{debug, instrument};

use crate::tui::input::{digit_to_index, move_cursor};
use crate::tui::screen::{Screen, ScreenAction};
use crate::tui::ui::{draw_board, draw_dialog, mark_color};

/// State for the playing screen. Only the cursor lives here; everything
/// else is read from the tournament on each render.
#[derive(Debug, Getters)]
pub struct PlayingScreen {
    cursor: Position,
}

impl PlayingScreen {
    /// Creates the playing screen with the cursor in the center.
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
        }
    }

    fn draw_player_card(&self, frame: &mut Frame, area: Rect, t: &Tournament, mark: Mark) {
        let player = t.player(mark);
        let crown = if t.leader() == Some(player) { "♛ " } else { "" };
        let active = !t.outcome().is_decided() && t.current().turn() == mark;

        let lines = vec![
            Line::from(format!("{}{}", crown, player.name())),
            Line::from(mark.to_string()).style(
                Style::default()
                    .fg(mark_color(mark))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(format!("{} Wins", player.wins())),
        ];
        let border = if active {
            Style::default()
                .fg(mark_color(mark))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(card, area);
    }

    fn draw_series_card(&self, frame: &mut Frame, area: Rect, t: &Tournament) {
        let lines = match t.mode().target() {
            Some(target) => vec![
                Line::from("Tournament"),
                Line::from(format!("Match {}/{}", t.match_index(), target))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            ],
            None => vec![
                Line::from("Game Mode"),
                Line::from("Single Match").style(Style::default().add_modifier(Modifier::BOLD)),
            ],
        };
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Magenta))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, area);
    }
}

impl Default for PlayingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for PlayingScreen {
    #[instrument(skip(self, frame, tournament))]
    fn render(&self, frame: &mut Frame, tournament: &Tournament) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[0]);
        self.draw_player_card(frame, cards[0], tournament, Mark::X);
        self.draw_series_card(frame, cards[1], tournament);
        self.draw_player_card(frame, cards[2], tournament, Mark::O);

        let headline = Paragraph::new(tournament.headline())
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(headline, chunks[1]);

        let dialog = tournament.end_of_match();
        let cursor = dialog.is_none().then_some(self.cursor);
        draw_board(frame, chunks[2], tournament.current(), cursor);

        let help = Paragraph::new("←↑↓→/1-9: pick  Enter: place  r: reset score  x: exit  q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        if let Some(dialog) = dialog {
            let area = frame.area();
            draw_dialog(frame, area, &dialog);
        }
    }

    #[instrument(skip(self, key, tournament))]
    fn handle_key(&mut self, key: KeyEvent, tournament: &Tournament) -> ScreenAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return ScreenAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                return ScreenAction::Dispatch(Intent::ResetScore);
            }
            KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Esc => {
                return ScreenAction::Dispatch(Intent::Exit);
            }
            _ => {}
        }

        // While the dialog is up the board is inert; Enter takes its action.
        if let Some(dialog) = tournament.end_of_match() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    debug!(follow_up = ?dialog.follow_up, "Dialog action");
                    ScreenAction::Dispatch(dialog.follow_up.intent())
                }
                _ => ScreenAction::Stay,
            };
        }

        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenAction::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor, tournament),
            KeyCode::Char(c) => match digit_to_index(c).and_then(Position::from_index) {
                Some(pos) => {
                    self.cursor = pos;
                    self.place(pos, tournament)
                }
                None => ScreenAction::Stay,
            },
            _ => ScreenAction::Stay,
        }
    }
}

impl PlayingScreen {
    /// Dispatches a move unless the square is visibly taken.
    fn place(&self, pos: Position, tournament: &Tournament) -> ScreenAction {
        if !tournament.current().board().is_empty(pos) {
            debug!(position = %pos, "Square taken");
            return ScreenAction::Stay;
        }
        ScreenAction::Dispatch(Intent::Move(pos.to_index()))
    }
}
