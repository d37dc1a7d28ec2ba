//! TUI rendering with ratatui
//!
//! Board of tiles, on-screen keyboard and transient alerts.

use super::app::{
    AnimationKind, App, MessageStyle, is_dancing, is_flipping, revealed_tiles, shake_offset,
};
use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{Action, IndexSource, MAX_GUESSES, Outcome, Phase, RoundState};
use crate::keyboard::{KEY_HEIGHT, KEYBOARD_ROWS, key_caps};
use crate::output::definition_url;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;
const BOARD_WIDTH: u16 = TILE_WIDTH * WORD_LENGTH as u16 + TILE_GAP * (WORD_LENGTH as u16 - 1);
const BOARD_HEIGHT: u16 = TILE_HEIGHT * MAX_GUESSES as u16;

/// Screen regions, shared with mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub messages: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Header
            Constraint::Min(BOARD_HEIGHT),                 // Board
            Constraint::Length(3),                         // Alerts
            Constraint::Length(KEYBOARD_ROWS * KEY_HEIGHT), // Keyboard
            Constraint::Length(1),                         // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        board: chunks[1],
        messages: chunks[2],
        keyboard: chunks[3],
        status: chunks[4],
    }
}

/// What a single board cell shows this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileView {
    pub letter: Option<u8>,
    pub feedback: Option<Feedback>,
    /// Typed but not yet submitted
    pub active: bool,
    /// Edge-on mid-flip, letter hidden
    pub flipping: bool,
    pub dx: i16,
    pub dy: i16,
}

/// Work out every tile of the board for the current frame
#[must_use]
pub fn board_tiles<S: IndexSource>(
    app: &App<S>,
    now: Instant,
) -> [[TileView; WORD_LENGTH]; MAX_GUESSES] {
    let state = app.round.state();
    let mut tiles = [[TileView::default(); WORD_LENGTH]; MAX_GUESSES];

    for (row, evaluated) in state.history().iter().enumerate() {
        for (col, tile) in tiles[row].iter_mut().enumerate() {
            tile.letter = Some(evaluated.word().letter_at(col));
            tile.feedback = Some(evaluated.evaluation().feedback()[col]);
        }
    }

    let next_row = state.history().len();
    if next_row >= MAX_GUESSES {
        apply_dance(app, state, &mut tiles, now);
        return tiles;
    }

    match state.phase() {
        Phase::Evaluating(pending) => {
            let elapsed = app
                .animation
                .filter(|a| a.kind == AnimationKind::Flip)
                .map(|a| a.elapsed(now))
                .unwrap_or_default();
            let revealed = revealed_tiles(elapsed);
            for (col, tile) in tiles[next_row].iter_mut().enumerate() {
                tile.letter = Some(pending.word().letter_at(col));
                if col < revealed {
                    tile.feedback = Some(pending.evaluation().feedback()[col]);
                } else {
                    tile.active = true;
                    tile.flipping = is_flipping(col, elapsed);
                }
            }
        }
        Phase::Active => {
            let dx = app
                .animation
                .filter(|a| a.kind == AnimationKind::Shake)
                .map_or(0, |a| shake_offset(a.elapsed(now)));
            for (col, &letter) in state.current().letters().iter().enumerate() {
                tiles[next_row][col].letter = Some(letter);
                tiles[next_row][col].active = true;
            }
            for tile in &mut tiles[next_row] {
                tile.dx = dx;
            }
        }
        Phase::Won | Phase::Lost => {}
    }

    apply_dance(app, state, &mut tiles, now);
    tiles
}

fn apply_dance<S: IndexSource>(
    app: &App<S>,
    state: &RoundState,
    tiles: &mut [[TileView; WORD_LENGTH]; MAX_GUESSES],
    now: Instant,
) {
    let Some(dance) = app.animation.filter(|a| a.kind == AnimationKind::Dance) else {
        return;
    };
    if state.outcome() != Outcome::Won {
        return;
    }
    let Some(row) = state.history().len().checked_sub(1) else {
        return;
    };
    let elapsed = dance.elapsed(now);
    for (col, tile) in tiles[row].iter_mut().enumerate() {
        if is_dancing(col, elapsed) {
            tile.dy = -1;
        }
    }
}

/// Main UI rendering function
pub fn ui<S: IndexSource>(f: &mut Frame, app: &App<S>, now: Instant) {
    let layout = screen_layout(f.area());

    render_header(f, app, layout.header);
    render_board(f, app, layout.board, now);
    render_messages(f, app, layout.messages);
    render_keyboard(f, app.round.state(), layout.keyboard);
    render_status(f, app.round.state(), layout.status);
}

fn render_header<S: IndexSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" rule: {} ", app.round.rule()))
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: IndexSource>(f: &mut Frame, app: &App<S>, area: Rect, now: Instant) {
    let origin_x = area.x + area.width.saturating_sub(BOARD_WIDTH) / 2;
    let origin_y = area.y + area.height.saturating_sub(BOARD_HEIGHT) / 2;

    for (row, tiles) in board_tiles(app, now).iter().enumerate() {
        for (col, tile) in tiles.iter().enumerate() {
            let x = origin_x + col as u16 * (TILE_WIDTH + TILE_GAP);
            let y = origin_y + row as u16 * TILE_HEIGHT;
            let rect = Rect::new(
                x.saturating_add_signed(tile.dx),
                y.saturating_add_signed(tile.dy),
                TILE_WIDTH,
                TILE_HEIGHT,
            )
            .intersection(area);
            if rect.is_empty() {
                continue;
            }
            render_tile(f, tile, rect);
        }
    }
}

fn render_tile(f: &mut Frame, tile: &TileView, area: Rect) {
    let (style, border) = match (tile.feedback, tile.active) {
        (Some(feedback), _) => (feedback_style(Some(feedback)), feedback_style(Some(feedback))),
        (None, true) => (
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Gray),
        ),
        (None, false) => (Style::default(), Style::default().fg(Color::DarkGray)),
    };

    let text = match tile.letter {
        Some(letter) if !tile.flipping => char::from(letter).to_ascii_uppercase().to_string(),
        _ => String::new(),
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(paragraph, area);
}

fn feedback_style(feedback: Option<Feedback>) -> Style {
    match feedback {
        Some(Feedback::Correct) => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Present) => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Absent) => Style::default().bg(Color::DarkGray).fg(Color::White),
        None => Style::default().fg(Color::White),
    }
}

fn render_messages<S: IndexSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let state = app.round.state();
    let mut lines: Vec<Line> = app
        .messages
        .iter()
        .rev()
        .take(2)
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            };
            Line::from(Span::styled(message.text.clone(), style))
        })
        .collect();

    if state.outcome() == Outcome::Won {
        lines.push(Line::from(vec![
            Span::raw("see definition of "),
            Span::styled(
                state.target().as_str().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            Span::styled(
                definition_url(state.target()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_keyboard(f: &mut Frame, state: &RoundState, area: Rect) {
    for cap in key_caps(area) {
        let style = match cap.action {
            Action::Letter(letter) => {
                let feedback = u8::try_from(letter)
                    .ok()
                    .and_then(|letter| state.letters().get(letter));
                feedback_style(feedback)
            }
            Action::Submit | Action::Delete => Style::default().fg(Color::Cyan),
            Action::NewWord | Action::Reset => Style::default().fg(Color::Magenta),
        };

        let key = Paragraph::new(cap.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(key, cap.rect);
    }
}

fn render_status(f: &mut Frame, state: &RoundState, area: Rect) {
    let round_text = match state.outcome() {
        Outcome::InProgress => format!(
            "Guess {}/{MAX_GUESSES}",
            (state.history().len() + 1).min(MAX_GUESSES)
        ),
        Outcome::Won => "Solved!".to_string(),
        Outcome::Lost => "Out of guesses".to_string(),
    };

    let status = Line::from(vec![
        Span::styled(round_text, Style::default().fg(Color::Yellow)),
        Span::styled(
            "  |  ^N: new word | ^R: reset | Esc: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    f.render_widget(Paragraph::new(status).alignment(Alignment::Center), area);
}
