//! Keyboard layout and on-screen key geometry
//!
//! Used by the TUI renderer to draw keys, by the input layer to hit-test
//! mouse clicks and by the line mode to print the letter summary.

use crate::game::Action;
use ratatui::layout::Rect;

/// Letter rows, top to bottom
pub const LETTER_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Height of one key row in cells
pub const KEY_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 8;
const BUTTON_WIDTH: u16 = 12;
const GAP: u16 = 1;

/// Rows of keys including the new-word / reset button row
pub const KEYBOARD_ROWS: u16 = 4;

/// One clickable key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCap {
    pub rect: Rect,
    pub action: Action,
    pub label: String,
}

impl KeyCap {
    #[must_use]
    pub const fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.rect.x
            && column < self.rect.x + self.rect.width
            && row >= self.rect.y
            && row < self.rect.y + self.rect.height
    }
}

/// Lay out every key inside `area`, each row centered
///
/// Keys that would fall outside `area` are dropped.
#[must_use]
pub fn key_caps(area: Rect) -> Vec<KeyCap> {
    let mut rows: Vec<Vec<(u16, Action, String)>> = LETTER_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| {
                    (
                        KEY_WIDTH,
                        Action::Letter(c),
                        c.to_ascii_uppercase().to_string(),
                    )
                })
                .collect()
        })
        .collect();

    // Bottom letter row is flanked by ENTER and DEL, as on the web keyboard
    rows[2].insert(0, (WIDE_KEY_WIDTH, Action::Submit, "ENTER".to_string()));
    rows[2].push((WIDE_KEY_WIDTH, Action::Delete, "DEL".to_string()));

    rows.push(vec![
        (BUTTON_WIDTH, Action::NewWord, "NEW WORD".to_string()),
        (BUTTON_WIDTH, Action::Reset, "RESET".to_string()),
    ]);

    let mut caps = Vec::new();
    for (row_index, row) in rows.into_iter().enumerate() {
        let y = area.y + row_index as u16 * KEY_HEIGHT;
        if y + KEY_HEIGHT > area.y + area.height {
            break;
        }

        let row_width: u16 =
            row.iter().map(|(w, _, _)| w).sum::<u16>() + GAP * (row.len() as u16).saturating_sub(1);
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for (width, action, label) in row {
            if x + width <= area.x + area.width {
                caps.push(KeyCap {
                    rect: Rect::new(x, y, width, KEY_HEIGHT),
                    action,
                    label,
                });
            }
            x += width + GAP;
        }
    }
    caps
}

/// Key under the given screen cell, if any
#[must_use]
pub fn key_at(caps: &[KeyCap], column: u16, row: u16) -> Option<Action> {
    caps.iter()
        .find(|cap| cap.contains(column, row))
        .map(|cap| cap.action)
}
