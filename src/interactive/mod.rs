//! Interactive TUI
//!
//! Full-screen board with animated feedback and a clickable keyboard.

mod app;
mod rendering;

pub use app::{
    ALERT_DURATION, Animation, AnimationKind, App, DANCE_ANIMATION_DURATION,
    FLIP_ANIMATION_DURATION, Message, MessageStyle, SHAKE_ANIMATION_DURATION, WIN_ALERT_DURATION,
    run_tui,
};
pub use rendering::{ScreenLayout, TileView, board_tiles, screen_layout, ui};
