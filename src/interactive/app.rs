//! TUI application state and event loop

use super::rendering::{screen_layout, ui};
use crate::core::WORD_LENGTH;
use crate::game::{Action, IndexSource, Outcome, RoundController, Step};
use crate::input::{Input, map_key, map_mouse};
use crate::keyboard::key_caps;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Full turn of one tile; each tile starts half a turn after the previous
pub const FLIP_ANIMATION_DURATION: Duration = Duration::from_millis(500);
/// Hop of one tile on a win; tiles start a fifth of this apart
pub const DANCE_ANIMATION_DURATION: Duration = Duration::from_millis(500);
pub const SHAKE_ANIMATION_DURATION: Duration = Duration::from_millis(250);
pub const ALERT_DURATION: Duration = Duration::from_millis(1000);
pub const WIN_ALERT_DURATION: Duration = Duration::from_millis(5000);

const TICK: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Pending guess being turned over; input is suspended
    Flip,
    /// Rejected row wobbling
    Shake,
    /// Winning row hopping
    Dance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub kind: AnimationKind,
    pub started: Instant,
}

impl Animation {
    #[must_use]
    pub const fn new(kind: AnimationKind, started: Instant) -> Self {
        Self { kind, started }
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        let tiles = WORD_LENGTH as u32;
        match self.kind {
            AnimationKind::Flip => FLIP_ANIMATION_DURATION / 2 * (tiles + 1),
            AnimationKind::Shake => SHAKE_ANIMATION_DURATION,
            AnimationKind::Dance => {
                DANCE_ANIMATION_DURATION / 5 * (tiles - 1) + DANCE_ANIMATION_DURATION
            }
        }
    }

    #[must_use]
    pub fn elapsed(self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    #[must_use]
    pub fn is_finished(self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration()
    }
}

/// Tiles of the pending row already showing their colour
#[must_use]
pub fn revealed_tiles(elapsed: Duration) -> usize {
    let half = FLIP_ANIMATION_DURATION / 2;
    let turned = elapsed.as_millis() / half.as_millis();
    usize::try_from(turned).unwrap_or(usize::MAX).min(WORD_LENGTH)
}

/// Whether tile `index` is edge-on (mid-flip) at `elapsed`
#[must_use]
pub fn is_flipping(index: usize, elapsed: Duration) -> bool {
    let half = FLIP_ANIMATION_DURATION / 2;
    usize::try_from(elapsed.as_millis() / half.as_millis()).is_ok_and(|turn| turn == index)
}

/// Whether tile `index` of the winning row is mid-hop at `elapsed`
#[must_use]
pub fn is_dancing(index: usize, elapsed: Duration) -> bool {
    let start = DANCE_ANIMATION_DURATION / 5 * index as u32;
    elapsed >= start && elapsed < start + DANCE_ANIMATION_DURATION
}

/// Horizontal wobble of a rejected row, alternating every 50ms
#[must_use]
pub fn shake_offset(elapsed: Duration) -> i16 {
    if elapsed >= SHAKE_ANIMATION_DURATION {
        0
    } else if (elapsed.as_millis() / 50) % 2 == 0 {
        1
    } else {
        -1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    /// `None` stays until the board is cleared
    pub expires: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S: IndexSource> {
    pub round: RoundController<S>,
    pub animation: Option<Animation>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<S: IndexSource> App<S> {
    #[must_use]
    pub fn new(round: RoundController<S>) -> Self {
        Self {
            round,
            animation: None,
            messages: Vec::new(),
            should_quit: false,
        }
    }

    /// Input is not listened to while a guess is being turned over
    #[must_use]
    pub fn is_input_suspended(&self) -> bool {
        self.animation
            .is_some_and(|animation| animation.kind == AnimationKind::Flip)
    }

    pub fn handle_input(&mut self, input: Input, now: Instant) {
        let action = match input {
            Input::Quit => {
                self.should_quit = true;
                return;
            }
            Input::Game(action) => action,
        };

        if self.is_input_suspended() {
            return;
        }

        match self.round.handle(action) {
            Step::Rejected(reason) => {
                self.add_message(
                    reason.to_string(),
                    MessageStyle::Error,
                    Some(ALERT_DURATION),
                    now,
                );
                self.animation = Some(Animation::new(AnimationKind::Shake, now));
            }
            Step::Evaluating(_) => {
                self.animation = Some(Animation::new(AnimationKind::Flip, now));
            }
            Step::Restarted => {
                self.messages.clear();
                self.animation = None;
                if action == Action::NewWord {
                    self.add_message(
                        "New word!".to_string(),
                        MessageStyle::Info,
                        Some(ALERT_DURATION),
                        now,
                    );
                }
            }
            Step::Ignored | Step::Edited | Step::Resolved(_) => {}
        }
    }

    /// Advance timers: expire messages and finish animations
    pub fn tick(&mut self, now: Instant) {
        self.messages
            .retain(|message| message.expires.is_none_or(|expires| expires > now));

        let Some(animation) = self.animation else {
            return;
        };
        if !animation.is_finished(now) {
            return;
        }
        self.animation = None;

        if animation.kind != AnimationKind::Flip {
            return;
        }

        match self.round.finish_feedback() {
            Step::Resolved(Outcome::Won) => {
                self.add_message(
                    "You Win".to_string(),
                    MessageStyle::Success,
                    Some(WIN_ALERT_DURATION),
                    now,
                );
                self.animation = Some(Animation::new(AnimationKind::Dance, now));
            }
            Step::Resolved(Outcome::Lost) => {
                let target = self.round.state().target().as_str().to_uppercase();
                self.add_message(target, MessageStyle::Error, None, now);
            }
            _ => {}
        }
    }

    fn add_message(
        &mut self,
        text: String,
        style: MessageStyle,
        duration: Option<Duration>,
        now: Instant,
    ) {
        self.messages.push(Message {
            text,
            style,
            expires: duration.map(|d| now + d),
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: IndexSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: IndexSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app, Instant::now()))?;

        if event::poll(TICK)? {
            let input = match event::read()? {
                Event::Key(key) => map_key(key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let layout = screen_layout(Rect::new(0, 0, size.width, size.height));
                    map_mouse(mouse, &key_caps(layout.keyboard))
                }
                _ => None,
            };

            if let Some(input) = input {
                debug!(?input, "input");
                app.handle_input(input, Instant::now());
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EvaluationRule, Word};
    use crate::game::FixedIndex;
    use crate::wordlists::{Dictionary, TargetPool};

    fn app() -> App<FixedIndex> {
        let words: Vec<Word> = ["crane", "slate", "mound", "fight", "brick", "jumpy", "apple"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        App::new(RoundController::new(
            Dictionary::from_words(words.clone()),
            TargetPool::new(words).unwrap(),
            FixedIndex::new([0, 6]),
            EvaluationRule::Lenient,
        ))
    }

    fn type_word(app: &mut App<FixedIndex>, word: &str, now: Instant) {
        for c in word.chars() {
            app.handle_input(Input::Game(Action::Letter(c)), now);
        }
    }

    fn submit_and_reveal(app: &mut App<FixedIndex>, word: &str, now: Instant) -> Instant {
        type_word(app, word, now);
        app.handle_input(Input::Game(Action::Submit), now);
        let done = now + Animation::new(AnimationKind::Flip, now).duration();
        app.tick(done);
        done
    }

    #[test]
    fn flip_timing() {
        assert_eq!(revealed_tiles(Duration::ZERO), 0);
        assert_eq!(revealed_tiles(Duration::from_millis(249)), 0);
        assert_eq!(revealed_tiles(Duration::from_millis(250)), 1);
        assert_eq!(revealed_tiles(Duration::from_millis(10_000)), WORD_LENGTH);
        assert!(is_flipping(0, Duration::from_millis(100)));
        assert!(is_flipping(2, Duration::from_millis(600)));
        assert!(!is_flipping(2, Duration::from_millis(100)));

        let flip = Animation::new(AnimationKind::Flip, Instant::now());
        assert_eq!(flip.duration(), Duration::from_millis(1500));
    }

    #[test]
    fn dance_and_shake_timing() {
        assert!(is_dancing(0, Duration::from_millis(0)));
        assert!(!is_dancing(4, Duration::from_millis(399)));
        assert!(is_dancing(4, Duration::from_millis(400)));
        assert!(!is_dancing(0, Duration::from_millis(500)));
        assert_eq!(shake_offset(Duration::from_millis(10)), 1);
        assert_eq!(shake_offset(Duration::from_millis(60)), -1);
        assert_eq!(shake_offset(SHAKE_ANIMATION_DURATION), 0);
    }

    #[test]
    fn rejection_shows_alert_then_expires() {
        let now = Instant::now();
        let mut app = app();
        type_word(&mut app, "ab", now);
        app.handle_input(Input::Game(Action::Submit), now);

        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].text, "Not enough letters");
        assert_eq!(app.animation.map(|a| a.kind), Some(AnimationKind::Shake));
        assert!(!app.is_input_suspended());

        app.tick(now + ALERT_DURATION);
        assert!(app.messages.is_empty());
        assert!(app.animation.is_none());
    }

    #[test]
    fn input_suspended_while_flipping() {
        let now = Instant::now();
        let mut app = app();
        type_word(&mut app, "slate", now);
        app.handle_input(Input::Game(Action::Submit), now);
        assert!(app.is_input_suspended());

        app.handle_input(Input::Game(Action::Letter('a')), now);
        app.tick(now + Duration::from_millis(500));
        assert!(app.round.state().current().is_empty());
        assert!(app.round.state().history().is_empty());

        app.tick(now + Duration::from_millis(1500));
        assert!(!app.is_input_suspended());
        assert_eq!(app.round.state().history().len(), 1);
    }

    #[test]
    fn win_starts_dance_and_message() {
        let now = Instant::now();
        let mut app = app();
        let done = submit_and_reveal(&mut app, "crane", now);

        assert_eq!(app.round.state().outcome(), Outcome::Won);
        assert_eq!(app.animation.map(|a| a.kind), Some(AnimationKind::Dance));
        assert_eq!(app.messages.last().map(|m| m.text.as_str()), Some("You Win"));

        app.tick(done + WIN_ALERT_DURATION);
        assert!(app.messages.is_empty());
    }

    #[test]
    fn loss_reveals_target_until_restart() {
        let mut now = Instant::now();
        let mut app = app();
        for word in ["slate", "mound", "fight", "brick", "jumpy", "apple"] {
            now = submit_and_reveal(&mut app, word, now);
        }
        assert_eq!(app.round.state().outcome(), Outcome::Lost);
        app.tick(now + Duration::from_secs(60));
        assert_eq!(app.messages.last().map(|m| m.text.as_str()), Some("CRANE"));

        app.handle_input(Input::Game(Action::NewWord), now);
        assert_eq!(app.round.state().target().as_str(), "apple");
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        app.handle_input(Input::Quit, Instant::now());
        assert!(app.should_quit);
    }
}
