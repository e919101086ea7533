//! Main application state and logic

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use rolladice_core::DiceController;
use tracing::warn;

use crate::effects;
use crate::platform::ScreenPulse;
use crate::ui::theme::DiceTheme;
use crate::ui::ScreenLayout;

/// How long a status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// The two tap targets on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Roll,
    Reset,
}

impl Control {
    pub fn next(self) -> Control {
        match self {
            Control::Roll => Control::Reset,
            Control::Reset => Control::Roll,
        }
    }
}

/// Main application state
pub struct App {
    pub dice: DiceController,
    pub theme: DiceTheme,
    pub pulse: ScreenPulse,

    // UI state
    pub focus: Control,
    pub show_help: bool,
    pub history_scroll: usize,
    /// Area of the last drawn frame, for mouse hit testing.
    pub viewport: Rect,

    // Status
    status_message: Option<(String, Instant)>,
    pub should_quit: bool,

    /// Frame clock used for animations.
    now: Instant,
}

impl App {
    /// `pulse` must be the same pulse the controller fires as its haptics.
    pub fn new(dice: DiceController, pulse: ScreenPulse) -> Self {
        Self {
            dice,
            theme: DiceTheme::default(),
            pulse,
            focus: Control::default(),
            show_help: false,
            history_scroll: 0,
            viewport: Rect::default(),
            status_message: None,
            should_quit: false,
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Roll the die. Sound and haptic failures only reach the status line.
    pub fn roll(&mut self) {
        self.now = Instant::now();
        match self.dice.roll(self.now) {
            Ok(outcome) => {
                // Newest roll is at the top of the list.
                self.history_scroll = 0;
                effects::process_roll(self, &outcome);
            }
            Err(e) => {
                warn!(error = %e, "roll rejected");
                self.set_status(format!("Roll failed: {e}"));
            }
        }
    }

    pub fn reset(&mut self) {
        self.dice.reset();
        self.history_scroll = 0;
        effects::process_reset(self);
    }

    /// Activate whichever control has focus.
    pub fn activate(&mut self, control: Control) {
        self.focus = control;
        match control {
            Control::Roll => self.roll(),
            Control::Reset => self.reset(),
        }
    }

    pub fn activate_focused(&mut self) {
        self.activate(self.focus);
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Advance the frame clock and expire old status messages.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.now = now;
        if let Some((_, set_at)) = &self.status_message {
            if now.saturating_duration_since(*set_at) >= STATUS_TTL {
                self.status_message = None;
            }
        }
        self.dice.tick(now)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn status(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(m, _)| m.as_str())
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Scroll the history list up (towards the newest roll)
    pub fn scroll_up(&mut self, amount: usize) {
        self.history_scroll = self.history_scroll.saturating_sub(amount);
    }

    /// Largest offset that still fills the history list drawn last frame
    fn max_history_scroll(&self) -> usize {
        let visible = ScreenLayout::calculate(self.viewport).history_list.height as usize;
        self.dice
            .state()
            .history()
            .len()
            .saturating_sub(visible.max(1))
    }

    /// Scroll the history list down (towards older rolls)
    pub fn scroll_down(&mut self, amount: usize) {
        self.history_scroll = (self.history_scroll + amount).min(self.max_history_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.history_scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.history_scroll = self.max_history_scroll();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rolladice_core::testing::{EffectLog, MockAudio};
    use rolladice_core::{DieFace, ScriptedRolls, SoundAsset, PLACEHOLDER_FACT};

    /// App with scripted rolls, mock audio and a real screen pulse.
    pub(crate) fn test_app(values: &[u8]) -> App {
        let pulse = ScreenPulse::new();
        let dice = DiceController::new(SoundAsset::new("dice-roll.wav"))
            .with_audio(MockAudio::new(EffectLog::new()))
            .with_haptics(pulse.clone())
            .with_roll_source(ScriptedRolls::new(values));
        App::new(dice, pulse)
    }

    #[test]
    fn test_roll_updates_state_and_pulses() {
        let mut app = test_app(&[4]);
        app.roll();

        assert_eq!(app.dice.state().face(), DieFace::Four);
        assert_eq!(app.dice.state().score(), 4);
        assert!(app.pulse.is_active(app.now()));
        assert!(app.dice.is_animating(app.now()));
    }

    #[test]
    fn test_pulse_starts_with_the_animations() {
        let mut app = test_app(&[2]);
        app.roll();
        let started = app.now();

        assert!(app.pulse.is_active(started + Duration::from_millis(119)));
        assert!(!app.pulse.is_active(started + Duration::from_millis(120)));
        assert!(app.dice.is_animating(started + Duration::from_millis(120)));
    }

    #[test]
    fn test_reset_via_focused_control() {
        let mut app = test_app(&[2, 5]);
        app.roll();
        app.roll();
        app.cycle_focus();
        assert_eq!(app.focus, Control::Reset);

        app.activate_focused();

        assert_eq!(app.dice.state().score(), 0);
        assert_eq!(app.dice.state().fun_fact(), PLACEHOLDER_FACT);
        assert_eq!(app.dice.state().face(), DieFace::Five);
        assert_eq!(app.status(), Some("History cleared"));
    }

    #[test]
    fn test_sound_failure_shows_status() {
        let pulse = ScreenPulse::new();
        let dice = DiceController::new(SoundAsset::new("gone.wav"))
            .with_audio(MockAudio::failing(EffectLog::new()))
            .with_roll_source(ScriptedRolls::new(&[3]));
        let mut app = App::new(dice, pulse);

        app.roll();

        assert_eq!(app.dice.state().history(), &[3]);
        assert!(app.status().is_some_and(|s| s.starts_with("Sound unavailable")));
    }

    #[test]
    fn test_status_expires() {
        let mut app = test_app(&[1]);
        app.set_status("hello");
        app.tick(Instant::now());
        assert_eq!(app.status(), Some("hello"));

        app.tick(Instant::now() + Duration::from_secs(4));
        assert_eq!(app.status(), None);
    }

    #[test]
    fn test_scroll_stops_when_last_roll_is_visible() {
        let values: Vec<u8> = (1..=6).cycle().take(20).collect();
        let mut app = test_app(&values);
        app.viewport = Rect::new(0, 0, 80, 24);
        let visible = ScreenLayout::calculate(app.viewport).history_list.height as usize;
        for _ in 0..visible + 2 {
            app.roll();
        }

        app.scroll_to_bottom();
        assert_eq!(app.history_scroll, 2);
        app.scroll_down(10);
        assert_eq!(app.history_scroll, 2);

        // One step up moves the list right away
        app.scroll_up(1);
        assert_eq!(app.history_scroll, 1);
    }

    #[test]
    fn test_scroll_is_bounded_by_history() {
        let mut app = test_app(&[1, 2, 3]);
        app.scroll_down(5);
        assert_eq!(app.history_scroll, 0);

        for _ in 0..3 {
            app.roll();
        }
        app.scroll_down(5);
        assert_eq!(app.history_scroll, 2);
        app.scroll_up(1);
        assert_eq!(app.history_scroll, 1);
        app.scroll_to_top();
        assert_eq!(app.history_scroll, 0);
        app.scroll_to_bottom();
        assert_eq!(app.history_scroll, 2);

        app.roll();
        assert_eq!(app.history_scroll, 0);
    }
}
