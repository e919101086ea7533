//! Timed animation sequences.
//!
//! A [`Sequence`] is a resting value followed by transitions, each moving
//! linearly to a target over a fixed duration. Sequences are evaluated
//! against a clock by the render loop and never touch session state.

use std::time::{Duration, Instant};

/// Scale of the die at full bounce.
pub const DIE_BOUNCE_SCALE: f32 = 1.2;

/// One step of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub to: f32,
    pub duration: Duration,
}

impl Transition {
    pub fn new(to: f32, millis: u64) -> Self {
        Self {
            to,
            duration: Duration::from_millis(millis),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sequence {
    rest: f32,
    transitions: Vec<Transition>,
    started_at: Option<Instant>,
}

impl Sequence {
    pub fn new(rest: f32, transitions: Vec<Transition>) -> Self {
        Self {
            rest,
            transitions,
            started_at: None,
        }
    }

    /// Button press: 1.0 down to 0.95 and back, 100ms each way.
    pub fn button_press() -> Self {
        Self::new(1.0, vec![Transition::new(0.95, 100), Transition::new(1.0, 100)])
    }

    /// Die bounce progress: 0.0 up to 1.0 and back, 300ms each way.
    pub fn die_bounce() -> Self {
        Self::new(0.0, vec![Transition::new(1.0, 300), Transition::new(0.0, 300)])
    }

    /// Start from the beginning. A running sequence is restarted.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn total_duration(&self) -> Duration {
        self.transitions.iter().map(|t| t.duration).sum()
    }

    pub fn is_running(&self, now: Instant) -> bool {
        match self.started_at {
            Some(start) => now.saturating_duration_since(start) < self.total_duration(),
            None => false,
        }
    }

    /// Forget a finished run so later reads take the fast path.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_running(now) {
            self.started_at = None;
        }
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(start) = self.started_at else {
            return self.rest;
        };

        let mut elapsed = now.saturating_duration_since(start);
        let mut from = self.rest;
        for transition in &self.transitions {
            if elapsed < transition.duration {
                let t = elapsed.as_secs_f32() / transition.duration.as_secs_f32();
                return from + (transition.to - from) * t;
            }
            elapsed -= transition.duration;
            from = transition.to;
        }
        from
    }
}

/// Map bounce progress (0..=1) onto the rendered die scale.
pub fn die_scale(progress: f32) -> f32 {
    1.0 + (DIE_BOUNCE_SCALE - 1.0) * progress.clamp(0.0, 1.0)
}
