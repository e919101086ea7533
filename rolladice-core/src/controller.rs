//! The dice screen's view-model.
//!
//! `DiceController` owns the session state, the two animation sequences
//! and the side-effect backends, and runs the roll sequence:
//!
//! 1. replace the current sound with a fresh playback of the roll sound
//! 2. restart the button-press and die-bounce animations
//! 3. fire a light haptic pulse
//! 4. draw a value, then update face, score, history and fun fact
//!
//! Steps 1 and 3 may fail; neither failure stops step 4. There is no
//! re-entry guard: rolling while the previous roll is still animating
//! restarts the animations and supersedes the sound.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, warn};

use crate::animation::{self, Sequence};
use crate::die::DieConfig;
use crate::effects::{AudioBackend, Haptics, ImpactStyle, NoHaptics, PlaybackSlot, SilentAudio, SoundAsset};
use crate::error::{DiceError, EffectError};
use crate::fun_facts;
use crate::state::{DiceState, RollRecord, Snapshot};

/// Where roll values and fun facts come from.
pub trait RollSource {
    fn roll_die(&mut self, config: &DieConfig) -> u8;
    fn pick_fun_fact(&mut self) -> &'static str;
}

/// Uniform draws from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomRolls<R = StdRng> {
    rng: R,
}

impl RandomRolls<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomRolls<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RollSource for RandomRolls<R> {
    fn roll_die(&mut self, config: &DieConfig) -> u8 {
        config.roll(&mut self.rng)
    }

    fn pick_fun_fact(&mut self) -> &'static str {
        fun_facts::pick(&mut self.rng)
    }
}

/// Result of a roll: the state change plus any sound failures worth showing.
#[derive(Debug)]
pub struct RollOutcome {
    pub record: RollRecord,
    pub notices: Vec<EffectError>,
}

pub struct DiceController {
    state: DiceState,
    sound: SoundAsset,
    audio: Box<dyn AudioBackend>,
    haptics: Box<dyn Haptics>,
    rolls: Box<dyn RollSource>,
    playback: PlaybackSlot,
    button_press: Sequence,
    die_bounce: Sequence,
}

impl DiceController {
    /// Controller for the standard die with silent audio and no haptics.
    pub fn new(sound: SoundAsset) -> Self {
        Self {
            state: DiceState::new(),
            sound,
            audio: Box::new(SilentAudio),
            haptics: Box::new(NoHaptics),
            rolls: Box::new(RandomRolls::from_entropy()),
            playback: PlaybackSlot::new(),
            button_press: Sequence::button_press(),
            die_bounce: Sequence::die_bounce(),
        }
    }

    pub fn with_audio(mut self, audio: impl AudioBackend + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn with_roll_source(mut self, rolls: impl RollSource + 'static) -> Self {
        self.rolls = Box::new(rolls);
        self
    }

    pub fn with_die(mut self, config: &'static DieConfig) -> Self {
        self.state = DiceState::with_config(config);
        self
    }

    pub fn state(&self) -> &DiceState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn sound_asset(&self) -> &SoundAsset {
        &self.sound
    }

    /// Run the full roll sequence at `now`.
    pub fn roll(&mut self, now: Instant) -> Result<RollOutcome, DiceError> {
        let mut notices = Vec::new();

        if let Err(e) = self.play_roll_sound() {
            warn!(error = %e, "roll sound failed");
            notices.push(e);
        }

        self.button_press.start(now);
        self.die_bounce.start(now);

        match self.haptics.impact_at(ImpactStyle::Light, now) {
            Ok(()) => {}
            Err(EffectError::HapticUnavailable) => debug!("haptics unavailable"),
            Err(e) => warn!(error = %e, "haptic pulse failed"),
        }

        let value = self.rolls.roll_die(self.state.config());
        let fun_fact = self.rolls.pick_fun_fact();
        let record = self.state.apply_roll(value, fun_fact)?;

        debug!(value, score = record.score, rolls = self.state.history().len(), "rolled");
        Ok(RollOutcome { record, notices })
    }

    /// Clear score, history and fun fact. No sound, haptics or animation.
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("session reset");
    }

    fn play_roll_sound(&mut self) -> Result<(), EffectError> {
        // A new request supersedes the old sound even if loading fails.
        self.playback.release();
        let playback = self.audio.load(&self.sound)?;
        self.playback.replace(playback).play()
    }

    pub fn is_sound_playing(&mut self) -> bool {
        self.playback.is_playing()
    }

    /// Stop any sound still playing.
    pub fn release_sound(&mut self) {
        self.playback.release();
    }

    /// Current button scale, 1.0 at rest.
    pub fn button_scale(&self, now: Instant) -> f32 {
        self.button_press.value_at(now)
    }

    pub fn die_bounce(&self, now: Instant) -> f32 {
        self.die_bounce.value_at(now)
    }

    /// Current die scale, 1.0 at rest and 1.2 at the top of the bounce.
    pub fn die_scale(&self, now: Instant) -> f32 {
        animation::die_scale(self.die_bounce(now))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.button_press.is_running(now) || self.die_bounce.is_running(now)
    }

    /// Advance the animation track. Returns whether anything is still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.button_press.settle(now);
        self.die_bounce.settle(now);
        self.is_animating(now)
    }
}

impl std::fmt::Debug for DiceController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiceController")
            .field("state", &self.state)
            .field("sound", &self.sound)
            .field("playback", &self.playback)
            .finish_non_exhaustive()
    }
}
