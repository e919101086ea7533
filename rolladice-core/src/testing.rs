//! Testing utilities for the dice engine.
//!
//! This module provides tools for deterministic tests:
//! - `MockAudio` / `MockHaptics` that record what the controller asked for
//! - `ScriptedRolls` for choosing roll outcomes up front
//! - `TestHarness` for scripted roll/reset scenarios
//! - Assertion helpers for verifying session state

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::controller::{DiceController, RollOutcome, RollSource};
use crate::die::{DieConfig, DieFace};
use crate::effects::{AudioBackend, Haptics, ImpactStyle, Playback, SoundAsset};
use crate::error::EffectError;
use crate::fun_facts::{FUN_FACTS, PLACEHOLDER_FACT};

/// Shared, ordered record of side effects.
#[derive(Debug, Clone, Default)]
pub struct EffectLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.entries.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }
}

/// Audio backend that logs loads, plays and stops.
///
/// Playbacks are numbered from 1 in load order.
pub struct MockAudio {
    log: EffectLog,
    fail: bool,
    loaded: Cell<u32>,
}

impl MockAudio {
    pub fn new(log: EffectLog) -> Self {
        Self {
            log,
            fail: false,
            loaded: Cell::new(0),
        }
    }

    /// Every load fails as if the asset were missing.
    pub fn failing(log: EffectLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }
}

struct MockPlayback {
    id: u32,
    log: EffectLog,
    playing: bool,
}

impl Playback for MockPlayback {
    fn play(&mut self) -> Result<(), EffectError> {
        self.playing = true;
        self.log.push(format!("play #{}", self.id));
        Ok(())
    }

    fn stop(&mut self) {
        if self.playing {
            self.playing = false;
            self.log.push(format!("stop #{}", self.id));
        }
    }

    fn is_playing(&mut self) -> bool {
        self.playing
    }
}

impl AudioBackend for MockAudio {
    fn load(&self, asset: &SoundAsset) -> Result<Box<dyn Playback>, EffectError> {
        self.log.push(format!("load {}", asset.path().display()));
        if self.fail {
            return Err(EffectError::AssetLoad {
                path: asset.path().to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock asset missing"),
            });
        }
        let id = self.loaded.get() + 1;
        self.loaded.set(id);
        Ok(Box::new(MockPlayback {
            id,
            log: self.log.clone(),
            playing: false,
        }))
    }
}

/// Haptics that log each pulse, or report the motor as missing.
pub struct MockHaptics {
    log: EffectLog,
    available: bool,
}

impl MockHaptics {
    pub fn new(log: EffectLog) -> Self {
        Self {
            log,
            available: true,
        }
    }

    pub fn unavailable(log: EffectLog) -> Self {
        Self {
            log,
            available: false,
        }
    }
}

impl Haptics for MockHaptics {
    fn impact(&self, style: ImpactStyle) -> Result<(), EffectError> {
        if !self.available {
            return Err(EffectError::HapticUnavailable);
        }
        self.log.push(format!("haptic {style:?}"));
        Ok(())
    }
}

/// Roll values given up front. Values repeat once exhausted; fun facts
/// cycle through the fixed list in order.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    values: VecDeque<u8>,
    next_fact: usize,
}

impl ScriptedRolls {
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            next_fact: 0,
        }
    }
}

impl RollSource for ScriptedRolls {
    fn roll_die(&mut self, _config: &DieConfig) -> u8 {
        match self.values.pop_front() {
            Some(value) => {
                self.values.push_back(value);
                value
            }
            None => 1,
        }
    }

    fn pick_fun_fact(&mut self) -> &'static str {
        let fact = FUN_FACTS[self.next_fact % FUN_FACTS.len()];
        self.next_fact += 1;
        fact
    }
}

/// Test harness for scripted dice sessions.
///
/// Uses mock effects and a manual clock.
pub struct TestHarness {
    pub controller: DiceController,
    pub log: EffectLog,
    now: Instant,
}

impl TestHarness {
    /// Create a harness that will roll `values` in order.
    pub fn new(values: &[u8]) -> Self {
        let log = EffectLog::new();
        let controller = DiceController::new(SoundAsset::new("dice-roll.wav"))
            .with_audio(MockAudio::new(log.clone()))
            .with_haptics(MockHaptics::new(log.clone()))
            .with_roll_source(ScriptedRolls::new(values));
        Self {
            controller,
            log,
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance(&mut self, millis: u64) -> &mut Self {
        self.now += Duration::from_millis(millis);
        self.controller.tick(self.now);
        self
    }

    /// Roll once at the current clock time.
    pub fn roll(&mut self) -> RollOutcome {
        match self.controller.roll(self.now) {
            Ok(outcome) => outcome,
            Err(e) => panic!("scripted roll failed: {e}"),
        }
    }

    pub fn roll_times(&mut self, times: usize) -> &mut Self {
        for _ in 0..times {
            self.roll();
        }
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.controller.reset();
        self
    }

    pub fn face(&self) -> DieFace {
        self.controller.state().face()
    }

    pub fn score(&self) -> u64 {
        self.controller.state().score()
    }

    pub fn history(&self) -> &[u8] {
        self.controller.state().history()
    }

    pub fn fun_fact(&self) -> &'static str {
        self.controller.state().fun_fact()
    }
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// Assert the session looks like a fresh start, apart from the face.
pub fn assert_cleared(harness: &TestHarness) {
    assert_eq!(harness.score(), 0, "Expected score to be 0");
    assert!(harness.history().is_empty(), "Expected empty history, got {:?}", harness.history());
    assert_eq!(harness.fun_fact(), PLACEHOLDER_FACT, "Expected placeholder fun fact");
}

/// Assert the shown face is the latest history entry.
pub fn assert_face_matches_latest(harness: &TestHarness) {
    let latest = harness.history().first().copied();
    assert_eq!(
        Some(harness.face().value()),
        latest,
        "Face {} does not match latest roll {:?}",
        harness.face(),
        latest
    );
}

/// Assert the score equals the sum of the history.
pub fn assert_score_is_history_sum(harness: &TestHarness) {
    let sum: u64 = harness.history().iter().map(|v| u64::from(*v)).sum();
    assert_eq!(harness.score(), sum, "Score does not match history {:?}", harness.history());
}
