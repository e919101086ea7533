//! Session state for the dice screen.
//!
//! `DiceState` owns everything the screen shows: the current face, the
//! running score, the roll history and the fun fact. Updates are plain
//! functions of their inputs; randomness and side effects live in the
//! controller.

use serde::Serialize;

use crate::die::{DieConfig, DieFace};
use crate::error::DiceError;
use crate::fun_facts::PLACEHOLDER_FACT;

/// In-memory state for one screen lifetime.
#[derive(Debug, Clone)]
pub struct DiceState {
    config: &'static DieConfig,
    face: DieFace,
    score: u64,
    /// Most recent first.
    history: Vec<u8>,
    fun_fact: &'static str,
}

/// What a single applied roll changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRecord {
    pub value: u8,
    pub face: DieFace,
    pub score: u64,
    pub fun_fact: &'static str,
}

/// Read-only projection used by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<'a> {
    pub face: DieFace,
    pub sides: u8,
    pub score: u64,
    pub history: &'a [u8],
    pub fun_fact: &'a str,
}

impl Default for DiceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceState {
    /// Fresh state for the standard six-sided die.
    pub fn new() -> Self {
        Self::with_config(DieConfig::standard())
    }

    pub fn with_config(config: &'static DieConfig) -> Self {
        Self {
            config,
            face: DieFace::default(),
            score: 0,
            history: Vec::new(),
            fun_fact: PLACEHOLDER_FACT,
        }
    }

    pub fn config(&self) -> &'static DieConfig {
        self.config
    }

    pub fn sides(&self) -> u8 {
        self.config.sides
    }

    pub fn face(&self) -> DieFace {
        self.face
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn fun_fact(&self) -> &'static str {
        self.fun_fact
    }

    /// Apply a rolled value: face, score, history, then fun fact.
    pub fn apply_roll(&mut self, value: u8, fun_fact: &'static str) -> Result<RollRecord, DiceError> {
        let face = self.config.face(value).ok_or(DiceError::ValueOutOfRange {
            value,
            sides: self.config.sides,
        })?;

        self.face = face;
        self.score += u64::from(value);
        self.history.insert(0, value);
        self.fun_fact = fun_fact;

        Ok(RollRecord {
            value,
            face,
            score: self.score,
            fun_fact,
        })
    }

    /// Clear history, score and fun fact. The face stays where it is.
    pub fn reset(&mut self) {
        self.history.clear();
        self.score = 0;
        self.fun_fact = PLACEHOLDER_FACT;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            face: self.face,
            sides: self.config.sides,
            score: self.score,
            history: &self.history,
            fun_fact: self.fun_fact,
        }
    }
}

impl Snapshot<'_> {
    /// History lines as displayed, e.g. `Roll 1: 4`, most recent first.
    pub fn history_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.history
            .iter()
            .enumerate()
            .map(|(i, value)| format!("Roll {}: {}", i + 1, value))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
