//! Dice rolling engine for the RollaDice screen.
//!
//! This crate provides:
//! - The die table and pip-art faces
//! - Session state (face, score, history, fun fact) with pure updates
//! - Timed animation sequences for the button press and die bounce
//! - Sound and haptic seams with scoped playback ownership
//! - `DiceController`, which sequences a roll
//!
//! # Quick Start
//!
//! ```ignore
//! use rolladice_core::{DiceController, SoundAsset};
//! use std::time::Instant;
//!
//! let mut dice = DiceController::new(SoundAsset::new("assets/dice-roll.wav"));
//! let outcome = dice.roll(Instant::now())?;
//! println!("Rolled {} (score {})", outcome.record.value, outcome.record.score);
//!
//! dice.reset();
//! assert_eq!(dice.state().score(), 0);
//! ```

pub mod animation;
pub mod controller;
pub mod die;
pub mod effects;
pub mod error;
pub mod fun_facts;
pub mod state;
pub mod testing;

// Primary public API
pub use animation::{Sequence, Transition};
pub use controller::{DiceController, RandomRolls, RollOutcome, RollSource};
pub use die::{DieConfig, DieFace, DEFAULT_SIDES};
pub use effects::{AudioBackend, Haptics, ImpactStyle, NoHaptics, Playback, PlaybackSlot, SilentAudio, SoundAsset};
pub use error::{DiceError, EffectError};
pub use fun_facts::{FUN_FACTS, PLACEHOLDER_FACT};
pub use state::{DiceState, RollRecord, Snapshot};
pub use testing::{MockAudio, MockHaptics, ScriptedRolls, TestHarness};
