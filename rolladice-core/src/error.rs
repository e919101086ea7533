//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the state model.
#[derive(Debug, Error)]
pub enum DiceError {
    #[error("Rolled value {value} is outside 1..={sides}")]
    ValueOutOfRange { value: u8, sides: u8 },
}

/// Failures of the platform side effects (sound, haptics).
///
/// None of these block a roll. Sound failures are reported, haptic
/// unavailability is ignored.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("Failed to load sound asset {}: {source}", path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Sound playback failed: {0}")]
    Playback(String),
    #[error("Haptic feedback unavailable")]
    HapticUnavailable,
    #[error("Haptic feedback failed: {0}")]
    Haptic(String),
}

impl EffectError {
    /// Whether this failure should be shown to the player at all.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, EffectError::HapticUnavailable | EffectError::Haptic(_))
    }
}
