//! Platform side effects a roll triggers: sound and haptics.
//!
//! The engine only sees these traits. Front-ends supply the real backends;
//! [`SilentAudio`] and [`NoHaptics`] cover environments without either.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::EffectError;

/// A sound file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundAsset {
    path: PathBuf,
}

impl SoundAsset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Confirm the asset exists and is a readable file.
    pub fn verify(&self) -> Result<(), EffectError> {
        let to_err = |source| EffectError::AssetLoad {
            path: self.path.clone(),
            source,
        };
        let meta = fs::metadata(&self.path).map_err(to_err)?;
        if !meta.is_file() {
            return Err(to_err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        fs::File::open(&self.path).map_err(to_err)?;
        Ok(())
    }
}

/// A loaded, playable sound.
pub trait Playback {
    fn play(&mut self) -> Result<(), EffectError>;

    /// Stop playback and release whatever the handle holds. Idempotent.
    fn stop(&mut self);

    fn is_playing(&mut self) -> bool;
}

pub trait AudioBackend {
    /// Load an asset into a playable handle. Does not start playback.
    fn load(&self, asset: &SoundAsset) -> Result<Box<dyn Playback>, EffectError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImpactStyle {
    #[default]
    Light,
    Medium,
    Heavy,
}

pub trait Haptics {
    /// Fire a single impact pulse.
    fn impact(&self, style: ImpactStyle) -> Result<(), EffectError>;

    /// Fire a pulse as part of a roll that started at `now`.
    ///
    /// Backends that draw the pulse on screen override this to share the
    /// animation clock.
    fn impact_at(&self, style: ImpactStyle, _now: Instant) -> Result<(), EffectError> {
        self.impact(style)
    }
}

/// Audio backend that accepts every asset and plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

struct SilentPlayback;

impl Playback for SilentPlayback {
    fn play(&mut self) -> Result<(), EffectError> {
        Ok(())
    }

    fn stop(&mut self) {}

    fn is_playing(&mut self) -> bool {
        false
    }
}

impl AudioBackend for SilentAudio {
    fn load(&self, _asset: &SoundAsset) -> Result<Box<dyn Playback>, EffectError> {
        Ok(Box::new(SilentPlayback))
    }
}

/// Haptics for devices without a motor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn impact(&self, _style: ImpactStyle) -> Result<(), EffectError> {
        Err(EffectError::HapticUnavailable)
    }
}

/// Holds the current playback. Replacing it stops the previous one, and
/// dropping the slot stops whatever is still playing.
#[derive(Default)]
pub struct PlaybackSlot {
    current: Option<Box<dyn Playback>>,
}

impl PlaybackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the previous playback and keep `next` in its place.
    pub fn replace(&mut self, next: Box<dyn Playback>) -> &mut dyn Playback {
        self.release();
        &mut **self.current.insert(next)
    }

    pub fn release(&mut self) {
        if let Some(mut previous) = self.current.take() {
            previous.stop();
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_playing(&mut self) -> bool {
        self.current.as_mut().is_some_and(|p| p.is_playing())
    }
}

impl Drop for PlaybackSlot {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for PlaybackSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSlot")
            .field("occupied", &self.is_occupied())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    struct Tracked {
        id: u32,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Playback for Tracked {
        fn play(&mut self) -> Result<(), EffectError> {
            self.log.borrow_mut().push(format!("play {}", self.id));
            Ok(())
        }

        fn stop(&mut self) {
            self.log.borrow_mut().push(format!("stop {}", self.id));
        }

        fn is_playing(&mut self) -> bool {
            true
        }
    }

    #[test]
    fn test_slot_stops_previous_on_replace() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = PlaybackSlot::new();

        slot.replace(Box::new(Tracked { id: 1, log: log.clone() })).play().unwrap();
        slot.replace(Box::new(Tracked { id: 2, log: log.clone() })).play().unwrap();

        assert_eq!(*log.borrow(), vec!["play 1", "stop 1", "play 2"]);
        assert!(slot.is_occupied());
    }

    #[test]
    fn test_slot_stops_on_drop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut slot = PlaybackSlot::new();
            slot.replace(Box::new(Tracked { id: 7, log: log.clone() }));
        }
        assert_eq!(*log.borrow(), vec!["stop 7"]);
    }

    #[test]
    fn test_no_haptics_is_unavailable() {
        let err = NoHaptics.impact(ImpactStyle::Light).unwrap_err();
        assert!(matches!(err, EffectError::HapticUnavailable));
    }

    #[test]
    fn test_verify_missing_asset() {
        let asset = SoundAsset::new("/definitely/not/here/dice-roll.wav");
        assert!(matches!(asset.verify(), Err(EffectError::AssetLoad { .. })));
    }

    #[test]
    fn test_verify_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let asset = SoundAsset::new(dir.path());
        assert!(matches!(asset.verify(), Err(EffectError::AssetLoad { .. })));
    }

    #[test]
    fn test_verify_existing_asset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"RIFF").unwrap();
        let asset = SoundAsset::new(file.path());
        assert!(asset.verify().is_ok());
    }
}
