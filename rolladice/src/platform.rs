//! Terminal backends for sound and haptics.

use std::cell::Cell;
use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;
use std::rc::Rc;
use std::time::{Duration, Instant};

use rolladice_core::{AudioBackend, EffectError, Haptics, ImpactStyle, Playback, SoundAsset};
use tokio::process::{Child, Command};
use tracing::debug;

/// Plays sound files by spawning an external player (`aplay`, `afplay`, ...).
///
/// Must be used from inside a Tokio runtime.
#[derive(Debug, Clone)]
pub struct CommandAudio {
    program: String,
    args: Vec<String>,
}

impl CommandAudio {
    /// `command` is the program followed by its arguments.
    pub fn new(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

struct CommandPlayback {
    program: String,
    args: Vec<String>,
    path: PathBuf,
    child: Option<Child>,
}

impl Playback for CommandPlayback {
    fn play(&mut self) -> Result<(), EffectError> {
        self.stop();
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| EffectError::Playback(format!("could not start {}: {e}", self.program)))?;
        debug!(program = %self.program, pid = ?child.id(), "sound started");
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            // Already-exited players just report an error here.
            let _ = child.start_kill();
        }
    }

    fn is_playing(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }
}

impl AudioBackend for CommandAudio {
    fn load(&self, asset: &SoundAsset) -> Result<Box<dyn Playback>, EffectError> {
        asset.verify()?;
        Ok(Box::new(CommandPlayback {
            program: self.program.clone(),
            args: self.args.clone(),
            path: asset.path().to_path_buf(),
            child: None,
        }))
    }
}

/// Rings the terminal bell instead of playing the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

struct BellPlayback;

impl Playback for BellPlayback {
    fn play(&mut self) -> Result<(), EffectError> {
        let mut out = std::io::stdout();
        out.write_all(b"\x07")
            .and_then(|()| out.flush())
            .map_err(|e| EffectError::Playback(format!("terminal bell: {e}")))
    }

    fn stop(&mut self) {}

    fn is_playing(&mut self) -> bool {
        false
    }
}

impl AudioBackend for TerminalBell {
    fn load(&self, _asset: &SoundAsset) -> Result<Box<dyn Playback>, EffectError> {
        Ok(Box::new(BellPlayback))
    }
}

/// Terminal stand-in for a haptic motor: a short highlight of the die card.
///
/// Clones share the same pulse, so the UI keeps one to read while the
/// controller owns another to fire.
#[derive(Debug, Clone, Default)]
pub struct ScreenPulse {
    fired: Rc<Cell<Option<(Instant, Duration)>>>,
}

impl ScreenPulse {
    pub fn new() -> Self {
        Self::default()
    }

    fn length(style: ImpactStyle) -> Duration {
        match style {
            ImpactStyle::Light => Duration::from_millis(120),
            ImpactStyle::Medium => Duration::from_millis(180),
            ImpactStyle::Heavy => Duration::from_millis(250),
        }
    }

    pub fn fire_at(&self, style: ImpactStyle, now: Instant) {
        self.fired.set(Some((now, Self::length(style))));
    }

    pub fn is_active(&self, now: Instant) -> bool {
        match self.fired.get() {
            Some((at, length)) => now.saturating_duration_since(at) < length,
            None => false,
        }
    }
}

impl Haptics for ScreenPulse {
    fn impact(&self, style: ImpactStyle) -> Result<(), EffectError> {
        self.impact_at(style, Instant::now())
    }

    fn impact_at(&self, style: ImpactStyle, now: Instant) -> Result<(), EffectError> {
        self.fire_at(style, now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_audio_needs_a_program() {
        assert!(CommandAudio::new(&[]).is_none());
        let audio = CommandAudio::new(&["aplay".to_string(), "-q".to_string()]).unwrap();
        assert_eq!(audio.program, "aplay");
        assert_eq!(audio.args, vec!["-q"]);
    }

    #[test]
    fn test_command_audio_rejects_missing_asset() {
        let audio = CommandAudio::new(&["true".to_string()]).unwrap();
        let result = audio.load(&SoundAsset::new("/no/such/dice-roll.wav"));
        assert!(matches!(result, Err(EffectError::AssetLoad { .. })));
    }

    #[tokio::test]
    async fn test_missing_player_is_a_playback_error() {
        let asset = tempfile::NamedTempFile::new().unwrap();
        let audio = CommandAudio::new(&["rolladice-no-such-player".to_string()]).unwrap();
        let mut playback = audio.load(&SoundAsset::new(asset.path())).unwrap();

        assert!(matches!(playback.play(), Err(EffectError::Playback(_))));
        assert!(!playback.is_playing());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stop_kills_the_player() {
        let asset = tempfile::NamedTempFile::new().unwrap();
        // The asset path becomes `$0` of the script and is ignored.
        let audio = CommandAudio::new(&["sh".to_string(), "-c".to_string(), "sleep 5".to_string()]).unwrap();
        let mut playback = audio.load(&SoundAsset::new(asset.path())).unwrap();

        playback.play().unwrap();
        assert!(playback.is_playing());

        playback.stop();
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_screen_pulse_is_shared_and_short() {
        let pulse = ScreenPulse::new();
        let reader = pulse.clone();
        let t0 = Instant::now();
        assert!(!reader.is_active(t0));

        pulse.fire_at(ImpactStyle::Light, t0);

        assert!(reader.is_active(t0 + Duration::from_millis(50)));
        assert!(!reader.is_active(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_screen_pulse_uses_the_roll_clock() {
        let pulse = ScreenPulse::new();
        let roll_started = Instant::now();
        pulse
            .impact_at(ImpactStyle::Light, roll_started)
            .unwrap();

        assert!(pulse.is_active(roll_started + Duration::from_millis(119)));
        assert!(!pulse.is_active(roll_started + Duration::from_millis(120)));
    }

    #[test]
    fn test_screen_pulse_as_haptics() {
        let pulse = ScreenPulse::new();
        assert!(pulse.impact(ImpactStyle::Light).is_ok());
        assert!(pulse.is_active(Instant::now()));
    }
}
