//! Command line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

/// The roll sound shipped with the app.
pub const BUNDLED_SOUND: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/dice-roll.wav");

const DEFAULT_FRAME_MS: u64 = 33;
const MIN_FRAME_MS: u64 = 10;
const MAX_FRAME_MS: u64 = 200;

/// How the roll sound is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioMode {
    /// Spawn an external player for the sound file
    #[default]
    Player,
    /// Ring the terminal bell
    Bell,
    Off,
}

impl AudioMode {
    fn parse(s: &str) -> Option<AudioMode> {
        match s.trim().to_lowercase().as_str() {
            "player" | "file" => Some(AudioMode::Player),
            "bell" => Some(AudioMode::Bell),
            "off" | "none" | "silent" => Some(AudioMode::Off),
            _ => None,
        }
    }
}

/// Settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sound_path: PathBuf,
    pub audio: AudioMode,
    /// Player program followed by its arguments; the sound path is appended.
    pub player: Vec<String>,
    pub log_dir: PathBuf,
    pub frame_interval: Duration,
    /// Problems found while reading settings, logged once logging is up.
    pub warnings: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        let sound_path = lookup("ROLLADICE_SOUND")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(BUNDLED_SOUND));

        let audio = match lookup("ROLLADICE_AUDIO") {
            Some(value) => AudioMode::parse(&value).unwrap_or_else(|| {
                warnings.push(format!(
                    "Unknown ROLLADICE_AUDIO value '{value}', expected player, bell or off"
                ));
                AudioMode::default()
            }),
            None => AudioMode::default(),
        };

        let player = lookup("ROLLADICE_PLAYER")
            .map(|cmd| cmd.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .filter(|parts| !parts.is_empty())
            .unwrap_or_else(default_player);

        let log_dir = lookup("ROLLADICE_LOG_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        let frame_ms = match lookup("ROLLADICE_FRAME_MS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) => ms.clamp(MIN_FRAME_MS, MAX_FRAME_MS),
                Err(_) => {
                    warnings.push(format!("Invalid ROLLADICE_FRAME_MS '{value}', using {DEFAULT_FRAME_MS}"));
                    DEFAULT_FRAME_MS
                }
            },
            None => DEFAULT_FRAME_MS,
        };

        Self {
            sound_path,
            audio,
            player,
            log_dir,
            frame_interval: Duration::from_millis(frame_ms),
            warnings,
        }
    }
}

fn default_player() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["afplay".to_string()]
    } else {
        vec!["aplay".to_string(), "-q".to_string()]
    }
}

/// Parsed command line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub help: bool,
    pub headless: bool,
    pub seed: Option<u64>,
}

impl CliArgs {
    /// Parse `std::env::args()`; the first element is the program name.
    ///
    /// `--seed` is accepted only together with `--headless`.
    pub fn parse(args: &[String]) -> Result<CliArgs, String> {
        let mut cli = CliArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => cli.help = true,
                "--headless" => cli.headless = true,
                "--seed" => {
                    let value = args.get(i + 1).ok_or("--seed needs a value")?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| format!("Invalid seed '{value}', expected an unsigned integer"))?;
                    cli.seed = Some(seed);
                    i += 1;
                }
                other => return Err(format!("Unknown argument '{other}'")),
            }
            i += 1;
        }

        if cli.seed.is_some() && !cli.headless {
            return Err("--seed is only available with --headless".to_string());
        }

        Ok(cli)
    }
}
