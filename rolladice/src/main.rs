//! RollaDice terminal application.
//!
//! A single screen: roll a six-sided die, keep a running score and a
//! most-recent-first roll history, and read a fun fact after each roll.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line protocol suitable for scripting:
//!
//! ```bash
//! echo "roll 3" | cargo run -p rolladice -- --headless --seed 7
//! ```

mod app;
mod config;
mod effects;
mod events;
mod headless;
mod logging;
mod platform;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rolladice_core::{DiceController, SoundAsset};
use std::io::{self, stdout};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use app::App;
use config::{AppConfig, AudioMode, CliArgs};
use events::{handle_event, EventResult};
use platform::{CommandAudio, ScreenPulse, TerminalBell};
use ui::render::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    if cli.help {
        print_help();
        return Ok(());
    }

    let config = AppConfig::from_env();

    // Check for --headless mode
    if cli.headless {
        let _logging = logging::init_stderr_logging();
        log_config_warnings(&config);
        return headless::run_headless(SoundAsset::new(&config.sound_path), cli.seed)
            .map_err(|e| e.into());
    }

    let (_logging, logging_warning) = logging::init_file_logging(&config.log_dir);
    if let Some(message) = logging_warning {
        eprintln!("Warning: {message}");
    }
    log_config_warnings(&config);

    let pulse = ScreenPulse::new();
    let dice = build_controller(&config, &pulse);
    if let Err(e) = dice.sound_asset().verify() {
        warn!(error = %e, "roll sound unavailable, rolls will be silent");
    }
    info!(audio = ?config.audio, sound = %config.sound_path.display(), "starting RollaDice");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(dice, pulse), config.frame_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Wire the configured sound backend and the screen pulse into a controller.
fn build_controller(config: &AppConfig, pulse: &ScreenPulse) -> DiceController {
    let dice = DiceController::new(SoundAsset::new(&config.sound_path)).with_haptics(pulse.clone());

    match config.audio {
        AudioMode::Player => match CommandAudio::new(&config.player) {
            Some(audio) => dice.with_audio(audio),
            None => {
                warn!("no player command configured, using the terminal bell");
                dice.with_audio(TerminalBell)
            }
        },
        AudioMode::Bell => dice.with_audio(TerminalBell),
        AudioMode::Off => dice,
    }
}

fn log_config_warnings(config: &AppConfig) {
    for message in &config.warnings {
        warn!("{message}");
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    frame_interval: Duration,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| {
            app.viewport = f.area();
            render(f, &app);
        })?;

        // Poll for events with timeout for animations
        if event::poll(frame_interval)? {
            if let EventResult::Quit = handle_event(&mut app, event::read()?) {
                app.should_quit = true;
            }
        }

        // Tick animations
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    app.dice.release_sound();
    info!(rolls = app.dice.state().history().len(), "quitting");
    Ok(())
}

fn print_help() {
    println!("RollaDice - roll a die, keep score, learn a fun fact");
    println!();
    println!("USAGE:");
    println!("  rolladice [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run in headless mode (line protocol, no TUI)");
    println!("  --seed <N>       Seed the die for a reproducible session (headless only)");
    println!();
    println!("ENVIRONMENT (also read from .env):");
    println!("  ROLLADICE_SOUND     Roll sound file (default: bundled dice-roll.wav)");
    println!("  ROLLADICE_AUDIO     player, bell or off (default: player)");
    println!("  ROLLADICE_PLAYER    Player command (default: aplay -q, afplay on macOS)");
    println!("  ROLLADICE_LOG_DIR   Log directory (default: logs)");
    println!("  ROLLADICE_FRAME_MS  Render tick in milliseconds, 10-200 (default: 33)");
    println!("  RUST_LOG            Log filter (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("  rolladice                              # Interactive TUI mode");
    println!("  rolladice --headless                   # Headless line protocol");
    println!("  echo 'roll 5' | rolladice --headless --seed 42");
}
