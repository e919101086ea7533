//! Headless mode for RollaDice.
//!
//! A line-oriented protocol on stdin/stdout for scripting and automated
//! testing. Audio is silent and there are no haptics.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use rolladice_core::{DiceController, RandomRolls, SoundAsset};
use tracing::{debug, info};

/// Upper bound for `roll <count>`.
const MAX_BATCH: u32 = 1000;

/// Run a headless session on stdin/stdout.
pub fn run_headless(sound: SoundAsset, seed: Option<u64>) -> io::Result<()> {
    let rolls = match seed {
        Some(seed) => RandomRolls::seeded(seed),
        None => RandomRolls::from_entropy(),
    };
    let mut dice = DiceController::new(sound).with_roll_source(rolls);
    info!(?seed, "headless session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut dice, stdin.lock(), stdout.lock())
}

/// Drive `dice` from `input`, one command per line.
///
/// Output lines are tagged: `[ROLL]`, `[FACT]`, `[SCORE]`, `[HISTORY]`,
/// `[RESET]` and `[ERROR]`. `json` prints the snapshot untagged.
pub fn run_session<R: BufRead, W: Write>(
    dice: &mut DiceController,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "=== RollaDice Headless Mode ===")?;
    print_help(&mut out)?;
    writeln!(out)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "quit" | "exit" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            "roll" => match parse_count(parts.get(1).copied()) {
                Some(count) => {
                    for _ in 0..count {
                        roll_once(dice, &mut out)?;
                    }
                }
                None => writeln!(out, "[ERROR] Usage: roll [count], count 1-{MAX_BATCH}")?,
            },
            "reset" => {
                dice.reset();
                debug!("headless reset");
                writeln!(out, "[RESET] History cleared")?;
            }
            "status" => {
                let snapshot = dice.snapshot();
                writeln!(out, "[SCORE] {}", snapshot.score)?;
                writeln!(out, "[HISTORY] {}", format_history(snapshot.history))?;
                writeln!(out, "[FACT] {}", snapshot.fun_fact)?;
            }
            "json" => match dice.snapshot().to_json() {
                Ok(json) => writeln!(out, "{json}")?,
                Err(e) => writeln!(out, "[ERROR] Could not encode state: {e}")?,
            },
            "help" => print_help(&mut out)?,
            other => writeln!(out, "[ERROR] Unknown command: {other}. Type help for commands.")?,
        }
        out.flush()?;
    }

    Ok(())
}

fn roll_once<W: Write>(dice: &mut DiceController, out: &mut W) -> io::Result<()> {
    match dice.roll(Instant::now()) {
        Ok(outcome) => {
            writeln!(out, "[ROLL] {}", outcome.record.value)?;
            writeln!(out, "[FACT] {}", outcome.record.fun_fact)?;
            writeln!(out, "[SCORE] {}", outcome.record.score)?;
            for notice in outcome.notices.iter().filter(|n| n.is_reportable()) {
                writeln!(out, "[ERROR] {notice}")?;
            }
        }
        Err(e) => writeln!(out, "[ERROR] Roll failed: {e}")?,
    }
    Ok(())
}

fn parse_count(arg: Option<&str>) -> Option<u32> {
    match arg {
        None => Some(1),
        Some(s) => s.parse::<u32>().ok().filter(|n| (1..=MAX_BATCH).contains(n)),
    }
}

fn format_history(history: &[u8]) -> String {
    if history.is_empty() {
        return "(empty)".to_string();
    }
    history
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  roll [n]  - Roll the die (n times)")?;
    writeln!(out, "  reset     - Clear score and history")?;
    writeln!(out, "  status    - Show score, history and fun fact")?;
    writeln!(out, "  json      - Print the current state as JSON")?;
    writeln!(out, "  help      - Show this help")?;
    writeln!(out, "  quit      - Exit")
}
