//! Roll outcome to UI mapping

use rolladice_core::RollOutcome;
use tracing::info;

use crate::app::App;

/// Update the status line after a roll
pub fn process_roll(app: &mut App, outcome: &RollOutcome) {
    // Only the first reportable problem fits on the status line
    match outcome.notices.iter().find(|n| n.is_reportable()) {
        Some(notice) => app.set_status(format!("Sound unavailable: {notice}")),
        None => app.set_status(format!("Rolled a {}!", outcome.record.value)),
    }
}

/// Update the status line after a reset
pub fn process_reset(app: &mut App) {
    app.set_status("History cleared");
    info!(face = app.dice.state().face().value(), "history reset");
}
