//! Session scenarios through the public API.
//!
//! These tests verify the roll/reset behavior end to end:
//! - Fresh start state
//! - Score and history bookkeeping across rolls
//! - Reset clearing progress but keeping the face
//! - Rapid, overlapping rolls

use rolladice_core::testing::{assert_cleared, assert_face_matches_latest, assert_score_is_history_sum};
use rolladice_core::{
    DiceController, DieFace, RandomRolls, SoundAsset, TestHarness, FUN_FACTS, PLACEHOLDER_FACT,
};
use std::time::Instant;

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_fresh_start() {
    let harness = TestHarness::new(&[]);

    assert_eq!(harness.score(), 0);
    assert!(harness.history().is_empty());
    assert_eq!(harness.fun_fact(), PLACEHOLDER_FACT);
    assert_eq!(harness.face(), DieFace::One);
}

#[test]
fn test_single_roll_of_four() {
    let mut harness = TestHarness::new(&[4]);
    let outcome = harness.roll();

    assert_eq!(outcome.record.value, 4);
    assert_eq!(harness.score(), 4);
    assert_eq!(harness.history(), &[4]);
    assert_eq!(harness.face(), DieFace::Four);
    assert!(FUN_FACTS.contains(&harness.fun_fact()));
}

#[test]
fn test_three_rolls_most_recent_first() {
    let mut harness = TestHarness::new(&[2, 5, 1]);
    harness.roll_times(3);

    assert_eq!(harness.score(), 8);
    assert_eq!(harness.history(), &[1, 5, 2]);
    assert_face_matches_latest(&harness);
}

#[test]
fn test_three_rolls_then_reset() {
    let mut harness = TestHarness::new(&[2, 5, 1]);
    harness.roll_times(3).reset();

    assert_cleared(&harness);
    assert_eq!(harness.face(), DieFace::One);
}

#[test]
fn test_reset_keeps_non_default_face() {
    let mut harness = TestHarness::new(&[3, 6]);
    harness.roll_times(2).reset();

    assert_cleared(&harness);
    assert_eq!(harness.face(), DieFace::Six);
}

#[test]
fn test_rolling_after_reset_starts_over() {
    let mut harness = TestHarness::new(&[6, 6, 2]);
    harness.roll_times(2).reset();
    harness.roll();

    assert_eq!(harness.history(), &[2]);
    assert_eq!(harness.score(), 2);
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn test_invariants_hold_for_many_random_rolls() {
    let mut dice = DiceController::new(SoundAsset::new("dice-roll.wav"))
        .with_roll_source(RandomRolls::seeded(2024));
    let now = Instant::now();
    let mut expected: Vec<u8> = Vec::new();

    for _ in 0..300 {
        let outcome = dice.roll(now).unwrap();
        expected.insert(0, outcome.record.value);

        let state = dice.state();
        assert!((1..=6).contains(&outcome.record.value));
        assert_eq!(state.face().value(), state.history()[0]);
        assert_eq!(state.history(), expected.as_slice());
        assert_eq!(state.score(), expected.iter().map(|v| u64::from(*v)).sum::<u64>());
        assert!(FUN_FACTS.contains(&state.fun_fact()));
    }
}

#[test]
fn test_rapid_rolls_are_all_applied() {
    let mut harness = TestHarness::new(&[1, 2, 3, 4]);

    // Tap faster than the 600ms bounce.
    for _ in 0..4 {
        harness.roll();
        harness.advance(50);
    }

    assert_eq!(harness.history(), &[4, 3, 2, 1]);
    assert_score_is_history_sum(&harness);
    assert!(harness.controller.is_animating(harness.now()));
    assert_eq!(harness.log.count("play"), 4);
    // Every superseded sound was stopped.
    assert_eq!(harness.log.count("stop"), 3);
}

#[test]
fn test_animations_finish_without_further_input() {
    let mut harness = TestHarness::new(&[5]);
    harness.roll();

    harness.advance(650);

    assert!(!harness.controller.is_animating(harness.now()));
    assert_eq!(harness.controller.button_scale(harness.now()), 1.0);
    assert_eq!(harness.controller.die_scale(harness.now()), 1.0);
}
