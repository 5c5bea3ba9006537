//! # Riffle Shuffle
//!
//! Cut the deck near the midpoint (perturbed by one position at random),
//! then interleave: while both halves hold cards a fair coin picks the
//! half that drops the next card; once a half empties the other drains.
//!
//! The coin is an unconditional 50/50 draw per card. The folk
//! description of riffling claims a bias toward alternation; the
//! recorded behavior here is the literal fair coin.

use super::StepSink;
use crate::apply;
use crate::rng::RandomSource;
use crate::types::{Card, ShuffleError, StepRecord};

pub(crate) fn run<R: RandomSource, S: StepSink>(
    cards: &[Card],
    rng: &mut R,
    sink: &mut S,
) -> Result<Vec<Card>, ShuffleError> {
    let mut working = cards.to_vec();
    let n = working.len();
    if n < 2 {
        return Ok(working);
    }

    // Split point: midpoint plus a perturbation drawn from {-1, 0, +1},
    // clamped so both halves are non-empty.
    let mid = n / 2;
    let split = match rng.index_inclusive(0, 2) {
        0 => mid.saturating_sub(1).max(1),
        2 => (mid + 1).min(n - 1),
        _ => mid.clamp(1, n - 1),
    };

    let split_record = StepRecord::split(
        n,
        format!(
            "Cut the deck: left half holds {split} cards, right half holds {} cards",
            n - split
        ),
    );
    apply::apply_in_place(&mut working, &split_record)?;
    sink.push(split_record);

    let mut left_remaining = split;
    let mut right_remaining = n - split;
    let mut taken = 0;

    while left_remaining > 0 || right_remaining > 0 {
        let from_left = if left_remaining == 0 {
            false
        } else if right_remaining == 0 {
            true
        } else {
            rng.coin()
        };

        // Replay-frame layout: [output | left remainder | right remainder].
        let source = if from_left {
            taken
        } else {
            taken + left_remaining
        };
        let side = if from_left { "left" } else { "right" };
        let record = StepRecord::relocate(
            vec![source],
            vec![taken],
            format!("Drop {} from the {side} half", working[source].id),
        );
        apply::apply_in_place(&mut working, &record)?;
        sink.push(record);

        if from_left {
            left_remaining -= 1;
        } else {
            right_remaining -= 1;
        }
        taken += 1;
    }

    Ok(working)
}

// =============================================================================
// TESTS
// =============================================================================
