//! # Step Applicator
//!
//! Replays one atomic step record against a working sequence.
//!
//! Records are consumed strictly in forward order. Resuming playback
//! from an arbitrary step means replaying every record from zero against
//! the pristine original sequence; the engine keeps no cursor state.

use crate::deck;
use crate::types::{Card, ShuffleError, StepKind, StepRecord};
use std::collections::BTreeSet;

// =============================================================================
// PUBLIC SURFACE
// =============================================================================

/// Apply one record to a collection, returning the transformed copy.
///
/// `Swap` exchanges the two named elements. `Move`/`Merge` relocate
/// elements per the source/destination pairing; elements that do not
/// move keep their relative order. `Split` reorders nothing. After any
/// reordering, positions are renumbered to current index and exactly the
/// record's affected indices are highlighted.
pub fn apply_step(deck: &[Card], record: &StepRecord) -> Result<Vec<Card>, ShuffleError> {
    let mut working = deck.to_vec();
    apply_in_place(&mut working, record)?;
    Ok(working)
}

/// Replay a full record list, in order, from the pristine sequence.
pub fn replay(deck: &[Card], records: &[StepRecord]) -> Result<Vec<Card>, ShuffleError> {
    let mut working = deck.to_vec();
    for record in records {
        apply_in_place(&mut working, record)?;
    }
    Ok(working)
}

// =============================================================================
// IN-PLACE APPLICATION
// =============================================================================

/// Apply one record to the working sequence in place.
///
/// This is the single transformation path: the algorithm runners drive
/// their working decks through it, so bulk output and step replay cannot
/// diverge.
pub(crate) fn apply_in_place(
    working: &mut Vec<Card>,
    record: &StepRecord,
) -> Result<(), ShuffleError> {
    record.validate(working.len())?;

    match record.kind {
        StepKind::Swap => {
            working.swap(record.sources[0], record.sources[1]);
        }
        StepKind::Move | StepKind::Merge => {
            relocate(working, &record.sources, &record.destinations);
        }
        StepKind::Split => {}
    }

    deck::renumber(working);
    deck::set_highlights(working, &record.affected);
    Ok(())
}

/// Relocate `sources[k] -> destinations[k]` as a partial permutation.
///
/// Elements not named by `sources` fill the remaining slots in their
/// original relative order. Index validity and uniqueness are checked by
/// `StepRecord::validate` before this runs.
fn relocate(working: &mut Vec<Card>, sources: &[usize], destinations: &[usize]) {
    let moved: Vec<Card> = sources
        .iter()
        .filter_map(|&index| working.get(index).cloned())
        .collect();
    let source_set: BTreeSet<usize> = sources.iter().copied().collect();
    let rest: Vec<Card> = working
        .iter()
        .enumerate()
        .filter(|(index, _)| !source_set.contains(index))
        .map(|(_, card)| card.clone())
        .collect();

    let mut slots: Vec<Option<Card>> = vec![None; working.len()];
    for (card, &destination) in moved.into_iter().zip(destinations) {
        slots[destination] = Some(card);
    }
    let mut rest_iter = rest.into_iter();
    for slot in &mut slots {
        if slot.is_none() {
            *slot = rest_iter.next();
        }
    }

    *working = slots.into_iter().flatten().collect();
}

// =============================================================================
// TESTS
// =============================================================================
