//! # Overhand Shuffle
//!
//! Repeatedly lift a small group (1 to 7 cards) off the top of the
//! working pile and drop it onto the top of the new pile, so the most
//! recently lifted group ends up nearest the new top.
//!
//! Deliberately a weak mixer: cards only relocate in small blocks that
//! keep their internal order. Full mixing needs on the order of n^2
//! draws across repeated passes.

use super::StepSink;
use crate::apply;
use crate::primitives::OVERHAND_MAX_GROUP;
use crate::rng::RandomSource;
use crate::types::{Card, ShuffleError, StepRecord};

pub(crate) fn run<R: RandomSource, S: StepSink>(
    cards: &[Card],
    rng: &mut R,
    sink: &mut S,
) -> Result<Vec<Card>, ShuffleError> {
    let mut working = cards.to_vec();
    let mut remaining = working.len();
    // Replay-frame layout: [accumulated pile | working remainder]; the
    // accumulated pile holds `taken` cards.
    let mut taken = 0;

    while remaining > 0 {
        let group = rng.index_inclusive(1, remaining.min(OVERHAND_MAX_GROUP));
        let sources: Vec<usize> = (taken..taken + group).collect();
        let destinations: Vec<usize> = (0..group).collect();
        let record = StepRecord::relocate(
            sources,
            destinations,
            format!("Lift {group} card(s) off the top and drop them on the new pile"),
        );
        apply::apply_in_place(&mut working, &record)?;
        sink.push(record);

        remaining -= group;
        taken += group;
    }

    Ok(working)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::{AlgorithmKind, record_steps, shuffle};
    use crate::deck::{ids, ordered_deck};
    use crate::primitives::OVERHAND_MAX_GROUP;
    use crate::rng::{ChaChaSource, TraceSource};
    use crate::types::StepKind;

    #[test]
    fn constant_group_draws_reverse_in_blocks() {
        // Groups of 3 from [0..6): [0,1,2] then [3,4,5], each dropped on
        // top of the previous group.
        let deck = ordered_deck(6).expect("deck");
        let mut rng = TraceSource::new(vec![2]);
        let shuffled = shuffle(AlgorithmKind::Overhand, &deck, &mut rng).expect("shuffle");

        let original = ids(&deck);
        let expected = vec![
            original[3].clone(),
            original[4].clone(),
            original[5].clone(),
            original[0].clone(),
            original[1].clone(),
            original[2].clone(),
        ];
        assert_eq!(ids(&shuffled), expected);
    }

    #[test]
    fn groups_keep_internal_order() {
        let deck = ordered_deck(6).expect("deck");
        let mut rng = TraceSource::new(vec![2]);
        let records = record_steps(AlgorithmKind::Overhand, &deck, &mut rng).expect("record");

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.kind == StepKind::Move));
        assert_eq!(records[1].sources, vec![3, 4, 5]);
        assert_eq!(records[1].destinations, vec![0, 1, 2]);
    }

    #[test]
    fn group_sizes_respect_the_cap() {
        let deck = ordered_deck(52).expect("deck");
        let mut rng = ChaChaSource::seeded(11);
        let records = record_steps(AlgorithmKind::Overhand, &deck, &mut rng).expect("record");

        for record in &records {
            assert!(!record.sources.is_empty());
            assert!(record.sources.len() <= OVERHAND_MAX_GROUP);
        }
        let total: usize = records.iter().map(|r| r.sources.len()).sum();
        assert_eq!(total, 52);
    }
}
