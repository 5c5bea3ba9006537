//! # Exchange Shuffle
//!
//! Fisher-Yates: for each index from the last down to 1, draw a uniform
//! partner in `[0, i]` and swap. Produces a uniformly distributed
//! permutation over all n! orderings.

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

    for i in (1..working.len()).rev() {
        let j = rng.index_inclusive(0, i);
        let record = StepRecord::swap(
            i,
            j,
            format!(
                "Swap {} at position {i} with {} at position {j}",
                working[i].id, working[j].id
            ),
        );
        apply::apply_in_place(&mut working, &record)?;
        sink.push(record);
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
    use crate::rng::TraceSource;
    use crate::types::StepKind;

    #[test]
    fn emits_one_swap_per_outer_iteration() {
        let deck = ordered_deck(10).expect("deck");
        let mut rng = TraceSource::new(vec![3, 1, 4]);
        let records = record_steps(AlgorithmKind::Exchange, &deck, &mut rng).expect("record");

        assert_eq!(records.len(), 9);
        assert!(records.iter().all(|r| r.kind == StepKind::Swap));
    }

    #[test]
    fn all_zero_draws_rotate_left_by_one() {
        // j = 0 on every iteration swaps each descending index with the
        // front, which rotates the whole sequence left by one.
        let deck = ordered_deck(6).expect("deck");
        let mut rng = TraceSource::new(vec![0]);
        let shuffled = shuffle(AlgorithmKind::Exchange, &deck, &mut rng).expect("shuffle");

        let mut expected = ids(&deck);
        expected.rotate_left(1);
        assert_eq!(ids(&shuffled), expected);
    }

    #[test]
    fn swap_targets_descend_from_the_back() {
        let deck = ordered_deck(5).expect("deck");
        let mut rng = TraceSource::new(vec![0]);
        let records = record_steps(AlgorithmKind::Exchange, &deck, &mut rng).expect("record");

        let firsts: Vec<usize> = records.iter().map(|r| r.sources[0]).collect();
        assert_eq!(firsts, vec![4, 3, 2, 1]);
    }
}
