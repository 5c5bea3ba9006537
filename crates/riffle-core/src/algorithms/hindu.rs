//! # Hindu Shuffle
//!
//! Symmetric to overhand, but packets (1 to 6 cards) are drawn from the
//! bottom of the working pile and stacked onto the back of the new pile,
//! preserving each packet's internal order. The first packet drawn ends
//! up first in the result.

use super::StepSink;
use crate::apply;
use crate::primitives::HINDU_MAX_PACKET;
use crate::rng::RandomSource;
use crate::types::{Card, ShuffleError, StepRecord};

pub(crate) fn run<R: RandomSource, S: StepSink>(
    cards: &[Card],
    rng: &mut R,
    sink: &mut S,
) -> Result<Vec<Card>, ShuffleError> {
    let mut working = cards.to_vec();
    let n = working.len();
    // Replay-frame layout: [working remainder | accumulated pile]; the
    // remainder shrinks from `n` to zero as packets relocate to the back.
    let mut remaining = n;

    while remaining > 0 {
        let packet = rng.index_inclusive(1, remaining.min(HINDU_MAX_PACKET));
        let sources: Vec<usize> = (remaining - packet..remaining).collect();
        let destinations: Vec<usize> = (n - packet..n).collect();
        let record = StepRecord::relocate(
            sources,
            destinations,
            format!("Draw {packet} card(s) from the bottom and stack them on the new pile"),
        );
        apply::apply_in_place(&mut working, &record)?;
        sink.push(record);

        remaining -= packet;
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
    use crate::primitives::HINDU_MAX_PACKET;
    use crate::rng::{ChaChaSource, TraceSource};

    #[test]
    fn constant_packet_draws_swap_halves_in_pairs() {
        // Packets of 2 from [0..6): (4,5) then (2,3) then (0,1), each
        // appended to the back of the pile.
        let deck = ordered_deck(6).expect("deck");
        let mut rng = TraceSource::new(vec![1]);
        let shuffled = shuffle(AlgorithmKind::Hindu, &deck, &mut rng).expect("shuffle");

        let original = ids(&deck);
        let expected = vec![
            original[4].clone(),
            original[5].clone(),
            original[2].clone(),
            original[3].clone(),
            original[0].clone(),
            original[1].clone(),
        ];
        assert_eq!(ids(&shuffled), expected);
    }

    #[test]
    fn packets_land_at_the_back() {
        let deck = ordered_deck(6).expect("deck");
        let mut rng = TraceSource::new(vec![1]);
        let records = record_steps(AlgorithmKind::Hindu, &deck, &mut rng).expect("record");

        assert_eq!(records.len(), 3);
        // Second packet: trailing two of the remaining four cards.
        assert_eq!(records[1].sources, vec![2, 3]);
        assert_eq!(records[1].destinations, vec![4, 5]);
    }

    #[test]
    fn packet_sizes_respect_the_cap() {
        let deck = ordered_deck(52).expect("deck");
        let mut rng = ChaChaSource::seeded(17);
        let records = record_steps(AlgorithmKind::Hindu, &deck, &mut rng).expect("record");

        for record in &records {
            assert!(!record.sources.is_empty());
            assert!(record.sources.len() <= HINDU_MAX_PACKET);
        }
        let total: usize = records.iter().map(|r| r.sources.len()).sum();
        assert_eq!(total, 52);
    }
}
