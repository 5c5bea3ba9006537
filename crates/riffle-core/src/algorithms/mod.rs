//! # Shuffle Algorithms
//!
//! The four permutation algorithms, each implemented once as a step
//! generator.
//!
//! Every transformation an algorithm performs is materialized as a
//! `StepRecord` and applied to its working deck through the same
//! in-place applicator the public `apply_step` uses. The sink either
//! discards records (bulk mode) or collects them (recording mode), so
//! bulk output and step replay agree under a shared draw trace by
//! construction rather than by parallel maintenance of two code paths.

mod exchange;
mod hindu;
mod overhand;
mod riffle;

use crate::deck;
use crate::rng::RandomSource;
use crate::types::{AlgorithmDescriptor, Card, ShuffleError, StepRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// STEP SINK
// =============================================================================

/// Receiver for the records an algorithm run produces.
pub(crate) trait StepSink {
    fn push(&mut self, record: StepRecord);
}

/// Bulk mode: records are applied and dropped.
struct Discard;

impl StepSink for Discard {
    fn push(&mut self, _record: StepRecord) {}
}

/// Recording mode: records are collected for later replay.
#[derive(Default)]
struct Collect {
    records: Vec<StepRecord>,
}

impl StepSink for Collect {
    fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }
}

// =============================================================================
// ALGORITHM REGISTRY
// =============================================================================

/// The registered shuffle algorithms, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    /// Fisher-Yates exchange shuffle.
    Exchange,
    /// Riffle (dovetail) interleave.
    Riffle,
    /// Overhand group relocation.
    Overhand,
    /// Hindu packet draw.
    Hindu,
}

impl AlgorithmKind {
    /// All algorithms in canonical order.
    pub const ALL: [Self; 4] = [Self::Exchange, Self::Riffle, Self::Overhand, Self::Hindu];

    /// Unique key for this algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exchange => "exchange",
            Self::Riffle => "riffle",
            Self::Overhand => "overhand",
            Self::Hindu => "hindu",
        }
    }

    /// Static descriptor for this algorithm.
    #[must_use]
    pub const fn descriptor(self) -> AlgorithmDescriptor {
        match self {
            Self::Exchange => AlgorithmDescriptor {
                name: "exchange",
                summary: "Fisher-Yates exchange: one uniform swap per index, every \
                          ordering equally likely. The correctness baseline.",
                complexity: "O(n)",
            },
            Self::Riffle => AlgorithmDescriptor {
                name: "riffle",
                summary: "Cut near the midpoint, then interleave the halves with a \
                          fair coin per dropped card.",
                complexity: "O(n)",
            },
            Self::Overhand => AlgorithmDescriptor {
                name: "overhand",
                summary: "Lift small groups off the top onto a new pile. A weak \
                          mixer that needs many passes.",
                complexity: "O(n) per pass, O(n^2) to mix",
            },
            Self::Hindu => AlgorithmDescriptor {
                name: "hindu",
                summary: "Draw packets from the bottom and stack them on the new \
                          pile, keeping packet order.",
                complexity: "O(n) per pass",
            },
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ShuffleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exchange" | "fisher-yates" => Ok(Self::Exchange),
            "riffle" => Ok(Self::Riffle),
            "overhand" => Ok(Self::Overhand),
            "hindu" => Ok(Self::Hindu),
            other => Err(ShuffleError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Descriptors for every registered algorithm, in canonical order.
#[must_use]
pub fn list_algorithms() -> Vec<AlgorithmDescriptor> {
    AlgorithmKind::ALL
        .iter()
        .map(|kind| kind.descriptor())
        .collect()
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Run one bulk shuffle. The input is never mutated; the output is a
/// fresh permutation with renumbered positions and no highlights.
pub fn shuffle<R: RandomSource>(
    kind: AlgorithmKind,
    cards: &[Card],
    rng: &mut R,
) -> Result<Vec<Card>, ShuffleError> {
    deck::validate(cards)?;
    let mut shuffled = run(kind, cards, rng, &mut Discard)?;
    deck::set_highlights(&mut shuffled, &[]);
    deck::renumber(&mut shuffled);
    Ok(shuffled)
}

/// Record the step list for one shuffle. Replaying the records from the
/// original sequence reproduces exactly what `shuffle` returns for the
/// same draw trace, modulo the final highlight state.
pub fn record_steps<R: RandomSource>(
    kind: AlgorithmKind,
    cards: &[Card],
    rng: &mut R,
) -> Result<Vec<StepRecord>, ShuffleError> {
    deck::validate(cards)?;
    let mut sink = Collect::default();
    run(kind, cards, rng, &mut sink)?;
    Ok(sink.records)
}

fn run<R: RandomSource, S: StepSink>(
    kind: AlgorithmKind,
    cards: &[Card],
    rng: &mut R,
    sink: &mut S,
) -> Result<Vec<Card>, ShuffleError> {
    match kind {
        AlgorithmKind::Exchange => exchange::run(cards, rng, sink),
        AlgorithmKind::Riffle => riffle::run(cards, rng, sink),
        AlgorithmKind::Overhand => overhand::run(cards, rng, sink),
        AlgorithmKind::Hindu => hindu::run(cards, rng, sink),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::replay;
    use crate::deck::{clear_highlights, ids, ordered_deck, standard_deck};
    use crate::rng::ChaChaSource;
    use std::collections::BTreeSet;

    #[test]
    fn unknown_name_is_rejected() {
        let parsed = "pharaoh".parse::<AlgorithmKind>();
        assert!(matches!(parsed, Err(ShuffleError::UnknownAlgorithm(_))));
    }

    #[test]
    fn names_round_trip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.name().parse::<AlgorithmKind>().expect("parse"), kind);
        }
    }

    #[test]
    fn fisher_yates_alias_resolves() {
        let parsed = "fisher-yates".parse::<AlgorithmKind>().expect("parse");
        assert_eq!(parsed, AlgorithmKind::Exchange);
    }

    #[test]
    fn descriptors_are_listed_in_canonical_order() {
        let names: Vec<&str> = list_algorithms().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["exchange", "riffle", "overhand", "hindu"]);
    }

    #[test]
    fn empty_deck_fails_fast() {
        let mut rng = ChaChaSource::seeded(1);
        for kind in AlgorithmKind::ALL {
            assert!(matches!(
                shuffle(kind, &[], &mut rng),
                Err(ShuffleError::EmptyDeck)
            ));
            assert!(matches!(
                record_steps(kind, &[], &mut rng),
                Err(ShuffleError::EmptyDeck)
            ));
        }
    }

    #[test]
    fn duplicate_ids_fail_fast() {
        let mut deck = standard_deck();
        deck[1].id = deck[0].id.clone();
        let mut rng = ChaChaSource::seeded(1);
        assert!(matches!(
            shuffle(AlgorithmKind::Exchange, &deck, &mut rng),
            Err(ShuffleError::DuplicateCard(_))
        ));
    }

    #[test]
    fn every_algorithm_permutes() {
        let deck = standard_deck();
        let original: BTreeSet<_> = ids(&deck).into_iter().collect();

        for kind in AlgorithmKind::ALL {
            let mut rng = ChaChaSource::seeded(99);
            let shuffled = shuffle(kind, &deck, &mut rng).expect("shuffle");
            assert_eq!(shuffled.len(), deck.len());
            let result: BTreeSet<_> = ids(&shuffled).into_iter().collect();
            assert_eq!(result, original, "{kind} lost or duplicated cards");
        }
    }

    #[test]
    fn bulk_output_is_renumbered_and_unhighlighted() {
        let deck = standard_deck();
        for kind in AlgorithmKind::ALL {
            let mut rng = ChaChaSource::seeded(3);
            let shuffled = shuffle(kind, &deck, &mut rng).expect("shuffle");
            for (index, card) in shuffled.iter().enumerate() {
                assert_eq!(card.position, index);
                assert!(!card.highlighted);
            }
        }
    }

    #[test]
    fn replayed_steps_reproduce_the_bulk_permutation() {
        let deck = standard_deck();
        for kind in AlgorithmKind::ALL {
            let mut bulk_rng = ChaChaSource::seeded(2024);
            let mut step_rng = ChaChaSource::seeded(2024);

            let bulk = shuffle(kind, &deck, &mut bulk_rng).expect("shuffle");
            let records = record_steps(kind, &deck, &mut step_rng).expect("record");
            let replayed = replay(&deck, &records).expect("replay");

            assert_eq!(
                clear_highlights(&replayed),
                bulk,
                "{kind} bulk and replay diverged"
            );
        }
    }

    #[test]
    fn single_card_deck_is_a_fixed_point() {
        let deck = ordered_deck(1).expect("deck");
        for kind in AlgorithmKind::ALL {
            let mut rng = ChaChaSource::seeded(5);
            let shuffled = shuffle(kind, &deck, &mut rng).expect("shuffle");
            assert_eq!(ids(&shuffled), ids(&deck));
        }
    }
}
