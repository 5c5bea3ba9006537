//! # Core Type Definitions
//!
//! This module contains all core types for the Riffle shuffle engine:
//! - Card identity and face values (`CardId`, `Suit`, `Rank`, `Card`)
//! - Step records produced by the recorders (`StepKind`, `StepRecord`)
//! - Static algorithm metadata (`AlgorithmDescriptor`)
//! - Error types (`ShuffleError`)
//!
//! ## Identity Guarantees
//!
//! A card's `id` is immutable and is the sole identity key across
//! permutations. `position` and `highlighted` are derived presentation
//! state and mutate on every permutation or step application.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

// =============================================================================
// SUITS & RANKS
// =============================================================================

/// One of the four French suits, in canonical (suit-major) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Stable lowercase key used to build card ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One of the thirteen ranks, low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in canonical (rank-minor) order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Stable lowercase key used to build card ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// CARD
// =============================================================================

/// Unique, immutable identifier of a card.
///
/// The id is the sole identity key across permutations; `position` is
/// derived and never used for identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card id from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single card in the collection.
///
/// Created once at collection-initialization time and never destroyed
/// individually; only the whole collection is replaced or reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Immutable identity key.
    pub id: CardId,
    /// The card's suit.
    pub suit: Suit,
    /// The card's rank.
    pub rank: Rank,
    /// Current index in the collection. Derived, renumbered on every
    /// permutation or step application.
    pub position: usize,
    /// Playback highlight flag, set by the step applicator.
    pub highlighted: bool,
}

impl Card {
    /// Create a new card at the given position, unhighlighted.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank, position: usize) -> Self {
        Self {
            id,
            suit,
            rank,
            position,
            highlighted: false,
        }
    }
}

// =============================================================================
// STEP RECORDS
// =============================================================================

/// The kind of transformation a step record encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Exchange of exactly two elements.
    Swap,
    /// Relocation of one or more elements per the source/destination pairing.
    Move,
    /// Annotation of a partition boundary; identity pairing, no reordering.
    Split,
    /// Relocation identical to `Move`; kept distinct for presentation.
    Merge,
}

/// One atomic, replayable transformation.
///
/// Records are immutable once produced and consumed strictly in order by
/// the step applicator. All indices are expressed in the replay frame:
/// the single working sequence the applicator maintains, so every record
/// is self-contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Human-readable description of the transformation.
    pub description: String,
    /// Indices highlighted after the record is applied.
    pub affected: Vec<usize>,
    /// The kind of transformation.
    pub kind: StepKind,
    /// Indices the relocated elements are taken from.
    pub sources: Vec<usize>,
    /// Indices the relocated elements land at, pairwise with `sources`.
    pub destinations: Vec<usize>,
}

impl StepRecord {
    /// Build a swap record. Destinations are the reverse pairing of the
    /// sources, both indices are highlighted.
    #[must_use]
    pub fn swap(i: usize, j: usize, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            affected: vec![i, j],
            kind: StepKind::Swap,
            sources: vec![i, j],
            destinations: vec![j, i],
        }
    }

    /// Build a relocation record. The moved elements are highlighted at
    /// their destinations.
    #[must_use]
    pub fn relocate(
        sources: Vec<usize>,
        destinations: Vec<usize>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            affected: destinations.clone(),
            kind: StepKind::Move,
            sources,
            destinations,
        }
    }

    /// Build a split annotation covering `0..len`: identity pairing,
    /// every index highlighted, no reordering.
    #[must_use]
    pub fn split(len: usize, description: impl Into<String>) -> Self {
        let identity: Vec<usize> = (0..len).collect();
        Self {
            description: description.into(),
            affected: identity.clone(),
            kind: StepKind::Split,
            sources: identity.clone(),
            destinations: identity,
        }
    }

    /// Validate the record against a deck of `len` cards.
    ///
    /// Checks index ranges and the per-kind shape invariants:
    /// - `Swap` names exactly two indices, destinations reverse the sources
    /// - `Move`/`Merge` pair sources and destinations one-to-one, without
    ///   repeats on either side
    /// - `Split` carries an identity pairing
    pub fn validate(&self, len: usize) -> Result<(), ShuffleError> {
        for &index in self
            .affected
            .iter()
            .chain(&self.sources)
            .chain(&self.destinations)
        {
            if index >= len {
                return Err(ShuffleError::IndexOutOfRange { index, len });
            }
        }

        match self.kind {
            StepKind::Swap => {
                if self.sources.len() != 2 || self.affected.len() != 2 {
                    return Err(ShuffleError::MalformedRecord(
                        "swap must name exactly two indices".to_string(),
                    ));
                }
                if self.destinations != [self.sources[1], self.sources[0]] {
                    return Err(ShuffleError::MalformedRecord(
                        "swap destinations must reverse its sources".to_string(),
                    ));
                }
            }
            StepKind::Move | StepKind::Merge => {
                if self.sources.len() != self.destinations.len() {
                    return Err(ShuffleError::MalformedRecord(
                        "relocation sources and destinations differ in length".to_string(),
                    ));
                }
                let unique_sources: BTreeSet<usize> = self.sources.iter().copied().collect();
                let unique_destinations: BTreeSet<usize> =
                    self.destinations.iter().copied().collect();
                if unique_sources.len() != self.sources.len()
                    || unique_destinations.len() != self.destinations.len()
                {
                    return Err(ShuffleError::MalformedRecord(
                        "relocation indices must be unique".to_string(),
                    ));
                }
            }
            StepKind::Split => {
                if self.sources != self.destinations {
                    return Err(ShuffleError::MalformedRecord(
                        "split is annotation-only and requires an identity pairing".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

// =============================================================================
// ALGORITHM METADATA
// =============================================================================

/// Static metadata for one shuffle algorithm. One per variant, never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmDescriptor {
    /// Unique key, also the CLI spelling.
    pub name: &'static str,
    /// Human description of the physical technique.
    pub summary: &'static str,
    /// Asymptotic complexity label for one pass.
    pub complexity: &'static str,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the shuffle engine.
///
/// Two families:
/// - Invalid input: empty or oversized decks, unknown algorithm names,
///   mismatched collection lengths
/// - Invariant violation: duplicate ids, records referencing indices
///   outside the deck, malformed record shapes
///
/// Correctness-critical operations (`shuffle`, `record_steps`,
/// `apply_step`) fail fast with these; advisory metrics degrade to a
/// neutral zero instead.
#[derive(Debug, Error)]
pub enum ShuffleError {
    /// An algorithm was handed an empty collection.
    #[error("cannot shuffle an empty deck")]
    EmptyDeck,

    /// The requested algorithm name is not registered.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The collection exceeds the engine's size limit.
    #[error("deck of {len} cards exceeds the maximum of {max}")]
    DeckTooLarge { len: usize, max: usize },

    /// Two collections that must correspond have different lengths.
    #[error("collection lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Two collections do not hold the same multiset of card ids.
    #[error("card {0} is missing from the paired collection")]
    IdMismatch(CardId),

    /// The same card id appears more than once in a collection.
    #[error("duplicate card id: {0}")]
    DuplicateCard(CardId),

    /// A step record references an index outside the deck.
    #[error("record index {index} out of range for deck of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A step record violates its kind's shape invariant.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_and_rank_cover_the_deck() {
        assert_eq!(Suit::ALL.len(), 4);
        assert_eq!(Rank::ALL.len(), 13);
    }

    #[test]
    fn swap_record_reverses_sources() {
        let record = StepRecord::swap(5, 2, "swap");
        assert_eq!(record.sources, vec![5, 2]);
        assert_eq!(record.destinations, vec![2, 5]);
        assert_eq!(record.affected, vec![5, 2]);
        assert!(record.validate(6).is_ok());
    }

    #[test]
    fn swap_record_rejects_tampered_destinations() {
        let mut record = StepRecord::swap(1, 2, "swap");
        record.destinations = vec![1, 2];
        assert!(matches!(
            record.validate(3),
            Err(ShuffleError::MalformedRecord(_))
        ));
    }

    #[test]
    fn relocation_rejects_length_mismatch() {
        let record = StepRecord::relocate(vec![0, 1], vec![2], "move");
        assert!(matches!(
            record.validate(3),
            Err(ShuffleError::MalformedRecord(_))
        ));
    }

    #[test]
    fn relocation_rejects_repeated_indices() {
        let record = StepRecord::relocate(vec![0, 0], vec![1, 2], "move");
        assert!(matches!(
            record.validate(3),
            Err(ShuffleError::MalformedRecord(_))
        ));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let record = StepRecord::swap(0, 9, "swap");
        assert!(matches!(
            record.validate(3),
            Err(ShuffleError::IndexOutOfRange { index: 9, len: 3 })
        ));
    }

    #[test]
    fn split_requires_identity_pairing() {
        let record = StepRecord::split(4, "split");
        assert!(record.validate(4).is_ok());

        let mut tampered = StepRecord::split(4, "split");
        tampered.destinations.reverse();
        assert!(matches!(
            tampered.validate(4),
            Err(ShuffleError::MalformedRecord(_))
        ));
    }

    #[test]
    fn self_swap_is_valid() {
        // Fisher-Yates may draw j == i; the record is a legal no-op.
        let record = StepRecord::swap(3, 3, "swap");
        assert!(record.validate(4).is_ok());
    }
}
