//! # Card Collection Model
//!
//! Construction and maintenance of the ordered card collection.
//!
//! A collection is an ordered `Vec<Card>` with unique ids. The canonical
//! ordering is suit-major, rank-minor. Collections of any positive size
//! are supported; beyond one full deck the ids gain a `#copy` suffix so
//! uniqueness holds for any size.

use crate::primitives::{MAX_DECK_SIZE, STANDARD_DECK_SIZE};
use crate::types::{Card, CardId, Rank, ShuffleError, Suit};
use std::collections::BTreeSet;

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Create an ordered collection of `size` cards in canonical order.
///
/// Positions are numbered from zero and no card is highlighted.
pub fn ordered_deck(size: usize) -> Result<Vec<Card>, ShuffleError> {
    if size == 0 {
        return Err(ShuffleError::EmptyDeck);
    }
    if size > MAX_DECK_SIZE {
        return Err(ShuffleError::DeckTooLarge {
            len: size,
            max: MAX_DECK_SIZE,
        });
    }
    Ok(build_ordered(size))
}

/// Create the standard 52-card collection in canonical order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    build_ordered(STANDARD_DECK_SIZE)
}

fn build_ordered(size: usize) -> Vec<Card> {
    (0..size)
        .map(|index| {
            let suit = Suit::ALL[(index / Rank::ALL.len()) % Suit::ALL.len()];
            let rank = Rank::ALL[index % Rank::ALL.len()];
            let copy = index / STANDARD_DECK_SIZE;
            let id = if copy == 0 {
                CardId::new(format!("{}-{}", suit.key(), rank.key()))
            } else {
                CardId::new(format!("{}-{}#{}", suit.key(), rank.key(), copy))
            };
            Card::new(id, suit, rank, index)
        })
        .collect()
}

// =============================================================================
// MAINTENANCE
// =============================================================================

/// Return a copy with every `position` renumbered to its current index.
#[must_use]
pub fn reset_positions(deck: &[Card]) -> Vec<Card> {
    let mut fresh = deck.to_vec();
    renumber(&mut fresh);
    fresh
}

/// Return a copy with every highlight flag cleared.
#[must_use]
pub fn clear_highlights(deck: &[Card]) -> Vec<Card> {
    let mut fresh = deck.to_vec();
    for card in &mut fresh {
        card.highlighted = false;
    }
    fresh
}

/// Renumber positions in place to match index order.
pub(crate) fn renumber(deck: &mut [Card]) {
    for (index, card) in deck.iter_mut().enumerate() {
        card.position = index;
    }
}

/// Highlight exactly the affected indices, clearing all others.
pub(crate) fn set_highlights(deck: &mut [Card], affected: &[usize]) {
    for card in deck.iter_mut() {
        card.highlighted = false;
    }
    for &index in affected {
        if let Some(card) = deck.get_mut(index) {
            card.highlighted = true;
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check the collection invariants an algorithm relies on: at least one
/// card, bounded size, no duplicate ids.
pub fn validate(deck: &[Card]) -> Result<(), ShuffleError> {
    if deck.is_empty() {
        return Err(ShuffleError::EmptyDeck);
    }
    if deck.len() > MAX_DECK_SIZE {
        return Err(ShuffleError::DeckTooLarge {
            len: deck.len(),
            max: MAX_DECK_SIZE,
        });
    }

    let mut seen = BTreeSet::new();
    for card in deck {
        if !seen.insert(&card.id) {
            return Err(ShuffleError::DuplicateCard(card.id.clone()));
        }
    }

    Ok(())
}

/// The ordered ids of a collection.
#[must_use]
pub fn ids(deck: &[Card]) -> Vec<CardId> {
    deck.iter().map(|card| card.id.clone()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
