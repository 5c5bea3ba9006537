//! # Randomness Estimator
//!
//! Displacement-based and entropy-based scores of how well a permutation
//! mixed the original order.
//!
//! Both scores are advisory metrics: on mismatched inputs they degrade
//! to a neutral zero instead of failing. Callers that need the strict
//! contract use `displacement_profile`, which reports the mismatch.

use crate::primitives::{DISPLACED_FRACTION_WEIGHT, MEAN_DISPLACEMENT_WEIGHT};
use crate::types::{Card, ShuffleError};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// DISPLACEMENT PROFILE
// =============================================================================

/// Per-card displacement magnitudes between two orderings of the same
/// collection: `d = |new index - original index|`, in shuffled order.
///
/// Strict variant: fails on length mismatch, duplicate ids, or an id
/// present in one collection but not the other.
pub fn displacement_profile(
    original: &[Card],
    shuffled: &[Card],
) -> Result<Vec<usize>, ShuffleError> {
    if original.len() != shuffled.len() {
        return Err(ShuffleError::LengthMismatch {
            left: original.len(),
            right: shuffled.len(),
        });
    }

    let mut index_of = BTreeMap::new();
    for (index, card) in original.iter().enumerate() {
        if index_of.insert(&card.id, index).is_some() {
            return Err(ShuffleError::DuplicateCard(card.id.clone()));
        }
    }

    let mut seen = BTreeSet::new();
    shuffled
        .iter()
        .enumerate()
        .map(|(new_index, card)| {
            if !seen.insert(&card.id) {
                return Err(ShuffleError::DuplicateCard(card.id.clone()));
            }
            index_of
                .get(&card.id)
                .map(|&old_index| new_index.abs_diff(old_index))
                .ok_or_else(|| ShuffleError::IdMismatch(card.id.clone()))
        })
        .collect()
}

// =============================================================================
// SCORES
// =============================================================================

/// Displacement score, 0-100.
///
/// `round(100 * (0.6 * displacedFraction + 0.4 * normalizedMeanDisplacement))`
/// where the mean displacement is normalized by n/2 and capped at 1.
/// Fails closed to 0 on mismatched inputs.
#[must_use]
pub fn displacement_score(original: &[Card], shuffled: &[Card]) -> u8 {
    match displacement_profile(original, shuffled) {
        Ok(profile) => displacement_from_profile(&profile),
        Err(_) => 0,
    }
}

/// Entropy score, 0-100.
///
/// Shannon entropy (bits) of the displacement-magnitude histogram over
/// buckets `0..=max(d)`, normalized by `log2(bucket count)`. Defined as
/// 0 when nothing moved. Fails closed to 0 on mismatched inputs.
#[must_use]
pub fn entropy_score(original: &[Card], shuffled: &[Card]) -> u8 {
    match displacement_profile(original, shuffled) {
        Ok(profile) => entropy_from_profile(&profile),
        Err(_) => 0,
    }
}

/// The headline randomness score consumed by the statistics layer.
/// Equal to the displacement score.
#[must_use]
pub fn estimate_randomness(original: &[Card], shuffled: &[Card]) -> u8 {
    displacement_score(original, shuffled)
}

fn displacement_from_profile(profile: &[usize]) -> u8 {
    let n = profile.len();
    if n == 0 {
        return 0;
    }

    let displaced = profile.iter().filter(|&&d| d != 0).count();
    let displaced_fraction = displaced as f64 / n as f64;
    let mean = profile.iter().sum::<usize>() as f64 / n as f64;
    let normalized_mean = (mean / (n as f64 / 2.0)).min(1.0);

    let score = 100.0
        * (DISPLACED_FRACTION_WEIGHT * displaced_fraction
            + MEAN_DISPLACEMENT_WEIGHT * normalized_mean);
    score.round().clamp(0.0, 100.0) as u8
}

fn entropy_from_profile(profile: &[usize]) -> u8 {
    let Some(&max_displacement) = profile.iter().max() else {
        return 0;
    };
    if max_displacement == 0 {
        return 0;
    }

    let mut histogram = vec![0usize; max_displacement + 1];
    for &d in profile {
        histogram[d] += 1;
    }

    let total = profile.len() as f64;
    let bits: f64 = histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    let normalized = bits / ((max_displacement + 1) as f64).log2();
    (normalized * 100.0).round().clamp(0.0, 100.0) as u8
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::ordered_deck;

    #[test]
    fn identity_permutation_scores_zero() {
        let deck = ordered_deck(52).expect("deck");
        assert_eq!(displacement_score(&deck, &deck), 0);
        assert_eq!(entropy_score(&deck, &deck), 0);
        assert_eq!(estimate_randomness(&deck, &deck), 0);
    }

    #[test]
    fn full_reversal_maxes_the_displacement_score() {
        // N=4 reversal: every card displaced, mean displacement 2 = n/2.
        let deck = ordered_deck(4).expect("deck");
        let mut reversed = deck.clone();
        reversed.reverse();

        assert_eq!(displacement_score(&deck, &reversed), 100);
    }

    #[test]
    fn reversal_entropy_is_half_of_max() {
        // N=4 reversal: displacements [3,1,1,3], two equiprobable buckets
        // out of four possible = 1 bit / log2(4) bits.
        let deck = ordered_deck(4).expect("deck");
        let mut reversed = deck.clone();
        reversed.reverse();

        assert_eq!(entropy_score(&deck, &reversed), 50);
    }

    #[test]
    fn single_adjacent_swap_scores_forty() {
        // N=4, first two cards swapped: half the deck displaced by 1.
        // 100 * (0.6 * 0.5 + 0.4 * (0.5 / 2)) = 40.
        let deck = ordered_deck(4).expect("deck");
        let mut swapped = deck.clone();
        swapped.swap(0, 1);

        assert_eq!(displacement_score(&deck, &swapped), 40);
    }

    #[test]
    fn mismatched_lengths_fail_closed() {
        let deck = ordered_deck(10).expect("deck");
        let short = ordered_deck(5).expect("deck");

        assert_eq!(displacement_score(&deck, &short), 0);
        assert_eq!(entropy_score(&deck, &short), 0);
        assert!(matches!(
            displacement_profile(&deck, &short),
            Err(ShuffleError::LengthMismatch { left: 10, right: 5 })
        ));
    }

    #[test]
    fn mismatched_ids_fail_closed() {
        let deck = ordered_deck(5).expect("deck");
        let mut other = deck.clone();
        other[2].id = crate::types::CardId::new("joker");

        assert_eq!(displacement_score(&deck, &other), 0);
        assert!(matches!(
            displacement_profile(&deck, &other),
            Err(ShuffleError::IdMismatch(_))
        ));
    }

    #[test]
    fn scores_are_symmetric_in_their_inputs() {
        // |new - old| does not care which ordering is "original".
        let deck = ordered_deck(8).expect("deck");
        let mut permuted = deck.clone();
        permuted.swap(0, 5);
        permuted.swap(2, 7);

        assert_eq!(
            displacement_score(&deck, &permuted),
            displacement_score(&permuted, &deck)
        );
        assert_eq!(
            entropy_score(&deck, &permuted),
            entropy_score(&permuted, &deck)
        );
    }

    #[test]
    fn profile_is_reported_in_shuffled_order() {
        let deck = ordered_deck(3).expect("deck");
        let mut rotated = deck.clone();
        rotated.rotate_left(1);

        let profile = displacement_profile(&deck, &rotated).expect("profile");
        assert_eq!(profile, vec![1, 1, 2]);
    }
}
