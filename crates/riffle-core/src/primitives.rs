//! # Engine Constants
//!
//! Hardcoded runtime constants for the Riffle engine.
//!
//! These are compiled into the binary and immutable at runtime. The
//! algorithms are deterministic in shape; only the injected random
//! source varies between runs.

/// Number of cards in a standard deck (4 suits x 13 ranks).
pub const STANDARD_DECK_SIZE: usize = 52;

/// Largest group an overhand pass may lift from the top of the pile.
///
/// Group sizes are drawn uniformly from `[1, min(7, remaining)]`.
pub const OVERHAND_MAX_GROUP: usize = 7;

/// Largest packet a hindu pass may draw from the bottom of the pile.
///
/// Packet sizes are drawn uniformly from `[1, min(6, remaining)]`.
pub const HINDU_MAX_PACKET: usize = 6;

/// Weight of the displaced-card fraction in the displacement score.
pub const DISPLACED_FRACTION_WEIGHT: f64 = 0.6;

/// Weight of the normalized mean displacement in the displacement score.
pub const MEAN_DISPLACEMENT_WEIGHT: f64 = 0.4;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum number of cards a single collection may hold.
///
/// Collections larger than this are rejected by the algorithm entry
/// points. This bounds the memory cost of step recording, which emits
/// one record per relocation.
pub const MAX_DECK_SIZE: usize = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_weights_sum_to_one() {
        let sum = DISPLACED_FRACTION_WEIGHT + MEAN_DISPLACEMENT_WEIGHT;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn standard_deck_is_suits_times_ranks() {
        assert_eq!(STANDARD_DECK_SIZE, 4 * 13);
    }
}
