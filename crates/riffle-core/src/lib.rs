//! # riffle-core
//!
//! The deterministic shuffle engine for Riffle - THE ENGINE.
//!
//! This crate implements the CORE of the visualizer: four permutation
//! algorithms over an ordered card collection, each paired with a
//! step-recording mode whose replay reproduces exactly the bulk result,
//! plus a randomness-quality estimator and a running statistics
//! aggregator.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is pure and synchronous: no async, no network, no persistence
//! - Never mutates its input; every call returns a fresh sequence
//! - Draws randomness only through an injected `RandomSource`
//! - Keeps no cursor or process-lifetime state; playback pacing and
//!   statistics ownership belong to the caller
//!
//! ## Bulk/Step Equivalence
//!
//! Each algorithm is implemented once as a step generator: every
//! transformation is materialized as a `StepRecord` and applied through
//! the same in-place path the public applicator uses. Bulk mode discards
//! the records, recording mode collects them, so the two modes cannot
//! diverge for a shared draw trace.

// =============================================================================
// MODULES
// =============================================================================

pub mod algorithms;
pub mod apply;
pub mod deck;
pub mod estimator;
pub mod primitives;
pub mod rng;
pub mod stats;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    AlgorithmDescriptor, Card, CardId, Rank, ShuffleError, StepKind, StepRecord, Suit,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use algorithms::{AlgorithmKind, list_algorithms, record_steps, shuffle};
pub use apply::{apply_step, replay};
pub use deck::{clear_highlights, ids, ordered_deck, reset_positions, standard_deck};
pub use estimator::{
    displacement_profile, displacement_score, entropy_score, estimate_randomness,
};
pub use rng::{ChaChaSource, RandomSource, TraceSource};

// =============================================================================
// RE-EXPORTS: Statistics
// =============================================================================

pub use stats::{AlgorithmStats, Comparison, StatsStore, compare};
