//! # Statistics Aggregator
//!
//! Running per-algorithm aggregates built from estimator output.
//!
//! The store is owned by the caller and passed by handle; the engine
//! keeps no process-lifetime state of its own. Averages are unweighted
//! means over all historical samples.

use crate::algorithms::AlgorithmKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// PER-ALGORITHM AGGREGATE
// =============================================================================

/// Running aggregates for one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmStats {
    /// The algorithm these aggregates describe.
    pub algorithm: AlgorithmKind,
    /// Number of shuffles recorded.
    pub shuffle_count: u64,
    /// Unweighted mean of recorded step counts.
    pub average_step_count: f64,
    /// Unweighted mean of recorded randomness scores, 0-100.
    pub randomness_score: f64,
    /// Every recorded execution time, in order, in milliseconds.
    pub execution_times_ms: Vec<f64>,
}

impl AlgorithmStats {
    /// A zeroed aggregate for the given algorithm.
    #[must_use]
    pub fn new(algorithm: AlgorithmKind) -> Self {
        Self {
            algorithm,
            shuffle_count: 0,
            average_step_count: 0.0,
            randomness_score: 0.0,
            execution_times_ms: Vec::new(),
        }
    }

    /// Fold one shuffle's sample into the running aggregates:
    /// `newAvg = (oldAvg * oldCount + sample) / newCount`.
    pub fn record_sample(&mut self, randomness: u8, execution_ms: f64, step_count: usize) {
        let old_count = self.shuffle_count as f64;
        let new_count = old_count + 1.0;

        self.average_step_count =
            (self.average_step_count * old_count + step_count as f64) / new_count;
        self.randomness_score =
            (self.randomness_score * old_count + f64::from(randomness)) / new_count;
        self.execution_times_ms.push(execution_ms);
        self.shuffle_count += 1;
    }

    /// Mean execution time over all recorded samples, 0 when empty.
    #[must_use]
    pub fn average_execution_ms(&self) -> f64 {
        if self.execution_times_ms.is_empty() {
            return 0.0;
        }
        self.execution_times_ms.iter().sum::<f64>() / self.execution_times_ms.len() as f64
    }
}

// =============================================================================
// CALLER-OWNED STORE
// =============================================================================

/// Per-algorithm statistics keyed by algorithm, owned by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsStore {
    entries: BTreeMap<AlgorithmKind, AlgorithmStats>,
}

impl StatsStore {
    /// A store with a zeroed entry for every registered algorithm.
    #[must_use]
    pub fn new() -> Self {
        let mut store = Self {
            entries: BTreeMap::new(),
        };
        store.seed();
        store
    }

    fn seed(&mut self) {
        for kind in AlgorithmKind::ALL {
            self.entries.insert(kind, AlgorithmStats::new(kind));
        }
    }

    /// The aggregates for one algorithm.
    #[must_use]
    pub fn get(&self, kind: AlgorithmKind) -> Option<&AlgorithmStats> {
        self.entries.get(&kind)
    }

    /// Fold one shuffle's sample into the named algorithm's aggregates.
    pub fn update(&mut self, kind: AlgorithmKind, randomness: u8, execution_ms: f64, steps: usize) {
        self.entries
            .entry(kind)
            .or_insert_with(|| AlgorithmStats::new(kind))
            .record_sample(randomness, execution_ms, steps);
    }

    /// Reset every algorithm's aggregates simultaneously.
    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.seed();
    }

    /// All aggregates in canonical algorithm order.
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmStats> {
        self.entries.values()
    }
}

// =============================================================================
// COMPARISON
// =============================================================================

/// Per-metric winners between two algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Higher mean randomness score wins.
    pub randomness: AlgorithmKind,
    /// Lower mean execution time wins.
    pub speed: AlgorithmKind,
    /// Lower mean step count wins.
    pub steps: AlgorithmKind,
}

/// Compare two aggregates metric by metric.
///
/// Ties resolve to the first-listed operand; that is the comparison
/// operator's default and the documented tie-break policy.
#[must_use]
pub fn compare(first: &AlgorithmStats, second: &AlgorithmStats) -> Comparison {
    Comparison {
        randomness: if second.randomness_score > first.randomness_score {
            second.algorithm
        } else {
            first.algorithm
        },
        speed: if second.average_execution_ms() < first.average_execution_ms() {
            second.algorithm
        } else {
            first.algorithm
        },
        steps: if second.average_step_count < first.average_step_count {
            second.algorithm
        } else {
            first.algorithm
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================
