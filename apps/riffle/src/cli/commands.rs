//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//!
//! All pacing lives here: the engine applies one record at a time and
//! keeps no playback state, so stopping is simply ceasing to call it.

use riffle_core::{
    AlgorithmKind, Card, ChaChaSource, ShuffleError, StatsStore, apply_step, compare,
    displacement_score, entropy_score, estimate_randomness, ids, list_algorithms, ordered_deck,
    record_steps, shuffle,
};
use std::time::{Duration, Instant};

// =============================================================================
// PLAYBACK LIMITS
// =============================================================================

/// Slowest supported playback multiplier.
const MIN_PLAYBACK_SPEED: f64 = 0.5;

/// Fastest supported playback multiplier.
const MAX_PLAYBACK_SPEED: f64 = 3.0;

/// Build the draw source: seeded for reproducible runs, OS entropy
/// otherwise.
fn make_source(seed: Option<u64>) -> ChaChaSource {
    match seed {
        Some(seed) => ChaChaSource::seeded(seed),
        None => ChaChaSource::from_entropy(),
    }
}

fn format_order(cards: &[Card]) -> String {
    ids(cards)
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// Show the registered shuffle algorithms.
pub fn cmd_list(json_mode: bool) -> Result<(), ShuffleError> {
    let descriptors = list_algorithms();

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&descriptors).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Registered Shuffle Algorithms");
    println!("=============================");
    for descriptor in descriptors {
        println!();
        println!("{}  ({})", descriptor.name, descriptor.complexity);
        println!("  {}", descriptor.summary);
    }

    Ok(())
}

// =============================================================================
// SHUFFLE COMMAND
// =============================================================================

/// Run one bulk shuffle and score the result.
pub fn cmd_shuffle(
    algorithm: AlgorithmKind,
    cards: usize,
    seed: Option<u64>,
    json_mode: bool,
) -> Result<(), ShuffleError> {
    let deck = ordered_deck(cards)?;
    let mut rng = make_source(seed);

    let started = Instant::now();
    let shuffled = shuffle(algorithm, &deck, &mut rng)?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    let displacement = displacement_score(&deck, &shuffled);
    let entropy = entropy_score(&deck, &shuffled);

    tracing::info!(algorithm = %algorithm, cards, elapsed_ms, "shuffle complete");

    if json_mode {
        let output = serde_json::json!({
            "algorithm": algorithm.name(),
            "cards": cards,
            "seed": seed,
            "elapsed_ms": elapsed_ms,
            "displacement_score": displacement,
            "entropy_score": entropy,
            "order": ids(&shuffled).iter().map(|id| id.to_string()).collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Shuffle: {algorithm}");
    println!("========={}", "=".repeat(algorithm.name().len()));
    println!("Cards:        {cards}");
    println!("Elapsed:      {elapsed_ms:.3} ms");
    println!("Displacement: {displacement}/100");
    println!("Entropy:      {entropy}/100");
    println!();
    println!("Order: {}", format_order(&shuffled));

    Ok(())
}

// =============================================================================
// STEPS COMMAND
// =============================================================================

/// Record a step list, optionally replaying it at a timed pace.
pub async fn cmd_steps(
    algorithm: AlgorithmKind,
    cards: usize,
    seed: Option<u64>,
    json_mode: bool,
    play: bool,
    interval_ms: u64,
    speed: f64,
) -> Result<(), ShuffleError> {
    let deck = ordered_deck(cards)?;
    let mut rng = make_source(seed);
    let records = record_steps(algorithm, &deck, &mut rng)?;

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&records).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{} step(s) recorded for {algorithm}", records.len());

    if !play {
        for (index, record) in records.iter().enumerate() {
            println!(
                "{:>4}. [{:?}] {}",
                index + 1,
                record.kind,
                record.description
            );
        }
        return Ok(());
    }

    let speed = speed.clamp(MIN_PLAYBACK_SPEED, MAX_PLAYBACK_SPEED);
    let delay = Duration::from_secs_f64(interval_ms as f64 / 1000.0 / speed);
    tracing::info!(steps = records.len(), ?delay, "starting playback");

    let mut working = deck.clone();
    let mut interrupted = Box::pin(tokio::signal::ctrl_c());

    for (index, record) in records.iter().enumerate() {
        tokio::select! {
            _ = &mut interrupted => {
                tracing::info!("playback stopped at step {}", index);
                return Ok(());
            }
            () = tokio::time::sleep(delay) => {
                working = apply_step(&working, record)?;
                println!("{:>4}/{} {}", index + 1, records.len(), record.description);
            }
        }
    }

    println!();
    println!("Final order: {}", format_order(&working));

    Ok(())
}

// =============================================================================
// COMPARE COMMAND
// =============================================================================

/// Run timed trials of two algorithms and pick per-metric winners.
pub fn cmd_compare(
    first: AlgorithmKind,
    second: AlgorithmKind,
    trials: usize,
    cards: usize,
    seed: Option<u64>,
    json_mode: bool,
) -> Result<(), ShuffleError> {
    let deck = ordered_deck(cards)?;
    let mut store = StatsStore::new();

    tracing::info!(%first, %second, trials, cards, "running comparison");

    for kind in [first, second] {
        let mut rng = make_source(seed);
        for _ in 0..trials {
            let records = record_steps(kind, &deck, &mut rng)?;

            let started = Instant::now();
            let shuffled = shuffle(kind, &deck, &mut rng)?;
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            let score = estimate_randomness(&deck, &shuffled);
            store.update(kind, score, elapsed_ms, records.len());
        }
    }

    let (Some(first_stats), Some(second_stats)) = (store.get(first), store.get(second)) else {
        return Ok(());
    };
    let winners = compare(first_stats, second_stats);

    if json_mode {
        let output = serde_json::json!({
            "trials": trials,
            "cards": cards,
            "first": first_stats,
            "second": second_stats,
            "winners": winners,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Algorithm Comparison ({trials} trials, {cards} cards)");
    println!("====================");
    for stats in [first_stats, second_stats] {
        println!();
        println!("{}:", stats.algorithm);
        println!("  randomness: {:.1}/100", stats.randomness_score);
        println!("  avg steps:  {:.1}", stats.average_step_count);
        println!("  avg time:   {:.3} ms", stats.average_execution_ms());
    }
    println!();
    println!("Winners:");
    println!("  randomness: {}", winners.randomness);
    println!("  speed:      {}", winners.speed);
    println!("  steps:      {}", winners.steps);

    Ok(())
}
