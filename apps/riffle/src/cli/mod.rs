//! # Riffle CLI Module
//!
//! This module implements the CLI interface for Riffle.
//!
//! ## Available Commands
//!
//! - `list` - Show the registered shuffle algorithms
//! - `shuffle` - Run one bulk shuffle and score the result
//! - `steps` - Record a step list, optionally replaying it at a timed pace
//! - `compare` - Run timed trials of two algorithms and pick per-metric winners

mod commands;

use clap::{Parser, Subcommand};
use riffle_core::{AlgorithmKind, ShuffleError};

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Riffle - Shuffle Visualizer
///
/// A deterministic card-shuffle engine with replayable step lists.
/// Every random draw comes from a seedable source, so any run can be
/// reproduced exactly.
#[derive(Parser, Debug)]
#[command(name = "riffle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Seed for the random source (omit for OS entropy)
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Number of cards in the collection
    #[arg(short = 'n', long, global = true, default_value = "52")]
    pub cards: usize,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the registered shuffle algorithms
    List,

    /// Run one bulk shuffle and score the result
    Shuffle {
        /// Algorithm to run (exchange, riffle, overhand, hindu)
        #[arg(short, long)]
        algorithm: AlgorithmKind,
    },

    /// Record a step list, optionally replaying it at a timed pace
    Steps {
        /// Algorithm to record (exchange, riffle, overhand, hindu)
        #[arg(short, long)]
        algorithm: AlgorithmKind,

        /// Replay the steps against the deck with a timer
        #[arg(short, long)]
        play: bool,

        /// Base delay between steps in milliseconds
        #[arg(long, default_value = "500")]
        interval_ms: u64,

        /// Playback speed multiplier, clamped to 0.5-3.0
        #[arg(long, default_value = "1.0")]
        speed: f64,
    },

    /// Run timed trials of two algorithms and pick per-metric winners
    Compare {
        /// First algorithm
        #[arg(short = 'a', long)]
        first: AlgorithmKind,

        /// Second algorithm
        #[arg(short = 'b', long)]
        second: AlgorithmKind,

        /// Number of trials per algorithm
        #[arg(short, long, default_value = "25")]
        trials: usize,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), ShuffleError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::List) => cmd_list(json_mode),
        Some(Commands::Shuffle { algorithm }) => {
            cmd_shuffle(algorithm, cli.cards, cli.seed, json_mode)
        }
        Some(Commands::Steps {
            algorithm,
            play,
            interval_ms,
            speed,
        }) => cmd_steps(algorithm, cli.cards, cli.seed, json_mode, play, interval_ms, speed).await,
        Some(Commands::Compare {
            first,
            second,
            trials,
        }) => cmd_compare(first, second, trials, cli.cards, cli.seed, json_mode),
        None => {
            // No subcommand - list algorithms by default
            cmd_list(json_mode)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
