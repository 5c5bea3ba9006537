//! # Riffle - Shuffle Visualizer CLI
//!
//! The main binary for the Riffle deterministic shuffle engine.
//!
//! This application provides:
//! - CLI commands over the engine (shuffle, steps, compare, list)
//! - Timed step playback at an adjustable pace
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              apps/riffle (THE BINARY)         │
//! │                                               │
//! │  ┌─────────────┐        ┌──────────────────┐  │
//! │  │   CLI       │        │  Step Playback   │  │
//! │  │  (clap)     │        │  (tokio timers)  │  │
//! │  └──────┬──────┘        └────────┬─────────┘  │
//! │         │                        │            │
//! │         └───────────┬────────────┘            │
//! │                     ▼                         │
//! │             ┌───────────────┐                 │
//! │             │  riffle-core  │                 │
//! │             │ (THE ENGINE)  │                 │
//! │             └───────────────┘                 │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! riffle list
//! riffle shuffle -a riffle --seed 42
//! riffle steps -a overhand --play --interval-ms 400 --speed 2.0
//! riffle compare -a exchange -b overhand --trials 100
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — RIFFLE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("RIFFLE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "riffle=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Riffle startup banner.
fn print_banner() {
    println!(
        r#"
  riffle v{}

  Deterministic • Replayable • Scored
"#,
        env!("CARGO_PKG_VERSION")
    );
}
