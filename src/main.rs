// src/main.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Benchmark fixture generator. Usage example:
//!
//! ```text
//! joinfix -t1 10000 -t2 1000 -t3 1000 -max 1000
//! ```
//!
//! Then run the join benchmark in the same directory as the generated files.

use anyhow::Context;
use joinfix::cli::Cli;
use joinfix::generate_tables;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Usage errors exit here with status 2, before any file is touched
    let cli = Cli::parse_args();

    // RUST_LOG wins over -v
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .init();

    let summaries =
        generate_tables(cli.into_config()).context("failed to generate fixture tables")?;

    let pairs: u64 = summaries.iter().map(|s| s.pairs).sum();
    tracing::info!(
        "Generated {} tables ({} pair lines)",
        summaries.len(),
        pairs
    );

    Ok(())
}
