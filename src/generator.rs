// src/generator.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture table generation for join benchmarks
//!
//! Each table file is plain text: the row count on its own line, then one
//! line per row holding two integers drawn uniformly from `[0, max]`. There
//! is no newline after the last pair line.

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::*;
use crate::error::{GenError, Result};

/// Configuration for one generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Row count for table `t1`
    pub t1_rows: i64,
    /// Row count for table `t2`
    pub t2_rows: i64,
    /// Row count for table `t3`
    pub t3_rows: i64,
    /// Inclusive upper bound for every generated value
    pub max_value: i64,
    /// Random seed for reproducible output (None = use time + urandom)
    /// When set, the same seed produces byte-identical tables
    pub seed: Option<u64>,
    /// Directory the table files are written into
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            t1_rows: DEFAULT_ROWS,
            t2_rows: DEFAULT_ROWS,
            t3_rows: DEFAULT_ROWS,
            max_value: DEFAULT_MAX,
            seed: None,                     // Use time + urandom
            output_dir: PathBuf::from("."), // Current working directory
        }
    }
}

impl GeneratorConfig {
    /// Tables in write order
    pub fn tables(&self) -> [TableSpec; 3] {
        let rows = [self.t1_rows, self.t2_rows, self.t3_rows];
        std::array::from_fn(|i| TableSpec {
            name: TABLE_NAMES[i],
            rows: rows[i],
        })
    }
}

/// One logical table: its file name and declared row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub rows: i64,
}

/// What was written for a single table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: String,
    pub path: PathBuf,
    /// Row count written on the first line
    pub rows: i64,
    /// Pair lines actually emitted (0 for zero or negative counts)
    pub pairs: u64,
}

/// Write one table in fixture format to `out`
///
/// Emits `"{rows}\n"` followed by `rows` pair lines joined with `\n`. A
/// negative `rows` is written verbatim and produces no pair lines.
///
/// # Returns
/// Number of pair lines written
///
/// # Errors
/// `InvalidInput` if pairs must be drawn but `max` is negative, otherwise
/// whatever the writer reports. The range check lives here for callers that
/// write into their own sinks; [`generate_table`] checks earlier so that it
/// can fail with [`GenError::InvalidMax`] before touching the file.
pub fn write_table<W, R>(out: &mut W, rows: i64, max: i64, rng: &mut R) -> std::io::Result<u64>
where
    W: Write + ?Sized,
    R: Rng,
{
    if rows > 0 && max < 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("cannot sample from [0, {}]", max),
        ));
    }

    writeln!(out, "{}", rows)?;

    let mut pairs = 0u64;
    for i in 0..rows.max(0) {
        if i != 0 {
            out.write_all(b"\n")?;
        }
        let a = rng.random_range(0..=max);
        let b = rng.random_range(0..=max);
        write!(out, "{} {}", a, b)?;
        pairs += 1;
    }

    Ok(pairs)
}

/// Create (or truncate) `path` and write one table into it
///
/// The file is flushed before returning so that late write failures are
/// reported here rather than lost on drop. An unusable `max` is rejected
/// before the file is opened, so an existing file at `path` is left intact.
pub fn generate_table<R: Rng>(
    path: &Path,
    rows: i64,
    max: i64,
    rng: &mut R,
) -> Result<TableSummary> {
    if rows > 0 && max < 0 {
        return Err(GenError::InvalidMax { max, rows });
    }

    tracing::debug!("Creating table file {}", path.display());
    let file = File::create(path).map_err(|e| GenError::io(path, e))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    let pairs = write_table(&mut writer, rows, max, rng).map_err(|e| GenError::io(path, e))?;

    writer.flush().map_err(|e| GenError::io(path, e))?;
    tracing::debug!("Flushed {} pair lines to {}", pairs, path.display());

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(TableSummary {
        name,
        path: path.to_path_buf(),
        rows,
        pairs,
    })
}

/// Writes the three fixture tables for a configuration
///
/// Every table gets its own Xoshiro256++ stream derived from the base seed
/// and the table index, so a table's content does not depend on the row
/// counts of the tables before it.
pub struct TableGenerator {
    config: GeneratorConfig,
    seed_base: u64,
}

impl TableGenerator {
    /// Create a generator, resolving the base seed
    pub fn new(config: GeneratorConfig) -> Self {
        let seed_base = config.seed.unwrap_or_else(generate_call_entropy);

        tracing::debug!(
            "Creating TableGenerator: seed={} ({}), max={}, output_dir={}",
            seed_base,
            if config.seed.is_some() {
                "deterministic"
            } else {
                "non-deterministic"
            },
            config.max_value,
            config.output_dir.display()
        );

        Self { config, seed_base }
    }

    /// Base seed in use (the configured seed, or the entropy drawn at construction)
    pub fn seed_base(&self) -> u64 {
        self.seed_base
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// RNG stream for the table at `index` in write order
    fn table_rng(&self, index: usize) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(self.seed_base.wrapping_add(index as u64))
    }

    /// Write `t1`, `t2`, `t3` in order
    ///
    /// Stops at the first failure. Tables already written stay on disk.
    pub fn run(&self) -> Result<Vec<TableSummary>> {
        let dir = &self.config.output_dir;
        if !dir.is_dir() {
            return Err(GenError::MissingOutputDir { path: dir.clone() });
        }

        let mut summaries = Vec::with_capacity(TABLE_NAMES.len());
        for (index, table) in self.config.tables().iter().enumerate() {
            let path = dir.join(table.name);
            let mut rng = self.table_rng(index);

            let summary = generate_table(&path, table.rows, self.config.max_value, &mut rng)?;
            tracing::info!(
                "Wrote table {}: rows={}, max={}, path={}",
                summary.name,
                summary.rows,
                self.config.max_value,
                summary.path.display()
            );
            summaries.push(summary);
        }

        Ok(summaries)
    }
}

/// Simple API: write all three tables with the given configuration
pub fn generate_tables(config: GeneratorConfig) -> Result<Vec<TableSummary>> {
    TableGenerator::new(config).run()
}

/// Generate per-call entropy from time + urandom
fn generate_call_entropy() -> u64 {
    let time_entropy = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;

    let urandom_entropy: u64 = {
        let mut rng = rand::rng();
        rng.next_u64()
    };

    time_entropy.wrapping_add(urandom_entropy)
}
