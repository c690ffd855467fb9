// src/lib.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random fixture tables for SQL join benchmarks
//!
//! This library provides:
//! - Three plain-text tables (`t1`, `t2`, `t3`): a row count line, then one
//!   line of two random integers per row
//! - Uniform sampling over the inclusive range `[0, max]`
//! - Xoshiro256++ streams per table, reproducible with an explicit seed
//! - The `joinfix` command line (`-t1 -t2 -t3 -max`)

// Core modules
pub mod cli;
pub mod constants;
pub mod error;
pub mod generator;

// Re-export main API
pub use error::{GenError, Result};
pub use generator::{
    generate_table, generate_tables, write_table, GeneratorConfig, TableGenerator, TableSpec,
    TableSummary,
};
