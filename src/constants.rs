// src/constants.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Default row count for each of the three tables
pub const DEFAULT_ROWS: i64 = 5;

/// Default inclusive upper bound for generated values
pub const DEFAULT_MAX: i64 = 100;

/// Fixed table file names, written in this order
pub const TABLE_NAMES: [&str; 3] = ["t1", "t2", "t3"];

/// Write buffer per table file (64 KiB)
/// Large enough that a pair line never straddles more than one flush
pub const WRITE_BUFFER_SIZE: usize = 64 * 1024;
