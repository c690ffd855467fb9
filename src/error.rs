// src/error.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

/// Errors raised while writing fixture tables
#[derive(Debug, Error)]
pub enum GenError {
    /// Creating, writing or flushing a table file failed
    #[error("failed to write table {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Values cannot be drawn from `[0, max]` when `max` is negative
    #[error("max value {max} is negative, cannot generate {rows} rows")]
    InvalidMax { max: i64, rows: i64 },

    /// Output directory does not exist or is not a directory
    #[error("output directory {path} does not exist", path = .path.display())]
    MissingOutputDir { path: PathBuf },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
