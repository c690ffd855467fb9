// src/cli.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command line surface
//!
//! The historical flags are single-dash long options (`-t1 10 -max 1000`),
//! which clap would otherwise read as clusters of short flags. They are
//! rewritten to their double-dash form before parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::constants::{DEFAULT_MAX, DEFAULT_ROWS};
use crate::generator::GeneratorConfig;

/// Long options that are also accepted with a single dash
const LEGACY_FLAGS: [&str; 4] = ["t1", "t2", "t3", "max"];

/// Generate random fixture tables t1, t2, t3 for a SQL join benchmark
#[derive(Parser, Debug, Clone)]
#[command(name = "joinfix", version)]
#[command(after_help = "Example: joinfix -t1 10000 -t2 1000 -t3 1000 -max 1000")]
pub struct Cli {
    /// Size of t1 table
    #[arg(long = "t1", value_name = "ROWS", default_value_t = DEFAULT_ROWS, allow_negative_numbers = true)]
    pub t1: i64,

    /// Size of t2 table
    #[arg(long = "t2", value_name = "ROWS", default_value_t = DEFAULT_ROWS, allow_negative_numbers = true)]
    pub t2: i64,

    /// Size of t3 table
    #[arg(long = "t3", value_name = "ROWS", default_value_t = DEFAULT_ROWS, allow_negative_numbers = true)]
    pub t3: i64,

    /// Max value (inclusive)
    #[arg(long = "max", value_name = "MAX", default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    pub max: i64,

    /// Seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Directory to write t1, t2, t3 into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse from process arguments, exiting with a usage error on failure
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Parse an explicit argument list (first item is the program name)
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn into_config(self) -> GeneratorConfig {
        GeneratorConfig {
            t1_rows: self.t1,
            t2_rows: self.t2,
            t3_rows: self.t3,
            max_value: self.max,
            seed: self.seed,
            output_dir: self.output_dir,
        }
    }
}

/// Rewrite `-t1`, `-max`, `-t1=5` and friends to their `--` spelling
///
/// Everything after a bare `--` is passed through untouched, as are values
/// that merely look like flags (e.g. `-5`).
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        match arg.to_str().and_then(legacy_long) {
            Some(long) => out.push(OsString::from(long)),
            None => out.push(arg),
        }
    }

    out
}

fn legacy_long(arg: &str) -> Option<String> {
    let body = arg.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }
    let name = body.split_once('=').map_or(body, |(name, _)| name);
    LEGACY_FLAGS
        .contains(&name)
        .then(|| format!("-{}", arg))
}
