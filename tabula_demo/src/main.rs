// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary runs for the bundled datasets.
//!
//! Each run generates its dataset, persists it as delimited text, loads it back and prints a
//! cleaned summary plus the plain data behind four charts. Files go to `$TABULA_OUT_DIR`
//! (default: the system temp dir). Log verbosity follows `RUST_LOG` (default `info`).

mod iris;
mod report;
mod sales;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tabula_core::TableError;
use tabula_io::{LoadError, WriteError};
use tabula_transforms::TransformError;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Anything that stops a dataset run.
#[derive(Debug, Error)]
enum RunError {
    #[error("building table: {0}")]
    Table(#[from] TableError),
    #[error("saving dataset: {0}")]
    Write(#[from] WriteError),
    #[error("loading dataset: {0}")]
    Load(#[from] LoadError),
    #[error("summarizing: {0}")]
    Transform(#[from] TransformError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let out_dir = env::var_os("TABULA_OUT_DIR").map_or_else(env::temp_dir, PathBuf::from);
    tracing::info!(out_dir = %out_dir.display(), "starting summary runs");

    let mut ok = true;
    for (name, result) in [
        ("sales", sales::run(&out_dir)),
        ("iris", iris::run(&out_dir)),
    ] {
        if let Err(err) = result {
            tracing::error!(dataset = name, %err, "run halted");
            ok = false;
        }
    }
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
