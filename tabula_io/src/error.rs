// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`load_path`](crate::load_path) and [`load_reader`](crate::load_reader).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source does not exist.
    #[error("source not found: {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The source could not be parsed into the expected column structure.
    #[error("malformed input at line {line}: {reason}")]
    Malformed {
        /// 1-based line number (the header is line 1).
        line: u64,
        /// What was wrong.
        reason: String,
    },
    /// Any other read failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::malformed(
                line,
                format!("expected {expected_len} fields, found {len}"),
            ),
            csv::ErrorKind::Utf8 { err, .. } => Self::malformed(line, err.to_string()),
            other => Self::malformed(line, format!("{other:?}")),
        }
    }
}

/// Errors returned when persisting a table.
#[derive(Debug, Error)]
pub enum WriteError {
    /// A present category was the empty string, which the format cannot tell apart from the
    /// missing marker.
    #[error("column `{column}` has an empty category at row {row_key}")]
    EmptyCategory {
        /// Column name.
        column: String,
        /// Key of the offending row.
        row_key: u64,
    },
    /// The delimited-text writer failed.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// The destination could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
