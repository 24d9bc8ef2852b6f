// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;
use core::fmt;

use tabula_core::Schema;

/// Errors returned by the summary transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The named column does not exist in the table.
    UnknownColumn(String),
    /// A numeric operation was requested on a category column.
    NotNumeric(String),
    /// The column has no valid (non-missing) values, so statistics are undefined.
    EmptyColumn(String),
    /// A histogram was requested with zero bins.
    ZeroBins,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColumn(name) => write!(f, "unknown column `{name}`"),
            Self::NotNumeric(name) => write!(f, "column `{name}` is not numeric"),
            Self::EmptyColumn(name) => write!(f, "column `{name}` has no valid values"),
            Self::ZeroBins => f.write_str("histogram needs at least one bin"),
        }
    }
}

impl core::error::Error for TransformError {}

/// Resolve a column position by name.
pub(crate) fn column_index(schema: &Schema, name: &str) -> Result<usize, TransformError> {
    schema
        .index_of(name)
        .ok_or_else(|| TransformError::UnknownColumn(String::from(name)))
}

/// Resolve a column position by name, requiring a numeric column.
pub(crate) fn numeric_column_index(schema: &Schema, name: &str) -> Result<usize, TransformError> {
    let idx = column_index(schema, name)?;
    if !schema.columns()[idx].ty.is_numeric() {
        return Err(TransformError::NotNumeric(String::from(name)));
    }
    Ok(idx)
}
