// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::ColumnType;

/// Errors returned when building, validating or addressing a [`Table`](crate::Table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A schema must declare at least one column.
    EmptySchema,
    /// A column name was the empty string.
    EmptyColumnName,
    /// Two columns share a name.
    DuplicateColumn(String),
    /// No column with this name exists.
    UnknownColumn(String),
    /// A row had the wrong number of fields.
    ArityMismatch {
        /// Number of columns in the schema.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },
    /// A present value does not match its column's declared type.
    TypeMismatch {
        /// Column name.
        column: String,
        /// Declared column type.
        expected: ColumnType,
        /// Type of the offending value.
        found: ColumnType,
    },
    /// A float field held `NaN` or an infinity; absent values must use the missing marker.
    NonFiniteValue {
        /// Column name.
        column: String,
    },
    /// A row position past the end of the table.
    RowOutOfRange(usize),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySchema => f.write_str("schema has no columns"),
            Self::EmptyColumnName => f.write_str("column name is empty"),
            Self::DuplicateColumn(name) => write!(f, "duplicate column `{name}`"),
            Self::UnknownColumn(name) => write!(f, "unknown column `{name}`"),
            Self::ArityMismatch { expected, found } => {
                write!(f, "row has {found} fields, schema has {expected} columns")
            }
            Self::TypeMismatch {
                column,
                expected,
                found,
            } => write!(f, "column `{column}` expects {expected}, got {found}"),
            Self::NonFiniteValue { column } => {
                write!(f, "column `{column}` holds a non-finite float")
            }
            Self::RowOutOfRange(row) => write!(f, "row {row} is out of range"),
        }
    }
}

impl core::error::Error for TableError {}
