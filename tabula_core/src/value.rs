// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell values and column types.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// 64-bit floating point measure.
    Float,
    /// 64-bit signed integer measure.
    Int,
    /// Free-form category label (compared by exact value).
    Category,
}

impl ColumnType {
    /// Returns `true` for [`ColumnType::Float`] and [`ColumnType::Int`].
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Float | Self::Int)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Float => "float",
            Self::Int => "int",
            Self::Category => "category",
        })
    }
}

/// A present (non-missing) cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A float value. Always finite once stored in a [`Table`](crate::Table).
    Float(f64),
    /// An integer value.
    Int(i64),
    /// A category label.
    Category(String),
}

/// A single cell: `None` is the missing marker.
pub type Field = Option<Value>;

impl Value {
    /// The column type this value naturally belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Float(_) => ColumnType::Float,
            Self::Int(_) => ColumnType::Int,
            Self::Category(_) => ColumnType::Category,
        }
    }

    /// Numeric view of the value; `None` for categories.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            Self::Int(v) => Some(v as f64),
            Self::Category(_) => None,
        }
    }

    /// Category label, if this is a category.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Category(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Category(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Category(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Category(v)
    }
}
