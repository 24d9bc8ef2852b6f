// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed, ordered column declarations.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{ColumnType, TableError};

/// A named, typed column declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name (unique within a schema, case-sensitive).
    pub name: String,
    /// Declared type of every present value in the column.
    pub ty: ColumnType,
}

/// Ordered list of columns, established when a table is constructed.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Build a schema from `(name, type)` pairs.
    pub fn new<I, S>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, ColumnType)>,
        S: Into<String>,
    {
        let mut out = Self {
            columns: Vec::new(),
            index: HashMap::new(),
        };
        for (name, ty) in columns {
            out.push(name.into(), ty)?;
        }
        if out.columns.is_empty() {
            return Err(TableError::EmptySchema);
        }
        Ok(out)
    }

    fn push(&mut self, name: String, ty: ColumnType) -> Result<(), TableError> {
        if name.is_empty() {
            return Err(TableError::EmptyColumnName);
        }
        if self.index.contains_key(&name) {
            return Err(TableError::DuplicateColumn(name));
        }
        self.index.insert(name.clone(), self.columns.len());
        self.columns.push(Column { name, ty });
        Ok(())
    }

    /// Returns a copy of this schema with one more column appended.
    pub fn with_column(&self, name: impl Into<String>, ty: ColumnType) -> Result<Self, TableError> {
        let mut out = self.clone();
        out.push(name.into(), ty)?;
        Ok(out)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always `false` for a constructed schema.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Position of the named column.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Position of the named column, or [`TableError::UnknownColumn`].
    pub fn require(&self, name: &str) -> Result<usize, TableError> {
        self.index_of(name)
            .ok_or_else(|| TableError::UnknownColumn(String::from(name)))
    }

    /// Column declaration by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(self.index_of(name)?)
    }

    /// Column names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl Eq for Schema {}
