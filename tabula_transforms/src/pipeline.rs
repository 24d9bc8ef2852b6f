// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A per-dataset summary pipeline: clean → describe → group means.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use tabula_core::Table;

use crate::{Description, GroupedAggregate, TransformError, clean, describe, group_mean};

/// One `group_mean(group, value)` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMeanSpec {
    /// Grouping column.
    pub group: String,
    /// Numeric column to average.
    pub value: String,
}

/// Dataset-specific parameters for one summary run.
///
/// The run is:
/// 1. [`clean`] with the required columns,
/// 2. [`describe`] on the cleaned table (all numeric columns if none were named),
/// 3. each [`group_mean`] on the cleaned table.
///
/// A failing stage stops the run; no later stage executes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    required: Vec<String>,
    describe: Vec<String>,
    group_means: Vec<GroupMeanSpec>,
}

/// Output of [`Pipeline::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Rows with every required column present.
    pub cleaned: Table,
    /// Statistics over the cleaned table.
    pub description: Description,
    /// Group means over the cleaned table, in request order.
    pub group_means: Vec<(GroupMeanSpec, GroupedAggregate)>,
}

impl Pipeline {
    /// Create an empty pipeline (no required columns, describe every numeric column).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add columns that must be present for a row to survive cleaning.
    pub fn require<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Add columns to describe.
    pub fn describe<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.describe.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Add a group-mean request.
    pub fn group_mean(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.group_means.push(GroupMeanSpec {
            group: group.into(),
            value: value.into(),
        });
        self
    }

    /// Run the pipeline over `table`.
    pub fn run(&self, table: &Table) -> Result<Summary, TransformError> {
        let cleaned = clean(table, &self.required)?;

        let description = if self.describe.is_empty() {
            let numeric: Vec<&str> = cleaned
                .schema()
                .columns()
                .iter()
                .filter(|c| c.ty.is_numeric())
                .map(|c| c.name.as_str())
                .collect();
            describe(&cleaned, &numeric)?
        } else {
            describe(&cleaned, &self.describe)?
        };

        let mut group_means = Vec::with_capacity(self.group_means.len());
        for spec in &self.group_means {
            let agg = group_mean(&cleaned, &spec.group, &spec.value)?;
            group_means.push((spec.clone(), agg));
        }

        Ok(Summary {
            cleaned,
            description,
            group_means,
        })
    }
}
