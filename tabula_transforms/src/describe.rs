// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-wise descriptive statistics.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use tabula_core::Table;

use crate::TransformError;
use crate::error::numeric_column_index;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Descriptive statistics over the valid values of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    /// Number of valid (non-missing) values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator); `0.0` when `count == 1`.
    pub std: f64,
    /// Minimum.
    pub min: f64,
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
    /// Maximum.
    pub max: f64,
}

/// Per-column summaries, in the order the columns were requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Description {
    columns: Vec<(String, ColumnSummary)>,
}

impl Description {
    /// Summary for the named column.
    pub fn get(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns
            .iter()
            .find_map(|(n, s)| (n == name).then_some(s))
    }

    /// `(column, summary)` pairs in request order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &ColumnSummary)> + '_ {
        self.columns.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Number of summarized columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no column was summarized.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Describe the given numeric columns of `table`.
///
/// Each column is summarized independently over its own valid values: a missing value in one
/// column does not exclude that row from any other column. Fails with
/// [`TransformError::EmptyColumn`] if a requested column has no valid values.
pub fn describe<S: AsRef<str>>(table: &Table, columns: &[S]) -> Result<Description, TransformError> {
    let mut out = Vec::with_capacity(columns.len());
    for name in columns {
        let name = name.as_ref();
        let col = numeric_column_index(table.schema(), name)?;
        let values: Vec<f64> = table.rows().filter_map(|r| r.f64(col)).collect();
        let summary =
            summarize(&values).ok_or_else(|| TransformError::EmptyColumn(String::from(name)))?;
        out.push((String::from(name), summary));
    }
    Ok(Description { columns: out })
}

/// Summarize a slice of values; `None` if it is empty.
pub fn summarize(values: &[f64]) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let std = if sorted.len() == 1 {
        0.0
    } else {
        let ss: f64 = sorted.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1.0)).sqrt()
    };

    Some(ColumnSummary {
        count: sorted.len(),
        mean,
        std,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Linearly interpolated quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "pos is within [0, len - 1], so floor(pos) is a valid index"
    )]
    let i = lo as usize;
    let frac = pos - lo;
    match sorted.get(i + 1) {
        Some(&next) if frac > 0.0 => sorted[i] + (next - sorted[i]) * frac,
        _ => sorted[i],
    }
}
