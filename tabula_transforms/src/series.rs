// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-data chart inputs derived from a table.
//!
//! Nothing here draws anything: these helpers turn tables into the point lists and bin counts a
//! chart renderer consumes.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;
use tabula_core::Table;

use crate::error::{column_index, numeric_column_index};
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{GroupKey, TransformError};

/// `(row key, value)` points for a line over the table's original row index.
///
/// Rows where `column` is missing are skipped.
pub fn index_series(table: &Table, column: &str) -> Result<Vec<Point>, TransformError> {
    let col = numeric_column_index(table.schema(), column)?;
    Ok(table
        .rows()
        .filter_map(|r| Some(Point::new(r.key as f64, r.f64(col)?)))
        .collect())
}

/// `(x, y)` points for a scatter plot, skipping rows missing either coordinate.
pub fn xy_points(table: &Table, x: &str, y: &str) -> Result<Vec<Point>, TransformError> {
    let xc = numeric_column_index(table.schema(), x)?;
    let yc = numeric_column_index(table.schema(), y)?;
    Ok(table
        .rows()
        .filter_map(|r| Some(Point::new(r.f64(xc)?, r.f64(yc)?)))
        .collect())
}

/// Scatter points split by the value of `group`, sorted by key.
///
/// Rows missing the group value or either coordinate are skipped.
pub fn grouped_xy_points(
    table: &Table,
    x: &str,
    y: &str,
    group: &str,
) -> Result<Vec<(GroupKey, Vec<Point>)>, TransformError> {
    let xc = numeric_column_index(table.schema(), x)?;
    let yc = numeric_column_index(table.schema(), y)?;
    let gc = column_index(table.schema(), group)?;

    let mut by_key: HashMap<GroupKey, Vec<Point>> = HashMap::new();
    for r in table.rows() {
        let (Some(key), Some(px), Some(py)) = (r.value(gc), r.f64(xc), r.f64(yc)) else {
            continue;
        };
        by_key
            .entry(GroupKey::from_value(key))
            .or_default()
            .push(Point::new(px, py));
    }
    let mut out: Vec<_> = by_key.into_iter().collect();
    out.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}

/// Equal-width histogram of a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges; `edges.len() == counts.len() + 1`.
    pub edges: Vec<f64>,
    /// Number of values per bin. Bins are half-open except the last, which is closed.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Total number of values counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin the valid values of `column` into `bins` equal-width bins spanning `[min, max]`.
///
/// When every value is equal the range is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram(table: &Table, column: &str, bins: usize) -> Result<Histogram, TransformError> {
    if bins == 0 {
        return Err(TransformError::ZeroBins);
    }
    let col = numeric_column_index(table.schema(), column)?;
    let values: Vec<f64> = table.rows().filter_map(|r| r.f64(col)).collect();
    let Some((mut lo, mut hi)) = values.iter().fold(None, |acc: Option<(f64, f64)>, &v| {
        Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
    }) else {
        return Err(TransformError::EmptyColumn(String::from(column)));
    };
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let n = bins as f64;
    let width = (hi - lo) / n;
    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0; bins];
    for v in values {
        let pos = ((v - lo) / width).floor();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "pos is non-negative and clamped to the last bin"
        )]
        let i = (pos as usize).min(bins - 1);
        counts[i] += 1;
    }
    Ok(Histogram { edges, counts })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use tabula_core::{ColumnType, Schema, Value};

    use super::*;

    fn sample() -> Table {
        let schema = Schema::new([
            ("species", ColumnType::Category),
            ("x", ColumnType::Float),
            ("y", ColumnType::Float),
        ])
        .unwrap();
        let row = |s: Option<&str>, x: Option<f64>, y: Option<f64>| {
            vec![s.map(Value::from), x.map(Value::Float), y.map(Value::Float)]
        };
        Table::from_rows(
            schema,
            [
                row(Some("b"), Some(1.0), Some(2.0)),
                row(Some("a"), None, Some(3.0)),
                row(Some("a"), Some(4.0), Some(5.0)),
                row(None, Some(6.0), Some(7.0)),
                row(Some("b"), Some(10.0), None),
            ],
        )
        .unwrap()
    }

    #[test]
    fn index_series_uses_row_keys() {
        let t = sample().filter_rows(|r| r.key != 0);
        let pts = index_series(&t, "x").unwrap();
        assert_eq!(
            pts,
            vec![Point::new(2.0, 4.0), Point::new(3.0, 6.0), Point::new(4.0, 10.0)]
        );
    }

    #[test]
    fn xy_points_skip_incomplete_pairs() {
        let pts = xy_points(&sample(), "x", "y").unwrap();
        assert_eq!(
            pts,
            vec![Point::new(1.0, 2.0), Point::new(4.0, 5.0), Point::new(6.0, 7.0)]
        );
        assert_eq!(
            xy_points(&sample(), "species", "y"),
            Err(TransformError::NotNumeric("species".into()))
        );
    }

    #[test]
    fn grouped_points_by_key() {
        let groups = grouped_xy_points(&sample(), "x", "y", "species").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0.as_str(), Some("a"));
        assert_eq!(groups[0].1, vec![Point::new(4.0, 5.0)]);
        assert_eq!(groups[1].1, vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn histogram_closes_last_bin() {
        let h = histogram(&sample(), "x", 3).unwrap();
        assert_eq!(h.edges, vec![1.0, 4.0, 7.0, 10.0]);
        assert_eq!(h.counts, vec![1, 2, 1]);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn histogram_degenerate_range_and_errors() {
        let t = sample().filter_rows(|r| r.key == 0);
        let h = histogram(&t, "x", 2).unwrap();
        assert_eq!(h.edges, vec![0.5, 1.0, 1.5]);
        assert_eq!(h.counts, vec![0, 1]);
        assert_eq!(histogram(&t, "x", 0), Err(TransformError::ZeroBins));
        let none = sample().filter_rows(|_| false);
        assert_eq!(
            histogram(&none, "x", 4),
            Err(TransformError::EmptyColumn("x".into()))
        );
    }
}
