// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-text rendering of tables and summaries.

use kurbo::Point;
use tabula_core::Table;
use tabula_transforms::{ColumnSummary, Description, GroupedAggregate, Histogram};

/// Render a table with a header line and one line per row, prefixed by the row key.
pub(crate) fn table_text(table: &Table) -> String {
    let names: Vec<&str> = table.schema().names().collect();
    let mut out = format!("     {}\n", names.join(" | "));
    for row in table.rows() {
        let cells: Vec<String> = row
            .fields
            .iter()
            .map(|f| f.as_ref().map_or_else(|| "NaN".to_string(), ToString::to_string))
            .collect();
        out.push_str(&format!("{:>4} {}\n", row.key, cells.join(" | ")));
    }
    out
}

/// Column names, types and missing counts.
pub(crate) fn structure_text(table: &Table) -> String {
    let (rows, cols) = table.shape();
    let mut out = format!("{rows} rows x {cols} columns\n");
    for (column, (name, missing)) in table.schema().columns().iter().zip(table.missing_counts()) {
        out.push_str(&format!(
            "  {name:<20} {:<8} {} non-missing, {missing} missing\n",
            column.ty.to_string(),
            rows - missing
        ));
    }
    out
}

/// Statistics in the familiar `count/mean/std/min/25%/50%/75%/max` layout.
pub(crate) fn description_text(description: &Description) -> String {
    let mut out = format!("{:<6}", "");
    for (name, _) in description.iter() {
        out.push_str(&format!(" {name:>18}"));
    }
    out.push('\n');
    let stats: [(&str, fn(&ColumnSummary) -> f64); 8] = [
        ("count", |s| s.count as f64),
        ("mean", |s| s.mean),
        ("std", |s| s.std),
        ("min", |s| s.min),
        ("25%", |s| s.q1),
        ("50%", |s| s.median),
        ("75%", |s| s.q3),
        ("max", |s| s.max),
    ];
    for (label, get) in stats {
        out.push_str(&format!("{label:<6}"));
        for (_, summary) in description.iter() {
            out.push_str(&format!(" {:>18.6}", get(summary)));
        }
        out.push('\n');
    }
    out
}

/// One `key  value` line per group.
pub(crate) fn grouped_text(aggregate: &GroupedAggregate) -> String {
    aggregate
        .bars()
        .into_iter()
        .map(|(label, value)| format!("  {label:<14} {value:.3}\n"))
        .collect()
}

/// Bin ranges and counts.
pub(crate) fn histogram_text(histogram: &Histogram) -> String {
    histogram
        .counts
        .iter()
        .zip(histogram.edges.windows(2))
        .map(|(count, edge)| format!("  [{:>8.2}, {:>8.2}) {count}\n", edge[0], edge[1]))
        .collect()
}

/// Point count plus the first few points.
pub(crate) fn points_text(points: &[Point], preview: usize) -> String {
    let shown: Vec<String> = points
        .iter()
        .take(preview)
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect();
    let more = if points.len() > preview { ", ..." } else { "" };
    format!("{} points: {}{more}", points.len(), shown.join(", "))
}
