// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic monthly sales run.

use std::path::Path;

use tabula_core::Table;
use tabula_datasets::{sales_schema, synthetic_sales};
use tabula_io::{CsvOptions, load_path, write_path};
use tabula_transforms::{
    AggregateOp, GroupedAggregate, Pipeline, Summary, group_aggregate, histogram, index_series,
    xy_points,
};

use crate::RunError;
use crate::report::{
    description_text, grouped_text, histogram_text, points_text, structure_text, table_text,
};

const SEED: u64 = 2023;
const FILE_NAME: &str = "sales_data.csv";

/// Generate, persist, reload and summarize the sales dataset.
pub(crate) fn run(out_dir: &Path) -> Result<Summary, RunError> {
    let path = out_dir.join(FILE_NAME);
    write_path(&synthetic_sales(SEED)?, &path, b',')?;
    println!("Synthetic dataset created: {}", path.display());

    let table = load_path(&path, &CsvOptions::with_schema(sales_schema()?))?;
    println!("\n--- Sales dataset loaded ---");
    println!("\nFirst 5 rows:\n{}", table_text(&table.head(5)));
    println!("Data structure:\n{}", structure_text(&table));

    let summary = summarize(&table)?;
    println!(
        "Cleaned dataset shape: {:?} (original: {:?})",
        summary.cleaned.shape(),
        table.shape()
    );
    println!("\nBasic statistics:\n{}", description_text(&summary.description));
    for (spec, means) in &summary.group_means {
        println!("Average {} by {}:\n{}", spec.value, spec.group, grouped_text(means));
    }

    let monthly = monthly_totals(&summary.cleaned)?;
    println!("Monthly sales totals (line):\n{}", grouped_text(&monthly));
    println!(
        "Sales by row (line): {}",
        points_text(&index_series(&summary.cleaned, "Sales")?, 3)
    );
    println!(
        "Profit distribution (histogram):\n{}",
        histogram_text(&histogram(&summary.cleaned, "Profit", 10)?)
    );
    println!(
        "Sales vs. profit (scatter): {}",
        points_text(&xy_points(&summary.cleaned, "Sales", "Profit")?, 3)
    );
    Ok(summary)
}

/// Clean on both measures, describe them and average sales per product category.
pub(crate) fn summarize(table: &Table) -> Result<Summary, RunError> {
    Ok(Pipeline::new()
        .require(["Sales", "Profit"])
        .describe(["Sales", "Profit"])
        .group_mean("Product_Category", "Sales")
        .run(table)?)
}

/// Total sales per `YYYY-MM` month of `Date`.
pub(crate) fn monthly_totals(table: &Table) -> Result<GroupedAggregate, RunError> {
    let with_month = table.derive_category("Date", "Month", |date| {
        date.as_str().and_then(|d| d.get(..7)).map(str::to_owned)
    })?;
    Ok(group_aggregate(&with_month, "Month", "Sales", AggregateOp::Sum)?)
}
