// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Iris species run.

use std::path::Path;

use tabula_core::Table;
use tabula_datasets::{IRIS_MEASURES, inject_missing, iris, iris_schema};
use tabula_io::{CsvOptions, load_path, write_path};
use tabula_transforms::{Pipeline, Summary, group_mean, grouped_xy_points, histogram, index_series};

use crate::RunError;
use crate::report::{
    description_text, grouped_text, histogram_text, points_text, structure_text, table_text,
};

const FILE_NAME: &str = "iris.csv";
/// Rows blanked in `sepal width (cm)` to exercise cleaning.
const BLANKED_ROWS: [usize; 2] = [10, 11];

/// Persist, reload, blank a few values and summarize the iris dataset.
pub(crate) fn run(out_dir: &Path) -> Result<Summary, RunError> {
    let path = out_dir.join(FILE_NAME);
    write_path(&iris()?, &path, b',')?;

    let mut table = load_path(&path, &CsvOptions::with_schema(iris_schema()?))?;
    println!("\n--- Iris dataset loaded ---");
    println!("\nFirst 5 rows:\n{}", table_text(&table.head(5)));
    println!("Data structure:\n{}", structure_text(&table));

    inject_missing(&mut table, &BLANKED_ROWS, IRIS_MEASURES[1])?;
    let summary = summarize(&table)?;
    println!(
        "Cleaned data shape: {:?} (original: {:?})",
        summary.cleaned.shape(),
        table.shape()
    );
    println!("\nBasic statistics:\n{}", description_text(&summary.description));
    for (spec, means) in &summary.group_means {
        println!("Mean {} by {}:\n{}", spec.value, spec.group, grouped_text(means));
    }

    println!(
        "Petal length across samples (line): {}",
        points_text(&index_series(&summary.cleaned, IRIS_MEASURES[2])?, 3)
    );
    for measure in IRIS_MEASURES {
        let means = group_mean(&summary.cleaned, "species", measure)?;
        println!("Average {measure} by species (bar):\n{}", grouped_text(&means));
    }
    println!(
        "Sepal width distribution (histogram):\n{}",
        histogram_text(&histogram(&summary.cleaned, IRIS_MEASURES[1], 15)?)
    );
    for (species, points) in
        grouped_xy_points(&summary.cleaned, IRIS_MEASURES[0], IRIS_MEASURES[2], "species")?
    {
        println!(
            "Sepal vs. petal length, {species} (scatter): {}",
            points_text(&points, 2)
        );
    }
    Ok(summary)
}

/// Drop incomplete rows, describe every measure and average sepal length per species.
pub(crate) fn summarize(table: &Table) -> Result<Summary, RunError> {
    Ok(Pipeline::new()
        .require(table.schema().names())
        .group_mean("species", IRIS_MEASURES[0])
        .run(table)?)
}
