// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tabula_core::{ColumnType, Schema, Table, TableError};
use tabula_io::{CsvOptions, LoadError, load_reader};

/// Fisher's iris data: 150 rows, 50 per species.
pub const IRIS_CSV: &str = include_str!("../data/iris.csv");

/// The four numeric measure columns.
pub const IRIS_MEASURES: [&str; 4] = [
    "sepal length (cm)",
    "sepal width (cm)",
    "petal length (cm)",
    "petal width (cm)",
];

/// Column structure of [`IRIS_CSV`].
pub fn iris_schema() -> Result<Schema, TableError> {
    Schema::new(
        IRIS_MEASURES
            .iter()
            .map(|&name| (name, ColumnType::Float))
            .chain([("species", ColumnType::Category)]),
    )
}

/// Parse the bundled iris data.
pub fn iris() -> Result<Table, LoadError> {
    let schema = iris_schema().map_err(|e| LoadError::Malformed {
        line: 1,
        reason: e.to_string(),
    })?;
    load_reader(IRIS_CSV.as_bytes(), &CsvOptions::with_schema(schema))
}
