// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample datasets.
//!
//! - [`synthetic_sales`]: a year of generated sales records with injected gaps.
//! - [`iris`]: Fisher's iris measurements, bundled as delimited text.

mod iris;
mod sales;

pub use iris::{IRIS_CSV, IRIS_MEASURES, iris, iris_schema};
pub use sales::{
    CATEGORIES, MISSING_PROFIT_ROWS, MISSING_SALES_ROWS, REGIONS, sales_schema, synthetic_sales,
};

use tabula_core::{Table, TableError};

/// Replace `column` with the missing marker in each of `rows`.
pub fn inject_missing(table: &mut Table, rows: &[usize], column: &str) -> Result<(), TableError> {
    for &row in rows {
        table.set_missing(row, column)?;
    }
    tracing::debug!(column, count = rows.len(), "injected missing values");
    Ok(())
}
