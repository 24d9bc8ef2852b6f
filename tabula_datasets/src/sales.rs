// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tabula_core::{ColumnType, Schema, Table, TableError, Value};

use crate::inject_missing;

/// Product categories drawn for each record.
pub const CATEGORIES: [&str; 3] = ["Electronics", "Clothing", "Books"];
/// Regions drawn for each record.
pub const REGIONS: [&str; 4] = ["North", "South", "East", "West"];
/// Rows whose `Sales` value is replaced with the missing marker.
pub const MISSING_SALES_ROWS: [usize; 3] = [5, 10, 15];
/// Rows whose `Profit` value is replaced with the missing marker.
pub const MISSING_PROFIT_ROWS: [usize; 2] = [3, 20];

const ENTRIES_PER_MONTH: usize = 3;
const MONTH_ENDS_2023: [&str; 12] = [
    "2023-01-31",
    "2023-02-28",
    "2023-03-31",
    "2023-04-30",
    "2023-05-31",
    "2023-06-30",
    "2023-07-31",
    "2023-08-31",
    "2023-09-30",
    "2023-10-31",
    "2023-11-30",
    "2023-12-31",
];

/// Column structure of the synthetic sales table.
pub fn sales_schema() -> Result<Schema, TableError> {
    Schema::new([
        ("Date", ColumnType::Category),
        ("Product_Category", ColumnType::Category),
        ("Region", ColumnType::Category),
        ("Sales", ColumnType::Float),
        ("Profit", ColumnType::Int),
    ])
}

/// Generate 36 sales records (three per month-end date of 2023) with a few missing values.
///
/// `Sales` is drawn from `100..1000` and `Profit` from `10..200`. The output depends only on
/// `seed`.
pub fn synthetic_sales(seed: u64) -> Result<Table, TableError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut table = Table::new(sales_schema()?);
    for date in MONTH_ENDS_2023 {
        for _ in 0..ENTRIES_PER_MONTH {
            let category = CATEGORIES.choose(&mut rng).copied().unwrap_or(CATEGORIES[0]);
            let region = REGIONS.choose(&mut rng).copied().unwrap_or(REGIONS[0]);
            table.push_row(vec![
                Some(Value::from(date)),
                Some(Value::from(category)),
                Some(Value::from(region)),
                Some(Value::Float(f64::from(rng.gen_range(100_u32..1000)))),
                Some(Value::Int(rng.gen_range(10..200))),
            ])?;
        }
    }
    inject_missing(&mut table, &MISSING_SALES_ROWS, "Sales")?;
    inject_missing(&mut table, &MISSING_PROFIT_ROWS, "Profit")?;
    tracing::debug!(seed, rows = table.row_count(), "generated synthetic sales");
    Ok(table)
}
