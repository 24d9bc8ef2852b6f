// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-wise removal of incomplete rows.

extern crate alloc;

use smallvec::SmallVec;
use tabula_core::Table;

use crate::TransformError;
use crate::error::column_index;

/// Return the rows of `table` that hold a valid value in every `required` column.
///
/// The result is a subsequence of `table` in original order, carrying the original row keys.
/// With an empty `required` set the input is returned unchanged. `table` is never mutated.
pub fn clean<S: AsRef<str>>(table: &Table, required: &[S]) -> Result<Table, TransformError> {
    let mut cols: SmallVec<[usize; 4]> = SmallVec::new();
    for name in required {
        let idx = column_index(table.schema(), name.as_ref())?;
        if !cols.contains(&idx) {
            cols.push(idx);
        }
    }
    if cols.is_empty() {
        return Ok(table.clone());
    }
    Ok(table.filter_rows(|row| cols.iter().all(|&c| row.value(c).is_some())))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use tabula_core::{ColumnType, Field, Schema, Value};

    use super::*;

    fn five_rows() -> Table {
        let schema = Schema::new([("id", ColumnType::Int), ("val", ColumnType::Float)]).unwrap();
        let rows = (1..=5).map(|i| {
            let val: Field = if i == 2 || i == 4 {
                None
            } else {
                Some(Value::Float(i as f64))
            };
            vec![Some(Value::Int(i)), val]
        });
        Table::from_rows(schema, rows).unwrap()
    }

    fn ids(t: &Table) -> Vec<i64> {
        t.column("id")
            .unwrap()
            .map(|v| match v {
                Some(Value::Int(i)) => *i,
                other => panic!("unexpected id {other:?}"),
            })
            .collect()
    }

    #[test]
    fn drops_rows_missing_required_values_in_order() {
        let t = five_rows();
        let cleaned = clean(&t, &["val"]).unwrap();
        assert_eq!(cleaned.row_count(), 3);
        assert_eq!(ids(&cleaned), vec![1, 3, 5]);
        assert_eq!(cleaned.row_keys(), &[0, 2, 4]);
        // Input untouched.
        assert_eq!(t.row_count(), 5);
    }

    #[test]
    fn empty_required_set_is_identity() {
        let t = five_rows();
        assert_eq!(clean::<&str>(&t, &[]).unwrap(), t);
    }

    #[test]
    fn only_required_columns_matter() {
        let t = five_rows();
        assert_eq!(clean(&t, &["id"]).unwrap(), t);
    }

    #[test]
    fn is_idempotent() {
        let t = five_rows();
        let once = clean(&t, &["val", "id"]).unwrap();
        let twice = clean(&once, &["val", "id"]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let t = five_rows();
        assert_eq!(
            clean(&t, &["Val"]),
            Err(TransformError::UnknownColumn("Val".into()))
        );
    }
}
