// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-oriented table storage.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{ColumnType, Field, Schema, TableError, Value};

/// A table of rows validated against a [`Schema`].
///
/// Rows are stored in insertion order, each with a stable key. Operations that derive a new table
/// (for example [`Table::filter_rows`]) never reorder rows and never touch `self`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: Schema,
    row_keys: Vec<u64>,
    rows: Vec<Vec<Field>>,
}

/// A borrowed row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    /// Stable key of the row (its position in the table it was first pushed into).
    pub key: u64,
    /// Fields aligned to the table schema.
    pub fields: &'a [Field],
}

impl<'a> Row<'a> {
    /// Present value at column position `col`, `None` if missing or out of range.
    pub fn value(&self, col: usize) -> Option<&'a Value> {
        self.fields.get(col)?.as_ref()
    }

    /// Numeric value at column position `col`.
    pub fn f64(&self, col: usize) -> Option<f64> {
        self.value(col)?.as_f64()
    }
}

impl Table {
    /// Create an empty table.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            row_keys: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create a table and push every row, failing on the first invalid one.
    pub fn from_rows<I>(schema: Schema, rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Vec<Field>>,
    {
        let mut table = Self::new(schema);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Validate and append a row.
    ///
    /// `Int` values are widened when pushed into a `Float` column. Non-finite floats are rejected.
    pub fn push_row(&mut self, mut row: Vec<Field>) -> Result<(), TableError> {
        if row.len() != self.schema.len() {
            return Err(TableError::ArityMismatch {
                expected: self.schema.len(),
                found: row.len(),
            });
        }
        for (field, column) in row.iter_mut().zip(self.schema.columns()) {
            let Some(value) = field.as_mut() else {
                continue;
            };
            let widened = match (column.ty, &*value) {
                (ColumnType::Float, Value::Float(v)) if !v.is_finite() => {
                    return Err(TableError::NonFiniteValue {
                        column: column.name.clone(),
                    });
                }
                (ColumnType::Float, Value::Float(_))
                | (ColumnType::Int, Value::Int(_))
                | (ColumnType::Category, Value::Category(_)) => None,
                (ColumnType::Float, Value::Int(v)) => Some(Value::Float(*v as f64)),
                (expected, found) => {
                    return Err(TableError::TypeMismatch {
                        column: column.name.clone(),
                        expected,
                        found: found.column_type(),
                    });
                }
            };
            if let Some(widened) = widened {
                *value = widened;
            }
        }
        let key = self.row_keys.last().map_or(0, |k| k + 1);
        self.row_keys.push(key);
        self.rows.push(row);
        Ok(())
    }

    /// The table schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.schema.len())
    }

    /// Stable keys for each row.
    pub fn row_keys(&self) -> &[u64] {
        &self.row_keys
    }

    /// Row at position `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        Some(Row {
            key: *self.row_keys.get(index)?,
            fields: self.rows.get(index)?,
        })
    }

    /// All rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row<'_>> + '_ {
        self.row_keys
            .iter()
            .zip(&self.rows)
            .map(|(&key, fields)| Row { key, fields })
    }

    /// Fields of the named column, in row order.
    pub fn column(
        &self,
        name: &str,
    ) -> Result<impl ExactSizeIterator<Item = Option<&Value>> + '_, TableError> {
        let col = self.schema.require(name)?;
        Ok(self.rows.iter().map(move |r| r[col].as_ref()))
    }

    /// Derive a table holding only the rows for which `keep` returns `true`, in their original
    /// order and with their original keys.
    pub fn filter_rows(&self, mut keep: impl FnMut(Row<'_>) -> bool) -> Self {
        let mut out = Self::new(self.schema.clone());
        for row in self.rows() {
            if keep(row) {
                out.row_keys.push(row.key);
                out.rows.push(row.fields.to_vec());
            }
        }
        out
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.rows.len());
        Self {
            schema: self.schema.clone(),
            row_keys: self.row_keys[..n].to_vec(),
            rows: self.rows[..n].to_vec(),
        }
    }

    /// Count of missing markers per column, in schema order.
    pub fn missing_counts(&self) -> Vec<(&str, usize)> {
        self.schema
            .columns()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let n = self.rows.iter().filter(|r| r[i].is_none()).count();
                (c.name.as_str(), n)
            })
            .collect()
    }

    /// Replace the field at `(row, column)` with the missing marker.
    pub fn set_missing(&mut self, row: usize, column: &str) -> Result<(), TableError> {
        let col = self.schema.require(column)?;
        let fields = self
            .rows
            .get_mut(row)
            .ok_or(TableError::RowOutOfRange(row))?;
        fields[col] = None;
        Ok(())
    }

    /// Derive a table with an extra category column computed from `source`.
    ///
    /// Rows where `source` is missing, or where `f` returns `None`, get the missing marker in the
    /// new column. Row keys are preserved.
    pub fn derive_category(
        &self,
        source: &str,
        name: impl Into<String>,
        mut f: impl FnMut(&Value) -> Option<String>,
    ) -> Result<Self, TableError> {
        let col = self.schema.require(source)?;
        let schema = self.schema.with_column(name, ColumnType::Category)?;
        let rows = self
            .rows
            .iter()
            .map(|r| {
                let mut fields = r.clone();
                fields.push(r[col].as_ref().and_then(&mut f).map(Value::Category));
                fields
            })
            .collect();
        Ok(Self {
            schema,
            row_keys: self.row_keys.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn sample() -> Table {
        let schema = Schema::new([("cat", ColumnType::Category), ("val", ColumnType::Float)])
            .unwrap();
        Table::from_rows(
            schema,
            [
                vec![Some("A".into()), Some(Value::Float(10.0))],
                vec![Some("A".into()), None],
                vec![None, Some(Value::Float(5.0))],
            ],
        )
        .unwrap()
    }

    #[test]
    fn push_row_validates_arity_and_types() {
        let mut t = sample();
        assert_eq!(
            t.push_row(vec![Some("A".into())]),
            Err(TableError::ArityMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            t.push_row(vec![Some(Value::Float(1.0)), None]),
            Err(TableError::TypeMismatch {
                column: "cat".into(),
                expected: ColumnType::Category,
                found: ColumnType::Float,
            })
        );
        assert_eq!(
            t.push_row(vec![None, Some(f64::NAN.into())]),
            Err(TableError::NonFiniteValue {
                column: "val".into()
            })
        );
        for v in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                t.push_row(vec![None, Some(Value::Float(v))]),
                Err(TableError::NonFiniteValue {
                    column: "val".into()
                })
            );
        }
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn int_widens_into_float_column() {
        let mut t = sample();
        t.push_row(vec![None, Some(Value::Int(7))]).unwrap();
        assert_eq!(t.row(3).unwrap().value(1), Some(&Value::Float(7.0)));
    }

    #[test]
    fn missing_is_distinct_from_zero() {
        let mut t = sample();
        t.push_row(vec![Some("".into()), Some(Value::Float(0.0))]).unwrap();
        assert_eq!(t.missing_counts(), vec![("cat", 1), ("val", 1)]);
    }

    #[test]
    fn filter_rows_preserves_keys_and_order() {
        let t = sample();
        let kept = t.filter_rows(|r| r.value(1).is_some());
        assert_eq!(kept.row_keys(), &[0, 2]);
        assert_eq!(t.row_count(), 3);

        // Pushing into a derived table continues after the last key.
        let mut kept = kept;
        kept.push_row(vec![None, None]).unwrap();
        assert_eq!(kept.row_keys(), &[0, 2, 3]);
    }

    #[test]
    fn set_missing_and_head() {
        let mut t = sample();
        t.set_missing(0, "val").unwrap();
        assert_eq!(t.row(0).unwrap().value(1), None);
        assert_eq!(t.set_missing(9, "val"), Err(TableError::RowOutOfRange(9)));
        assert_eq!(
            t.set_missing(0, "nope"),
            Err(TableError::UnknownColumn("nope".into()))
        );
        assert_eq!(t.head(2).shape(), (2, 2));
        assert_eq!(t.head(10).shape(), (3, 2));
    }

    #[test]
    fn derive_category_appends_column() {
        let schema = Schema::new([("Date", ColumnType::Category)]).unwrap();
        let t = Table::from_rows(
            schema,
            [vec![Some("2023-01-31".into())], vec![None]],
        )
        .unwrap();
        let d = t
            .derive_category("Date", "Month", |v| v.as_str().map(|s| s[..7].into()))
            .unwrap();
        let months: Vec<_> = d.column("Month").unwrap().collect();
        assert_eq!(months, vec![Some(&Value::from("2023-01")), None]);
    }
}
