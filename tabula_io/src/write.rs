// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tabula_core::{Table, Value};

use crate::WriteError;

/// Write `table` to a file, replacing it if it exists.
pub fn write_path(table: &Table, path: impl AsRef<Path>, delimiter: u8) -> Result<(), WriteError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_writer(table, file, delimiter)?;
    tracing::info!(path = %path.display(), rows = table.row_count(), "wrote table");
    Ok(())
}

/// Write `table` as delimited text: a header row, then one line per row.
///
/// Missing values become empty fields. Floats always carry a fractional part or exponent
/// (`523.0`, not `523`) so a reload infers the same column type. An empty category would read
/// back as missing, so it fails with [`WriteError::EmptyCategory`] before anything is written
/// for that row.
pub fn write_writer<W: Write>(table: &Table, writer: W, delimiter: u8) -> Result<(), WriteError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    csv_writer.write_record(table.schema().names())?;

    let mut record: Vec<String> = Vec::with_capacity(table.schema().len());
    for row in table.rows() {
        record.clear();
        for (field, column) in row.fields.iter().zip(table.schema().columns()) {
            record.push(match field {
                None => String::new(),
                Some(Value::Float(v)) => format!("{v:?}"),
                Some(Value::Int(v)) => v.to_string(),
                Some(Value::Category(s)) if s.is_empty() => {
                    return Err(WriteError::EmptyCategory {
                        column: column.name.clone(),
                        row_key: row.key,
                    });
                }
                Some(Value::Category(s)) => s.clone(),
            });
        }
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tabula_core::{ColumnType, Schema};

    use super::*;
    use crate::{CsvOptions, load_path, load_reader};

    fn sample() -> Table {
        let schema = Schema::new([
            ("Date", ColumnType::Category),
            ("Sales", ColumnType::Float),
            ("Profit", ColumnType::Int),
        ])
        .unwrap();
        Table::from_rows(
            schema,
            [
                vec![
                    Some(Value::from("2023-01-31")),
                    Some(Value::Float(523.0)),
                    None,
                ],
                vec![
                    Some(Value::from("2023-02-28")),
                    None,
                    Some(Value::Int(42)),
                ],
            ],
        )
        .unwrap()
    }

    #[test]
    fn writes_missing_as_empty_fields() {
        let mut out = Vec::new();
        write_writer(&sample(), &mut out, b',').unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Date,Sales,Profit\n2023-01-31,523.0,\n2023-02-28,,42\n"
        );
    }

    #[test]
    fn reload_keeps_types_and_missing_markers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales_data.csv");
        let table = sample();
        write_path(&table, &path, b',').unwrap();

        let loaded = load_path(&path, &CsvOptions::default()).unwrap();
        assert_eq!(loaded.schema(), table.schema());
        assert_eq!(loaded, table);
    }

    #[test]
    fn empty_category_is_refused() {
        let schema = Schema::new([("cat", ColumnType::Category), ("v", ColumnType::Float)]).unwrap();
        let table = Table::from_rows(
            schema,
            [
                vec![Some(Value::from("A")), Some(Value::Float(1.0))],
                vec![Some(Value::from("")), Some(Value::Float(2.0))],
            ],
        )
        .unwrap();
        let err = write_writer(&table, Vec::new(), b',').unwrap_err();
        assert!(
            matches!(&err, WriteError::EmptyCategory { column, row_key: 1 } if column == "cat"),
            "{err}"
        );
    }

    #[test]
    fn semicolon_delimiter() {
        let mut out = Vec::new();
        write_writer(&sample(), &mut out, b';').unwrap();
        let options = CsvOptions {
            delimiter: b';',
            ..CsvOptions::default()
        };
        let loaded = load_reader(out.as_slice(), &options).unwrap();
        assert_eq!(loaded.shape(), (2, 3));
    }
}
