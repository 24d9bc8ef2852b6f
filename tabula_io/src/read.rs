// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::StringRecord;
use tabula_core::{ColumnType, Field, Schema, Table, Value};

use crate::LoadError;

/// Options for [`load_path`] and [`load_reader`].
#[derive(Clone, Debug)]
pub struct CsvOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Expected column structure.
    ///
    /// When set, the header must list exactly these column names in this order and every field
    /// must parse as its column's type. When unset, types are inferred per column with
    /// [`infer_column_type`].
    pub schema: Option<Schema>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            schema: None,
        }
    }
}

impl CsvOptions {
    /// Options that validate against `schema`.
    pub fn with_schema(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
            ..Self::default()
        }
    }
}

/// Load a table from a file.
///
/// Fails with [`LoadError::NotFound`] if `path` does not exist.
pub fn load_path(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Table, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })?;
    tracing::debug!(path = %path.display(), "loading table");
    let table = load_reader(file, options)?;
    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.schema().len(),
        "loaded table"
    );
    Ok(table)
}

/// Load a table from any reader.
pub fn load_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<Table, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(LoadError::from_csv)?.clone();
    if headers.is_empty() {
        return Err(LoadError::malformed(1, "missing header row"));
    }

    let mut records: Vec<(u64, StringRecord)> = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(LoadError::from_csv)?;
        let line = record.position().map_or(0, csv::Position::line);
        records.push((line, record));
    }

    let schema = match &options.schema {
        Some(schema) => {
            check_header(&headers, schema)?;
            schema.clone()
        }
        None => {
            let columns = headers.iter().enumerate().map(|(i, name)| {
                let ty = infer_column_type(records.iter().map(|(_, r)| &r[i]));
                (name.to_string(), ty)
            });
            Schema::new(columns).map_err(|e| LoadError::malformed(1, e.to_string()))?
        }
    };
    tracing::trace!(?schema, "resolved schema");

    let mut table = Table::new(schema);
    for (line, record) in records {
        let row = parse_row(table.schema(), line, &record)?;
        table
            .push_row(row)
            .map_err(|e| LoadError::malformed(line, e.to_string()))?;
    }
    Ok(table)
}

/// Infer the narrowest column type that every present (non-empty) field parses as.
///
/// `Int` beats `Float` beats `Category`. A column with no present fields is `Float`.
pub fn infer_column_type<'a>(fields: impl IntoIterator<Item = &'a str>) -> ColumnType {
    let mut seen = false;
    let mut ty = ColumnType::Int;
    for field in fields.into_iter().filter(|f| !f.is_empty()) {
        seen = true;
        if ty == ColumnType::Int && field.parse::<i64>().is_err() {
            ty = ColumnType::Float;
        }
        if ty == ColumnType::Float && !field.parse::<f64>().is_ok_and(f64::is_finite) {
            return ColumnType::Category;
        }
    }
    if seen { ty } else { ColumnType::Float }
}

fn check_header(headers: &StringRecord, schema: &Schema) -> Result<(), LoadError> {
    if headers.len() != schema.len() {
        return Err(LoadError::malformed(
            1,
            format!(
                "header has {} columns, expected {}",
                headers.len(),
                schema.len()
            ),
        ));
    }
    for (found, expected) in headers.iter().zip(schema.names()) {
        if found != expected {
            return Err(LoadError::malformed(
                1,
                format!("header `{found}` does not match expected column `{expected}`"),
            ));
        }
    }
    Ok(())
}

fn parse_row(schema: &Schema, line: u64, record: &StringRecord) -> Result<Vec<Field>, LoadError> {
    schema
        .columns()
        .iter()
        .zip(record.iter())
        .map(|(column, raw)| {
            if raw.is_empty() {
                return Ok(None);
            }
            let value = match column.ty {
                ColumnType::Int => raw.parse::<i64>().ok().map(Value::Int),
                ColumnType::Float => raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(Value::Float),
                ColumnType::Category => Some(Value::Category(raw.to_string())),
            };
            value.map(Some).ok_or_else(|| {
                LoadError::malformed(
                    line,
                    format!("column `{}`: `{raw}` is not a valid {}", column.name, column.ty),
                )
            })
        })
        .collect()
}
