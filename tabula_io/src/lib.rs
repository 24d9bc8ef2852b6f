// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load and persist [`tabula_core::Table`]s as delimited text.
//!
//! The format is a header row of column names followed by one row per line. An empty field is
//! the missing marker. Column types either come from a caller-supplied [`Schema`] or are inferred
//! from the data (see [`CsvOptions`]).
//!
//! Loading is all-or-nothing: on any error no table is returned.
//!
//! [`Schema`]: tabula_core::Schema

mod error;
mod read;
mod write;

pub use error::{LoadError, WriteError};
pub use read::{CsvOptions, infer_column_type, load_path, load_reader};
pub use write::{write_path, write_writer};
