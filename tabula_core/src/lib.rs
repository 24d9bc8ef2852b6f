// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed in-memory tables.
//!
//! A [`Table`] is an ordered list of rows validated against a fixed [`Schema`]. Every field is an
//! [`Field`] (`Option<Value>`): `None` is the missing marker, so a missing value can never be
//! confused with a legitimate `0.0` or empty category.
//!
//! Each row also carries a stable `row_key` (its position in the table it was first pushed
//! into). Derived tables keep the keys of the rows they were taken from, so downstream consumers
//! can still refer to the original row index.

#![no_std]

extern crate alloc;

mod error;
mod schema;
mod table;
mod value;

pub use error::TableError;
pub use schema::{Column, Schema};
pub use table::{Row, Table};
pub use value::{ColumnType, Field, Value};
