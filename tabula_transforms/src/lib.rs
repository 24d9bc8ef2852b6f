// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary transforms over [`tabula_core::Table`].
//!
//! This crate provides:
//! - [`clean`]: drop rows that are missing any of a set of required columns,
//! - [`describe`]: per-column descriptive statistics,
//! - [`group_mean`] / [`group_aggregate`]: per-category aggregates,
//! - plain-data chart series ([`xy_points`], [`histogram`], ...), and
//! - a [`Pipeline`] that runs clean → describe → group means for one dataset.
//!
//! Missing values are handled with two different policies, on purpose:
//! - [`clean`] is row-wise: a row survives only if *every* required column is present.
//! - [`describe`] is column-wise: each column skips only its own missing values, so a gap in
//!   column `a` never hides the same row's value in column `b`.
//!
//! Every operation is a pure function of its input table.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod clean;
mod describe;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod group;
mod pipeline;
mod series;

pub use clean::clean;
pub use describe::{ColumnSummary, Description, describe, summarize};
pub use error::TransformError;
pub use group::{AggregateOp, Group, GroupKey, GroupedAggregate, group_aggregate, group_mean};
pub use pipeline::{GroupMeanSpec, Pipeline, Summary};
pub use series::{Histogram, grouped_xy_points, histogram, index_series, xy_points};
