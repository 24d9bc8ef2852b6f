// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped aggregates (`group by category → mean of a measure`).

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use hashbrown::HashMap;
use tabula_core::{Table, Value};

use crate::TransformError;
use crate::error::{column_index, numeric_column_index};

/// Aggregation operation for [`group_aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    /// Count valid values.
    Count,
    /// Sum valid values.
    Sum,
    /// Minimum valid value.
    Min,
    /// Maximum valid value.
    Max,
    /// Arithmetic mean of valid values.
    Mean,
}

/// The exact value of a grouping column, used as a group identity.
///
/// Equality is value equality: no case folding or trimming for categories. Floats compare by
/// value with `-0.0` folded into `0.0`. Keys are totally ordered (ints, then floats, then
/// categories) so results can be listed deterministically.
#[derive(Debug, Clone)]
pub enum GroupKey {
    /// Integer key.
    Int(i64),
    /// Float key (always finite).
    Float(f64),
    /// Category key.
    Category(String),
}

impl GroupKey {
    /// Key for a present value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Int(v) => Self::Int(*v),
            Value::Float(v) => Self::Float(if *v == 0.0 { 0.0 } else { *v }),
            Value::Category(s) => Self::Category(s.clone()),
        }
    }

    /// Category label, if this is a category key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Category(s) => Some(s),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Int(_) => 0,
            Self::Float(_) => 1,
            Self::Category(_) => 2,
        }
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b)),
            (Self::Category(a), Self::Category(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Int(v) => v.hash(state),
            Self::Float(v) => (if *v == 0.0 { 0.0 } else { *v }).to_bits().hash(state),
            Self::Category(s) => s.hash(state),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Category(s) => f.write_str(s),
        }
    }
}

/// One output group.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Grouping value.
    pub key: GroupKey,
    /// Number of rows in the group with a valid value; always at least 1.
    pub count: usize,
    /// Aggregated value.
    pub value: f64,
}

/// Result of [`group_aggregate`]: one entry per observed key, sorted by key.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedAggregate {
    op: AggregateOp,
    groups: Vec<Group>,
}

impl GroupedAggregate {
    /// The operation that produced this aggregate.
    pub fn op(&self) -> AggregateOp {
        self.op
    }

    /// All groups, sorted by key.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Aggregated value for a category key.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.groups
            .iter()
            .find(|g| g.key.as_str() == Some(category))
            .map(|g| g.value)
    }

    /// Aggregated value for any key.
    pub fn get_key(&self, key: &GroupKey) -> Option<f64> {
        self.groups
            .binary_search_by(|g| g.key.cmp(key))
            .ok()
            .map(|i| self.groups[i].value)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no group had a valid value.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// `(label, value)` pairs for a bar chart.
    pub fn bars(&self) -> Vec<(String, f64)> {
        self.groups
            .iter()
            .map(|g| (g.key.to_string(), g.value))
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Accumulator {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    const EMPTY: Self = Self {
        count: 0,
        sum: 0.0,
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    fn push(&mut self, v: Option<f64>) {
        self.count += 1;
        if let Some(v) = v {
            self.sum += v;
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
    }

    fn finish(&self, op: AggregateOp) -> f64 {
        match op {
            AggregateOp::Count => self.count as f64,
            AggregateOp::Sum => self.sum,
            AggregateOp::Min => self.min,
            AggregateOp::Max => self.max,
            AggregateOp::Mean => self.sum / self.count as f64,
        }
    }
}

/// Partition rows by the exact value of `group_column` and aggregate `value_column` per group.
///
/// Rows where either column is missing are skipped, so a group whose every row lacks a value is
/// omitted rather than reported as zero. [`AggregateOp::Count`] accepts any column type; the
/// other operations require a numeric `value_column`.
pub fn group_aggregate(
    table: &Table,
    group_column: &str,
    value_column: &str,
    op: AggregateOp,
) -> Result<GroupedAggregate, TransformError> {
    let schema = table.schema();
    let g = column_index(schema, group_column)?;
    let v = match op {
        AggregateOp::Count => column_index(schema, value_column)?,
        _ => numeric_column_index(schema, value_column)?,
    };

    let mut accs: HashMap<GroupKey, Accumulator> = HashMap::new();
    for row in table.rows() {
        let (Some(key), Some(value)) = (row.value(g), row.value(v)) else {
            continue;
        };
        accs.entry(GroupKey::from_value(key))
            .or_insert(Accumulator::EMPTY)
            .push(value.as_f64());
    }

    let mut groups: Vec<Group> = accs
        .into_iter()
        .map(|(key, acc)| Group {
            key,
            count: acc.count,
            value: acc.finish(op),
        })
        .collect();
    groups.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(GroupedAggregate { op, groups })
}

/// Mean of `value_column` per distinct value of `group_column`.
pub fn group_mean(
    table: &Table,
    group_column: &str,
    value_column: &str,
) -> Result<GroupedAggregate, TransformError> {
    group_aggregate(table, group_column, value_column, AggregateOp::Mean)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use tabula_core::{ColumnType, Field, Schema};

    use super::*;

    fn cat_val(rows: &[(Option<&str>, Option<f64>)]) -> Table {
        let schema = Schema::new([("cat", ColumnType::Category), ("val", ColumnType::Float)])
            .unwrap();
        Table::from_rows(
            schema,
            rows.iter().map(|&(c, v)| -> Vec<Field> {
                vec![c.map(Value::from), v.map(Value::Float)]
            }),
        )
        .unwrap()
    }

    #[test]
    fn mean_per_category_skips_missing_values() {
        let t = cat_val(&[
            (Some("A"), Some(10.0)),
            (Some("A"), Some(20.0)),
            (Some("B"), None),
            (Some("B"), Some(5.0)),
        ]);
        let m = group_mean(&t, "cat", "val").unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.get("A"), Some(15.0));
        assert_eq!(m.get("B"), Some(5.0));
        assert_eq!(m.groups()[1].count, 1);
    }

    #[test]
    fn all_missing_partition_is_omitted() {
        let t = cat_val(&[
            (Some("A"), Some(1.0)),
            (Some("C"), None),
            (Some("C"), None),
            (None, Some(100.0)),
        ]);
        let m = group_mean(&t, "cat", "val").unwrap();
        assert_eq!(m.bars(), vec![("A".into(), 1.0)]);
        assert_eq!(m.get("C"), None);
        assert!(m.groups().iter().all(|g| g.count > 0), "no empty groups");
    }

    #[test]
    fn keys_are_case_sensitive_and_sorted() {
        let t = cat_val(&[
            (Some("b"), Some(1.0)),
            (Some("B"), Some(3.0)),
            (Some("a"), Some(2.0)),
            (Some("b "), Some(4.0)),
        ]);
        let m = group_mean(&t, "cat", "val").unwrap();
        let keys: Vec<_> = m.groups().iter().map(|g| g.key.to_string()).collect();
        assert_eq!(keys, ["B", "a", "b", "b "]);
    }

    #[test]
    fn weighted_means_recover_overall_mean() {
        let t = cat_val(&[
            (Some("x"), Some(1.5)),
            (Some("y"), Some(2.25)),
            (Some("x"), Some(7.0)),
            (Some("z"), None),
            (Some("y"), Some(11.0)),
            (Some("z"), Some(-3.0)),
        ]);
        let m = group_mean(&t, "cat", "val").unwrap();
        let total: usize = m.groups().iter().map(|g| g.count).sum();
        let weighted: f64 = m.groups().iter().map(|g| g.value * g.count as f64).sum();
        let overall = (1.5 + 2.25 + 7.0 + 11.0 - 3.0) / 5.0;
        assert_eq!(total, 5);
        assert!((weighted / total as f64 - overall).abs() < 1e-12, "{weighted}");
    }

    #[test]
    fn other_operations() {
        let t = cat_val(&[
            (Some("A"), Some(2.0)),
            (Some("A"), Some(-1.0)),
            (Some("A"), None),
            (Some("B"), Some(4.0)),
        ]);
        let sum = group_aggregate(&t, "cat", "val", AggregateOp::Sum).unwrap();
        let min = group_aggregate(&t, "cat", "val", AggregateOp::Min).unwrap();
        let max = group_aggregate(&t, "cat", "val", AggregateOp::Max).unwrap();
        let count = group_aggregate(&t, "cat", "val", AggregateOp::Count).unwrap();
        assert_eq!(sum.get("A"), Some(1.0));
        assert_eq!(min.get("A"), Some(-1.0));
        assert_eq!(max.get("A"), Some(2.0));
        assert_eq!(count.get("A"), Some(2.0));
        assert_eq!(count.op(), AggregateOp::Count);
    }

    #[test]
    fn numeric_group_keys() {
        let schema = Schema::new([("k", ColumnType::Int), ("v", ColumnType::Float)]).unwrap();
        let t = Table::from_rows(
            schema,
            [
                vec![Some(Value::Int(2)), Some(Value::Float(1.0))],
                vec![Some(Value::Int(1)), Some(Value::Float(3.0))],
                vec![Some(Value::Int(2)), Some(Value::Float(5.0))],
            ],
        )
        .unwrap();
        let m = group_mean(&t, "k", "v").unwrap();
        assert_eq!(m.get_key(&GroupKey::Int(1)), Some(3.0));
        assert_eq!(m.get_key(&GroupKey::Int(2)), Some(3.0));
        assert_eq!(m.get_key(&GroupKey::Int(3)), None);
        assert_eq!(GroupKey::Float(-0.0), GroupKey::from_value(&Value::Float(-0.0)));
    }

    #[test]
    fn errors() {
        let t = cat_val(&[(Some("A"), Some(1.0))]);
        assert_eq!(
            group_mean(&t, "cat", "cat"),
            Err(TransformError::NotNumeric("cat".into()))
        );
        assert_eq!(
            group_mean(&t, "Cat", "val"),
            Err(TransformError::UnknownColumn("Cat".into()))
        );
        let count = group_aggregate(&t, "cat", "cat", AggregateOp::Count).unwrap();
        assert_eq!(count.get("A"), Some(1.0));
    }
}
