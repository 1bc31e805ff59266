// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stack transform.
//!
//! This corresponds to D3's `stack()` with order and offset `"none"`: for each category the
//! series values are accumulated from 0 in key order.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::{CategoryRecord, Dataset};

/// Identifier of one stacked sub-series.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesKey(Arc<str>);

impl SeriesKey {
    /// Creates a key.
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label: the key with its first character upper-cased.
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Reads one series value from a record.
pub type ValueAccessor = fn(&CategoryRecord) -> f64;

/// A series key together with its value accessor.
#[derive(Clone)]
pub struct SeriesSpec {
    /// Series key.
    pub key: SeriesKey,
    /// Value accessor.
    pub value: ValueAccessor,
}

impl fmt::Debug for SeriesSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesSpec")
            .field("key", &self.key)
            .field("value", &"<fn>")
            .finish()
    }
}

/// The ordered list of series to stack.
///
/// Order is the stacking order: the first series sits on the baseline.
#[derive(Clone, Debug)]
pub struct StackSpec {
    series: SmallVec<[SeriesSpec; 2]>,
}

impl Default for StackSpec {
    fn default() -> Self {
        Self::two_way()
    }
}

impl StackSpec {
    /// Creates a spec with no series.
    pub fn new() -> Self {
        Self {
            series: SmallVec::new(),
        }
    }

    /// The default two-way split: `male` reads `part_a`, `female` reads `part_b`.
    pub fn two_way() -> Self {
        Self::new()
            .with_series("male", |r| r.part_a)
            .with_series("female", CategoryRecord::part_b)
    }

    /// Appends a series on top of the existing ones.
    pub fn with_series(mut self, key: impl Into<SeriesKey>, value: ValueAccessor) -> Self {
        self.series.push(SeriesSpec {
            key: key.into(),
            value,
        });
        self
    }

    /// Series in stacking order.
    pub fn series(&self) -> &[SeriesSpec] {
        &self.series
    }

    /// Series keys in stacking order.
    pub fn keys(&self) -> impl Iterator<Item = &SeriesKey> + '_ {
        self.series.iter().map(|s| &s.key)
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if there are no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Stacks `dataset`, producing one layer per series in key order.
    ///
    /// Each layer has one interval per record, in input order. Negative values are passed
    /// through (the interval then has `upper < lower`) and logged.
    pub fn apply(&self, dataset: &Dataset) -> Vec<StackedLayer> {
        let mut layers: Vec<StackedLayer> = self
            .series
            .iter()
            .map(|s| StackedLayer {
                key: s.key.clone(),
                intervals: Vec::with_capacity(dataset.len()),
            })
            .collect();

        for (row, record) in dataset.iter().enumerate() {
            let mut acc = 0.0;
            for (series, layer) in self.series.iter().zip(layers.iter_mut()) {
                let value = (series.value)(record);
                if value < 0.0 {
                    tracing::warn!(
                        category = %record.name,
                        series = %series.key,
                        value,
                        "negative stacked value passed through"
                    );
                }
                let lower = acc;
                acc += value;
                layer.intervals.push(StackInterval {
                    category: record.name.clone(),
                    row,
                    lower,
                    upper: acc,
                });
            }
        }
        layers
    }
}

/// The span one series occupies within one category's stack.
#[derive(Clone, Debug, PartialEq)]
pub struct StackInterval {
    /// Category name.
    pub category: Arc<str>,
    /// Index of the category in the dataset.
    pub row: usize,
    /// Cumulative value below this series.
    pub lower: f64,
    /// Cumulative value including this series.
    pub upper: f64,
}

impl StackInterval {
    /// `upper - lower`; negative for a negative series value.
    pub fn extent(&self) -> f64 {
        self.upper - self.lower
    }
}

/// All intervals of one series.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedLayer {
    /// Series key.
    pub key: SeriesKey,
    /// One interval per category, in dataset order.
    pub intervals: Vec<StackInterval>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        [
            CategoryRecord::new("AA", 100.0, 60.0),
            CategoryRecord::new("BB", 7.0, 0.0),
            CategoryRecord::new("CC", 5.0, 8.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn layers_follow_key_order_and_accumulate_from_zero() {
        let layers = StackSpec::two_way().apply(&dataset());
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].key.as_str(), "male");
        assert_eq!(layers[1].key.as_str(), "female");

        let a = &layers[0].intervals[0];
        let b = &layers[1].intervals[0];
        assert_eq!((a.lower, a.upper), (0.0, 60.0));
        assert_eq!((b.lower, b.upper), (60.0, 100.0));
        assert_eq!(b.row, 0);
        assert_eq!(&*b.category, "AA");
    }

    #[test]
    fn intervals_reconstruct_totals() {
        let ds = dataset();
        let layers = StackSpec::two_way().apply(&ds);
        for (row, record) in ds.iter().enumerate() {
            let sum: f64 = layers.iter().map(|l| l.intervals[row].extent()).sum();
            assert_eq!(sum, record.total);
            assert_eq!(layers[0].intervals[row].lower, 0.0);
            assert_eq!(layers[0].intervals[row].upper, layers[1].intervals[row].lower);
        }
    }

    #[test]
    fn negative_values_pass_through() {
        let layers = StackSpec::two_way().apply(&dataset());
        let b = &layers[1].intervals[2];
        assert_eq!((b.lower, b.upper), (8.0, 5.0));
        assert!(b.extent() < 0.0);
    }

    #[test]
    fn empty_dataset_yields_empty_layers() {
        let layers = StackSpec::two_way().apply(&Dataset::default());
        assert_eq!(layers.len(), 2);
        assert!(layers.iter().all(|l| l.intervals.is_empty()));
    }

    #[test]
    fn labels_capitalize_the_first_character() {
        assert_eq!(SeriesKey::new("male").label(), "Male");
        assert_eq!(SeriesKey::new("").label(), "");
        let keys: Vec<_> = StackSpec::two_way().keys().map(SeriesKey::label).collect();
        assert_eq!(keys, ["Male", "Female"]);
    }
}
