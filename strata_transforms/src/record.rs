// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category records and datasets.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

/// Counts for one category (e.g. a geographic region).
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRecord {
    /// Category identifier, unique within a dataset.
    pub name: Arc<str>,
    /// Total count for the category.
    pub total: f64,
    /// Count attributed to the first sub-series.
    pub part_a: f64,
}

impl CategoryRecord {
    /// Creates a record.
    pub fn new(name: impl Into<Arc<str>>, total: f64, part_a: f64) -> Self {
        Self {
            name: name.into(),
            total,
            part_a,
        }
    }

    /// Count attributed to the second sub-series, `total - part_a`.
    ///
    /// This is negative when `part_a > total`; the value is not clamped.
    pub fn part_b(&self) -> f64 {
        self.total - self.part_a
    }
}

/// An ordered sequence of category records.
///
/// Order is preserved for axis display and carries no other meaning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CategoryRecord>,
}

impl Dataset {
    /// Creates a dataset from records, keeping their order.
    pub fn new(records: Vec<CategoryRecord>) -> Self {
        Self { records }
    }

    /// Records in input order.
    pub fn records(&self) -> &[CategoryRecord] {
        &self.records
    }

    /// Iterates records in input order.
    pub fn iter(&self) -> core::slice::Iter<'_, CategoryRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Category names in input order.
    pub fn names(&self) -> impl Iterator<Item = &Arc<str>> + '_ {
        self.records.iter().map(|r| &r.name)
    }

    /// Largest `total`, or `None` for an empty dataset.
    pub fn max_total(&self) -> Option<f64> {
        self.records.iter().map(|r| r.total).reduce(f64::max)
    }

    /// Looks up a record by category name.
    pub fn get(&self, name: &str) -> Option<&CategoryRecord> {
        self.records.iter().find(|r| &*r.name == name)
    }
}

impl FromIterator<CategoryRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = CategoryRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CategoryRecord;
    type IntoIter = core::slice::Iter<'a, CategoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
