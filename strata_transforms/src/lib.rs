// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data model and transforms for Strata charts.
//!
//! This crate provides:
//! - [`CategoryRecord`] and [`Dataset`], the per-category counts a chart is fed,
//! - decoding of the host JSON payload into a [`Dataset`], and
//! - the stack transform ([`StackSpec::apply`]) that turns records into layered intervals.
//!
//! Everything is a full recompute: inputs are never mutated and nothing is cached.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod input;
mod record;
mod stack;

pub use input::DatasetError;
pub use record::{CategoryRecord, Dataset};
pub use stack::{SeriesKey, SeriesSpec, StackInterval, StackSpec, StackedLayer, ValueAccessor};
