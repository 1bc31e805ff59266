// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales.
//!
//! These follow d3-scale semantics closely (band layout, linear ticks) so that charts match
//! what a browser rendering of the same data would show. All scales are plain values; a chart
//! builds fresh ones for every render.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Size;
use peniko::Brush;
use smallvec::SmallVec;
use strata_transforms::{Dataset, SeriesKey, StackSpec};

use crate::ChartConfig;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps every value to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// The domain as authored.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The range as authored.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice" tick values (multiples of 1, 2 or 5 times a power of ten) within the
    /// domain. `count` is a hint.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Spacing between the values returned by [`ScaleLinear::ticks`], or `0` if there are none.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (mut start, mut stop) = self.domain;
        let reverse = stop < start;
        if reverse {
            core::mem::swap(&mut start, &mut stop);
        }
        let step = match tick_spec(start, stop, count as f64) {
            Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
            Some((_, _, inc)) => inc,
            None => 0.0,
        };
        if reverse { -step } else { step }
    }
}

// Thresholds between the 1/2/5/10 tick multipliers: sqrt(50), sqrt(10), sqrt(2).
const E10: f64 = 7.0710678118654755;
const E5: f64 = 3.1622776601683795;
const E2: f64 = 1.4142135623730951;

/// Returns `(i1, i2, inc)` such that ticks are `i * inc` for `i` in `i1..=i2` when `inc > 0`,
/// and `i / -inc` when `inc < 0` (which keeps small steps exact).
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10_f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start {
            i1 += 1.0;
        }
        if i2 / k > stop {
            i2 -= 1.0;
        }
        inc = -k;
    } else {
        let k = 10_f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start {
            i1 += 1.0;
        }
        if i2 * k > stop {
            i2 -= 1.0;
        }
        inc = k;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return alloc::vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0).min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "n is a small positive integer-valued float, capped at 10k"
    )]
    let n = n as usize;

    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// A discrete band scale: `count` evenly spaced bands of equal width over a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a band scale covering `count` bands over `range`, without padding, centered.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding in units of the band step.
    ///
    /// Inner padding is clamped to `[0, 1]`, outer padding to `>= 0`.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let (lo, hi) = self.extent();
        let n = self.count as f64;
        (hi - lo) / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0)
    }

    /// Returns the band width.
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Returns the start position of the band at `index`.
    ///
    /// Leftover outer space is split evenly between both ends. Bands follow the range
    /// direction: for a reversed range, index 0 is the rightmost band.
    pub fn x(&self, index: usize) -> f64 {
        let (lo, hi) = self.extent();
        let n = self.count as f64;
        let step = self.step();
        let start = lo + (hi - lo - step * (n - self.padding_inner)) * 0.5;
        let slot = if self.range.1 < self.range.0 {
            self.count.saturating_sub(index + 1)
        } else {
            index
        };
        start + step * slot as f64
    }

    /// Returns the center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + 0.5 * self.band_width()
    }

    /// The range as authored.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    fn extent(&self) -> (f64, f64) {
        let (r0, r1) = self.range;
        if r1 < r0 { (r1, r0) } else { (r0, r1) }
    }
}

/// A band scale keyed by category name.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryScale {
    names: Vec<Arc<str>>,
    band: ScaleBand,
}

impl CategoryScale {
    /// Creates a category scale over `range`.
    ///
    /// The domain keeps first occurrences in input order; a repeated name maps to the band of
    /// its first occurrence.
    pub fn new<'a>(
        names: impl IntoIterator<Item = &'a Arc<str>>,
        range: (f64, f64),
        padding: f64,
    ) -> Self {
        let mut domain: Vec<Arc<str>> = Vec::new();
        for name in names {
            if !domain.contains(name) {
                domain.push(name.clone());
            }
        }
        let band = ScaleBand::new(range, domain.len()).with_padding(padding, padding);
        Self {
            names: domain,
            band,
        }
    }

    /// Category names, in band order.
    pub fn domain(&self) -> &[Arc<str>] {
        &self.names
    }

    /// The underlying band layout.
    pub fn band(&self) -> ScaleBand {
        self.band
    }

    /// Band width shared by every category.
    pub fn band_width(&self) -> f64 {
        self.band.band_width()
    }

    /// Position of `name` in the domain.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| &**n == name)
    }

    /// Start of the band for `name`, or `None` for an unknown category.
    pub fn x(&self, name: &str) -> Option<f64> {
        self.index_of(name).map(|i| self.band.x(i))
    }

    /// Center of the band for `name`, or `None` for an unknown category.
    pub fn center(&self, name: &str) -> Option<f64> {
        self.index_of(name).map(|i| self.band.center(i))
    }
}

/// A mapping from series keys to fills.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleOrdinal {
    keys: SmallVec<[SeriesKey; 2]>,
    palette: Vec<Brush>,
}

impl ScaleOrdinal {
    /// Creates an ordinal scale. The palette is cycled if it is shorter than the key list.
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a SeriesKey>, palette: &[Brush]) -> Self {
        Self {
            keys: keys.into_iter().cloned().collect(),
            palette: palette.to_vec(),
        }
    }

    /// Series keys, in domain order.
    pub fn domain(&self) -> &[SeriesKey] {
        &self.keys
    }

    /// Fill for the key at `index` in the domain.
    pub fn color_at(&self, index: usize) -> Option<&Brush> {
        if self.palette.is_empty() {
            return None;
        }
        self.palette.get(index % self.palette.len())
    }

    /// Fill for `key`, or `None` for an unknown key.
    pub fn map(&self, key: &SeriesKey) -> Option<&Brush> {
        let index = self.keys.iter().position(|k| k == key)?;
        self.color_at(index)
    }
}

/// The scales of one render.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScales {
    /// Category name to horizontal band.
    pub category: CategoryScale,
    /// Count to vertical position (larger counts are higher up).
    pub value: ScaleLinear,
    /// Series key to fill.
    pub color: ScaleOrdinal,
}

impl ChartScales {
    /// Builds scales for `dataset` drawn into a viewport of `size`.
    ///
    /// Returns `None` for an empty dataset.
    pub fn build(
        dataset: &Dataset,
        size: Size,
        config: &ChartConfig,
        stack: &StackSpec,
    ) -> Option<Self> {
        let max_total = dataset.max_total()?;
        let margin = config.margin;
        let category = CategoryScale::new(
            dataset.names(),
            (margin, size.width - margin),
            config.padding,
        );
        let value = ScaleLinear::new((0.0, max_total), (size.height - margin, margin));
        let color = ScaleOrdinal::new(stack.keys(), &config.palette);
        Some(Self {
            category,
            value,
            color,
        })
    }
}
