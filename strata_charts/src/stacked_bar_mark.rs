// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar mark generation (from stacked layers).

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use strata_core::{Mark, MarkId};
use strata_transforms::{StackInterval, StackedLayer};

use crate::rect_mark::RectMarkSpec;
use crate::scale::ChartScales;
use crate::z_order;

/// A drawn bar: its mark id and the dataset row it represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarRef {
    /// Mark id of the bar.
    pub id: MarkId,
    /// Index of the layer (series) the bar belongs to.
    pub layer: usize,
    /// Dataset row of the bar.
    pub row: usize,
}

/// Vertical stacked bars: one rect per layer and category.
///
/// Bars span the category band horizontally and `value(upper)..value(lower)` vertically.
#[derive(Clone, Debug)]
pub struct StackedBarMarkSpec<'a> {
    /// Scales of the current render.
    pub scales: &'a ChartScales,
    /// Rendering order hint (`strata_core::Mark::z_index`).
    pub z_index: i32,
}

impl<'a> StackedBarMarkSpec<'a> {
    /// Creates a spec drawing with `scales`.
    pub fn new(scales: &'a ChartScales) -> Self {
        Self {
            scales,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Mark id of the bar for `(layer, row)`; stable across renders.
    pub fn bar_id(layer: usize, row: usize) -> MarkId {
        MarkId::for_row(
            u32::try_from(layer).unwrap_or(u32::MAX),
            u32::try_from(row).unwrap_or(u32::MAX),
        )
    }

    /// Bar geometry for one interval, or `None` if its category is not in the scale domain.
    ///
    /// The rect is `(x, y, x + bandwidth, y + height)` with `y = value(upper)` and
    /// `height = value(lower) - value(upper)`; a negative height is kept as is.
    pub fn bar_rect(&self, interval: &StackInterval) -> Option<Rect> {
        let x = self.scales.category.x(&interval.category)?;
        let width = self.scales.category.band_width();
        let y = self.scales.value.map(interval.upper);
        let height = self.scales.value.map(interval.lower) - y;
        Some(Rect::new(x, y, x + width, y + height))
    }

    /// Generates bar marks, layer by layer in stacking order.
    pub fn marks(&self, layers: &[StackedLayer]) -> (Vec<Mark>, Vec<BarRef>) {
        let total: usize = layers.iter().map(|l| l.intervals.len()).sum();
        let mut marks = Vec::with_capacity(total);
        let mut bars = Vec::with_capacity(total);
        for (layer_index, layer) in layers.iter().enumerate() {
            let fill = self.scales.color.map(&layer.key).cloned().unwrap_or_default();
            for interval in &layer.intervals {
                let Some(rect) = self.bar_rect(interval) else {
                    continue;
                };
                let id = Self::bar_id(layer_index, interval.row);
                marks.push(
                    RectMarkSpec::new(id, rect)
                        .with_fill(fill.clone())
                        .with_z_index(self.z_index)
                        .mark(),
                );
                bars.push(BarRef {
                    id,
                    layer: layer_index,
                    row: interval.row,
                });
            }
        }
        (marks, bars)
    }
}
