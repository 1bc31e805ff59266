// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation: a vertical list of color swatches with text labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use strata_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::rect_mark::RectMarkSpec;
use crate::scale::ScaleOrdinal;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A simple legend row item.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

/// A vertical legend of swatches and labels.
#[derive(Clone, Debug)]
pub struct LegendSwatches {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Legend origin (top-left of the first swatch).
    pub origin: Point,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Distance between the tops of consecutive rows.
    pub row_step: f64,
    /// Label x, relative to the origin.
    pub label_x: f64,
    /// Label baseline y, relative to the top of its row.
    pub label_y: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatches {
    /// Creates a legend at `origin` with 12px swatches on a 20px row step and labels at
    /// `(18, 10)` within each row.
    pub fn new(id_base: u64, origin: Point) -> Self {
        Self {
            id_base,
            origin,
            swatch_size: 12.0,
            row_step: 20.0,
            label_x: 18.0,
            label_y: 10.0,
            font_size: 16.0,
            text_fill: Brush::default(),
            items: Vec::new(),
        }
    }

    /// Builds one item per key of an ordinal color scale, labeled with the capitalized key.
    pub fn from_color_scale(id_base: u64, origin: Point, scale: &ScaleOrdinal) -> Self {
        let items = scale
            .domain()
            .iter()
            .enumerate()
            .map(|(i, key)| LegendItem {
                label: key.label(),
                fill: scale.color_at(i).cloned().unwrap_or_default(),
            })
            .collect();
        Self::new(id_base, origin).with_items(items)
    }

    /// Sets the items.
    pub fn with_items(mut self, items: Vec<LegendItem>) -> Self {
        self.items = items;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the label color.
    pub fn with_text_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.text_fill = fill.into();
        self
    }

    /// Generate legend marks (swatch rect + label text per item).
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::with_capacity(2 * self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            let top = self.origin.y + i as f64 * self.row_step;
            let swatch = Rect::new(
                self.origin.x,
                top,
                self.origin.x + self.swatch_size,
                top + self.swatch_size,
            );
            out.push(
                RectMarkSpec::new(MarkId::from_raw(self.id_base + i as u64), swatch)
                    .with_fill(item.fill.clone())
                    .with_z_index(z_order::LEGEND_SWATCHES)
                    .mark(),
            );
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    Point::new(self.origin.x + self.label_x, top + self.label_y),
                    item.label.clone(),
                )
                .with_font_size(self.font_size)
                .with_fill(self.text_fill.clone())
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Alphabetic)
                .with_z_index(z_order::LEGEND_LABELS)
                .mark(),
            );
        }
        out
    }
}
