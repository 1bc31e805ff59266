// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles and captions.
//!
//! Both are single text marks positioned relative to the viewport rather than the plot.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Size};
use peniko::Brush;
use strata_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A chart-level title or caption.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Title text (unshaped).
    pub text: String,
    /// Font size in surface coordinates.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: u16,
    /// Fill paint.
    pub fill: Brush,
    /// Horizontal anchor at the title position.
    pub anchor: TextAnchor,
    /// Rendering order hint (`strata_core::Mark::z_index`).
    pub z_index: i32,
}

impl TitleSpec {
    /// Creates a title spec with default styling.
    pub fn new(id: MarkId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            font_size: 12.0,
            font_weight: 400,
            fill: Brush::default(),
            anchor: TextAnchor::Middle,
            z_index: z_order::TITLES,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font weight.
    pub fn with_font_weight(mut self, font_weight: u16) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Generates the title mark with its baseline at `pos`.
    pub fn mark(&self, pos: Point) -> Mark {
        TextMarkSpec::new(self.id, pos, self.text.clone())
            .with_font_size(self.font_size)
            .with_font_weight(self.font_weight)
            .with_fill(self.fill.clone())
            .with_anchor(self.anchor)
            .with_baseline(TextBaseline::Alphabetic)
            .with_z_index(self.z_index)
            .mark()
    }

    /// Generates the chart title: centered, half a margin from the top.
    pub fn heading_mark(&self, viewport: Size, margin: f64) -> Mark {
        self.mark(Point::new(viewport.width / 2.0, margin / 2.0))
    }

    /// Generates a caption: 20 from the right edge, a third of the way down.
    pub fn caption_mark(&self, viewport: Size) -> Mark {
        self.mark(Point::new(viewport.width - 20.0, viewport.height / 3.0))
    }
}
