// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! The geometry mirrors d3-axis: a domain path with outer ticks at both ends, an inner tick per
//! tick value, and a label per tick placed `tick size + padding` away from the axis line. Label
//! offsets are expressed in em so they scale with the label font.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Brush;
use peniko::color::palette::css;
use strata_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::format::format_tick_with_step;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{CategoryScale, ScaleLinear};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Offset from the id base at which tick label ids start.
const LABEL_ID_OFFSET: u64 = 100_000;

/// A paint + width pair for stroked paths (domain lines, ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in surface coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain path and tick lines.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
        }
    }
}

/// Which side of the plot an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis below the plot; ticks and labels hang down.
    Bottom,
    /// A vertical axis left of the plot; ticks and labels extend left.
    Left,
}

/// The scale an axis describes.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    /// One tick per category, at the band center, labeled with the category name.
    Category(CategoryScale),
    /// Nice ticks of a linear scale, labeled with formatted values.
    Linear(ScaleLinear),
}

impl From<CategoryScale> for AxisScale {
    fn from(value: CategoryScale) -> Self {
        Self::Category(value)
    }
}

impl From<ScaleLinear> for AxisScale {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

/// One resolved tick: position along the axis and label text.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Position along the axis, in surface coordinates.
    pub position: f64,
    /// Label text.
    pub label: String,
}

/// An axis specification.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// The scale the axis describes.
    pub scale: AxisScale,
    /// Axis placement.
    pub orient: AxisOrient,
    /// Position of the axis line across the axis direction: `y` for bottom axes, `x` for left.
    pub offset: f64,
    /// Approximate number of ticks for linear scales.
    pub tick_count: usize,
    /// Length of the per-value tick lines.
    pub tick_size_inner: f64,
    /// Length of the ticks closing the domain path at both ends.
    pub tick_size_outer: f64,
    /// Gap between the tick end and the label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Label rotation in degrees, around the tick point.
    pub label_angle: f64,
    /// Label anchor.
    pub label_anchor: TextAnchor,
    /// Extra label offset along the rotated x axis, in em.
    pub label_dx: f64,
    /// Extra label offset along the rotated y axis, in em.
    pub label_dy: f64,
}

impl AxisSpec {
    /// Creates an axis with d3-like defaults.
    ///
    /// Ticks are 6 long with a padding of 3; bottom labels are centered and shifted down by
    /// `0.71em`, left labels are end-anchored and shifted by `0.32em` to sit on the tick.
    pub fn new(id_base: u64, scale: impl Into<AxisScale>, orient: AxisOrient) -> Self {
        let (label_anchor, label_dy) = match orient {
            AxisOrient::Bottom => (TextAnchor::Middle, 0.71),
            AxisOrient::Left => (TextAnchor::End, 0.32),
        };
        Self {
            id_base,
            scale: scale.into(),
            orient,
            offset: 0.0,
            tick_count: 10,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            label_angle: 0.0,
            label_anchor,
            label_dx: 0.0,
            label_dy,
        }
    }

    /// Convenience for a bottom axis.
    pub fn bottom(id_base: u64, scale: impl Into<AxisScale>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience for a left axis.
    pub fn left(id_base: u64, scale: impl Into<AxisScale>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Moves the axis line (`y` for bottom axes, `x` for left axes).
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the approximate tick count for linear scales.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the styling.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Rotates labels by `angle` degrees and places them with `anchor` and an em offset.
    pub fn with_label_placement(
        mut self,
        angle: f64,
        anchor: TextAnchor,
        dx_em: f64,
        dy_em: f64,
    ) -> Self {
        self.label_angle = angle;
        self.label_anchor = anchor;
        self.label_dx = dx_em;
        self.label_dy = dy_em;
        self
    }

    /// Resolves tick positions and labels.
    pub fn ticks(&self) -> Vec<AxisTick> {
        match &self.scale {
            AxisScale::Category(scale) => scale
                .domain()
                .iter()
                .enumerate()
                .map(|(i, name)| AxisTick {
                    position: scale.band().center(i),
                    label: String::from(&**name),
                })
                .collect(),
            AxisScale::Linear(scale) => {
                let step = scale.tick_step(self.tick_count);
                scale
                    .ticks(self.tick_count)
                    .into_iter()
                    .map(|v| AxisTick {
                        position: scale.map(v),
                        label: format_tick_with_step(v, step),
                    })
                    .collect()
            }
        }
    }

    /// The scale range the domain path spans.
    fn range(&self) -> (f64, f64) {
        match &self.scale {
            AxisScale::Category(scale) => scale.band().range(),
            AxisScale::Linear(scale) => scale.range(),
        }
    }

    /// Generates the axis marks: the domain path, tick lines, and labels.
    pub fn marks(&self) -> Vec<Mark> {
        let (r0, r1) = self.range();
        let k = self.offset;
        let outer = self.tick_size_outer;
        let inner = self.tick_size_inner;
        let spacing = inner.max(0.0) + self.tick_padding;
        let em = self.style.label_font_size;
        let rule = &self.style.rule;

        let mut domain = BezPath::new();
        match self.orient {
            AxisOrient::Bottom => {
                domain.move_to((r0, k + outer));
                domain.line_to((r0, k));
                domain.line_to((r1, k));
                domain.line_to((r1, k + outer));
            }
            AxisOrient::Left => {
                domain.move_to((k - outer, r0));
                domain.line_to((k, r0));
                domain.line_to((k, r1));
                domain.line_to((k - outer, r1));
            }
        }

        let ticks = self.ticks();
        let mut out = Vec::with_capacity(1 + 2 * ticks.len());
        out.push(
            RuleMarkSpec::new(MarkId::from_raw(self.id_base), domain)
                .with_stroke(rule.brush.clone(), rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
        );

        for (i, tick) in ticks.into_iter().enumerate() {
            let (at, tick_end, label_offset) = match self.orient {
                AxisOrient::Bottom => (
                    Point::new(tick.position, k),
                    Point::new(tick.position, k + inner),
                    (self.label_dx * em, spacing + self.label_dy * em),
                ),
                AxisOrient::Left => (
                    Point::new(k, tick.position),
                    Point::new(k - inner, tick.position),
                    (self.label_dx * em - spacing, self.label_dy * em),
                ),
            };
            out.push(
                RuleMarkSpec::segment(MarkId::from_raw(self.id_base + 1 + i as u64), at, tick_end)
                    .with_stroke(rule.brush.clone(), rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
            );
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + LABEL_ID_OFFSET + i as u64),
                    at,
                    tick.label,
                )
                .with_offset(label_offset.0, label_offset.1)
                .with_angle(self.label_angle)
                .with_anchor(self.label_anchor)
                .with_baseline(TextBaseline::Alphabetic)
                .with_font_size(em)
                .with_fill(self.style.label_fill.clone())
                .with_z_index(z_order::AXIS_LABELS)
                .mark(),
            );
        }
        out
    }
}
