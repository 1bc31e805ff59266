// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroked path marks for axis domains and ticks.

use kurbo::{BezPath, Point};
use peniko::Brush;
use strata_core::{Mark, MarkId};

use crate::z_order;

/// A stroked, unfilled path.
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Path geometry in surface coordinates.
    pub path: BezPath,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width.
    pub stroke_width: f64,
    /// Rendering order hint (`strata_core::Mark::z_index`).
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a rule following `path`.
    pub fn new(id: MarkId, path: BezPath) -> Self {
        Self {
            id,
            path,
            stroke: Brush::default(),
            stroke_width: 1.0,
            z_index: z_order::AXIS_RULES,
        }
    }

    /// Creates a straight segment.
    pub fn segment(id: MarkId, from: Point, to: Point) -> Self {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        Self::new(id, path)
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::builder(self.id)
            .z_index(self.z_index)
            .path(self.path.clone())
            .stroke(self.stroke.clone(), self.stroke_width)
            .build()
    }
}
