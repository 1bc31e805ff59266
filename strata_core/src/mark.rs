// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved marks.
//!
//! A [`Mark`] is a fully resolved visual primitive: every geometric and paint property is a
//! constant. Charts rebuild their whole mark list on each render, so there are no encodings,
//! signals, or diffs here.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// Stable identity for a mark within one surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    const ROW_BIT: u64 = 1 << 63;

    /// Creates an id from a raw value.
    ///
    /// Guide generators use small hand-picked bases plus offsets. Keep raw ids below `2^63`;
    /// the upper half is reserved for [`MarkId::for_row`].
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Largest group index that [`MarkId::for_row`] keeps distinct.
    pub const MAX_GROUP: u32 = (1 << 31) - 1;

    /// Derives the id of a per-row mark from a group index (e.g. a stacked layer) and a row.
    ///
    /// The group occupies bits 32..63 below the row tag. Groups above [`MarkId::MAX_GROUP`]
    /// are clamped to it and share its ids.
    pub const fn for_row(group: u32, row: u32) -> Self {
        let group = if group > Self::MAX_GROUP {
            Self::MAX_GROUP
        } else {
            group
        };
        Self(Self::ROW_BIT | ((group as u64) << 32) | row as u64)
    }

    /// Returns `true` if this id was produced by [`MarkId::for_row`].
    pub const fn is_row(self) -> bool {
        self.0 & Self::ROW_BIT != 0
    }
}

/// The primitive kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// A single line of text.
    Text,
    /// A filled and/or stroked path.
    Path,
}

/// Horizontal text anchoring relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position marks the start of the text.
    Start,
    /// The position marks the middle of the text.
    Middle,
    /// The position marks the end of the text.
    End,
}

/// Vertical text alignment relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    Alphabetic,
    /// Vertical middle of the em box.
    Middle,
    /// Hanging baseline (text hangs below the position).
    Hanging,
}

/// Rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry as authored.
    ///
    /// The rectangle is not normalized: a negative height is kept so that malformed input
    /// data stays visible downstream.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position; also the rotation origin.
    pub pos: Point,
    /// Offset applied after rotation, along the rotated x axis.
    pub dx: f64,
    /// Offset applied after rotation, along the rotated y axis.
    pub dy: f64,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in surface coordinates.
    pub font_size: f64,
    /// CSS-style font weight.
    pub font_weight: u16,
    /// Rotation in degrees, clockwise.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; zero disables stroking.
    pub stroke_width: f64,
}

/// The resolved content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Rectangle payload.
    Rect(RectPayload),
    /// Text payload.
    Text(Box<TextPayload>),
    /// Path payload.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the primitive kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Returns normalized geometric bounds, if they can be computed without text metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect.abs()),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A single resolved mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Paint order; lower values paint first. Ties are broken by id.
    pub z_index: i32,
    /// Resolved content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder { id, z_index: 0 }
    }

    /// Returns the primitive kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns the rectangle payload, if this is a rect mark.
    pub fn as_rect(&self) -> Option<&RectPayload> {
        match &self.payload {
            MarkPayload::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the path payload, if this is a path mark.
    pub fn as_path(&self) -> Option<&PathPayload> {
        match &self.payload {
            MarkPayload::Path(p) => Some(p),
            _ => None,
        }
    }
}

/// Entry point of the mark builder; picks the primitive kind.
#[derive(Clone, Copy, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    z_index: i32,
}

impl MarkBuilder {
    /// Sets the paint order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Continues as a rect mark.
    pub fn rect(self, rect: Rect) -> RectMarkBuilder {
        RectMarkBuilder {
            id: self.id,
            z_index: self.z_index,
            payload: RectPayload {
                rect,
                fill: Brush::default(),
            },
        }
    }

    /// Continues as a text mark.
    pub fn text(self, pos: Point, text: impl Into<String>) -> TextMarkBuilder {
        TextMarkBuilder {
            id: self.id,
            z_index: self.z_index,
            payload: TextPayload {
                pos,
                dx: 0.0,
                dy: 0.0,
                text: text.into(),
                font_size: 10.0,
                font_weight: 400,
                angle: 0.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Alphabetic,
                fill: Brush::default(),
            },
        }
    }

    /// Continues as a path mark.
    pub fn path(self, path: BezPath) -> PathMarkBuilder {
        PathMarkBuilder {
            id: self.id,
            z_index: self.z_index,
            payload: PathPayload {
                path,
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: Brush::default(),
                stroke_width: 0.0,
            },
        }
    }
}

/// Builder for rect marks.
#[derive(Clone, Debug)]
pub struct RectMarkBuilder {
    id: MarkId,
    z_index: i32,
    payload: RectPayload,
}

impl RectMarkBuilder {
    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.payload.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload: MarkPayload::Rect(self.payload),
        }
    }
}

/// Builder for text marks.
#[derive(Clone, Debug)]
pub struct TextMarkBuilder {
    id: MarkId,
    z_index: i32,
    payload: TextPayload,
}

impl TextMarkBuilder {
    /// Sets the post-rotation offsets.
    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.payload.dx = dx;
        self.payload.dy = dy;
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.payload.font_size = font_size;
        self
    }

    /// Sets the font weight.
    pub fn font_weight(mut self, font_weight: u16) -> Self {
        self.payload.font_weight = font_weight;
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn angle(mut self, angle: f64) -> Self {
        self.payload.angle = angle;
        self
    }

    /// Sets the horizontal anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.payload.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.payload.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.payload.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload: MarkPayload::Text(Box::new(self.payload)),
        }
    }
}

/// Builder for path marks.
#[derive(Clone, Debug)]
pub struct PathMarkBuilder {
    id: MarkId,
    z_index: i32,
    payload: PathPayload,
}

impl PathMarkBuilder {
    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.payload.fill = fill.into();
        self
    }

    /// Sets the stroke paint and width.
    pub fn stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.payload.stroke = stroke.into();
        self.payload.stroke_width = stroke_width;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload: MarkPayload::Path(self.payload),
        }
    }
}
