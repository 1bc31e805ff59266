// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order of chart-generated marks.
//!
//! Surfaces sort by `(z_index, MarkId)`, so equal layers still paint deterministically.

/// Stacked bars.
pub const SERIES_FILL: i32 = 0;

/// Axis domain paths and tick lines.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Chart title and caption.
pub const TITLES: i32 = 80;
