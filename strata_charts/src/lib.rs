// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar charts drawn as `strata_core` marks.
//!
//! This crate is the rendering pipeline above `strata_transforms`:
//! - **Scales** map category names, counts, and series keys into positions and fills.
//! - **Guides** (axes, legend, title, caption) are generated as `strata_core::Mark`s.
//! - **Bars** are rect marks with ids derived from `(layer, row)`.
//! - The **controller** ([`StackedBarChart`]) clears a [`strata_core::Surface`], redraws every
//!   mark, and binds tooltip handlers to the bars.
//!
//! Text shaping is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod config;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod interaction;
mod legend;
mod rect_mark;
mod rule_mark;
mod scale;
mod stacked_bar_chart;
mod stacked_bar_mark;
#[cfg(test)]
mod stacked_tests;
mod text_mark;
mod title;
mod z_order;

pub use axis::{AxisOrient, AxisScale, AxisSpec, AxisStyle, AxisTick, StrokeStyle};
pub use config::{ChartConfig, ChartFonts, SERIES_A_COLOR, SERIES_B_COLOR};
pub use format::{format_count, format_tick_with_step};
pub use interaction::{bind_tooltip, tooltip_html};
pub use legend::{LegendItem, LegendSwatches};
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{CategoryScale, ChartScales, ScaleBand, ScaleLinear, ScaleOrdinal};
pub use stacked_bar_chart::{
    CAPTION_ID, CATEGORY_AXIS_ID, ChartScene, ChartState, LEGEND_ID, StackedBarChart, TITLE_ID,
    VALUE_AXIS_ID,
};
pub use stacked_bar_mark::{BarRef, StackedBarMarkSpec};
pub use text_mark::TextMarkSpec;
pub use title::TitleSpec;
pub use z_order::*;
