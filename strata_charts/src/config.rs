// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use peniko::color::palette::css;
use peniko::{Brush, Color};

/// Fill for the first series (`male`).
pub const SERIES_A_COLOR: Color = Color::from_rgb8(0x31, 0x82, 0xbd);
/// Fill for the second series (`female`).
pub const SERIES_B_COLOR: Color = Color::from_rgb8(0xe6, 0x55, 0x0d);

/// Font sizes and text paint used by the chart's guides.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFonts {
    /// Axis tick label size.
    pub axis_size: f64,
    /// Legend label size.
    pub legend_size: f64,
    /// Caption size.
    pub caption_size: f64,
    /// Title size; `None` uses half the margin.
    pub title_size: Option<f64>,
    /// Title weight.
    pub title_weight: u16,
    /// Paint for all guide text.
    pub fill: Brush,
}

impl Default for ChartFonts {
    fn default() -> Self {
        Self {
            axis_size: 10.0,
            // Legend labels carry no explicit size and use the usual 16px text default.
            legend_size: 16.0,
            caption_size: 10.0,
            title_size: None,
            title_weight: 700,
            fill: Brush::Solid(css::BLACK),
        }
    }
}

/// Everything about a stacked bar chart that is not data or viewport size.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Space reserved on every side of the plot for axes, title, and legend.
    pub margin: f64,
    /// Band padding, as a fraction of the band step, used for inner and outer padding.
    pub padding: f64,
    /// Series fills, in series-key order. Cycled when shorter than the key list.
    pub palette: Vec<Brush>,
    /// Chart title.
    pub title: String,
    /// Caption drawn at the right edge.
    pub caption: String,
    /// Tooltip label for the category total.
    pub total_label: String,
    /// Requested number of value-axis ticks.
    pub tick_count: usize,
    /// Category label rotation in degrees.
    pub label_angle: f64,
    /// Guide text styling.
    pub fonts: ChartFonts,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: 50.0,
            padding: 0.2,
            palette: vec![Brush::Solid(SERIES_A_COLOR), Brush::Solid(SERIES_B_COLOR)],
            title: String::from("Gun Deaths by Gender per State"),
            caption: String::from("Stacked bar chart: gender-based analysis"),
            total_label: String::from("Total Deaths"),
            tick_count: 10,
            label_angle: -45.0,
            fonts: ChartFonts::default(),
        }
    }
}

impl ChartConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the band padding fraction.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the series palette.
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = impl Into<Brush>>) -> Self {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the title text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the caption text.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Sets the tooltip label for category totals.
    pub fn with_total_label(mut self, label: impl Into<String>) -> Self {
        self.total_label = label.into();
        self
    }

    /// Sets the requested value-axis tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the category label rotation (degrees).
    pub fn with_label_angle(mut self, angle: f64) -> Self {
        self.label_angle = angle;
        self
    }

    /// Sets guide text styling.
    pub fn with_fonts(mut self, fonts: ChartFonts) -> Self {
        self.fonts = fonts;
        self
    }

    /// Effective title font size.
    pub fn title_font_size(&self) -> f64 {
        self.fonts.title_size.unwrap_or(self.margin / 2.0)
    }
}
