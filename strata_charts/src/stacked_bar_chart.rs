// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stacked bar chart controller.
//!
//! [`StackedBarChart::render`] runs the whole pipeline whenever the host reports a change to
//! the dataset or the surface: stack the records, build scales for the current viewport, clear
//! the surface, draw bars and guides, and bind tooltips to the bars.

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use strata_core::{Mark, MarkId, Surface, TextAnchor, Tooltip};
use strata_transforms::{Dataset, StackSpec, StackedLayer};

use crate::axis::AxisSpec;
use crate::config::ChartConfig;
use crate::interaction::{bind_tooltip, tooltip_html};
use crate::legend::LegendSwatches;
use crate::scale::ChartScales;
use crate::stacked_bar_mark::{BarRef, StackedBarMarkSpec};
use crate::title::TitleSpec;
use crate::{AxisStyle, StrokeStyle};

/// Id base of the category (bottom) axis marks.
pub const CATEGORY_AXIS_ID: u64 = 1_000_000;
/// Id base of the value (left) axis marks.
pub const VALUE_AXIS_ID: u64 = 2_000_000;
/// Id base of the legend marks.
pub const LEGEND_ID: u64 = 3_000_000;
/// Id of the title mark.
pub const TITLE_ID: MarkId = MarkId::from_raw(4_000_000);
/// Id of the caption mark.
pub const CAPTION_ID: MarkId = MarkId::from_raw(4_000_001);

/// What a call to [`StackedBarChart::render`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartState {
    /// Inputs were missing or the dataset was empty; nothing was drawn.
    Idle,
    /// The full scene was drawn.
    Rendered,
}

/// Marks for one render, plus the bars that need tooltip bindings.
#[derive(Clone, Debug)]
pub struct ChartScene {
    /// Every mark, unordered (surfaces keep paint order).
    pub marks: Vec<Mark>,
    /// Drawn bars.
    pub bars: Vec<BarRef>,
    /// Scales used to place the marks.
    pub scales: ChartScales,
}

/// A stacked, grouped count chart.
///
/// The chart owns only configuration; datasets and surfaces are passed in per render.
#[derive(Clone, Debug, Default)]
pub struct StackedBarChart {
    config: ChartConfig,
    stack: StackSpec,
}

impl StackedBarChart {
    /// Creates a chart with the default configuration and the two-way series split.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the series to stack.
    pub fn with_stack(mut self, stack: StackSpec) -> Self {
        self.stack = stack;
        self
    }

    /// The configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The stacked series.
    pub fn stack(&self) -> &StackSpec {
        &self.stack
    }

    /// Builds scales for `dataset` in a viewport of `size`; `None` for an empty dataset.
    pub fn scales(&self, dataset: &Dataset, size: Size) -> Option<ChartScales> {
        ChartScales::build(dataset, size, &self.config, &self.stack)
    }

    /// Builds every mark of the chart without touching a surface.
    pub fn scene(&self, dataset: &Dataset, size: Size) -> Option<ChartScene> {
        let layers = self.stack.apply(dataset);
        let scales = self.scales(dataset, size)?;
        Some(self.scene_with(&layers, scales, size))
    }

    fn scene_with(&self, layers: &[StackedLayer], scales: ChartScales, size: Size) -> ChartScene {
        let config = &self.config;
        let fonts = &config.fonts;
        let margin = config.margin;
        let axis_style = AxisStyle {
            rule: StrokeStyle::solid(fonts.fill.clone(), 1.0),
            label_fill: fonts.fill.clone(),
            label_font_size: fonts.axis_size,
        };

        let (mut marks, bars) = StackedBarMarkSpec::new(&scales).marks(layers);

        marks.extend(
            AxisSpec::bottom(CATEGORY_AXIS_ID, scales.category.clone())
                .with_offset(size.height - margin + 1.0)
                .with_style(axis_style.clone())
                .with_label_placement(config.label_angle, TextAnchor::End, -0.8, 0.15)
                .marks(),
        );
        marks.extend(
            AxisSpec::left(VALUE_AXIS_ID, scales.value)
                .with_offset(margin - 2.0)
                .with_tick_count(config.tick_count)
                .with_style(axis_style)
                .marks(),
        );

        marks.push(
            TitleSpec::new(TITLE_ID, config.title.clone())
                .with_font_size(config.title_font_size())
                .with_font_weight(fonts.title_weight)
                .with_fill(fonts.fill.clone())
                .heading_mark(size, margin),
        );

        marks.extend(
            LegendSwatches::from_color_scale(
                LEGEND_ID,
                Point::new(size.width - 2.0 * margin, margin),
                &scales.color,
            )
            .with_font_size(fonts.legend_size)
            .with_text_fill(fonts.fill.clone())
            .marks(),
        );

        marks.push(
            TitleSpec::new(CAPTION_ID, config.caption.clone())
                .with_font_size(fonts.caption_size)
                .with_fill(fonts.fill.clone())
                .with_anchor(TextAnchor::End)
                .caption_mark(size),
        );

        ChartScene {
            marks,
            bars,
            scales,
        }
    }

    /// Redraws the chart on `surface`.
    ///
    /// With a missing dataset, a missing surface, or an empty dataset this is a no-op that
    /// leaves the surface untouched and returns [`ChartState::Idle`]. Otherwise the surface is
    /// cleared (dropping previous marks and tooltip bindings) and the full scene is drawn.
    pub fn render(
        &self,
        dataset: Option<&Dataset>,
        surface: Option<&mut Surface>,
        tooltip: &Rc<dyn Tooltip>,
    ) -> ChartState {
        let (Some(dataset), Some(surface)) = (dataset, surface) else {
            tracing::trace!("chart inputs not ready; skipping render");
            return ChartState::Idle;
        };
        if dataset.is_empty() {
            tracing::debug!("empty dataset; skipping render");
            return ChartState::Idle;
        }

        let size = surface.size();
        let Some(scene) = self.scene(dataset, size) else {
            return ChartState::Idle;
        };

        surface.clear();
        let mark_count = scene.marks.len();
        surface.extend(scene.marks);

        let records = dataset.records();
        let mut html: Vec<Option<Rc<str>>> = alloc::vec![None; records.len()];
        for bar in &scene.bars {
            let (Some(record), Some(slot)) = (records.get(bar.row), html.get_mut(bar.row)) else {
                continue;
            };
            // Both layers of a category share one tooltip string.
            let content = slot
                .get_or_insert_with(|| {
                    tooltip_html(record, &self.stack, &self.config.total_label).into()
                })
                .clone();
            bind_tooltip(surface, bar.id, content, tooltip);
        }

        tracing::debug!(
            categories = records.len(),
            bars = scene.bars.len(),
            marks = mark_count,
            width = size.width,
            height = size.height,
            "rendered stacked bar chart"
        );
        ChartState::Rendered
    }
}
