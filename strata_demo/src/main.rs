// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host demo for `strata_charts`.
//!
//! Usage: `strata_demo [DATASET.json] [OUT_DIR]`. Without a dataset path an embedded sample is
//! used; snapshots are written to `OUT_DIR` (default: the current directory).
//!
//! The demo plays the host role: it renders once, simulates hovering a bar, resizes the
//! surface, and renders again. Set `RUST_LOG=debug` (or `trace`) to follow the pipeline.

mod svg;

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use kurbo::Point;
use strata_charts::{ChartState, StackedBarChart};
use strata_core::{MarkKind, PointerEvent, Surface, Tooltip};
use strata_transforms::{Dataset, DatasetError};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = include_str!("../data/states.json");

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// A tooltip that logs what a browser tooltip would show.
#[derive(Debug, Default)]
struct LogTooltip {
    visible: Cell<bool>,
    position: Cell<Point>,
    content: RefCell<String>,
}

impl Tooltip for LogTooltip {
    fn move_to(&self, event: &PointerEvent) {
        self.visible.set(true);
        self.position.set(event.position);
        tracing::debug!(x = event.position.x, y = event.position.y, "tooltip moved");
    }

    fn set_content(&self, html: &str) {
        html.clone_into(&mut self.content.borrow_mut());
        tracing::info!(content = html, "tooltip shown");
    }

    fn hide(&self) {
        self.visible.set(false);
        tracing::info!("tooltip hidden");
    }
}

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args_os().skip(1);
    let dataset = match args.next().map(PathBuf::from) {
        Some(path) => {
            let bytes = std::fs::read(&path).map_err(|source| DemoError::Read {
                path: path.clone(),
                source,
            })?;
            Dataset::from_json_slice(&bytes)?
        }
        None => Dataset::from_json(SAMPLE)?,
    };
    let out_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);
    tracing::info!(categories = dataset.len(), "dataset loaded");

    let chart = StackedBarChart::new();
    let log_tooltip = Rc::new(LogTooltip::default());
    let tooltip: Rc<dyn Tooltip> = log_tooltip.clone();
    let mut surface = Surface::new(960.0, 500.0);

    // The host may fire before the data arrives.
    let state = chart.render(None, Some(&mut surface), &tooltip);
    tracing::info!(?state, "render before data");

    let state = chart.render(Some(&dataset), Some(&mut surface), &tooltip);
    tracing::info!(?state, marks = surface.len(), "initial render");
    write_snapshot(&surface, &out_dir.join("strata_chart.svg"))?;

    if state == ChartState::Rendered {
        simulate_hover(&mut surface);
        tracing::info!(
            visible = log_tooltip.visible.get(),
            at = ?log_tooltip.position.get(),
            last = %log_tooltip.content.borrow(),
            "tooltip after hover"
        );
    }

    surface.resize(640.0, 400.0);
    let state = chart.render(Some(&dataset), Some(&mut surface), &tooltip);
    tracing::info!(?state, marks = surface.len(), "render after resize");
    write_snapshot(&surface, &out_dir.join("strata_chart_resized.svg"))?;

    Ok(())
}

/// Moves the pointer into the first bar, wiggles it, and leaves the surface.
fn simulate_hover(surface: &mut Surface) {
    let Some(target) = surface
        .marks()
        .iter()
        .find(|m| m.kind() == MarkKind::Rect && m.id.is_row())
        .and_then(|m| m.payload.bounds())
        .map(|b| b.center())
    else {
        tracing::warn!("no bar to hover");
        return;
    };
    surface.pointer_move(target);
    surface.pointer_move(target + kurbo::Vec2::new(1.0, -1.0));
    surface.pointer_leave();
}

fn write_snapshot(surface: &Surface, path: &Path) -> Result<(), DemoError> {
    std::fs::write(path, svg::surface_to_svg(surface)).map_err(|source| DemoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote snapshot");
    Ok(())
}
