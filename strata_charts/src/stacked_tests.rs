// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use strata_core::{Mark, MarkId, MarkKind, PointerEvent, Surface, Tooltip};
use strata_transforms::{CategoryRecord, Dataset, StackSpec};

use crate::{
    CATEGORY_AXIS_ID, ChartConfig, ChartFonts, ChartState, LEGEND_ID, StackedBarChart,
    StackedBarMarkSpec, VALUE_AXIS_ID, z_order,
};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Move(Point),
    Content(String),
    Hide,
}

#[derive(Default)]
struct RecordingTooltip {
    calls: RefCell<Vec<Call>>,
}

impl RecordingTooltip {
    fn take(&self) -> Vec<Call> {
        core::mem::take(&mut *self.calls.borrow_mut())
    }
}

impl Tooltip for RecordingTooltip {
    fn move_to(&self, event: &PointerEvent) {
        self.calls.borrow_mut().push(Call::Move(event.position));
    }

    fn set_content(&self, html: &str) {
        self.calls.borrow_mut().push(Call::Content(html.to_string()));
    }

    fn hide(&self) {
        self.calls.borrow_mut().push(Call::Hide);
    }
}

fn tooltip() -> (Rc<RecordingTooltip>, Rc<dyn Tooltip>) {
    let recording = Rc::new(RecordingTooltip::default());
    let shared: Rc<dyn Tooltip> = recording.clone();
    (recording, shared)
}

fn dataset(rows: &[(&str, f64, f64)]) -> Dataset {
    rows.iter()
        .map(|&(name, total, part_a)| CategoryRecord::new(name, total, part_a))
        .collect()
}

fn bar(surface: &Surface, layer: usize, row: usize) -> Rect {
    surface
        .mark(StackedBarMarkSpec::bar_id(layer, row))
        .and_then(Mark::as_rect)
        .map(|r| r.rect)
        .expect("missing bar")
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9, "{a} != {b}");
}

fn assert_rect_close(a: Rect, b: Rect) {
    let eps = 1e-9;
    assert!((a.x0 - b.x0).abs() <= eps, "x0 {a:?} != {b:?}");
    assert!((a.y0 - b.y0).abs() <= eps, "y0 {a:?} != {b:?}");
    assert!((a.x1 - b.x1).abs() <= eps, "x1 {a:?} != {b:?}");
    assert!((a.y1 - b.y1).abs() <= eps, "y1 {a:?} != {b:?}");
}

#[test]
fn single_category_is_centered_and_split_at_part_a() {
    let chart = StackedBarChart::new();
    let (_, tip) = tooltip();
    let mut surface = Surface::new(500.0, 300.0);
    let ds = dataset(&[("AA", 100.0, 60.0)]);

    assert_eq!(
        chart.render(Some(&ds), Some(&mut surface), &tip),
        ChartState::Rendered
    );

    let scales = chart.scales(&ds, surface.size()).expect("scales");
    let v = |x: f64| scales.value.map(x);
    let x0 = 50.0 + 400.0 / 6.0;
    let x1 = x0 + 400.0 / 1.2 * 0.8;
    assert_close((x0 + x1) / 2.0, 250.0);

    assert_rect_close(bar(&surface, 0, 0), Rect::new(x0, v(60.0), x1, v(0.0)));
    assert_rect_close(bar(&surface, 1, 0), Rect::new(x0, v(100.0), x1, v(60.0)));
    assert_close(v(60.0), 130.0);
}

#[test]
fn value_scale_spans_the_margins() {
    let chart = StackedBarChart::new();
    let ds = dataset(&[("A", 10.0, 4.0), ("B", 90.0, 50.0)]);
    let scales = chart
        .scales(&ds, kurbo::Size::new(640.0, 480.0))
        .expect("scales");
    assert_eq!(scales.value.domain(), (0.0, 90.0));
    assert_eq!(scales.value.map(0.0), 480.0 - 50.0);
    assert_eq!(scales.value.map(90.0), 50.0);
}

#[test]
fn tallest_bar_reaches_the_top_margin() {
    let chart = StackedBarChart::new();
    let (_, tip) = tooltip();
    let mut surface = Surface::new(500.0, 300.0);
    let ds = dataset(&[("A", 10.0, 4.0), ("B", 90.0, 50.0)]);
    chart.render(Some(&ds), Some(&mut surface), &tip);

    assert_close(bar(&surface, 1, 1).y0, 50.0);
    assert_close(bar(&surface, 0, 1).y1, 250.0);
    assert_close(bar(&surface, 0, 0).y1, 250.0);
}

#[test]
fn stacked_bars_reconstruct_each_total() {
    let chart = StackedBarChart::new();
    let (_, tip) = tooltip();
    let mut surface = Surface::new(700.0, 400.0);
    let rows = [("A", 120.0, 70.0), ("B", 45.0, 45.0), ("C", 300.0, 10.0)];
    let ds = dataset(&rows);
    chart.render(Some(&ds), Some(&mut surface), &tip);
    let scales = chart.scales(&ds, surface.size()).expect("scales");

    for (row, &(_, total, _)) in rows.iter().enumerate() {
        let a = bar(&surface, 0, row);
        let b = bar(&surface, 1, row);
        assert_close(a.y1, scales.value.map(0.0));
        assert_close(a.y0, b.y1);
        assert_close(b.y0, scales.value.map(total));
    }
}

#[test]
fn bands_increase_without_overlap() {
    let chart = StackedBarChart::new();
    let (_, tip) = tooltip();
    let mut surface = Surface::new(900.0, 400.0);
    let names = ["WY", "AK", "TX", "CA", "NY", "IL", "OH"];
    let rows: Vec<(&str, f64, f64)> = names.iter().map(|n| (*n, 10.0, 5.0)).collect();
    chart.render(Some(&dataset(&rows)), Some(&mut surface), &tip);

    let bars: Vec<Rect> = (0..names.len()).map(|row| bar(&surface, 0, row)).collect();
    let width = bars[0].width();
    for pair in bars.windows(2) {
        assert!(pair[0].x0 < pair[1].x0, "bands out of input order");
        assert!(pair[0].x1 < pair[1].x0, "bands overlap");
        assert_close(pair[1].width(), width);
    }
    assert!(bars[0].x0 > 50.0);
    assert!(bars[names.len() - 1].x1 < 850.0);
}

#[test]
fn rerendering_is_bit_identical() {
    let chart = StackedBarChart::new();
    let (_, tip) = tooltip();
    let ds = dataset(&[("A", 13.0, 7.0), ("B", 1234.5, 600.25), ("C", 0.0, 0.0)]);

    let mut first = Surface::new(640.0, 360.0);
    let mut second = Surface::new(640.0, 360.0);
    chart.render(Some(&ds), Some(&mut first), &tip);
    chart.render(Some(&ds), Some(&mut second), &tip);
    chart.render(Some(&ds), Some(&mut second), &tip);
    assert_eq!(first.marks(), second.marks());
}

#[test]
fn hover_moves_and_fills_the_tooltip_once_then_hides() {
    let chart = StackedBarChart::new();
    let (recording, tip) = tooltip();
    let mut surface = Surface::new(500.0, 300.0);
    chart.render(
        Some(&dataset(&[("AA", 100.0, 60.0)])),
        Some(&mut surface),
        &tip,
    );

    let inside = bar(&surface, 0, 0).center();
    surface.pointer_move(inside);
    let calls = recording.take();
    assert_eq!(calls.len(), 2, "{calls:?}");
    assert_eq!(calls[0], Call::Move(inside));
    let Call::Content(html) = &calls[1] else {
        panic!("expected content, got {calls:?}");
    };
    for needle in ["AA", "Total Deaths: 100", "Male: 60", "Female: 40"] {
        assert!(html.contains(needle), "{html} lacks {needle}");
    }

    let nudged = inside + kurbo::Vec2::new(1.0, 1.0);
    surface.pointer_move(nudged);
    assert_eq!(recording.take(), [Call::Move(nudged)]);

    surface.pointer_move(Point::new(5.0, 5.0));
    assert_eq!(recording.take(), [Call::Hide]);

    surface.pointer_move(inside);
    recording.take();
    surface.pointer_leave();
    assert_eq!(recording.take(), [Call::Hide]);
}

#[test]
fn moving_between_layers_hides_then_refills() {
    let chart = StackedBarChart::new();
    let (recording, tip) = tooltip();
    let mut surface = Surface::new(500.0, 300.0);
    chart.render(
        Some(&dataset(&[("AA", 100.0, 60.0)])),
        Some(&mut surface),
        &tip,
    );

    surface.pointer_move(bar(&surface, 0, 0).center());
    recording.take();
    let upper = bar(&surface, 1, 0).center();
    surface.pointer_move(upper);
    let calls = recording.take();
    assert_eq!(calls.len(), 3, "{calls:?}");
    assert_eq!(calls[0], Call::Hide);
    assert_eq!(calls[1], Call::Move(upper));
    assert!(matches!(&calls[2], Call::Content(html) if html.starts_with("AA</br>")));
}

#[test]
fn resizing_keeps_the_series_ratio() {
    let chart = StackedBarChart::new();
    let (_, tip) = tooltip();
    let ds = dataset(&[("AA", 100.0, 60.0), ("BB", 50.0, 10.0)]);
    let mut surface = Surface::new(500.0, 300.0);

    chart.render(Some(&ds), Some(&mut surface), &tip);
    let before = (bar(&surface, 0, 0), bar(&surface, 1, 0));

    surface.resize(800.0, 600.0);
    chart.render(Some(&ds), Some(&mut surface), &tip);
    let after = (bar(&surface, 0, 0), bar(&surface, 1, 0));

    assert_ne!(before.0, after.0);
    assert_close(before.0.height() / before.1.height(), 1.5);
    assert_close(after.0.height() / after.1.height(), 1.5);
}

#[test]
fn missing_or_empty_inputs_leave_the_surface_alone() {
    let chart = StackedBarChart::new();
    let (recording, tip) = tooltip();
    let ds = dataset(&[("AA", 100.0, 60.0)]);

    let mut surface = Surface::new(500.0, 300.0);
    let sentinel = Mark::builder(MarkId::from_raw(42))
        .rect(Rect::new(0.0, 0.0, 1.0, 1.0))
        .build();
    surface.push(sentinel.clone());

    assert_eq!(chart.render(None, Some(&mut surface), &tip), ChartState::Idle);
    assert_eq!(chart.render(Some(&ds), None, &tip), ChartState::Idle);
    assert_eq!(
        chart.render(Some(&Dataset::default()), Some(&mut surface), &tip),
        ChartState::Idle
    );
    assert_eq!(surface.marks(), [sentinel]);
    assert!(recording.take().is_empty());

    assert_eq!(
        chart.render(Some(&ds), Some(&mut surface), &tip),
        ChartState::Rendered
    );
    assert!(surface.mark(MarkId::from_raw(42)).is_none());
}

#[test]
fn negative_second_series_is_drawn_as_is() {
    let chart = StackedBarChart::new();
    let (_, tip) = tooltip();
    let mut surface = Surface::new(500.0, 300.0);
    chart.render(
        Some(&dataset(&[("AA", 100.0, 60.0), ("BB", 5.0, 8.0)])),
        Some(&mut surface),
        &tip,
    );
    let b = bar(&surface, 1, 1);
    assert!(b.height() < 0.0, "{b:?}");
}

#[test]
fn guides_follow_the_configuration() {
    let config = ChartConfig::default()
        .with_title("Counts")
        .with_caption("note")
        .with_margin(40.0);
    let chart = StackedBarChart::new().with_config(config);
    let (_, tip) = tooltip();
    let mut surface = Surface::new(600.0, 400.0);
    chart.render(
        Some(&dataset(&[("AA", 100.0, 60.0), ("BB", 10.0, 1.0)])),
        Some(&mut surface),
        &tip,
    );

    let title = surface
        .mark(crate::TITLE_ID)
        .and_then(Mark::as_text)
        .expect("title");
    assert_eq!(title.text, "Counts");
    assert_eq!(title.pos, Point::new(300.0, 20.0));
    assert_eq!(title.font_size, 20.0);
    assert_eq!(title.font_weight, 700);

    let caption = surface
        .mark(crate::CAPTION_ID)
        .and_then(Mark::as_text)
        .expect("caption");
    assert_eq!(caption.pos, Point::new(580.0, 400.0 / 3.0));

    let legend_labels: Vec<&str> = surface
        .marks()
        .iter()
        .filter(|m| m.z_index == z_order::LEGEND_LABELS)
        .filter_map(Mark::as_text)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(legend_labels, ["Male", "Female"]);

    let category_labels: Vec<&str> = surface
        .marks()
        .iter()
        .filter(|m| m.z_index == z_order::AXIS_LABELS)
        .filter_map(Mark::as_text)
        .filter(|t| t.angle != 0.0)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(category_labels, ["AA", "BB"]);
}

#[test]
fn marks_are_painted_bars_first_titles_last() {
    let chart = StackedBarChart::new();
    let (_, tip) = tooltip();
    let mut surface = Surface::new(500.0, 300.0);
    chart.render(
        Some(&dataset(&[("AA", 100.0, 60.0)])),
        Some(&mut surface),
        &tip,
    );

    let marks = surface.marks();
    assert_eq!(marks.first().map(Mark::kind), Some(MarkKind::Rect));
    assert_eq!(marks.first().map(|m| m.z_index), Some(z_order::SERIES_FILL));
    assert_eq!(marks.last().map(|m| m.z_index), Some(z_order::TITLES));
    assert!(marks.windows(2).all(|w| (w[0].z_index, w[0].id) <= (w[1].z_index, w[1].id)));
}

fn half_a(record: &CategoryRecord) -> f64 {
    record.part_a / 2.0
}

#[test]
fn configured_palette_and_series_flow_through_every_layer() {
    let red = Brush::Solid(css::RED);
    let green = Brush::Solid(css::GREEN);
    let config = ChartConfig::default()
        .with_palette([css::RED, css::GREEN])
        .with_total_label("Sum")
        .with_tick_count(5)
        .with_label_angle(-30.0)
        .with_fonts(ChartFonts {
            legend_size: 12.0,
            ..ChartFonts::default()
        });
    let stack = StackSpec::new()
        .with_series("a", half_a)
        .with_series("b", half_a)
        .with_series("c", CategoryRecord::part_b);
    let chart = StackedBarChart::new().with_config(config).with_stack(stack);
    let (recording, tip) = tooltip();
    let mut surface = Surface::new(500.0, 300.0);
    chart.render(
        Some(&dataset(&[("AA", 100.0, 60.0)])),
        Some(&mut surface),
        &tip,
    );

    let fill = |layer| {
        surface
            .mark(StackedBarMarkSpec::bar_id(layer, 0))
            .and_then(Mark::as_rect)
            .map(|r| r.fill.clone())
    };
    assert_eq!(fill(0), Some(red.clone()));
    assert_eq!(fill(1), Some(green.clone()));
    assert_eq!(fill(2), Some(red.clone()));
    assert_close(bar(&surface, 1, 0).y1, bar(&surface, 0, 0).y0);
    assert_close(bar(&surface, 2, 0).y0, 50.0);
    assert_close(bar(&surface, 2, 0).y1, 130.0);

    let swatches: Vec<&Brush> = surface
        .marks()
        .iter()
        .filter(|m| m.z_index == z_order::LEGEND_SWATCHES)
        .filter_map(Mark::as_rect)
        .map(|r| &r.fill)
        .collect();
    assert_eq!(swatches, [&red, &green, &red]);
    let legend: Vec<(&str, f64)> = surface
        .marks()
        .iter()
        .filter(|m| m.z_index == z_order::LEGEND_LABELS)
        .filter_map(Mark::as_text)
        .map(|t| (t.text.as_str(), t.font_size))
        .collect();
    assert_eq!(legend, [("A", 12.0), ("B", 12.0), ("C", 12.0)]);

    let value_labels: Vec<&str> = surface
        .marks()
        .iter()
        .filter(|m| (VALUE_AXIS_ID + 100_000..LEGEND_ID).contains(&m.id.0))
        .filter_map(Mark::as_text)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(value_labels, ["0", "20", "40", "60", "80", "100"]);
    let category_angle = surface
        .mark(MarkId::from_raw(CATEGORY_AXIS_ID + 100_000))
        .and_then(Mark::as_text)
        .map(|t| t.angle);
    assert_eq!(category_angle, Some(-30.0));

    surface.pointer_move(bar(&surface, 2, 0).center());
    let calls = recording.take();
    assert_eq!(
        calls.last(),
        Some(&Call::Content(
            "AA</br>Sum: 100</br>A: 30</br>B: 30</br>C: 40".to_string()
        ))
    );
}
