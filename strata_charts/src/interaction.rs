// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip bindings for drawn bars.
//!
//! Each bar gets enter, move, and leave handlers that forward to a shared [`Tooltip`]. The
//! handlers keep no state of their own; the tooltip decides how to present itself.

extern crate alloc;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;

use strata_core::{MarkId, PointerHandlers, Surface, Tooltip};
use strata_transforms::{CategoryRecord, StackSpec};

use crate::format::format_count;

/// Composes the tooltip HTML for one category.
///
/// The layout is the category name, then the total, then one line per series, separated by
/// `</br>`: `"AA</br>Total Deaths: 100</br>Male: 60</br>Female: 40"`.
pub fn tooltip_html(record: &CategoryRecord, stack: &StackSpec, total_label: &str) -> String {
    let mut html = format!(
        "{}</br>{}: {}",
        record.name,
        total_label,
        format_count(record.total)
    );
    for series in stack.series() {
        html.push_str(&format!(
            "</br>{}: {}",
            series.key.label(),
            format_count((series.value)(record))
        ));
    }
    html
}

/// Binds tooltip handlers on the mark `id`.
///
/// - enter: move the tooltip to the pointer, then set `html` as its content,
/// - move: move the tooltip to the pointer,
/// - leave: hide the tooltip.
pub fn bind_tooltip(surface: &mut Surface, id: MarkId, html: Rc<str>, tooltip: &Rc<dyn Tooltip>) {
    let on_enter = tooltip.clone();
    let on_move = tooltip.clone();
    let on_leave = tooltip.clone();
    surface.on_pointer(
        id,
        PointerHandlers::new()
            .with_enter(move |event| {
                on_enter.move_to(event);
                on_enter.set_content(&html);
            })
            .with_move(move |event| on_move.move_to(event))
            .with_leave(move |_| on_leave.hide()),
    );
}
