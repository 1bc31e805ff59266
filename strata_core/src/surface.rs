// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained drawing surface.
//!
//! [`Surface`] plays the role of the host canvas: it has a viewport size, holds the marks drawn
//! by the last render in paint order, and routes pointer input to handlers bound on marks.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use crate::{Mark, MarkId, PointerEvent, PointerEventKind, PointerHandlers};

/// A resizable, retained mark list with pointer dispatch.
#[derive(Debug, Default)]
pub struct Surface {
    size: Size,
    /// Sorted by `(z_index, id)`.
    marks: Vec<Mark>,
    handlers: HashMap<MarkId, PointerHandlers>,
    hovered: Option<MarkId>,
    pointer: Option<Point>,
}

impl Surface {
    /// Creates an empty surface with the given viewport size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Viewport width.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Viewport height.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Viewport size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Changes the viewport size.
    ///
    /// Existing marks are kept as drawn; the host re-renders afterwards.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Removes every mark, every bound handler, and the hover state.
    ///
    /// No leave event is delivered for a mark that was hovered.
    pub fn clear(&mut self) {
        self.marks.clear();
        self.handlers.clear();
        self.hovered = None;
    }

    /// Adds a mark, keeping paint order.
    pub fn push(&mut self, mark: Mark) {
        let key = (mark.z_index, mark.id);
        let at = self.marks.partition_point(|m| (m.z_index, m.id) <= key);
        self.marks.insert(at, mark);
    }

    /// Adds several marks, keeping paint order.
    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
        self.marks.sort_by_key(|m| (m.z_index, m.id));
    }

    /// Marks in paint order (lowest z first, ties broken by id).
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Looks up a mark by id.
    pub fn mark(&self, id: MarkId) -> Option<&Mark> {
        self.marks.iter().find(|m| m.id == id)
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Binds pointer handlers on a mark, replacing any previous binding.
    pub fn on_pointer(&mut self, id: MarkId, handlers: PointerHandlers) {
        self.handlers.insert(id, handlers);
    }

    /// Returns the handlers bound on a mark.
    pub fn handlers(&self, id: MarkId) -> Option<&PointerHandlers> {
        self.handlers.get(&id)
    }

    /// The mark currently under the pointer, if any.
    pub fn hovered(&self) -> Option<MarkId> {
        self.hovered
    }

    /// Returns the topmost mark whose bounds contain `point`.
    ///
    /// Text marks have no bounds without shaping and are never hit.
    pub fn hit_test(&self, point: Point) -> Option<MarkId> {
        self.marks
            .iter()
            .rev()
            .find(|m| m.payload.bounds().is_some_and(|b| contains_inclusive(b, point)))
            .map(|m| m.id)
    }

    /// Moves the pointer to `point`, delivering enter, move, and leave events.
    ///
    /// Entering a mark delivers only an enter event; later moves over the same mark deliver
    /// move events.
    pub fn pointer_move(&mut self, point: Point) {
        self.pointer = Some(point);
        let target = self.hit_test(point);
        if target == self.hovered {
            if let Some(id) = target {
                self.dispatch(PointerEventKind::Move, id, point);
            }
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.dispatch(PointerEventKind::Leave, previous, point);
        }
        self.hovered = target;
        if let Some(id) = target {
            self.dispatch(PointerEventKind::Enter, id, point);
        }
    }

    /// The pointer left the surface; delivers a leave event to the hovered mark.
    pub fn pointer_leave(&mut self) {
        let point = self.pointer.take().unwrap_or(Point::ZERO);
        if let Some(id) = self.hovered.take() {
            self.dispatch(PointerEventKind::Leave, id, point);
        }
    }

    fn dispatch(&self, kind: PointerEventKind, target: MarkId, position: Point) {
        tracing::trace!(?kind, target = target.0, "pointer event");
        if let Some(handlers) = self.handlers.get(&target) {
            handlers.dispatch(&PointerEvent {
                kind,
                position,
                target,
            });
        }
    }
}

fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec;
    use std::vec::Vec;

    use super::*;

    fn rect(id: u64, z: i32, r: Rect) -> Mark {
        Mark::builder(MarkId::from_raw(id)).z_index(z).rect(r).build()
    }

    fn recording(surface: &mut Surface, id: u64, log: &Rc<RefCell<Vec<(u64, PointerEventKind)>>>) {
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        surface.on_pointer(
            MarkId::from_raw(id),
            PointerHandlers::new()
                .with_enter(move |e| a.borrow_mut().push((e.target.0, e.kind)))
                .with_move(move |e| b.borrow_mut().push((e.target.0, e.kind)))
                .with_leave(move |e| c.borrow_mut().push((e.target.0, e.kind))),
        );
    }

    #[test]
    fn marks_are_kept_in_paint_order() {
        let mut surface = Surface::new(100.0, 100.0);
        surface.push(rect(3, 10, Rect::new(0.0, 0.0, 1.0, 1.0)));
        surface.push(rect(2, 0, Rect::new(0.0, 0.0, 1.0, 1.0)));
        surface.push(rect(1, 10, Rect::new(0.0, 0.0, 1.0, 1.0)));
        let ids: Vec<u64> = surface.marks().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn hit_test_prefers_topmost_and_handles_flipped_rects() {
        let mut surface = Surface::new(100.0, 100.0);
        surface.push(rect(1, 0, Rect::new(0.0, 0.0, 50.0, 50.0)));
        surface.push(rect(2, 5, Rect::new(10.0, 40.0, 20.0, 20.0)));
        assert_eq!(surface.hit_test(Point::new(15.0, 30.0)), Some(MarkId::from_raw(2)));
        assert_eq!(surface.hit_test(Point::new(5.0, 5.0)), Some(MarkId::from_raw(1)));
        assert_eq!(surface.hit_test(Point::new(80.0, 80.0)), None);
    }

    #[test]
    fn pointer_dispatch_tracks_hover() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut surface = Surface::new(100.0, 100.0);
        surface.push(rect(1, 0, Rect::new(0.0, 0.0, 10.0, 10.0)));
        surface.push(rect(2, 0, Rect::new(20.0, 0.0, 30.0, 10.0)));
        recording(&mut surface, 1, &log);
        recording(&mut surface, 2, &log);

        surface.pointer_move(Point::new(5.0, 5.0));
        surface.pointer_move(Point::new(6.0, 5.0));
        surface.pointer_move(Point::new(25.0, 5.0));
        surface.pointer_leave();

        use PointerEventKind::*;
        assert_eq!(
            *log.borrow(),
            vec![(1, Enter), (1, Move), (1, Leave), (2, Enter), (2, Leave)]
        );
        assert_eq!(surface.hovered(), None);
    }

    #[test]
    fn clear_drops_handlers_and_hover() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut surface = Surface::new(100.0, 100.0);
        surface.push(rect(1, 0, Rect::new(0.0, 0.0, 10.0, 10.0)));
        recording(&mut surface, 1, &log);
        surface.pointer_move(Point::new(5.0, 5.0));
        surface.clear();
        assert!(surface.is_empty());
        assert!(surface.handlers(MarkId::from_raw(1)).is_none());
        surface.pointer_leave();
        assert_eq!(log.borrow().len(), 1);
    }
}
