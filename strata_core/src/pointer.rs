// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events and per-mark handlers.

extern crate alloc;

use alloc::rc::Rc;
use core::fmt;

use kurbo::Point;

use crate::MarkId;

/// The phase of a pointer interaction with one mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// The pointer moved onto the mark.
    Enter,
    /// The pointer moved while staying over the mark.
    Move,
    /// The pointer moved off the mark, or off the surface.
    Leave,
}

/// A pointer event delivered to the handlers bound on a mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub kind: PointerEventKind,
    /// Pointer position in surface coordinates.
    pub position: Point,
    /// The mark the event is delivered to.
    pub target: MarkId,
}

/// A pointer callback.
///
/// Surfaces are single-threaded, so handlers are reference counted but not `Send`.
pub type PointerHandler = Rc<dyn Fn(&PointerEvent)>;

/// The set of pointer callbacks bound on one mark.
#[derive(Clone, Default)]
pub struct PointerHandlers {
    /// Called when the pointer enters the mark.
    pub on_enter: Option<PointerHandler>,
    /// Called when the pointer moves within the mark.
    pub on_move: Option<PointerHandler>,
    /// Called when the pointer leaves the mark.
    pub on_leave: Option<PointerHandler>,
}

impl fmt::Debug for PointerHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHandlers")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

impl PointerHandlers {
    /// Creates an empty handler set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enter callback.
    pub fn with_enter(mut self, f: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_enter = Some(Rc::new(f));
        self
    }

    /// Sets the move callback.
    pub fn with_move(mut self, f: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_move = Some(Rc::new(f));
        self
    }

    /// Sets the leave callback.
    pub fn with_leave(mut self, f: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_leave = Some(Rc::new(f));
        self
    }

    /// Returns the callback for `kind`, if any.
    pub fn get(&self, kind: PointerEventKind) -> Option<&PointerHandler> {
        match kind {
            PointerEventKind::Enter => self.on_enter.as_ref(),
            PointerEventKind::Move => self.on_move.as_ref(),
            PointerEventKind::Leave => self.on_leave.as_ref(),
        }
    }

    /// Invokes the callback matching `event.kind`, if bound.
    pub fn dispatch(&self, event: &PointerEvent) {
        if let Some(handler) = self.get(event.kind) {
            handler(event);
        }
    }
}
