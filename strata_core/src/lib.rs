// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by Strata charts.
//!
//! - **Marks** are fully resolved visual primitives (rects, text, paths) with stable ids and a
//!   paint order.
//! - A [`Surface`] stands in for the host canvas: a viewport size, the marks of the last render,
//!   and pointer dispatch to handlers bound on marks.
//! - [`Tooltip`] is the capability a host injects so charts can show hover details.
//!
//! Everything here is single-threaded and synchronous.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod mark;
mod pointer;
mod surface;
mod tooltip;

pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathMarkBuilder, PathPayload,
    RectMarkBuilder, RectPayload, TextAnchor, TextBaseline, TextMarkBuilder, TextPayload,
};
pub use pointer::{PointerEvent, PointerEventKind, PointerHandler, PointerHandlers};
pub use surface::Surface;
pub use tooltip::Tooltip;
