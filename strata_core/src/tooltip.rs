// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip capability.

use crate::PointerEvent;

/// An externally owned tooltip.
///
/// Charts only issue requests; where and how the tooltip is presented is up to the host.
/// Methods take `&self` so one tooltip can be shared by every bound mark.
pub trait Tooltip {
    /// Moves the tooltip to follow the pointer.
    fn move_to(&self, event: &PointerEvent);

    /// Replaces the tooltip content with an HTML fragment.
    fn set_content(&self, html: &str);

    /// Hides the tooltip.
    fn hide(&self);
}
