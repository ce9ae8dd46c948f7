// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transient insertion-point indicator shown during drag-reorder.

use kurbo::Rect;

/// Vertical inset of the caret relative to the target cell, in pixels.
const VERTICAL_INSET: f64 = 6.0;

/// The single transient indicator marking where a dropped item would land.
///
/// A grid owns at most one of these, created lazily on the first
/// [`show_before`][Self::show_before] and retained across hides so a drag
/// that wanders off and back does not reallocate it. `attached` is
/// explicit state the host mirrors into its view tree: attach the
/// indicator view when it becomes `true`, detach it when it becomes
/// `false`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsertionPoint {
    frame: Rect,
    attached: bool,
}

impl InsertionPoint {
    pub(crate) fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            attached: false,
        }
    }

    /// The caret's rectangle: zero-width, at the left edge of the cell it
    /// precedes, vertically inset from the cell's bounds.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Whether the indicator should currently be in the view tree.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Positions the caret before the cell occupying `target`.
    ///
    /// The frame is written only when it changes, the same suppression
    /// discipline item placement uses. Returns `true` if the frame or the
    /// attachment state changed and the host needs to update its mirror.
    pub(crate) fn show_before(&mut self, target: Rect) -> bool {
        let x = target.x0;
        let y = target.y0 + VERTICAL_INSET / 2.0;
        let caret = Rect::new(x, y, x, y + (target.height() - VERTICAL_INSET));

        let mut changed = false;
        if self.frame != caret {
            self.frame = caret;
            changed = true;
        }
        if !self.attached {
            self.attached = true;
            changed = true;
        }
        changed
    }

    /// Detaches the indicator. Hiding an already-hidden indicator is a
    /// no-op. Returns `true` if the attachment state changed.
    pub(crate) fn hide(&mut self) -> bool {
        let was_attached = self.attached;
        self.attached = false;
        was_attached
    }
}
