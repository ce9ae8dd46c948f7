// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Items: the seam between grid layout and host-owned item views.
//!
//! A grid host owns the actual view/widget objects for its content
//! entries. This crate sees them only through the [`ItemView`] trait —
//! a mutable rectangle and nothing else — and provides:
//!
//! - [`place_item`]: assigns an item its computed cell rectangle, writing
//!   the frame only when it actually changes so re-running layout during
//!   a scroll does not trigger redundant invalidation in the host.
//! - [`ItemArena`]: an index-keyed pool of materialized representations
//!   with explicit insert/remove, used to diff the visible range as it
//!   moves and create/destroy representations at the edges.
//!
//! This crate does not decide *which* indices are materialized; see
//! `trellis_geometry` for range resolution and `trellis_grid` for the
//! controller that drives both.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod arena;
mod placement;

use kurbo::Rect;

pub use arena::ItemArena;
pub use placement::place_item;

/// A host-owned visual proxy for one content entry.
///
/// The engine reads and writes the view's frame and nothing else; data,
/// styling, and rendering stay with the host. Implementations are
/// expected to treat `set_frame` as an invalidation trigger, which is why
/// the engine suppresses writes that would not change the frame.
pub trait ItemView {
    /// The view's current rectangle in grid content coordinates.
    fn frame(&self) -> Rect;

    /// Moves/resizes the view.
    fn set_frame(&mut self, frame: Rect);
}
