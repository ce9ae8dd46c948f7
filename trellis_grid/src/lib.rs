// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Grid: a layout/virtualization controller for grid-style
//! collection views.
//!
//! Given an ordered content sequence and a visible viewport, a
//! [`GridLayout`] decides which contiguous span of content indices needs
//! an on-screen representation, where each item's rectangle sits, how
//! large the total scrollable extent is, and how a pointer location maps
//! back to an insertion index during drag-reorder. It never renders,
//! never owns item data, and never looks at items outside the visible
//! window.
//!
//! The pieces fit together like this:
//!
//! - The host owns views implementing [`ItemView`] and feeds the
//!   controller geometry: container frame, viewport frame, content
//!   length, and a [`GridConfig`].
//! - [`GridLayout::reconcile`] diffs the resolved visible range against
//!   the materialized pool, asking the host to create views for entering
//!   indices and handing back views for leaving ones, then places every
//!   survivor (writing frames only when they actually change).
//! - [`GridLayout::content_extent`] sizes the scrollable region.
//! - [`GridLayout::show_insertion_point_before`] /
//!   [`GridLayout::insertion_index_at`] drive the transient
//!   [`InsertionPoint`] caret while a drag gesture is active.
//!
//! Everything is single-threaded and synchronous: mutations mark derived
//! state dirty, and the next read recomputes it deterministically. Only
//! one drag gesture per grid may be active at a time; serializing
//! gestures is the caller's responsibility.
//!
//! The underlying math lives in [`trellis_geometry`] and the pooling
//! primitives in [`trellis_items`]; both are re-exported where they form
//! part of this crate's surface.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod grid;
mod insertion;

pub use grid::GridLayout;
pub use insertion::InsertionPoint;

pub use trellis_geometry::{GridConfig, GridMetrics, IndexRange, clamp_insertion_index};
pub use trellis_items::{ItemArena, ItemView};
