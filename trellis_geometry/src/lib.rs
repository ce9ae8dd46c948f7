// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Geometry: pure layout math for grid-style collection views.
//!
//! This crate converts a container width and a [`GridConfig`] into cell
//! geometry, and converts back and forth between content indices, cell
//! rectangles, visible index ranges, and pointer locations. It owns no
//! views, no content, and no state; every function is a deterministic
//! computation over its arguments.
//!
//! The core pieces are:
//!
//! - [`GridConfig`]: row height, minimum column width, and an optional
//!   horizontal inset subtracted before columns are sized.
//! - [`GridMetrics`]: the derived per-pass geometry (columns per row and
//!   the effective column width), plus [`GridMetrics::rect_for_index`].
//! - [`IndexRange`] and [`visible_range`]: the contiguous, row-aligned
//!   span of content indices a viewport requires.
//! - [`content_extent`]: the total rectangle the full content occupies,
//!   used to size the scrollable region.
//! - [`insertion_index_at`]: maps a pointer location back to an insertion
//!   index during drag-reorder, rounding to the nearer column boundary.
//!
//! Rows are full-width bands: every item occupies one fixed-height row
//! slot split into columns of equal width, so the set of indices a
//! viewport needs is always a single contiguous range (see
//! [`visible_range`]). Host frameworks are responsible for materializing
//! views for that range and positioning them at the rects this crate
//! computes.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use trellis_geometry::{GridConfig, GridMetrics, visible_range};
//!
//! let config = GridConfig {
//!     row_height: 48.0,
//!     min_column_width: 64.0,
//!     ..GridConfig::default()
//! };
//! let metrics = GridMetrics::compute(&config, 256.0);
//! assert_eq!(metrics.columns, 4);
//!
//! // Item 5 sits in row 1, column 1.
//! let rect = metrics.rect_for_index(5);
//! assert_eq!(rect, Rect::new(64.0, 48.0, 128.0, 96.0));
//!
//! // A 50px-tall viewport at y=100 needs rows 2..4, i.e. indices 8..16.
//! let range = visible_range(Rect::new(0.0, 100.0, 256.0, 150.0), &metrics);
//! assert_eq!((range.start, range.length), (8, 8));
//! ```
//!
//! This crate is `no_std` and does not allocate. With default features
//! disabled, enable `libm` for float math.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("trellis_geometry requires either the `std` or `libm` feature");

mod config;
mod metrics;
mod pointer;
mod range;
mod util;

pub use config::GridConfig;
pub use metrics::{GridMetrics, columns_per_row, content_extent};
pub use pointer::{clamp_insertion_index, insertion_index_at};
pub use range::{IndexRange, visible_range};
