// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived per-pass geometry: columns per row, column width, cell rects.

use kurbo::{Rect, Size};

use crate::config::GridConfig;
use crate::util::floor;

/// Calculates the number of columns a row holds at the given width.
///
/// This is `floor(container_width / min_column_width)`, clamped to at
/// least 1. A non-positive `min_column_width` yields a single column.
#[must_use]
pub fn columns_per_row(container_width: f64, min_column_width: f64) -> usize {
    if min_column_width <= 0.0 {
        return 1;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Value is floored before the cast; negative widths saturate to zero"
    )]
    let columns = floor(container_width / min_column_width) as usize;
    columns.max(1)
}

/// Cell geometry derived from a [`GridConfig`] and a container width.
///
/// A `GridMetrics` is valid for one (configuration, container width)
/// pair; hosts recompute it whenever either input changes rather than
/// observing mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    /// Number of items placed side-by-side before wrapping. Always >= 1.
    pub columns: usize,
    /// Rendered width of each column.
    ///
    /// Columns evenly fill the usable width, so this is
    /// `floor((container_width - column_inset) / columns)` and may exceed
    /// the configured minimum.
    pub column_width: f64,
    /// Row height, copied from the configuration.
    pub row_height: f64,
}

impl GridMetrics {
    /// Derives metrics for a container of the given width.
    #[must_use]
    pub fn compute(config: &GridConfig, container_width: f64) -> Self {
        let columns = columns_per_row(container_width, config.min_column_width);
        let usable = (container_width - config.column_inset).max(0.0);
        let column_width = floor(usable / columns as f64);
        Self {
            columns,
            column_width,
            row_height: config.row_height,
        }
    }

    /// Returns the row containing `index`.
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    /// Returns the zero-based column of `index` within its row.
    #[must_use]
    pub const fn column_of(&self, index: usize) -> usize {
        index % self.columns
    }

    /// Returns the rectangle the item at `index` occupies.
    ///
    /// Rows stack downward, so `rect_for_index(i + columns)` differs from
    /// `rect_for_index(i)` only in `y`, by exactly one row height.
    #[must_use]
    pub fn rect_for_index(&self, index: usize) -> Rect {
        let row = self.row_of(index);
        let col = index - row * self.columns;
        let origin = (col as f64 * self.column_width, row as f64 * self.row_height);
        Rect::from_origin_size(origin, (self.column_width, self.row_height))
    }
}

/// Computes the total frame the grid content occupies.
///
/// The result is anchored at the origin, spans the container's width, and
/// is at least as tall as the container itself so a sparse grid never
/// collapses the scrollable region below the viewport.
#[must_use]
pub fn content_extent(count: usize, config: &GridConfig, container: Size) -> Rect {
    let columns = columns_per_row(container.width, config.min_column_width);
    let rows = count.div_ceil(columns);
    let height = (rows as f64 * config.row_height).max(container.height);
    Rect::from_origin_size((0.0, 0.0), (container.width, height))
}
