// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-location to insertion-index resolution for drag-reorder.

use kurbo::{Point, Rect, Vec2};

use crate::metrics::GridMetrics;
use crate::util::floor;

/// Resolves a pointer location to the insertion index it targets.
///
/// This is the inverse of [`GridMetrics::rect_for_index`], with one
/// twist: the column is rounded to the nearer column *boundary* rather
/// than floor-truncated, so a pointer past a cell's horizontal midpoint
/// targets insertion after that cell.
///
/// `grid_frame` is the grid's own frame and `scroll_offset` the current
/// scroll translation; both are subtracted from `location` before the
/// division. The result may be negative or beyond the content length —
/// callers clamp with [`clamp_insertion_index`] before committing a
/// reorder.
#[must_use]
pub fn insertion_index_at(
    location: Point,
    grid_frame: Rect,
    scroll_offset: Vec2,
    metrics: &GridMetrics,
) -> isize {
    debug_assert!(
        metrics.row_height > 0.0 && metrics.column_width > 0.0,
        "insertion_index_at requires positive cell dimensions; got {}x{}",
        metrics.column_width,
        metrics.row_height
    );
    if metrics.row_height <= 0.0 || metrics.column_width <= 0.0 {
        return 0;
    }

    let local = location - grid_frame.origin().to_vec2() - scroll_offset;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Values are floored; out-of-range results are the caller's to clamp"
    )]
    let row = floor(local.y / metrics.row_height) as isize;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Values are floored; out-of-range results are the caller's to clamp"
    )]
    let col = floor(local.x / metrics.column_width + 0.5) as isize;

    #[allow(
        clippy::cast_possible_wrap,
        reason = "Column counts are far below isize::MAX"
    )]
    let columns = metrics.columns as isize;
    row * columns + col
}

/// Clamps a resolved insertion index into `0..=len`.
///
/// `len` itself is a valid result: it means "insert after the last item".
#[must_use]
pub fn clamp_insertion_index(index: isize, len: usize) -> usize {
    if index <= 0 {
        return 0;
    }
    #[allow(clippy::cast_sign_loss, reason = "Value is checked positive above")]
    let index = index as usize;
    index.min(len)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{clamp_insertion_index, insertion_index_at};
    use crate::{GridConfig, GridMetrics};

    fn metrics() -> GridMetrics {
        // 256 wide at 64 minimum → 4 columns of 64, rows of 48.
        GridMetrics::compute(&GridConfig::default(), 256.0)
    }

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 256.0, 400.0)
    }

    #[test]
    fn pointer_past_midpoint_targets_next_column() {
        // Cells span 0..64, 64..128, 128..192, 192..256. x=130 sits just
        // inside cell 2: floor((130/64) + 0.5) = floor(2.53) = 2.
        let index = insertion_index_at(Point::new(130.0, 10.0), frame(), Vec2::ZERO, &metrics());
        assert_eq!(index, 2);

        // Before the midpoint of cell 1 (x < 96) the nearer boundary is 1.
        let index = insertion_index_at(Point::new(95.0, 10.0), frame(), Vec2::ZERO, &metrics());
        assert_eq!(index, 1);
        // From the midpoint on, the boundary after cell 1 wins.
        let index = insertion_index_at(Point::new(96.0, 10.0), frame(), Vec2::ZERO, &metrics());
        assert_eq!(index, 2);
    }

    #[test]
    fn rows_offset_by_columns_per_row() {
        // Second row (y=60) at x=10 → row 1, col 0 → index 4.
        let index = insertion_index_at(Point::new(10.0, 60.0), frame(), Vec2::ZERO, &metrics());
        assert_eq!(index, 4);
    }

    #[test]
    fn scroll_offset_translates_the_pointer() {
        // Content scrolled down one row (scroll frame origin at -48): a
        // pointer near the top of the grid lands in the second content row.
        let scrolled = Vec2::new(0.0, -48.0);
        let index = insertion_index_at(Point::new(10.0, 10.0), frame(), scrolled, &metrics());
        assert_eq!(index, 4);
    }

    #[test]
    fn out_of_range_results_are_returned_unclamped() {
        // Above the grid → negative row.
        let index = insertion_index_at(Point::new(10.0, -100.0), frame(), Vec2::ZERO, &metrics());
        assert!(index < 0, "pointer above the grid must resolve negative");
        assert_eq!(clamp_insertion_index(index, 10), 0);

        // Far below → beyond any plausible length.
        let index = insertion_index_at(Point::new(10.0, 4800.0), frame(), Vec2::ZERO, &metrics());
        assert_eq!(clamp_insertion_index(index, 10), 10);
    }

    #[test]
    fn clamp_allows_insertion_after_last_item() {
        assert_eq!(clamp_insertion_index(7, 10), 7);
        assert_eq!(clamp_insertion_index(10, 10), 10);
        assert_eq!(clamp_insertion_index(11, 10), 10);
        assert_eq!(clamp_insertion_index(-3, 10), 0);
    }
}
