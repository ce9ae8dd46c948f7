// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contiguous content-index ranges and viewport-to-range resolution.

use core::ops::Range;

use kurbo::Rect;
use smallvec::SmallVec;

use crate::metrics::GridMetrics;
use crate::util::{ceil, floor};

/// A contiguous span of content indices, `start..start + length`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexRange {
    /// First index in the span.
    pub start: usize,
    /// Number of indices in the span.
    pub length: usize,
}

impl IndexRange {
    /// An empty range at index 0.
    pub const EMPTY: Self = Self {
        start: 0,
        length: 0,
    };

    /// Creates a range covering `start..start + length`.
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last index in the span.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    /// Returns `true` if the span covers no indices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if `index` falls within the span.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end()
    }

    /// Returns this span restricted to `0..len`.
    #[must_use]
    pub fn clamp_to_len(&self, len: usize) -> Self {
        let start = self.start.min(len);
        let end = self.end().min(len);
        Self {
            start,
            length: end - start,
        }
    }

    /// Iterates the indices in the span.
    #[must_use]
    pub const fn iter(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns the pieces of `self` not covered by `other`.
    ///
    /// Contiguous ranges subtract into at most two pieces (a lead before
    /// `other` and a tail after it), so the result never spills to the
    /// heap. Diffing the previous materialized range against the new one
    /// this way tells a pooling host exactly which indices to destroy.
    #[must_use]
    pub fn difference(&self, other: &Self) -> SmallVec<[Self; 2]> {
        let mut pieces = SmallVec::new();
        if self.is_empty() {
            return pieces;
        }
        if other.is_empty() {
            pieces.push(*self);
            return pieces;
        }

        let lead_end = self.end().min(other.start);
        if lead_end > self.start {
            pieces.push(Self::new(self.start, lead_end - self.start));
        }
        let tail_start = self.start.max(other.end());
        if self.end() > tail_start {
            pieces.push(Self::new(tail_start, self.end() - tail_start));
        }
        pieces
    }
}

impl IntoIterator for IndexRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolves the contiguous range of content indices a viewport requires.
///
/// Rows are full-width bands, so the horizontal extent of `viewport` is
/// intentionally ignored: any partial vertical overlap with a row pulls in
/// that entire row, keeping the materialized set a single row-aligned
/// contiguous range. The result is not clamped to the content length;
/// callers clamp with [`IndexRange::clamp_to_len`] before materializing.
///
/// An empty viewport (height <= 0) resolves to an empty range.
#[must_use]
pub fn visible_range(viewport: Rect, metrics: &GridMetrics) -> IndexRange {
    debug_assert!(
        metrics.row_height > 0.0,
        "visible_range requires a positive row height; got {}",
        metrics.row_height
    );
    if viewport.height() <= 0.0 || metrics.row_height <= 0.0 {
        return IndexRange::EMPTY;
    }

    // Rows overlapping the viewport: first row at or above min_y, through
    // the row containing max_y. Rows above the origin do not exist.
    let first_row = floor(viewport.min_y() / metrics.row_height).max(0.0);
    let last_row = ceil(viewport.max_y() / metrics.row_height).max(0.0);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Values are floored/ceiled and clamped non-negative before the cast"
    )]
    let (first_row, last_row) = (first_row as usize, last_row as usize);

    let start = first_row * metrics.columns;
    let end = last_row * metrics.columns;
    IndexRange::new(start, end.saturating_sub(start))
}
