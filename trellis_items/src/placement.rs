// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Write-suppressed assignment of cell rectangles to item views.

use trellis_geometry::GridMetrics;

use crate::ItemView;

/// Places `view` at the cell rectangle for `index`.
///
/// The frame is written only if `force` is set or the view's current
/// frame differs from the target (exact field-wise comparison). Scrolling
/// re-runs layout over every materialized item, and most of them have not
/// moved; skipping the write keeps the host from invalidating them.
///
/// `force` corresponds to an item's first layout after creation, when its
/// frame is unset and must be written unconditionally.
///
/// Returns `true` if the frame was written.
pub fn place_item<V: ItemView>(
    view: &mut V,
    index: usize,
    metrics: &GridMetrics,
    force: bool,
) -> bool {
    let target = metrics.rect_for_index(index);
    if force || view.frame() != target {
        view.set_frame(target);
        true
    } else {
        false
    }
}
