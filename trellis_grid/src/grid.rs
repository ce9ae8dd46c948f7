// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid layout controller.

use kurbo::{Point, Rect};

use trellis_geometry::{
    GridConfig, GridMetrics, IndexRange, content_extent, insertion_index_at, visible_range,
};
use trellis_items::{ItemArena, ItemView, place_item};

use crate::insertion::InsertionPoint;

bitflags::bitflags! {
    /// Derived quantities that must be recomputed before the next read.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Invalid: u8 {
        const METRICS = 0b0000_0001;
        const EXTENT  = 0b0000_0010;
        const RANGE   = 0b0000_0100;
    }
}

/// Layout controller for a grid-style collection view.
///
/// A `GridLayout` owns the layout-relevant state of one grid: the
/// [`GridConfig`], the container and viewport rectangles, the content
/// length, the pool of materialized item representations, and the
/// transient insertion indicator. It decides which contiguous span of
/// content indices needs on-screen representation, where each item's
/// rectangle sits, and how large the scrollable extent is.
///
/// It does *not* own content data, render anything, or perform I/O; the
/// host supplies geometry and content length and materializes views when
/// asked.
///
/// Mutators do not recompute anything. They mark the affected derived
/// quantities dirty, and the next read recomputes deterministically from
/// current inputs, so any sequence of mutations costs one recomputation.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use trellis_grid::{GridConfig, GridLayout, ItemView};
///
/// struct Tile(Rect);
///
/// impl ItemView for Tile {
///     fn frame(&self) -> Rect {
///         self.0
///     }
///     fn set_frame(&mut self, frame: Rect) {
///         self.0 = frame;
///     }
/// }
///
/// let mut grid: GridLayout<Tile> = GridLayout::new(GridConfig::default());
/// grid.set_inner_frame(Rect::new(0.0, 0.0, 256.0, 400.0));
/// grid.set_scroll_frame(Rect::new(0.0, 0.0, 256.0, 400.0));
/// grid.set_content_len(1000);
///
/// // Materialize and place the items the viewport needs.
/// assert!(grid.reconcile(|_| Tile(Rect::ZERO), |_, _| {}));
/// assert_eq!(grid.visible_range().start, 0);
/// assert!(grid.items().len() < 1000);
/// ```
#[derive(Debug)]
pub struct GridLayout<V: ItemView> {
    config: GridConfig,
    inner_frame: Rect,
    scroll_frame: Rect,
    content_len: usize,

    invalid: Invalid,
    metrics: GridMetrics,
    extent: Rect,
    visible: IndexRange,

    items: ItemArena<V>,
    insertion: Option<InsertionPoint>,
}

impl<V: ItemView> GridLayout<V> {
    /// Creates a controller with the given configuration and empty
    /// geometry. Nothing lays out until the host supplies frames and a
    /// content length.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            inner_frame: Rect::ZERO,
            scroll_frame: Rect::ZERO,
            content_len: 0,
            invalid: Invalid::all(),
            metrics: GridMetrics::compute(&config, 0.0),
            extent: Rect::ZERO,
            visible: IndexRange::EMPTY,
            items: ItemArena::new(),
            insertion: None,
        }
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Replaces the configuration, invalidating all derived geometry.
    pub fn set_config(&mut self, config: GridConfig) {
        if config != self.config {
            self.config = config;
            self.invalid = Invalid::all();
        }
    }

    /// The grid's own content rectangle (origin conventionally zero).
    #[must_use]
    pub fn inner_frame(&self) -> Rect {
        self.inner_frame
    }

    /// Updates the container rectangle, e.g. on resize.
    pub fn set_inner_frame(&mut self, frame: Rect) {
        if frame != self.inner_frame {
            self.inner_frame = frame;
            self.invalid = Invalid::all();
        }
    }

    /// The currently visible rectangle within the container, in content
    /// coordinates (its origin advances as the user scrolls).
    #[must_use]
    pub fn scroll_frame(&self) -> Rect {
        self.scroll_frame
    }

    /// Updates the viewport rectangle, e.g. on scroll.
    pub fn set_scroll_frame(&mut self, frame: Rect) {
        if frame != self.scroll_frame {
            self.scroll_frame = frame;
            self.invalid |= Invalid::RANGE;
        }
    }

    /// Number of entries in the content sequence.
    #[must_use]
    pub fn content_len(&self) -> usize {
        self.content_len
    }

    /// Updates the content length, e.g. after an insert or remove.
    pub fn set_content_len(&mut self, len: usize) {
        if len != self.content_len {
            self.content_len = len;
            self.invalid |= Invalid::EXTENT | Invalid::RANGE;
        }
    }

    /// Current cell geometry, recomputed if configuration or container
    /// width changed since the last read.
    pub fn metrics(&mut self) -> GridMetrics {
        if self.invalid.contains(Invalid::METRICS) {
            self.metrics = GridMetrics::compute(&self.config, self.inner_frame.width());
            self.invalid.remove(Invalid::METRICS);
        }
        self.metrics
    }

    /// Number of items placed side-by-side before wrapping. Always >= 1.
    pub fn items_per_row(&mut self) -> usize {
        self.metrics().columns
    }

    /// Total frame the content occupies, used to size the scrollable
    /// region. Never shorter than the container itself.
    pub fn content_extent(&mut self) -> Rect {
        if self.invalid.contains(Invalid::EXTENT) {
            self.extent = content_extent(self.content_len, &self.config, self.inner_frame.size());
            self.invalid.remove(Invalid::EXTENT);
        }
        self.extent
    }

    /// Resolves the contiguous index range the given frame requires.
    ///
    /// The result is row-aligned and not clamped to the content length,
    /// mirroring what the pooling host receives from
    /// [`visible_range`][trellis_geometry::visible_range]; use
    /// [`IndexRange::clamp_to_len`] before indexing content with it.
    pub fn content_range_in_frame(&mut self, frame: Rect) -> IndexRange {
        if !self.config.is_ready() {
            return IndexRange::EMPTY;
        }
        let metrics = self.metrics();
        visible_range(frame, &metrics)
    }

    /// The clamped index range the current viewport requires.
    pub fn visible_range(&mut self) -> IndexRange {
        if !self.config.is_ready() {
            return IndexRange::EMPTY;
        }
        if self.invalid.contains(Invalid::RANGE) {
            let metrics = self.metrics();
            self.visible =
                visible_range(self.scroll_frame, &metrics).clamp_to_len(self.content_len);
            self.invalid.remove(Invalid::RANGE);
        }
        self.visible
    }

    /// Places `view` at the cell rectangle for `index`, writing the frame
    /// only if `force` is set or it actually changed. Returns `true` if
    /// the frame was written.
    ///
    /// Hosts pass `force = true` for an item's first layout after
    /// creation.
    pub fn layout_item(&mut self, view: &mut V, index: usize, force: bool) -> bool {
        let metrics = self.metrics();
        place_item(view, index, &metrics, force)
    }

    /// Runs one full layout pass: evicts representations that left the
    /// visible range, materializes entering ones via `make`, and places
    /// every materialized item.
    ///
    /// Evicted views are handed to `on_evict` so the host can recycle
    /// them. Newly made views get an unconditional first layout; retained
    /// views are re-placed with write suppression.
    ///
    /// Returns `false` without touching anything if the configuration is
    /// not ready (non-positive row height); the host retries after the
    /// next configuration change.
    pub fn reconcile(
        &mut self,
        mut make: impl FnMut(usize) -> V,
        on_evict: impl FnMut(usize, V),
    ) -> bool {
        if !self.config.is_ready() {
            return false;
        }
        let metrics = self.metrics();
        let range = self.visible_range();

        self.items.retain_range(range, on_evict);
        for index in range {
            if let Some(view) = self.items.get_mut(index) {
                place_item(view, index, &metrics, false);
            } else {
                let mut view = make(index);
                place_item(&mut view, index, &metrics, true);
                self.items.insert(index, view);
            }
        }
        true
    }

    /// The pool of materialized item representations.
    #[must_use]
    pub fn items(&self) -> &ItemArena<V> {
        &self.items
    }

    /// Mutable access to the pool.
    pub fn items_mut(&mut self) -> &mut ItemArena<V> {
        &mut self.items
    }

    /// Shows the insertion caret before the item at `index`, creating the
    /// indicator on first use. Returns `true` if the indicator's frame or
    /// attachment changed.
    ///
    /// The caret is positioned from the materialized view's frame when
    /// one exists (it may be mid-animation), falling back to the computed
    /// cell rectangle otherwise.
    pub fn show_insertion_point_before(&mut self, index: usize) -> bool {
        let target = match self.items.get(index) {
            Some(view) => view.frame(),
            None => self.metrics().rect_for_index(index),
        };
        self.insertion
            .get_or_insert_with(InsertionPoint::new)
            .show_before(target)
    }

    /// Detaches the insertion caret, retaining the instance for reuse.
    /// A no-op when already hidden (or never shown).
    pub fn hide_insertion_point(&mut self) {
        if let Some(insertion) = &mut self.insertion {
            insertion.hide();
        }
    }

    /// The insertion indicator, if it has ever been shown.
    #[must_use]
    pub fn insertion_point(&self) -> Option<&InsertionPoint> {
        self.insertion.as_ref()
    }

    /// Resolves a pointer location (in the grid's parent coordinates) to
    /// the insertion index it targets.
    ///
    /// The result may be negative or beyond the content length; clamp
    /// with [`clamp_insertion_index`][trellis_geometry::clamp_insertion_index]
    /// before committing a reorder.
    pub fn insertion_index_at(&mut self, location: Point) -> isize {
        let metrics = self.metrics();
        // The scroll translation moves content up as the origin advances.
        let offset = -self.scroll_frame.origin().to_vec2();
        insertion_index_at(location, self.inner_frame, offset, &metrics)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};
    use trellis_geometry::{GridConfig, IndexRange, clamp_insertion_index};
    use trellis_items::ItemView;

    use super::GridLayout;

    #[derive(Debug)]
    struct Tile {
        frame: Rect,
        writes: usize,
    }

    impl Tile {
        fn new() -> Self {
            Self {
                frame: Rect::ZERO,
                writes: 0,
            }
        }
    }

    impl ItemView for Tile {
        fn frame(&self) -> Rect {
            self.frame
        }

        fn set_frame(&mut self, frame: Rect) {
            self.frame = frame;
            self.writes += 1;
        }
    }

    /// 256x200 container over 1000 items: 4 columns of 64, rows of 48.
    fn grid() -> GridLayout<Tile> {
        let mut grid = GridLayout::new(GridConfig::default());
        grid.set_inner_frame(Rect::new(0.0, 0.0, 256.0, 200.0));
        grid.set_scroll_frame(Rect::new(0.0, 0.0, 256.0, 200.0));
        grid.set_content_len(1000);
        grid
    }

    #[test]
    fn reconcile_materializes_only_the_visible_range() {
        let mut grid = grid();
        assert!(grid.reconcile(|_| Tile::new(), |_, _| {}));

        // 200px viewport over 48px rows → rows 0..5 → indices 0..20.
        let range = grid.visible_range();
        assert_eq!(range, IndexRange::new(0, 20));
        assert_eq!(grid.items().len(), 20);

        // Every materialized frame matches its computed cell rectangle.
        let metrics = grid.metrics();
        for (index, tile) in grid.items().iter() {
            assert_eq!(tile.frame, metrics.rect_for_index(index));
        }
    }

    #[test]
    fn scrolling_evicts_and_materializes_at_the_edges() {
        let mut grid = grid();
        grid.reconcile(|_| Tile::new(), |_, _| {});

        // Scroll down two rows.
        grid.set_scroll_frame(Rect::new(0.0, 96.0, 256.0, 296.0));
        let mut evicted = Vec::new();
        grid.reconcile(|_| Tile::new(), |index, _| evicted.push(index));
        evicted.sort_unstable();

        // Rows 0 and 1 left; rows 5 and 6 entered.
        assert_eq!(evicted, (0..8).collect::<Vec<_>>());
        assert_eq!(grid.visible_range(), IndexRange::new(8, 20));
        assert_eq!(grid.items().len(), 20);
    }

    #[test]
    fn retained_items_are_not_rewritten_when_nothing_moved() {
        let mut grid = grid();
        grid.reconcile(|_| Tile::new(), |_, _| {});
        grid.reconcile(|_| Tile::new(), |_, _| {});

        for (index, tile) in grid.items().iter() {
            assert_eq!(tile.writes, 1, "item {index} was rewritten needlessly");
        }
    }

    #[test]
    fn resize_reflows_every_retained_item() {
        let mut grid = grid();
        grid.reconcile(|_| Tile::new(), |_, _| {});

        // Narrow to 128 → 2 columns; every surviving item moves.
        grid.set_inner_frame(Rect::new(0.0, 0.0, 128.0, 200.0));
        grid.reconcile(|_| Tile::new(), |_, _| {});

        assert_eq!(grid.items_per_row(), 2);
        let metrics = grid.metrics();
        for (index, tile) in grid.items().iter() {
            assert_eq!(tile.frame, metrics.rect_for_index(index));
        }
    }

    #[test]
    fn range_is_clamped_to_short_content() {
        let mut grid = grid();
        grid.set_content_len(6);
        grid.reconcile(|_| Tile::new(), |_, _| {});
        assert_eq!(grid.visible_range(), IndexRange::new(0, 6));
        assert_eq!(grid.items().len(), 6);

        // Content shrinks under the materialized window.
        grid.set_content_len(3);
        let mut evicted = Vec::new();
        grid.reconcile(|_| Tile::new(), |index, _| evicted.push(index));
        evicted.sort_unstable();
        assert_eq!(evicted, [3, 4, 5]);
    }

    #[test]
    fn not_ready_configuration_no_ops_until_set() {
        let mut grid: GridLayout<Tile> = GridLayout::new(GridConfig {
            row_height: 0.0,
            ..GridConfig::default()
        });
        grid.set_inner_frame(Rect::new(0.0, 0.0, 256.0, 200.0));
        grid.set_scroll_frame(Rect::new(0.0, 0.0, 256.0, 200.0));
        grid.set_content_len(100);

        assert!(!grid.reconcile(|_| Tile::new(), |_, _| {}));
        assert!(grid.items().is_empty());
        assert!(grid.visible_range().is_empty());

        // The host retries after setting the configuration.
        grid.set_config(GridConfig::default());
        assert!(grid.reconcile(|_| Tile::new(), |_, _| {}));
        assert!(!grid.items().is_empty());
    }

    #[test]
    fn content_extent_tracks_length_and_floors_at_container() {
        let mut grid = grid();
        // 1000 items / 4 columns → 250 rows of 48.
        assert_eq!(grid.content_extent(), Rect::new(0.0, 0.0, 256.0, 12000.0));

        grid.set_content_len(0);
        assert_eq!(grid.content_extent().height(), 200.0);
    }

    #[test]
    fn derived_reads_are_idempotent() {
        let mut grid = grid();
        let first = (grid.metrics(), grid.content_extent(), grid.visible_range());
        let second = (grid.metrics(), grid.content_extent(), grid.visible_range());
        assert_eq!(first, second);
    }

    #[test]
    fn content_range_in_frame_matches_row_band() {
        let mut grid = grid();
        // Concrete scenario: y 100..150 over 48px rows and 4 columns.
        let range = grid.content_range_in_frame(Rect::new(0.0, 100.0, 256.0, 150.0));
        assert_eq!(range, IndexRange::new(8, 8));
    }

    #[test]
    fn insertion_point_lifecycle() {
        let mut grid = grid();
        grid.reconcile(|_| Tile::new(), |_, _| {});

        // No indicator exists before the first show.
        assert!(grid.insertion_point().is_none());
        grid.hide_insertion_point();
        assert!(grid.insertion_point().is_none());

        assert!(grid.show_insertion_point_before(5));
        let point = grid.insertion_point().unwrap();
        assert!(point.is_attached());
        // Caret hugs the left edge of cell 5 at (64, 48).
        assert_eq!(point.frame().x0, 64.0);
        assert_eq!(point.frame().width(), 0.0);

        // Same target again: no change to mirror.
        assert!(!grid.show_insertion_point_before(5));

        grid.hide_insertion_point();
        let point = grid.insertion_point().unwrap();
        assert!(!point.is_attached(), "hide must detach the indicator");
    }

    #[test]
    fn insertion_point_for_unmaterialized_index_uses_computed_rect() {
        let mut grid = grid();
        // Index 100 is far below the viewport; nothing is materialized.
        assert!(grid.show_insertion_point_before(100));
        let metrics = grid.metrics();
        let cell = metrics.rect_for_index(100);
        assert_eq!(grid.insertion_point().unwrap().frame().x0, cell.x0);
    }

    #[test]
    fn pointer_resolution_accounts_for_scroll() {
        let mut grid = grid();
        // Unscrolled: pointer at x=130, y=10 → row 0, boundary column 2.
        assert_eq!(grid.insertion_index_at(Point::new(130.0, 10.0)), 2);

        // Scrolled down one row: the same pointer targets the next row.
        grid.set_scroll_frame(Rect::new(0.0, 48.0, 256.0, 248.0));
        assert_eq!(grid.insertion_index_at(Point::new(130.0, 10.0)), 6);

        // Out-of-range results are clamped by the caller at commit time.
        grid.set_content_len(4);
        let raw = grid.insertion_index_at(Point::new(130.0, 500.0));
        assert!(raw > 4);
        assert_eq!(clamp_insertion_index(raw, 4), 4);
    }
}
