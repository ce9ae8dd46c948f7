// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtualized grid scrolling, resizing, and drag-reorder feedback.
//!
//! This example drives a [`GridLayout`] the way a collection-view host
//! would: it owns the item views, feeds the controller geometry on every
//! scroll/resize, and lets `reconcile` tell it which views to create,
//! recycle, and move.
//!
//! Run:
//! - `cargo run -p trellis_demos --example grid_scroll`

use kurbo::{Point, Rect};
use trellis_geometry::clamp_insertion_index;
use trellis_grid::{GridConfig, GridLayout};
use trellis_items::ItemView;

/// A stand-in for a real widget: one labeled tile per content entry.
#[derive(Debug)]
struct Tile {
    label: String,
    frame: Rect,
}

impl ItemView for Tile {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

fn report(grid: &mut GridLayout<Tile>, what: &str) {
    let range = grid.visible_range();
    let extent = grid.content_extent();
    println!(
        "{what}: {} columns, materialized {}..{} ({} tiles), extent {}x{}",
        grid.items_per_row(),
        range.start,
        range.end(),
        grid.items().len(),
        extent.width(),
        extent.height(),
    );
}

fn main() {
    // 10,000 entries in a 256px-wide container showing 200px at a time.
    let mut grid: GridLayout<Tile> = GridLayout::new(GridConfig::default());
    grid.set_inner_frame(Rect::new(0.0, 0.0, 256.0, 200.0));
    grid.set_scroll_frame(Rect::new(0.0, 0.0, 256.0, 200.0));
    grid.set_content_len(10_000);

    let make = |index: usize| Tile {
        label: format!("entry {index}"),
        frame: Rect::ZERO,
    };

    let mut recycled = 0_usize;
    grid.reconcile(make, |_, _| {});
    report(&mut grid, "initial");

    // Scroll through a few screenfuls; only the edge rows churn.
    for step in 1..=5 {
        let y = f64::from(step) * 96.0;
        grid.set_scroll_frame(Rect::new(0.0, y, 256.0, y + 200.0));
        grid.reconcile(make, |_, _tile| recycled += 1);
    }
    report(&mut grid, "after scrolling");
    println!("recycled {recycled} tiles while scrolling");

    // Widen the container; columns and every frame change in one pass.
    grid.set_inner_frame(Rect::new(0.0, 0.0, 512.0, 200.0));
    grid.reconcile(make, |_, _| {});
    report(&mut grid, "after resize");

    // Simulate a drag hovering at a pointer location.
    let pointer = Point::new(130.0, 550.0);
    let raw = grid.insertion_index_at(pointer);
    let target = clamp_insertion_index(raw, grid.content_len());
    grid.show_insertion_point_before(target);
    let caret = *grid.insertion_point().expect("indicator was just shown");
    println!(
        "drag at {pointer:?} targets index {target}; caret at ({}, {}), {} tall",
        caret.frame().x0,
        caret.frame().y0,
        caret.frame().height(),
    );

    // Drop ends the gesture; the indicator detaches but is retained.
    grid.hide_insertion_point();
    println!(
        "indicator attached after drop: {}",
        grid.insertion_point().is_some_and(|p| p.is_attached()),
    );

    if let Some((_, tile)) = grid.items().iter().next() {
        println!("sample tile: {:?} at {:?}", tile.label, tile.frame);
    }
}
