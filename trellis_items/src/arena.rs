// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An index-keyed pool of materialized item representations.

use hashbrown::HashMap;
use hashbrown::hash_map;
use trellis_geometry::IndexRange;

/// Pool of materialized item representations, keyed by content index.
///
/// The arena models the lifecycle the collection-view host drives: views
/// are inserted as their indices enter the visible range and removed as
/// they leave it. Indices are identity — a representation never migrates
/// between indices; a reorder removes and re-inserts.
///
/// At any time the arena holds representations for (a clamped version of)
/// one contiguous range, but storage is a plain hash map so partially
/// updated states during a reconcile pass are representable.
#[derive(Clone, Debug, Default)]
pub struct ItemArena<V> {
    slots: HashMap<usize, V>,
}

impl<V> ItemArena<V> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Number of materialized representations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing is materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if `index` has a materialized representation.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains_key(&index)
    }

    /// Returns the representation at `index`, if materialized.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&V> {
        self.slots.get(&index)
    }

    /// Returns the representation at `index` mutably, if materialized.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut V> {
        self.slots.get_mut(&index)
    }

    /// Materializes a representation at `index`, returning the previous
    /// occupant if the index was already materialized.
    pub fn insert(&mut self, index: usize, view: V) -> Option<V> {
        self.slots.insert(index, view)
    }

    /// Removes and returns the representation at `index`.
    pub fn remove(&mut self, index: usize) -> Option<V> {
        self.slots.remove(&index)
    }

    /// Removes every representation, passing each to `on_evict`.
    pub fn clear(&mut self, mut on_evict: impl FnMut(usize, V)) {
        for (index, view) in self.slots.drain() {
            on_evict(index, view);
        }
    }

    /// Evicts every representation whose index falls outside `range`,
    /// passing each to `on_evict` (e.g. to return it to a reuse pool).
    pub fn retain_range(&mut self, range: IndexRange, mut on_evict: impl FnMut(usize, V)) {
        self.slots.extract_if(|index, _| !range.contains(*index))
            .for_each(|(index, view)| on_evict(index, view));
    }

    /// Iterates `(index, &view)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> {
        self.slots.iter().map(|(&index, view)| (index, view))
    }

    /// Iterates `(index, &mut view)` pairs in arbitrary order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut V)> {
        self.slots.iter_mut().map(|(&index, view)| (index, view))
    }

    /// Entry-style access for materialize-if-absent patterns.
    pub fn entry(&mut self, index: usize) -> hash_map::Entry<'_, usize, V, hashbrown::DefaultHashBuilder> {
        self.slots.entry(index)
    }
}
