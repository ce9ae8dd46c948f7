// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid configuration supplied by the host.

/// Host-supplied grid configuration, in logical pixels.
///
/// Mutating any field invalidates every derived quantity; hosts that cache
/// a [`GridMetrics`][crate::GridMetrics] must recompute it after a change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// The common height of every row.
    ///
    /// Layout does not proceed while this is non-positive; see
    /// [`GridConfig::is_ready`].
    pub row_height: f64,
    /// The minimum width of a column.
    ///
    /// Columns are widened as needed to evenly fill the container, so this
    /// is a lower bound, not the rendered width. A non-positive value
    /// degrades to a single column rather than blocking layout.
    pub min_column_width: f64,
    /// Horizontal inset subtracted from the container width before columns
    /// are sized.
    ///
    /// Applied in exactly one place ([`GridMetrics::compute`][crate::GridMetrics::compute]),
    /// so every consumer of the effective column width agrees on it.
    pub column_inset: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: 48.0,
            min_column_width: 64.0,
            column_inset: 0.0,
        }
    }
}

impl GridConfig {
    /// Returns `true` if the configuration is complete enough to lay out.
    ///
    /// A grid whose row height is not yet positive reports not-ready;
    /// full layout passes no-op and the host retries once the
    /// configuration is set.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.row_height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::GridConfig;

    #[test]
    fn default_config_is_ready() {
        let config = GridConfig::default();
        assert!(config.is_ready());
        assert_eq!(config.row_height, 48.0);
        assert_eq!(config.min_column_width, 64.0);
        assert_eq!(config.column_inset, 0.0);
    }

    #[test]
    fn non_positive_row_height_is_not_ready() {
        let config = GridConfig {
            row_height: 0.0,
            ..GridConfig::default()
        };
        assert!(!config.is_ready());

        // A degenerate column width alone does not block layout; it
        // degrades to a single column instead.
        let config = GridConfig {
            min_column_width: -1.0,
            ..GridConfig::default()
        };
        assert!(config.is_ready());
    }
}
