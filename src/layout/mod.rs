//! Board geometry.
//!
//! Given a tile count, a column count, and the available viewport, compute
//! the square tile size and gap that fit. Width wins over height when the
//! two constraints conflict: overflowing vertically scrolls, overflowing
//! horizontally is unacceptable.
//!
//! Geometry depends only on tile count, columns, and viewport. Reveal and
//! match transitions never trigger recomputation.

use log::warn;
use serde::{Deserialize, Serialize};

/// Available drawing area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Layout tuning values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Smallest tile a player can reasonably read and hit.
    pub min_tile_px: f32,

    /// Tile size used when the inputs are degenerate.
    pub fallback_tile_px: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_tile_px: 48.0,
            fallback_tile_px: 64.0,
        }
    }
}

/// Derived board geometry. Never stored; recomputed from its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub columns: u32,
    pub rows: u32,
    pub tile_px: f32,
    pub gap_px: f32,
}

/// Gap bounds for [`gap_for_columns`].
pub const GAP_MIN_PX: f32 = 6.0;
pub const GAP_MAX_PX: f32 = 16.0;

/// Pick a gap from a discrete scale, shrinking as boards get denser so the
/// tiles keep usable size.
#[must_use]
pub fn gap_for_columns(columns: u32) -> f32 {
    let gap: f32 = match columns {
        0..=2 => 16.0,
        3..=4 => 12.0,
        5..=6 => 10.0,
        7..=8 => 8.0,
        _ => 6.0,
    };
    gap.clamp(GAP_MIN_PX, GAP_MAX_PX)
}

/// Compute the board geometry.
///
/// Degenerate inputs (zero tiles or columns, unusable viewport, non-finite
/// arithmetic) fall back to the configured minimum spec instead of failing.
#[must_use]
pub fn compute(
    tile_count: usize,
    columns: u32,
    viewport: Viewport,
    config: &LayoutConfig,
) -> LayoutSpec {
    let gap = gap_for_columns(columns);

    if columns == 0 || !viewport.is_usable() {
        warn!(
            "degenerate layout inputs (columns={columns}, viewport={viewport:?}); using fallback size"
        );
        return fallback_spec(tile_count, columns, gap, config);
    }

    // An empty board is the normal pre-session state, not a degenerate input.
    if tile_count == 0 {
        return fallback_spec(tile_count, columns, gap, config);
    }

    let rows = tile_count.div_ceil(columns as usize) as u32;

    let width_limited = (viewport.width - gap * (columns - 1) as f32) / columns as f32;
    let height_limited = (viewport.height - gap * (rows - 1) as f32) / rows as f32;

    let mut tile = width_limited.min(height_limited);
    if !tile.is_finite() {
        warn!("non-finite tile size; using fallback size");
        return fallback_spec(tile_count, columns, gap, config);
    }

    // Legibility floor, then cap back at the width constraint: the floor may
    // push past the height limit (vertical scroll) but past the width limit
    // only as far as legibility demands.
    tile = tile.max(config.min_tile_px);
    tile = tile.min(width_limited.max(config.min_tile_px));

    LayoutSpec {
        columns,
        rows,
        tile_px: tile,
        gap_px: gap,
    }
}

fn fallback_spec(tile_count: usize, columns: u32, gap: f32, config: &LayoutConfig) -> LayoutSpec {
    let columns = columns.max(1);
    let rows = if tile_count == 0 {
        0
    } else {
        tile_count.div_ceil(columns as usize) as u32
    };
    LayoutSpec {
        columns,
        rows,
        tile_px: config.fallback_tile_px,
        gap_px: gap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_board() {
        // 12 tiles in 4 columns on an 800x600 viewport.
        let spec = compute(12, 4, Viewport::new(800.0, 600.0), &LayoutConfig::default());

        assert_eq!(spec.rows, 3);
        assert_eq!(spec.columns, 4);
        let width_limited = (800.0 - spec.gap_px * 3.0) / 4.0;
        assert!(spec.tile_px <= width_limited);
        assert!(spec.tile_px >= 48.0);
    }

    #[test]
    fn test_rows_round_up() {
        let spec = compute(10, 4, Viewport::new(800.0, 600.0), &LayoutConfig::default());
        assert_eq!(spec.rows, 3);
    }

    #[test]
    fn test_width_wins_over_height() {
        // Short, wide viewport: the height constraint is the smaller one.
        let config = LayoutConfig::default();
        let spec = compute(8, 4, Viewport::new(1200.0, 200.0), &config);
        let width_limited = (1200.0 - spec.gap_px * 3.0) / 4.0;
        let height_limited = (200.0 - spec.gap_px) / 2.0;

        assert!(height_limited < width_limited);
        assert!(spec.tile_px <= width_limited);
        assert!(spec.tile_px >= config.min_tile_px);
    }

    #[test]
    fn test_tiny_viewport_floors_at_min_size() {
        let config = LayoutConfig::default();
        let spec = compute(16, 4, Viewport::new(100.0, 100.0), &config);
        assert_eq!(spec.tile_px, config.min_tile_px);
    }

    #[test]
    fn test_gap_shrinks_with_density() {
        let mut last = f32::INFINITY;
        for columns in [2, 4, 6, 8, 12] {
            let gap = gap_for_columns(columns);
            assert!(gap <= last);
            assert!((GAP_MIN_PX..=GAP_MAX_PX).contains(&gap));
            last = gap;
        }
    }

    #[test]
    fn test_zero_columns_falls_back() {
        let config = LayoutConfig::default();
        let spec = compute(12, 0, Viewport::new(800.0, 600.0), &config);
        assert_eq!(spec.columns, 1);
        assert_eq!(spec.tile_px, config.fallback_tile_px);
    }

    #[test]
    fn test_zero_tiles_falls_back() {
        let config = LayoutConfig::default();
        let spec = compute(0, 4, Viewport::new(800.0, 600.0), &config);
        assert_eq!(spec.rows, 0);
        assert_eq!(spec.tile_px, config.fallback_tile_px);
    }

    #[test]
    fn test_non_finite_viewport_falls_back() {
        let config = LayoutConfig::default();
        let spec = compute(12, 4, Viewport::new(f32::NAN, 600.0), &config);
        assert_eq!(spec.tile_px, config.fallback_tile_px);

        let spec = compute(12, 4, Viewport::new(f32::INFINITY, 600.0), &config);
        assert_eq!(spec.tile_px, config.fallback_tile_px);
    }

    #[test]
    fn test_serde_round_trip() {
        let spec = compute(12, 4, Viewport::new(800.0, 600.0), &LayoutConfig::default());
        let json = serde_json::to_string(&spec).unwrap();
        let back: LayoutSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
