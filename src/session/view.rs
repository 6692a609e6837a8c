//! The published view model.
//!
//! Every mutation entry point on `GameSession` produces a new consistent
//! snapshot; the revision counter tells observers whether anything changed
//! since the snapshot they last rendered. Tiles share structure with the
//! live board (`im::Vector`), so taking a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::deck::Tile;
use crate::layout::LayoutSpec;

/// Read-only snapshot of a game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionView {
    /// Tiles in board order, with their states and rendered faces.
    pub tiles: Vector<Tile>,

    /// Completed pair comparisons.
    pub attempts: u32,

    /// Pairs matched so far.
    pub matched_pair_count: u32,

    /// True once every tile is matched.
    pub all_matched: bool,

    /// Whole seconds of play time.
    pub elapsed_seconds: u64,

    /// Play time as zero-padded `MM:SS`.
    pub elapsed_formatted: String,

    /// Current column count.
    pub columns: u32,

    /// Derived board geometry.
    pub layout: LayoutSpec,

    /// Monotonic change counter; equal revisions mean identical snapshots.
    pub revision: u64,
}

impl SessionView {
    /// Total tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}
