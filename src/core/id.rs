//! Tile identification.
//!
//! Every tile on the board has a unique `TileId`, allocated sequentially by
//! the deck builder when a session starts. IDs are never reused within a
//! session; a new session allocates from zero again, which is safe because
//! the old board is discarded wholesale.

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile within one session.
///
/// Stale IDs from a previous session simply fail the board lookup and are
/// ignored, so holding one across sessions is harmless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID from a raw index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}
