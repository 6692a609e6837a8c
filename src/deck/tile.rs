//! Tile types - runtime card state on the board.

use serde::{Deserialize, Serialize};

use crate::content::{CardPayload, PairKey, RenderedCard};
use crate::core::TileId;

/// Visibility state of a tile.
///
/// `Matched` is terminal. `Visible` reverts to `Hidden` on a mismatch and
/// may do so any number of times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileState {
    Hidden,
    Visible,
    Matched,
}

/// One card instance on the board.
///
/// Two tiles share a `pair_key` per matchable pair. Tiles are created in
/// batches of two when a session starts and discarded wholesale when the
/// next one does; only the reveal machinery mutates `state`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Unique within the session.
    pub id: TileId,

    /// Match identity shared with exactly one other tile.
    pub pair_key: PairKey,

    /// The source payload this tile was built from.
    pub payload: CardPayload,

    /// Display-safe form of the payload, computed at deck build time.
    pub rendered: RenderedCard,

    /// Current visibility.
    pub state: TileState,
}

impl Tile {
    /// Create a hidden tile.
    #[must_use]
    pub fn new(id: TileId, pair_key: PairKey, payload: CardPayload, rendered: RenderedCard) -> Self {
        Self {
            id,
            pair_key,
            payload,
            rendered,
            state: TileState::Hidden,
        }
    }

    /// Is this tile part of a completed pair?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TextRenderer;

    #[test]
    fn test_new_tile_starts_hidden() {
        let renderer = TextRenderer::new();
        let payload = CardPayload::text("hi");
        let rendered = renderer.render(&payload);
        let tile = Tile::new(TileId::new(0), PairKey::new("k"), payload, rendered);

        assert_eq!(tile.state, TileState::Hidden);
        assert!(!tile.is_matched());
    }

    #[test]
    fn test_state_serde_naming() {
        let json = serde_json::to_string(&TileState::Matched).unwrap();
        assert_eq!(json, "\"matched\"");
    }
}
