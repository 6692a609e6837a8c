//! Reveal state machine.
//!
//! The board owns tile visibility and enforces the matching protocol:
//!
//! - At most two tiles are `Visible` at any observable point.
//! - Each second reveal counts one attempt and compares pair keys.
//! - A matched pair becomes `Matched` immediately and permanently.
//! - A mismatched pair stays visible until `resolve_mismatch` runs, either
//!   from the orchestrator's timer or because the player selected a third
//!   tile and interrupted the cooldown.
//!
//! The board never starts timers itself; it records the pending pair and
//! the session layer schedules the expiry. Malformed selections are
//! ignored, never errors.

use im::Vector;
use log::debug;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::content::PairKey;
use crate::core::TileId;
use crate::deck::{Tile, TileState};

/// Why a selection event was dropped. Logged, never surfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The ID does not belong to this board (stale or out of range).
    UnknownTile,
    /// The tile is already part of a completed pair.
    AlreadyMatched,
    /// The tile is already face up; re-selecting it is not a second reveal.
    AlreadyVisible,
}

/// What a selection event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First tile of an attempt turned face up.
    Revealed,
    /// Second tile completed the pair.
    Matched,
    /// Second tile did not match; the pair is pending a flip-back.
    Mismatch,
}

/// Board state for one session.
///
/// Tiles live in an `im::Vector` so the session layer can hand out snapshot
/// clones in O(1).
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vector<Tile>,
    index: FxHashMap<TileId, usize>,
    revealed: SmallVec<[TileId; 2]>,
    attempts: u32,
    matched_pairs: u32,
    pending: Option<(TileId, TileId)>,
}

impl Board {
    /// Create a board from a built deck.
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        let index = tiles
            .iter()
            .enumerate()
            .map(|(slot, tile)| (tile.id, slot))
            .collect();
        Self {
            tiles: tiles.into_iter().collect(),
            index,
            revealed: SmallVec::new(),
            attempts: 0,
            matched_pairs: 0,
            pending: None,
        }
    }

    /// Process a tile selection.
    pub fn select(&mut self, id: TileId) -> SelectOutcome {
        let Some(&slot) = self.index.get(&id) else {
            debug!("ignoring selection of unknown {id}");
            return SelectOutcome::Ignored(IgnoreReason::UnknownTile);
        };

        match self.tiles[slot].state {
            TileState::Matched => {
                return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched);
            }
            TileState::Visible => {
                return SelectOutcome::Ignored(IgnoreReason::AlreadyVisible);
            }
            TileState::Hidden => {}
        }

        // A fast player interrupts the cooldown: the pending pair flips back
        // before the new selection is processed.
        if self.pending.is_some() {
            self.resolve_mismatch();
        }

        self.set_state(id, TileState::Visible);
        self.revealed.push(id);
        debug_assert!(self.revealed.len() <= 2, "more than two tiles revealed");

        if self.revealed.len() < 2 {
            return SelectOutcome::Revealed;
        }

        // Second reveal: one attempt, compare keys.
        self.attempts += 1;
        let (first, second) = (self.revealed[0], self.revealed[1]);

        if self.key_of(first) == self.key_of(second) {
            self.set_state(first, TileState::Matched);
            self.set_state(second, TileState::Matched);
            self.matched_pairs += 1;
            self.revealed.clear();
            SelectOutcome::Matched
        } else {
            self.pending = Some((first, second));
            SelectOutcome::Mismatch
        }
    }

    /// Flip a pending mismatch back over and clear selection state.
    ///
    /// No-op when nothing is pending. Only still-`Visible` tiles revert; a
    /// tile that somehow matched in the meantime stays matched.
    pub fn resolve_mismatch(&mut self) {
        if self.pending.is_none() {
            return;
        }
        for id in std::mem::take(&mut self.revealed) {
            if let Some(&slot) = self.index.get(&id) {
                if self.tiles[slot].state == TileState::Visible {
                    self.set_state(id, TileState::Hidden);
                }
            }
        }
        self.pending = None;
    }

    /// Is a mismatched pair waiting to flip back?
    #[must_use]
    pub fn has_pending_mismatch(&self) -> bool {
        self.pending.is_some()
    }

    /// True once every tile is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.tiles.is_empty() && self.matched_pairs as usize * 2 == self.tiles.len()
    }

    /// Completed pair comparisons so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Total tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Currently face-up, unmatched tile IDs (at most two).
    #[must_use]
    pub fn revealed(&self) -> &[TileId] {
        &self.revealed
    }

    /// The tile list, cheaply cloneable for snapshots.
    #[must_use]
    pub fn tiles(&self) -> &Vector<Tile> {
        &self.tiles
    }

    fn key_of(&self, id: TileId) -> &PairKey {
        &self.tiles[self.index[&id]].pair_key
    }

    fn set_state(&mut self, id: TileId, state: TileState) {
        if let Some(&slot) = self.index.get(&id) {
            if let Some(tile) = self.tiles.get_mut(slot) {
                tile.state = state;
            }
        }
    }
}
