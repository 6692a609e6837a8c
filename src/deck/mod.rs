//! Deck construction: pairs in, shuffled tiles out.
//!
//! ## Key Types
//!
//! - `TileState`: Hidden / Visible / Matched
//! - `Tile`: One face-down/face-up card instance on the board
//! - `build_deck`: Selects pairs, expands them to tiles, shuffles twice
//!
//! Tiles carry their faces pre-rendered; the renderer runs once per tile at
//! build time, never per snapshot.

pub mod builder;
pub mod tile;

pub use builder::build_deck;
pub use tile::{Tile, TileState};
