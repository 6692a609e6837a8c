//! # rust-pairs
//!
//! A memory pair-matching game session engine.
//!
//! ## Design Principles
//!
//! 1. **Engine-Only**: No I/O, no HTTP, no rendering surface. The crate owns
//!    game state and geometry; hosts own fetching, routing, and pixels.
//!
//! 2. **Event-Driven**: All mutation happens through discrete entry points
//!    (`select_tile`, `tick`, `resize`, `start_session`). Each runs to
//!    completion; there is no internal suspension.
//!
//! 3. **Deterministic**: Seeded RNG, injected time source. A session can be
//!    replayed exactly from its seed and event sequence.
//!
//! ## Architecture
//!
//! - **Persistent Snapshots**: The tile list is an `im::Vector`, so every
//!   published view model clones in O(1).
//!
//! - **Generation-Keyed Timers**: Deferred work (the mismatch hide) is plain
//!   data checked against a session generation counter. A timer that
//!   outlives its session can never touch the next one.
//!
//! - **Escape-Before-Markup**: Card text is HTML-escaped before any
//!   structural substitution, and fenced code is restored after, so
//!   untrusted content is never interpreted as markup.
//!
//! ## Modules
//!
//! - `core`: Tile IDs, RNG, configuration, errors, time source
//! - `content`: Card payloads, pairs, and the safe text renderer
//! - `deck`: Tile expansion and shuffling
//! - `board`: Reveal state machine (two-at-a-time protocol)
//! - `layout`: Responsive board geometry
//! - `session`: Clock, orchestrator, and the published view model
//! - `provider`: The collection data-provider boundary

pub mod core;
pub mod content;
pub mod deck;
pub mod board;
pub mod layout;
pub mod session;
pub mod provider;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameRng, ManualTime, MonotonicTime, SessionConfig, TileId, TimeSource,
};

pub use crate::content::{CardPair, CardPayload, PairKey, RenderedCard, TextRenderer};

pub use crate::deck::{build_deck, Tile, TileState};

pub use crate::board::{Board, SelectOutcome};

pub use crate::layout::{LayoutConfig, LayoutSpec, Viewport};

pub use crate::session::{GameSession, SessionClock, SessionView};

pub use crate::provider::{CollectionSummary, ContentProvider, InMemoryProvider, ProviderError};
