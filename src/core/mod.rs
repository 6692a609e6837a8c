//! Core engine types: tile identity, RNG, configuration, errors, time.
//!
//! Everything here is independent of game content. The session layer wires
//! these building blocks together; nothing in `core` knows about payloads,
//! boards, or layout.

pub mod config;
pub mod error;
pub mod id;
pub mod rng;
pub mod time;

pub use config::SessionConfig;
pub use error::EngineError;
pub use id::TileId;
pub use rng::GameRng;
pub use time::{ManualTime, MonotonicTime, TimeSource};
