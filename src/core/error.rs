//! Engine error taxonomy.
//!
//! Only two things can actually fail: starting a session with too little
//! content, and the data-provider boundary. Invalid tile selections are not
//! errors — the board ignores them (see `board::IgnoreReason`), because a
//! stale ID from the presentation layer must never crash a session.

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors surfaced by the session engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The collection does not hold enough pairs to play. Not retryable;
    /// no session state is created.
    #[error("collection has {available} pair(s), at least 2 are required")]
    InsufficientContent { available: usize },

    /// The data provider failed. Retryability comes from the underlying
    /// provider error; no partial session state is created.
    #[error("content provider failed: {0}")]
    Provider(#[from] ProviderError),
}

impl EngineError {
    /// Whether retrying the same operation could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            EngineError::InsufficientContent { .. } => false,
            EngineError::Provider(e) => e.is_retryable(),
        }
    }
}
