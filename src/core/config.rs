//! Session configuration.
//!
//! Hosts configure the engine at construction time. Nothing is read from
//! ambient or global state: the default column count and the mismatch delay
//! travel through `SessionConfig` into every session.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutConfig;

/// Configuration for a game session.
///
/// The mismatch delay is counted in ticks, where one tick is whatever cadence
/// the host drives [`GameSession::tick`](crate::session::GameSession::tick)
/// at. The delay is a product choice, not a derived constant, so it is
/// configurable rather than baked in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Column count used when a session does not request one.
    pub default_columns: u32,

    /// Ticks a mismatched pair stays visible before flipping back.
    pub mismatch_delay_ticks: u32,

    /// Board geometry tuning.
    pub layout: LayoutConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_columns: 4,
            mismatch_delay_ticks: 5,
            layout: LayoutConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a configuration with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default column count.
    #[must_use]
    pub fn with_default_columns(mut self, columns: u32) -> Self {
        self.default_columns = columns.max(1);
        self
    }

    /// Set the mismatch delay in ticks.
    #[must_use]
    pub fn with_mismatch_delay(mut self, ticks: u32) -> Self {
        self.mismatch_delay_ticks = ticks;
        self
    }

    /// Set the layout tuning.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}
