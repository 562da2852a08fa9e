//! Directory Configuration
//!
//! The freezing period is a deployment constant: fixed at construction,
//! never changed retroactively for already-registered tokens.

use serde::{Deserialize, Serialize};

use crate::time::TimestampNanos;

/// Default correction window: 365 days, in nanoseconds.
pub const DEFAULT_FREEZING_PERIOD: TimestampNanos = 365 * 86_400_000_000_000;

/// Directory deployment configuration
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Window after a token's creation during which its identifying
    /// fields (asset id, symbol) may still be corrected.
    pub freezing_period: TimestampNanos,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            freezing_period: DEFAULT_FREEZING_PERIOD,
        }
    }
}

impl DirectoryConfig {
    /// Whether a token created at `created_at` is still correctable at `now`.
    ///
    /// The comparison is strict: at exactly `created_at + freezing_period`
    /// the window is already closed.
    pub fn is_correctable(&self, now: TimestampNanos, created_at: TimestampNanos) -> bool {
        now.saturating_sub(created_at) < self.freezing_period
    }
}
