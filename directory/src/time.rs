// A simple module to define the time types used in the project
//
// Registry operations read the clock at most once per call and treat the
// result as an immutable snapshot, so a single call never observes two
// different "now" values.

use std::time::{SystemTime, UNIX_EPOCH};

// Nanosecond timestamps used to determine it using its type
pub type TimestampNanos = u64;

/// Source of the current time, injected into the registry at construction.
///
/// The freezing-window boundary is only observable with a controllable
/// clock, so the registry never reads `SystemTime` directly.
pub trait Clock: Send + Sync {
    /// Nanoseconds since the Unix epoch.
    fn now_nanos(&self) -> TimestampNanos;
}

/// Wall clock backed by `SystemTime`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> TimestampNanos {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Incorrect time returned from SystemTime")
            .as_nanos() as TimestampNanos
    }
}
