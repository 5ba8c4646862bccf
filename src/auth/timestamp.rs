//! Request timestamps for Binance signed endpoints.
//!
//! Every signed request carries a `timestamp` parameter in milliseconds. Binance rejects
//! requests whose timestamp is outside `recvWindow` of its own clock, so the local clock
//! can be corrected by a fixed offset (server time minus local time).

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing the `timestamp` value of signed requests.
pub trait TimestampProvider: Send + Sync {
    /// Current time in milliseconds since UNIX epoch, as Binance should see it.
    fn timestamp_millis(&self) -> i64;
}

/// System clock corrected by an adjustable offset.
#[derive(Debug, Default)]
pub struct SystemClock {
    offset_ms: AtomicI64,
}

impl SystemClock {
    /// Create a clock without offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock shifted by `offset_ms` milliseconds.
    pub fn with_offset(offset_ms: i64) -> Self {
        Self {
            offset_ms: AtomicI64::new(offset_ms),
        }
    }

    /// Replace the offset, e.g. after comparing against the server time.
    pub fn set_offset(&self, offset_ms: i64) {
        self.offset_ms.store(offset_ms, Ordering::Relaxed);
    }

    /// Current offset in milliseconds.
    pub fn offset(&self) -> i64 {
        self.offset_ms.load(Ordering::Relaxed)
    }

    fn local_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

impl TimestampProvider for SystemClock {
    fn timestamp_millis(&self) -> i64 {
        Self::local_millis() + self.offset()
    }
}

/// A provider that always returns the same timestamp.
///
/// Useful for reproducible signatures in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestamp(pub i64);

impl TimestampProvider for FixedTimestamp {
    fn timestamp_millis(&self) -> i64 {
        self.0
    }
}
