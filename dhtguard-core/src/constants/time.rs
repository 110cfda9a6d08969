//! Time-Related Constants
//!
//! Retry pacing for one `read()` call and supervision defaults for the
//! caller's acquisition loop.

// ===== TIME UNIT CONVERSIONS =====

/// Nanoseconds per millisecond.
pub const NS_PER_MS: u32 = 1_000_000;

// ===== RETRY PACING =====

/// Attempts per `read()` call.
pub const DEFAULT_RETRY_COUNT: u8 = 3;

/// Pause between failed attempts (milliseconds).
///
/// The DHT22 needs at least 2 s between transactions to produce fresh data.
///
/// Source: AM2302 datasheet, "collecting period"
pub const DEFAULT_RETRY_DELAY_MS: u32 = 2000;

// ===== CYCLE SUPERVISION =====

/// Consecutive failed cycles before the device should be restarted.
pub const DEFAULT_MAX_CONSECUTIVE_FAILURES: u32 = 5;

/// Cycles between periodic statistics dumps.
pub const DEFAULT_STATS_REPORT_EVERY: u32 = 10;
