//! Constants for DhtGuard Core
//!
//! Every numeric default the pipeline uses lives here, with its unit in the
//! name and a note on where the value comes from. Nothing in the read path
//! should carry a bare literal.
//!
//! Constants are grouped by domain:
//! - **Sensors**: measurement envelopes and filter tuning
//! - **Time**: retry pacing and cycle supervision

/// Sensor measurement envelopes and anomaly filter tuning.
pub mod sensors;

/// Retry pacing, conversions, and cycle supervision defaults.
pub mod time;

// Re-export commonly used constants for convenience
pub use sensors::{
    DHT22_TEMP_MIN_C, DHT22_TEMP_MAX_C, DHT22_HUMIDITY_MIN_PCT, DHT22_HUMIDITY_MAX_PCT,
    MAX_CHANGE_THRESHOLD, MAX_ANOMALY_COUNT,
};

pub use time::{
    DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY_MS,
    DEFAULT_MAX_CONSECUTIVE_FAILURES, DEFAULT_STATS_REPORT_EVERY,
};
