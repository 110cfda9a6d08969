//! Sensor Specifications and Filter Tuning
//!
//! Measurement envelopes come from the manufacturer datasheets. Readings
//! outside them are decoding errors, not weather.

// ===== DHT22 / AM2302 =====

/// Lowest temperature the DHT22 reports (°C).
///
/// Source: Aosong AM2302 datasheet, measurement range
pub const DHT22_TEMP_MIN_C: f32 = -40.0;

/// Highest temperature the DHT22 reports (°C).
///
/// Source: Aosong AM2302 datasheet, measurement range
pub const DHT22_TEMP_MAX_C: f32 = 80.0;

/// Lowest relative humidity the DHT22 reports (%RH).
pub const DHT22_HUMIDITY_MIN_PCT: f32 = 0.0;

/// Highest relative humidity the DHT22 reports (%RH).
pub const DHT22_HUMIDITY_MAX_PCT: f32 = 100.0;

// ===== DHT11 =====

/// Lowest temperature the DHT11 reports (°C).
///
/// Source: Aosong DHT11 datasheet
pub const DHT11_TEMP_MIN_C: f32 = 0.0;

/// Highest temperature the DHT11 reports (°C).
pub const DHT11_TEMP_MAX_C: f32 = 50.0;

/// Lowest relative humidity the DHT11 reports (%RH).
pub const DHT11_HUMIDITY_MIN_PCT: f32 = 20.0;

/// Highest relative humidity the DHT11 reports (%RH).
pub const DHT11_HUMIDITY_MAX_PCT: f32 = 90.0;

// ===== ANOMALY FILTER =====

/// Largest sample-to-sample change treated as normal drift.
///
/// Applied to both temperature (°C) and humidity (%RH). One shared value is
/// kept on purpose so the deployed firmware behaves identically; use
/// [`crate::config::FilterConfig`] to tune it.
pub const MAX_CHANGE_THRESHOLD: f32 = 3.0;

/// Consecutive anomalous samples tolerated before the filter force-accepts.
///
/// The sample *after* this many rejections becomes the new ground truth,
/// so a genuine step change is tracked within `MAX_ANOMALY_COUNT + 1` reads.
pub const MAX_ANOMALY_COUNT: u8 = 3;
