//! JSON Payloads and Configuration for DhtGuard
//!
//! ## Overview
//!
//! The acquisition core never touches the network. This crate defines the
//! bodies the publisher sends and the configuration format the device boots
//! from, so both sides agree on field names without the core depending on
//! `std`.
//!
//! ### Sensor Payload
//!
//! Published after every successful read:
//!
//! ```json
//! {
//!   "created_at": "2024-05-01T08:30:00+08:00",
//!   "temperature": 21.4,
//!   "humidity": 45.1
//! }
//! ```
//!
//! `created_at` is wall-clock time supplied by the caller (usually from NTP);
//! the reading's own timestamp is monotonic and meaningless off-device.
//!
//! ### Statistics Report
//!
//! Logged or published periodically:
//!
//! ```json
//! {
//!   "total_reads": 10,
//!   "errors": 2,
//!   "success_rate": 80.0,
//!   "anomaly_count": 1,
//!   "consecutive_anomaly": 0
//! }
//! ```
//!
//! ### Configuration
//!
//! Every section is optional and falls back to the DHT22 defaults:
//!
//! ```json
//! {
//!   "envelope": { "temp_min": 0.0, "temp_max": 50.0, "humidity_min": 20.0, "humidity_max": 90.0 },
//!   "filter": { "threshold": 2.0, "max_anomaly_count": 3 },
//!   "read": { "max_attempts": 5, "retry_delay_ms": 2000 }
//! }
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use dhtguard_schemas::load_config;
//!
//! let config = load_config(r#"{ "read": { "max_attempts": 5, "retry_delay_ms": 1000 } }"#)?;
//! assert_eq!(config.read.max_attempts, 5);
//! # Ok::<(), dhtguard_schemas::SchemaError>(())
//! ```

use chrono::{DateTime, FixedOffset, SecondsFormat};
use dhtguard_core::{ConfigError, PipelineConfig, Reading, Statistics};
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Errors from payload construction and configuration loading
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Input was not valid JSON for the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parsed but the configuration is unusable
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// No successful read yet
    #[error("no valid reading to publish")]
    NoReading,
}

/// Body published after each successful read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPayload {
    /// ISO-8601 wall-clock time with offset
    pub created_at: String,
    /// Temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
}

impl SensorPayload {
    /// Build from the acquirer's last reading
    pub fn from_reading(
        reading: &Reading,
        created_at: DateTime<FixedOffset>,
    ) -> Result<Self, SchemaError> {
        if !reading.valid {
            return Err(SchemaError::NoReading);
        }
        Ok(Self {
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            temperature: reading.temperature,
            humidity: reading.humidity,
        })
    }

    /// Serialize for publication
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Periodic reliability summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// `read()` calls
    pub total_reads: u32,
    /// Failed attempts
    pub errors: u32,
    /// Percentage, rounded to one decimal
    pub success_rate: f32,
    /// Anomalous samples seen
    pub anomaly_count: u32,
    /// Current anomaly run
    pub consecutive_anomaly: u32,
}

impl From<&Statistics> for StatisticsReport {
    fn from(stats: &Statistics) -> Self {
        Self {
            total_reads: stats.total_reads,
            errors: stats.errors,
            success_rate: (stats.success_rate() * 10.0).round() / 10.0,
            anomaly_count: stats.anomaly_count,
            consecutive_anomaly: stats.consecutive_anomaly_count,
        }
    }
}

impl StatisticsReport {
    /// Serialize for logging or publication
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parse and validate a pipeline configuration
pub fn load_config(json: &str) -> Result<PipelineConfig, SchemaError> {
    let config: PipelineConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
