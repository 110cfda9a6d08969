//! Sample and reading types
//!
//! A [`RawSample`] is produced once per raw transaction and consumed at once by
//! the validator. A [`ValidatedSample`] can only be obtained from
//! [`crate::validators::EnvelopeValidator`]. A [`Reading`] is what the
//! acquirer publishes: set in one piece after a successful read, never
//! partially updated.

use crate::time::Timestamp;

/// Decoded value pair from one raw transaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    /// Temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
}

impl RawSample {
    /// Create a sample from decoded values
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self { temperature, humidity }
    }
}

/// A raw sample known to lie within the configured envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedSample {
    temperature: f32,
    humidity: f32,
}

impl ValidatedSample {
    pub(crate) const fn new(sample: RawSample) -> Self {
        Self {
            temperature: sample.temperature,
            humidity: sample.humidity,
        }
    }

    /// Temperature in °C
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Relative humidity in %
    pub fn humidity(&self) -> f32 {
        self.humidity
    }
}

/// Result of the most recent successful acquisition cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Reported (possibly smoothed) temperature in °C
    pub temperature: f32,
    /// Reported (possibly smoothed) relative humidity in %
    pub humidity: f32,
    /// Monotonic time of the read in milliseconds
    pub timestamp: Timestamp,
    /// False until the first successful read
    pub valid: bool,
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            humidity: 0.0,
            timestamp: 0,
            valid: false,
        }
    }
}

impl Reading {
    pub(crate) fn new(temperature: f32, humidity: f32, timestamp: Timestamp) -> Self {
        Self { temperature, humidity, timestamp, valid: true }
    }

    /// Stored temperature converted to °F, without re-acquiring
    pub fn fahrenheit(&self) -> Option<f32> {
        self.valid.then(|| celsius_to_fahrenheit(self.temperature))
    }
}

/// `F = C * 9/5 + 32`
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}
