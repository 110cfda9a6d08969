//! Pipeline configuration
//!
//! Defaults reproduce the DHT22 deployment: the datasheet envelope, a shared
//! 3.0 jump threshold, force-accept after three rejections, and three attempts
//! spaced two seconds apart. Presets and `new_with_limits` retarget the
//! pipeline to other sensors of the same class.

use crate::{
    constants::{
        sensors::{
            DHT11_HUMIDITY_MAX_PCT, DHT11_HUMIDITY_MIN_PCT, DHT11_TEMP_MAX_C, DHT11_TEMP_MIN_C,
            DHT22_HUMIDITY_MAX_PCT, DHT22_HUMIDITY_MIN_PCT, DHT22_TEMP_MAX_C, DHT22_TEMP_MIN_C,
            MAX_ANOMALY_COUNT, MAX_CHANGE_THRESHOLD,
        },
        time::{DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY_MS},
    },
    errors::ConfigError,
};

/// Physical measurement envelope of the sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorEnvelope {
    /// Minimum valid temperature in °C
    pub temp_min: f32,
    /// Maximum valid temperature in °C
    pub temp_max: f32,
    /// Minimum valid relative humidity in %
    pub humidity_min: f32,
    /// Maximum valid relative humidity in %
    pub humidity_max: f32,
}

impl Default for SensorEnvelope {
    fn default() -> Self {
        Self::dht22()
    }
}

impl SensorEnvelope {
    /// DHT22 / AM2302: -40..80 °C, 0..100 %RH
    pub const fn dht22() -> Self {
        Self {
            temp_min: DHT22_TEMP_MIN_C,
            temp_max: DHT22_TEMP_MAX_C,
            humidity_min: DHT22_HUMIDITY_MIN_PCT,
            humidity_max: DHT22_HUMIDITY_MAX_PCT,
        }
    }

    /// DHT11: 0..50 °C, 20..90 %RH
    pub const fn dht11() -> Self {
        Self {
            temp_min: DHT11_TEMP_MIN_C,
            temp_max: DHT11_TEMP_MAX_C,
            humidity_min: DHT11_HUMIDITY_MIN_PCT,
            humidity_max: DHT11_HUMIDITY_MAX_PCT,
        }
    }

    /// Envelope with custom limits
    pub const fn new_with_limits(
        temp_min: f32,
        temp_max: f32,
        humidity_min: f32,
        humidity_max: f32,
    ) -> Self {
        Self { temp_min, temp_max, humidity_min, humidity_max }
    }

    /// Check that both ranges are finite and ordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bounds("temperature", self.temp_min, self.temp_max)?;
        check_bounds("humidity", self.humidity_min, self.humidity_max)
    }
}

fn check_bounds(quantity: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvelope { quantity, min, max })
    }
}

/// Jump-rejection tuning for [`crate::filter::AnomalyFilter`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    /// Largest accepted change in either quantity between consecutive samples
    pub threshold: f32,
    /// Rejections tolerated before the next anomalous sample is force-accepted
    pub max_anomaly_count: u8,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold: MAX_CHANGE_THRESHOLD,
            max_anomaly_count: MAX_ANOMALY_COUNT,
        }
    }
}

impl FilterConfig {
    /// Threshold must be finite and non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold.is_finite() && self.threshold >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidThreshold { threshold: self.threshold })
        }
    }
}

/// Retry budget for one `read()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadOptions {
    /// Raw transactions attempted before giving up
    pub max_attempts: u8,
    /// Pause between failed attempts in milliseconds
    pub retry_delay_ms: u32,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRY_COUNT,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Measurement envelope checked by the validator
    pub envelope: SensorEnvelope,
    /// Anomaly filter tuning
    pub filter: FilterConfig,
    /// Defaults for `read_default`
    pub read: ReadOptions,
}

impl PipelineConfig {
    /// Preset for a DHT11 with otherwise default tuning
    pub fn dht11() -> Self {
        Self {
            envelope: SensorEnvelope::dht11(),
            ..Self::default()
        }
    }

    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.envelope.validate()?;
        self.filter.validate()?;
        if self.read.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dht22() {
        let config = PipelineConfig::default();
        assert_eq!(config.envelope.temp_min, -40.0);
        assert_eq!(config.envelope.temp_max, 80.0);
        assert_eq!(config.envelope.humidity_min, 0.0);
        assert_eq!(config.envelope.humidity_max, 100.0);
        assert_eq!(config.filter.threshold, 3.0);
        assert_eq!(config.filter.max_anomaly_count, 3);
        assert_eq!(config.read.max_attempts, 3);
        assert_eq!(config.read.retry_delay_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn dht11_preset() {
        let config = PipelineConfig::dht11();
        assert_eq!(config.envelope, SensorEnvelope::dht11());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_envelope() {
        let mut config = PipelineConfig::default();
        config.envelope = SensorEnvelope::new_with_limits(50.0, 10.0, 0.0, 100.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEnvelope { quantity: "temperature", .. })
        ));

        config.envelope = SensorEnvelope::new_with_limits(0.0, 10.0, f32::NAN, 100.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEnvelope { quantity: "humidity", .. })
        ));
    }

    #[test]
    fn rejects_bad_threshold_and_zero_attempts() {
        let mut config = PipelineConfig::default();
        config.filter.threshold = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold { threshold: -1.0 }));

        let mut config = PipelineConfig::default();
        config.read.max_attempts = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroAttempts));
    }
}
