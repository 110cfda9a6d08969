//! Error Types for Acquisition and Configuration Failures
//!
//! ## Design Philosophy
//!
//! The acquisition boundary is deliberately narrow: `Acquirer::read` reports
//! only success or failure. The types in this module describe *why* a single
//! attempt failed so the cause can be rendered into the log stream and counted,
//! never so it can be handed back to the caller.
//!
//! Like the rest of the core, errors are small, `Copy`, and heap-free:
//!
//! 1. **No Heap Allocation**: payloads are plain floats and counters.
//! 2. **Copy Semantics**: cheap to return from the per-attempt hot path.
//!
//! ## Error Taxonomy
//!
//! | Kind | Retried | Counted in `errors` |
//! |------|---------|---------------------|
//! | `Unavailable` (no data decoded) | yes | yes |
//! | `RangeViolation` (outside envelope) | yes | yes |
//! | `ExhaustedRetries` (terminal for one `read`) | no | - |
//!
//! An anomalous sample rejected by the filter is *not* an error; see
//! [`crate::filter::FilterDecision`].

use thiserror_no_std::Error;

/// Raw transaction produced no data (checksum failure, timeout, missing pulses)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("sensor returned no data")]
pub struct Unavailable;

/// Result type for one acquisition attempt
pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

/// Why an acquisition attempt failed
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AcquisitionError {
    /// Raw transaction returned no data
    #[error("sensor returned no data")]
    Unavailable,

    /// Decoded values lie outside the sensor's physical envelope
    #[error("reading outside envelope: temperature={temperature:.2}, humidity={humidity:.2}")]
    RangeViolation {
        /// Decoded temperature in °C
        temperature: f32,
        /// Decoded relative humidity in %
        humidity: f32,
    },

    /// Every attempt of one `read` call failed
    #[error("no valid reading after {attempts} attempts")]
    ExhaustedRetries {
        /// Number of attempts made
        attempts: u8,
    },
}

impl From<Unavailable> for AcquisitionError {
    fn from(_: Unavailable) -> Self {
        AcquisitionError::Unavailable
    }
}

/// Configuration rejected by [`crate::config::PipelineConfig::validate`]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Envelope bounds are inverted or not finite
    #[error("invalid envelope for {quantity}: [{min}, {max}]")]
    InvalidEnvelope {
        /// Which quantity the bounds belong to
        quantity: &'static str,
        /// Configured lower bound
        min: f32,
        /// Configured upper bound
        max: f32,
    },

    /// Anomaly threshold is negative or not finite
    #[error("invalid anomaly threshold {threshold}")]
    InvalidThreshold {
        /// Configured threshold
        threshold: f32,
    },

    /// A read must make at least one attempt
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}

#[cfg(feature = "defmt")]
impl defmt::Format for AcquisitionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Unavailable =>
                defmt::write!(fmt, "No data"),
            Self::RangeViolation { temperature, humidity } =>
                defmt::write!(fmt, "Out of envelope: t={} h={}", temperature, humidity),
            Self::ExhaustedRetries { attempts } =>
                defmt::write!(fmt, "Exhausted {} attempts", attempts),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidEnvelope { quantity, min, max } =>
                defmt::write!(fmt, "Bad {} envelope [{}, {}]", quantity, min, max),
            Self::InvalidThreshold { threshold } =>
                defmt::write!(fmt, "Bad threshold {}", threshold),
            Self::ZeroAttempts =>
                defmt::write!(fmt, "Zero attempts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_converts() {
        let err: AcquisitionError = Unavailable.into();
        assert_eq!(err, AcquisitionError::Unavailable);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_render() {
        let err = AcquisitionError::RangeViolation { temperature: 85.0, humidity: 40.0 };
        assert_eq!(
            err.to_string(),
            "reading outside envelope: temperature=85.00, humidity=40.00"
        );
        assert_eq!(
            AcquisitionError::ExhaustedRetries { attempts: 3 }.to_string(),
            "no valid reading after 3 attempts"
        );
    }
}
