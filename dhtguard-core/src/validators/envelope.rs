//! Envelope validator for temperature/humidity pairs

use crate::{
    config::SensorEnvelope,
    errors::{AcquisitionError, AcquisitionResult},
    reading::{RawSample, ValidatedSample},
};

use super::utils;

/// Rejects physically impossible readings before they reach the filter
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeValidator {
    envelope: SensorEnvelope,
}

impl EnvelopeValidator {
    /// Validator for the given envelope
    pub const fn new(envelope: SensorEnvelope) -> Self {
        Self { envelope }
    }

    /// Envelope this validator enforces
    pub fn envelope(&self) -> &SensorEnvelope {
        &self.envelope
    }

    /// True iff both values lie inside the envelope (inclusive)
    pub fn validate(&self, temperature: f32, humidity: f32) -> bool {
        utils::within(temperature, self.envelope.temp_min, self.envelope.temp_max)
            && utils::within(humidity, self.envelope.humidity_min, self.envelope.humidity_max)
    }

    /// Promote a raw sample, or describe why it was rejected
    pub fn check(&self, sample: RawSample) -> AcquisitionResult<ValidatedSample> {
        if self.validate(sample.temperature, sample.humidity) {
            Ok(ValidatedSample::new(sample))
        } else {
            Err(AcquisitionError::RangeViolation {
                temperature: sample.temperature,
                humidity: sample.humidity,
            })
        }
    }
}
