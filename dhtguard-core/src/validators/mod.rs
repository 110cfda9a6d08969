//! Physical-Envelope Validation
//!
//! ## Overview
//!
//! Single-wire sensors occasionally decode a frame whose checksum happens to
//! match but whose payload is garbage: a temperature of 3276.7 °C or a
//! humidity of 255 %. Those values must never reach the anomaly filter,
//! because the filter would then compare every following sample against a
//! baseline that never existed.
//!
//! The validator is the first gate after the raw transaction:
//!
//! ```text
//! raw transaction ──> EnvelopeValidator ──> AnomalyFilter ──> Reading
//!        │                   │
//!   Unavailable        RangeViolation
//!        └──── retried, counted in `errors` ────┘
//! ```
//!
//! ## Rules
//!
//! A sample is accepted iff both quantities are finite and lie inside the
//! configured [`SensorEnvelope`](crate::config::SensorEnvelope), bounds
//! inclusive. The check is pure: no history, no side effects.
//!
//! ## Usage Example
//!
//! ```rust
//! use dhtguard_core::validators::EnvelopeValidator;
//! use dhtguard_core::config::SensorEnvelope;
//!
//! let validator = EnvelopeValidator::default();
//! assert!(validator.validate(22.5, 45.0));
//! assert!(!validator.validate(85.0, 45.0));
//!
//! // Same pipeline, retargeted to a DHT11
//! let dht11 = EnvelopeValidator::new(SensorEnvelope::dht11());
//! assert!(!dht11.validate(-5.0, 45.0));
//! ```

mod envelope;
mod utils;

pub use envelope::EnvelopeValidator;
