//! Acquisition pipeline for DhtGuard
//!
//! Turns a noisy single-wire temperature/humidity sensor into a stream of
//! validated, de-noised readings while tracking reliability statistics.
//! Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - Runs on microcontrollers (ESP32, RP2040)
//! - No heap allocation anywhere in the read path
//! - Single calling thread, blocking reads bounded by the retry budget
//!
//! ```no_run
//! use dhtguard_core::{Acquirer, RawSample, Unavailable};
//! use dhtguard_core::time::{MonotonicTime, StdDelay};
//!
//! let sensor = || -> Result<RawSample, Unavailable> {
//!     Ok(RawSample::new(21.5, 48.0))
//! };
//! let mut acquirer = Acquirer::new(sensor, StdDelay, MonotonicTime::new());
//!
//! let mut feed = || { /* kick the watchdog */ };
//! if acquirer.read(3, 2000, Some(&mut feed)) {
//!     let reading = acquirer.last_reading();
//!     println!("{:.1}°C {:.1}%", reading.temperature, reading.humidity);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod acquirer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filter;
pub mod indicator;
pub mod monitor;
pub mod reading;
pub mod stats;
pub mod time;
pub mod traits;
pub mod validators;

// Public API
pub use acquirer::Acquirer;
pub use config::{FilterConfig, PipelineConfig, ReadOptions, SensorEnvelope};
pub use errors::{AcquisitionError, ConfigError, Unavailable};
pub use filter::{AnomalyFilter, FilterDecision, FilterOutcome};
pub use indicator::NoIndicator;
pub use monitor::{CycleMonitor, CycleVerdict};
pub use reading::{RawSample, Reading, ValidatedSample};
pub use stats::Statistics;
pub use traits::{LogSink, NullSink, RawSensor};
pub use validators::EnvelopeValidator;

#[cfg(feature = "log")]
pub use traits::LogFacade;

/// Crate version, as published
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
