//! Collaborator Traits for DhtGuard
//!
//! The pipeline owns no hardware. Everything it talks to is injected:
//!
//! - [`sensor`] - the raw single-wire transaction
//! - [`log`] - the textual log sink
//! - [`TimeSource`] - monotonic timestamps (see [`crate::time`])
//!
//! Retry pauses and the status LED use the `embedded-hal` 1.0 traits
//! (`DelayNs`, `OutputPin`) directly, so any HAL driver plugs in unchanged.
//! The watchdog is a plain `FnMut()` passed per call.
//!
//! ## Usage Example
//!
//! ```rust
//! use dhtguard_core::traits::{RawSensor, LogSink};
//! use dhtguard_core::{RawSample, Unavailable};
//!
//! struct Bench { calls: u32 }
//!
//! impl RawSensor for Bench {
//!     fn transact(&mut self) -> Result<RawSample, Unavailable> {
//!         self.calls += 1;
//!         if self.calls % 2 == 0 { Err(Unavailable) } else { Ok(RawSample::new(20.0, 40.0)) }
//!     }
//! }
//!
//! struct Stdout;
//!
//! impl LogSink for Stdout {
//!     fn log(&mut self, message: &str, is_error: bool) {
//!         println!("[{}] {}", if is_error { "ERROR" } else { "INFO" }, message);
//!     }
//! }
//! ```

pub mod log;
pub mod sensor;

pub use self::log::{LogSink, NullSink};
pub use sensor::RawSensor;
pub use crate::time::TimeSource;

#[cfg(feature = "log")]
pub use self::log::LogFacade;
