//! Status LED
//!
//! The acquirer drives any `embedded_hal::digital::OutputPin`: low while a
//! transaction is outstanding, high after a successful `read()`, low after a
//! failed one. Boards without an LED use [`NoIndicator`].

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

/// Placeholder pin for boards without a status LED
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoIndicator;

impl ErrorType for NoIndicator {
    type Error = Infallible;
}

impl OutputPin for NoIndicator {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Best-effort LED control; a failing pin never fails a read
pub(crate) fn set<P: OutputPin>(pin: &mut P, on: bool) {
    let _ = if on { pin.set_high() } else { pin.set_low() };
}
