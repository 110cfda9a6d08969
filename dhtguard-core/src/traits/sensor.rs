//! Raw sensor transaction

use crate::{errors::Unavailable, reading::RawSample};

/// One physical query of the sensor over its native protocol
///
/// Implementations enforce their own minimum spacing between transactions
/// and protocol timing. Malformed wire data (bad checksum, missing edges,
/// timeout) is reported as [`Unavailable`]; implementations must not panic.
pub trait RawSensor {
    /// Perform one blocking transaction
    fn transact(&mut self) -> Result<RawSample, Unavailable>;
}

impl<F> RawSensor for F
where
    F: FnMut() -> Result<RawSample, Unavailable>,
{
    fn transact(&mut self) -> Result<RawSample, Unavailable> {
        self()
    }
}
