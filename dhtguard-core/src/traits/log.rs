//! Textual log sink
//!
//! The pipeline reports every attempt and every filter decision as one line.
//! Lines are formatted into a fixed-capacity buffer before they reach the
//! sink, so sinks never see allocation and overlong lines are truncated.

/// Capacity of one formatted log line in bytes
pub const LOG_LINE_CAPACITY: usize = 160;

/// Receiver for pipeline log lines
///
/// Must not fail or block for long; the return value is never inspected.
pub trait LogSink {
    /// Record one line
    fn log(&mut self, message: &str, is_error: bool);
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&mut self, _message: &str, _is_error: bool) {}
}

/// Sink that forwards to the `log` facade under target `dhtguard`
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

#[cfg(feature = "log")]
impl LogSink for LogFacade {
    fn log(&mut self, message: &str, is_error: bool) {
        if is_error {
            ::log::error!(target: "dhtguard", "{}", message);
        } else {
            ::log::info!(target: "dhtguard", "{}", message);
        }
    }
}

/// Format `args` into a bounded line and hand it to `sink`
pub(crate) fn emit<L: LogSink>(sink: &mut L, is_error: bool, args: core::fmt::Arguments<'_>) {
    use core::fmt::Write;

    let mut line: heapless::String<LOG_LINE_CAPACITY> = heapless::String::new();
    // Overflow leaves the prefix that fit
    let _ = line.write_fmt(args);
    sink.log(&line, is_error);
}
