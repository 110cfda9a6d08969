//! Common test doubles for integration tests
//!
//! This module provides:
//! - A scripted raw sensor that replays a fixed sequence of transactions
//! - Recording implementations of the log sink, delay, and LED pin
//! - Small helpers for building acquirers around them

#![allow(dead_code)]

use std::collections::VecDeque;
use std::convert::Infallible;

use dhtguard_core::{
    constants::time::NS_PER_MS,
    time::FixedTime,
    Acquirer, LogSink, RawSample, RawSensor, Unavailable,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
};

/// Replays scripted transactions, then repeats `fallback` forever
pub struct ScriptedSensor {
    script: VecDeque<Result<RawSample, Unavailable>>,
    fallback: Result<RawSample, Unavailable>,
    pub calls: usize,
}

impl ScriptedSensor {
    pub fn new(script: Vec<Result<RawSample, Unavailable>>) -> Self {
        Self {
            script: script.into(),
            fallback: Err(Unavailable),
            calls: 0,
        }
    }

    /// Sensor that never decodes a frame
    pub fn dead() -> Self {
        Self::new(Vec::new())
    }

    /// Sensor that always returns the same values
    pub fn steady(temperature: f32, humidity: f32) -> Self {
        Self::new(Vec::new()).then_repeat(Ok(RawSample::new(temperature, humidity)))
    }

    pub fn then_repeat(mut self, fallback: Result<RawSample, Unavailable>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn push(&mut self, result: Result<RawSample, Unavailable>) {
        self.script.push_back(result);
    }
}

impl RawSensor for ScriptedSensor {
    fn transact(&mut self) -> Result<RawSample, Unavailable> {
        self.calls += 1;
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

/// Shorthand for a successful transaction
pub fn ok(temperature: f32, humidity: f32) -> Result<RawSample, Unavailable> {
    Ok(RawSample::new(temperature, humidity))
}

/// Keeps every log line
#[derive(Default)]
pub struct RecordingSink {
    pub lines: Vec<(String, bool)>,
}

impl RecordingSink {
    pub fn errors(&self) -> usize {
        self.lines.iter().filter(|(_, is_error)| *is_error).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|(line, _)| line.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|(line, _)| line.contains(needle)).count()
    }
}

impl LogSink for RecordingSink {
    fn log(&mut self, message: &str, is_error: bool) {
        self.lines.push((message.to_owned(), is_error));
    }
}

/// Records requested pauses instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pub pauses_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.pauses_ms.push(ns / NS_PER_MS);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.pauses_ms.push(ms);
    }
}

/// LED that remembers every level it was driven to
#[derive(Default)]
pub struct RecordingPin {
    pub history: Vec<bool>,
}

impl RecordingPin {
    pub fn is_on(&self) -> bool {
        self.history.last().copied().unwrap_or(false)
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.history.push(true);
        Ok(())
    }
}

pub type TestAcquirer =
    Acquirer<ScriptedSensor, RecordingDelay, FixedTime, RecordingSink, RecordingPin>;

/// Acquirer wired to recording doubles with the default configuration
pub fn acquirer(sensor: ScriptedSensor) -> TestAcquirer {
    Acquirer::new(sensor, RecordingDelay::default(), FixedTime::new(1_000))
        .with_log_sink(RecordingSink::default())
        .with_indicator(RecordingPin::default())
}
