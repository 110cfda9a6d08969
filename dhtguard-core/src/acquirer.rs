//! Bounded-Retry Acquisition
//!
//! ## Overview
//!
//! [`Acquirer`] owns the whole pipeline for one sensor and turns one call to
//! [`Acquirer::read`] into at most `max_attempts` raw transactions:
//!
//! ```text
//! read() ──┬─> watchdog ─> LED off ─> transact ─> validate ─> filter ─> Reading, LED on
//!          │                            │            │
//!          │                      Unavailable  RangeViolation
//!          │                            └─────┬──────┘
//!          │                      errors += 1, log
//!          └──── delay(retry) <── attempts left?  ── no ──> LED off, return false
//! ```
//!
//! A sample rejected by the anomaly filter still ends the read successfully:
//! the last accepted values are reported again. Rejection is a filtering
//! decision, not a read failure.
//!
//! ## Failure Boundary
//!
//! `read()` returns only `bool`. The cause of each failed attempt goes to the
//! [`LogSink`] and the [`Statistics`] counters; the previous [`Reading`] is
//! left untouched when every attempt fails.
//!
//! ## Concurrency
//!
//! All state is owned by the acquirer and mutated from the calling thread
//! only. Share it between tasks behind a single mutex; filter transitions
//! must not interleave.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    config::{PipelineConfig, ReadOptions},
    errors::{AcquisitionError, AcquisitionResult, ConfigError},
    filter::{AnomalyFilter, FilterDecision, FilterOutcome},
    indicator::{self, NoIndicator},
    reading::{celsius_to_fahrenheit, Reading},
    stats::Statistics,
    time::TimeSource,
    traits::{log::emit, LogSink, NullSink, RawSensor},
    validators::EnvelopeValidator,
};

/// Resilient read pipeline for one temperature/humidity sensor
pub struct Acquirer<S, D, C, L = NullSink, P = NoIndicator> {
    sensor: S,
    delay: D,
    clock: C,
    log: L,
    indicator: P,
    validator: EnvelopeValidator,
    filter: AnomalyFilter,
    read_options: ReadOptions,
    stats: Statistics,
    last: Reading,
}

impl<S, D, C> Acquirer<S, D, C> {
    /// Pipeline with the DHT22 defaults, no log output, and no LED
    pub fn new(sensor: S, delay: D, clock: C) -> Self {
        Self::build(sensor, delay, clock, PipelineConfig::default())
    }

    /// Pipeline with a custom configuration
    pub fn with_config(
        sensor: S,
        delay: D,
        clock: C,
        config: PipelineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(sensor, delay, clock, config))
    }

    fn build(sensor: S, delay: D, clock: C, config: PipelineConfig) -> Self {
        Self {
            sensor,
            delay,
            clock,
            log: NullSink,
            indicator: NoIndicator,
            validator: EnvelopeValidator::new(config.envelope),
            filter: AnomalyFilter::new(config.filter),
            read_options: config.read,
            stats: Statistics::default(),
            last: Reading::default(),
        }
    }
}

impl<S, D, C, L, P> Acquirer<S, D, C, L, P> {
    /// Route log lines to `log`
    pub fn with_log_sink<L2: LogSink>(self, log: L2) -> Acquirer<S, D, C, L2, P> {
        Acquirer {
            sensor: self.sensor,
            delay: self.delay,
            clock: self.clock,
            log,
            indicator: self.indicator,
            validator: self.validator,
            filter: self.filter,
            read_options: self.read_options,
            stats: self.stats,
            last: self.last,
        }
    }

    /// Drive a status LED; the pin starts low
    pub fn with_indicator<P2: OutputPin>(self, mut pin: P2) -> Acquirer<S, D, C, L, P2> {
        indicator::set(&mut pin, false);
        Acquirer {
            sensor: self.sensor,
            delay: self.delay,
            clock: self.clock,
            log: self.log,
            indicator: pin,
            validator: self.validator,
            filter: self.filter,
            read_options: self.read_options,
            stats: self.stats,
            last: self.last,
        }
    }

    /// Most recent successful reading; `valid` is false before the first one
    pub fn last_reading(&self) -> Reading {
        self.last
    }

    /// Reported temperature in °C, if any read has succeeded
    pub fn temperature(&self) -> Option<f32> {
        self.last.valid.then_some(self.last.temperature)
    }

    /// Reported relative humidity in %, if any read has succeeded
    pub fn humidity(&self) -> Option<f32> {
        self.last.valid.then_some(self.last.humidity)
    }

    /// Snapshot of the reliability counters
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Anomaly filter state (read-only)
    pub fn filter(&self) -> &AnomalyFilter {
        &self.filter
    }

    /// Envelope validator in use
    pub fn validator(&self) -> &EnvelopeValidator {
        &self.validator
    }

    /// Retry budget used by [`Acquirer::read_default`]
    pub fn read_options(&self) -> ReadOptions {
        self.read_options
    }

    /// Underlying sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Log sink
    pub fn log_sink(&self) -> &L {
        &self.log
    }

    /// Retry delay source
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Status LED pin
    pub fn indicator(&self) -> &P {
        &self.indicator
    }

    /// Time source
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time source, mutably (test clocks)
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl<S, D, C, L, P> Acquirer<S, D, C, L, P>
where
    S: RawSensor,
    D: DelayNs,
    C: TimeSource,
    L: LogSink,
    P: OutputPin,
{
    /// Acquire one reading with up to `max_attempts` raw transactions
    ///
    /// `watchdog` is called once per attempt, before the transaction.
    /// `retry_delay_ms` is slept between failed attempts, never after the
    /// last. A `max_attempts` of 0 is treated as 1.
    pub fn read(
        &mut self,
        max_attempts: u8,
        retry_delay_ms: u32,
        mut watchdog: Option<&mut dyn FnMut()>,
    ) -> bool {
        let attempts = max_attempts.max(1);
        self.stats.record_read();

        for attempt in 0..attempts {
            if let Some(feed) = watchdog.as_deref_mut() {
                feed();
            }
            indicator::set(&mut self.indicator, false);

            match self.attempt() {
                Ok(outcome) => {
                    self.publish(outcome);
                    return true;
                }
                Err(err) => {
                    self.stats.record_error();

                    if attempt == attempts - 1 {
                        emit(
                            &mut self.log,
                            true,
                            format_args!("read failed (attempt {}/{}): {}", attempt + 1, attempts, err),
                        );
                        // Own line so a long cause can't truncate it
                        emit(
                            &mut self.log,
                            true,
                            format_args!("{}", AcquisitionError::ExhaustedRetries { attempts }),
                        );
                        indicator::set(&mut self.indicator, false);
                        return false;
                    }

                    emit(
                        &mut self.log,
                        false,
                        format_args!("read failed (attempt {}/{}): {}", attempt + 1, attempts, err),
                    );
                    self.delay.delay_ms(retry_delay_ms);
                }
            }
        }

        false
    }

    /// [`Acquirer::read`] with the configured [`ReadOptions`]
    pub fn read_default(&mut self, watchdog: Option<&mut dyn FnMut()>) -> bool {
        let options = self.read_options;
        self.read(options.max_attempts, options.retry_delay_ms, watchdog)
    }

    /// Acquire, then return the stored reading as (°F, %RH)
    pub fn read_fahrenheit(
        &mut self,
        max_attempts: u8,
        retry_delay_ms: u32,
        watchdog: Option<&mut dyn FnMut()>,
    ) -> Option<(f32, f32)> {
        if self.read(max_attempts, retry_delay_ms, watchdog) {
            Some((celsius_to_fahrenheit(self.last.temperature), self.last.humidity))
        } else {
            None
        }
    }

    /// Zero the counters; filter history is kept
    pub fn reset_statistics(&mut self) {
        self.stats.reset();
        emit(&mut self.log, false, format_args!("statistics reset"));
    }

    /// Turn the LED off and hand back the sensor and pin
    pub fn release(mut self) -> (S, P) {
        indicator::set(&mut self.indicator, false);
        emit(&mut self.log, false, format_args!("sensor released"));
        (self.sensor, self.indicator)
    }

    fn attempt(&mut self) -> AcquisitionResult<FilterOutcome> {
        let raw = self.sensor.transact()?;
        let sample = self.validator.check(raw)?;
        Ok(self.filter.filter(sample.temperature(), sample.humidity()))
    }

    fn publish(&mut self, outcome: FilterOutcome) {
        self.record_decision(&outcome);

        self.last = Reading::new(outcome.temperature, outcome.humidity, self.clock.now());
        indicator::set(&mut self.indicator, true);

        emit(
            &mut self.log,
            false,
            format_args!(
                "read ok: temperature={:.2}°C, humidity={:.2}%",
                outcome.temperature, outcome.humidity
            ),
        );
    }

    fn record_decision(&mut self, outcome: &FilterOutcome) {
        match outcome.decision {
            FilterDecision::FirstSample | FilterDecision::Stable => {
                self.stats.record_accepted();
            }
            FilterDecision::Recovered { cleared_streak } => {
                self.stats.record_accepted();
                emit(
                    &mut self.log,
                    false,
                    format_args!("readings back to normal, cleared anomaly streak of {}", cleared_streak),
                );
            }
            FilterDecision::Rejected { temp_change, humidity_change, streak } => {
                self.stats.record_anomaly();
                self.log_anomaly(temp_change, humidity_change, streak);
                emit(
                    &mut self.log,
                    false,
                    format_args!(
                        "discarding anomalous sample, reporting last accepted: temperature={:.1}°C, humidity={:.1}%",
                        outcome.temperature, outcome.humidity
                    ),
                );
            }
            FilterDecision::ForceAccepted { temp_change, humidity_change, streak } => {
                self.stats.record_anomaly();
                self.log_anomaly(temp_change, humidity_change, streak);
                self.stats.record_accepted();
                emit(
                    &mut self.log,
                    false,
                    format_args!(
                        "anomaly persisted past {} samples, adopting temperature={:.1}°C, humidity={:.1}%",
                        self.filter.config().max_anomaly_count,
                        outcome.temperature,
                        outcome.humidity
                    ),
                );
            }
        }
    }

    fn log_anomaly(&mut self, temp_change: f32, humidity_change: f32, streak: u16) {
        emit(
            &mut self.log,
            false,
            format_args!(
                "anomaly detected: temperature change={:.1}°C, humidity change={:.1}%, consecutive={}",
                temp_change, humidity_change, streak
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Unavailable, reading::RawSample, time::FixedTime};

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn steady() -> Result<RawSample, Unavailable> {
        Ok(RawSample::new(21.0, 45.0))
    }

    #[test]
    fn successful_read_stores_reading() {
        let mut acquirer = Acquirer::new(steady, NoDelay, FixedTime::new(1234));

        assert!(acquirer.read(3, 0, None));
        let reading = acquirer.last_reading();
        assert!(reading.valid);
        assert_eq!(reading.temperature, 21.0);
        assert_eq!(reading.humidity, 45.0);
        assert_eq!(reading.timestamp, 1234);
        assert_eq!(acquirer.temperature(), Some(21.0));
        assert_eq!(acquirer.humidity(), Some(45.0));

        let stats = acquirer.statistics();
        assert_eq!(stats.total_reads, 1);
        assert_eq!(stats.errors, 0);
        assert_eq!(stats.success_rate(), 100.0);
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let mut calls = 0;
        let sensor = || -> Result<RawSample, Unavailable> {
            calls += 1;
            Err(Unavailable)
        };
        let mut acquirer = Acquirer::new(sensor, NoDelay, FixedTime::new(0));

        assert!(!acquirer.read(0, 0, None));
        assert_eq!(acquirer.statistics().errors, 1);
        drop(acquirer);
        assert_eq!(calls, 1);
    }

    #[test]
    fn fahrenheit_read() {
        let mut acquirer = Acquirer::new(
            || -> Result<RawSample, Unavailable> { Ok(RawSample::new(25.0, 60.0)) },
            NoDelay,
            FixedTime::new(0),
        );

        assert_eq!(acquirer.read_fahrenheit(1, 0, None), Some((77.0, 60.0)));
        assert_eq!(acquirer.last_reading().fahrenheit(), Some(77.0));
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = PipelineConfig::default();
        config.read.max_attempts = 0;
        let result = Acquirer::with_config(steady, NoDelay, FixedTime::new(0), config);
        assert!(matches!(result, Err(ConfigError::ZeroAttempts)));
    }
}
