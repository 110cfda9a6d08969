//! Jump-Rejection Filter with Force-Accept
//!
//! ## Overview
//!
//! Single-wire sensors under electrical noise produce isolated glitches that
//! pass the envelope check: 21.3 °C, 21.4 °C, **34.9 °C**, 21.4 °C. Publishing
//! the spike would trip every downstream alert. Permanently rejecting large
//! changes would be worse: a heater switching on is a real step change that
//! must eventually be reported.
//!
//! The filter is a small hysteresis state machine:
//!
//! ```text
//!             |Δ| <= threshold                    |Δ| > threshold
//!  ┌──────────────────────────────┐   ┌──────────────────────────────────┐
//!  │ accept, streak := 0          │   │ streak += 1                      │
//!  │ (logs "recovered" if streak  │   │ streak >  max: force-accept,     │
//!  │  was non-zero)               │   │                streak := 0       │
//!  └──────────────────────────────┘   │ streak <= max: report last       │
//!                                     │                accepted values   │
//!                                     └──────────────────────────────────┘
//! ```
//!
//! The first sample ever seen is accepted unconditionally. With the default
//! limit of 3, a genuine step change is reported on the 4th consecutive
//! sample.
//!
//! Both deltas are compared against one shared threshold even though
//! temperature and humidity have different units; see
//! [`MAX_CHANGE_THRESHOLD`](crate::constants::MAX_CHANGE_THRESHOLD).

use crate::config::FilterConfig;

/// Last value pair the filter treats as ground truth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accepted {
    /// Temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
}

/// What the filter decided for one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterDecision {
    /// No baseline yet; sample accepted unconditionally
    FirstSample,
    /// Within threshold of the baseline
    Stable,
    /// Within threshold after a partial anomaly streak, which is cleared
    Recovered {
        /// Length of the streak that was cleared
        cleared_streak: u16,
    },
    /// Jump rejected; last accepted values reported instead
    Rejected {
        /// Absolute temperature change against the baseline
        temp_change: f32,
        /// Absolute humidity change against the baseline
        humidity_change: f32,
        /// Consecutive anomalies including this one
        streak: u16,
    },
    /// Jump persisted past the limit and became the new baseline
    ForceAccepted {
        /// Absolute temperature change against the old baseline
        temp_change: f32,
        /// Absolute humidity change against the old baseline
        humidity_change: f32,
        /// Consecutive anomalies including this one
        streak: u16,
    },
}

impl FilterDecision {
    /// True for decisions that counted an anomaly
    pub fn is_anomaly(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::ForceAccepted { .. })
    }
}

/// Values to report for one filtered sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOutcome {
    /// Temperature to report in °C
    pub temperature: f32,
    /// Humidity to report in %
    pub humidity: f32,
    /// True if the reported pair is the filter's current ground truth
    /// *and* came from this sample
    pub accepted: bool,
    /// Why
    pub decision: FilterDecision,
}

/// Stateful smoother protecting consumers from single-sample glitches
#[derive(Debug, Clone, Default)]
pub struct AnomalyFilter {
    config: FilterConfig,
    last_accepted: Option<Accepted>,
    consecutive_anomalies: u16,
}

impl AnomalyFilter {
    /// Filter with the given tuning and no history
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            last_accepted: None,
            consecutive_anomalies: 0,
        }
    }

    /// Tuning in effect
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Current ground truth, `None` before the first sample
    pub fn last_accepted(&self) -> Option<Accepted> {
        self.last_accepted
    }

    /// Rejected jumps since the last accepted sample
    pub fn consecutive_anomalies(&self) -> u16 {
        self.consecutive_anomalies
    }

    /// Run one validated sample through the filter
    pub fn filter(&mut self, temperature: f32, humidity: f32) -> FilterOutcome {
        let Some(baseline) = self.last_accepted else {
            return self.accept(temperature, humidity, FilterDecision::FirstSample);
        };

        let temp_change = libm::fabsf(temperature - baseline.temperature);
        let humidity_change = libm::fabsf(humidity - baseline.humidity);
        let is_anomaly =
            temp_change > self.config.threshold || humidity_change > self.config.threshold;

        if !is_anomaly {
            let decision = match self.consecutive_anomalies {
                0 => FilterDecision::Stable,
                cleared_streak => FilterDecision::Recovered { cleared_streak },
            };
            return self.accept(temperature, humidity, decision);
        }

        self.consecutive_anomalies = self.consecutive_anomalies.saturating_add(1);
        let streak = self.consecutive_anomalies;

        // Wider than the limit so a persistent jump always gets past it
        if streak > u16::from(self.config.max_anomaly_count) {
            // Persistence means a real step change, not noise
            self.accept(
                temperature,
                humidity,
                FilterDecision::ForceAccepted { temp_change, humidity_change, streak },
            )
        } else {
            FilterOutcome {
                temperature: baseline.temperature,
                humidity: baseline.humidity,
                accepted: false,
                decision: FilterDecision::Rejected { temp_change, humidity_change, streak },
            }
        }
    }

    fn accept(&mut self, temperature: f32, humidity: f32, decision: FilterDecision) -> FilterOutcome {
        self.last_accepted = Some(Accepted { temperature, humidity });
        self.consecutive_anomalies = 0;
        FilterOutcome { temperature, humidity, accepted: true, decision }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline_filter() -> AnomalyFilter {
        let mut filter = AnomalyFilter::default();
        filter.filter(20.0, 50.0);
        filter
    }

    #[test]
    fn first_sample_passes_through() {
        let mut filter = AnomalyFilter::default();
        assert!(filter.last_accepted().is_none());

        let outcome = filter.filter(-12.5, 97.0);
        assert_eq!(outcome.temperature, -12.5);
        assert_eq!(outcome.humidity, 97.0);
        assert!(outcome.accepted);
        assert_eq!(outcome.decision, FilterDecision::FirstSample);
        assert_eq!(
            filter.last_accepted(),
            Some(Accepted { temperature: -12.5, humidity: 97.0 })
        );
    }

    #[test]
    fn small_changes_track() {
        let mut filter = baseline_filter();

        let outcome = filter.filter(22.5, 47.5);
        assert!(outcome.accepted);
        assert_eq!(outcome.decision, FilterDecision::Stable);
        assert_eq!((outcome.temperature, outcome.humidity), (22.5, 47.5));

        // Exactly the threshold is not an anomaly
        let outcome = filter.filter(25.5, 47.5);
        assert!(outcome.accepted);
    }

    #[test]
    fn step_change_force_accepted_on_fourth_sample() {
        let mut filter = baseline_filter();

        for expected_streak in 1..=3 {
            let outcome = filter.filter(30.0, 50.0);
            assert!(!outcome.accepted);
            assert_eq!((outcome.temperature, outcome.humidity), (20.0, 50.0));
            assert!(matches!(
                outcome.decision,
                FilterDecision::Rejected { streak, .. } if streak == expected_streak
            ));
            assert_eq!(filter.consecutive_anomalies(), expected_streak);
        }

        let outcome = filter.filter(30.0, 50.0);
        assert!(outcome.accepted);
        assert_eq!((outcome.temperature, outcome.humidity), (30.0, 50.0));
        assert!(matches!(outcome.decision, FilterDecision::ForceAccepted { streak: 4, .. }));
        assert_eq!(filter.consecutive_anomalies(), 0);
        assert_eq!(
            filter.last_accepted(),
            Some(Accepted { temperature: 30.0, humidity: 50.0 })
        );
    }

    #[test]
    fn humidity_jump_alone_is_anomalous() {
        let mut filter = baseline_filter();

        let outcome = filter.filter(20.0, 54.0);
        assert!(!outcome.accepted);
        match outcome.decision {
            FilterDecision::Rejected { temp_change, humidity_change, streak } => {
                assert_eq!(temp_change, 0.0);
                assert_eq!(humidity_change, 4.0);
                assert_eq!(streak, 1);
            }
            other => panic!("unexpected decision {:?}", other),
        }
    }

    #[test]
    fn recovery_clears_partial_streak() {
        let mut filter = baseline_filter();

        filter.filter(35.0, 50.0);
        filter.filter(35.0, 50.0);
        assert_eq!(filter.consecutive_anomalies(), 2);

        let outcome = filter.filter(21.0, 51.0);
        assert!(outcome.accepted);
        assert_eq!((outcome.temperature, outcome.humidity), (21.0, 51.0));
        assert_eq!(outcome.decision, FilterDecision::Recovered { cleared_streak: 2 });
        assert_eq!(filter.consecutive_anomalies(), 0);

        // A new jump starts a fresh streak
        let outcome = filter.filter(35.0, 50.0);
        assert!(matches!(outcome.decision, FilterDecision::Rejected { streak: 1, .. }));
    }

    #[test]
    fn custom_limit_of_zero_accepts_immediately() {
        let mut filter = AnomalyFilter::new(FilterConfig { threshold: 1.0, max_anomaly_count: 0 });
        filter.filter(20.0, 50.0);

        let outcome = filter.filter(22.0, 50.0);
        assert!(outcome.accepted);
        assert!(outcome.decision.is_anomaly());
    }

    #[test]
    fn largest_limit_still_converges() {
        let mut filter =
            AnomalyFilter::new(FilterConfig { threshold: 3.0, max_anomaly_count: u8::MAX });
        filter.filter(20.0, 50.0);

        let accepted_at = (1..=300u32).find(|_| filter.filter(30.0, 50.0).accepted);
        assert_eq!(accepted_at, Some(256));
        assert_eq!(filter.consecutive_anomalies(), 0);
        assert_eq!(
            filter.last_accepted(),
            Some(Accepted { temperature: 30.0, humidity: 50.0 })
        );
    }
}
