//! Cycle supervision for the caller's acquisition loop
//!
//! The pipeline never schedules reads. The loop that does (read, publish,
//! sleep) uses [`CycleMonitor`] to decide when things have gone wrong for
//! long enough that the device should restart, usually by no longer feeding
//! the hardware watchdog, and when a periodic statistics dump is due.

use crate::constants::time::{DEFAULT_MAX_CONSECUTIVE_FAILURES, DEFAULT_STATS_REPORT_EVERY};

/// Health of the acquisition loop after one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleVerdict {
    /// Last cycle succeeded
    Healthy,
    /// Failing, but below the restart limit
    Degraded {
        /// Consecutive failed cycles so far
        consecutive_failures: u32,
    },
    /// Limit reached; stop feeding the watchdog or reset the device
    RestartRequired {
        /// Consecutive failed cycles so far
        consecutive_failures: u32,
    },
}

/// Counts loop cycles and consecutive failures
#[derive(Debug, Clone)]
pub struct CycleMonitor {
    max_consecutive_failures: u32,
    report_every: u32,
    cycles: u32,
    consecutive_failures: u32,
}

impl Default for CycleMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONSECUTIVE_FAILURES, DEFAULT_STATS_REPORT_EVERY)
    }
}

impl CycleMonitor {
    /// Monitor with custom limits; zero values are raised to 1
    pub fn new(max_consecutive_failures: u32, report_every: u32) -> Self {
        Self {
            max_consecutive_failures: max_consecutive_failures.max(1),
            report_every: report_every.max(1),
            cycles: 0,
            consecutive_failures: 0,
        }
    }

    /// Record the outcome of one loop cycle
    pub fn record(&mut self, success: bool) -> CycleVerdict {
        self.cycles = self.cycles.wrapping_add(1);

        if success {
            self.consecutive_failures = 0;
            return CycleVerdict::Healthy;
        }

        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        if self.consecutive_failures >= self.max_consecutive_failures {
            CycleVerdict::RestartRequired { consecutive_failures: self.consecutive_failures }
        } else {
            CycleVerdict::Degraded { consecutive_failures: self.consecutive_failures }
        }
    }

    /// True on every `report_every`-th cycle
    pub fn report_due(&self) -> bool {
        self.cycles != 0 && self.cycles % self.report_every == 0
    }

    /// Cycles recorded so far
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Current run of failed cycles
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}
