//! Reliability counters
//!
//! Counters only ever grow until [`Statistics::reset`]. `errors` counts failed
//! *attempts*, so it can exceed `total_reads`, which counts `read()` calls;
//! the success rate is reported exactly as `(reads - errors) / reads * 100`
//! and therefore goes negative when most attempts fail.

/// Acquisition statistics since construction or the last reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// `read()` calls
    pub total_reads: u32,
    /// Failed attempts (no data or out of envelope)
    pub errors: u32,
    /// Anomalous samples seen by the filter
    pub anomaly_count: u32,
    /// Current run of anomalous samples since the last accepted one
    pub consecutive_anomaly_count: u32,
}

impl Statistics {
    /// `(total_reads - errors) / total_reads * 100`, 0 when nothing was read
    pub fn success_rate(&self) -> f32 {
        if self.total_reads == 0 {
            return 0.0;
        }
        let reads = self.total_reads as f32;
        (reads - self.errors as f32) / reads * 100.0
    }

    /// Zero every counter
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record_read(&mut self) {
        self.total_reads = self.total_reads.saturating_add(1);
    }

    pub(crate) fn record_error(&mut self) {
        self.errors = self.errors.saturating_add(1);
    }

    pub(crate) fn record_anomaly(&mut self) {
        self.anomaly_count = self.anomaly_count.saturating_add(1);
        self.consecutive_anomaly_count = self.consecutive_anomaly_count.saturating_add(1);
    }

    pub(crate) fn record_accepted(&mut self) {
        self.consecutive_anomaly_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_empty() {
        assert_eq!(Statistics::default().success_rate(), 0.0);
    }

    #[test]
    fn success_rate_formula() {
        let stats = Statistics { total_reads: 10, errors: 2, ..Default::default() };
        assert_eq!(stats.success_rate(), 80.0);

        // One exhausted read with three failed attempts
        let stats = Statistics { total_reads: 1, errors: 3, ..Default::default() };
        assert_eq!(stats.success_rate(), -200.0);
    }

    #[test]
    fn anomaly_run_tracking() {
        let mut stats = Statistics::default();
        stats.record_anomaly();
        stats.record_anomaly();
        assert_eq!(stats.anomaly_count, 2);
        assert_eq!(stats.consecutive_anomaly_count, 2);

        stats.record_accepted();
        assert_eq!(stats.anomaly_count, 2);
        assert_eq!(stats.consecutive_anomaly_count, 0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut stats = Statistics {
            total_reads: 5,
            errors: 1,
            anomaly_count: 2,
            consecutive_anomaly_count: 1,
        };
        stats.reset();
        assert_eq!(stats, Statistics::default());
    }
}
