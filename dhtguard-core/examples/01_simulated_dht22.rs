//! Simulated DHT22 Acquisition Loop
//!
//! This example runs the acquisition pipeline against a simulated sensor that
//! drops frames, decodes the occasional garbage value, glitches, and finally
//! undergoes a real step change (a heater switching on).
//!
//! ## What You'll Learn
//!
//! - Wiring an `Acquirer` with a log sink and a watchdog hook
//! - How retries, envelope rejection, and the anomaly filter interact
//! - Supervising the loop with `CycleMonitor`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_simulated_dht22
//! ```

use dhtguard_core::{
    time::{MonotonicTime, StdDelay},
    Acquirer, CycleMonitor, CycleVerdict, LogSink, RawSample, Unavailable,
};

/// Prints pipeline log lines with a level prefix
struct Console;

impl LogSink for Console {
    fn log(&mut self, message: &str, is_error: bool) {
        let level = if is_error { "ERROR" } else { "INFO " };
        println!("  [{}] {}", level, message);
    }
}

fn main() {
    println!("DhtGuard Simulated Acquisition Example");
    println!("======================================\n");

    // Scripted transactions: None means no frame decoded
    let script: Vec<Option<(f32, f32)>> = vec![
        Some((21.2, 45.0)),
        Some((21.3, 45.2)),
        None,
        Some((21.3, 45.1)),
        Some((3276.7, 45.0)), // garbage frame, fails the envelope
        Some((21.4, 45.0)),
        Some((34.9, 45.0)),   // single glitch
        Some((21.4, 45.1)),
        Some((27.0, 43.0)),   // heater on: persists
        Some((27.2, 42.8)),
        Some((27.3, 42.7)),
        Some((27.5, 42.5)),
        Some((27.6, 42.4)),
    ];
    let mut index = 0;
    let sensor = move || -> Result<RawSample, Unavailable> {
        let step = script.get(index).copied().flatten();
        index += 1;
        step.map(|(t, h)| RawSample::new(t, h)).ok_or(Unavailable)
    };

    let mut acquirer = Acquirer::new(sensor, StdDelay, MonotonicTime::new())
        .with_log_sink(Console);
    let mut monitor = CycleMonitor::new(3, 5);
    let mut watchdog_feeds = 0u32;

    for cycle in 1..=11 {
        println!("Cycle {}:", cycle);
        let mut feed = || watchdog_feeds += 1;
        let success = acquirer.read(3, 50, Some(&mut feed));

        if success {
            let reading = acquirer.last_reading();
            println!(
                "  -> publish {:.1}°C / {:.1}°F, {:.1}%",
                reading.temperature,
                reading.fahrenheit().unwrap_or_default(),
                reading.humidity
            );
        }

        match monitor.record(success) {
            CycleVerdict::Healthy => {}
            CycleVerdict::Degraded { consecutive_failures } => {
                println!("  -> degraded, {} failed cycles", consecutive_failures);
            }
            CycleVerdict::RestartRequired { consecutive_failures } => {
                println!("  -> {} failed cycles, restart required", consecutive_failures);
                break;
            }
        }

        if monitor.report_due() {
            let stats = acquirer.statistics();
            println!(
                "  -> stats: reads={} errors={} success={:.1}% anomalies={} streak={}",
                stats.total_reads,
                stats.errors,
                stats.success_rate(),
                stats.anomaly_count,
                stats.consecutive_anomaly_count
            );
        }
    }

    println!("\nWatchdog fed {} times", watchdog_feeds);
    acquirer.release();
}
