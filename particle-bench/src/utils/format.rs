//! Formatting utilities

use std::time::Duration;

/// Format a duration as seconds with microsecond precision
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.6} s", duration.as_secs_f64())
}

/// Format a duration in the most readable unit
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.3} s")
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else {
        format!("{:.3} µs", secs * 1e6)
    }
}

/// Format a throughput in updates per second
pub fn format_rate(count: u64, duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs == 0.0 {
        "N/A".to_string()
    } else {
        let rate = count as f64 / secs;
        if rate >= 1e6 {
            format!("{:.2} M/s", rate / 1e6)
        } else if rate >= 1e3 {
            format!("{:.2} k/s", rate / 1e3)
        } else {
            format!("{rate:.2} /s")
        }
    }
}
