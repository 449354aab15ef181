//! Log entry formatting.

use chrono::{DateTime, Local};

/// One timestamped temperature sample.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Wall-clock timestamp, second resolution.
    pub timestamp: DateTime<Local>,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
}

impl LogEntry {
    pub fn new(timestamp: DateTime<Local>, temperature: f64) -> Self {
        Self {
            timestamp,
            temperature,
        }
    }

    /// Render the on-disk line format: `[YYYY-MM-DD HH:MM:SS] N.N`.
    pub fn to_line(&self) -> String {
        format!(
            "[{}] {:.1}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.temperature
        )
    }
}
