//! Temperature and tachometer accessors.
//!
//! Failed reads do not stop the control loop: the temperature accessor
//! yields a negative sentinel that flows into the PID computation as if
//! it were a real reading, matching the long-standing behavior external
//! tooling is tuned against.

use crate::sysfs::read_raw;
use std::path::Path;
use tracing::warn;

/// Sentinel temperature produced when the sensor cannot be read.
pub const TEMP_SENTINEL: f64 = -1.0;

/// Read the current temperature in degrees Celsius.
///
/// The raw sysfs value is divided by `div` (typically 1000 for millidegree
/// thermal zones). Returns [`TEMP_SENTINEL`] on any read or parse failure.
pub fn temperature(thermal_file: &Path, div: i64) -> f64 {
    match read_raw(thermal_file) {
        Ok(raw) => raw as f64 / div as f64,
        Err(err) => {
            warn!(%err, "temperature read failed");
            TEMP_SENTINEL
        }
    }
}

/// Read the current fan speed in RPM from the tachometer file.
///
/// Returns -1 on failure. Used for diagnostics only; the control loop
/// never acts on this value.
pub fn fan_speed(fan_speed_file: &Path) -> i64 {
    read_raw(fan_speed_file).unwrap_or(-1)
}
