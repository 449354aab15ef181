//! Raw sysfs read/write primitives.

use crate::error::{DeviceError, DeviceResult};
use fc_core::leading_i64;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Read the leading integer from the first line of a sysfs file.
pub fn read_raw(path: &Path) -> DeviceResult<i64> {
    let file = File::open(path).map_err(|source| DeviceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|source| DeviceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    leading_i64(&line).ok_or_else(|| DeviceError::Parse {
        path: path.to_path_buf(),
    })
}

/// Write an integer (plus trailing newline) to a sysfs file, truncating.
///
/// Failures are absorbed: the actuator is best-effort and the caller has
/// no way to react beyond trying again next interval. The failure is
/// surfaced to the tracing sink only.
pub fn write_raw(path: &Path, value: i64) {
    let result = File::create(path).and_then(|mut file| writeln!(file, "{value}"));
    if let Err(err) = result {
        debug!(path = %path.display(), %err, "actuator write failed");
    }
}

/// Fatal-precondition check: both device files must exist before the
/// control loop may start.
pub fn devices_present(thermal_file: &Path, fan_pwm_file: &Path) -> DeviceResult<()> {
    for path in [fan_pwm_file, thermal_file] {
        if !path.exists() {
            return Err(DeviceError::Missing {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
