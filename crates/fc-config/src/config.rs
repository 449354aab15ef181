//! The immutable run configuration and its compiled-in defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Fixed path of the on-disk key/value configuration store.
pub const CONFIG_FILE: &str = "/etc/config/fancontrol";

/// Fixed path of the temperature history file shared with external readers.
pub const LOG_FILE: &str = "/tmp/log/log.fancontrol_temp";

/// Run configuration, built once at startup and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Temperature sensor sysfs file.
    pub thermal_file: PathBuf,
    /// Fan PWM (duty cycle) sysfs file.
    pub fan_pwm_file: PathBuf,
    /// Fan tachometer sysfs file.
    pub fan_speed_file: PathBuf,
    /// Divisor converting the raw sensor reading to degrees Celsius.
    pub temp_div: i64,
    /// Fan startup speed; also the minimum non-zero duty cycle.
    pub start_speed: i64,
    /// Maximum duty cycle the mapper may emit.
    pub max_speed: i64,
    /// PID setpoint in degrees Celsius.
    pub target_temp: i64,
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain.
    pub ki: f64,
    /// Derivative gain.
    pub kd: f64,
    /// Seconds between temperature log entries.
    pub log_interval: i64,
    /// Seconds between PID updates and actuator writes.
    pub pid_interval: i64,
    /// Debug level; nonzero enables per-tick diagnostics.
    pub debug: i64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            thermal_file: PathBuf::from("/sys/devices/virtual/thermal/thermal_zone0/temp"),
            fan_pwm_file: PathBuf::from("/sys/class/hwmon/hwmon7/pwm1"),
            fan_speed_file: PathBuf::from("/sys/class/hwmon/hwmon7/fan1_input"),
            temp_div: 1000,
            start_speed: 35,
            max_speed: 255,
            target_temp: 55,
            kp: 5.0,
            ki: 1.0,
            kd: 0.01,
            log_interval: 10,
            pid_interval: 30,
            debug: 0,
        }
    }
}

impl RunConfig {
    /// Replace any non-finite gain with its compiled-in default.
    ///
    /// Integer fields cannot be non-finite, and a zero resolved from an
    /// unparsable value is kept as-is (inherited fallback semantics).
    pub fn sanitize_gains(&mut self) {
        let defaults = RunConfig::default();
        if !self.kp.is_finite() {
            warn!(value = self.kp, "non-finite Kp, using default");
            self.kp = defaults.kp;
        }
        if !self.ki.is_finite() {
            warn!(value = self.ki, "non-finite Ki, using default");
            self.ki = defaults.ki;
        }
        if !self.kd.is_finite() {
            warn!(value = self.kd, "non-finite Kd, using default");
            self.kd = defaults.kd;
        }
    }
}
