//! Command-line overrides, applied after the config file overlay.
//!
//! The binary owns flag parsing; this struct keeps the library free of
//! any CLI dependency. `None` fields leave the resolved value in place.

use crate::config::RunConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional per-field overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliOverrides {
    pub thermal_file: Option<PathBuf>,
    pub fan_pwm_file: Option<PathBuf>,
    pub fan_speed_file: Option<PathBuf>,
    pub start_speed: Option<i64>,
    pub target_temp: Option<i64>,
    pub max_speed: Option<i64>,
    pub temp_div: Option<i64>,
    pub debug: Option<i64>,
}

impl CliOverrides {
    /// Apply every set field onto `config`.
    pub fn apply(&self, config: &mut RunConfig) {
        if let Some(path) = &self.thermal_file {
            config.thermal_file = path.clone();
        }
        if let Some(path) = &self.fan_pwm_file {
            config.fan_pwm_file = path.clone();
        }
        if let Some(path) = &self.fan_speed_file {
            config.fan_speed_file = path.clone();
        }
        if let Some(speed) = self.start_speed {
            config.start_speed = speed;
        }
        if let Some(temp) = self.target_temp {
            config.target_temp = temp;
        }
        if let Some(speed) = self.max_speed {
            config.max_speed = speed;
        }
        if let Some(div) = self.temp_div {
            config.temp_div = div;
        }
        if let Some(level) = self.debug {
            config.debug = level;
        }
    }
}
