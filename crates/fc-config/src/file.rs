//! Key/value config-file parsing.
//!
//! Format: one `key=value` pair per line, split on the first `=`, both
//! sides whitespace-trimmed. Lines that are empty or start with `#` are
//! skipped. A value wrapped in single quotes has the quotes stripped.
//! Unknown keys are ignored. Numeric values use atoi/atof semantics: an
//! unparsable value silently resolves to 0 / 0.0.

use crate::config::RunConfig;
use fc_core::{leading_f64, leading_i64};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Overlay `key=value` pairs from the file at `path` onto `config`.
///
/// A missing or unreadable file is a non-fatal warning; the config is
/// left untouched.
pub fn overlay_file(config: &mut RunConfig, path: &Path) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot open config file");
            return;
        }
    };
    overlay_str(config, &content);
}

/// Overlay config-file content already in memory.
pub fn overlay_str(config: &mut RunConfig, content: &str) {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        apply_key(config, key.trim(), unquote(value.trim()));
    }
}

/// Strip surrounding single quotes, if present. An unterminated quote
/// strips the opening quote only.
fn unquote(value: &str) -> &str {
    match value.strip_prefix('\'') {
        Some(rest) => match rest.rfind('\'') {
            Some(end) => &rest[..end],
            None => rest,
        },
        None => value,
    }
}

fn apply_key(config: &mut RunConfig, key: &str, value: &str) {
    match key {
        "thermal_file" => config.thermal_file = PathBuf::from(value),
        "fan_pwm_file" => config.fan_pwm_file = PathBuf::from(value),
        "fan_speed_file" => config.fan_speed_file = PathBuf::from(value),
        "temp_div" => config.temp_div = atoi(value),
        "start_speed" => config.start_speed = atoi(value),
        "max_speed" => config.max_speed = atoi(value),
        "target_temp" => config.target_temp = atoi(value),
        "Kp" => config.kp = atof(value),
        "Ki" => config.ki = atof(value),
        "Kd" => config.kd = atof(value),
        "log_interval" => config.log_interval = atoi(value),
        "pid_interval" => config.pid_interval = atoi(value),
        _ => {}
    }
}

fn atoi(value: &str) -> i64 {
    leading_i64(value).unwrap_or(0)
}

fn atof(value: &str) -> f64 {
    leading_f64(value).unwrap_or(0.0)
}
