//! Configuration resolution for the fancontrol daemon.
//!
//! A `RunConfig` is produced exactly once at startup by layering three
//! sources, lowest priority first:
//!
//! 1. Compiled-in defaults
//! 2. The on-disk key/value store at `/etc/config/fancontrol`
//! 3. Command-line overrides supplied by the binary
//!
//! The resolved config is immutable for the lifetime of the process;
//! reconfiguration requires a restart.

use std::path::Path;

pub mod config;
pub mod file;
pub mod overrides;

pub use config::{CONFIG_FILE, LOG_FILE, RunConfig};
pub use file::overlay_file;
pub use overrides::CliOverrides;

/// Resolve the run configuration: defaults, then the config file at
/// `path` (missing/unreadable is a warning, not an error), then CLI
/// overrides. Non-finite gains are pulled back to their defaults.
pub fn resolve(path: &Path, overrides: &CliOverrides) -> RunConfig {
    let mut config = RunConfig::default();
    overlay_file(&mut config, path);
    overrides.apply(&mut config);
    config.sanitize_gains();
    config
}
