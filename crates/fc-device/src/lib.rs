//! Sysfs device I/O for the fancontrol daemon.
//!
//! Sensors and actuators are plain kernel virtual files holding a single
//! numeric value. All operations here are synchronous, blocking, and
//! best-effort: no retry, no backoff, no atomicity. Reads surface errors
//! to the caller; actuator writes are fire-and-forget by contract (the
//! fan is best-effort cooling hardware, and a failed write must not halt
//! the control loop).

pub mod error;
pub mod sensor;
pub mod sysfs;

pub use error::{DeviceError, DeviceResult};
pub use sensor::{TEMP_SENTINEL, fan_speed, temperature};
pub use sysfs::{devices_present, read_raw, write_raw};
