//! Daemon library: lifecycle state machine and the 1 Hz control loop.
//!
//! The binary in `main.rs` stays thin (flag parsing, tracing init, signal
//! registration); everything with behavior worth testing lives here.

pub mod daemon;
pub mod error;

pub use daemon::{Daemon, DaemonState, Tick};
pub use error::{AppError, AppResult};
