//! Control primitives for the fancontrol daemon.
//!
//! This crate provides the signal path between a temperature reading and
//! a PWM duty cycle:
//!
//! - [`PidController`]: error-integrating controller producing a bounded
//!   control signal in [0, 100], interpreted as a percentage
//! - [`map_to_duty`]: converts the control signal into a clamped integer
//!   duty cycle in `[0, max_speed]`
//! - [`IntervalClock`]: wall-clock scheduling for the sampled execution
//!   of logging and PID updates
//!
//! Controllers are sampled: they run once per configured interval, not
//! once per tick, and hold their previous output between samples.

pub mod clock;
pub mod mapper;
pub mod pid;

pub use clock::IntervalClock;
pub use mapper::map_to_duty;
pub use pid::{PID_DT, PidController, PidState};
