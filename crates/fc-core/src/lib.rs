//! fc-core: stable foundation for fancontrol.
//!
//! Contains:
//! - error (shared error types)
//! - numeric (Real + float helpers + clamping)
//! - parse (C-style leading-number parsing for sysfs and config values)

pub mod error;
pub mod numeric;
pub mod parse;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FcError, FcResult};
pub use numeric::*;
pub use parse::*;
