//! Bounded on-disk temperature history.
//!
//! The daemon is the sole writer of a plain-text file read by an external
//! UI to render a live chart. Entries are newest-first, one per line, and
//! the file never holds more than one hour's worth of samples. The file
//! itself is the store: no in-memory structure survives between appends.

pub mod entry;
pub mod error;
pub mod store;

pub use entry::LogEntry;
pub use error::{StoreError, StoreResult};
pub use store::TempLogStore;
