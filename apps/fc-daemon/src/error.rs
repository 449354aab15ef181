//! Error types for the daemon layer.

use thiserror::Error;

/// Daemon error wrapping the backend crate errors. Everything here is a
/// fatal startup condition; once the loop is running, failures are
/// absorbed locally and never surface as errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Device error: {0}")]
    Device(#[from] fc_device::DeviceError),

    #[error("Store error: {0}")]
    Store(#[from] fc_store::StoreError),

    #[error("Control error: {0}")]
    Control(#[from] fc_core::FcError),

    #[error("Failed to register signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type AppResult<T> = Result<T, AppError>;
