use std::path::PathBuf;
use thiserror::Error;

pub type DeviceResult<T> = Result<T, DeviceError>;

#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Failed to read device file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No numeric value in device file: {path}")]
    Parse { path: PathBuf },

    #[error("Device file does not exist: {path}")]
    Missing { path: PathBuf },
}
