use std::path::PathBuf;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write log file: {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
