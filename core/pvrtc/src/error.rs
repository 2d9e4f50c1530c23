use thiserror::Error;

pub type Result<T> = std::result::Result<T, PvrtcError>;

#[derive(Error, Debug)]
pub enum PvrtcError {
    #[error("Invalid texture dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Insufficient compressed data: expected {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}
