use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BundleError>;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("No mipmap size fields could be read")]
    NoMipmapSizesFound,
    #[error("Truncated payload: needed {needed} bytes, {available} available")]
    TruncatedPayload { needed: usize, available: usize },
    #[error("PVRTC decode failed: {0}")]
    Pvrtc(#[from] pvrtc::PvrtcError),
    #[error("Texture not found in manifest: {0}")]
    TextureNotFound(String),
}
