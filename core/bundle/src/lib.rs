pub mod error;
pub mod extract;
pub mod process;

pub use error::{BundleError, Result};
pub use extract::{
    DecodedTexture, ExtractedPayload, HeaderKind, RECORD_HEADER_LEN, decode_texture, extract,
    mip_level_count,
};
