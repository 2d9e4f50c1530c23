use serde::{Deserialize, Serialize};

use crate::format::TextureFormat;

/// Where a descriptor's archive offset came from.
///
/// Table offsets are authoritative; estimated offsets are a running sum of
/// per-format size guesses and become unreliable once real archives
/// interleave mipmaps or padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OffsetSource {
    Table,
    Estimated,
}

/// One texture entry from the manifest, immutable after construction.
/// Descriptors are produced in manifest line order, which is also the
/// correspondence key against the offset table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    pub name: String,
    /// Byte offset of this texture's record, relative to one specific
    /// archive file.
    pub offset: u64,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub has_alpha: bool,
    /// Optional content hashes for the archive's internal hash-indexed
    /// lookup; diagnostic only, never resolved here.
    pub hash_img: Option<u32>,
    pub hash_png: Option<u32>,
    pub estimated_data_size: u64,
    pub offset_source: OffsetSource,
}
