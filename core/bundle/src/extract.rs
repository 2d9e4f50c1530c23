use std::io::{Read, Seek, SeekFrom};

use byteorder::{LE, ReadBytesExt};
use manifest::TextureDescriptor;
use serde::{Deserialize, Serialize};

use crate::error::{BundleError, Result};

/// Every per-texture record starts with a fixed-size format header.
/// Both observed header variants are exactly this long.
pub const RECORD_HEADER_LEN: usize = 52;

/// PVR v3 magic at the start of the record header.
const PVR_V3_MAGIC: [u8; 4] = [0x50, 0x56, 0x52, 0x03];
/// Legacy v2 marker, found at offset 44 inside the 52-byte header.
const PVR_V2_MARKER: [u8; 4] = *b"PVR!";

/// Which header variant the sniffing recognized. Classification is
/// informational only; the skip amount is `RECORD_HEADER_LEN` in every
/// observed case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderKind {
    PvrV3,
    LegacyV2,
    Unknown,
}

/// The compressed payload for a texture's base mip level, plus the
/// diagnostics gathered on the way to it.
#[derive(Debug, Clone)]
pub struct ExtractedPayload {
    pub data: Vec<u8>,
    pub header: HeaderKind,
    /// The 4-byte mip size fields actually read. May be shorter than the
    /// count predicted from the dimensions if the archive ran out early.
    pub mip_sizes: Vec<u32>,
}

/// A fully decoded texture, RGBA8888 row-major.
#[derive(Debug, Clone)]
pub struct DecodedTexture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub header: HeaderKind,
    pub mip_sizes: Vec<u32>,
}

/// Number of mip levels expected for the given base dimensions: halve both
/// until either drops below 2, counting iterations. This count determines
/// how many 4-byte size prefixes precede the pixel payload; nothing
/// cross-checks it against what the archive actually stored.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    let mut w = width;
    let mut h = height;
    let mut count = 0;
    while w >= 2 && h >= 2 {
        w /= 2;
        h /= 2;
        count += 1;
    }
    count
}

/// Reads the compressed base-mip payload for `descriptor` out of a
/// seekable archive.
///
/// One seek to `descriptor.offset`, then a bounded forward read: the
/// 52-byte record header, the mip size prefixes, and the first (largest)
/// mip's bytes. No state is retained between calls.
pub fn extract<R: Read + Seek>(
    reader: &mut R,
    descriptor: &TextureDescriptor,
) -> Result<ExtractedPayload> {
    let file_len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(descriptor.offset))?;

    let mut header = [0u8; RECORD_HEADER_LEN];
    reader.read_exact(&mut header)?;

    let kind = if header[0..4] == PVR_V3_MAGIC {
        HeaderKind::PvrV3
    } else if header[44..48] == PVR_V2_MARKER {
        HeaderKind::LegacyV2
    } else {
        HeaderKind::Unknown
    };

    let expected_mips = mip_level_count(descriptor.width, descriptor.height);
    let mut pos = descriptor.offset + RECORD_HEADER_LEN as u64;

    // Read size prefixes while both the predicted count and the file allow;
    // a short archive yields a partial (but recorded) list.
    let mut mip_sizes = Vec::with_capacity(expected_mips as usize);
    for _ in 0..expected_mips {
        if pos + 4 > file_len {
            break;
        }
        mip_sizes.push(reader.read_u32::<LE>()?);
        pos += 4;
    }
    if mip_sizes.is_empty() {
        return Err(BundleError::NoMipmapSizesFound);
    }

    let needed = mip_sizes[0] as usize;
    let available = (file_len - pos) as usize;
    if available < needed {
        return Err(BundleError::TruncatedPayload { needed, available });
    }

    let mut data = vec![0u8; needed];
    reader.read_exact(&mut data)?;

    Ok(ExtractedPayload {
        data,
        header: kind,
        mip_sizes,
    })
}

/// Extracts and decodes a texture in one step. This archive family stores
/// PVRTC at 2 bits per pixel regardless of the manifest's nominal format
/// code, so the payload always decodes as 2bpp.
pub fn decode_texture<R: Read + Seek>(
    reader: &mut R,
    descriptor: &TextureDescriptor,
) -> Result<DecodedTexture> {
    let payload = extract(reader, descriptor)?;
    let rgba = pvrtc::decode_pvrtc(&payload.data, descriptor.width, descriptor.height, true)?;
    Ok(DecodedTexture {
        width: descriptor.width,
        height: descriptor.height,
        rgba,
        header: payload.header,
        mip_sizes: payload.mip_sizes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest::{OffsetSource, TextureFormat};
    use std::io::Cursor;

    fn descriptor(offset: u64, width: u32, height: u32) -> TextureDescriptor {
        TextureDescriptor {
            name: "tex".to_string(),
            offset,
            width,
            height,
            format: TextureFormat::Pvrtc2bpp,
            has_alpha: true,
            hash_img: None,
            hash_png: None,
            estimated_data_size: TextureFormat::Pvrtc2bpp.estimated_data_size(width, height),
            offset_source: OffsetSource::Table,
        }
    }

    fn v3_header() -> [u8; RECORD_HEADER_LEN] {
        let mut header = [0u8; RECORD_HEADER_LEN];
        header[0..4].copy_from_slice(&PVR_V3_MAGIC);
        header
    }

    /// Record for a 16x16 2bpp texture at the given archive offset:
    /// header, 4 mip size fields, 64-byte base payload.
    fn build_record(header: [u8; RECORD_HEADER_LEN], payload: &[u8]) -> Vec<u8> {
        let mut out = header.to_vec();
        for size in [payload.len() as u32, 16, 8, 8] {
            out.extend_from_slice(&size.to_le_bytes());
        }
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn test_mip_level_count() {
        assert_eq!(mip_level_count(16, 16), 4);
        assert_eq!(mip_level_count(256, 128), 7);
        assert_eq!(mip_level_count(1, 64), 0);
    }

    #[test]
    fn test_extract_v3_record() {
        let payload = vec![0xA5u8; 64];
        let mut archive = vec![0xEEu8; 10]; // unrelated leading bytes
        archive.extend(build_record(v3_header(), &payload));

        let desc = descriptor(10, 16, 16);
        let extracted = extract(&mut Cursor::new(archive), &desc).unwrap();
        assert_eq!(extracted.header, HeaderKind::PvrV3);
        assert_eq!(extracted.mip_sizes, vec![64, 16, 8, 8]);
        assert_eq!(extracted.data, payload);
    }

    #[test]
    fn test_extract_legacy_header() {
        let mut header = [0u8; RECORD_HEADER_LEN];
        header[44..48].copy_from_slice(b"PVR!");
        let archive = build_record(header, &vec![0u8; 64]);

        let extracted = extract(&mut Cursor::new(archive), &descriptor(0, 16, 16)).unwrap();
        assert_eq!(extracted.header, HeaderKind::LegacyV2);
    }

    #[test]
    fn test_unknown_header_still_skipped() {
        let archive = build_record([0u8; RECORD_HEADER_LEN], &vec![0u8; 64]);
        let extracted = extract(&mut Cursor::new(archive), &descriptor(0, 16, 16)).unwrap();
        assert_eq!(extracted.header, HeaderKind::Unknown);
        assert_eq!(extracted.data.len(), 64);
    }

    #[test]
    fn test_no_mip_sizes() {
        // archive ends immediately after the header
        let archive = v3_header().to_vec();
        match extract(&mut Cursor::new(archive), &descriptor(0, 16, 16)) {
            Err(BundleError::NoMipmapSizesFound) => {}
            other => panic!("expected NoMipmapSizesFound, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_mip_sizes_recorded() {
        // the file ends inside the size-prefix region: only 2 of the 4
        // predicted fields are read, and the partial count surfaces in the
        // TruncatedPayload that follows
        let mut archive = v3_header().to_vec();
        archive.extend_from_slice(&64u32.to_le_bytes());
        archive.extend_from_slice(&16u32.to_le_bytes());

        match extract(&mut Cursor::new(archive), &descriptor(0, 16, 16)) {
            Err(BundleError::TruncatedPayload { needed, available }) => {
                assert_eq!(needed, 64);
                assert_eq!(available, 0);
            }
            other => panic!("expected TruncatedPayload, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_payload() {
        let mut archive = v3_header().to_vec();
        archive.extend_from_slice(&64u32.to_le_bytes());
        archive.extend_from_slice(&16u32.to_le_bytes());
        archive.extend_from_slice(&8u32.to_le_bytes());
        archive.extend_from_slice(&8u32.to_le_bytes());
        archive.extend_from_slice(&[0u8; 40]); // short of the declared 64

        match extract(&mut Cursor::new(archive), &descriptor(0, 16, 16)) {
            Err(BundleError::TruncatedPayload { needed, available }) => {
                assert_eq!(needed, 64);
                assert_eq!(available, 40);
            }
            other => panic!("expected TruncatedPayload, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_texture_roundtrip() {
        // all-zero payload decodes to a uniform transparent-black image
        let archive = build_record(v3_header(), &vec![0u8; 64]);
        let decoded = decode_texture(&mut Cursor::new(archive), &descriptor(0, 16, 16)).unwrap();
        assert_eq!(decoded.rgba.len(), 16 * 16 * 4);
        assert!(decoded.rgba.iter().all(|&b| b == 0));
    }
}
