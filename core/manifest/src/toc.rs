use byteorder::{ByteOrder, LE};
use serde::{Deserialize, Serialize};

/// Slot value marking an invalid/unused offset table entry.
const UNUSED_SLOT: u32 = 0xFFFF_FFFF;

/// The parsed binary offset table ("toc" side file).
///
/// Offsets appear in manifest order. Because unused slots are dropped, the
/// table may end up shorter than the manifest's texture count; the manifest
/// parser's sequential fallback covers the remainder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OffsetTable {
    /// Declared total archive size from the table's first element.
    /// Display/diagnostic only; never used as an offset.
    pub declared_file_size: Option<u32>,
    pub offsets: Vec<u32>,
}

impl OffsetTable {
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Parses the flat little-endian u32 array. The first element is the
/// declared file size, each following element one texture's absolute
/// offset; `0xFFFFFFFF` entries are dropped. A trailing remainder shorter
/// than 4 bytes is ignored.
pub fn parse_offset_table(data: &[u8]) -> OffsetTable {
    let mut words = data.chunks_exact(4).map(LE::read_u32);

    let declared_file_size = words.next();
    let offsets = words.filter(|&v| v != UNUSED_SLOT).collect();

    OffsetTable {
        declared_file_size,
        offsets,
    }
}
