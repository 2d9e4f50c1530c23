use crate::color::{Rgba32, decode_color16};

/// One 64-bit PVRTC block, read little-endian from the compressed stream.
///
/// Low 32 bits hold the 2-bit-per-pixel modulation word; the high 32 bits
/// hold the two packed endpoint colors (A in the low 16, B in the high 16).
#[derive(Clone, Copy, Default)]
pub struct PvrtcBlock {
    pub word: u64,
}

impl PvrtcBlock {
    pub fn new(word: u64) -> Self {
        Self { word }
    }

    pub fn modulation_data(&self) -> u32 {
        (self.word & 0xFFFF_FFFF) as u32
    }

    pub fn color_a(&self) -> Rgba32 {
        decode_color16(((self.word >> 32) & 0xFFFF) as u16)
    }

    pub fn color_b(&self) -> Rgba32 {
        decode_color16((self.word >> 48) as u16)
    }

    /// Decodes the pixel at local coordinates (px, py) within the block.
    ///
    /// `block_width` is 8 for 2bpp blocks and 4 for 4bpp blocks; py is
    /// always in [0, 4). The 2 modulation bits select between the two
    /// endpoint colors or one of two fixed blends toward B. Only this
    /// block's own endpoints contribute; neighboring blocks are never
    /// sampled.
    pub fn pixel(&self, px: u32, py: u32, block_width: u32) -> Rgba32 {
        let mod_index = py * block_width + px;
        // 2bpp blocks index up to 31 while the modulation word holds 32
        // bits; extracting from the zero-extended word makes indices past
        // 15 read as 0 (color A) instead of overflowing the shift.
        let mod_bits = ((self.word & 0xFFFF_FFFF) >> (mod_index * 2)) & 0b11;

        let a = self.color_a();
        let b = self.color_b();
        match mod_bits {
            0 => a,
            3 => b,
            1 => blend(a, b, 3),
            _ => blend(a, b, 5),
        }
    }
}

/// Per-channel `round(a*(1-w) + b*w)` with w = weight/8, in integer form.
fn blend(a: Rgba32, b: Rgba32, weight: u32) -> Rgba32 {
    let mix = |a: u8, b: u8| -> u8 {
        ((a as u32 * (8 - weight) + b as u32 * weight + 4) / 8) as u8
    };
    Rgba32::new(
        mix(a.r, b.r),
        mix(a.g, b.g),
        mix(a.b, b.b),
        mix(a.a, b.a),
    )
}
