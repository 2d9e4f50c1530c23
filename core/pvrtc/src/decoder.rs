use byteorder::{ByteOrder, LE};

use crate::block::PvrtcBlock;
use crate::error::{PvrtcError, Result};

const BLOCK_HEIGHT: u32 = 4;
const BYTES_PER_BLOCK: usize = 8;

/// Decodes a PVRTC compressed buffer into a row-major RGBA8888 buffer of
/// exactly `width * height * 4` bytes.
///
/// The block grid is never smaller than 2x2 blocks, even for tiny images;
/// the input must cover the full grid. Each output pixel is resolved to
/// its owning block (clamped at the image edge) and decoded from that
/// block's modulation and endpoint colors alone.
pub fn decode_pvrtc(data: &[u8], width: u32, height: u32, is_2bpp: bool) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(PvrtcError::InvalidDimensions { width, height });
    }

    let block_width: u32 = if is_2bpp { 8 } else { 4 };
    let blocks_w = width.div_ceil(block_width).max(2);
    let blocks_h = height.div_ceil(BLOCK_HEIGHT).max(2);

    let expected = blocks_w as usize * blocks_h as usize * BYTES_PER_BLOCK;
    if data.len() < expected {
        return Err(PvrtcError::InsufficientData {
            expected,
            actual: data.len(),
        });
    }

    // Parse the full grid up front, row-major by block row.
    let mut blocks = Vec::with_capacity(blocks_w as usize * blocks_h as usize);
    for i in 0..blocks_w as usize * blocks_h as usize {
        let offset = i * BYTES_PER_BLOCK;
        blocks.push(PvrtcBlock::new(LE::read_u64(&data[offset..offset + 8])));
    }

    let mut out = vec![0u8; width as usize * height as usize * 4];
    for y in 0..height {
        for x in 0..width {
            let bx = (x / block_width).min(blocks_w - 1);
            let by = (y / BLOCK_HEIGHT).min(blocks_h - 1);
            let block = blocks[(by * blocks_w + bx) as usize];
            let color = block.pixel(x % block_width, y % BLOCK_HEIGHT, block_width);

            let idx = ((y * width + x) * 4) as usize;
            out[idx] = color.r;
            out[idx + 1] = color.g;
            out[idx + 2] = color.b;
            out[idx + 3] = color.a;
        }
    }
    Ok(out)
}

/// Size in bytes the block grid requires for the given dimensions.
pub fn compressed_size(width: u32, height: u32, is_2bpp: bool) -> usize {
    let block_width: u32 = if is_2bpp { 8 } else { 4 };
    let blocks_w = width.div_ceil(block_width).max(2);
    let blocks_h = height.div_ceil(BLOCK_HEIGHT).max(2);
    blocks_w as usize * blocks_h as usize * BYTES_PER_BLOCK
}
