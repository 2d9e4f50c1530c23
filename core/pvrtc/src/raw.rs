//! Uncompressed pixel-format decoders for loose texture blobs.
//!
//! These cover the manifest's non-block formats; the archive pipeline
//! itself only ever carries PVRTC, so these are used on standalone files.

use crate::error::{PvrtcError, Result};

pub fn decode_rgb565(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let num_pixels = check_dims(data, width, height, 2)?;
    let mut out = Vec::with_capacity(num_pixels * 4);
    for i in 0..num_pixels {
        let v = u16::from_le_bytes([data[i * 2], data[i * 2 + 1]]);
        let r5 = (v >> 11) & 0x1F;
        let g6 = (v >> 5) & 0x3F;
        let b5 = v & 0x1F;
        out.push(((r5 << 3) | (r5 >> 2)) as u8);
        out.push(((g6 << 2) | (g6 >> 4)) as u8);
        out.push(((b5 << 3) | (b5 >> 2)) as u8);
        out.push(255);
    }
    Ok(out)
}

pub fn decode_rgba4444(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let num_pixels = check_dims(data, width, height, 2)?;
    let mut out = Vec::with_capacity(num_pixels * 4);
    for i in 0..num_pixels {
        let v = u16::from_le_bytes([data[i * 2], data[i * 2 + 1]]);
        let r4 = (v >> 12) & 0xF;
        let g4 = (v >> 8) & 0xF;
        let b4 = (v >> 4) & 0xF;
        let a4 = v & 0xF;
        out.push(((r4 << 4) | r4) as u8);
        out.push(((g4 << 4) | g4) as u8);
        out.push(((b4 << 4) | b4) as u8);
        out.push(((a4 << 4) | a4) as u8);
    }
    Ok(out)
}

pub fn decode_rgba8888(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let num_pixels = check_dims(data, width, height, 4)?;
    Ok(data[..num_pixels * 4].to_vec())
}

fn check_dims(data: &[u8], width: u32, height: u32, bytes_per_pixel: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(PvrtcError::InvalidDimensions { width, height });
    }
    let num_pixels = width as usize * height as usize;
    let expected = num_pixels * bytes_per_pixel;
    if data.len() < expected {
        return Err(PvrtcError::InsufficientData {
            expected,
            actual: data.len(),
        });
    }
    Ok(num_pixels)
}
