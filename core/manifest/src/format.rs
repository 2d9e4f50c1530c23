use serde::{Deserialize, Serialize};

/// The closed set of format codes observed in texture manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureFormat {
    Rgba8888,
    Rgb565,
    Rgba4444,
    Pvrtc2bpp,
    Pvrtc4bpp,
    Dxt1,
    Etc2Rgb,
    Etc2Rgba,
    Unknown(u8),
}

impl From<u8> for TextureFormat {
    fn from(v: u8) -> Self {
        match v {
            0x00 => TextureFormat::Rgba8888,
            0x10 => TextureFormat::Rgb565,
            0x11 => TextureFormat::Rgba4444,
            0x18 => TextureFormat::Pvrtc2bpp,
            0x19 => TextureFormat::Pvrtc4bpp,
            0x20 => TextureFormat::Dxt1,
            0x30 => TextureFormat::Etc2Rgb,
            0x31 => TextureFormat::Etc2Rgba,
            n => TextureFormat::Unknown(n),
        }
    }
}

impl TextureFormat {
    /// In this dataset only the PVRTC entries carry meaningful alpha.
    pub fn has_alpha(&self) -> bool {
        matches!(self, TextureFormat::Pvrtc2bpp | TextureFormat::Pvrtc4bpp)
    }

    /// Flat single-level size estimate for the base mip, used by the
    /// sequential-offset fallback and surfaced on each descriptor.
    /// Unlisted codes assume 4 bytes per pixel.
    pub fn estimated_data_size(&self, width: u32, height: u32) -> u64 {
        let pixels = width as u64 * height as u64;
        match self {
            TextureFormat::Pvrtc2bpp => (pixels / 4).max(32),
            TextureFormat::Pvrtc4bpp => (pixels / 2).max(32),
            TextureFormat::Rgb565 | TextureFormat::Rgba4444 => pixels * 2,
            _ => pixels * 4,
        }
    }

    /// Full mip-chain size estimate for 4x4-block-compressed formats,
    /// summing `ceil(w/4) * ceil(h/4) * bytes_per_block` over halving
    /// levels down to 1x1. Callers of this estimator assume a complete
    /// chain is stored; it is deliberately not unified with
    /// `estimated_data_size`, whose callers assume a single level.
    pub fn mip_chain_size(&self, width: u32, height: u32) -> u64 {
        let bytes_per_block: u64 = match self {
            TextureFormat::Etc2Rgba => 16,
            _ => 8,
        };
        let mut w = width.max(1);
        let mut h = height.max(1);
        let mut total = 0u64;
        loop {
            total += w.div_ceil(4) as u64 * h.div_ceil(4) as u64 * bytes_per_block;
            if w == 1 && h == 1 {
                break;
            }
            w = (w / 2).max(1);
            h = (h / 2).max(1);
        }
        total
    }
}
