#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgba32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba32 {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Decodes one packed 16-bit endpoint color.
///
/// Bit 15 selects the encoding: set means opaque 5-5-5 RGB with a fixed
/// alpha of 255, clear means 3-bit alpha followed by 4-4-4 RGB. Every
/// 16-bit input is valid.
pub fn decode_color16(value: u16) -> Rgba32 {
    if value & 0x8000 != 0 {
        let r = ((value >> 10) & 0x1F) as u8;
        let g = ((value >> 5) & 0x1F) as u8;
        let b = (value & 0x1F) as u8;
        Rgba32::new(
            (r << 3) | (r >> 2),
            (g << 3) | (g >> 2),
            (b << 3) | (b >> 2),
            255,
        )
    } else {
        let a = ((value >> 12) & 0x7) as u8;
        let r = ((value >> 8) & 0xF) as u8;
        let g = ((value >> 4) & 0xF) as u8;
        let b = (value & 0xF) as u8;
        Rgba32::new(
            (r << 4) | r,
            (g << 4) | g,
            (b << 4) | b,
            (a << 5) | (a << 2) | (a >> 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_path_alpha_is_255() {
        for value in [0x8000u16, 0xFFFF, 0x8421, 0xBEEF, 0xA5A5] {
            assert_eq!(decode_color16(value).a, 255);
        }
    }

    #[test]
    fn test_opaque_white_and_black() {
        assert_eq!(decode_color16(0xFFFF), Rgba32::new(255, 255, 255, 255));
        assert_eq!(decode_color16(0x8000), Rgba32::new(0, 0, 0, 255));
    }

    #[test]
    fn test_opaque_channel_expansion() {
        // r=0b10000, g=0b01000, b=0b00100
        let c = decode_color16(0x8000 | (0x10 << 10) | (0x08 << 5) | 0x04);
        assert_eq!(c, Rgba32::new(0x84, 0x42, 0x21, 255));
    }

    #[test]
    fn test_alpha_expansion_table() {
        // (a << 5) | (a << 2) | (a >> 1) over all 8 inputs
        let expected = [0u8, 36, 73, 109, 146, 182, 219, 255];
        for a3 in 0u16..8 {
            let c = decode_color16(a3 << 12);
            assert_eq!(c.a, expected[a3 as usize], "alpha bits {a3}");
        }
    }

    #[test]
    fn test_alpha_path_rgb_expansion() {
        // a=7 r=0xF g=0x3 b=0xA
        let c = decode_color16(0x7F3A);
        assert_eq!(c, Rgba32::new(0xFF, 0x33, 0xAA, 255));
    }
}
