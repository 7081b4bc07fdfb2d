use crate::foundation::core::{PALETTE_LEN, PaletteIndex};

/// The 16-color palette points and lines are tagged with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [[u8; 3]; PALETTE_LEN as usize],
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_hex([
            0x000000, 0x2B335F, 0x7E2072, 0x19959C, 0x8B4852, 0x395C98, 0xA9C1FF, 0xEEEEEE,
            0xD4186C, 0xD38441, 0xE9C35B, 0x70C6A9, 0x7696DE, 0xA3A3A3, 0xFF9798, 0xEDC7B0,
        ])
    }
}

impl Palette {
    /// Build from `0xRRGGBB` values.
    pub fn from_hex(hex: [u32; PALETTE_LEN as usize]) -> Self {
        let mut colors = [[0u8; 3]; PALETTE_LEN as usize];
        for (dst, v) in colors.iter_mut().zip(hex) {
            *dst = [(v >> 16) as u8, (v >> 8) as u8, v as u8];
        }
        Self { colors }
    }

    /// Opaque RGBA for `index`; out-of-range indices wrap.
    pub fn rgba(&self, index: PaletteIndex) -> [u8; 4] {
        let [r, g, b] = self.colors[usize::from(index.0 % PALETTE_LEN)];
        [r, g, b, 255]
    }
}
