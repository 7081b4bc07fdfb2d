use crate::foundation::error::{SketchError, SketchResult};

pub use kurbo::{Rect, Vec2};

/// Number of entries in the fixed color palette.
pub const PALETTE_LEN: u8 = 16;

/// Index into the 16-color palette (`0..=15`).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct PaletteIndex(pub u8);

impl PaletteIndex {
    pub fn new(index: u8) -> SketchResult<Self> {
        if index >= PALETTE_LEN {
            return Err(SketchError::validation(format!(
                "palette index {index} out of range 0..={}",
                PALETTE_LEN - 1
            )));
        }
        Ok(Self(index))
    }

    /// Next palette entry, wrapping from 15 back to 0.
    pub fn next(self) -> Self {
        Self((self.0 % PALETTE_LEN + 1) % PALETTE_LEN)
    }

    pub fn is_valid(self) -> bool {
        self.0 < PALETTE_LEN
    }
}

/// Visible drawing area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> SketchResult<Self> {
        if width == 0 || height == 0 {
            return Err(SketchError::validation("viewport dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Culling box `[-W, 2W] x [-H, 2H]`; lines entirely outside it are finalized.
    pub fn expanded(self) -> Rect {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        Rect::new(-w, -h, 2.0 * w, 2.0 * h)
    }

    /// Integer pixel bounds of the visible area.
    pub fn pixel_rect(self) -> PixelRect {
        PixelRect {
            x0: 0,
            y0: 0,
            x1: i64::from(self.width),
            y1: i64::from(self.height),
        }
    }
}

/// Half-open integer rectangle `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRect {
    pub fn contains(self, x: i64, y: i64) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
