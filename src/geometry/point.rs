use crate::foundation::core::{PaletteIndex, Vec2};
use crate::foundation::math::Mat3;

/// Display radius of a placed point. Cosmetic only.
pub const POINT_RADIUS: f64 = 10.0;

/// A 2D position tagged with the palette color it was placed with.
///
/// The color travels with the point through every transform, so a line's
/// rasterized color is always the color of the vertex it was derived from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub color: PaletteIndex,
}

impl Point {
    pub fn new(x: f64, y: f64, color: PaletteIndex) -> Self {
        Self { x, y, color }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Map through `m` as a homogeneous position (`w = 1`), keeping the color.
    pub fn mapped(self, m: &Mat3) -> Self {
        let (x, y) = m.apply(self.x, self.y);
        Self { x, y, ..self }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Coordinates rounded half away from zero, as used by the convergence test.
    /// Stays in `f64` so far-off points keep their distance.
    pub fn rounded(self) -> (f64, f64) {
        (self.x.round(), self.y.round())
    }

    /// Coordinates truncated toward zero, as used by the rasterizer.
    pub fn truncated(self) -> (i64, i64) {
        (self.x.trunc() as i64, self.y.trunc() as i64)
    }
}
