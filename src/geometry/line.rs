use crate::foundation::core::{Vec2, Viewport};
use crate::foundation::math::{Mat3, length};
use crate::geometry::point::Point;

/// Default convergence threshold: Manhattan distance on rounded coordinates.
pub const CONVERGENCE_DISTANCE: i64 = 1;

/// Directed segment from `s` (source) to `t` (target).
///
/// `reversed` is fixed when the line is generated and is carried unchanged
/// into every line derived from it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Line {
    pub s: Point,
    pub t: Point,
    #[serde(default)]
    pub reversed: bool,
}

impl Line {
    pub fn new(s: Point, t: Point, reversed: bool) -> Self {
        Self { s, t, reversed }
    }

    /// Direction `t - s` (homogeneous `w = 0`, unaffected by translation).
    pub fn vector(&self) -> Vec2 {
        self.t.to_vec2() - self.s.to_vec2()
    }

    pub fn length(&self) -> f64 {
        length(self.vector())
    }

    pub fn is_degenerate(&self) -> bool {
        !self.is_finite() || self.length() == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.s.is_finite() && self.t.is_finite()
    }

    /// Fresh line with both endpoints mapped through `m`; `reversed` is kept.
    pub fn mapped(&self, m: &Mat3) -> Self {
        Self {
            s: self.s.mapped(m),
            t: self.t.mapped(m),
            reversed: self.reversed,
        }
    }

    /// True when no part of the segment touches the viewport's culling box
    /// (edges inclusive).
    pub fn is_out_of_bounds(&self, viewport: Viewport) -> bool {
        let r = viewport.expanded();
        let d = self.vector();
        // Liang-Barsky: shrink [u0, u1] to the part of the segment inside `r`.
        let (mut u0, mut u1) = (0.0_f64, 1.0_f64);
        for (p, q) in [
            (-d.x, self.s.x - r.x0),
            (d.x, r.x1 - self.s.x),
            (-d.y, self.s.y - r.y0),
            (d.y, r.y1 - self.s.y),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return true;
                }
                continue;
            }
            let u = q / p;
            if p < 0.0 {
                u0 = u0.max(u);
            } else {
                u1 = u1.min(u);
            }
            if u0 > u1 {
                return true;
            }
        }
        false
    }

    /// Manhattan distance between the rounded endpoints.
    pub fn rounded_span(&self) -> f64 {
        let (sx, sy) = self.s.rounded();
        let (tx, ty) = self.t.rounded();
        (sx - tx).abs() + (sy - ty).abs()
    }

    pub fn is_converged_within(&self, distance: i64) -> bool {
        self.rounded_span() <= distance as f64
    }

    /// Endpoints are indistinguishable at pixel resolution.
    pub fn is_converged(&self) -> bool {
        self.is_converged_within(CONVERGENCE_DISTANCE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/line.rs"]
mod tests;
