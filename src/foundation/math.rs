//! Homogeneous 2D vector and 3x3 matrix primitives.
//!
//! Positions are `[x, y, 1]` and directions are `[x, y, 0]`, so translations
//! only ever move positions.

use crate::foundation::core::Vec2;

/// Homogeneous 2D vector `[x, y, w]`.
pub type Vec3 = [f64; 3];

/// Homogeneous position (`w = 1`).
#[inline]
pub fn position(x: f64, y: f64) -> Vec3 {
    [x, y, 1.0]
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Scalar 2D cross product; positive when `b` is counter-clockwise of `a`.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Euclidean length. Zero for the zero vector; callers reject degenerate
/// segments before dividing by it.
#[inline]
pub fn length(a: Vec2) -> f64 {
    (a.x * a.x + a.y * a.y).sqrt()
}

/// Row-major homogeneous 3x3 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    pub m: [[f64; 3]; 3],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn translate(v: Vec2) -> Self {
        Self {
            m: [[1.0, 0.0, v.x], [0.0, 1.0, v.y], [0.0, 0.0, 1.0]],
        }
    }

    /// Counter-clockwise rotation by `theta` radians about the origin.
    pub fn rotate(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Uniform scale about the origin.
    pub fn scale(k: f64) -> Self {
        Self {
            m: [[k, 0.0, 0.0], [0.0, k, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Reflection across the line through the origin at angle `tau`.
    pub fn reflect(tau: f64) -> Self {
        let (s, c) = (2.0 * tau).sin_cos();
        Self {
            m: [[c, s, 0.0], [s, -c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn matmul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Self { m: out }
    }

    pub fn matvec(self, v: Vec3) -> Vec3 {
        let mut out = [0.0; 3];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = (0..3).map(|k| self.m[i][k] * v[k]).sum();
        }
        out
    }

    /// Map a position, returning the affine `(x, y)` part.
    #[inline]
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        let [x2, y2, _] = self.matvec(position(x, y));
        (x2, y2)
    }

    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }
}

impl std::ops::Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        self.matmul(rhs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
