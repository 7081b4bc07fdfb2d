//! Segment-to-segment affine maps.

use crate::foundation::error::{SketchError, SketchResult};
use crate::foundation::math::{Mat3, cross, dot, length};
use crate::geometry::line::Line;

/// The decomposed pieces of a base-to-target map, plus the composed matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentMap {
    /// Signed angle from the base direction to the target direction.
    pub theta: f64,
    /// `|target| / |base|`.
    pub scale: f64,
    /// Mirror axis angle, present when the target is `reversed`.
    pub mirror_axis: Option<f64>,
    /// `T2 * M * S * R * T1`.
    pub matrix: Mat3,
}

/// Build the map taking `base` onto `target`.
///
/// `base.s` is pivoted to the origin, rotated by the signed angle between the
/// two directions, scaled by the length ratio, mirrored across the target's
/// own axis when `target.reversed`, then moved onto `target.s`.
pub fn segment_map(base: &Line, target: &Line) -> SketchResult<SegmentMap> {
    let base_vec = base.vector();
    let target_vec = target.vector();
    let base_len = length(base_vec);
    let target_len = length(target_vec);

    if !base.is_finite() || base_len == 0.0 {
        return Err(SketchError::invalid_geometry("base segment has zero length"));
    }
    if !target.is_finite() || target_len == 0.0 || !target_len.is_finite() {
        return Err(SketchError::invalid_geometry(
            "target segment has zero or non-finite length",
        ));
    }

    let t1 = Mat3::translate(-base.s.to_vec2());
    let theta = cross(base_vec, target_vec).atan2(dot(base_vec, target_vec));
    let r = Mat3::rotate(theta);
    let scale = target_len / base_len;
    let s = Mat3::scale(scale);
    let mirror_axis = target.reversed.then(|| target_vec.y.atan2(target_vec.x));
    let m = mirror_axis.map_or(Mat3::IDENTITY, Mat3::reflect);
    let t2 = Mat3::translate(target.s.to_vec2());

    let matrix = t2 * m * s * r * t1;
    if !matrix.is_finite() {
        return Err(SketchError::invalid_geometry("segment map is not finite"));
    }

    Ok(SegmentMap {
        theta,
        scale,
        mirror_axis,
        matrix,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
