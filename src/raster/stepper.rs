//! Octant-aware line stepper shared by the canvas and the frame renderer.

use crate::foundation::core::PixelRect;
use crate::geometry::line::Line;

/// Walk the pixels of `line`, calling `plot(x, y)` once per step.
///
/// Endpoints are truncated toward zero. The walk runs one pixel at a time
/// along the major axis (x when `|dx| >= |dy|`), from the lower to the higher
/// coordinate, both ends inclusive. The minor coordinate is
/// `slope * (step - major_start) + minor_start` biased by `+0.5` for a
/// non-negative slope and `-0.5` for a negative one, then truncated. A line
/// whose truncated endpoints coincide plots that single pixel.
///
/// With `clip`, the major-axis walk is clamped to the rectangle and pixels
/// outside it are not plotted. Without it the walk covers the whole line, so
/// unclipped callers should only pass lines of on-screen scale. Non-finite
/// lines plot nothing.
pub fn trace_line(line: &Line, clip: Option<PixelRect>, mut plot: impl FnMut(i64, i64)) {
    if !line.is_finite() {
        return;
    }
    let (sx, sy) = line.s.truncated();
    let (tx, ty) = line.t.truncated();
    let dx = sx.saturating_sub(tx);
    let dy = sy.saturating_sub(ty);

    let mut emit = |x: i64, y: i64| {
        if clip.is_none_or(|r| r.contains(x, y)) {
            plot(x, y);
        }
    };

    if dx == 0 && dy == 0 {
        emit(sx, sy);
        return;
    }

    if dx.unsigned_abs() >= dy.unsigned_abs() {
        let slope = dy as f64 / dx as f64;
        let (lo, hi) = major_range(sx, tx, clip.map(|r| (r.x0, r.x1)));
        for x in lo..=hi {
            emit(x, minor(slope, x, sx, sy));
        }
    } else {
        let slope = dx as f64 / dy as f64;
        let (lo, hi) = major_range(sy, ty, clip.map(|r| (r.y0, r.y1)));
        for y in lo..=hi {
            emit(minor(slope, y, sy, sx), y);
        }
    }
}

/// Inclusive major-axis range, clamped to a half-open clip span.
/// Yields an empty range (`lo > hi`) when nothing is visible.
fn major_range(a: i64, b: i64, clip: Option<(i64, i64)>) -> (i64, i64) {
    let (lo, hi) = (a.min(b), a.max(b));
    match clip {
        Some((c0, c1)) => (lo.max(c0), hi.min(c1 - 1)),
        None => (lo, hi),
    }
}

/// Minor coordinate at major step `step`. Offsets are taken in `f64` since
/// truncated endpoints of diverging lines sit at the `i64` limits.
fn minor(slope: f64, step: i64, major_start: i64, minor_start: i64) -> i64 {
    let v = slope * (step as f64 - major_start as f64) + minor_start as f64;
    let biased = if slope >= 0.0 { v + 0.5 } else { v - 0.5 };
    biased.trunc() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/raster/stepper.rs"]
mod tests;
