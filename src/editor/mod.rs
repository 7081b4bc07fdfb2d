//! Point collection and conversion of the placed polyline into lines.

pub mod area;

use crate::foundation::core::PaletteIndex;
use crate::foundation::error::{SketchError, SketchResult};
use crate::geometry::line::Line;
use crate::geometry::point::Point;

use area::{BlockedArea, NoBlockedArea};

/// Minimum number of placed points before a run can start.
pub const MIN_POINTS: usize = 3;

/// Collects the user's polyline.
pub struct Editor {
    points: Vec<Point>,
    color: PaletteIndex,
    blocked: Box<dyn BlockedArea>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Box::new(NoBlockedArea))
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("points", &self.points)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Editor {
    pub fn new(blocked: Box<dyn BlockedArea>) -> Self {
        Self {
            points: Vec::new(),
            color: PaletteIndex(7),
            blocked,
        }
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Color given to the next placed point.
    pub fn color(&self) -> PaletteIndex {
        self.color
    }

    /// Place a point in the current color. Returns false inside a blocked
    /// area or for non-finite coordinates.
    pub fn place_point(&mut self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() || self.blocked.contains(x, y) {
            return false;
        }
        self.points.push(Point::new(x, y, self.color));
        true
    }

    pub fn delete_last_point(&mut self) -> Option<Point> {
        self.points.pop()
    }

    pub fn cycle_color(&mut self) -> PaletteIndex {
        self.color = self.color.next();
        self.color
    }

    /// Turn the placed points into directed lines; odd-indexed lines are
    /// `reversed`.
    pub fn generate(&self) -> SketchResult<(Vec<Point>, Vec<Line>)> {
        if self.points.len() < MIN_POINTS {
            return Err(SketchError::insufficient_input(
                self.points.len(),
                MIN_POINTS,
            ));
        }
        let lines = self
            .points
            .windows(2)
            .enumerate()
            .map(|(i, w)| Line::new(w[0], w[1], i % 2 == 1))
            .collect();
        Ok((self.points.clone(), lines))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/mod.rs"]
mod tests;
