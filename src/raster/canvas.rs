use std::collections::HashMap;

use crate::foundation::core::{PaletteIndex, PixelRect};
use crate::geometry::line::Line;
use crate::raster::stepper::trace_line;

/// Sparse pixel store for finalized lines.
///
/// Each pixel keeps the last color written to it; there is no blending.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    pixels: HashMap<(i64, i64), PaletteIndex>,
    bounds: Option<PixelRect>,
    lines: usize,
}

impl Canvas {
    /// Canvas that discards writes outside `bounds`.
    pub fn new(bounds: PixelRect) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    /// Canvas that keeps every pixel, however far off-screen. Every line is
    /// walked end to end, so diverging runs want a bounded canvas.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Burn `line` into the canvas in its target endpoint's color.
    /// Returns the number of pixels written.
    pub fn rasterize(&mut self, line: &Line) -> usize {
        let color = line.t.color;
        let mut written = 0;
        trace_line(line, self.bounds, |x, y| {
            self.pixels.insert((x, y), color);
            written += 1;
        });
        self.lines += 1;
        written
    }

    pub fn get(&self, x: i64, y: i64) -> Option<PaletteIndex> {
        self.pixels.get(&(x, y)).copied()
    }

    /// Number of distinct pixels stored.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Number of lines burned since the last clear.
    pub fn lines_rasterized(&self) -> usize {
        self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = ((i64, i64), PaletteIndex)> + '_ {
        self.pixels.iter().map(|(&k, &v)| (k, v))
    }

    pub fn clear(&mut self) {
        self.pixels.clear();
        self.lines = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
