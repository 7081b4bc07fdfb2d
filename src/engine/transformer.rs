use crate::foundation::error::{SketchError, SketchResult};
use crate::geometry::line::Line;
use crate::transform::affine::segment_map;

/// Replaces a target segment with a copy of the whole base shape.
///
/// The base segment runs from the first point of the first line to the last
/// point of the last line, and stays fixed for the lifetime of a run.
#[derive(Clone, Debug)]
pub struct Transformer {
    base: Line,
    lines: Vec<Line>,
}

impl Transformer {
    /// Seed with the generated polyline. Fails on an empty line set or a
    /// zero-length base (a closed shape).
    pub fn new(lines: Vec<Line>) -> SketchResult<Self> {
        let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
            return Err(SketchError::invalid_geometry("no lines to transform"));
        };
        let base = Line::new(first.s, last.t, false);
        if base.is_degenerate() {
            return Err(SketchError::invalid_geometry(
                "base segment has zero length (first and last points coincide)",
            ));
        }
        Ok(Self { base, lines })
    }

    pub fn base(&self) -> &Line {
        &self.base
    }

    /// The tracked shape every step maps onto its target.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Next generation: every tracked line mapped so that the base lands on
    /// `target`. Outputs keep each tracked line's own `reversed` flag.
    pub fn step(&self, target: &Line) -> SketchResult<Vec<Line>> {
        let map = segment_map(&self.base, target)?;
        Ok(self.lines.iter().map(|l| l.mapped(&map.matrix)).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/transformer.rs"]
mod tests;
