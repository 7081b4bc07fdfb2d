use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::engine::EngineConfig;
use crate::foundation::error::{SketchError, SketchResult};
use crate::geometry::point::Point;

/// A saved sketch: engine tunables plus the placed points, in order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SketchFile {
    #[serde(default)]
    pub config: EngineConfig,
    pub points: Vec<Point>,
}

impl SketchFile {
    /// Parse a sketch from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SketchResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SketchError::serde(format!("parse sketch JSON: {e}")))
    }

    /// Parse and validate a sketch from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SketchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SketchError::validation(format!("open sketch JSON '{}': {e}", path.display()))
        })?;
        let sketch = Self::from_reader(BufReader::new(f))?;
        sketch.validate()?;
        Ok(sketch)
    }

    pub fn to_json_pretty(&self) -> SketchResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SketchError::serde(e.to_string()))
    }

    pub fn validate(&self) -> SketchResult<()> {
        self.config.validate()?;
        for (i, p) in self.points.iter().enumerate() {
            if !p.color.is_valid() {
                return Err(SketchError::validation(format!(
                    "point {i}: color {} is not a palette index",
                    p.color.0
                )));
            }
            if !p.is_finite() {
                return Err(SketchError::validation(format!(
                    "point {i}: coordinates must be finite"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/sketch.rs"]
mod tests;
