use crate::foundation::core::Viewport;
use crate::foundation::error::{SketchError, SketchResult};
use crate::geometry::line::CONVERGENCE_DISTANCE;

/// Engine tunables. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Visible area; lines beyond `[-W, 2W] x [-H, 2H]` are finalized.
    pub viewport: Viewport,
    /// Cap on lines carried into the next generation.
    pub max_lines: usize,
    /// Lines transformed per tick.
    pub max_steps: usize,
    /// Manhattan distance (rounded coordinates) at which a line is finished.
    pub convergence_distance: i64,
    /// Seed for the overflow sampler.
    pub seed: u64,
    /// Optional tick ceiling; remaining lines are burned when reached.
    pub max_ticks: Option<u64>,
    /// Ticks a control stays unresponsive after firing.
    pub debounce_ticks: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            max_lines: 2000,
            max_steps: 200,
            convergence_distance: CONVERGENCE_DISTANCE,
            seed: 0x5EED,
            max_ticks: None,
            debounce_ticks: 0,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> SketchResult<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(SketchError::validation("viewport dimensions must be > 0"));
        }
        if self.max_lines == 0 {
            return Err(SketchError::validation("max_lines must be > 0"));
        }
        if self.max_steps == 0 {
            return Err(SketchError::validation("max_steps must be > 0"));
        }
        if self.convergence_distance < 0 {
            return Err(SketchError::validation(
                "convergence_distance must be >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/engine.rs"]
mod tests;
