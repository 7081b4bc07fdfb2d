/// Convenience result type used across the sketch engine.
pub type SketchResult<T> = Result<T, SketchError>;

/// Top-level error taxonomy used by engine APIs.
///
/// None of these are fatal to an animation run: callers skip, ignore or
/// finalize the offending input and keep ticking.
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    /// Degenerate geometry (zero-length segment, non-finite coordinates).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Not enough placed points to build a base shape.
    #[error("insufficient input: {points} point(s) placed, {required} required")]
    InsufficientInput {
        /// Points currently placed.
        points: usize,
        /// Minimum number of points needed.
        required: usize,
    },

    /// Invalid user-provided configuration or sketch data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SketchError {
    /// Build a [`SketchError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`SketchError::InsufficientInput`] value.
    pub fn insufficient_input(points: usize, required: usize) -> Self {
        Self::InsufficientInput { points, required }
    }

    /// Build a [`SketchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SketchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
