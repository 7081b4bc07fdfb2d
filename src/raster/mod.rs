//! Persistent rasterization of finished segments.

pub mod canvas;
pub mod stepper;
