//! Composite affine maps between directed segments.

pub mod affine;
