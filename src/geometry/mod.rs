//! Points and directed segments, the values the engine transforms.

pub mod line;
pub mod point;
