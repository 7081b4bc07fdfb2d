//! Engine tunables and the on-disk sketch format.

pub mod engine;
pub mod sketch;
