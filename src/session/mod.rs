//! Event-driven controller that owns the engine state for one sketch.

pub mod controller;
pub mod debounce;
