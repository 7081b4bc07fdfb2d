//! The animation engine: segment transformer and the budgeted tick loop.

pub mod scheduler;
pub mod transformer;
