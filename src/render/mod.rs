//! Headless frame rendering of a controller snapshot.

pub mod frame;
pub mod palette;
