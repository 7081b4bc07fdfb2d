//! Spiral sketches: a drawn polyline recursively mapped onto its own segments.
//!
//! The user places points; consecutive points become directed lines, every
//! odd-indexed line flagged `reversed`. A run then repeatedly replaces each
//! line with a copy of the whole shape, mapped by the affine transform taking
//! the shape's base segment (first point to last point) onto that line.
//!
//! # Pipeline overview
//!
//! 1. **Edit**: [`Editor`] collects points and emits `(points, lines)`.
//! 2. **Transform**: [`Transformer::step`] maps the tracked shape onto a target
//!    line (`T2 * M * S * R * T1`, see [`segment_map`]).
//! 3. **Schedule**: [`Scheduler::tick`] transforms at most `max_steps` queued
//!    lines per frame, caps each generation at `max_lines`, and burns lines
//!    that converged or left the culling box.
//! 4. **Rasterize**: [`Canvas`] keeps burned pixels, last write wins.
//!
//! [`Controller`] ties the stages together behind typed [`SketchEvent`]s and
//! exposes a read-only [`FrameView`] that [`render_view`] turns into pixels.
//!
//! Everything runs on one thread, one tick per rendered frame.
#![forbid(unsafe_code)]

pub mod config;
pub mod editor;
pub mod engine;
pub mod geometry;
pub mod raster;
pub mod render;
pub mod session;
pub mod transform;

mod foundation;

pub use config::engine::EngineConfig;
pub use config::sketch::SketchFile;
pub use editor::area::{BlockedArea, NoBlockedArea, RectArea};
pub use editor::{Editor, MIN_POINTS};
pub use engine::scheduler::{Scheduler, SchedulerOpts, TickStats};
pub use engine::transformer::Transformer;
pub use foundation::core::{PALETTE_LEN, PaletteIndex, PixelRect, Rect, Vec2, Viewport};
pub use foundation::error::{SketchError, SketchResult};
pub use foundation::math::{Mat3, Vec3, cross, dot, length};
pub use foundation::rng::Rng64;
pub use geometry::line::{CONVERGENCE_DISTANCE, Line};
pub use geometry::point::{POINT_RADIUS, Point};
pub use raster::canvas::Canvas;
pub use raster::stepper::trace_line;
pub use render::frame::{RenderSettings, render_view, save_png};
pub use render::palette::Palette;
pub use session::controller::{Controller, FrameView, Phase, SketchEvent};
pub use session::debounce::Debounce;
pub use transform::affine::{SegmentMap, segment_map};
