use std::collections::VecDeque;

use crate::config::engine::EngineConfig;
use crate::config::sketch::SketchFile;
use crate::editor::Editor;
use crate::engine::scheduler::{Scheduler, SchedulerOpts, TickStats};
use crate::engine::transformer::Transformer;
use crate::foundation::error::{SketchError, SketchResult};
use crate::geometry::line::Line;
use crate::geometry::point::Point;
use crate::raster::canvas::Canvas;
use crate::session::debounce::Debounce;

static EMPTY_QUEUE: VecDeque<Line> = VecDeque::new();

/// Where the controller is in its edit/animate cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Collecting points.
    Editing,
    /// Ticking the scheduler.
    Animating,
    /// Nothing left to animate; the canvas holds the final picture.
    Finished,
}

/// Discrete UI events, at most one of each per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SketchEvent {
    PointPlaced { x: f64, y: f64 },
    DeleteLastPoint,
    StartRequested,
    ResetRequested,
    ColorCycled,
}

#[derive(Clone, Copy, Debug)]
struct Controls {
    start: Debounce,
    reset: Debounce,
    delete: Debounce,
    color: Debounce,
}

impl Controls {
    fn new(cooldown: u32) -> Self {
        Self {
            start: Debounce::new(cooldown),
            reset: Debounce::new(cooldown),
            delete: Debounce::new(cooldown),
            color: Debounce::new(cooldown),
        }
    }

    fn tick(&mut self) {
        self.start.tick();
        self.reset.tick();
        self.delete.tick();
        self.color.tick();
    }
}

#[derive(Debug)]
struct Run {
    transformer: Transformer,
    scheduler: Scheduler,
}

/// Read-only snapshot handed to the renderer each frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub phase: Phase,
    pub points: &'a [Point],
    pub active: &'a [Line],
    pub queue: &'a VecDeque<Line>,
    pub canvas: &'a Canvas,
}

/// Owns the editor, the run and the canvas; the only mutator of engine state.
#[derive(Debug)]
pub struct Controller {
    config: EngineConfig,
    editor: Editor,
    canvas: Canvas,
    run: Option<Run>,
    phase: Phase,
    ticks: u64,
    totals: TickStats,
    controls: Controls,
}

impl Controller {
    pub fn new(config: EngineConfig, editor: Editor) -> SketchResult<Self> {
        config.validate()?;
        Ok(Self {
            canvas: Canvas::new(config.viewport.pixel_rect()),
            controls: Controls::new(config.debounce_ticks),
            config,
            editor,
            run: None,
            phase: Phase::Editing,
            ticks: 0,
            totals: TickStats::default(),
        })
    }

    /// Controller pre-loaded with a sketch's config and points.
    pub fn from_sketch(sketch: &SketchFile) -> SketchResult<Self> {
        sketch.validate()?;
        let editor = Editor::default().with_points(sketch.points.clone());
        Self::new(sketch.config.clone(), editor)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticks advanced in the current run.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Counters accumulated over the current run.
    pub fn totals(&self) -> TickStats {
        self.totals
    }

    /// Apply one event. `Ok(false)` means it was ignored (wrong phase,
    /// debounced, not enough points, blocked area).
    pub fn handle(&mut self, event: SketchEvent) -> SketchResult<bool> {
        match (event, self.phase) {
            (SketchEvent::PointPlaced { x, y }, Phase::Editing) => {
                Ok(self.editor.place_point(x, y))
            }
            (SketchEvent::DeleteLastPoint, Phase::Editing) => {
                if !self.controls.delete.try_fire() {
                    return Ok(false);
                }
                Ok(self.editor.delete_last_point().is_some())
            }
            (SketchEvent::ColorCycled, Phase::Editing) => {
                if !self.controls.color.try_fire() {
                    return Ok(false);
                }
                self.editor.cycle_color();
                Ok(true)
            }
            (SketchEvent::StartRequested, Phase::Editing) => {
                if !self.controls.start.try_fire() {
                    return Ok(false);
                }
                self.start()
            }
            (SketchEvent::ResetRequested, Phase::Animating | Phase::Finished) => {
                if !self.controls.reset.try_fire() {
                    return Ok(false);
                }
                self.reset();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    #[tracing::instrument(skip(self), fields(points = self.editor.points().len()))]
    fn start(&mut self) -> SketchResult<bool> {
        let lines = match self.editor.generate() {
            Ok((_, lines)) => lines,
            Err(SketchError::InsufficientInput { points, required }) => {
                tracing::debug!(points, required, "start ignored");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };
        let transformer = Transformer::new(lines.clone())?;
        let scheduler = Scheduler::new(SchedulerOpts::from(&self.config), lines);

        self.canvas.clear();
        self.run = Some(Run {
            transformer,
            scheduler,
        });
        self.phase = Phase::Animating;
        self.ticks = 0;
        self.totals = TickStats::default();
        tracing::debug!("run started");
        Ok(true)
    }

    /// Drop the run and the canvas; keep the placed points.
    pub fn reset(&mut self) {
        self.run = None;
        self.canvas.clear();
        self.phase = Phase::Editing;
        self.ticks = 0;
        self.totals = TickStats::default();
        tracing::debug!("reset to editing");
    }

    /// Advance one frame. Controls cool down in every phase; the scheduler
    /// only runs while animating.
    pub fn tick(&mut self) -> TickStats {
        self.controls.tick();
        if self.phase != Phase::Animating {
            return TickStats::default();
        }
        let Some(run) = self.run.as_mut() else {
            return TickStats::default();
        };

        let stats = run.scheduler.tick(&run.transformer, &mut self.canvas);
        self.ticks += 1;
        self.totals.absorb(stats);

        if run.scheduler.is_idle() {
            self.phase = Phase::Finished;
            tracing::debug!(ticks = self.ticks, pixels = self.canvas.len(), "run settled");
        } else if self.config.max_ticks.is_some_and(|max| self.ticks >= max) {
            let burned = run.scheduler.drain_into(&mut self.canvas);
            self.phase = Phase::Finished;
            tracing::debug!(ticks = self.ticks, burned, "tick ceiling reached");
        }
        stats
    }

    /// Tick until the run finishes or `limit` ticks pass. Returns ticks taken.
    pub fn run_until_finished(&mut self, limit: u64) -> u64 {
        let mut n = 0;
        while self.phase == Phase::Animating && n < limit {
            self.tick();
            n += 1;
        }
        n
    }

    pub fn view(&self) -> FrameView<'_> {
        let (active, queue) = match &self.run {
            Some(run) if self.phase == Phase::Animating => {
                (run.scheduler.active(), run.scheduler.queue())
            }
            _ => (&[][..], &EMPTY_QUEUE),
        };
        FrameView {
            phase: self.phase,
            points: self.editor.points(),
            active,
            queue,
            canvas: &self.canvas,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controller.rs"]
mod tests;
