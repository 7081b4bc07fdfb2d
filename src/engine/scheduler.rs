use std::collections::VecDeque;

use crate::config::engine::EngineConfig;
use crate::foundation::core::Viewport;
use crate::foundation::rng::Rng64;
use crate::geometry::line::Line;
use crate::raster::canvas::Canvas;

use super::transformer::Transformer;

/// Scheduling limits, taken from [`EngineConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchedulerOpts {
    pub viewport: Viewport,
    pub max_lines: usize,
    pub max_steps: usize,
    pub convergence_distance: i64,
    pub seed: u64,
}

impl From<&EngineConfig> for SchedulerOpts {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            viewport: cfg.viewport,
            max_lines: cfg.max_lines,
            max_steps: cfg.max_steps,
            convergence_distance: cfg.convergence_distance,
            seed: cfg.seed,
        }
    }
}

/// Per-tick counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Queued lines transformed this tick.
    pub processed: usize,
    /// New lines kept animating.
    pub spawned: usize,
    /// New lines burned because their endpoints met.
    pub converged: usize,
    /// New lines burned because they left the culling box.
    pub out_of_bounds: usize,
    /// Lines burned by the `max_lines` cap.
    pub overflow: usize,
    /// Degenerate targets burned instead of transformed.
    pub rejected: usize,
}

impl TickStats {
    /// Lines moved into the canvas.
    pub fn finalized(&self) -> usize {
        self.converged + self.out_of_bounds + self.overflow + self.rejected
    }

    pub fn absorb(&mut self, other: TickStats) {
        self.processed += other.processed;
        self.spawned += other.spawned;
        self.converged += other.converged;
        self.out_of_bounds += other.out_of_bounds;
        self.overflow += other.overflow;
        self.rejected += other.rejected;
    }
}

/// Work queue driving lines toward convergence under a fixed per-tick budget.
///
/// `queue` holds the generation being transformed; `active` collects the
/// next one. When the queue runs dry, `active` (capped to `max_lines`) becomes
/// the new queue. Every line leaving the loop is burned into the canvas.
#[derive(Clone, Debug)]
pub struct Scheduler {
    opts: SchedulerOpts,
    active: Vec<Line>,
    queue: VecDeque<Line>,
    rng: Rng64,
}

impl Scheduler {
    /// Start with `lines` queued for the first tick.
    pub fn new(opts: SchedulerOpts, lines: Vec<Line>) -> Self {
        Self {
            rng: Rng64::new(opts.seed),
            opts,
            active: Vec::new(),
            queue: lines.into(),
        }
    }

    pub fn active(&self) -> &[Line] {
        &self.active
    }

    pub fn queue(&self) -> &VecDeque<Line> {
        &self.queue
    }

    /// Lines still animating or waiting.
    pub fn len(&self) -> usize {
        self.active.len() + self.queue.len()
    }

    /// Nothing left to animate.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty() && self.queue.is_empty()
    }

    /// Advance one animation frame.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(active = self.active.len(), queued = self.queue.len())
    )]
    pub fn tick(&mut self, transformer: &Transformer, canvas: &mut Canvas) -> TickStats {
        let mut stats = TickStats::default();
        if self.queue.is_empty() {
            stats.absorb(self.refill(canvas));
        }

        for _ in 0..self.opts.max_steps {
            let Some(target) = self.queue.pop_front() else {
                break;
            };
            stats.processed += 1;
            match transformer.step(&target) {
                Ok(next) => {
                    for line in next {
                        self.route(line, canvas, &mut stats);
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "burning degenerate target instead of transforming it");
                    canvas.rasterize(&target);
                    stats.rejected += 1;
                }
            }
        }

        tracing::trace!(
            processed = stats.processed,
            spawned = stats.spawned,
            finalized = stats.finalized(),
            "tick done"
        );
        stats
    }

    /// Burn everything still in flight. Returns the number of lines burned.
    pub fn drain_into(&mut self, canvas: &mut Canvas) -> usize {
        let n = self.len();
        for line in self.queue.drain(..).chain(self.active.drain(..)) {
            canvas.rasterize(&line);
        }
        n
    }

    /// Promote `active` to the queue, burning a random overflow beyond `max_lines`.
    fn refill(&mut self, canvas: &mut Canvas) -> TickStats {
        let mut stats = TickStats::default();
        if self.active.len() > self.opts.max_lines {
            let keep = self
                .rng
                .partial_shuffle(&mut self.active, self.opts.max_lines);
            let overflow = self.active.split_off(keep);
            for line in &overflow {
                canvas.rasterize(line);
            }
            stats.overflow = overflow.len();
            tracing::debug!(
                kept = keep,
                burned = stats.overflow,
                "line cap reached, sampled next generation"
            );
        }
        self.queue.extend(self.active.drain(..));
        stats
    }

    fn route(&mut self, line: Line, canvas: &mut Canvas, stats: &mut TickStats) {
        if !line.is_finite() || line.is_out_of_bounds(self.opts.viewport) {
            canvas.rasterize(&line);
            stats.out_of_bounds += 1;
        } else if line.is_converged_within(self.opts.convergence_distance) {
            canvas.rasterize(&line);
            stats.converged += 1;
        } else {
            self.active.push(line);
            stats.spawned += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scheduler.rs"]
mod tests;
