use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use spiral_sketch::{Controller, Phase, RenderSettings, SketchEvent, SketchFile};

#[derive(Parser, Debug)]
#[command(name = "spiral-sketch", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a sketch and write the final (or N-th tick) frame as a PNG.
    Frame(FrameArgs),
    /// Run a sketch and write a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input sketch JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Stop after this many ticks even if the run has not settled.
    #[arg(long, default_value_t = 100_000)]
    ticks: u64,

    /// Do not draw the placed points.
    #[arg(long, default_value_t = false)]
    hide_points: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input sketch JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Write a frame every K ticks.
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Stop after writing this many frames.
    #[arg(long, default_value_t = 600)]
    max_frames: u64,

    /// Do not draw the placed points.
    #[arg(long, default_value_t = false)]
    hide_points: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn start_sketch(path: &Path) -> anyhow::Result<Controller> {
    let sketch = SketchFile::from_path(path)
        .with_context(|| format!("load sketch '{}'", path.display()))?;
    let mut ctrl = Controller::from_sketch(&sketch)?;
    if !ctrl.handle(SketchEvent::StartRequested)? {
        anyhow::bail!(
            "sketch '{}' needs at least {} points, has {}",
            path.display(),
            spiral_sketch::MIN_POINTS,
            sketch.points.len()
        );
    }
    Ok(ctrl)
}

fn settings(hide_points: bool) -> RenderSettings {
    RenderSettings {
        draw_points: !hide_points,
        ..RenderSettings::default()
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut ctrl = start_sketch(&args.in_path)?;
    let taken = ctrl.run_until_finished(args.ticks);

    let img = spiral_sketch::render_view(
        &ctrl.view(),
        ctrl.config().viewport,
        &settings(args.hide_points),
    );
    spiral_sketch::save_png(&args.out, &img)?;

    let totals = ctrl.totals();
    eprintln!(
        "wrote {} ({} ticks, {} lines burned, {} pixels{})",
        args.out.display(),
        taken,
        totals.finalized(),
        ctrl.canvas().len(),
        if ctrl.phase() == Phase::Finished {
            ""
        } else {
            ", unsettled"
        },
    );
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.every > 0, "--every must be > 0");
    let mut ctrl = start_sketch(&args.in_path)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let settings = settings(args.hide_points);

    let mut written = 0u64;
    while written < args.max_frames {
        let img = spiral_sketch::render_view(&ctrl.view(), ctrl.config().viewport, &settings);
        let path = args.out_dir.join(format!("frame_{written:05}.png"));
        spiral_sketch::save_png(&path, &img)?;
        written += 1;

        if ctrl.phase() != Phase::Animating {
            break;
        }
        for _ in 0..args.every {
            ctrl.tick();
        }
    }

    eprintln!(
        "wrote {written} frames to {} ({} ticks)",
        args.out_dir.display(),
        ctrl.ticks()
    );
    Ok(())
}
