use std::path::Path;

use anyhow::Context as _;
use image::{Rgba, RgbaImage};

use crate::foundation::core::{PaletteIndex, Viewport};
use crate::foundation::error::SketchResult;
use crate::geometry::line::Line;
use crate::geometry::point::POINT_RADIUS;
use crate::raster::stepper::trace_line;
use crate::render::palette::Palette;
use crate::session::controller::FrameView;

/// Renderer settings.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub palette: Palette,
    /// Clear color.
    pub background: PaletteIndex,
    /// Outline color for placed points.
    pub point_color: PaletteIndex,
    pub draw_points: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            background: PaletteIndex(0),
            point_color: PaletteIndex(7),
            draw_points: true,
        }
    }
}

/// Draw one frame: queued and active lines, point outlines, then canvas
/// pixels last so finished geometry is never occluded.
pub fn render_view(view: &FrameView<'_>, viewport: Viewport, settings: &RenderSettings) -> RgbaImage {
    let bg = Rgba(settings.palette.rgba(settings.background));
    let mut img = RgbaImage::from_pixel(viewport.width, viewport.height, bg);
    let clip = viewport.pixel_rect();

    for line in view.queue.iter().chain(view.active) {
        draw_line(&mut img, line, settings);
    }

    if settings.draw_points {
        let color = Rgba(settings.palette.rgba(settings.point_color));
        let r = POINT_RADIUS as i64;
        for p in view.points {
            let (cx, cy) = p.truncated();
            circle_outline(cx, cy, r, |x, y| put(&mut img, x, y, color));
        }
    }

    for ((x, y), index) in view.canvas.iter() {
        if clip.contains(x, y) {
            put(&mut img, x, y, Rgba(settings.palette.rgba(index)));
        }
    }
    img
}

/// Write `img` as PNG, creating parent directories.
pub fn save_png(path: impl AsRef<Path>, img: &RgbaImage) -> SketchResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn draw_line(img: &mut RgbaImage, line: &Line, settings: &RenderSettings) {
    let color = Rgba(settings.palette.rgba(line.t.color));
    let clip = Viewport {
        width: img.width(),
        height: img.height(),
    }
    .pixel_rect();
    trace_line(line, Some(clip), |x, y| put(img, x, y, color));
}

fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y))
        && x < img.width()
        && y < img.height()
    {
        img.put_pixel(x, y, color);
    }
}

/// Midpoint circle outline.
fn circle_outline(cx: i64, cy: i64, radius: i64, mut plot: impl FnMut(i64, i64)) {
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        for (dx, dy) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            plot(cx.saturating_add(dx), cy.saturating_add(dy));
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
