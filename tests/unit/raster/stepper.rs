use super::*;
use crate::foundation::core::PaletteIndex;
use crate::geometry::point::Point;

fn line(sx: f64, sy: f64, tx: f64, ty: f64) -> Line {
    Line::new(
        Point::new(sx, sy, PaletteIndex(7)),
        Point::new(tx, ty, PaletteIndex(7)),
        false,
    )
}

fn pixels(l: &Line, clip: Option<PixelRect>) -> Vec<(i64, i64)> {
    let mut out = Vec::new();
    trace_line(l, clip, |x, y| out.push((x, y)));
    out
}

#[test]
fn horizontal_line_includes_both_ends() {
    let got = pixels(&line(0.0, 0.0, 5.0, 0.0), None);
    assert_eq!(got, (0..=5).map(|x| (x, 0)).collect::<Vec<_>>());
}

#[test]
fn vertical_line_steps_along_y() {
    let got = pixels(&line(2.0, 4.0, 2.0, 0.0), None);
    assert_eq!(got, (0..=4).map(|y| (2, y)).collect::<Vec<_>>());
}

#[test]
fn diagonal_is_a_gap_free_staircase() {
    let got = pixels(&line(0.0, 0.0, 3.0, 3.0), None);
    assert_eq!(got, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn shallow_line_is_monotonic_without_gaps() {
    let got = pixels(&line(0.0, 0.0, 7.0, 3.0), None);
    assert_eq!(got.len(), 8);
    for (i, w) in got.windows(2).enumerate() {
        assert_eq!(w[1].0 - w[0].0, 1, "x skipped at step {i}");
        let dy = w[1].1 - w[0].1;
        assert!((0..=1).contains(&dy), "y jumped at step {i}");
    }
    assert_eq!(got.first(), Some(&(0, 0)));
    assert_eq!(got.last(), Some(&(7, 3)));
}

#[test]
fn negative_slope_biases_downward() {
    // The -0.5 bias on negative slopes shifts the minor axis by one pixel.
    let got = pixels(&line(0.0, 3.0, 3.0, 0.0), None);
    assert_eq!(got, vec![(0, 2), (1, 1), (2, 0), (3, 0)]);
}

#[test]
fn endpoints_are_truncated() {
    let got = pixels(&line(0.9, 0.9, 2.9, 0.2), None);
    assert_eq!(got, vec![(0, 0), (1, 0), (2, 0)]);
}

#[test]
fn zero_length_line_plots_one_pixel() {
    assert_eq!(pixels(&line(10.7, 10.2, 10.1, 10.9), None), vec![(10, 10)]);
}

#[test]
fn clip_limits_the_walk() {
    let clip = PixelRect {
        x0: 0,
        y0: 0,
        x1: 10,
        y1: 10,
    };
    let got = pixels(&line(-1.0e6, 5.0, 1.0e6, 5.0), Some(clip));
    assert_eq!(got, (0..10).map(|x| (x, 5)).collect::<Vec<_>>());
    assert!(pixels(&line(-50.0, 50.0, 50.0, 50.0), Some(clip)).is_empty());
}

#[test]
fn non_finite_lines_plot_nothing() {
    assert!(pixels(&line(f64::NAN, 0.0, 1.0, 1.0), None).is_empty());
}

#[test]
fn far_endpoint_is_walked_only_inside_the_clip() {
    let clip = PixelRect {
        x0: 0,
        y0: 0,
        x1: 16,
        y1: 16,
    };
    let got = pixels(&line(-1.0e19, 5.0, 5.0, 5.0), Some(clip));
    assert_eq!(got, (0..=5).map(|x| (x, 5)).collect::<Vec<_>>());

    let got = pixels(&line(3.0, 2.0, 3.0, 1.0e30), Some(clip));
    assert_eq!(got, (2..16).map(|y| (3, y)).collect::<Vec<_>>());
}
