use super::*;
use crate::foundation::core::PaletteIndex;

fn place_all(ctrl: &mut Controller, pts: &[(f64, f64)]) {
    for &(x, y) in pts {
        assert!(ctrl.handle(SketchEvent::PointPlaced { x, y }).unwrap());
    }
}

fn triangle_controller(config: EngineConfig) -> Controller {
    let mut ctrl = Controller::new(config, Editor::default()).unwrap();
    place_all(&mut ctrl, &[(50.0, 150.0), (100.0, 100.0), (150.0, 150.0)]);
    ctrl
}

#[test]
fn start_is_ignored_with_too_few_points() {
    let mut ctrl = Controller::new(EngineConfig::default(), Editor::default()).unwrap();
    place_all(&mut ctrl, &[(1.0, 1.0), (5.0, 5.0)]);
    assert!(!ctrl.handle(SketchEvent::StartRequested).unwrap());
    assert_eq!(ctrl.phase(), Phase::Editing);
}

#[test]
fn start_seeds_the_queue_with_generated_lines() {
    let mut ctrl = triangle_controller(EngineConfig::default());
    assert!(ctrl.handle(SketchEvent::StartRequested).unwrap());
    assert_eq!(ctrl.phase(), Phase::Animating);
    let view = ctrl.view();
    assert_eq!(view.queue.len(), 2);
    assert!(view.active.is_empty());
    assert!(view.queue[1].reversed);
    assert_eq!(view.points.len(), 3);
}

#[test]
fn closed_shape_is_rejected_and_stays_editing() {
    let mut ctrl = Controller::new(EngineConfig::default(), Editor::default()).unwrap();
    place_all(&mut ctrl, &[(10.0, 10.0), (60.0, 10.0), (10.0, 10.0)]);
    let err = ctrl.handle(SketchEvent::StartRequested).unwrap_err();
    assert!(matches!(err, SketchError::InvalidGeometry(_)));
    assert_eq!(ctrl.phase(), Phase::Editing);
}

#[test]
fn editing_events_are_ignored_while_animating() {
    let mut ctrl = triangle_controller(EngineConfig::default());
    ctrl.handle(SketchEvent::StartRequested).unwrap();
    assert!(
        !ctrl
            .handle(SketchEvent::PointPlaced { x: 5.0, y: 5.0 })
            .unwrap()
    );
    assert!(!ctrl.handle(SketchEvent::DeleteLastPoint).unwrap());
    assert!(!ctrl.handle(SketchEvent::ColorCycled).unwrap());
    assert_eq!(ctrl.editor().points().len(), 3);
}

#[test]
fn run_settles_into_the_canvas() {
    let mut ctrl = triangle_controller(EngineConfig::default());
    ctrl.handle(SketchEvent::StartRequested).unwrap();
    let taken = ctrl.run_until_finished(100_000);
    assert!(taken > 0);
    assert_eq!(ctrl.phase(), Phase::Finished);
    assert_eq!(ctrl.ticks(), taken);
    assert!(!ctrl.canvas().is_empty());
    let view = ctrl.view();
    assert!(view.active.is_empty() && view.queue.is_empty());
    assert_eq!(ctrl.totals().finalized(), ctrl.canvas().lines_rasterized());
}

#[test]
fn canvas_pixels_stay_inside_the_viewport() {
    let mut ctrl = triangle_controller(EngineConfig::default());
    ctrl.handle(SketchEvent::StartRequested).unwrap();
    ctrl.run_until_finished(100_000);
    let bounds = ctrl.config().viewport.pixel_rect();
    assert!(ctrl.canvas().iter().all(|((x, y), _)| bounds.contains(x, y)));
}

#[test]
fn tick_ceiling_burns_remaining_lines() {
    let config = EngineConfig {
        max_steps: 1,
        max_ticks: Some(1),
        ..EngineConfig::default()
    };
    let mut ctrl = triangle_controller(config);
    ctrl.handle(SketchEvent::StartRequested).unwrap();
    ctrl.tick();
    assert_eq!(ctrl.phase(), Phase::Finished);
    // One target transformed into two children, plus one untouched target.
    assert_eq!(ctrl.canvas().lines_rasterized(), 3);
}

#[test]
fn reset_clears_run_but_keeps_points() {
    let mut ctrl = triangle_controller(EngineConfig::default());
    ctrl.handle(SketchEvent::StartRequested).unwrap();
    ctrl.run_until_finished(100_000);
    assert!(ctrl.handle(SketchEvent::ResetRequested).unwrap());
    assert_eq!(ctrl.phase(), Phase::Editing);
    assert!(ctrl.canvas().is_empty());
    assert_eq!(ctrl.ticks(), 0);
    assert_eq!(ctrl.editor().points().len(), 3);
    assert!(!ctrl.handle(SketchEvent::ResetRequested).unwrap());
}

#[test]
fn controls_are_debounced_per_tick() {
    let config = EngineConfig {
        debounce_ticks: 2,
        ..EngineConfig::default()
    };
    let mut ctrl = Controller::new(config, Editor::default()).unwrap();
    assert!(ctrl.handle(SketchEvent::ColorCycled).unwrap());
    assert!(!ctrl.handle(SketchEvent::ColorCycled).unwrap());
    ctrl.tick();
    ctrl.tick();
    assert!(ctrl.handle(SketchEvent::ColorCycled).unwrap());
    assert_eq!(ctrl.editor().color(), PaletteIndex(9));
}

#[test]
fn from_sketch_loads_points() {
    let sketch = SketchFile {
        config: EngineConfig::default(),
        points: vec![
            Point::new(50.0, 150.0, PaletteIndex(3)),
            Point::new(100.0, 100.0, PaletteIndex(4)),
            Point::new(150.0, 150.0, PaletteIndex(5)),
        ],
    };
    let mut ctrl = Controller::from_sketch(&sketch).unwrap();
    assert!(ctrl.handle(SketchEvent::StartRequested).unwrap());
    assert_eq!(ctrl.view().queue[0].t.color, PaletteIndex(4));
}

fn diverging_controller(config: EngineConfig) -> Controller {
    // The base (first to last point) is far shorter than either segment, so
    // every generation grows by roughly 200x.
    let mut ctrl = Controller::new(config, Editor::default()).unwrap();
    place_all(&mut ctrl, &[(100.0, 100.0), (200.0, 120.0), (100.5, 100.0)]);
    assert!(ctrl.handle(SketchEvent::StartRequested).unwrap());
    ctrl
}

#[test]
fn diverging_run_is_stopped_by_the_tick_ceiling() {
    let config = EngineConfig {
        max_lines: 200,
        max_ticks: Some(40),
        ..EngineConfig::default()
    };
    let mut ctrl = diverging_controller(config);
    let taken = ctrl.run_until_finished(10_000);
    assert!(taken <= 40);
    assert_eq!(ctrl.phase(), Phase::Finished);
    let view = ctrl.view();
    assert!(view.active.is_empty() && view.queue.is_empty());
    assert!(ctrl.totals().processed > 0);
    let bounds = ctrl.config().viewport.pixel_rect();
    assert!(ctrl.canvas().iter().all(|((x, y), _)| bounds.contains(x, y)));
}

#[test]
fn diverging_run_without_ceiling_keeps_ticking() {
    let config = EngineConfig {
        max_lines: 200,
        ..EngineConfig::default()
    };
    let mut ctrl = diverging_controller(config);
    let taken = ctrl.run_until_finished(2_000);
    assert!(taken > 0);
    assert_eq!(ctrl.ticks(), taken);
    let bounds = ctrl.config().viewport.pixel_rect();
    assert!(ctrl.canvas().iter().all(|((x, y), _)| bounds.contains(x, y)));
}
