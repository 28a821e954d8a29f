#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::glyph::FontSpec;

// =============================================================
// Helpers
// =============================================================

const SCENARIO_WIDTHS: [f64; 6] = [60.0, 30.0, 30.0, 55.0, 25.0, 45.0];

struct FixedWidths(Vec<f64>);

impl TextMeasurer for FixedWidths {
    fn measure(&mut self, ch: char, _font: &FontSpec) -> Option<f64> {
        let idx = LETTERS.iter().position(|g| g.ch == ch)?;
        self.0.get(idx).copied()
    }
}

struct Unmeasurable;

impl TextMeasurer for Unmeasurable {
    fn measure(&mut self, _ch: char, _font: &FontSpec) -> Option<f64> {
        None
    }
}

fn measured_core() -> EngineCore {
    let mut core = EngineCore::default();
    core.set_viewport(Viewport::new(800.0, 400.0));
    core.set_measurements(
        LETTERS
            .iter()
            .zip(SCENARIO_WIDTHS)
            .map(|(g, w)| MeasuredGlyph { ch: g.ch, width: Some(w) })
            .collect(),
    );
    core
}

fn active_core() -> EngineCore {
    let mut core = measured_core();
    core.activate().unwrap();
    core
}

fn recorder(core: &mut EngineCore) -> Rc<RefCell<Vec<Vec<Pose>>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    core.subscribe(move |poses| sink.borrow_mut().push(poses.to_vec()));
    log
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Defaults and measurement
// =============================================================

#[test]
fn default_core_is_idle_with_six_glyphs() {
    let core = EngineCore::default();
    assert_eq!(core.phase(), Phase::Idle);
    assert_eq!(core.glyphs().len(), 6);
    assert!(core.measured().is_empty());
    assert!(core.session().is_none());
}

#[test]
fn poses_before_measurement_fall_back_to_origin() {
    let mut core = EngineCore::default();
    core.set_viewport(Viewport::new(800.0, 400.0));
    let poses = core.poses();
    assert_eq!(poses.len(), 6);
    assert!(poses.iter().all(|p| *p == Pose::default()));
}

#[test]
fn measure_uses_measurer() {
    let mut core = EngineCore::default();
    core.measure(&mut FixedWidths(vec![10.0, 20.0, 20.0, 30.0, 40.0, 50.0]));
    let widths = core.measured().iter().map(|g| g.width).collect::<Vec<_>>();
    // Both 'o' glyphs resolve to the first 'o' width.
    assert_eq!(widths, vec![Some(10.0), Some(20.0), Some(20.0), Some(30.0), Some(40.0), Some(50.0)]);
}

#[test]
fn failed_measurement_still_lays_out_with_fallback() {
    let mut core = EngineCore::default();
    core.set_viewport(Viewport::new(800.0, 400.0));
    core.measure(&mut Unmeasurable);
    let poses = core.static_poses();
    assert_eq!(poses.len(), 6);
    // Total width is padding only (36), letters are 60 wide.
    assert!((poses[0].x - ((800.0 - 36.0) / 2.0 + 30.0)).abs() < 1e-9);
}

#[test]
fn static_poses_match_scenario() {
    let core = measured_core();
    let poses = core.poses();
    assert_eq!(poses.len(), 6);
    assert!((poses[0].x - 289.5).abs() < 1e-9);
    assert!((poses[0].y - 140.0).abs() < 1e-9);
}

#[test]
fn set_measurements_publishes_static_layout_when_idle() {
    let mut core = EngineCore::default();
    core.set_viewport(Viewport::new(800.0, 400.0));
    let log = recorder(&mut core);
    core.set_measurements(LETTERS.iter().map(|g| MeasuredGlyph { ch: g.ch, width: Some(40.0) }).collect());
    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0], core.static_poses());
}

// =============================================================
// Activation
// =============================================================

#[test]
fn activate_moves_idle_to_active() {
    let mut core = measured_core();
    let actions = core.activate().unwrap();
    assert_eq!(core.phase(), Phase::Active);
    assert_eq!(actions, vec![Action::StartFrameLoop, Action::SetCursor("grab".to_owned())]);
}

#[test]
fn activate_creates_one_body_per_glyph_at_static_positions() {
    let mut core = measured_core();
    let before = core.poses();
    core.activate().unwrap();
    let session = core.session().unwrap();
    assert_eq!(session.letters().len(), 6);
    for (live, still) in core.poses().iter().zip(&before) {
        assert!((live.x - still.x).abs() < 1e-3);
        assert!((live.y - still.y).abs() < 1e-3);
    }
}

#[test]
fn activate_publishes_initial_poses() {
    let mut core = measured_core();
    let log = recorder(&mut core);
    core.activate().unwrap();
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0].len(), 6);
}

#[test]
fn activate_twice_is_ignored() {
    let mut core = active_core();
    let actions = core.activate().unwrap();
    assert!(actions.is_empty());
    assert_eq!(core.phase(), Phase::Active);
}

#[test]
fn activate_without_measurement_uses_fallback_bodies() {
    let mut core = EngineCore::default();
    core.set_viewport(Viewport::new(800.0, 400.0));
    core.activate().unwrap();
    assert_eq!(core.session().unwrap().letters().len(), 6);
}

#[test]
fn activate_with_zero_viewport_fails_and_stays_idle() {
    let mut core = EngineCore::default();
    let err = core.activate().unwrap_err();
    assert_eq!(err, LogoError::InvalidViewport { width: 0.0, height: 0.0 });
    assert_eq!(core.phase(), Phase::Idle);
}

#[test]
fn activate_with_no_glyphs_fails() {
    let mut core = EngineCore::new(&[], LogoConfig::default());
    core.set_viewport(Viewport::new(800.0, 400.0));
    assert_eq!(core.activate().unwrap_err(), LogoError::NoGlyphs);
}

// =============================================================
// Frames
// =============================================================

#[test]
fn frame_while_idle_does_nothing() {
    let mut core = measured_core();
    assert!(!core.on_frame());
}

#[test]
fn frame_while_active_steps_and_publishes() {
    let mut core = active_core();
    let log = recorder(&mut core);
    assert!(core.on_frame());
    assert!(core.on_frame());
    assert_eq!(log.borrow().len(), 2);
    assert!(log.borrow().iter().all(|poses| poses.len() == 6));
}

#[test]
fn frames_make_letters_fall() {
    let mut core = active_core();
    let start_y = core.poses()[0].y;
    for _ in 0..30 {
        core.on_frame();
    }
    assert!(core.poses()[0].y > start_y);
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_while_idle_only_updates_viewport() {
    let mut core = measured_core();
    let actions = core.on_resize(Viewport::new(1000.0, 400.0));
    assert!(actions.is_empty());
    assert_eq!(core.phase(), Phase::Idle);
    // Centered in the new width: (1000 - 281) / 2 + 30.
    assert!((core.poses()[0].x - 389.5).abs() < 1e-9);
}

#[test]
fn resize_while_active_stops_loop_then_schedules_reset() {
    let mut core = active_core();
    core.on_frame();
    let actions = core.on_resize(Viewport::new(640.0, 400.0));
    assert_eq!(actions, vec![Action::CancelFrameLoop, Action::ScheduleReset]);
    assert_eq!(core.phase(), Phase::Resetting);
    assert!(core.session().is_none());
}

#[test]
fn frames_after_resize_never_touch_the_world() {
    let mut core = active_core();
    let log = recorder(&mut core);
    core.on_resize(Viewport::new(640.0, 400.0));
    assert!(!core.on_frame());
    assert!(log.borrow().is_empty());
}

#[test]
fn resetting_renders_origin_fallback() {
    let mut core = active_core();
    core.on_resize(Viewport::new(640.0, 400.0));
    let poses = core.poses();
    assert_eq!(poses.len(), 6);
    assert!(poses.iter().all(|p| *p == Pose::default()));
}

#[test]
fn activate_during_reset_is_ignored() {
    let mut core = active_core();
    core.on_resize(Viewport::new(640.0, 400.0));
    assert!(core.activate().unwrap().is_empty());
    assert_eq!(core.phase(), Phase::Resetting);
}

#[test]
fn second_resize_during_reset_keeps_waiting() {
    let mut core = active_core();
    core.on_resize(Viewport::new(640.0, 400.0));
    assert!(core.on_resize(Viewport::new(700.0, 400.0)).is_empty());
    assert_eq!(core.phase(), Phase::Resetting);
    assert_eq!(core.viewport(), Viewport::new(700.0, 400.0));
}

#[test]
fn complete_reset_returns_to_static_layout() {
    let mut core = active_core();
    for _ in 0..10 {
        core.on_frame();
    }
    core.on_resize(Viewport::new(1000.0, 400.0));
    let log = recorder(&mut core);
    assert!(core.complete_reset());
    assert_eq!(core.phase(), Phase::Idle);
    assert_eq!(core.poses(), core.static_poses());
    assert!((core.poses()[0].x - 389.5).abs() < 1e-9);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn complete_reset_outside_resetting_is_noop() {
    let mut idle = measured_core();
    assert!(!idle.complete_reset());
    assert_eq!(idle.phase(), Phase::Idle);

    let mut active = active_core();
    assert!(!active.complete_reset());
    assert_eq!(active.phase(), Phase::Active);
}

#[test]
fn reactivation_after_reset_builds_fresh_world() {
    let mut core = active_core();
    core.on_resize(Viewport::new(640.0, 400.0));
    core.complete_reset();
    core.activate().unwrap();
    assert_eq!(core.phase(), Phase::Active);
    assert_eq!(core.session().unwrap().world().body_count(), 9);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_while_active_cancels_loop() {
    let mut core = active_core();
    let actions = core.teardown();
    assert_eq!(actions, vec![Action::CancelFrameLoop]);
    assert_eq!(core.phase(), Phase::Idle);
    assert!(core.session().is_none());
    assert!(!core.on_frame());
}

#[test]
fn teardown_while_idle_is_quiet() {
    let mut core = measured_core();
    assert!(core.teardown().is_empty());
    assert_eq!(core.phase(), Phase::Idle);
}

#[test]
fn teardown_while_resetting_goes_idle() {
    let mut core = active_core();
    core.on_resize(Viewport::new(640.0, 400.0));
    assert!(core.teardown().is_empty());
    assert_eq!(core.phase(), Phase::Idle);
    assert!(!core.complete_reset());
}

#[test]
fn teardown_drops_subscribers() {
    let mut core = measured_core();
    let log = recorder(&mut core);
    core.teardown();
    core.set_measurements(Vec::new());
    assert!(log.borrow().is_empty());
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut core = active_core();
    let log = Rc::new(RefCell::new(0_usize));
    let sink = Rc::clone(&log);
    let id = core.subscribe(move |_| *sink.borrow_mut() += 1);
    core.on_frame();
    assert!(core.unsubscribe(id));
    core.on_frame();
    assert_eq!(*log.borrow(), 1);
}

// =============================================================
// Pointer
// =============================================================

#[test]
fn pointer_down_on_letter_grabs() {
    let mut core = active_core();
    let first = core.poses()[0];
    let actions = core.on_pointer_down(pt(first.x, first.y), Button::Primary);
    assert_eq!(actions, vec![Action::SetCursor("grabbing".to_owned())]);
    assert!(core.session().unwrap().pointer().is_dragging());
}

#[test]
fn pointer_down_with_secondary_button_is_ignored() {
    let mut core = active_core();
    let first = core.poses()[0];
    assert!(core.on_pointer_down(pt(first.x, first.y), Button::Secondary).is_empty());
    assert!(!core.session().unwrap().pointer().is_dragging());
}

#[test]
fn pointer_down_while_idle_is_ignored() {
    let mut core = measured_core();
    let first = core.poses()[0];
    assert!(core.on_pointer_down(pt(first.x, first.y), Button::Primary).is_empty());
}

#[test]
fn pointer_up_after_grab_restores_cursor() {
    let mut core = active_core();
    let first = core.poses()[0];
    core.on_pointer_down(pt(first.x, first.y), Button::Primary);
    core.on_pointer_move(pt(first.x, first.y - 50.0));
    assert_eq!(core.on_pointer_up(), vec![Action::SetCursor("grab".to_owned())]);
    assert!(core.on_pointer_up().is_empty());
}

#[test]
fn drag_moves_letter_toward_pointer() {
    let mut core = active_core();
    let first = core.poses()[0];
    core.on_pointer_down(pt(first.x, first.y), Button::Primary);
    let target = pt(first.x, first.y - 80.0);
    core.on_pointer_move(target);
    for _ in 0..60 {
        core.on_frame();
    }
    let now = core.poses()[0];
    assert!((now.y - target.y).abs() < 20.0, "letter at {now:?}");
}
