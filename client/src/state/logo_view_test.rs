use super::*;

// =============================================================
// LogoViewState
// =============================================================

#[test]
fn default_has_origin_pose_per_letter() {
    let state = LogoViewState::default();
    assert_eq!(state.poses.len(), 6);
    assert!(state.poses.iter().all(|p| *p == Pose::default()));
    assert!(!state.active);
    assert_eq!(state.cursor_css(), "default");
}

#[test]
fn set_poses_pads_short_input() {
    let mut state = LogoViewState::default();
    state.set_poses(&[Pose::new(10.0, 20.0, 0.5)]);
    assert_eq!(state.poses.len(), 6);
    assert_eq!(state.pose(0), Pose::new(10.0, 20.0, 0.5));
    assert_eq!(state.pose(5), Pose::default());
}

#[test]
fn pose_out_of_range_is_origin() {
    let state = LogoViewState::default();
    assert_eq!(state.pose(42), Pose::default());
}

#[test]
fn cursor_css_reflects_engine_request() {
    let state = LogoViewState { cursor: Some("grabbing".to_owned()), ..LogoViewState::default() };
    assert_eq!(state.cursor_css(), "grabbing");
}

// =============================================================
// Letter styles
// =============================================================

#[test]
fn transform_at_origin() {
    assert_eq!(
        letter_transform(&Pose::default()),
        "translate(-50%, -50%) translate(0px, 0px) rotate(0rad)"
    );
}

#[test]
fn transform_carries_position_and_angle() {
    let t = letter_transform(&Pose::new(289.5, 140.0, 0.25));
    assert_eq!(t, "translate(-50%, -50%) translate(289.5px, 140px) rotate(0.25rad)");
}

#[test]
fn style_includes_color_and_font() {
    let style = letter_style(&LETTERS[2], &FontSpec::default(), &Pose::default());
    assert!(style.contains("color: #FBBC05"));
    assert!(style.contains(&FontSpec::default().css_shorthand()));
    assert!(style.starts_with("transform: translate(-50%, -50%)"));
}
