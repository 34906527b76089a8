use super::*;

#[test]
fn linear_easing_is_identity() {
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert!((Easing::Linear.transform(t) - t).abs() < 1e-6);
    }
}

#[test]
fn easing_endpoints_are_exact() {
    let curves = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::QuinticIn,
        Easing::QuinticOut,
    ];
    for easing in curves {
        assert_eq!(easing.transform(0.0), 0.0, "{easing:?} at 0");
        assert!((easing.transform(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
    }
}

#[test]
fn ease_in_out_is_slow_at_the_edges() {
    let early = Easing::EaseInOut.transform(0.1);
    let late = Easing::EaseInOut.transform(0.9);
    assert!(early < 0.1, "expected slow start, got {early}");
    assert!(late > 0.9, "expected slow end, got {late}");
}

#[test]
fn quintic_in_matches_t_to_the_fifth() {
    assert!((Easing::QuinticIn.transform(0.5) - 0.03125).abs() < 1e-6);
}

#[test]
fn quintic_out_mirrors_quintic_in() {
    let t = 0.3;
    let out = Easing::QuinticOut.transform(t);
    let mirrored = 1.0 - Easing::QuinticIn.transform(1.0 - t);
    assert!((out - mirrored).abs() < 1e-6);
}

#[test]
fn lerp_interpolates_and_clamps_nothing() {
    assert_eq!(10.0f32.lerp(&20.0, 0.5), 15.0);
    assert_eq!(10.0f32.lerp(&20.0, 0.0), 10.0);
    assert_eq!(10.0f32.lerp(&20.0, 1.0), 20.0);
    // Fractions outside [0,1] extrapolate; Tween clamps before calling lerp.
    assert_eq!(10.0f32.lerp(&20.0, 2.0), 30.0);
}

#[test]
fn tween_latches_start_on_first_frame() {
    let mut tween = Tween::new(200, Easing::Linear);
    assert_eq!(tween.fraction_at(1_000), 0.0);
    assert_eq!(tween.fraction_at(1_100), 0.5);
    assert_eq!(tween.fraction_at(1_200), 1.0);
    assert!(tween.is_finished(1_200));
    assert!(!tween.is_finished(1_199));
}

#[test]
fn tween_fraction_saturates_past_duration() {
    let mut tween = Tween::new(100, Easing::EaseInOut);
    tween.fraction_at(0);
    assert_eq!(tween.fraction_at(10_000), 1.0);
}

#[test]
fn zero_duration_tween_is_immediately_finished() {
    let mut tween = Tween::new(0, Easing::Linear);
    assert!(tween.is_finished(0));
    assert_eq!(tween.fraction_at(5), 1.0);
}
