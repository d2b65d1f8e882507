//! Integration tests for the state engine's invariants

use approx::assert_relative_eq;
use blochy_core::{
    Axis, BlochVector, BlochyError, EngineConfig, NamedGate, PulseAxis, StateEngine,
    MAX_TRAIL_FRAMES,
};
use std::f64::consts::{FRAC_PI_2, PI};

const EPSILON: f64 = 1e-9;

fn assert_bloch_eq(actual: &BlochVector, expected: &BlochVector) {
    assert_relative_eq!(actual.x, expected.x, epsilon = EPSILON);
    assert_relative_eq!(actual.y, expected.y, epsilon = EPSILON);
    assert_relative_eq!(actual.z, expected.z, epsilon = EPSILON);
}

#[test]
fn test_normalization_survives_long_sequences() {
    let mut engine = StateEngine::new();
    let axes = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::HADAMARD,
        Axis::Vector([0.3, -1.7, 0.4]),
    ];

    for step in 0..2000 {
        let axis = axes[step % axes.len()];
        let angle = (step as f64 * 0.731).sin() * 7.0;
        engine.apply_rotation(axis, angle).unwrap();
        if step % 7 == 0 {
            engine.apply_named_gate(NamedGate::ALL[step % NamedGate::ALL.len()]);
        }

        let state = engine.current_state();
        assert!((state.norm_sqr() - 1.0).abs() < 1e-6, "step {step}");
        assert!(engine.current_bloch_vector().is_pure(1e-6));
    }
}

#[test]
fn test_rz_pi_twice_restores_bloch_vector() {
    let mut engine = StateEngine::new();
    engine.apply_custom_axis_rotation(1.0, 0.4, 0.9).unwrap();
    let start = engine.current_bloch_vector();

    engine.apply_rotation(Axis::Z, PI).unwrap();
    engine.apply_rotation(Axis::Z, PI).unwrap();

    assert_bloch_eq(&engine.current_bloch_vector(), &start);
}

#[test]
fn test_hadamard_involution() {
    let mut engine = StateEngine::new();
    engine.apply_rotation(Axis::Y, 0.8).unwrap();
    engine.apply_rotation(Axis::Z, 0.3).unwrap();
    let start = engine.current_bloch_vector();

    engine.apply_named_gate(NamedGate::H);
    engine.apply_named_gate(NamedGate::H);

    assert_bloch_eq(&engine.current_bloch_vector(), &start);
}

#[test]
fn test_hadamard_z_undo_scenario() {
    let mut engine = StateEngine::new();
    assert_bloch_eq(&engine.current_bloch_vector(), &BlochVector::new(0.0, 0.0, 1.0));

    engine.apply_named_gate(NamedGate::H);
    assert_bloch_eq(&engine.current_bloch_vector(), &BlochVector::new(1.0, 0.0, 0.0));

    engine.apply_named_gate(NamedGate::Z);
    assert_bloch_eq(&engine.current_bloch_vector(), &BlochVector::new(-1.0, 0.0, 0.0));

    assert!(engine.undo());
    assert_bloch_eq(&engine.current_bloch_vector(), &BlochVector::new(1.0, 0.0, 0.0));
}

#[test]
fn test_undo_back_to_initial_then_noop() {
    let mut engine = StateEngine::new();
    for gate in [NamedGate::H, NamedGate::S, NamedGate::X] {
        engine.apply_named_gate(gate);
    }

    assert!(engine.undo());
    assert!(engine.undo());
    assert!(engine.undo());
    assert!(!engine.undo());
    assert_eq!(engine.history_len(), 1);
    assert_bloch_eq(&engine.current_bloch_vector(), &BlochVector::ZERO_STATE);
}

#[test]
fn test_apply_after_undo_discards_redo() {
    let mut engine = StateEngine::new();
    engine.apply_named_gate(NamedGate::X);
    engine.undo();
    engine.apply_named_gate(NamedGate::H);

    assert_eq!(engine.history_len(), 2);
    assert_bloch_eq(&engine.current_bloch_vector(), &BlochVector::new(1.0, 0.0, 0.0));
}

#[test]
fn test_trail_frames_interpolate_on_sphere() {
    let mut engine = StateEngine::with_config(EngineConfig::new().trail_enabled(true));
    engine.apply_rotation(Axis::X, 3.0 * FRAC_PI_2).unwrap();

    let entry = &engine.trail().entries()[0];
    assert_eq!(entry.frames.len(), 30);
    for frame in entry.points() {
        assert!(frame.is_pure(1e-9));
    }

    // Rotation about x keeps frames in the yz plane with evenly spaced angles
    let step = 3.0 * FRAC_PI_2 / 30.0;
    for (i, frame) in entry.frames.iter().enumerate() {
        let angle = step * (i + 1) as f64;
        assert_relative_eq!(frame.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(frame.z, angle.cos(), epsilon = EPSILON);
        assert_relative_eq!(frame.y, -angle.sin(), epsilon = EPSILON);
    }
}

#[test]
fn test_trail_accumulates_until_disabled() {
    let mut engine = StateEngine::new();
    engine.set_trail_enabled(true);
    for _ in 0..12 {
        engine.apply_named_gate(NamedGate::T);
    }
    engine.apply_pulse(PulseAxis::Y, 0.3).unwrap();

    assert_eq!(engine.trail().len(), 13);
    assert_eq!(engine.visible_trail().len(), 10);

    engine.set_trail_enabled(false);
    assert!(engine.trail().is_empty());
    engine.apply_named_gate(NamedGate::H);
    assert!(engine.trail().is_empty());
}

#[test]
fn test_errors_leave_engine_untouched() {
    let mut engine = StateEngine::with_config(EngineConfig::new().trail_enabled(true));
    engine.apply_named_gate(NamedGate::H);
    let state = *engine.current_state();

    assert!(matches!(
        engine.apply_rotation(Axis::Y, f64::INFINITY),
        Err(BlochyError::InvalidAngle { .. })
    ));
    assert!(matches!(
        engine.apply_rotation(Axis::Vector([0.0, 0.0, 0.0]), 1.0),
        Err(BlochyError::InvalidAxis(..))
    ));
    assert!(matches!(
        engine.apply_pulse(PulseAxis::X, -1.0),
        Err(BlochyError::InvalidPulse(_))
    ));

    assert_eq!(*engine.current_state(), state);
    assert_eq!(engine.history_len(), 2);
    assert_eq!(engine.trail().len(), 1);
}

#[test]
fn test_huge_angles_keep_trail_bounded() {
    let mut engine = StateEngine::with_config(EngineConfig::new().trail_enabled(true));

    for angle in [1.0e300, -1.0e12] {
        engine.apply_rotation(Axis::X, angle).unwrap();

        let entry = engine.trail().entries().last().unwrap();
        assert_eq!(entry.frames.len(), MAX_TRAIL_FRAMES);
        assert!(entry.end().distance(&engine.current_bloch_vector()) < EPSILON);
        assert!(entry.frames.iter().all(|frame| frame.is_pure(1e-9)));
    }
    assert_eq!(engine.trail().frame_count(), 2 * MAX_TRAIL_FRAMES);
}
