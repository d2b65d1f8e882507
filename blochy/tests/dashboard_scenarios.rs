//! End-to-end dashboard scenarios driven through events

use approx::assert_relative_eq;
use blochy::{
    Axis, BackendSnapshot, BlochVector, BlochyError, Dashboard, DashboardConfig, DashboardEvent,
    GateType, IgnoreReason, NamedGate, Outcome, PulseAxis,
};

const EPSILON: f64 = 1e-9;

fn bloch_of(outcome: Outcome) -> BlochVector {
    match outcome {
        Outcome::StateChanged { bloch } => bloch,
        other => panic!("expected a state change, got {other:?}"),
    }
}

fn empty_dashboard() -> Dashboard {
    Dashboard::new(DashboardConfig {
        load_demo: false,
        ..DashboardConfig::default()
    })
}

#[test]
fn test_hadamard_z_undo() {
    let mut dashboard = Dashboard::default();

    let plus = bloch_of(dashboard.handle(DashboardEvent::GateButton(NamedGate::H)).unwrap());
    assert_relative_eq!(plus.x, 1.0, epsilon = EPSILON);

    let minus = bloch_of(dashboard.handle(DashboardEvent::GateButton(NamedGate::Z)).unwrap());
    assert_relative_eq!(minus.x, -1.0, epsilon = EPSILON);

    let back = bloch_of(dashboard.handle(DashboardEvent::Undo).unwrap());
    assert_relative_eq!(back.x, 1.0, epsilon = EPSILON);
    assert_relative_eq!(back.z, 0.0, epsilon = EPSILON);

    dashboard.handle(DashboardEvent::Undo).unwrap();
    assert_eq!(
        dashboard.handle(DashboardEvent::Undo).unwrap(),
        Outcome::Ignored {
            reason: IgnoreReason::NothingToUndo
        }
    );
    assert_eq!(dashboard.engine().history_len(), 1);
}

#[test]
fn test_custom_rotation_in_degrees() {
    let mut dashboard = Dashboard::default();
    // Polar 90°, azimuth 0° is the X axis
    let flipped = bloch_of(
        dashboard
            .handle(DashboardEvent::CustomRotation {
                polar_deg: 90.0,
                azimuth_deg: 0.0,
                rotation_deg: 180.0,
            })
            .unwrap(),
    );
    assert_relative_eq!(flipped.z, -1.0, epsilon = EPSILON);

    let err = dashboard
        .handle(DashboardEvent::CustomRotation {
            polar_deg: f64::NAN,
            azimuth_deg: 0.0,
            rotation_deg: 90.0,
        })
        .unwrap_err();
    assert!(matches!(err, BlochyError::InvalidAngle { .. }));
    assert_eq!(dashboard.engine().operation_count(), 1);
}

#[test]
fn test_trail_toggle_restart_and_clear() {
    let mut dashboard = Dashboard::default();
    assert_eq!(
        dashboard.handle(DashboardEvent::ToggleTrail).unwrap(),
        Outcome::TrailToggled { enabled: true }
    );

    dashboard
        .handle(DashboardEvent::AxisRotation {
            axis: Axis::X,
            degrees: 270.0,
        })
        .unwrap();
    dashboard
        .handle(DashboardEvent::Pulse {
            axis: PulseAxis::Y,
            duration: 0.5,
        })
        .unwrap();

    let trail = dashboard.engine().trail();
    assert_eq!(trail.len(), 2);
    assert_eq!(trail.entries()[0].frames.len(), 30);
    assert_eq!(trail.entries()[1].frames.len(), 50);

    // Restart resets the sphere but keeps recording
    dashboard.handle(DashboardEvent::Restart).unwrap();
    assert!(dashboard.engine().trail().is_empty());
    assert!(dashboard.engine().is_trail_enabled());

    dashboard.handle(DashboardEvent::GateButton(NamedGate::X)).unwrap();
    dashboard.handle(DashboardEvent::ClearTrail).unwrap();
    assert!(dashboard.engine().trail().is_empty());
    assert_eq!(dashboard.engine().operation_count(), 1);

    dashboard.handle(DashboardEvent::GateButton(NamedGate::Y)).unwrap();
    assert_eq!(
        dashboard.handle(DashboardEvent::ToggleTrail).unwrap(),
        Outcome::TrailToggled { enabled: false }
    );
    assert!(dashboard.engine().trail().is_empty());
}

#[test]
fn test_grid_clicks_place_selected_gate() {
    let mut dashboard = empty_dashboard();
    assert_eq!(dashboard.grid().spec().depth(), 6);

    dashboard.handle(DashboardEvent::SelectGate(GateType::CX)).unwrap();
    let outcome = dashboard.handle(DashboardEvent::GridClick { fx: 0.0, fy: 1.0 }).unwrap();
    let Outcome::GatePlaced { id } = outcome else {
        panic!("expected placement, got {outcome:?}");
    };
    // Last row anchors upward
    assert_eq!(dashboard.grid().get(id).unwrap().qubits(), &[2, 1]);

    dashboard.handle(DashboardEvent::SelectGate(GateType::H)).unwrap();
    let err = dashboard
        .handle(DashboardEvent::GridClick { fx: 0.0, fy: 0.4 })
        .unwrap_err();
    assert!(matches!(err, BlochyError::PlacementConflict { qubit: 1, .. }));

    assert_eq!(
        dashboard.handle(DashboardEvent::GridClick { fx: -0.2, fy: 0.5 }).unwrap(),
        Outcome::Ignored {
            reason: IgnoreReason::OffGrid
        }
    );
    assert_eq!(dashboard.grid().len(), 1);
}

#[test]
fn test_resize_and_clear_circuit() {
    let mut dashboard = Dashboard::default();
    let Outcome::Resized { dropped } = dashboard
        .handle(DashboardEvent::Resize { qubits: 2, depth: 3 })
        .unwrap()
    else {
        panic!("expected resize");
    };
    // H q1 @2 and the CX survive with H q0
    assert_eq!(dropped.len(), 2);
    assert_eq!(dashboard.grid().len(), 3);

    dashboard.handle(DashboardEvent::ClearCircuit).unwrap();
    assert!(dashboard.grid().is_empty());
}

#[test]
fn test_backend_snapshot_event() {
    let mut dashboard = Dashboard::default();
    let snapshot = BackendSnapshot::from_json(
        r#"{"numQubits": 2, "gates": [
            {"name": "h", "qubits": [0]},
            {"name": "iswap", "qubits": [0, 1]},
            {"qubits": [1], "position": 0.5},
            {"name": "cx", "qubits": [0, 1]}
        ]}"#,
    )
    .unwrap();

    let Outcome::SnapshotLoaded { report } =
        dashboard.handle(DashboardEvent::BackendSnapshot(snapshot)).unwrap()
    else {
        panic!("expected snapshot load");
    };
    assert_eq!((report.placed, report.skipped, report.truncated), (2, 2, 0));
    assert_eq!(dashboard.grid().spec().qubit_count(), 2);
}

#[test]
fn test_events_from_json() {
    let events: Vec<DashboardEvent> = serde_json::from_str(
        r#"[
            {"type": "gate_button", "data": "H"},
            {"type": "axis_rotation", "data": {"axis": "z", "degrees": 90}},
            {"type": "select_gate", "data": "x"},
            {"type": "grid_click", "data": {"fx": 1.0, "fy": 0.0}},
            {"type": "undo"}
        ]"#,
    )
    .unwrap();

    let mut dashboard = Dashboard::default();
    let outcomes: Vec<_> = events
        .into_iter()
        .map(|event| dashboard.handle(event).unwrap())
        .collect();

    let plus_i = bloch_of(outcomes[1].clone());
    assert_relative_eq!(plus_i.y, 1.0, epsilon = EPSILON);
    assert!(matches!(outcomes[3], Outcome::GatePlaced { .. }));
    assert_eq!(dashboard.engine().operation_count(), 1);
}

#[test]
fn test_report_export() {
    let mut dashboard = Dashboard::default();
    dashboard.handle(DashboardEvent::GateButton(NamedGate::H)).unwrap();

    let json = dashboard.report().to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["operations"], 1);
    assert!(value["cartesianCoordinates"]["x"].as_f64().unwrap() > 0.999);
}
