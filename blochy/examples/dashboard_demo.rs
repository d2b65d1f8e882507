//! Dashboard walkthrough in the terminal
//!
//! Drives a dashboard through the same events the widget controls send and
//! prints the text views after each step.
//!
//! Run with: RUST_LOG=debug cargo run --example dashboard_demo -p blochy

use blochy::{
    Axis, BackendSnapshot, Dashboard, DashboardConfig, DashboardEvent, GateType, NamedGate,
    PulseAxis,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> blochy::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = DashboardConfig::from_json(r#"{"engine": {"trail_enabled": true}}"#)?;
    let mut dashboard = Dashboard::new(config);

    println!("=== Initial state ===\n");
    println!("{}", dashboard.render_text());

    let steps = [
        DashboardEvent::GateButton(NamedGate::H),
        DashboardEvent::AxisRotation {
            axis: Axis::Z,
            degrees: 90.0,
        },
        DashboardEvent::CustomRotation {
            polar_deg: 45.0,
            azimuth_deg: 30.0,
            rotation_deg: 120.0,
        },
        DashboardEvent::Pulse {
            axis: PulseAxis::X,
            duration: 0.8,
        },
        DashboardEvent::Undo,
        DashboardEvent::SelectGate(GateType::T),
        DashboardEvent::GridClick { fx: 0.95, fy: 0.05 },
    ];

    for event in steps {
        let label = format!("{:?}", event);
        let outcome = dashboard.handle(event)?;
        println!("=== {} -> {:?} ===\n", label, outcome);
        // Steps arrive faster than the debounce window; only due redraws print
        if dashboard.poll_render() {
            println!("{}", dashboard.render_text());
        }
    }

    println!("=== Backend snapshot ===\n");
    let snapshot = BackendSnapshot::from_json(
        r#"{"num_qubits": 4, "gates": [
            {"name": "h", "qubits": [0]},
            {"name": "cx", "qubits": [0, 1]},
            {"name": "cx", "qubits": [1, 2]},
            {"name": "cx", "qubits": [2, 3]},
            {"name": "measure", "qubits": [0, 1, 2, 3]}
        ]}"#,
    )?;
    let outcome = dashboard.handle(DashboardEvent::BackendSnapshot(snapshot))?;
    println!("{:?}\n", outcome);
    println!("{}", dashboard.render_text());

    println!("=== Report ===\n");
    println!("{}", dashboard.report().to_json_pretty()?);

    Ok(())
}
