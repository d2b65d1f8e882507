//! User-input events and their outcomes

use blochy_circuit::{BackendSnapshot, GateId, GateType, LoadReport, PlacedGate};
use blochy_core::{Axis, BlochVector, NamedGate, PulseAxis};
use serde::{Deserialize, Serialize};

/// An input from the widget's controls
///
/// Angles arrive in degrees, as typed into the controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// One of the fixed gate buttons
    GateButton(NamedGate),
    AxisRotation {
        axis: Axis,
        degrees: f64,
    },
    CustomRotation {
        polar_deg: f64,
        azimuth_deg: f64,
        rotation_deg: f64,
    },
    Pulse {
        axis: PulseAxis,
        duration: f64,
    },
    Undo,
    /// Return the sphere to |0⟩
    Restart,
    ToggleTrail,
    ClearTrail,
    /// Choose the gate placed by subsequent grid clicks
    SelectGate(GateType),
    /// Click on the circuit surface, as fractions of its width and height
    GridClick {
        fx: f64,
        fy: f64,
    },
    ClearCircuit,
    Resize {
        qubits: usize,
        depth: usize,
    },
    BackendSnapshot(BackendSnapshot),
}

/// Why an event left everything unchanged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    NoGateSelected,
    OffGrid,
    NothingToUndo,
}

/// Result of a handled event
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// The sphere moved; carries the new Bloch vector
    StateChanged { bloch: BlochVector },
    TrailToggled { enabled: bool },
    TrailCleared,
    GateSelected { gate: GateType },
    GatePlaced { id: GateId },
    CircuitCleared,
    Resized { dropped: Vec<PlacedGate> },
    SnapshotLoaded { report: LoadReport },
    Ignored { reason: IgnoreReason },
}

impl Outcome {
    /// Whether the event changed anything a renderer shows
    pub fn is_visible_change(&self) -> bool {
        !matches!(self, Self::Ignored { .. })
    }
}
