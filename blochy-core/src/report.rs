//! Exportable summary of an engine's current state

use crate::bloch_sphere::{BlochAngles, BlochVector};
use crate::state::QuantumState;
use crate::Result;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Snapshot handed to a download/export collaborator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateReport {
    pub state_vector: [f64; 3],
    pub cartesian_coordinates: BlochVector,
    pub spherical_coordinates: BlochAngles,
    pub amplitudes: [Complex64; 2],
    /// Fidelity with |0⟩
    pub fidelity: f64,
    /// Trail entries retained at export time
    pub history: usize,
    /// Operations applied since initialization
    pub operations: usize,
}

impl StateReport {
    pub fn new(state: &QuantumState, operations: usize, trail_len: usize) -> Self {
        let vector = state.bloch_vector();
        Self {
            state_vector: vector.to_array(),
            cartesian_coordinates: vector,
            spherical_coordinates: vector.to_angles(),
            amplitudes: state.amplitudes(),
            fidelity: vector.fidelity(&BlochVector::ZERO_STATE),
            history: trail_len,
            operations,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
