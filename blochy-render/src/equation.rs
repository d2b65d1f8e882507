//! Text summaries of the current state

use blochy_core::{BlochVector, QuantumState};
use std::f64::consts::PI;

/// Relative phase below which the phase factor is omitted
pub const PHASE_DISPLAY_THRESHOLD: f64 = 0.01;

/// State as a ket equation, `|ψ⟩ = a|0⟩ + b|1⟩`
///
/// Magnitudes come from the Bloch z coordinate and the relative phase from
/// `atan2(y, x)`; the phase is shown as `e^{iφ}` once it exceeds 0.01 rad.
/// At the poles the phase is treated as zero.
pub fn state_equation(state: &QuantumState) -> String {
    let v = state.bloch_vector();
    let a = ((1.0 + v.z) / 2.0).max(0.0).sqrt();
    let b = ((1.0 - v.z) / 2.0).max(0.0).sqrt();
    let phase = if v.x.hypot(v.y) < 1e-9 { 0.0 } else { v.y.atan2(v.x) };

    if phase.abs() < PHASE_DISPLAY_THRESHOLD {
        format!("|ψ⟩ = {:.3}|0⟩ + {:.3}|1⟩", a, b)
    } else {
        format!("|ψ⟩ = {:.3}|0⟩ + {:.3}e^{{i{:.2}}}|1⟩", a, b, phase)
    }
}

/// Spherical angles in units of π, e.g. `θ = 0.50π, φ = 0.25π`
pub fn angle_summary(vector: &BlochVector) -> String {
    let angles = vector.to_angles();
    let mut phi = angles.phi / PI;
    // Values just below 2π would print as 2.00π
    if phi >= 1.995 {
        phi = 0.0;
    }
    format!("θ = {:.2}π, φ = {:.2}π", angles.theta / PI, phi)
}

/// Fidelity with |0⟩ as a percentage, e.g. `50.0%`
pub fn fidelity_percent(vector: &BlochVector) -> String {
    format!("{:.1}%", vector.fidelity(&BlochVector::ZERO_STATE) * 100.0)
}
