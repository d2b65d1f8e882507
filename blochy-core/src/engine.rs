//! Single-qubit state engine with undo history and phosphor trail
//!
//! The engine owns one [`QuantumState`] stack on top of the initial |0⟩.
//! Every operation rotates the current state into a new snapshot and pushes
//! it; [`StateEngine::undo`] pops. There is no redo: applying after an undo
//! simply grows the stack again.
//!
//! # Example
//! ```
//! use blochy_core::{NamedGate, StateEngine};
//!
//! let mut engine = StateEngine::new();
//! engine.apply_named_gate(NamedGate::H);
//! assert!((engine.current_bloch_vector().x - 1.0).abs() < 1e-9);
//!
//! engine.apply_named_gate(NamedGate::Z);
//! assert!((engine.current_bloch_vector().x + 1.0).abs() < 1e-9);
//!
//! engine.undo();
//! assert!((engine.current_bloch_vector().x - 1.0).abs() < 1e-9);
//! ```

use crate::bloch_sphere::BlochVector;
use crate::config::EngineConfig;
use crate::pulse::{validate_duration, PulseAxis};
use crate::report::StateReport;
use crate::rotation::{axis_from_spherical, Axis, UnitAxis};
use crate::state::QuantumState;
use crate::trail::{pulse_frame_count, rotation_frame_count, PhosphorTrail, TrailEntry};
use crate::{BlochyError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Fixed single-qubit gates, each a rotation of the Bloch sphere
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedGate {
    /// Hadamard: π about (x + z)/√2
    H,
    /// Pauli-X: π about x
    X,
    /// Pauli-Y: π about y
    Y,
    /// Pauli-Z: π about z
    Z,
    /// Phase: π/2 about z
    S,
    /// π/8 gate: π/4 about z
    T,
}

impl NamedGate {
    /// All named gates
    pub const ALL: [Self; 6] = [Self::H, Self::X, Self::Y, Self::Z, Self::S, Self::T];

    /// Rotation axis and angle implementing this gate (up to global phase)
    pub const fn rotation(self) -> (UnitAxis, f64) {
        match self {
            Self::H => (UnitAxis::HADAMARD, PI),
            Self::X => (UnitAxis::X, PI),
            Self::Y => (UnitAxis::Y, PI),
            Self::Z => (UnitAxis::Z, PI),
            Self::S => (UnitAxis::Z, FRAC_PI_2),
            Self::T => (UnitAxis::Z, FRAC_PI_4),
        }
    }

    /// Short gate name
    pub const fn name(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::S => "S",
            Self::T => "T",
        }
    }
}

impl fmt::Display for NamedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedGate {
    type Err = BlochyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "hadamard" => Ok(Self::H),
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            "s" => Ok(Self::S),
            "t" => Ok(Self::T),
            _ => Err(BlochyError::UnknownGate(s.to_string())),
        }
    }
}

/// Rotation engine for one qubit
#[derive(Clone, Debug)]
pub struct StateEngine {
    initial: QuantumState,
    /// States produced by applied operations, oldest first
    applied: Vec<QuantumState>,
    trail: PhosphorTrail,
    trail_enabled: bool,
    config: EngineConfig,
}

impl StateEngine {
    /// Create an engine in |0⟩ with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine in |0⟩ with the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            initial: QuantumState::ZERO,
            applied: Vec::new(),
            trail: PhosphorTrail::new(),
            trail_enabled: config.is_trail_enabled(),
            config,
        }
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reset to |0⟩, dropping history and trail
    ///
    /// The trail-enabled flag is left as it is.
    pub fn initialize(&mut self) {
        self.applied.clear();
        self.trail.clear();
        debug!("state engine initialized");
    }

    /// Rotate the current state by `angle` radians about `axis`
    ///
    /// # Errors
    /// - [`BlochyError::InvalidAngle`] if `angle` is not finite
    /// - [`BlochyError::InvalidAxis`] if an explicit axis vector is degenerate
    ///
    /// The engine is unchanged on error.
    pub fn apply_rotation(&mut self, axis: Axis, angle: f64) -> Result<QuantumState> {
        let angle = BlochyError::ensure_finite("rotation angle", angle)?;
        let unit = axis.unit()?;
        Ok(self.rotate(&unit, angle, rotation_frame_count(angle)))
    }

    /// Apply one of the fixed gates
    pub fn apply_named_gate(&mut self, gate: NamedGate) -> QuantumState {
        let (axis, angle) = gate.rotation();
        self.rotate(&axis, angle, rotation_frame_count(angle))
    }

    /// Rotate about the axis at spherical angles `(polar, azimuth)`
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidAngle`] if any input is not finite
    pub fn apply_custom_axis_rotation(
        &mut self,
        polar: f64,
        azimuth: f64,
        rotation: f64,
    ) -> Result<QuantumState> {
        let rotation = BlochyError::ensure_finite("rotation angle", rotation)?;
        let unit = axis_from_spherical(polar, azimuth)?;
        Ok(self.rotate(&unit, rotation, rotation_frame_count(rotation)))
    }

    /// Drive the qubit about X or Y for `duration`
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidPulse`] unless `0 <= duration <= 10`
    pub fn apply_pulse(&mut self, axis: PulseAxis, duration: f64) -> Result<QuantumState> {
        let duration = validate_duration(duration)?;
        let unit = axis.axis().unit()?;
        Ok(self.rotate(&unit, duration, pulse_frame_count(duration)))
    }

    fn rotate(&mut self, axis: &UnitAxis, angle: f64, frames: usize) -> QuantumState {
        let current = *self.current_state();
        let next = current.rotated(axis, angle);

        if self.trail_enabled {
            let entry = TrailEntry::sample(&current, axis, angle, frames);
            trace!(frames = entry.frames.len(), "trail entry recorded");
            self.trail.push(entry);
        }
        self.applied.push(next);

        debug!(
            axis = ?axis.components(),
            angle,
            history = self.history_len(),
            "rotation applied"
        );
        next
    }

    /// Revert the last operation
    ///
    /// Pops the last state when more than one is recorded and, if present, the
    /// most recent trail entry. Returns whether anything was undone.
    pub fn undo(&mut self) -> bool {
        if self.applied.pop().is_none() {
            trace!("undo ignored at initial state");
            return false;
        }
        self.trail.pop();
        debug!(history = self.history_len(), "undo");
        true
    }

    /// Current state
    pub fn current_state(&self) -> &QuantumState {
        self.applied.last().unwrap_or(&self.initial)
    }

    /// Bloch vector of the current state, recomputed from the amplitudes
    pub fn current_bloch_vector(&self) -> BlochVector {
        self.current_state().bloch_vector()
    }

    /// Enable or disable trail recording; disabling clears the trail
    pub fn set_trail_enabled(&mut self, enabled: bool) {
        self.trail_enabled = enabled;
        if !enabled {
            self.trail.clear();
        }
        debug!(enabled, "phosphor trail toggled");
    }

    /// Whether rotations currently record trail entries
    pub fn is_trail_enabled(&self) -> bool {
        self.trail_enabled
    }

    /// Drop all trail entries, keeping history and the enabled flag
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Full trail
    pub fn trail(&self) -> &PhosphorTrail {
        &self.trail
    }

    /// Trail entries to draw, limited by the configured render length
    pub fn visible_trail(&self) -> &[TrailEntry] {
        self.trail.visible(self.config.render_length())
    }

    /// Every recorded state, initial first
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &QuantumState> + '_ {
        std::iter::once(&self.initial).chain(self.applied.iter())
    }

    /// Number of recorded states, including the initial one
    pub fn history_len(&self) -> usize {
        self.applied.len() + 1
    }

    /// Number of operations applied since initialization
    pub fn operation_count(&self) -> usize {
        self.applied.len()
    }

    /// Serializable summary of the current state
    pub fn report(&self) -> StateReport {
        StateReport::new(self.current_state(), self.operation_count(), self.trail.len())
    }
}

impl Default for StateEngine {
    fn default() -> Self {
        Self::new()
    }
}
