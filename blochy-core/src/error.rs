//! Error types for Blochy

use thiserror::Error;

/// Errors raised by the state engine and the circuit grid
///
/// Every variant is recoverable: the rejected operation leaves the engine or
/// grid exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlochyError {
    /// A rotation angle was NaN or infinite
    #[error("Invalid angle for {name}: {value} is not a finite number")]
    InvalidAngle { name: &'static str, value: f64 },

    /// A rotation axis could not be normalized
    #[error("Invalid rotation axis ({0}, {1}, {2}): must be finite and non-zero")]
    InvalidAxis(f64, f64, f64),

    /// A drive pulse duration outside the accepted range
    #[error(
        "Invalid pulse duration {0}: must be finite and within [0, {max}]",
        max = crate::pulse::MAX_PULSE_DURATION
    )]
    InvalidPulse(f64),

    /// A qubit or time-step index outside the current grid
    #[error("{kind} index {index} is out of bounds: grid allows [0, {limit})")]
    OutOfBounds {
        kind: IndexKind,
        index: usize,
        limit: usize,
    },

    /// The new gate overlaps an existing gate in the same time step
    #[error("Gate conflicts with gate #{existing} at position {position} on qubit {qubit}")]
    PlacementConflict {
        existing: u64,
        position: usize,
        qubit: usize,
    },

    /// Gate applied to the wrong number of qubits
    #[error("Gate '{gate}' requires {expected} qubits, but {actual} were provided")]
    InvalidArity {
        gate: String,
        expected: String,
        actual: usize,
    },

    /// Duplicate qubit in a gate operand list
    #[error("Duplicate qubit {0} in gate operands")]
    DuplicateQubit(usize),

    /// Gate name not recognized
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Which grid axis an out-of-bounds index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Qubit,
    Position,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Qubit => write!(f, "Qubit"),
            Self::Position => write!(f, "Position"),
        }
    }
}

impl BlochyError {
    /// Create an invalid angle error
    pub fn invalid_angle(name: &'static str, value: f64) -> Self {
        Self::InvalidAngle { name, value }
    }

    /// Create an out-of-bounds error for a qubit index
    pub fn qubit_out_of_bounds(index: usize, limit: usize) -> Self {
        Self::OutOfBounds {
            kind: IndexKind::Qubit,
            index,
            limit,
        }
    }

    /// Create an out-of-bounds error for a time-step index
    pub fn position_out_of_bounds(index: usize, limit: usize) -> Self {
        Self::OutOfBounds {
            kind: IndexKind::Position,
            index,
            limit,
        }
    }

    /// Create an invalid arity error
    pub fn invalid_arity(
        gate: impl Into<String>,
        expected: impl Into<String>,
        actual: usize,
    ) -> Self {
        Self::InvalidArity {
            gate: gate.into(),
            expected: expected.into(),
            actual,
        }
    }

    /// Check that `value` is finite, naming it in the error otherwise
    pub fn ensure_finite(name: &'static str, value: f64) -> crate::Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::invalid_angle(name, value))
        }
    }
}

impl From<serde_json::Error> for BlochyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
