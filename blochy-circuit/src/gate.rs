//! Gate kinds and placed gate records

use blochy_core::{BlochyError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Operand list of a placed gate; most gates touch one or two qubits
pub type Operands = SmallVec<[usize; 2]>;

/// Kinds of gate that can be placed on the grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateType {
    H,
    X,
    Y,
    Z,
    T,
    S,
    /// Controlled-NOT; operands are `[control, target]`
    CX,
    RX,
    RY,
    RZ,
    /// Measurement of one or more qubits
    Measure,
}

/// Number of qubits a gate kind accepts
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one qubit
    Single,
    /// Exactly two distinct qubits
    Pair,
    /// One or more distinct qubits
    AtLeastOne,
}

impl Arity {
    /// Whether `count` operands satisfy this arity
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Single => count == 1,
            Self::Pair => count == 2,
            Self::AtLeastOne => count >= 1,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("1"),
            Self::Pair => f.write_str("2"),
            Self::AtLeastOne => f.write_str("at least 1"),
        }
    }
}

impl GateType {
    /// Every gate kind, in toolbar order
    pub const ALL: [Self; 11] = [
        Self::H,
        Self::X,
        Self::Y,
        Self::Z,
        Self::T,
        Self::S,
        Self::CX,
        Self::RX,
        Self::RY,
        Self::RZ,
        Self::Measure,
    ];

    /// Operand count accepted by this kind
    pub const fn arity(self) -> Arity {
        match self {
            Self::CX => Arity::Pair,
            Self::Measure => Arity::AtLeastOne,
            _ => Arity::Single,
        }
    }

    /// Lowercase name as used by backend snapshots
    pub const fn name(self) -> &'static str {
        match self {
            Self::H => "h",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::T => "t",
            Self::S => "s",
            Self::CX => "cx",
            Self::RX => "rx",
            Self::RY => "ry",
            Self::RZ => "rz",
            Self::Measure => "measure",
        }
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateType {
    type Err = BlochyError;

    fn from_str(s: &str) -> Result<Self> {
        let gate = match s.trim().to_ascii_lowercase().as_str() {
            "h" => Self::H,
            "x" => Self::X,
            "y" => Self::Y,
            "z" => Self::Z,
            "t" => Self::T,
            "s" => Self::S,
            "cx" | "cnot" => Self::CX,
            "rx" => Self::RX,
            "ry" => Self::RY,
            "rz" => Self::RZ,
            "measure" | "m" => Self::Measure,
            _ => return Err(BlochyError::UnknownGate(s.to_string())),
        };
        Ok(gate)
    }
}

/// Identifier of a placed gate, unique for the lifetime of a grid's gate set
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateId(u64);

impl GateId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A gate occupying one time step on one or more qubits
///
/// Placed gates are never edited; moving a gate removes and reinserts it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedGate {
    id: GateId,
    gate_type: GateType,
    qubits: Operands,
    position: usize,
}

impl PlacedGate {
    pub(crate) fn new(id: GateId, gate_type: GateType, qubits: Operands, position: usize) -> Self {
        Self {
            id,
            gate_type,
            qubits,
            position,
        }
    }

    #[inline]
    pub fn id(&self) -> GateId {
        self.id
    }

    #[inline]
    pub fn gate_type(&self) -> GateType {
        self.gate_type
    }

    /// Operands; for CX, `[control, target]`
    #[inline]
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }

    /// Time step
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether this gate touches `qubit`
    pub fn acts_on(&self, qubit: usize) -> bool {
        self.qubits.contains(&qubit)
    }

    /// First operand shared with `qubits`, if any
    pub fn overlap(&self, qubits: &[usize]) -> Option<usize> {
        self.qubits.iter().copied().find(|q| qubits.contains(q))
    }

    /// Control qubit of a CX gate
    pub fn control(&self) -> Option<usize> {
        (self.gate_type == GateType::CX).then(|| self.qubits[0])
    }

    /// Target qubit of a CX gate
    pub fn target(&self) -> Option<usize> {
        (self.gate_type == GateType::CX).then(|| self.qubits[1])
    }

    /// Lowest and highest qubit touched
    pub fn span(&self) -> (usize, usize) {
        let lo = self.qubits.iter().copied().min().unwrap_or(0);
        let hi = self.qubits.iter().copied().max().unwrap_or(0);
        (lo, hi)
    }
}

impl fmt::Display for PlacedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.id, self.gate_type)?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "q{}", q)?;
        }
        write!(f, ") @{}", self.position)
    }
}
