//! Qubit × time-step gate placement grid
//!
//! The grid owns a [`CircuitSpec`] and the set of [`PlacedGate`]s on it. All
//! mutations keep two invariants:
//!
//! - every operand lies in `[0, qubit_count)` and every position in `[0, depth)`
//! - no two gates share a position and a qubit (conflict freedom)
//!
//! Conflict checks scan the gates at one position; with at most 10 × 20 cells
//! no spatial index is needed.
//!
//! # Example
//! ```
//! use blochy_circuit::{CircuitGrid, GateType};
//! use blochy_core::BlochyError;
//!
//! let mut grid = CircuitGrid::new(3, 4);
//! grid.place_gate(GateType::H, &[0], 1)?;
//! assert!(matches!(
//!     grid.place_gate(GateType::X, &[0], 1),
//!     Err(BlochyError::PlacementConflict { .. })
//! ));
//! grid.place_gate(GateType::X, &[1], 1)?;
//! assert_eq!(grid.gates_at(1).count(), 2);
//! # Ok::<(), BlochyError>(())
//! ```

use crate::config::{GridConfig, MAX_DEPTH, MAX_QUBITS};
use crate::gate::{GateId, GateType, Operands, PlacedGate};
use blochy_core::{BlochyError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

/// Grid dimensions
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitSpec {
    qubit_count: usize,
    depth: usize,
}

impl CircuitSpec {
    /// Create grid dimensions, clamping to `[1, 10]` qubits and `[1, 20]` steps
    pub fn new(qubit_count: usize, depth: usize) -> Self {
        Self {
            qubit_count: qubit_count.clamp(1, MAX_QUBITS),
            depth: depth.clamp(1, MAX_DEPTH),
        }
    }

    #[inline]
    pub const fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Number of cells in the grid
    pub const fn cells(&self) -> usize {
        self.qubit_count * self.depth
    }

    /// Whether `gate` fits entirely inside these bounds
    pub fn contains(&self, gate: &PlacedGate) -> bool {
        gate.position() < self.depth && gate.qubits().iter().all(|&q| q < self.qubit_count)
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.depth {
            Ok(())
        } else {
            Err(BlochyError::position_out_of_bounds(position, self.depth))
        }
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit < self.qubit_count {
            Ok(())
        } else {
            Err(BlochyError::qubit_out_of_bounds(qubit, self.qubit_count))
        }
    }
}

impl Default for CircuitSpec {
    fn default() -> Self {
        let config = GridConfig::default();
        Self::new(config.initial_qubits(), config.initial_depth())
    }
}

/// Placed gates on a bounded grid
#[derive(Clone, Debug)]
pub struct CircuitGrid {
    spec: CircuitSpec,
    gates: Vec<PlacedGate>,
    next_id: u64,
    config: GridConfig,
}

impl CircuitGrid {
    /// Create an empty grid; dimensions are clamped into range
    pub fn new(qubit_count: usize, depth: usize) -> Self {
        Self::with_config(GridConfig::new().qubits(qubit_count).depth(depth))
    }

    /// Create an empty grid from a configuration
    pub fn with_config(config: GridConfig) -> Self {
        Self {
            spec: CircuitSpec::new(config.initial_qubits(), config.initial_depth()),
            gates: Vec::new(),
            next_id: 1,
            config,
        }
    }

    /// The dashboard's starter circuit on a 3 × 6 grid
    ///
    /// H q0 @0, CX q0→q1 @1, H q1 @2, X q2 @3, MEASURE q0..q2 @4
    pub fn demo() -> Self {
        let mut grid = Self::new(3, 6);
        let layout: [(GateType, &[usize], usize); 5] = [
            (GateType::H, &[0], 0),
            (GateType::CX, &[0, 1], 1),
            (GateType::H, &[1], 2),
            (GateType::X, &[2], 3),
            (GateType::Measure, &[0, 1, 2], 4),
        ];
        for (gate_type, qubits, position) in layout {
            grid.push(gate_type, SmallVec::from_slice(qubits), position);
        }
        grid
    }

    /// Grid dimensions
    #[inline]
    pub fn spec(&self) -> CircuitSpec {
        self.spec
    }

    /// Grid configuration
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of placed gates
    #[inline]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether no gates are placed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// All gates in insertion order
    pub fn gates(&self) -> &[PlacedGate] {
        &self.gates
    }

    /// Look up a gate by id
    pub fn get(&self, id: GateId) -> Option<&PlacedGate> {
        self.gates.iter().find(|g| g.id() == id)
    }

    /// Gates at time step `position`, in insertion order
    pub fn gates_at(&self, position: usize) -> impl Iterator<Item = &PlacedGate> + '_ {
        self.gates.iter().filter(move |g| g.position() == position)
    }

    /// Gates touching `qubit`, in insertion order
    pub fn gates_on(&self, qubit: usize) -> impl Iterator<Item = &PlacedGate> + '_ {
        self.gates.iter().filter(move |g| g.acts_on(qubit))
    }

    /// Gate occupying the cell `(qubit, position)`, if any
    pub fn occupant(&self, qubit: usize, position: usize) -> Option<&PlacedGate> {
        self.gates_at(position).find(|g| g.acts_on(qubit))
    }

    /// Change the grid dimensions
    ///
    /// Inputs are clamped to `[1, 10]` and `[1, 20]`. Gates that no longer fit
    /// are removed and returned.
    pub fn resize(&mut self, qubit_count: usize, depth: usize) -> Vec<PlacedGate> {
        let spec = CircuitSpec::new(qubit_count, depth);
        let (kept, dropped): (Vec<_>, Vec<_>) =
            self.gates.drain(..).partition(|g| spec.contains(g));
        self.gates = kept;
        self.spec = spec;

        debug!(
            qubits = spec.qubit_count(),
            depth = spec.depth(),
            dropped = dropped.len(),
            "grid resized"
        );
        dropped
    }

    /// Place a gate and return its id
    ///
    /// A CX given a single anchor qubit gets the target `min(anchor + 1,
    /// qubit_count - 1)`, or `anchor - 1` when the anchor is the last row.
    ///
    /// # Errors
    /// - [`BlochyError::OutOfBounds`] if the position or a qubit is outside the grid
    /// - [`BlochyError::InvalidArity`] if the operand count does not fit the gate,
    ///   including a CX on a one-qubit grid
    /// - [`BlochyError::DuplicateQubit`] if an operand repeats
    /// - [`BlochyError::PlacementConflict`] if a gate at this position shares a qubit
    pub fn place_gate(
        &mut self,
        gate_type: GateType,
        qubits: &[usize],
        position: usize,
    ) -> Result<GateId> {
        let operands = self.validate(gate_type, qubits, position)?;
        Ok(self.push(gate_type, operands, position))
    }

    fn push(&mut self, gate_type: GateType, operands: Operands, position: usize) -> GateId {
        let id = GateId::new(self.next_id);
        self.next_id += 1;

        debug!(%id, gate = %gate_type, qubits = ?operands.as_slice(), position, "gate placed");
        self.gates.push(PlacedGate::new(id, gate_type, operands, position));
        id
    }

    /// Validate a placement without performing it, returning resolved operands
    pub fn validate(
        &self,
        gate_type: GateType,
        qubits: &[usize],
        position: usize,
    ) -> Result<Operands> {
        self.spec.check_position(position)?;
        for &qubit in qubits {
            self.spec.check_qubit(qubit)?;
        }

        let operands = self.resolve_operands(gate_type, qubits)?;

        if !gate_type.arity().accepts(operands.len()) {
            return Err(BlochyError::invalid_arity(
                gate_type.name(),
                gate_type.arity().to_string(),
                operands.len(),
            ));
        }

        for (i, q) in operands.iter().enumerate() {
            if operands[i + 1..].contains(q) {
                return Err(BlochyError::DuplicateQubit(*q));
            }
        }

        if let Some((existing, qubit)) = self
            .gates_at(position)
            .find_map(|g| g.overlap(&operands).map(|q| (g.id(), q)))
        {
            return Err(BlochyError::PlacementConflict {
                existing: existing.value(),
                position,
                qubit,
            });
        }

        Ok(operands)
    }

    fn resolve_operands(&self, gate_type: GateType, qubits: &[usize]) -> Result<Operands> {
        match (gate_type, qubits) {
            (GateType::CX, &[anchor]) => {
                let target = derive_cx_target(anchor, self.spec.qubit_count())
                    .ok_or_else(|| BlochyError::invalid_arity(gate_type.name(), "2", 1))?;
                Ok(SmallVec::from_slice(&[anchor, target]))
            }
            _ => Ok(SmallVec::from_slice(qubits)),
        }
    }

    /// Remove a gate by id; absent ids are ignored
    pub fn remove_gate(&mut self, id: GateId) -> Option<PlacedGate> {
        let index = self.gates.iter().position(|g| g.id() == id)?;
        let removed = self.gates.remove(index);
        debug!(%id, "gate removed");
        Some(removed)
    }

    /// Move a gate to new operands and position
    ///
    /// The gate is removed and re-placed under a fresh id. If the new
    /// placement is rejected the original gate is restored unchanged.
    pub fn move_gate(
        &mut self,
        id: GateId,
        qubits: &[usize],
        position: usize,
    ) -> Result<Option<GateId>> {
        let Some(index) = self.gates.iter().position(|g| g.id() == id) else {
            return Ok(None);
        };
        let original = self.gates.remove(index);

        match self.place_gate(original.gate_type(), qubits, position) {
            Ok(new_id) => Ok(Some(new_id)),
            Err(err) => {
                self.gates.insert(index, original);
                Err(err)
            }
        }
    }

    /// Remove every gate and restart id numbering
    pub fn clear(&mut self) {
        self.gates.clear();
        self.next_id = 1;
        debug!("grid cleared");
    }
}

impl Default for CircuitGrid {
    fn default() -> Self {
        Self::with_config(GridConfig::default())
    }
}

/// Target for a CX anchored at `anchor` on a grid of `qubit_count` rows
///
/// Prefers the row below; on the last row falls back to the row above. A
/// one-row grid has no valid target.
pub fn derive_cx_target(anchor: usize, qubit_count: usize) -> Option<usize> {
    let below = (anchor + 1).min(qubit_count.saturating_sub(1));
    if below != anchor {
        Some(below)
    } else {
        anchor.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_clamps() {
        let spec = CircuitSpec::new(0, 100);
        assert_eq!(spec.qubit_count(), 1);
        assert_eq!(spec.depth(), 20);
        assert_eq!(CircuitSpec::new(12, 0).qubit_count(), 10);
        assert_eq!(CircuitSpec::default().cells(), 18);
    }

    #[test]
    fn test_ids_increase_and_are_not_reused() {
        let mut grid = CircuitGrid::new(3, 4);
        let a = grid.place_gate(GateType::H, &[0], 0).unwrap();
        let b = grid.place_gate(GateType::H, &[1], 0).unwrap();
        grid.remove_gate(b);
        let c = grid.place_gate(GateType::X, &[1], 0).unwrap();

        assert_eq!(a.value(), 1);
        assert_eq!(b.value(), 2);
        assert_eq!(c.value(), 3);
    }

    #[test]
    fn test_cx_target_derivation() {
        assert_eq!(derive_cx_target(0, 3), Some(1));
        assert_eq!(derive_cx_target(1, 3), Some(2));
        assert_eq!(derive_cx_target(2, 3), Some(1));
        assert_eq!(derive_cx_target(0, 1), None);
    }

    #[test]
    fn test_cx_with_anchor() {
        let mut grid = CircuitGrid::new(3, 4);
        let id = grid.place_gate(GateType::CX, &[2], 0).unwrap();
        let gate = grid.get(id).unwrap();
        assert_eq!(gate.qubits(), &[2, 1]);
    }

    #[test]
    fn test_cx_on_single_qubit_grid_rejected() {
        let mut grid = CircuitGrid::new(1, 4);
        assert!(matches!(
            grid.place_gate(GateType::CX, &[0], 0),
            Err(BlochyError::InvalidArity { .. })
        ));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_arity_and_duplicates() {
        let mut grid = CircuitGrid::new(3, 4);
        assert!(matches!(
            grid.place_gate(GateType::H, &[0, 1], 0),
            Err(BlochyError::InvalidArity { .. })
        ));
        assert!(matches!(
            grid.place_gate(GateType::Measure, &[], 0),
            Err(BlochyError::InvalidArity { .. })
        ));
        assert_eq!(
            grid.place_gate(GateType::CX, &[1, 1], 0),
            Err(BlochyError::DuplicateQubit(1))
        );
        assert!(grid.place_gate(GateType::Measure, &[0, 1, 2], 3).is_ok());
    }

    #[test]
    fn test_position_out_of_bounds() {
        let mut grid = CircuitGrid::new(3, 4);
        assert_eq!(
            grid.place_gate(GateType::H, &[0], 4),
            Err(BlochyError::position_out_of_bounds(4, 4))
        );
    }

    #[test]
    fn test_move_gate() {
        let mut grid = CircuitGrid::new(3, 4);
        let h = grid.place_gate(GateType::H, &[0], 0).unwrap();
        grid.place_gate(GateType::X, &[1], 2).unwrap();

        let moved = grid.move_gate(h, &[2], 3).unwrap().unwrap();
        assert!(grid.get(h).is_none());
        assert_eq!(grid.get(moved).unwrap().position(), 3);

        // Blocked move restores the original in place
        let err = grid.move_gate(moved, &[1], 2).unwrap_err();
        assert!(matches!(err, BlochyError::PlacementConflict { .. }));
        assert_eq!(grid.get(moved).unwrap().qubits(), &[2]);
        assert_eq!(grid.len(), 2);

        assert_eq!(grid.move_gate(GateId::new(99), &[0], 0), Ok(None));
    }

    #[test]
    fn test_demo_circuit() {
        let grid = CircuitGrid::demo();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid.spec(), CircuitSpec::new(3, 6));
        assert_eq!(grid.gates_on(0).count(), 3);
        assert_eq!(grid.occupant(1, 1).unwrap().gate_type(), GateType::CX);
    }

    #[test]
    fn test_demo_layout_passes_validation() {
        let demo = CircuitGrid::demo();
        let mut rebuilt = CircuitGrid::new(3, 6);
        for gate in demo.gates() {
            rebuilt.place_gate(gate.gate_type(), gate.qubits(), gate.position()).unwrap();
        }
        assert_eq!(rebuilt.gates(), demo.gates());
    }

    #[test]
    fn test_clear_restarts_ids() {
        let mut grid = CircuitGrid::demo();
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.place_gate(GateType::Z, &[0], 0).unwrap().value(), 1);
    }
}
