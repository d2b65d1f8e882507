//! Circuit placement grid for the Blochy dashboard
//!
//! A bounded qubit × time-step grid of [`PlacedGate`]s. Placement validates
//! bounds, arity and conflicts; a CX given only its control derives its target
//! from the row below. Backend snapshots are replayed in bulk through the same
//! validation, skipping what does not fit.
//!
//! # Example
//! ```
//! use blochy_circuit::{CircuitGrid, GateType};
//!
//! let mut grid = CircuitGrid::new(3, 4);
//! let cx = grid.place_gate(GateType::CX, &[0], 2)?;
//! assert_eq!(grid.get(cx).unwrap().qubits(), &[0, 1]);
//! # Ok::<(), blochy_core::BlochyError>(())
//! ```

pub mod config;
pub mod gate;
pub mod grid;
pub mod pointer;
pub mod snapshot;

pub use blochy_core::{BlochyError, Result};
pub use config::{GridConfig, MAX_BULK_GATES, MAX_DEPTH, MAX_QUBITS};
pub use gate::{Arity, GateId, GateType, Operands, PlacedGate};
pub use grid::{derive_cx_target, CircuitGrid, CircuitSpec};
pub use pointer::{cell_from_pointer, Cell};
pub use snapshot::{BackendSnapshot, LoadReport, SnapshotEntry, SnapshotGate};
