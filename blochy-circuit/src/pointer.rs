//! Mapping from pointer positions on the circuit surface to grid cells

use crate::grid::CircuitSpec;
use serde::{Deserialize, Serialize};

/// A discrete grid cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub qubit: usize,
    pub position: usize,
}

/// Translate a pointer position, given as fractions of the surface width and
/// height, into a grid cell
///
/// `qubit = round(fy × qubit_count)` and `position = round(fx × depth)`.
/// Fractions outside `[0, 1]` (clicks off the surface) or non-finite values
/// yield `None`; the far edge, which rounds to the count itself, snaps to the
/// last row or column.
///
/// # Example
/// ```
/// use blochy_circuit::{cell_from_pointer, CircuitSpec};
///
/// let spec = CircuitSpec::new(3, 6);
/// let cell = cell_from_pointer(0.5, 0.3, &spec).unwrap();
/// assert_eq!((cell.qubit, cell.position), (1, 3));
/// assert!(cell_from_pointer(1.2, 0.3, &spec).is_none());
/// ```
pub fn cell_from_pointer(fraction_x: f64, fraction_y: f64, spec: &CircuitSpec) -> Option<Cell> {
    let qubit = axis_index(fraction_y, spec.qubit_count())?;
    let position = axis_index(fraction_x, spec.depth())?;
    Some(Cell { qubit, position })
}

fn axis_index(fraction: f64, count: usize) -> Option<usize> {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return None;
    }
    let index = (fraction * count as f64).round() as usize;
    Some(index.min(count - 1))
}
