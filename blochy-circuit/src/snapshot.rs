//! Bulk loading of backend-provided circuit snapshots
//!
//! The polling collaborator hands over whatever the backend reported. Loading
//! is best-effort: the grid is cleared and resized, then each entry is replayed
//! through [`CircuitGrid::place_gate`]. Entries that fail to parse or fail
//! validation are skipped, and only the first [`GridConfig::bulk_limit`]
//! entries are looked at.
//!
//! [`GridConfig::bulk_limit`]: crate::GridConfig::bulk_limit

use crate::gate::GateType;
use crate::grid::CircuitGrid;
use blochy_core::{BlochyError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Qubit count assumed when a snapshot omits it
pub const DEFAULT_SNAPSHOT_QUBITS: usize = 3;

/// Circuit description received from the backend
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendSnapshot {
    /// Qubit count; anything but a non-negative integer reads as absent
    #[serde(default, alias = "numQubits", deserialize_with = "lenient_count")]
    pub num_qubits: Option<usize>,
    #[serde(default)]
    pub gates: Vec<SnapshotEntry>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub depth: Option<usize>,
}

/// One element of a snapshot's gate list
///
/// Elements that do not have the shape of a [`SnapshotGate`] are kept as raw
/// JSON so the rest of the snapshot still loads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotEntry {
    Gate(SnapshotGate),
    Malformed(serde_json::Value),
}

impl From<SnapshotGate> for SnapshotEntry {
    fn from(gate: SnapshotGate) -> Self {
        Self::Gate(gate)
    }
}

impl fmt::Display for SnapshotEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gate(gate) => f.write_str(&gate.name),
            Self::Malformed(value) => write!(f, "{value}"),
        }
    }
}

/// One gate entry of a backend snapshot
///
/// Indices are signed so that negative values survive deserialization and
/// are skipped at load time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotGate {
    #[serde(alias = "type")]
    pub name: String,
    #[serde(default)]
    pub qubits: Vec<i64>,
    #[serde(default)]
    pub position: Option<i64>,
}

/// Outcome of a bulk load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Entries placed on the grid
    pub placed: usize,
    /// Entries within the cap that failed validation
    pub skipped: usize,
    /// Entries beyond the cap that were not looked at
    pub truncated: usize,
}

impl BackendSnapshot {
    /// Parse a snapshot from JSON
    ///
    /// Accepts either a single object or an array, in which case the first
    /// element is used.
    ///
    /// # Errors
    /// Returns [`BlochyError::Config`] for malformed JSON or an empty array
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let value = match value {
            serde_json::Value::Array(mut items) => {
                if items.is_empty() {
                    return Err(BlochyError::Config("snapshot array is empty".to_string()));
                }
                items.swap_remove(0)
            }
            other => other,
        };
        Ok(serde_json::from_value(value)?)
    }
}

impl CircuitGrid {
    /// Replace the grid contents with a backend snapshot
    ///
    /// The grid is resized to `num_qubits` (default 3) by `depth` (default:
    /// number of entries), both clamped. Entry `i` without a position is
    /// placed at step `i`. This never fails.
    pub fn load_snapshot(&mut self, snapshot: &BackendSnapshot) -> LoadReport {
        let qubits = snapshot.num_qubits.unwrap_or(DEFAULT_SNAPSHOT_QUBITS);
        let depth = snapshot
            .depth
            .filter(|&d| d > 0)
            .unwrap_or(snapshot.gates.len());

        self.clear();
        self.resize(qubits, depth);

        let limit = self.config().bulk_limit();
        let mut report = LoadReport {
            truncated: snapshot.gates.len().saturating_sub(limit),
            ..LoadReport::default()
        };

        for (index, entry) in snapshot.gates.iter().take(limit).enumerate() {
            let placed = match entry {
                SnapshotEntry::Gate(gate) => self.place_entry(index, gate),
                SnapshotEntry::Malformed(_) => {
                    Err(BlochyError::Config("malformed snapshot entry".to_string()))
                }
            };
            if let Err(err) = placed {
                warn!(index, %entry, error = %err, "skipping snapshot entry");
                report.skipped += 1;
            } else {
                report.placed += 1;
            }
        }

        debug!(?report, "snapshot loaded");
        report
    }

    fn place_entry(&mut self, index: usize, entry: &SnapshotGate) -> Result<()> {
        let gate_type: GateType = entry.name.parse()?;
        let qubits = entry
            .qubits
            .iter()
            .map(|&q| to_index(q, self.spec().qubit_count(), true))
            .collect::<Result<Vec<_>>>()?;
        let position = match entry.position {
            Some(p) => to_index(p, self.spec().depth(), false)?,
            None => index,
        };

        self.place_gate(gate_type, &qubits, position)?;
        Ok(())
    }
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|v| usize::try_from(v).ok()))
}

fn to_index(value: i64, limit: usize, is_qubit: bool) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        // Negative indices are reported at the bound they undershoot
        if is_qubit {
            BlochyError::qubit_out_of_bounds(0, limit)
        } else {
            BlochyError::position_out_of_bounds(0, limit)
        }
    })
}
