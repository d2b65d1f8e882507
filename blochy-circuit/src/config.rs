//! Circuit grid configuration

use serde::{Deserialize, Serialize};

/// Upper bound on qubit rows
pub const MAX_QUBITS: usize = 10;

/// Upper bound on time-step columns
pub const MAX_DEPTH: usize = 20;

/// Maximum number of backend snapshot entries replayed by a bulk load
pub const MAX_BULK_GATES: usize = 50;

/// Configuration for a [`CircuitGrid`](crate::CircuitGrid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Qubit rows of a fresh grid
    qubits: usize,
    /// Time-step columns of a fresh grid
    depth: usize,
    /// Cap on snapshot entries processed per bulk load
    max_bulk_gates: usize,
}

impl GridConfig {
    /// Create a configuration with defaults
    ///
    /// Defaults:
    /// - qubits: 3
    /// - depth: 6
    /// - max_bulk_gates: 50
    pub const fn new() -> Self {
        Self {
            qubits: 3,
            depth: 6,
            max_bulk_gates: MAX_BULK_GATES,
        }
    }

    /// Set the initial qubit count
    pub const fn qubits(mut self, qubits: usize) -> Self {
        self.qubits = qubits;
        self
    }

    /// Set the initial depth
    pub const fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set the bulk-load cap; values above [`MAX_BULK_GATES`] read as the maximum
    pub const fn max_bulk_gates(mut self, max: usize) -> Self {
        self.max_bulk_gates = max;
        self
    }

    pub const fn initial_qubits(&self) -> usize {
        self.qubits
    }

    pub const fn initial_depth(&self) -> usize {
        self.depth
    }

    /// Snapshot entries processed per bulk load, never above [`MAX_BULK_GATES`]
    pub const fn bulk_limit(&self) -> usize {
        if self.max_bulk_gates > MAX_BULK_GATES {
            MAX_BULK_GATES
        } else {
            self.max_bulk_gates
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.initial_qubits(), 3);
        assert_eq!(config.initial_depth(), 6);
        assert_eq!(config.bulk_limit(), MAX_BULK_GATES);
    }

    #[test]
    fn test_deserialize() {
        let config: GridConfig =
            serde_json::from_str(r#"{"qubits": 5, "max_bulk_gates": 8}"#).unwrap();
        assert_eq!(config, GridConfig::new().qubits(5).max_bulk_gates(8));
        assert!(serde_json::from_str::<GridConfig>(r#"{"rows": 2}"#).is_err());
    }

    #[test]
    fn test_bulk_limit_never_exceeds_cap() {
        let config: GridConfig = serde_json::from_str(r#"{"max_bulk_gates": 1000}"#).unwrap();
        assert_eq!(config.bulk_limit(), MAX_BULK_GATES);
        assert_eq!(GridConfig::new().max_bulk_gates(51).bulk_limit(), MAX_BULK_GATES);
        assert_eq!(GridConfig::new().max_bulk_gates(0).bulk_limit(), 0);
    }
}
