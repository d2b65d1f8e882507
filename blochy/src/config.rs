//! Dashboard configuration
//!
//! Loaded from JSON; every field is optional and unknown fields are rejected.
//!
//! ```
//! use blochy::DashboardConfig;
//!
//! let config = DashboardConfig::from_json(r#"{
//!     "engine": { "trail_enabled": true },
//!     "grid": { "qubits": 4 },
//!     "debounce_ms": 50
//! }"#)?;
//! assert!(config.engine.is_trail_enabled());
//! assert_eq!(config.grid.initial_qubits(), 4);
//! # Ok::<(), blochy::BlochyError>(())
//! ```

use blochy_circuit::GridConfig;
use blochy_core::{EngineConfig, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration of one [`Dashboard`](crate::Dashboard)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub engine: EngineConfig,
    pub grid: GridConfig,
    /// Render coalescing window in milliseconds
    pub debounce_ms: u64,
    /// Start with the demo circuit instead of an empty grid
    pub load_demo: bool,
}

impl DashboardConfig {
    /// Parse a configuration from JSON
    ///
    /// # Errors
    /// Returns [`BlochyError::Config`](blochy_core::BlochyError::Config) for
    /// malformed JSON or unknown fields
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            grid: GridConfig::default(),
            debounce_ms: 100,
            load_demo: true,
        }
    }
}
