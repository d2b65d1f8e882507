//! Core types for the Blochy single-qubit dashboard
//!
//! This crate holds the rotation engine behind the Bloch sphere widget:
//! - [`QuantumState`]: normalized amplitude pair α|0⟩ + β|1⟩
//! - [`BlochVector`]: derived Cartesian point on the sphere
//! - [`rotation`]: rotation operators R(n, θ) = cos(θ/2)·I − i·sin(θ/2)·(n·σ)
//! - [`StateEngine`]: current state, undo history and phosphor trail
//!
//! # Example
//! ```
//! use blochy_core::{Axis, StateEngine};
//! use std::f64::consts::PI;
//!
//! let mut engine = StateEngine::new();
//! engine.apply_rotation(Axis::Z, PI)?;
//! engine.apply_rotation(Axis::Z, PI)?;
//! assert!((engine.current_bloch_vector().z - 1.0).abs() < 1e-9);
//! # Ok::<(), blochy_core::BlochyError>(())
//! ```

pub mod bloch_sphere;
pub mod config;
pub mod engine;
pub mod error;
pub mod pulse;
pub mod report;
pub mod rotation;
pub mod state;
pub mod trail;

// Re-exports for convenience
pub use bloch_sphere::{amplitudes_to_bloch, bloch_to_amplitudes, BlochAngles, BlochVector};
pub use config::EngineConfig;
pub use engine::{NamedGate, StateEngine};
pub use error::{BlochyError, IndexKind};
pub use num_complex::Complex64;
pub use pulse::{rabi_curve, PulseAxis, RabiParameters, RabiSample};
pub use report::StateReport;
pub use rotation::{axis_from_spherical, build_rotation_operator, Axis, Operator, UnitAxis};
pub use state::QuantumState;
pub use trail::{PhosphorTrail, TrailEntry, MAX_TRAIL_FRAMES, MIN_TRAIL_FRAMES};

/// Type alias for results in Blochy
pub type Result<T> = std::result::Result<T, BlochyError>;
