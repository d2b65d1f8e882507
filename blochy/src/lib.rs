//! Blochy: a Bloch sphere widget and circuit placement grid
//!
//! The [`Dashboard`] owns one [`StateEngine`] and one [`CircuitGrid`] and
//! turns user-input events into their operations. The member crates hold
//! the pieces:
//!
//! - `blochy-core`: state, rotations, history and phosphor trail
//! - `blochy-circuit`: placement grid and backend snapshots
//! - `blochy-render`: styles, text views and render debouncing
//!
//! # Example
//! ```
//! use blochy::{Dashboard, DashboardEvent, NamedGate, Outcome};
//!
//! let mut dashboard = Dashboard::default();
//! dashboard.handle(DashboardEvent::GateButton(NamedGate::H))?;
//! dashboard.handle(DashboardEvent::GateButton(NamedGate::Z))?;
//! let outcome = dashboard.handle(DashboardEvent::Undo)?;
//! assert!(matches!(outcome, Outcome::StateChanged { bloch } if (bloch.x - 1.0).abs() < 1e-9));
//! # Ok::<(), blochy::BlochyError>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod event;

pub use blochy_circuit::{BackendSnapshot, CircuitGrid, GateId, GateType, LoadReport};
pub use blochy_core::{Axis, BlochVector, BlochyError, NamedGate, PulseAxis, Result, StateEngine};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use event::{DashboardEvent, IgnoreReason, Outcome};
