//! Widget controller tying the engine, the grid and rendering together
//!
//! One [`Dashboard`] replaces the page-global state of a single widget. Every
//! control funnels through [`Dashboard::handle`]; a successful visible change
//! marks the render debouncer dirty, and the front end draws whenever
//! [`Dashboard::poll_render`] says so.

use crate::config::DashboardConfig;
use crate::event::{DashboardEvent, IgnoreReason, Outcome};
use blochy_circuit::{cell_from_pointer, CircuitGrid, GateType};
use blochy_core::{NamedGate, PulseAxis, Result, StateEngine, StateReport};
use blochy_render::{
    angle_summary, fidelity_percent, render_bloch_ascii, render_circuit_ascii, state_equation,
    default_visible_trail, trail_points, AsciiConfig, BlochRenderConfig, RenderDebouncer,
};
use std::time::Instant;
use tracing::{debug, info};

/// Controller for one Bloch sphere and one circuit grid
#[derive(Debug)]
pub struct Dashboard {
    engine: StateEngine,
    grid: CircuitGrid,
    selected_gate: Option<GateType>,
    debouncer: RenderDebouncer,
    config: DashboardConfig,
}

impl Dashboard {
    /// Create a dashboard from a configuration
    pub fn new(config: DashboardConfig) -> Self {
        let grid = if config.load_demo {
            CircuitGrid::demo()
        } else {
            CircuitGrid::with_config(config.grid)
        };
        info!(
            qubits = grid.spec().qubit_count(),
            depth = grid.spec().depth(),
            gates = grid.len(),
            "dashboard ready"
        );

        let mut debouncer = RenderDebouncer::new(config.debounce());
        debouncer.request();

        Self {
            engine: StateEngine::with_config(config.engine),
            grid,
            selected_gate: None,
            debouncer,
            config,
        }
    }

    pub fn engine(&self) -> &StateEngine {
        &self.engine
    }

    pub fn grid(&self) -> &CircuitGrid {
        &self.grid
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Gate kind placed by grid clicks
    pub fn selected_gate(&self) -> Option<GateType> {
        self.selected_gate
    }

    /// Apply one input event
    ///
    /// # Errors
    /// Propagates engine and grid validation errors; nothing changes on error.
    pub fn handle(&mut self, event: DashboardEvent) -> Result<Outcome> {
        debug!(?event, "handling event");
        let outcome = match event {
            DashboardEvent::GateButton(gate) => self.gate_button(gate),
            DashboardEvent::AxisRotation { axis, degrees } => {
                self.engine.apply_rotation(axis, degrees.to_radians())?;
                self.state_changed()
            }
            DashboardEvent::CustomRotation {
                polar_deg,
                azimuth_deg,
                rotation_deg,
            } => {
                self.engine.apply_custom_axis_rotation(
                    polar_deg.to_radians(),
                    azimuth_deg.to_radians(),
                    rotation_deg.to_radians(),
                )?;
                self.state_changed()
            }
            DashboardEvent::Pulse { axis, duration } => self.pulse(axis, duration)?,
            DashboardEvent::Undo => {
                if self.engine.undo() {
                    self.state_changed()
                } else {
                    Outcome::Ignored {
                        reason: IgnoreReason::NothingToUndo,
                    }
                }
            }
            DashboardEvent::Restart => {
                self.engine.initialize();
                self.state_changed()
            }
            DashboardEvent::ToggleTrail => {
                let enabled = !self.engine.is_trail_enabled();
                self.engine.set_trail_enabled(enabled);
                Outcome::TrailToggled { enabled }
            }
            DashboardEvent::ClearTrail => {
                self.engine.clear_trail();
                Outcome::TrailCleared
            }
            DashboardEvent::SelectGate(gate) => {
                self.selected_gate = Some(gate);
                Outcome::GateSelected { gate }
            }
            DashboardEvent::GridClick { fx, fy } => self.grid_click(fx, fy)?,
            DashboardEvent::ClearCircuit => {
                self.grid.clear();
                Outcome::CircuitCleared
            }
            DashboardEvent::Resize { qubits, depth } => Outcome::Resized {
                dropped: self.grid.resize(qubits, depth),
            },
            DashboardEvent::BackendSnapshot(snapshot) => Outcome::SnapshotLoaded {
                report: self.grid.load_snapshot(&snapshot),
            },
        };

        if outcome.is_visible_change() {
            self.debouncer.request();
        }
        Ok(outcome)
    }

    fn gate_button(&mut self, gate: NamedGate) -> Outcome {
        self.engine.apply_named_gate(gate);
        self.state_changed()
    }

    fn pulse(&mut self, axis: PulseAxis, duration: f64) -> Result<Outcome> {
        self.engine.apply_pulse(axis, duration)?;
        Ok(self.state_changed())
    }

    fn grid_click(&mut self, fx: f64, fy: f64) -> Result<Outcome> {
        let Some(gate) = self.selected_gate else {
            return Ok(Outcome::Ignored {
                reason: IgnoreReason::NoGateSelected,
            });
        };
        let Some(cell) = cell_from_pointer(fx, fy, &self.grid.spec()) else {
            return Ok(Outcome::Ignored {
                reason: IgnoreReason::OffGrid,
            });
        };

        // Measurement from a click covers the clicked qubit only
        let id = self.grid.place_gate(gate, &[cell.qubit], cell.position)?;
        Ok(Outcome::GatePlaced { id })
    }

    fn state_changed(&self) -> Outcome {
        Outcome::StateChanged {
            bloch: self.engine.current_bloch_vector(),
        }
    }

    /// Whether a redraw is due at `now`; consumes the pending request when it is
    pub fn poll_render_at(&mut self, now: Instant) -> bool {
        self.debouncer.poll_at(now)
    }

    /// [`poll_render_at`](Self::poll_render_at) with the current time
    pub fn poll_render(&mut self) -> bool {
        self.debouncer.poll()
    }

    /// Serializable summary of the sphere
    pub fn report(&self) -> StateReport {
        self.engine.report()
    }

    /// Full text view: state summary, sphere projections and circuit
    pub fn render_text(&self) -> String {
        let bloch = self.engine.current_bloch_vector();
        let segments = default_visible_trail(&self.engine);

        let mut out = String::new();
        out.push_str(&state_equation(self.engine.current_state()));
        out.push('\n');
        out.push_str(&angle_summary(&bloch));
        out.push_str(&format!(", fidelity {}\n\n", fidelity_percent(&bloch)));
        out.push_str(&render_bloch_ascii(
            &bloch,
            &trail_points(&segments),
            &BlochRenderConfig::default(),
        ));
        out.push('\n');
        out.push_str(&render_circuit_ascii(&self.grid, &AsciiConfig::default()));
        out.push('\n');
        out
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
