//! Rendering helpers for the Blochy dashboard
//!
//! Everything here reads engine and grid state; nothing mutates it. A
//! graphical front end draws from the same data these text views use:
//! gate styles, the visible trail and the state equation.

pub mod bloch_ascii;
pub mod circuit_ascii;
pub mod debounce;
pub mod equation;
pub mod style;
pub mod trail_view;

pub use bloch_ascii::{render_bloch, render_bloch_ascii, BlochRenderConfig};
pub use circuit_ascii::{
    render_circuit, render_circuit_ascii, AsciiConfig, AsciiConfigBuilder, RenderStyle,
};
pub use debounce::{RenderDebouncer, DEFAULT_DEBOUNCE};
pub use equation::{angle_summary, fidelity_percent, state_equation};
pub use style::{gate_style, GateStyle, DEFAULT_GATE_COLOR};
pub use trail_view::{default_visible_trail, trail_points, visible_trail, TrailSegment};
