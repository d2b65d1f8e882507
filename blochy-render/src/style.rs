//! Display properties of each gate kind

use blochy_circuit::{Arity, GateType};
use serde::Serialize;

/// Colour used for gate kinds without a dedicated colour
pub const DEFAULT_GATE_COLOR: &str = "#666666";

/// Symbol, arity and colour of a gate kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GateStyle {
    pub symbol: &'static str,
    #[serde(skip)]
    pub arity: Arity,
    /// Hex colour, `#rrggbb`
    pub color: &'static str,
}

impl GateStyle {
    /// Colour as RGB bytes
    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex(self.color).unwrap_or((0x66, 0x66, 0x66))
    }
}

/// Style for a gate kind
pub const fn gate_style(gate_type: GateType) -> GateStyle {
    let (symbol, color) = match gate_type {
        GateType::H => ("H", "#00d4ff"),
        GateType::X => ("X", "#9b59b6"),
        GateType::Y => ("Y", "#ffaa00"),
        GateType::Z => ("Z", "#00ff88"),
        GateType::T => ("T", "#ff6b6b"),
        GateType::S => ("S", "#4ecdc4"),
        GateType::CX => ("⊕", "#ff4757"),
        GateType::RX => ("RX", DEFAULT_GATE_COLOR),
        GateType::RY => ("RY", DEFAULT_GATE_COLOR),
        GateType::RZ => ("RZ", DEFAULT_GATE_COLOR),
        GateType::Measure => ("M", DEFAULT_GATE_COLOR),
    };
    GateStyle {
        symbol,
        arity: gate_type.arity(),
        color,
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
