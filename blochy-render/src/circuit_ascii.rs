//! ASCII circuit diagram for a placement grid
//!
//! One wire per qubit and one column per time step. Columns keep the grid's
//! positions, so empty steps stay visible as bare wire.
//!
//! ```text
//! q0: ─[H]──●──────────[M]──────
//! q1: ──────⊕──[H]─────[M]──────
//! q2: ─────────────[X]─[M]──────
//! ```

use crate::style::gate_style;
use blochy_circuit::{CircuitGrid, GateType, PlacedGate};

/// Character set used for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Unicode box-drawing characters
    #[default]
    Unicode,
    /// ASCII-only characters
    Ascii,
}

/// Configuration for the circuit diagram
#[derive(Debug, Clone)]
pub struct AsciiConfig {
    /// Show qubit labels (q0:, q1:, ...)
    pub show_labels: bool,
    pub style: RenderStyle,
    /// Prefix the diagram with the occupied depth
    pub show_depth: bool,
    /// Custom label format; `{n}` is replaced by the qubit index
    pub label_format: Option<String>,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            show_labels: true,
            style: RenderStyle::Unicode,
            show_depth: false,
            label_format: None,
        }
    }
}

impl AsciiConfig {
    pub fn builder() -> AsciiConfigBuilder {
        AsciiConfigBuilder::default()
    }

    /// ASCII-only configuration
    pub fn ascii_only() -> Self {
        Self {
            style: RenderStyle::Ascii,
            ..Default::default()
        }
    }
}

/// Builder for [`AsciiConfig`]
#[derive(Debug, Clone, Default)]
pub struct AsciiConfigBuilder {
    config: AsciiConfig,
}

impl AsciiConfigBuilder {
    pub fn show_labels(mut self, show: bool) -> Self {
        self.config.show_labels = show;
        self
    }

    pub fn style(mut self, style: RenderStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn show_depth(mut self, show: bool) -> Self {
        self.config.show_depth = show;
        self
    }

    pub fn label_format(mut self, format: impl Into<String>) -> Self {
        self.config.label_format = Some(format.into());
        self
    }

    pub fn build(self) -> AsciiConfig {
        self.config
    }
}

struct Symbols {
    control: &'static str,
    target: &'static str,
    wire_h: char,
    wire_v: &'static str,
}

impl Symbols {
    const UNICODE: Self = Self {
        control: "●",
        target: "⊕",
        wire_h: '─',
        wire_v: "│",
    };

    const ASCII: Self = Self {
        control: "@",
        target: "(+)",
        wire_h: '-',
        wire_v: "|",
    };

    fn from_style(style: RenderStyle) -> &'static Self {
        match style {
            RenderStyle::Unicode => &Self::UNICODE,
            RenderStyle::Ascii => &Self::ASCII,
        }
    }
}

/// What one qubit shows in one column
#[derive(Clone, Debug, PartialEq)]
enum Slot {
    Empty,
    Boxed(&'static str),
    Control,
    Target,
    /// Vertical link passing through an untouched qubit
    Link,
}

const MIN_SLOT_WIDTH: usize = 3;

/// Render a grid with the default configuration
pub fn render_circuit(grid: &CircuitGrid) -> String {
    render_circuit_ascii(grid, &AsciiConfig::default())
}

/// Render a grid as a text diagram
pub fn render_circuit_ascii(grid: &CircuitGrid, config: &AsciiConfig) -> String {
    let symbols = Symbols::from_style(config.style);
    let spec = grid.spec();
    let columns: Vec<Vec<Slot>> = (0..spec.depth())
        .map(|position| column_slots(grid.gates_at(position), spec.qubit_count()))
        .collect();

    let labels: Vec<String> = (0..spec.qubit_count())
        .map(|q| if config.show_labels { format_label(config, q) } else { String::new() })
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut result = String::new();
    if config.show_depth {
        let depth = grid.gates().iter().map(|g| g.position() + 1).max().unwrap_or(0);
        result.push_str(&format!("// Depth: {}\n", depth));
    }

    let widths: Vec<usize> = columns
        .iter()
        .map(|col| {
            col.iter()
                .map(|slot| slot_text(slot, symbols).chars().count())
                .max()
                .unwrap_or(0)
                .max(MIN_SLOT_WIDTH)
        })
        .collect();

    let lines: Vec<String> = (0..spec.qubit_count())
        .map(|q| {
            let mut line = format!("{:>width$}", labels[q], width = label_width);
            line.push(symbols.wire_h);
            for (col, &width) in columns.iter().zip(&widths) {
                line.push_str(&pad_center(&slot_text(&col[q], symbols), width, symbols.wire_h));
                line.push(symbols.wire_h);
            }
            line.push(symbols.wire_h);
            line
        })
        .collect();

    result.push_str(&lines.join("\n"));
    result
}

fn format_label(config: &AsciiConfig, qubit: usize) -> String {
    match &config.label_format {
        Some(fmt) => fmt.replace("{n}", &qubit.to_string()),
        None => format!("q{}: ", qubit),
    }
}

fn column_slots<'a>(gates: impl Iterator<Item = &'a PlacedGate>, qubit_count: usize) -> Vec<Slot> {
    let mut slots = vec![Slot::Empty; qubit_count];

    for gate in gates {
        match gate.gate_type() {
            GateType::CX => {
                if let (Some(control), Some(target)) = (gate.control(), gate.target()) {
                    slots[control] = Slot::Control;
                    slots[target] = Slot::Target;
                }
            }
            other => {
                for &q in gate.qubits() {
                    slots[q] = Slot::Boxed(gate_style(other).symbol);
                }
            }
        }

        if gate.qubits().len() > 1 {
            let (lo, hi) = gate.span();
            for slot in &mut slots[lo + 1..hi] {
                if *slot == Slot::Empty {
                    *slot = Slot::Link;
                }
            }
        }
    }

    slots
}

fn slot_text(slot: &Slot, symbols: &Symbols) -> String {
    match slot {
        Slot::Empty => String::new(),
        Slot::Boxed(symbol) => format!("[{}]", symbol),
        Slot::Control => symbols.control.to_string(),
        Slot::Target => symbols.target.to_string(),
        Slot::Link => symbols.wire_v.to_string(),
    }
}

fn pad_center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let total = width.saturating_sub(len);
    let left = total / 2;
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(total - left));
    out
}
