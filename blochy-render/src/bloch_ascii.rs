//! Text projections of the Bloch sphere
//!
//! Two orthographic views of the unit sphere: a side view (XZ plane, |0⟩ at
//! the top) and a top view (XY plane, |+i⟩ at the top). The state point and,
//! optionally, the visible trail are plotted onto both.

use blochy_core::BlochVector;

/// Configuration for Bloch sphere rendering
#[derive(Clone, Debug)]
pub struct BlochRenderConfig {
    /// Radius of the sphere in character columns
    pub size: usize,
    /// Show axis labels
    pub show_labels: bool,
    /// Character for the state point
    pub point_char: char,
    /// Character for trail frames
    pub trail_char: char,
    /// Show numerical coordinates
    pub show_coords: bool,
}

impl Default for BlochRenderConfig {
    fn default() -> Self {
        Self {
            size: 12,
            show_labels: true,
            point_char: '●',
            trail_char: '∘',
            show_coords: true,
        }
    }
}

/// Render a Bloch vector with the default configuration
pub fn render_bloch(vector: &BlochVector) -> String {
    render_bloch_ascii(vector, &[], &BlochRenderConfig::default())
}

/// Render a Bloch vector and trail points as side and top views
pub fn render_bloch_ascii(
    vector: &BlochVector,
    trail: &[BlochVector],
    config: &BlochRenderConfig,
) -> String {
    let mut output = String::from("Bloch Sphere\n");
    if config.show_coords {
        output.push_str(&format!(
            "State: ({:.3}, {:.3}, {:.3})\n",
            vector.x, vector.y, vector.z
        ));
    }
    output.push('\n');

    output.push_str("Side View (XZ plane):\n");
    let side = Plane::new(config.size);
    output.push_str(&side.render(config, ("|0⟩", "|1⟩"), |v| (v.x, v.z), vector, trail));
    output.push('\n');

    output.push_str("Top View (XY plane):\n");
    let top = Plane::new(config.size);
    output.push_str(&top.render(config, ("|+i⟩", "|−i⟩"), |v| (v.x, v.y), vector, trail));

    output
}

/// Character canvas for one projection
///
/// Rows are half as dense as columns so the circle looks round in a terminal.
struct Plane {
    size: usize,
    cells: Vec<Vec<char>>,
}

impl Plane {
    fn new(size: usize) -> Self {
        let size = size.max(2);
        Self {
            size,
            cells: vec![vec![' '; size * 2 + 1]; size + 1],
        }
    }

    /// Map in-plane coordinates in `[-1, 1]` to a `(row, col)` cell
    fn cell(&self, horizontal: f64, vertical: f64) -> (usize, usize) {
        let h = horizontal.clamp(-1.0, 1.0);
        let v = vertical.clamp(-1.0, 1.0);
        let col = ((h + 1.0) * self.size as f64).round() as usize;
        let row = ((1.0 - v) * self.size as f64 / 2.0).round() as usize;
        (row.min(self.size), col.min(self.size * 2))
    }

    fn plot(&mut self, horizontal: f64, vertical: f64, mark: char) {
        let (row, col) = self.cell(horizontal, vertical);
        self.cells[row][col] = mark;
    }

    fn render(
        mut self,
        config: &BlochRenderConfig,
        (top_label, bottom_label): (&str, &str),
        project: impl Fn(&BlochVector) -> (f64, f64),
        vector: &BlochVector,
        trail: &[BlochVector],
    ) -> String {
        for degree in 0..360 {
            let rad = (degree as f64).to_radians();
            self.plot(rad.cos(), rad.sin(), '·');
        }

        let (mid_row, mid_col) = self.cell(0.0, 0.0);
        for row in &mut self.cells {
            row[mid_col] = '│';
        }
        for cell in &mut self.cells[mid_row] {
            *cell = '─';
        }
        self.cells[mid_row][mid_col] = '┼';

        for point in trail {
            let (h, v) = project(point);
            self.plot(h, v, config.trail_char);
        }
        let (h, v) = project(vector);
        self.plot(h, v, config.point_char);

        let mut result = String::new();
        if config.show_labels {
            result.push_str(&format!("{:>width$}{}\n", "", top_label, width = self.size));
        }
        for row in &self.cells {
            result.extend(row.iter());
            result.push('\n');
        }
        if config.show_labels {
            result.push_str(&format!("{:>width$}{}\n", "", bottom_label, width = self.size));
            result.push_str(&format!(
                "|−⟩{:─<width$}|+⟩\n",
                "",
                width = self.size * 2 - 4
            ));
        }
        result
    }
}
