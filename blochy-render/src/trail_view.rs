//! Render-side view of the phosphor trail
//!
//! The engine keeps every trail entry; a renderer only draws the most recent
//! ones. Older segments fade: intensity rises linearly from the oldest
//! visible segment to 1.0 for the newest.

use blochy_core::{BlochVector, StateEngine, TrailEntry};
use serde::Serialize;

/// One drawable trail segment
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrailSegment {
    /// Origin followed by every frame
    pub points: Vec<[f64; 3]>,
    /// Brightness in `(0, 1]`
    pub intensity: f64,
}

/// The last `limit` trail entries of `engine`, oldest first
///
/// Empty when the trail is disabled.
pub fn visible_trail(engine: &StateEngine, limit: usize) -> Vec<TrailSegment> {
    if !engine.is_trail_enabled() {
        return Vec::new();
    }
    segments(engine.trail().visible(limit))
}

/// Visible trail using the engine's configured render length
pub fn default_visible_trail(engine: &StateEngine) -> Vec<TrailSegment> {
    visible_trail(engine, engine.config().render_length())
}

fn segments(entries: &[TrailEntry]) -> Vec<TrailSegment> {
    let count = entries.len();
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| TrailSegment {
            points: entry.points().map(BlochVector::to_array).collect(),
            intensity: (i + 1) as f64 / count as f64,
        })
        .collect()
}

/// Every frame of the visible segments, for plotting as points
pub fn trail_points(segments: &[TrailSegment]) -> Vec<BlochVector> {
    segments
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|&[x, y, z]| BlochVector::new(x, y, z))
        .collect()
}
