//! Phosphor trail: interpolated rotation frames kept for animation
//!
//! Each rotation applied while the trail is enabled records one
//! [`TrailEntry`]: the Bloch vector before the rotation plus a series of
//! frames sampled at evenly spaced fractions of the rotation angle. Sampling
//! in angle rather than in Cartesian space keeps every frame on the sphere.
//!
//! The trail keeps every entry; renderers draw only [`PhosphorTrail::visible`].

use crate::bloch_sphere::BlochVector;
use crate::rotation::UnitAxis;
use crate::state::QuantumState;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Minimum number of frames per trail entry
pub const MIN_TRAIL_FRAMES: usize = 6;

/// Maximum number of frames per trail entry
///
/// Also covers the longest accepted drive pulse at [`PULSE_FRAME_STEP`].
pub const MAX_TRAIL_FRAMES: usize = 1000;

/// Frames per quarter turn of rotation
pub const FRAMES_PER_QUARTER_TURN: f64 = 10.0;

/// Time step per frame when tracing a drive pulse
pub const PULSE_FRAME_STEP: f64 = 0.01;

/// Default number of entries drawn by renderers
pub const DEFAULT_RENDER_LENGTH: usize = 10;

/// Frame count for a rotation by `angle` radians: `max(6, round(|angle| / (π/2) · 10))`,
/// capped at [`MAX_TRAIL_FRAMES`]
pub fn rotation_frame_count(angle: f64) -> usize {
    clamp_frames(angle.abs() / FRAC_PI_2 * FRAMES_PER_QUARTER_TURN)
}

/// Frame count for a drive pulse lasting `duration`: `max(6, round(duration / 0.01))`,
/// capped at [`MAX_TRAIL_FRAMES`]
pub fn pulse_frame_count(duration: f64) -> usize {
    clamp_frames(duration.abs() / PULSE_FRAME_STEP)
}

fn clamp_frames(scaled: f64) -> usize {
    let scaled = scaled.round();
    if scaled.is_nan() || scaled <= MIN_TRAIL_FRAMES as f64 {
        MIN_TRAIL_FRAMES
    } else if scaled >= MAX_TRAIL_FRAMES as f64 {
        MAX_TRAIL_FRAMES
    } else {
        scaled as usize
    }
}

/// Interpolated path of one rotation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrailEntry {
    /// Bloch vector before the rotation
    pub origin: BlochVector,
    /// Frames at fractions `1/n, 2/n, ..., 1` of the rotation; the last one is
    /// the post-rotation vector
    pub frames: Vec<BlochVector>,
}

impl TrailEntry {
    /// Sample the rotation of `start` about `axis` by `angle` in `frame_count` steps
    ///
    /// `frame_count` is clamped to `[1, MAX_TRAIL_FRAMES]`. The last frame is
    /// always evolved by the full `angle`.
    pub fn sample(start: &QuantumState, axis: &UnitAxis, angle: f64, frame_count: usize) -> Self {
        let frame_count = frame_count.clamp(1, MAX_TRAIL_FRAMES);
        let step = angle / frame_count as f64;

        let frames = (1..=frame_count)
            .map(|i| {
                let partial = if i == frame_count { angle } else { step * i as f64 };
                start.rotated(axis, partial).bloch_vector()
            })
            .collect();

        Self {
            origin: start.bloch_vector(),
            frames,
        }
    }

    /// Origin followed by every frame, in drawing order
    pub fn points(&self) -> impl Iterator<Item = &BlochVector> + '_ {
        std::iter::once(&self.origin).chain(self.frames.iter())
    }

    /// Final vector of the path
    pub fn end(&self) -> &BlochVector {
        self.frames.last().unwrap_or(&self.origin)
    }
}

/// Ordered collection of trail entries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhosphorTrail {
    entries: Vec<TrailEntry>,
}

impl PhosphorTrail {
    /// Create an empty trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn push(&mut self, entry: TrailEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the most recent entry
    pub fn pop(&mut self) -> Option<TrailEntry> {
        self.entries.pop()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries retained
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the trail is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All retained entries, oldest first
    pub fn entries(&self) -> &[TrailEntry] {
        &self.entries
    }

    /// The most recent `limit` entries, oldest first
    pub fn visible(&self, limit: usize) -> &[TrailEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    /// Total number of frames across every entry
    pub fn frame_count(&self) -> usize {
        self.entries.iter().map(|e| e.frames.len()).sum()
    }
}
