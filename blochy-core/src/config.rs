//! State engine configuration

use crate::trail::DEFAULT_RENDER_LENGTH;
use serde::{Deserialize, Serialize};

/// Configuration for a [`StateEngine`](crate::StateEngine)
///
/// # Example
/// ```
/// use blochy_core::EngineConfig;
///
/// let config = EngineConfig::new().trail_enabled(true).trail_render_length(4);
/// assert!(config.is_trail_enabled());
/// assert_eq!(config.render_length(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Record a phosphor trail entry for each rotation
    trail_enabled: bool,

    /// Number of most recent trail entries exposed for rendering
    trail_render_length: usize,
}

impl EngineConfig {
    /// Create a configuration with defaults
    ///
    /// Defaults:
    /// - trail_enabled: false
    /// - trail_render_length: 10
    pub const fn new() -> Self {
        Self {
            trail_enabled: false,
            trail_render_length: DEFAULT_RENDER_LENGTH,
        }
    }

    /// Enable or disable trail recording at start-up
    pub const fn trail_enabled(mut self, enabled: bool) -> Self {
        self.trail_enabled = enabled;
        self
    }

    /// Set how many trail entries renderers should draw (at least 1)
    pub const fn trail_render_length(mut self, length: usize) -> Self {
        self.trail_render_length = if length == 0 { 1 } else { length };
        self
    }

    /// Whether trail recording starts enabled
    pub const fn is_trail_enabled(&self) -> bool {
        self.trail_enabled
    }

    /// Number of trail entries drawn, at least 1
    pub const fn render_length(&self) -> usize {
        if self.trail_render_length == 0 {
            1
        } else {
            self.trail_render_length
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
