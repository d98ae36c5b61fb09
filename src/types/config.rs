//! Host-supplied geometry constants.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Default outer window margin (per side) reserved by host window chrome.
pub const DEFAULT_WINDOW_MARGIN: f32 = 18.0;

/// Default gutter reserved for a scrollbar track.
pub const DEFAULT_SCROLLBAR_WIDTH: f32 = 16.0;

/// Screen budget and chrome constants the grid lays itself out against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostMetrics {
    /// Available screen width in logical pixels
    pub screen_width: f32,
    /// Available screen height in logical pixels
    pub screen_height: f32,
    /// Margin on each side of the host window
    #[serde(default = "default_window_margin")]
    pub window_margin: f32,
    /// Fixed scrollbar track allowance
    #[serde(default = "default_scrollbar_width")]
    pub scrollbar_width: f32,
}

fn default_window_margin() -> f32 {
    DEFAULT_WINDOW_MARGIN
}

fn default_scrollbar_width() -> f32 {
    DEFAULT_SCROLLBAR_WIDTH
}

impl HostMetrics {
    /// Metrics for a screen of the given size with default chrome constants.
    pub fn for_screen(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            window_margin: DEFAULT_WINDOW_MARGIN,
            scrollbar_width: DEFAULT_SCROLLBAR_WIDTH,
        }
    }

    /// Reject NaN, infinite and negative values.
    ///
    /// # Errors
    /// Returns `GridError::InvalidMetrics` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("window_margin", self.window_margin),
            ("scrollbar_width", self.scrollbar_width),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::InvalidMetrics(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}
