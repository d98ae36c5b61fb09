//! Per-call inputs to the render entry point.

use serde::{Deserialize, Serialize};

use super::Size;

/// Which kind of host callback is driving this call.
///
/// Immediate-mode hosts invoke their GUI callback once to measure and once
/// to draw; the grid only does work on the drawing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPass {
    /// Measurement-only pass. Nothing is recached, drawn or written back.
    Layout,
    /// Real drawing pass.
    #[default]
    Repaint,
}

impl RenderPass {
    pub fn is_layout(self) -> bool {
        matches!(self, Self::Layout)
    }
}

/// Where the grid is anchored this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportRequest {
    /// Screen x of the grid's top-left corner
    pub x: f32,
    /// Screen y of the grid's top-left corner
    pub y: f32,
    /// Screen budget override for this frame (e.g. after a window resize).
    /// Falls back to the renderer's configured screen size.
    #[serde(default)]
    pub screen: Option<Size>,
}

impl ViewportRequest {
    pub const fn at(x: f32, y: f32) -> Self {
        Self { x, y, screen: None }
    }

    #[must_use]
    pub fn with_screen(mut self, width: f32, height: f32) -> Self {
        self.screen = Some(Size::new(width, height));
        self
    }
}
