//! Grid rendering with pluggable surfaces.
//!
//! This module provides:
//! - The `GridSurface` trait host toolkits implement
//! - `GridRenderer`, which runs the header and body passes
//! - A recording surface for traces and tests
//! - A Canvas 2D surface for the browser
//! - Overlay colors

pub mod canvas;
pub mod colors;
mod grid;
pub mod recording;
mod surface;

pub use canvas::CanvasSurface;
pub use colors::{Color, GridPalette};
pub use grid::{FrameStats, GridRenderer, GridRendererBuilder};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{with_scroll_region, GridSurface, TextAlign};
