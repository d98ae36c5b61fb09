//! scrollgrid - virtualized table grid with a scroll-synchronized header
//!
//! Lays out and draws a large table inside a fixed on-screen region:
//! - A header strip and a body that share one horizontal scroll offset
//! - Columns placed left to right, the last one stretched to fill the view
//! - Rows culled against the body's scroll offset so only visible rows draw
//! - The body grown by one scrollbar track when a horizontal scrollbar shows
//!
//! Hosts implement [`table::GridTable`] (cached sizes, columns, rows, scroll
//! offset) and [`render::GridSurface`] (scroll regions and draw primitives);
//! [`render::GridRenderer`] does the rest, once per drawn frame.
//!
//! # Usage
//!
//! ```rust
//! use scrollgrid::model::{StaticTable, TableSpec};
//! use scrollgrid::render::{GridRenderer, RecordingSurface};
//! use scrollgrid::types::{HostMetrics, RenderPass, ViewportRequest};
//!
//! let spec = TableSpec::from_json(
//!     r#"{"columns": [{"label": "Name", "width": 120}], "rows": [{"cells": ["Ann"]}]}"#,
//! )?;
//! let mut table = StaticTable::from_spec(spec)?;
//! let renderer = GridRenderer::new(HostMetrics::for_screen(1280.0, 720.0))?;
//! let mut surface = RecordingSurface::new();
//! let stats = renderer.render_frame(
//!     RenderPass::Repaint,
//!     &ViewportRequest::at(0.0, 0.0),
//!     &mut table,
//!     &mut surface,
//! )?;
//! assert_eq!(stats.rows_drawn, 1);
//! # Ok::<(), scrollgrid::error::GridError>(())
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod table;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{GridError, Result};
pub use viewer::GridView;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
