//! Canvas 2D grid surface.
//!
//! Draws the grid into an HTML canvas via web-sys. Used by the wasm
//! [`GridView`](crate::viewer::GridView).

mod surface;

pub use surface::CanvasSurface;
