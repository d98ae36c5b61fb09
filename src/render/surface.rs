//! Drawing surface trait for pluggable host toolkits.
//!
//! This module defines the `GridSurface` trait: the scroll-region and draw
//! primitives the grid and its column workers issue. Implementations wrap
//! an immediate-mode GUI, a Canvas 2D context, or a recorder for tests.

use serde::{Deserialize, Serialize};

use super::colors::Color;
use crate::error::Result;
use crate::layout::ScrollRegion;
use crate::types::{Rect, ScrollOffset};

/// Horizontal text alignment inside a label rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Primitives a host toolkit provides to the grid.
///
/// Coordinates passed to draw primitives are in the local space of the
/// innermost open scroll region (or screen space when none is open).
pub trait GridSurface {
    /// Open a clipped scroll region.
    ///
    /// The surface may update `offset` in place to apply user interaction
    /// (scrollbar drag, wheel); the grid uses the updated value for the rest
    /// of the region and persists it afterwards.
    ///
    /// # Errors
    /// Returns an error if the region cannot be opened; it is then not open.
    fn begin_scroll_region(&mut self, region: &ScrollRegion, offset: &mut ScrollOffset)
        -> Result<()>;

    /// Close the innermost open scroll region.
    ///
    /// # Errors
    /// Returns an error if no region is open or the toolkit fails to close it.
    fn end_scroll_region(&mut self) -> Result<()>;

    /// Draw a one-pixel horizontal line starting at `(x, y)`.
    ///
    /// # Errors
    /// Propagates toolkit failures.
    fn draw_line_horizontal(&mut self, x: f32, y: f32, length: f32, color: Color) -> Result<()>;

    /// Draw the toolkit's translucent hover highlight over `rect`.
    ///
    /// # Errors
    /// Propagates toolkit failures.
    fn draw_highlight(&mut self, rect: Rect) -> Result<()>;

    /// Fill `rect` with a solid or translucent color.
    ///
    /// # Errors
    /// Propagates toolkit failures.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Draw a single line of text clipped to `rect`.
    ///
    /// # Errors
    /// Propagates toolkit failures.
    fn draw_label(&mut self, rect: Rect, text: &str, align: TextAlign) -> Result<()>;

    /// Whether the pointer is currently over `rect`.
    fn is_pointer_over(&self, rect: Rect) -> bool;
}

/// Run `f` inside a scroll region, closing the region on every exit path.
///
/// `f` receives the surface and the offset as it stands after the surface
/// applied any user interaction. If `f` fails the region is still closed
/// and `f`'s error is returned; a close failure is only reported when `f`
/// succeeded.
///
/// # Errors
/// Returns the first of: the open failure, `f`'s failure, the close failure.
pub fn with_scroll_region<S, R, F>(
    surface: &mut S,
    region: &ScrollRegion,
    offset: &mut ScrollOffset,
    f: F,
) -> Result<R>
where
    S: GridSurface + ?Sized,
    F: FnOnce(&mut S, ScrollOffset) -> Result<R>,
{
    surface.begin_scroll_region(region, offset)?;
    let result = f(surface, *offset);
    let closed = surface.end_scroll_region();
    match (result, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), closed) => {
            tracing::warn!(
                error = %err,
                close_ok = closed.is_ok(),
                "scroll region closed after draw failure"
            );
            Err(err)
        }
    }
}
