//! Host contract for the grid.
//!
//! The grid owns no entities. A host implements [`GridTable`] to expose its
//! cached layout, its ordered columns and rows, and the scroll offset it
//! persists between frames. Columns are capability objects implementing
//! [`ColumnWorker`]; the grid only positions them and calls them in order.

use crate::error::Result;
use crate::layout::CachedLayout;
use crate::render::GridSurface;
use crate::types::{Rect, ScrollOffset};

/// A row entity as seen by the grid.
pub trait GridRow {
    /// Rows flagged as downed get a red strike-through overlay.
    fn is_downed(&self) -> bool {
        false
    }
}

/// Draws one column's header and cells.
///
/// Rectangles are in the local content space of the enclosing scroll
/// region. Errors propagate to the host after the region is closed.
pub trait ColumnWorker<T: GridTable + ?Sized> {
    /// Draw the column header into `rect`.
    ///
    /// # Errors
    /// Any failure aborts the current frame.
    fn draw_header(&self, surface: &mut dyn GridSurface, rect: Rect, table: &T) -> Result<()>;

    /// Draw this column's cell for `row` into `rect`.
    ///
    /// # Errors
    /// Any failure aborts the current frame.
    fn draw_cell(
        &self,
        surface: &mut dyn GridSurface,
        rect: Rect,
        row: &T::Row,
        table: &T,
    ) -> Result<()>;
}

impl<T, C> ColumnWorker<T> for Box<C>
where
    T: GridTable + ?Sized,
    C: ColumnWorker<T> + ?Sized,
{
    fn draw_header(&self, surface: &mut dyn GridSurface, rect: Rect, table: &T) -> Result<()> {
        (**self).draw_header(surface, rect, table)
    }

    fn draw_cell(
        &self,
        surface: &mut dyn GridSurface,
        rect: Rect,
        row: &T::Row,
        table: &T,
    ) -> Result<()> {
        (**self).draw_cell(surface, rect, row, table)
    }
}

/// Cached table state the grid reads each frame.
///
/// Everything except [`recache_if_dirty`](GridTable::recache_if_dirty) and
/// [`set_scroll_position`](GridTable::set_scroll_position) is read-only from
/// the grid's point of view.
pub trait GridTable {
    type Row: GridRow;
    type Column: ColumnWorker<Self>;

    /// Refresh cached sizes if anything changed. Must be idempotent; the grid
    /// calls it once per drawn frame before reading any cached value.
    fn recache_if_dirty(&mut self);

    /// Natural size, header height and scrollbar-free height.
    fn cached_layout(&self) -> CachedLayout;

    /// Cached width per column, in column order.
    fn column_widths(&self) -> &[f32];

    /// Cached height per row, in row order.
    fn row_heights(&self) -> &[f32];

    /// Columns, left to right.
    fn columns(&self) -> &[Self::Column];

    /// Rows, top to bottom.
    fn rows(&self) -> &[Self::Row];

    /// Body scroll offset persisted from the previous frame.
    fn scroll_position(&self) -> ScrollOffset;

    /// Persist the body scroll offset for the next frame.
    fn set_scroll_position(&mut self, offset: ScrollOffset);
}
