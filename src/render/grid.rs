//! The grid renderer: header pass then body pass, once per drawn frame.

use serde::Serialize;

use super::colors::GridPalette;
use super::surface::{with_scroll_region, GridSurface};
use crate::error::{GridError, Result};
use crate::layout::{column_spans, row_spans, FrameLayout, RowSpan};
use crate::table::{ColumnWorker, GridRow, GridTable};
use crate::types::{HostMetrics, Rect, RenderPass, ScrollOffset, Size, ViewportRequest};

/// What one call to [`GridRenderer::render_frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FrameStats {
    /// True for a measurement-only pass: nothing was drawn or written back
    pub skipped: bool,
    /// Columns drawn in the header and in each visible row
    pub columns: usize,
    /// Rows whose cells were drawn
    pub rows_drawn: usize,
    /// Rows skipped because they were outside the body clip
    pub rows_culled: usize,
    /// Whether the body was grown to make room for the scrollbar
    pub scrollbar_expanded: bool,
}

/// Draws a [`GridTable`] onto a [`GridSurface`].
///
/// The renderer holds only validated host metrics and a palette; all
/// per-frame state lives in the table (cached sizes, scroll offset).
#[derive(Debug, Clone)]
pub struct GridRenderer {
    metrics: HostMetrics,
    palette: GridPalette,
}

impl GridRenderer {
    /// Create a renderer with the default palette.
    ///
    /// # Errors
    /// Returns `GridError::InvalidMetrics` if any metric is NaN, infinite or
    /// negative.
    pub fn new(metrics: HostMetrics) -> Result<Self> {
        metrics.validate()?;
        Ok(Self {
            metrics,
            palette: GridPalette::default(),
        })
    }

    /// Builder that requires every host metric to be supplied explicitly.
    pub fn builder() -> GridRendererBuilder {
        GridRendererBuilder::default()
    }

    pub fn metrics(&self) -> &HostMetrics {
        &self.metrics
    }

    pub fn palette(&self) -> &GridPalette {
        &self.palette
    }

    /// Update the available screen size (e.g. on window resize).
    ///
    /// # Errors
    /// Returns `GridError::InvalidMetrics` and leaves the renderer unchanged
    /// if the new size is invalid.
    pub fn set_screen_size(&mut self, width: f32, height: f32) -> Result<()> {
        let metrics = HostMetrics {
            screen_width: width,
            screen_height: height,
            ..self.metrics
        };
        metrics.validate()?;
        self.metrics = metrics;
        Ok(())
    }

    /// Frame geometry for the table's current cache, without drawing.
    ///
    /// Does not recache; callers that need fresh values call
    /// [`GridTable::recache_if_dirty`] first.
    pub fn layout<T: GridTable + ?Sized>(&self, request: &ViewportRequest, table: &T) -> FrameLayout {
        FrameLayout::compute(request, &table.cached_layout(), &self.metrics)
    }

    /// Render one frame.
    ///
    /// On [`RenderPass::Layout`] this returns immediately without touching
    /// the table or the surface. Otherwise it recaches, draws the header
    /// strip, draws the visible rows, and finally stores the (possibly
    /// user-dragged) scroll offset back into the table. If any draw fails the
    /// open region is closed, the error is returned and the stored offset is
    /// left as it was.
    ///
    /// # Errors
    /// Propagates surface and column worker failures.
    pub fn render_frame<T, S>(
        &self,
        pass: RenderPass,
        request: &ViewportRequest,
        table: &mut T,
        surface: &mut S,
    ) -> Result<FrameStats>
    where
        T: GridTable,
        S: GridSurface,
    {
        if pass.is_layout() {
            tracing::debug!("layout pass, grid render skipped");
            return Ok(FrameStats {
                skipped: true,
                ..FrameStats::default()
            });
        }

        let _span = tracing::debug_span!(
            "render_frame",
            rows = table.rows().len(),
            columns = table.columns().len()
        )
        .entered();

        table.recache_if_dirty();

        let frame = self.layout(request, &*table);
        let mut offset = table.scroll_position();

        let columns = self.draw_header(surface, &frame, offset, &*table)?;
        let (rows_drawn, rows_culled) = self.draw_body(surface, &frame, &mut offset, &*table)?;

        tracing::trace!(
            rows_drawn,
            rows_culled,
            scroll_x = offset.x,
            scroll_y = offset.y,
            "body pass complete"
        );
        table.set_scroll_position(offset);

        Ok(FrameStats {
            skipped: false,
            columns,
            rows_drawn,
            rows_culled,
            scrollbar_expanded: frame.scrollbar_expanded,
        })
    }

    /// Header strip: columns left to right, tracking the body's horizontal
    /// offset only. Offset changes made inside the header are discarded.
    fn draw_header<T, S>(
        &self,
        surface: &mut S,
        frame: &FrameLayout,
        body_offset: ScrollOffset,
        table: &T,
    ) -> Result<usize>
    where
        T: GridTable,
        S: GridSurface,
    {
        let columns = table.columns();
        let widths = matched_prefix(table.column_widths(), columns.len(), "column");
        let height = frame.header.content.height.trunc();
        let mut header_offset = body_offset.horizontal_only();

        with_scroll_region(surface, &frame.header, &mut header_offset, |surface, _| {
            let mut drawn = 0;
            for (span, column) in column_spans(widths, frame.view_width).zip(columns) {
                let rect = Rect::new(span.x, 0.0, span.width, height);
                column.draw_header(&mut *surface, rect, table)?;
                drawn += 1;
            }
            tracing::trace!(columns = drawn, "header pass complete");
            Ok(drawn)
        })
    }

    /// Body: visible rows top to bottom, each row's cells left to right.
    fn draw_body<T, S>(
        &self,
        surface: &mut S,
        frame: &FrameLayout,
        offset: &mut ScrollOffset,
        table: &T,
    ) -> Result<(usize, usize)>
    where
        T: GridTable,
        S: GridSurface,
    {
        let rows = table.rows();
        let heights = matched_prefix(table.row_heights(), rows.len(), "row");
        let clip_height = frame.body.clip.height;

        with_scroll_region(surface, &frame.body, offset, |surface, offset| {
            let mut drawn = 0;
            let mut culled = 0;
            for (span, row) in row_spans(heights, offset.y, clip_height).zip(rows) {
                if !span.visible {
                    culled += 1;
                    continue;
                }
                self.draw_row(surface, frame, span, row, table)?;
                drawn += 1;
            }
            Ok((drawn, culled))
        })
    }

    /// One visible row. Draw order is fixed: separator, hover highlight,
    /// cells, then the downed overlay on top.
    fn draw_row<T, S>(
        &self,
        surface: &mut S,
        frame: &FrameLayout,
        span: RowSpan,
        row: &T::Row,
        table: &T,
    ) -> Result<()>
    where
        T: GridTable,
        S: GridSurface,
    {
        let view_width = frame.view_width;
        surface.draw_line_horizontal(0.0, span.y, view_width, self.palette.separator)?;

        let row_rect = Rect::new(0.0, span.y, view_width, span.height);
        if surface.is_pointer_over(row_rect) {
            surface.draw_highlight(row_rect)?;
        }

        let columns = table.columns();
        let widths = matched_prefix(table.column_widths(), columns.len(), "column");
        for (col, column) in column_spans(widths, view_width).zip(columns) {
            let rect = Rect::new(col.x, span.y, col.width, span.height);
            column.draw_cell(&mut *surface, rect, row, table)?;
        }

        if row.is_downed() {
            surface.draw_line_horizontal(0.0, row_rect.center_y(), view_width, self.palette.downed)?;
        }
        Ok(())
    }
}

/// The first `count` cached sizes, so the last drawn column is the one that
/// stretches even when the cache is longer than the entity list.
fn matched_prefix<'a>(sizes: &'a [f32], count: usize, what: &str) -> &'a [f32] {
    if sizes.len() != count {
        tracing::warn!(
            cached = sizes.len(),
            entities = count,
            "{what} size cache does not match {what} count"
        );
    }
    sizes.get(..count).unwrap_or(sizes)
}

/// Builds a [`GridRenderer`], failing fast on any missing host metric.
#[derive(Debug, Clone, Default)]
pub struct GridRendererBuilder {
    screen: Option<Size>,
    window_margin: Option<f32>,
    scrollbar_width: Option<f32>,
    palette: Option<GridPalette>,
}

impl GridRendererBuilder {
    #[must_use]
    pub fn screen_size(mut self, width: f32, height: f32) -> Self {
        self.screen = Some(Size::new(width, height));
        self
    }

    #[must_use]
    pub fn window_margin(mut self, margin: f32) -> Self {
        self.window_margin = Some(margin);
        self
    }

    #[must_use]
    pub fn scrollbar_width(mut self, width: f32) -> Self {
        self.scrollbar_width = Some(width);
        self
    }

    #[must_use]
    pub fn metrics(self, metrics: HostMetrics) -> Self {
        self.screen_size(metrics.screen_width, metrics.screen_height)
            .window_margin(metrics.window_margin)
            .scrollbar_width(metrics.scrollbar_width)
    }

    #[must_use]
    pub fn palette(mut self, palette: GridPalette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    /// `GridError::MissingCapability` for the first absent metric,
    /// `GridError::InvalidMetrics` for unusable values.
    pub fn build(self) -> Result<GridRenderer> {
        let screen = self
            .screen
            .ok_or(GridError::MissingCapability("screen_size"))?;
        let window_margin = self
            .window_margin
            .ok_or(GridError::MissingCapability("window_margin"))?;
        let scrollbar_width = self
            .scrollbar_width
            .ok_or(GridError::MissingCapability("scrollbar_width"))?;

        let metrics = HostMetrics {
            screen_width: screen.width,
            screen_height: screen.height,
            window_margin,
            scrollbar_width,
        };
        let mut renderer = GridRenderer::new(metrics)?;
        if let Some(palette) = self.palette {
            renderer.palette = palette;
        }
        Ok(renderer)
    }
}
