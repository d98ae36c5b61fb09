//! A data-driven grid host.
//!
//! `StaticTable` owns plain text columns and rows and implements
//! [`GridTable`] the way an application table would: sizes are cached and
//! only recomputed when something marked the table dirty.

use super::spec::{ColumnSpec, RowSpec, TableSpec};
use crate::error::{GridError, Result};
use crate::layout::CachedLayout;
use crate::render::{GridSurface, TextAlign};
use crate::table::{ColumnWorker, GridRow, GridTable};
use crate::types::{Rect, ScrollOffset, Size, DEFAULT_SCROLLBAR_WIDTH};

/// A column that draws its label in the header and one text per row.
#[derive(Debug, Clone, PartialEq)]
pub struct TextColumn {
    index: usize,
    pub label: String,
    pub width: f32,
    pub align: TextAlign,
}

impl TextColumn {
    /// Position of this column's text in each row's cells.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl ColumnWorker<StaticTable> for TextColumn {
    fn draw_header(
        &self,
        surface: &mut dyn GridSurface,
        rect: Rect,
        _table: &StaticTable,
    ) -> Result<()> {
        surface.draw_label(rect, &self.label, TextAlign::Center)
    }

    fn draw_cell(
        &self,
        surface: &mut dyn GridSurface,
        rect: Rect,
        row: &TextRow,
        _table: &StaticTable,
    ) -> Result<()> {
        match row.cells.get(self.index) {
            Some(text) => surface.draw_label(rect, text, self.align),
            None => Ok(()),
        }
    }
}

/// A row of cell texts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRow {
    pub height: f32,
    pub cells: Vec<String>,
    pub downed: bool,
}

impl GridRow for TextRow {
    fn is_downed(&self) -> bool {
        self.downed
    }
}

impl From<RowSpec> for TextRow {
    fn from(spec: RowSpec) -> Self {
        Self {
            height: spec.height,
            cells: spec.cells,
            downed: spec.downed,
        }
    }
}

fn check_size(what: &str, index: usize, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidTable(format!(
            "{what} {index} has invalid size {value}"
        )))
    }
}

/// Plain in-memory table with lazily recomputed sizes.
#[derive(Debug, Clone)]
pub struct StaticTable {
    columns: Vec<TextColumn>,
    rows: Vec<TextRow>,
    header_height: f32,
    max_height: Option<f32>,
    scrollbar_width: f32,
    column_widths: Vec<f32>,
    row_heights: Vec<f32>,
    cache: CachedLayout,
    scroll: ScrollOffset,
    dirty: bool,
    recache_count: usize,
}

impl StaticTable {
    /// Empty table with the given header height.
    pub fn new(header_height: f32) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            header_height,
            max_height: None,
            scrollbar_width: DEFAULT_SCROLLBAR_WIDTH,
            column_widths: Vec::new(),
            row_heights: Vec::new(),
            cache: CachedLayout::default(),
            scroll: ScrollOffset::ZERO,
            dirty: true,
            recache_count: 0,
        }
    }

    /// Build from a JSON description.
    ///
    /// # Errors
    /// Returns `GridError::InvalidTable` for negative or non-finite sizes and
    /// rows with more cells than there are columns.
    pub fn from_spec(spec: TableSpec) -> Result<Self> {
        check_size("header", 0, spec.header_height)?;
        let mut table = Self::new(spec.header_height);
        if let Some(metrics) = spec.metrics {
            table.scrollbar_width = metrics.scrollbar_width;
        }
        if let Some(max) = spec.max_height {
            check_size("max_height", 0, max)?;
            table.max_height = Some(max);
        }
        for column in spec.columns {
            table.push_column(column)?;
        }
        for row in spec.rows {
            table.push_row(row.into())?;
        }
        table.scroll = spec.scroll;
        Ok(table)
    }

    /// Append a column.
    ///
    /// # Errors
    /// Returns `GridError::InvalidTable` for an invalid width.
    pub fn push_column(&mut self, spec: ColumnSpec) -> Result<()> {
        let index = self.columns.len();
        check_size("column", index, spec.width)?;
        self.columns.push(TextColumn {
            index,
            label: spec.label,
            width: spec.width,
            align: spec.align,
        });
        self.dirty = true;
        Ok(())
    }

    /// Append a row.
    ///
    /// # Errors
    /// Returns `GridError::InvalidTable` for an invalid height or too many
    /// cells.
    pub fn push_row(&mut self, row: TextRow) -> Result<()> {
        let index = self.rows.len();
        check_size("row", index, row.height)?;
        if row.cells.len() > self.columns.len() {
            return Err(GridError::InvalidTable(format!(
                "row {index} has {} cells but the table has {} columns",
                row.cells.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        self.dirty = true;
        Ok(())
    }

    /// Change a column's width.
    ///
    /// # Errors
    /// Returns `GridError::InvalidTable` for an unknown column or bad width.
    pub fn set_column_width(&mut self, index: usize, width: f32) -> Result<()> {
        check_size("column", index, width)?;
        let column = self
            .columns
            .get_mut(index)
            .ok_or_else(|| GridError::InvalidTable(format!("no column {index}")))?;
        column.width = width;
        self.dirty = true;
        Ok(())
    }

    /// Flag a row as downed or recovered. Sizes are unaffected.
    ///
    /// # Errors
    /// Returns `GridError::InvalidTable` for an unknown row.
    pub fn set_downed(&mut self, index: usize, downed: bool) -> Result<()> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| GridError::InvalidTable(format!("no row {index}")))?;
        row.downed = downed;
        Ok(())
    }

    /// Cap the reported table height; `None` reports the full height.
    pub fn set_max_height(&mut self, max_height: Option<f32>) {
        self.max_height = max_height;
        self.dirty = true;
    }

    /// Force the next frame to recompute cached sizes.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// How many times cached sizes were actually recomputed.
    pub fn recache_count(&self) -> usize {
        self.recache_count
    }
}

impl GridTable for StaticTable {
    type Row = TextRow;
    type Column = TextColumn;

    fn recache_if_dirty(&mut self) {
        if !self.dirty {
            return;
        }
        self.column_widths = self.columns.iter().map(|c| c.width).collect();
        self.row_heights = self.rows.iter().map(|r| r.height).collect();

        let width = self.column_widths.iter().sum::<f32>() + self.scrollbar_width;
        let height_no_scrollbar = self.header_height + self.row_heights.iter().sum::<f32>();
        let height = self
            .max_height
            .map_or(height_no_scrollbar, |max| height_no_scrollbar.min(max));

        self.cache = CachedLayout {
            size: Size::new(width, height),
            header_height: self.header_height,
            height_no_scrollbar,
        };
        self.dirty = false;
        self.recache_count += 1;
        tracing::debug!(
            columns = self.columns.len(),
            rows = self.rows.len(),
            width,
            height,
            "table sizes recached"
        );
    }

    fn cached_layout(&self) -> CachedLayout {
        self.cache
    }

    fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    fn row_heights(&self) -> &[f32] {
        &self.row_heights
    }

    fn columns(&self) -> &[TextColumn] {
        &self.columns
    }

    fn rows(&self) -> &[TextRow] {
        &self.rows
    }

    fn scroll_position(&self) -> ScrollOffset {
        self.scroll
    }

    fn set_scroll_position(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
    }
}
