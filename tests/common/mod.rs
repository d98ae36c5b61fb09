//! Common test utilities: a probe table with explicit cached geometry and
//! helpers for picking apart recorded draw traces.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use scrollgrid::error::{GridError, Result};
use scrollgrid::layout::CachedLayout;
use scrollgrid::render::{DrawCommand, GridSurface, TextAlign};
use scrollgrid::table::{ColumnWorker, GridRow, GridTable};
use scrollgrid::types::{Rect, ScrollOffset, Size};

pub const SCROLLBAR: f32 = 16.0;

// ============================================================================
// Probe table
// ============================================================================

pub struct ProbeRow {
    pub id: usize,
    pub downed: bool,
}

impl GridRow for ProbeRow {
    fn is_downed(&self) -> bool {
        self.downed
    }
}

/// Column that labels its header `h{index}` and its cells `r{row}c{index}`,
/// optionally failing on one row.
pub struct ProbeColumn {
    pub index: usize,
    pub fail_on_row: Option<usize>,
}

impl ColumnWorker<ProbeTable> for ProbeColumn {
    fn draw_header(
        &self,
        surface: &mut dyn GridSurface,
        rect: Rect,
        _table: &ProbeTable,
    ) -> Result<()> {
        surface.draw_label(rect, &format!("h{}", self.index), TextAlign::Center)
    }

    fn draw_cell(
        &self,
        surface: &mut dyn GridSurface,
        rect: Rect,
        row: &ProbeRow,
        _table: &ProbeTable,
    ) -> Result<()> {
        if self.fail_on_row == Some(row.id) {
            return Err(GridError::Draw(format!(
                "column {} failed on row {}",
                self.index, row.id
            )));
        }
        surface.draw_label(rect, &format!("r{}c{}", row.id, self.index), TextAlign::Left)
    }
}

/// Table whose cached geometry is set directly by the test.
pub struct ProbeTable {
    pub layout: CachedLayout,
    pub widths: Vec<f32>,
    pub heights: Vec<f32>,
    pub columns: Vec<Box<dyn ColumnWorker<ProbeTable>>>,
    pub rows: Vec<ProbeRow>,
    pub scroll: ScrollOffset,
    pub recaches: usize,
    pub scroll_writes: usize,
}

impl ProbeTable {
    /// Natural width is the column sum plus the scrollbar gutter; natural
    /// height is the header plus every row, optionally capped.
    pub fn new(widths: &[f32], heights: &[f32], header_height: f32) -> Self {
        let width = widths.iter().sum::<f32>() + SCROLLBAR;
        let height = header_height + heights.iter().sum::<f32>();
        let columns: Vec<Box<dyn ColumnWorker<ProbeTable>>> = (0..widths.len())
            .map(|index| {
                Box::new(ProbeColumn {
                    index,
                    fail_on_row: None,
                }) as Box<dyn ColumnWorker<ProbeTable>>
            })
            .collect();
        let rows = (0..heights.len())
            .map(|id| ProbeRow { id, downed: false })
            .collect();
        Self {
            layout: CachedLayout {
                size: Size::new(width, height),
                header_height,
                height_no_scrollbar: height,
            },
            widths: widths.to_vec(),
            heights: heights.to_vec(),
            columns,
            rows,
            scroll: ScrollOffset::ZERO,
            recaches: 0,
            scroll_writes: 0,
        }
    }

    pub fn uniform(columns: usize, width: f32, rows: usize, height: f32) -> Self {
        Self::new(&vec![width; columns], &vec![height; rows], 30.0)
    }

    #[must_use]
    pub fn with_max_height(mut self, max: f32) -> Self {
        self.layout.size.height = self.layout.height_no_scrollbar.min(max);
        self
    }

    #[must_use]
    pub fn with_scroll(mut self, x: f32, y: f32) -> Self {
        self.scroll = ScrollOffset::new(x, y);
        self
    }

    #[must_use]
    pub fn failing_on(mut self, column: usize, row: usize) -> Self {
        self.columns[column] = Box::new(ProbeColumn {
            index: column,
            fail_on_row: Some(row),
        });
        self
    }
}

impl GridTable for ProbeTable {
    type Row = ProbeRow;
    type Column = Box<dyn ColumnWorker<ProbeTable>>;

    fn recache_if_dirty(&mut self) {
        self.recaches += 1;
    }

    fn cached_layout(&self) -> CachedLayout {
        self.layout
    }

    fn column_widths(&self) -> &[f32] {
        &self.widths
    }

    fn row_heights(&self) -> &[f32] {
        &self.heights
    }

    fn columns(&self) -> &[Self::Column] {
        &self.columns
    }

    fn rows(&self) -> &[Self::Row] {
        &self.rows
    }

    fn scroll_position(&self) -> ScrollOffset {
        self.scroll
    }

    fn set_scroll_position(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
        self.scroll_writes += 1;
    }
}

// ============================================================================
// Trace helpers
// ============================================================================

/// Text of every label, in draw order.
pub fn labels(commands: &[DrawCommand]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Rect of the label with the given text.
pub fn label_rect(commands: &[DrawCommand], text: &str) -> Rect {
    commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::Label { rect, text: t, .. } if t == text => Some(*rect),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no label {text:?} in trace"))
}

/// Index of the label with the given text.
pub fn label_index(commands: &[DrawCommand], text: &str) -> usize {
    commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Label { text: t, .. } if t == text))
        .unwrap_or_else(|| panic!("no label {text:?} in trace"))
}

/// The (clip, content, offset) of every opened region, in order.
pub fn regions(commands: &[DrawCommand]) -> Vec<(Rect, Rect, ScrollOffset)> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::BeginScrollRegion {
                clip,
                content,
                offset,
                ..
            } => Some((*clip, *content, *offset)),
            _ => None,
        })
        .collect()
}

/// Commands emitted inside the body region (second region), excluding the
/// region markers themselves.
pub fn body_commands(commands: &[DrawCommand]) -> &[DrawCommand] {
    let begins: Vec<usize> = commands
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, DrawCommand::BeginScrollRegion { .. }))
        .map(|(i, _)| i)
        .collect();
    let start = begins[1] + 1;
    let end = commands.len() - 1;
    &commands[start..end]
}
