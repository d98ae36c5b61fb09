//! Column and row placement inside a scroll region's content space.
//!
//! Both axes snap to whole pixels by truncating cached sizes. Horizontally
//! the last column absorbs whatever remains of the view width, so columns
//! always tile `[0, view_width)` with no gap or overlap. Vertically each row
//! takes exactly its truncated height and rows outside the clip are flagged
//! as culled without disturbing the positions of later rows.

/// Horizontal extent of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpan {
    /// Column index
    pub index: usize,
    /// Left edge in content space
    pub x: f32,
    /// Width in whole pixels
    pub width: f32,
}

/// Iterator over column spans. See [`column_spans`].
pub struct ColumnSpans<'a> {
    widths: std::iter::Enumerate<std::slice::Iter<'a, f32>>,
    count: usize,
    view_width: f32,
    cursor: f32,
}

/// Lay out columns left to right across `view_width`.
///
/// Every column but the last uses its cached width truncated to whole
/// pixels; the last column gets `view_width - x` (also truncated), even if
/// that differs from its cached width.
pub fn column_spans(widths: &[f32], view_width: f32) -> ColumnSpans<'_> {
    ColumnSpans {
        widths: widths.iter().enumerate(),
        count: widths.len(),
        view_width,
        cursor: 0.0,
    }
}

impl Iterator for ColumnSpans<'_> {
    type Item = ColumnSpan;

    fn next(&mut self) -> Option<ColumnSpan> {
        let (index, &cached) = self.widths.next()?;
        let width = if index + 1 == self.count {
            (self.view_width - self.cursor).trunc()
        } else {
            cached.trunc()
        };
        let span = ColumnSpan {
            index,
            x: self.cursor,
            width,
        };
        self.cursor += width;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.widths.size_hint()
    }
}

impl ExactSizeIterator for ColumnSpans<'_> {}

/// Vertical extent of one row plus its visibility for the current offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpan {
    /// Row index
    pub index: usize,
    /// Top edge in content space
    pub y: f32,
    /// Height in whole pixels
    pub height: f32,
    /// False when the row lies entirely above or below the clip
    pub visible: bool,
}

/// Whether a row lies entirely outside the visible body.
///
/// A row is culled when it ends above the top of the clip
/// (`top - scroll_y + height < 0`) or starts below its bottom
/// (`top - scroll_y > clip_height`). Touching an edge counts as visible.
pub fn is_row_culled(top: f32, height: f32, scroll_y: f32, clip_height: f32) -> bool {
    let screen_top = top - scroll_y;
    screen_top + height < 0.0 || screen_top > clip_height
}

/// Iterator over row spans. See [`row_spans`].
pub struct RowSpans<'a> {
    heights: std::iter::Enumerate<std::slice::Iter<'a, f32>>,
    scroll_y: f32,
    clip_height: f32,
    cursor: f32,
}

/// Lay out rows top to bottom and flag those outside the clip.
///
/// Culled rows still advance the cursor by their full height.
pub fn row_spans(heights: &[f32], scroll_y: f32, clip_height: f32) -> RowSpans<'_> {
    RowSpans {
        heights: heights.iter().enumerate(),
        scroll_y,
        clip_height,
        cursor: 0.0,
    }
}

impl Iterator for RowSpans<'_> {
    type Item = RowSpan;

    fn next(&mut self) -> Option<RowSpan> {
        let (index, &cached) = self.heights.next()?;
        let height = cached.trunc();
        let y = self.cursor;
        self.cursor += height;
        Some(RowSpan {
            index,
            y,
            height,
            visible: !is_row_culled(y, height, self.scroll_y, self.clip_height),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heights.size_hint()
    }
}

impl ExactSizeIterator for RowSpans<'_> {}
