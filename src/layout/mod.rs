//! Layout engine for the two-region grid.
//!
//! This module handles:
//! - Header and body clip/content rectangles for a frame
//! - Conditional body growth to make room for a horizontal scrollbar
//! - Column placement with last-column stretch
//! - Row placement and visibility culling against the scroll offset

mod frame_layout;
mod region;
mod spans;

pub use frame_layout::{CachedLayout, FrameLayout};
pub use region::{pointer_in_regions, ScrollRegion};
pub use spans::{
    column_spans, is_row_culled, row_spans, ColumnSpan, ColumnSpans, RowSpan, RowSpans,
};
