//! Per-frame geometry for the header strip and the body.
//!
//! The grid is drawn as two stacked scroll regions that share one
//! horizontal offset. Both regions clip to `out_width`, the smaller of the
//! table's natural width and the screen minus window margins, while their
//! content is laid out across `view_width`, the natural width minus the
//! scrollbar gutter. When the content is wider than the clip a horizontal
//! scrollbar appears; if the screen has room, the body grows by one track
//! width so the scrollbar does not cover the last row.

use super::ScrollRegion;
use crate::types::{HostMetrics, Rect, Size, ViewportRequest};

/// Cached dimensions the host table reports for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CachedLayout {
    /// Natural size of the whole table (header + rows)
    pub size: Size,
    /// Height of the header strip
    pub header_height: f32,
    /// Table height without any horizontal scrollbar allowance
    pub height_no_scrollbar: f32,
}

/// Rectangles for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    /// Clipped on-screen width shared by header and body
    pub out_width: f32,
    /// Logical content width used for column placement
    pub view_width: f32,
    /// Header strip: horizontal scrolling only
    pub header: ScrollRegion,
    /// Body: horizontal and vertical scrolling
    pub body: ScrollRegion,
    /// Whether the body clip was grown to make room for the scrollbar
    pub scrollbar_expanded: bool,
}

impl FrameLayout {
    /// Derive header and body regions from the anchor, the cached table
    /// dimensions and the host's screen budget.
    pub fn compute(request: &ViewportRequest, cache: &CachedLayout, metrics: &HostMetrics) -> Self {
        let screen = request
            .screen
            .unwrap_or_else(|| Size::new(metrics.screen_width, metrics.screen_height));
        let track = metrics.scrollbar_width;
        let header_height = cache.header_height;

        let out_width = cache
            .size
            .width
            .min(screen.width - metrics.window_margin * 2.0);
        let view_width = cache.size.width - track;

        let header = ScrollRegion::new(
            Rect::new(request.x, request.y, out_width, header_height),
            Rect::new(0.0, 0.0, view_width, header_height),
            false,
        );

        let mut body_clip = Rect::new(
            request.x,
            request.y + header_height,
            out_width,
            cache.size.height - header_height,
        );
        let body_content = Rect::new(
            0.0,
            0.0,
            view_width,
            cache.height_no_scrollbar - header_height,
        );

        // Optimistic about vertical room: other chrome on screen is ignored.
        let scrollbar_expanded =
            view_width > out_width && cache.size.height + track < screen.height;
        if scrollbar_expanded {
            body_clip.height += track;
        }

        Self {
            out_width,
            view_width,
            header,
            body: ScrollRegion::new(body_clip, body_content, true),
            scrollbar_expanded,
        }
    }

    /// Whether the content is wider than the visible clip.
    pub fn needs_horizontal_scrollbar(&self) -> bool {
        self.view_width > self.out_width
    }
}
