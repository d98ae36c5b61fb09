//! Scroll region geometry: an outer clip rect and the inner content it scrolls.

use crate::types::{Rect, ScrollOffset};

/// A clipped, scrollable region as handed to a drawing surface.
///
/// `clip` is in the parent (screen) space; `content` is in the region's own
/// local space and is normally anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollRegion {
    /// Visible on-screen rectangle
    pub clip: Rect,
    /// Logical content rectangle scrolled inside `clip`
    pub content: Rect,
    /// Whether the region scrolls vertically as well as horizontally
    pub allow_vertical: bool,
}

impl ScrollRegion {
    pub const fn new(clip: Rect, content: Rect, allow_vertical: bool) -> Self {
        Self {
            clip,
            content,
            allow_vertical,
        }
    }

    /// Largest horizontal offset that still keeps content under the clip.
    pub fn max_scroll_x(&self) -> f32 {
        (self.content.width - self.clip.width).max(0.0)
    }

    /// Largest vertical offset; always 0 for horizontal-only regions.
    pub fn max_scroll_y(&self) -> f32 {
        if self.allow_vertical {
            (self.content.height - self.clip.height).max(0.0)
        } else {
            0.0
        }
    }

    /// Clamp an offset (e.g. after a user drag) to the scrollable range.
    pub fn clamp_offset(&self, offset: ScrollOffset) -> ScrollOffset {
        ScrollOffset {
            x: offset.x.clamp(0.0, self.max_scroll_x()),
            y: offset.y.clamp(0.0, self.max_scroll_y()),
        }
    }

    /// Map a local content-space point to screen space for a given offset.
    pub fn to_screen(&self, offset: ScrollOffset, x: f32, y: f32) -> (f32, f32) {
        (
            self.clip.x + x - offset.x - self.content.x,
            self.clip.y + y - offset.y - self.content.y,
        )
    }

    /// Map a screen-space point to local content space for a given offset.
    pub fn to_local(&self, offset: ScrollOffset, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            screen_x - self.clip.x + offset.x + self.content.x,
            screen_y - self.clip.y + offset.y + self.content.y,
        )
    }
}

/// Map a screen-space pointer through a stack of open regions (outermost
/// first) into the innermost region's local space.
///
/// Returns None if the pointer is outside any enclosing clip.
pub fn pointer_in_regions(
    pointer: Option<(f32, f32)>,
    regions: &[(ScrollRegion, ScrollOffset)],
) -> Option<(f32, f32)> {
    let (mut x, mut y) = pointer?;
    for (region, offset) in regions {
        if !region.clip.contains(x, y) {
            return None;
        }
        (x, y) = region.to_local(*offset, x, y);
    }
    Some((x, y))
}
