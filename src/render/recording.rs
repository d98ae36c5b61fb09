//! Recording surface.
//!
//! Captures every primitive as a [`DrawCommand`] instead of drawing it. Used
//! by the CLI to dump draw traces, by benchmarks, and by tests to assert on
//! draw order. It also simulates the two bits of user interaction a real
//! toolkit feeds back into the grid: the pointer position (for hover) and a
//! pending scrollbar drag (applied when the next vertically scrollable
//! region opens).

use serde::Serialize;

use super::colors::Color;
use super::surface::{GridSurface, TextAlign};
use crate::error::{GridError, Result};
use crate::layout::{pointer_in_regions, ScrollRegion};
use crate::types::{Rect, ScrollOffset};

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    BeginScrollRegion {
        clip: Rect,
        content: Rect,
        offset: ScrollOffset,
        allow_vertical: bool,
    },
    EndScrollRegion,
    LineHorizontal {
        x: f32,
        y: f32,
        length: f32,
        color: Color,
    },
    Highlight {
        rect: Rect,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    Label {
        rect: Rect,
        text: String,
        align: TextAlign,
    },
}

/// A [`GridSurface`] that records instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    regions: Vec<(ScrollRegion, ScrollOffset)>,
    /// Pointer position in screen space
    pointer: Option<(f32, f32)>,
    /// Drag delta waiting for the next vertically scrollable region
    pending_drag: Option<ScrollOffset>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the pointer at a screen position.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
    }

    /// Remove the pointer (e.g. it left the window).
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Queue a scrollbar drag. The delta is added to the offset of the next
    /// vertically scrollable region that opens, then clamped to its content.
    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        let pending = self.pending_drag.unwrap_or_default();
        self.pending_drag = Some(ScrollOffset::new(pending.x + dx, pending.y + dy));
    }

    /// Recorded commands, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of scroll regions currently open.
    pub fn open_regions(&self) -> usize {
        self.regions.len()
    }
}

impl GridSurface for RecordingSurface {
    fn begin_scroll_region(
        &mut self,
        region: &ScrollRegion,
        offset: &mut ScrollOffset,
    ) -> Result<()> {
        if region.allow_vertical {
            if let Some(drag) = self.pending_drag.take() {
                let dragged = ScrollOffset::new(offset.x + drag.x, offset.y + drag.y);
                *offset = region.clamp_offset(dragged);
            }
        }
        self.commands.push(DrawCommand::BeginScrollRegion {
            clip: region.clip,
            content: region.content,
            offset: *offset,
            allow_vertical: region.allow_vertical,
        });
        self.regions.push((*region, *offset));
        Ok(())
    }

    fn end_scroll_region(&mut self) -> Result<()> {
        self.regions
            .pop()
            .ok_or_else(|| GridError::Surface("end_scroll_region without open region".into()))?;
        self.commands.push(DrawCommand::EndScrollRegion);
        Ok(())
    }

    fn draw_line_horizontal(&mut self, x: f32, y: f32, length: f32, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::LineHorizontal {
            x,
            y,
            length,
            color,
        });
        Ok(())
    }

    fn draw_highlight(&mut self, rect: Rect) -> Result<()> {
        self.commands.push(DrawCommand::Highlight { rect });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn draw_label(&mut self, rect: Rect, text: &str, align: TextAlign) -> Result<()> {
        self.commands.push(DrawCommand::Label {
            rect,
            text: text.to_string(),
            align,
        });
        Ok(())
    }

    fn is_pointer_over(&self, rect: Rect) -> bool {
        pointer_in_regions(self.pointer, &self.regions)
            .is_some_and(|(x, y)| rect.contains(x, y))
    }
}
