//! Canvas 2D grid surface.
//!
//! Scroll regions map onto `save` / `clip` / `translate` / `restore`. The
//! context is expected to be pre-scaled for the device pixel ratio, so all
//! coordinates here are in logical (CSS) pixels.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{GridError, Result};
use crate::layout::{pointer_in_regions, ScrollRegion};
use crate::render::colors::{Color, GridPalette};
use crate::render::surface::{GridSurface, TextAlign};
use crate::types::{Rect, ScrollOffset};

/// Font used for header and cell labels.
const LABEL_FONT: &str = "12px -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

/// Horizontal padding inside a label rect.
const LABEL_PADDING: f64 = 4.0;

/// Helper to get crisp pixel position for 1px lines
fn crisp(x: f64) -> f64 {
    x.floor() + 0.5
}

fn js_err(what: &str, e: &wasm_bindgen::JsValue) -> GridError {
    GridError::Surface(format!("{what}: {e:?}"))
}

/// A [`GridSurface`] drawing into an HTML canvas.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    palette: GridPalette,
    regions: Vec<(ScrollRegion, ScrollOffset)>,
    /// Pointer position in logical screen pixels
    pointer: Option<(f32, f32)>,
    /// Wheel/drag delta waiting for the next vertically scrollable region
    pending_scroll: Option<ScrollOffset>,
}

impl CanvasSurface {
    /// Create a surface from an `HtmlCanvasElement`.
    ///
    /// # Errors
    /// Returns `GridError::Surface` if no 2D context is available.
    pub fn new(canvas: HtmlCanvasElement, palette: GridPalette) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| js_err("Failed to get 2d context", &e))?
            .ok_or_else(|| GridError::Surface("No 2d context available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GridError::Surface("Failed to cast to CanvasRenderingContext2d".into()))?;

        Ok(Self {
            canvas,
            ctx,
            palette,
            regions: Vec::new(),
            pointer: None,
            pending_scroll: None,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Track the pointer in logical screen pixels.
    pub fn set_pointer(&mut self, pointer: Option<(f32, f32)>) {
        self.pointer = pointer;
    }

    /// Accumulate a wheel or scrollbar delta for the next frame.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        let pending = self.pending_scroll.unwrap_or_default();
        self.pending_scroll = Some(ScrollOffset::new(pending.x + dx, pending.y + dy));
    }

    /// Reset the transform for the device pixel ratio and clear to the
    /// palette background.
    ///
    /// # Errors
    /// Propagates canvas transform failures.
    pub fn begin_frame(&mut self, dpr: f32) -> Result<()> {
        let dpr = f64::from(dpr);
        self.regions.clear();
        self.ctx
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|e| js_err("set_transform", &e))?;
        let w = f64::from(self.canvas.width()) / dpr;
        let h = f64::from(self.canvas.height()) / dpr;
        self.ctx.set_fill_style_str(&self.palette.background.to_css());
        self.ctx.fill_rect(0.0, 0.0, w, h);
        Ok(())
    }
}

impl GridSurface for CanvasSurface {
    fn begin_scroll_region(
        &mut self,
        region: &ScrollRegion,
        offset: &mut ScrollOffset,
    ) -> Result<()> {
        if region.allow_vertical {
            if let Some(delta) = self.pending_scroll.take() {
                *offset = ScrollOffset::new(offset.x + delta.x, offset.y + delta.y);
            }
        }
        *offset = region.clamp_offset(*offset);

        let clip = region.clip;
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(
            f64::from(clip.x),
            f64::from(clip.y),
            f64::from(clip.width.max(0.0)),
            f64::from(clip.height.max(0.0)),
        );
        self.ctx.clip();
        let (origin_x, origin_y) = region.to_screen(*offset, 0.0, 0.0);
        if let Err(e) = self
            .ctx
            .translate(f64::from(origin_x), f64::from(origin_y))
        {
            self.ctx.restore();
            return Err(js_err("translate", &e));
        }
        self.regions.push((*region, *offset));
        Ok(())
    }

    fn end_scroll_region(&mut self) -> Result<()> {
        self.regions
            .pop()
            .ok_or_else(|| GridError::Surface("end_scroll_region without open region".into()))?;
        self.ctx.restore();
        Ok(())
    }

    fn draw_line_horizontal(&mut self, x: f32, y: f32, length: f32, color: Color) -> Result<()> {
        let (x, y) = (f64::from(x), f64::from(y));
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(1.0);
        self.ctx.move_to(x, crisp(y));
        self.ctx.line_to(x + f64::from(length), crisp(y));
        self.ctx.stroke();
        Ok(())
    }

    fn draw_highlight(&mut self, rect: Rect) -> Result<()> {
        self.fill_rect(rect, self.palette.highlight)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.width),
            f64::from(rect.height),
        );
        Ok(())
    }

    fn draw_label(&mut self, rect: Rect, text: &str, align: TextAlign) -> Result<()> {
        if rect.width <= 0.0 || rect.height <= 0.0 || text.is_empty() {
            return Ok(());
        }
        let (x, y, w, h) = (
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.width),
            f64::from(rect.height),
        );
        let (anchor, text_x) = match align {
            TextAlign::Left => ("left", x + LABEL_PADDING),
            TextAlign::Center => ("center", x + w / 2.0),
            TextAlign::Right => ("right", x + w - LABEL_PADDING),
        };

        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(x, y, w, h);
        self.ctx.clip();
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_text_align(anchor);
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&self.palette.text.to_css());
        let drawn = self.ctx.fill_text(text, text_x, y + h / 2.0);
        self.ctx.restore();
        drawn.map_err(|e| js_err("fill_text", &e))
    }

    fn is_pointer_over(&self, rect: Rect) -> bool {
        pointer_in_regions(self.pointer, &self.regions)
            .is_some_and(|(x, y)| rect.contains(x, y))
    }
}
