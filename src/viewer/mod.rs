//! Browser viewer: renders a JSON table description into a `<canvas>`.
//!
//! The host page forwards pointer and wheel events; each call to
//! [`GridView::render`] draws one frame. Wheel deltas accumulate and are
//! applied when the body region opens, exactly like a scrollbar drag in an
//! immediate-mode toolkit.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::error::GridError;
use crate::model::{StaticTable, TableSpec};
use crate::render::{CanvasSurface, GridPalette, GridRenderer};
use crate::table::GridTable;
use crate::types::{HostMetrics, RenderPass, ViewportRequest};

fn to_js(e: &GridError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Grid viewer bound to one canvas.
#[wasm_bindgen]
pub struct GridView {
    renderer: GridRenderer,
    surface: CanvasSurface,
    table: Option<StaticTable>,
    anchor: ViewportRequest,
    dpr: f32,
}

#[wasm_bindgen]
impl GridView {
    /// Create a viewer. The screen budget defaults to the canvas size.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, dpr: f32) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        let (width, height) = logical_size(&canvas, dpr);
        let renderer = GridRenderer::new(HostMetrics::for_screen(width, height))
            .map_err(|e| to_js(&e))?;
        let surface = CanvasSurface::new(canvas, GridPalette::default()).map_err(|e| to_js(&e))?;

        Ok(GridView {
            renderer,
            surface,
            table: None,
            anchor: ViewportRequest::default(),
            dpr,
        })
    }

    /// Load a table description (JSON string).
    pub fn load(&mut self, json: &str) -> Result<(), JsValue> {
        let spec = TableSpec::from_json(json).map_err(|e| to_js(&e))?;
        let metrics = spec.metrics.unwrap_or(*self.renderer.metrics());
        self.renderer = GridRenderer::builder()
            .metrics(metrics)
            .palette(spec.palette)
            .build()
            .map_err(|e| to_js(&e))?;
        self.surface = CanvasSurface::new(self.surface.canvas().clone(), spec.palette)
            .map_err(|e| to_js(&e))?;
        self.anchor = spec.anchor;
        self.table = Some(StaticTable::from_spec(spec).map_err(|e| to_js(&e))?);
        Ok(())
    }

    /// Resize the backing store and the screen budget.
    pub fn resize(&mut self, physical_width: u32, physical_height: u32, dpr: f32) -> Result<(), JsValue> {
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        let canvas = self.surface.canvas();
        canvas.set_width(physical_width.max(1));
        canvas.set_height(physical_height.max(1));
        let (width, height) = logical_size(canvas, self.dpr);
        self.renderer
            .set_screen_size(width, height)
            .map_err(|e| to_js(&e))
    }

    /// Pointer moved to logical canvas coordinates.
    pub fn on_mouse_move(&mut self, x: f32, y: f32) {
        self.surface.set_pointer(Some((x, y)));
    }

    /// Pointer left the canvas.
    pub fn on_mouse_leave(&mut self) {
        self.surface.set_pointer(None);
    }

    /// Scroll by delta amounts (wheel or scrollbar drag).
    pub fn scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.surface.scroll_by(delta_x, delta_y);
    }

    /// Draw one frame. Returns frame statistics as a JS object.
    pub fn render(&mut self) -> Result<JsValue, JsValue> {
        self.surface.begin_frame(self.dpr).map_err(|e| to_js(&e))?;
        let Some(table) = self.table.as_mut() else {
            return Ok(JsValue::NULL);
        };
        let stats = self
            .renderer
            .render_frame(RenderPass::Repaint, &self.anchor, table, &mut self.surface)
            .map_err(|e| to_js(&e))?;
        serde_wasm_bindgen::to_value(&stats)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Current body scroll offset as `[x, y]`.
    pub fn scroll_position(&self) -> Vec<f32> {
        self.table
            .as_ref()
            .map(|t| {
                let off = t.scroll_position();
                vec![off.x, off.y]
            })
            .unwrap_or_else(|| vec![0.0, 0.0])
    }

    /// Natural table size as `[width, height]` (after the last render).
    pub fn content_size(&self) -> Vec<f32> {
        self.table
            .as_ref()
            .map(|t| {
                let size = t.cached_layout().size;
                vec![size.width, size.height]
            })
            .unwrap_or_else(|| vec![0.0, 0.0])
    }
}

#[allow(clippy::cast_precision_loss)]
fn logical_size(canvas: &HtmlCanvasElement, dpr: f32) -> (f32, f32) {
    (canvas.width() as f32 / dpr, canvas.height() as f32 / dpr)
}
