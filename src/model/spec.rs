//! JSON table descriptions.
//!
//! A `TableSpec` is everything needed to render a grid without a host
//! application: column labels and widths, row texts and heights, an
//! optional screen budget, anchor and palette. The CLI and the wasm viewer
//! both load these.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::{GridPalette, TextAlign};
use crate::types::{HostMetrics, ScrollOffset, ViewportRequest};

/// Default header strip height.
pub const DEFAULT_HEADER_HEIGHT: f32 = 32.0;

/// Default row height.
pub const DEFAULT_ROW_HEIGHT: f32 = 30.0;

fn default_header_height() -> f32 {
    DEFAULT_HEADER_HEIGHT
}

fn default_row_height() -> f32 {
    DEFAULT_ROW_HEIGHT
}

/// One column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub label: String,
    pub width: f32,
    #[serde(default)]
    pub align: TextAlign,
}

/// One row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSpec {
    #[serde(default = "default_row_height")]
    pub height: f32,
    #[serde(default)]
    pub cells: Vec<String>,
    #[serde(default)]
    pub downed: bool,
}

/// A complete, self-contained table description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Screen budget; hosts that know their screen size may ignore this
    #[serde(default)]
    pub metrics: Option<HostMetrics>,
    /// Where to anchor the grid
    #[serde(default)]
    pub anchor: ViewportRequest,
    #[serde(default)]
    pub palette: GridPalette,
    #[serde(default = "default_header_height")]
    pub header_height: f32,
    /// Cap on the table's reported height; taller content scrolls
    #[serde(default)]
    pub max_height: Option<f32>,
    /// Initial body scroll offset
    #[serde(default)]
    pub scroll: ScrollOffset,
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub rows: Vec<RowSpec>,
}

impl TableSpec {
    /// Parse a table description from JSON.
    ///
    /// # Errors
    /// Returns `GridError::Json` for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a table description file.
    ///
    /// # Errors
    /// Returns `GridError::Io` or `GridError::Json`.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
