//! Structured error types for scrollgrid.
//!
//! Configuration problems surface once, when a renderer is built. Draw
//! failures surface per frame and abort only that frame.

/// All errors that can occur while configuring or rendering a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A required host capability or metric was not supplied.
    #[error("Missing host capability: {0}")]
    MissingCapability(&'static str),

    /// A host metric was supplied but is unusable (NaN, infinite, negative).
    #[error("Invalid host metrics: {0}")]
    InvalidMetrics(String),

    /// A table description is inconsistent (negative sizes, ragged rows).
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// A column worker failed to draw a header or cell.
    #[error("Draw error: {0}")]
    Draw(String),

    /// The drawing surface rejected a primitive or region.
    #[error("Surface error: {0}")]
    Surface(String),

    /// Table description could not be (de)serialized.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
