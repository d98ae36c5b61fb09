//! Data-driven table host: JSON descriptions and an in-memory `GridTable`.

mod spec;
mod static_table;

pub use spec::{ColumnSpec, RowSpec, TableSpec, DEFAULT_HEADER_HEIGHT, DEFAULT_ROW_HEIGHT};
pub use static_table::{StaticTable, TextColumn, TextRow};
