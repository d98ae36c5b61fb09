//! Shared value types.

mod config;
mod frame;
mod geometry;

pub use config::{HostMetrics, DEFAULT_SCROLLBAR_WIDTH, DEFAULT_WINDOW_MARGIN};
pub use frame::{RenderPass, ViewportRequest};
pub use geometry::{Rect, ScrollOffset, Size};
