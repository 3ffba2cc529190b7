//! Coordinate and geometry types shared by layouts and widgets.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left, positions relative to the parent widget
//! - +X right, +Y down

mod axis;
mod rect;
mod size;
mod vec2;

pub use axis::Axis;
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
