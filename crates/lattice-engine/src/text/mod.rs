//! Font loading and text measurement.
//!
//! Leaf widgets (labels) size themselves from measured text; layouts never
//! touch fonts directly.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
