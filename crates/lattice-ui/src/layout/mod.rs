//! Layout strategies.
//!
//! A [`Layout`] is a configuration-only object attached to a container. It
//! holds no per-widget state: every pass reads geometry from the widget tree
//! and writes positions and sizes back onto it, so running a pass twice over
//! unchanged geometry yields identical results.

mod advanced_grid;
mod box_layout;
mod grid;
mod group;

pub use advanced_grid::{AdvancedGridLayout, Anchor};
pub use box_layout::BoxLayout;
pub use grid::GridLayout;
pub use group::GroupLayout;

use lattice_engine::coords::{Axis, Size};

use crate::context::LayoutCtx;
use crate::widget::Element;

/// Primary flow direction of a layout.
pub type Orientation = Axis;

// ── Alignment ─────────────────────────────────────────────────────────────

/// How a child is placed within the slack of its row, column or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Flush with the start edge.
    Minimum,
    /// Centered in the available space.
    #[default]
    Center,
    /// Flush with the far edge.
    Maximum,
    /// Stretched over the available space unless the child has a fixed size.
    Fill,
}

impl Alignment {
    /// Places an item of `target` length inside a cell of `cell` length.
    ///
    /// Returns the offset from the cell start and the item's final length.
    /// `fixed` is the item's fixed length on this axis (zero when unset).
    #[inline]
    pub fn place(self, cell: f32, target: f32, fixed: f32) -> (f32, f32) {
        match self {
            Alignment::Minimum => (0.0, target),
            Alignment::Center => ((cell - target) / 2.0, target),
            Alignment::Maximum => (cell - target, target),
            Alignment::Fill => (0.0, if fixed != 0.0 { fixed } else { cell }),
        }
    }
}

// ── ContainerGeometry ─────────────────────────────────────────────────────

/// The container a layout is arranging, as a read-only snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerGeometry {
    pub fixed_size: Size,
    pub size: Size,
    /// Title bar height reported by the container; zero when untitled.
    pub header_height: f32,
}

impl ContainerGeometry {
    /// Space the layout may fill: the fixed size per axis where set, the
    /// current size otherwise.
    #[inline]
    pub fn available(&self) -> Size {
        self.fixed_size.fixed_or(self.size)
    }

    #[inline]
    pub fn is_titled(&self) -> bool {
        self.header_height > 0.0
    }
}

// ── Layout trait ──────────────────────────────────────────────────────────

/// A pluggable arrangement strategy for a container's children.
pub trait Layout: 'static {
    /// Size the container needs to show `children` without clipping.
    fn preferred_size(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &[Element]) -> Size;

    /// Writes position and size to every visible child, then lays the child out.
    fn perform_layout(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &mut [Element]);
}
