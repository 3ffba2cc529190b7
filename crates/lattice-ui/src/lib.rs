//! Lattice UI: retained widget tree and layout strategies on top of
//! `lattice-engine`.
//!
//! Layout runs in two passes. `preferred_size` is queried bottom-up, each
//! child's preferred size feeding its parent's aggregate, then
//! `perform_layout` walks top-down writing the final position and size of
//! every visible child before recursing into it.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lattice_ui::prelude::*;
//!
//! let mut root: Element = Window::new("Settings")
//!     .layout(GroupLayout::default())
//!     .child(Label::new("Audio"))
//!     .child(Panel::new().fixed_size(120.0, 20.0))
//!     .into();
//!
//! let scene = LayoutScene::new();
//! scene.layout(&mut root, Size::new(320.0, 240.0));
//! ```
//!
//! # Custom layouts
//!
//! Implement [`Layout`](layout::Layout) and attach it to any container:
//!
//! ```rust,ignore
//! struct Overlay;
//!
//! impl Layout for Overlay {
//!     fn preferred_size(&self, ctx: &LayoutCtx, _c: &ContainerGeometry, children: &[Element]) -> Size {
//!         children.iter().filter(|c| c.visible()).fold(Size::ZERO, |acc, c| {
//!             let s = c.target_size(ctx);
//!             Size::new(acc.width.max(s.width), acc.height.max(s.height))
//!         })
//!     }
//!     fn perform_layout(&self, ctx: &LayoutCtx, c: &ContainerGeometry, children: &mut [Element]) {
//!         for child in children.iter_mut().filter(|c| c.visible()) {
//!             child.set_position(Vec2::zero());
//!             child.set_size(c.available());
//!             child.perform_layout(ctx);
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod debug;
pub mod layout;
pub mod scene;
pub mod theme;
pub mod widget;
pub mod widgets;

/// Everything needed to build widget trees and lay them out.
pub mod prelude {
    pub use crate::context::LayoutCtx;
    pub use crate::debug::dump_tree;
    pub use crate::layout::{
        AdvancedGridLayout, Alignment, Anchor, BoxLayout, ContainerGeometry, GridLayout,
        GroupLayout, Layout, Orientation,
    };
    pub use crate::scene::LayoutScene;
    pub use crate::theme::Theme;
    pub use crate::widget::{Element, Widget, WidgetBase};
    pub use crate::widgets::{label::Label, panel::Panel, window::Window};

    pub use lattice_engine::coords::{Axis, Rect, Size, Vec2};
    pub use lattice_engine::text::{FontId, FontSystem};
}
