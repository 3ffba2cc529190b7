use lattice_engine::coords::{Rect, Size, Vec2};

use crate::context::LayoutCtx;
use crate::layout::{ContainerGeometry, Layout};

// ── WidgetBase ────────────────────────────────────────────────────────────

/// Geometry, visibility and children shared by every widget.
///
/// Layouts read `fixed_size` / `preferred_size` of children and write their
/// `position` and `size`; they never add or remove children.
pub struct WidgetBase {
    /// Top-left corner relative to the parent.
    pub position: Vec2,
    pub size: Size,
    /// Per-axis override of the preferred size; zero means unset.
    pub fixed_size: Size,
    pub visible: bool,
    pub children: Vec<Element>,
    pub layout: Option<Box<dyn Layout>>,
}

impl WidgetBase {
    pub fn new() -> Self {
        Self {
            position: Vec2::zero(),
            size: Size::ZERO,
            fixed_size: Size::ZERO,
            visible: true,
            children: Vec::new(),
            layout: None,
        }
    }

    /// Snapshot of this widget as seen by its own layout.
    #[inline]
    pub fn geometry(&self, header_height: f32) -> ContainerGeometry {
        ContainerGeometry { fixed_size: self.fixed_size, size: self.size, header_height }
    }

    /// The layout's preferred size, or the current size when no layout is set.
    pub fn preferred_size(&self, ctx: &LayoutCtx, header_height: f32) -> Size {
        match &self.layout {
            Some(layout) => layout.preferred_size(ctx, &self.geometry(header_height), &self.children),
            None => self.size,
        }
    }

    /// Runs the attached layout. Without one, every visible child is sized to
    /// its fixed-or-preferred size and laid out in place.
    pub fn perform_layout(&mut self, ctx: &LayoutCtx, header_height: f32) {
        let geometry = self.geometry(header_height);
        match &self.layout {
            Some(layout) => layout.perform_layout(ctx, &geometry, &mut self.children),
            None => {
                for child in self.children.iter_mut().filter(|c| c.visible()) {
                    let size = child.target_size(ctx);
                    child.set_size(size);
                    child.perform_layout(ctx);
                }
            }
        }
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// Only [`base`](Widget::base) and [`base_mut`](Widget::base_mut) are
/// required; the layout hooks default to delegating to the attached layout.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use lattice_ui::prelude::*;
///
/// pub struct Swatch { base: WidgetBase }
///
/// impl Widget for Swatch {
///     fn base(&self) -> &WidgetBase { &self.base }
///     fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     fn preferred_size(&self, _ctx: &LayoutCtx) -> Size { Size::new(24.0, 24.0) }
/// }
/// ```
pub trait Widget: 'static {
    fn base(&self) -> &WidgetBase;
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Size this widget would like before its parent's layout decides.
    ///
    /// Must be deterministic; parents call it several times per pass.
    fn preferred_size(&self, ctx: &LayoutCtx) -> Size {
        self.base().preferred_size(ctx, self.header_height())
    }

    /// Positions and sizes this widget's children, then recurses into them.
    fn perform_layout(&mut self, ctx: &LayoutCtx) {
        let header_height = self.header_height();
        self.base_mut().perform_layout(ctx, header_height);
    }

    /// Height of a title bar drawn above the content area, zero when there
    /// is none. Layouts offset their content by it.
    fn header_height(&self) -> f32 {
        0.0
    }

    /// Heading text when this widget starts a group, `None` for ordinary widgets.
    fn caption(&self) -> Option<&str> {
        None
    }

    /// Short type name used in debug output.
    fn kind(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, the universal child type for containers.
///
/// Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.0.base().visible
    }

    #[inline]
    pub fn fixed_size(&self) -> Size {
        self.0.base().fixed_size
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.0.base().position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.0.base_mut().position = position;
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.0.base().size
    }

    #[inline]
    pub fn set_size(&mut self, size: Size) {
        self.0.base_mut().size = size;
    }

    /// Bounds relative to the parent.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    #[inline]
    pub fn preferred_size(&self, ctx: &LayoutCtx) -> Size {
        self.0.preferred_size(ctx)
    }

    /// The size a layout starts from: fixed size per axis where set,
    /// preferred size otherwise.
    #[inline]
    pub fn target_size(&self, ctx: &LayoutCtx) -> Size {
        self.fixed_size().fixed_or(self.preferred_size(ctx))
    }

    #[inline]
    pub fn perform_layout(&mut self, ctx: &LayoutCtx) {
        self.0.perform_layout(ctx)
    }

    #[inline]
    pub fn caption(&self) -> Option<&str> {
        self.0.caption()
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        self.0.kind()
    }

    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.0.base().children
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children().get(index)
    }

    #[inline]
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.0.base_mut().children.get_mut(index)
    }

    /// Deepest visible widget under `point`, given in this element's parent
    /// coordinates. Later children win over earlier ones.
    pub fn find_widget(&self, point: Vec2) -> Option<&Element> {
        if !self.visible() || !self.rect().contains(point) {
            return None;
        }
        let local = point - self.position();
        self.children()
            .iter()
            .rev()
            .find_map(|child| child.find_widget(local))
            .or(Some(self))
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
