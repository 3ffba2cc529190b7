use lattice_engine::coords::{Size, Vec2};

use crate::layout::Layout;
use crate::widget::{Element, Widget, WidgetBase};

/// A plain rectangular widget.
///
/// With children and a layout it is a container; without either it is a
/// leaf whose preferred size is whatever size it currently has.
///
/// # Example
/// ```rust,ignore
/// Panel::new()
///     .layout(BoxLayout::new(Orientation::Horizontal, Alignment::Center).spacing(6.0))
///     .child(Panel::new().fixed_size(40.0, 20.0))
///     .child(Label::new("Volume"))
/// ```
pub struct Panel {
    base: WidgetBase,
}

impl Panel {
    pub fn new() -> Self {
        Self { base: WidgetBase::new() }
    }

    /// Current size; a panel without a layout also prefers this size.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.base.size = Size::new(width, height);
        self
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.base.position = Vec2::new(x, y);
        self
    }

    pub fn fixed_size(mut self, width: f32, height: f32) -> Self {
        self.base.fixed_size = Size::new(width, height);
        self
    }

    pub fn fixed_width(mut self, width: f32) -> Self {
        self.base.fixed_size.width = width;
        self
    }

    pub fn fixed_height(mut self, height: f32) -> Self {
        self.base.fixed_size.height = height;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.base.visible = visible;
        self
    }

    pub fn layout(mut self, layout: impl Layout) -> Self {
        self.base.layout = Some(Box::new(layout));
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.base.children.push(child.into());
        self
    }

    pub fn children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.base.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}
