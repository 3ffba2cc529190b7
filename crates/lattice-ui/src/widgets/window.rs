use lattice_engine::coords::{Size, Vec2};

use crate::layout::Layout;
use crate::theme::Theme;
use crate::widget::{Element, Widget, WidgetBase};

/// A titled container.
///
/// A non-empty title reserves a header bar of `Theme::window_header_height`
/// at the top; every stock layout starts its content below it. An empty
/// title behaves exactly like a [`Panel`](crate::widgets::panel::Panel).
pub struct Window {
    base: WidgetBase,
    title: String,
    theme: Theme,
}

impl Window {
    pub fn new(title: impl Into<String>) -> Self {
        Self { base: WidgetBase::new(), title: title.into(), theme: Theme::default() }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

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

impl Widget for Window {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn header_height(&self) -> f32 {
        if self.title.is_empty() { 0.0 } else { self.theme.window_header_height }
    }
}
