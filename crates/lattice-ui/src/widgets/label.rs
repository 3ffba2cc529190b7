use lattice_engine::coords::Size;
use lattice_engine::text::FontId;

use crate::context::LayoutCtx;
use crate::theme::Theme;
use crate::widget::{Widget, WidgetBase};

/// A single run of caption text.
///
/// Text is measured with the engine's `FontSystem`. Inside a
/// [`GroupLayout`](crate::layout::GroupLayout) a label acts as a group
/// heading; an empty caption closes the current group.
///
/// # Example
/// ```rust,ignore
/// Label::new("Advanced").font(bold).font_size(18.0)
/// ```
pub struct Label {
    base: WidgetBase,
    caption: String,
    font: FontId,
    font_size: f32,
}

impl Label {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            caption: caption.into(),
            font: FontId::default(),
            font_size: Theme::default().label_font_size,
        }
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn fixed_size(mut self, width: f32, height: f32) -> Self {
        self.base.fixed_size = Size::new(width, height);
        self
    }

    /// Wraps the caption at `width`.
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.base.fixed_size.width = width;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.base.visible = visible;
        self
    }

    pub fn text(&self) -> &str {
        &self.caption
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }
}

impl Widget for Label {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn preferred_size(&self, ctx: &LayoutCtx) -> Size {
        if self.caption.is_empty() {
            return Size::ZERO;
        }
        let fixed_width = self.base.fixed_size.width;
        if fixed_width > 0.0 {
            let measured = ctx.measure_text(&self.caption, self.font, self.font_size, Some(fixed_width));
            Size::new(fixed_width, measured.height)
        } else {
            let measured = ctx.measure_text(&self.caption, self.font, self.font_size, None);
            Size::new(measured.width, self.font_size)
        }
    }

    fn caption(&self) -> Option<&str> {
        Some(&self.caption)
    }
}
