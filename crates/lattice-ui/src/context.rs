use lattice_engine::coords::Size;
use lattice_engine::text::{FontId, FontSystem};

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::preferred_size`] and
/// [`Widget::perform_layout`].
///
/// Layout strategies only pass it down; leaf widgets use it to measure text.
///
/// [`Widget::preferred_size`]: crate::widget::Widget::preferred_size
/// [`Widget::perform_layout`]: crate::widget::Widget::perform_layout
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    /// Physical-to-logical pixel ratio used when measuring text.
    pub scale: f32,
}

impl<'a> LayoutCtx<'a> {
    pub fn new(fonts: &'a FontSystem) -> Self {
        Self { fonts, scale: 1.0 }
    }

    #[inline]
    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    /// Measures `text` at this context's scale.
    #[inline]
    pub fn measure_text(&self, text: &str, font: FontId, size: f32, max_width: Option<f32>) -> Size {
        self.fonts.measure_text_scaled(text, font, size, max_width, self.scale)
    }
}
