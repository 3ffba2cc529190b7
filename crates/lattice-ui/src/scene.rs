use lattice_engine::coords::Size;
use lattice_engine::text::{FontId, FontLoadError, FontSystem};

use crate::context::LayoutCtx;
use crate::widget::Element;

// ── LayoutScene ───────────────────────────────────────────────────────────

/// Top-level coordinator that owns the resources layout passes need.
///
/// Owns the `FontSystem` (all loaded fonts) and the display scale, and runs
/// the two layout passes over a root widget that the caller keeps alive.
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = LayoutScene::new();
/// let font = scene.load_font(include_bytes!("my_font.ttf"))?;
///
/// let mut root: Element = Window::new("Main").layout(GroupLayout::default()).into();
/// scene.layout(&mut root, Size::new(800.0, 600.0));
/// ```
pub struct LayoutScene {
    pub font_system: FontSystem,
    /// Physical-to-logical pixel ratio passed to text measurement.
    pub scale: f32,
}

impl LayoutScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), scale: 1.0 }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    pub fn ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx::new(&self.font_system).with_scale(self.scale)
    }

    /// Bottom-up pass only: the size `root` would like.
    pub fn preferred_size(&self, root: &Element) -> Size {
        root.preferred_size(&self.ctx())
    }

    /// Sizes `root` to the viewport, keeping any fixed axes, then lays out
    /// the whole tree.
    pub fn layout(&self, root: &mut Element, viewport: Size) {
        let size = root.fixed_size().fixed_or(viewport);
        log::debug!("layout {} at {}x{}", root.kind(), size.width, size.height);
        root.set_size(size);
        root.perform_layout(&self.ctx());
    }

    /// Sizes `root` to its own preferred size and lays it out. Returns that size.
    pub fn fit(&self, root: &mut Element) -> Size {
        let ctx = self.ctx();
        let size = root.target_size(&ctx);
        log::debug!("fit {} to {}x{}", root.kind(), size.width, size.height);
        root.set_size(size);
        root.perform_layout(&ctx);
        size
    }
}

impl Default for LayoutScene {
    fn default() -> Self {
        Self::new()
    }
}
