use lattice_engine::coords::{Size, Vec2};

use crate::context::LayoutCtx;
use crate::layout::{ContainerGeometry, Layout};
use crate::widget::Element;

/// Vertical list of widgets grouped under headings.
///
/// Any child reporting a [`caption`](crate::widget::Widget::caption) acts as
/// a heading. Widgets following a heading with a non-empty caption are
/// indented by `group_indent` until the next heading; a heading with an
/// empty caption ends the indentation. The gap right after a heading is
/// `group_spacing` instead of `spacing`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    margin: f32,
    spacing: f32,
    group_spacing: f32,
    group_indent: f32,
}

impl GroupLayout {
    pub fn new(margin: f32, spacing: f32, group_spacing: f32, group_indent: f32) -> Self {
        Self { margin, spacing, group_spacing, group_indent }
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin;
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    pub fn group_spacing(&self) -> f32 {
        self.group_spacing
    }

    pub fn set_group_spacing(&mut self, group_spacing: f32) {
        self.group_spacing = group_spacing;
    }

    pub fn group_indent(&self) -> f32 {
        self.group_indent
    }

    pub fn set_group_indent(&mut self, group_indent: f32) {
        self.group_indent = group_indent;
    }

    fn top(&self, container: &ContainerGeometry) -> f32 {
        if container.is_titled() {
            self.margin + container.header_height - self.margin / 2.0
        } else {
            self.margin
        }
    }
}

impl Default for GroupLayout {
    fn default() -> Self {
        Self::new(15.0, 6.0, 14.0, 20.0)
    }
}

/// What a child contributes to grouping: `None` for ordinary widgets,
/// `Some(true)` for a heading with a caption, `Some(false)` for an empty one.
fn heading_of(child: &Element) -> Option<bool> {
    child.caption().map(|text| !text.is_empty())
}

/// Running state of one pass over the children.
#[derive(Default)]
struct GroupCursor {
    started: bool,
    after_heading: bool,
    indent: bool,
}

impl GroupCursor {
    /// Gap to insert before the next visible child.
    fn gap(&self, layout: &GroupLayout) -> f32 {
        match (self.started, self.after_heading) {
            (false, _) => 0.0,
            (true, true) => layout.group_spacing,
            (true, false) => layout.spacing,
        }
    }

    fn indents(&self, heading: Option<bool>) -> bool {
        self.indent && heading.is_none()
    }

    fn advance(&mut self, heading: Option<bool>) {
        self.started = true;
        self.after_heading = heading.is_some();
        if let Some(has_caption) = heading {
            self.indent = has_caption;
        }
    }
}

impl Layout for GroupLayout {
    fn preferred_size(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &[Element]) -> Size {
        let mut height = self.top(container);
        let mut width = 2.0 * self.margin;

        let mut cursor = GroupCursor::default();
        for child in children.iter().filter(|c| c.visible()) {
            let heading = heading_of(child);
            height += cursor.gap(self);

            let target = child.target_size(ctx);
            let indent = if cursor.indents(heading) { self.group_indent } else { 0.0 };
            height += target.height;
            width = width.max(target.width + 2.0 * self.margin + indent);

            cursor.advance(heading);
        }

        height += self.margin;
        log::trace!("group layout preferred size {width}x{height}");
        Size::new(width, height)
    }

    fn perform_layout(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &mut [Element]) {
        let mut height = self.top(container);
        let available_width = container.available().width - 2.0 * self.margin;

        let mut cursor = GroupCursor::default();
        for child in children.iter_mut().filter(|c| c.visible()) {
            let heading = heading_of(child);
            height += cursor.gap(self);

            let indent = if cursor.indents(heading) { self.group_indent } else { 0.0 };
            let preferred = Size::new(available_width - indent, child.preferred_size(ctx).height);
            let target = child.fixed_size().fixed_or(preferred);

            child.set_position(Vec2::new(self.margin + indent, height));
            child.set_size(target);
            child.perform_layout(ctx);

            height += target.height;
            cursor.advance(heading);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::{container, fixed, heading, hidden, leaf, titled};
    use lattice_engine::text::FontSystem;

    fn layout() -> GroupLayout {
        GroupLayout::new(10.0, 2.0, 6.0, 20.0)
    }

    #[test]
    fn defaults() {
        let g = GroupLayout::default();
        assert_eq!((g.margin(), g.spacing(), g.group_spacing(), g.group_indent()), (15.0, 6.0, 14.0, 20.0));
    }

    #[test]
    fn heading_indents_following_widgets_until_empty_heading() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![
            heading("Audio"),
            leaf(40.0, 10.0),
            leaf(40.0, 10.0),
            heading(""),
            leaf(40.0, 10.0),
        ];

        layout().perform_layout(&ctx, &container(200.0, 200.0), &mut children);

        let xs: Vec<f32> = children.iter().map(|c| c.position().x).collect();
        assert_eq!(xs, vec![10.0, 30.0, 30.0, 10.0, 10.0]);

        // Indented widgets lose the indent from their available width.
        assert_eq!(children[1].size().width, 160.0);
        assert_eq!(children[4].size().width, 180.0);
    }

    #[test]
    fn gap_after_heading_is_group_spacing() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![heading("A"), leaf(40.0, 10.0), leaf(40.0, 10.0), heading("B"), leaf(40.0, 10.0)];

        layout().perform_layout(&ctx, &container(200.0, 200.0), &mut children);

        let ys: Vec<f32> = children.iter().map(|c| c.position().y).collect();
        // heading 10 tall, then +6 (after heading), +10+2, +10+2, then +6 again.
        assert_eq!(ys, vec![10.0, 26.0, 38.0, 50.0, 66.0]);
    }

    #[test]
    fn preferred_size_accounts_for_indent_and_margins() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let children = vec![heading("A"), fixed(100.0, 10.0), heading(""), fixed(110.0, 10.0)];

        let size = layout().preferred_size(&ctx, &container(0.0, 0.0), &children);
        // width: max(50+20, 100+20+20, 50+20, 110+20) = 140
        // height: 10 + 10 + 6 + 10 + 2 + 10 + 6 + 10 + 10 = 74
        assert_eq!(size, Size::new(140.0, 74.0));
    }

    #[test]
    fn hidden_children_are_skipped() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![fixed(20.0, 10.0), hidden(500.0, 500.0), fixed(20.0, 10.0)];
        let g = layout();

        let size = g.preferred_size(&ctx, &container(0.0, 0.0), &children);
        assert_eq!(size, Size::new(40.0, 42.0));

        g.perform_layout(&ctx, &container(40.0, 42.0), &mut children);
        assert_eq!(children[1].size(), Size::ZERO);
        assert_eq!(children[2].position(), Vec2::new(10.0, 22.0));
    }

    #[test]
    fn titled_container_starts_below_header() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![fixed(20.0, 10.0)];
        let g = layout();

        let size = g.preferred_size(&ctx, &titled(0.0, 0.0, 30.0), &children);
        assert_eq!(size, Size::new(40.0, 55.0));

        g.perform_layout(&ctx, &titled(40.0, 55.0, 30.0), &mut children);
        assert_eq!(children[0].position(), Vec2::new(10.0, 35.0));
    }

    #[test]
    fn fixed_container_width_bounds_children() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![leaf(10.0, 10.0)];
        let area = ContainerGeometry {
            fixed_size: Size::new(100.0, 0.0),
            size: Size::new(300.0, 50.0),
            header_height: 0.0,
        };

        layout().perform_layout(&ctx, &area, &mut children);
        assert_eq!(children[0].size(), Size::new(80.0, 10.0));
    }

    #[test]
    fn layout_is_idempotent() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![heading("A"), leaf(40.0, 10.0), heading(""), leaf(30.0, 12.0)];
        let area = container(150.0, 120.0);

        layout().perform_layout(&ctx, &area, &mut children);
        let first: Vec<_> = children.iter().map(|c| c.rect()).collect();
        layout().perform_layout(&ctx, &area, &mut children);
        let second: Vec<_> = children.iter().map(|c| c.rect()).collect();
        assert_eq!(first, second);
    }
}
