use std::collections::HashMap;

use lattice_engine::coords::{Axis, Size, Vec2};

use crate::context::LayoutCtx;
use crate::layout::{Alignment, ContainerGeometry, Layout, Orientation};
use crate::widget::Element;

/// Cell sizes per axis, indexed by [`Axis::index`].
type Tracks = [Vec<f32>; 2];

/// Table layout filled in reading order.
///
/// Visible children are assigned to cells one after another along the
/// `orientation` axis, wrapping after `resolution` cells. Each column is as
/// wide as its widest child and each row as tall as its tallest. Spare
/// container space is spread evenly over the cells.
///
/// Alignment inside a cell is looked up per axis and per column/row index,
/// falling back to a per-axis default.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    orientation: Orientation,
    resolution: usize,
    margin: f32,
    spacing: [f32; 2],
    default_alignment: [Alignment; 2],
    alignment: [HashMap<usize, Alignment>; 2],
}

impl GridLayout {
    pub fn new(orientation: Orientation, resolution: usize) -> Self {
        debug_assert!(resolution > 0, "grid resolution must be at least one cell");
        Self {
            orientation,
            resolution,
            margin: 0.0,
            spacing: [0.0; 2],
            default_alignment: [Alignment::Center; 2],
            alignment: [HashMap::new(), HashMap::new()],
        }
    }

    /// Default alignment for both axes.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.default_alignment = [alignment; 2];
        self
    }

    pub fn margin(mut self, v: f32) -> Self {
        self.margin = v;
        self
    }

    /// Same spacing between columns and between rows.
    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = [v; 2];
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: usize) {
        debug_assert!(resolution > 0, "grid resolution must be at least one cell");
        self.resolution = resolution;
    }

    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin;
    }

    /// Gap between neighbouring cells along `axis`.
    pub fn axis_spacing(&self, axis: Axis) -> f32 {
        self.spacing[axis.index()]
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = [spacing; 2];
    }

    pub fn set_axis_spacing(&mut self, axis: Axis, spacing: f32) {
        self.spacing[axis.index()] = spacing;
    }

    /// Alignment used on `axis` for the column (horizontal) or row (vertical) `item`.
    pub fn cell_alignment(&self, axis: Axis, item: usize) -> Alignment {
        self.alignment[axis.index()]
            .get(&item)
            .copied()
            .unwrap_or(self.default_alignment[axis.index()])
    }

    pub fn set_col_alignment(&mut self, alignment: Alignment) {
        self.default_alignment[Axis::Horizontal.index()] = alignment;
    }

    pub fn set_row_alignment(&mut self, alignment: Alignment) {
        self.default_alignment[Axis::Vertical.index()] = alignment;
    }

    pub fn set_col_alignment_at(&mut self, col: usize, alignment: Alignment) {
        self.alignment[Axis::Horizontal.index()].insert(col, alignment);
    }

    pub fn set_row_alignment_at(&mut self, row: usize, alignment: Alignment) {
        self.alignment[Axis::Vertical.index()].insert(row, alignment);
    }

    /// Replaces the column overrides with `alignments`, starting at column 0.
    pub fn set_col_alignments(&mut self, alignments: impl IntoIterator<Item = Alignment>) {
        self.alignment[Axis::Horizontal.index()] = alignments.into_iter().enumerate().collect();
    }

    /// Replaces the row overrides with `alignments`, starting at row 0.
    pub fn set_row_alignments(&mut self, alignments: impl IntoIterator<Item = Alignment>) {
        self.alignment[Axis::Vertical.index()] = alignments.into_iter().enumerate().collect();
    }

    /// Extra space a titled container adds above the grid.
    fn header_extra(&self, container: &ContainerGeometry) -> Size {
        if container.is_titled() {
            Size::new(0.0, container.header_height - self.margin / 2.0)
        } else {
            Size::ZERO
        }
    }

    /// Minimal size of every column and row.
    ///
    /// The primary axis always has `resolution` cells; the secondary axis has
    /// as many as needed to hold every visible child.
    fn compute_layout(&self, ctx: &LayoutCtx, children: &[Element]) -> Tracks {
        let axis1 = self.orientation;
        let axis2 = axis1.cross();
        let resolution = self.resolution.max(1);
        let visible = children.iter().filter(|c| c.visible()).count();

        let mut grid: Tracks = Default::default();
        grid[axis1.index()] = vec![0.0; resolution];
        grid[axis2.index()] = vec![0.0; visible.div_ceil(resolution)];

        let mut cells = children.iter().filter(|c| c.visible());
        for i2 in 0..grid[axis2.index()].len() {
            for i1 in 0..resolution {
                let Some(child) = cells.next() else {
                    return grid;
                };
                let target = child.target_size(ctx);
                let c1 = &mut grid[axis1.index()][i1];
                *c1 = c1.max(target.get(axis1));
                let c2 = &mut grid[axis2.index()][i2];
                *c2 = c2.max(target.get(axis2));
            }
        }
        grid
    }

    /// Cells plus spacing plus margins (and header) along `axis`.
    fn required(&self, axis: Axis, cells: &[f32], extra: Size) -> f32 {
        let gaps = cells.len().saturating_sub(1) as f32;
        2.0 * self.margin + extra.get(axis) + cells.iter().sum::<f32>() + gaps * self.axis_spacing(axis)
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(Orientation::Horizontal, 2)
    }
}

/// Spreads `slack` over `cells`: every cell gets the same whole share, the
/// remainder goes one unit at a time to the first cells.
fn distribute_slack(cells: &mut [f32], slack: f32) {
    if cells.is_empty() || slack <= 0.0 {
        return;
    }
    let count = cells.len() as f32;
    let per_cell = (slack / count).floor();
    let mut rest = slack - per_cell * count;

    for cell in cells.iter_mut() {
        *cell += per_cell;
    }
    for cell in cells.iter_mut() {
        if rest <= 0.0 {
            break;
        }
        let step = rest.min(1.0);
        *cell += step;
        rest -= step;
    }
}

impl Layout for GridLayout {
    fn preferred_size(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &[Element]) -> Size {
        let grid = self.compute_layout(ctx, children);
        let extra = self.header_extra(container);

        let size = Size::new(
            self.required(Axis::Horizontal, &grid[Axis::Horizontal.index()], extra),
            self.required(Axis::Vertical, &grid[Axis::Vertical.index()], extra),
        );
        log::trace!("grid layout preferred size {size:?}");
        size
    }

    fn perform_layout(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &mut [Element]) {
        let container_size = container.available();
        let mut grid = self.compute_layout(ctx, children);
        let extra = self.header_extra(container);

        for axis in Axis::ALL {
            let cells = &mut grid[axis.index()];
            let grid_size = self.required(axis, cells, extra);
            let axis_size = container_size.get(axis);
            if grid_size < axis_size {
                distribute_slack(cells, axis_size - grid_size);
            }
        }

        let axis1 = self.orientation;
        let axis2 = axis1.cross();
        let start = Vec2::new(self.margin + extra.width, self.margin + extra.height);
        let mut pos = start;

        let mut cells = children.iter_mut().filter(|c| c.visible());
        for i2 in 0..grid[axis2.index()].len() {
            pos.set(axis1, start.get(axis1));
            for i1 in 0..grid[axis1.index()].len() {
                let Some(child) = cells.next() else {
                    return;
                };

                let fixed = child.fixed_size();
                let mut target = fixed.fixed_or(child.preferred_size(ctx));
                let mut item_pos = pos;
                for (axis, item) in [(axis1, i1), (axis2, i2)] {
                    let cell = grid[axis.index()][item];
                    let (offset, length) =
                        self.cell_alignment(axis, item).place(cell, target.get(axis), fixed.get(axis));
                    *item_pos.get_mut(axis) += offset;
                    target.set(axis, length);
                }

                child.set_position(item_pos);
                child.set_size(target);
                child.perform_layout(ctx);

                *pos.get_mut(axis1) += grid[axis1.index()][i1] + self.axis_spacing(axis1);
            }
            *pos.get_mut(axis2) += grid[axis2.index()][i2] + self.axis_spacing(axis2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::{container, fixed, hidden, leaf, titled};
    use crate::widgets::panel::Panel;
    use lattice_engine::text::FontSystem;

    #[test]
    fn slack_remainder_goes_to_first_cells() {
        let mut cells = vec![10.0, 10.0, 10.0];
        distribute_slack(&mut cells, 10.0);
        assert_eq!(cells, vec![14.0, 13.0, 13.0]);
    }

    #[test]
    fn slack_divisible_is_even() {
        let mut cells = vec![1.0, 2.0];
        distribute_slack(&mut cells, 8.0);
        assert_eq!(cells, vec![5.0, 6.0]);
    }

    #[test]
    fn negative_or_empty_slack_is_ignored() {
        let mut cells = vec![1.0, 2.0];
        distribute_slack(&mut cells, -4.0);
        assert_eq!(cells, vec![1.0, 2.0]);
        distribute_slack(&mut [], 4.0);
    }

    #[test]
    fn compute_layout_tracks_max_per_row_and_column() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let children = vec![leaf(10.0, 5.0), leaf(20.0, 8.0), leaf(15.0, 12.0)];

        let grid = GridLayout::new(Orientation::Horizontal, 2).compute_layout(&ctx, &children);
        assert_eq!(grid[0], vec![15.0, 20.0]);
        assert_eq!(grid[1], vec![8.0, 12.0]);
    }

    #[test]
    fn vertical_orientation_fills_columns_first() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let children = vec![leaf(10.0, 5.0), leaf(20.0, 8.0), leaf(15.0, 12.0)];

        let grid = GridLayout::new(Orientation::Vertical, 2).compute_layout(&ctx, &children);
        // Two rows per column: (10,5) (20,8) in column 0, (15,12) in column 1.
        assert_eq!(grid[0], vec![20.0, 15.0]);
        assert_eq!(grid[1], vec![12.0, 8.0]);
    }

    #[test]
    fn preferred_size_sums_cells_spacing_and_margin() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let children = vec![fixed(10.0, 10.0), fixed(20.0, 10.0), fixed(10.0, 30.0)];
        let layout = GridLayout::new(Orientation::Horizontal, 2).margin(5.0).spacing(2.0);

        let size = layout.preferred_size(&ctx, &container(0.0, 0.0), &children);
        // columns 10 + 20, rows 10 + 30
        assert_eq!(size, Size::new(10.0 + 2.0 + 20.0 + 10.0, 10.0 + 2.0 + 30.0 + 10.0));
    }

    #[test]
    fn hidden_children_occupy_no_cell() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![fixed(10.0, 10.0), hidden(50.0, 50.0), fixed(20.0, 10.0)];
        let layout = GridLayout::new(Orientation::Horizontal, 2).alignment(Alignment::Minimum);

        let size = layout.preferred_size(&ctx, &container(0.0, 0.0), &children);
        assert_eq!(size, Size::new(30.0, 10.0));

        layout.perform_layout(&ctx, &container(30.0, 10.0), &mut children);
        assert_eq!(children[1].size(), Size::ZERO);
        assert_eq!(children[2].position(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn slack_is_redistributed_per_axis() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![leaf(10.0, 10.0), leaf(10.0, 10.0), leaf(10.0, 10.0)];
        let layout = GridLayout::new(Orientation::Horizontal, 3).alignment(Alignment::Fill);

        // 10 px of horizontal slack over three columns: +4, +3, +3.
        layout.perform_layout(&ctx, &container(40.0, 10.0), &mut children);

        let widths: Vec<f32> = children.iter().map(|c| c.size().width).collect();
        assert_eq!(widths, vec![14.0, 13.0, 13.0]);
        let xs: Vec<f32> = children.iter().map(|c| c.position().x).collect();
        assert_eq!(xs, vec![0.0, 14.0, 27.0]);
    }

    #[test]
    fn per_cell_alignment_overrides_default() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![leaf(10.0, 10.0), leaf(10.0, 10.0), leaf(30.0, 30.0), leaf(30.0, 30.0)];
        let mut layout = GridLayout::new(Orientation::Horizontal, 2).alignment(Alignment::Minimum);
        layout.set_col_alignment_at(1, Alignment::Maximum);
        layout.set_row_alignment(Alignment::Center);

        layout.perform_layout(&ctx, &container(60.0, 40.0), &mut children);

        // Columns 30/30, rows 10/30; column 1 right-aligned, rows centered.
        assert_eq!(children[0].position(), Vec2::new(0.0, 0.0));
        assert_eq!(children[1].position(), Vec2::new(50.0, 0.0));
        assert_eq!(children[2].position(), Vec2::new(0.0, 10.0));
        assert_eq!(children[3].position(), Vec2::new(30.0, 10.0));
    }

    #[test]
    fn fill_keeps_fixed_axes() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![Element::from(Panel::new().size(10.0, 10.0).fixed_width(8.0)), leaf(20.0, 20.0)];
        let layout = GridLayout::new(Orientation::Horizontal, 2).alignment(Alignment::Fill);

        layout.perform_layout(&ctx, &container(28.0, 20.0), &mut children);
        assert_eq!(children[0].size(), Size::new(8.0, 20.0));
        assert_eq!(children[1].size(), Size::new(20.0, 20.0));
    }

    #[test]
    fn bulk_alignments_replace_overrides() {
        let mut layout = GridLayout::default();
        layout.set_col_alignment_at(5, Alignment::Fill);
        layout.set_col_alignments([Alignment::Minimum, Alignment::Maximum]);

        assert_eq!(layout.cell_alignment(Axis::Horizontal, 0), Alignment::Minimum);
        assert_eq!(layout.cell_alignment(Axis::Horizontal, 1), Alignment::Maximum);
        assert_eq!(layout.cell_alignment(Axis::Horizontal, 5), Alignment::Center);
        assert_eq!(layout.cell_alignment(Axis::Vertical, 0), Alignment::Center);
    }

    #[test]
    fn axis_spacing_is_independent() {
        let mut layout = GridLayout::default();
        layout.set_spacing(3.0);
        layout.set_axis_spacing(Axis::Vertical, 7.0);
        assert_eq!(layout.axis_spacing(Axis::Horizontal), 3.0);
        assert_eq!(layout.axis_spacing(Axis::Vertical), 7.0);
    }

    #[test]
    fn preferred_size_round_trip_leaves_no_slack() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![leaf(10.0, 5.0), leaf(20.0, 8.0), leaf(15.0, 12.0)];
        let layout = GridLayout::new(Orientation::Horizontal, 2)
            .margin(4.0)
            .spacing(3.0)
            .alignment(Alignment::Fill);
        let header = titled(0.0, 0.0, 20.0);

        let pref = layout.preferred_size(&ctx, &header, &children);
        let sized = titled(pref.width, pref.height, 20.0);
        layout.perform_layout(&ctx, &sized, &mut children);

        // Fill makes every child exactly its (unstretched) cell size.
        assert_eq!(children[0].size(), Size::new(15.0, 8.0));
        assert_eq!(children[1].size(), Size::new(20.0, 8.0));
        assert_eq!(children[2].size(), Size::new(15.0, 12.0));
        assert_eq!(children[0].position(), Vec2::new(4.0, 4.0 + 18.0));
    }

    #[test]
    fn layout_is_idempotent() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![leaf(10.0, 5.0), leaf(21.0, 8.0), leaf(15.0, 13.0)];
        let layout = GridLayout::new(Orientation::Horizontal, 2).spacing(1.0);
        let area = container(101.0, 77.0);

        layout.perform_layout(&ctx, &area, &mut children);
        let first: Vec<_> = children.iter().map(|c| c.rect()).collect();
        layout.perform_layout(&ctx, &area, &mut children);
        let second: Vec<_> = children.iter().map(|c| c.rect()).collect();
        assert_eq!(first, second);
    }

    fn reading_order_positions(orientation: Orientation) -> Vec<Vec2> {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts);
        let mut children = vec![leaf(10.0, 5.0), leaf(20.0, 8.0), leaf(15.0, 12.0)];
        let layout = GridLayout::new(orientation, 2)
            .alignment(Alignment::Minimum)
            .spacing(1.0)
            .margin(2.0);

        let pref = layout.preferred_size(&ctx, &container(0.0, 0.0), &children);
        assert_eq!(pref, Size::new(40.0, 25.0));

        let area = container(pref.width, pref.height);
        layout.perform_layout(&ctx, &area, &mut children);
        let first: Vec<Vec2> = children.iter().map(|c| c.position()).collect();
        layout.perform_layout(&ctx, &area, &mut children);
        let second: Vec<Vec2> = children.iter().map(|c| c.position()).collect();
        assert_eq!(first, second);
        first
    }

    #[test]
    fn horizontal_grid_fills_rows_first() {
        // Columns 15/20, rows 8/12.
        assert_eq!(
            reading_order_positions(Orientation::Horizontal),
            vec![Vec2::new(2.0, 2.0), Vec2::new(18.0, 2.0), Vec2::new(2.0, 11.0)]
        );
    }

    #[test]
    fn vertical_grid_fills_columns_first() {
        // Columns 20/15, rows 12/8.
        assert_eq!(
            reading_order_positions(Orientation::Vertical),
            vec![Vec2::new(2.0, 2.0), Vec2::new(2.0, 15.0), Vec2::new(23.0, 2.0)]
        );
    }
}
