use std::collections::BTreeMap;

use lattice_engine::coords::{Axis, Size, Vec2};

use crate::context::LayoutCtx;
use crate::layout::{Alignment, ContainerGeometry, Layout};
use crate::widget::Element;

// ── Anchor ────────────────────────────────────────────────────────────────

/// Cell placement of one child in an [`AdvancedGridLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Column and row of the top-left cell.
    pub pos: [usize; 2],
    /// Number of columns and rows covered.
    pub span: [usize; 2],
    /// Horizontal and vertical alignment inside the covered cells.
    pub align: [Alignment; 2],
}

impl Anchor {
    /// A single cell, filled on both axes.
    pub fn new(x: usize, y: usize) -> Self {
        Self::spanning(x, y, 1, 1)
    }

    pub fn spanning(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { pos: [x, y], span: [w, h], align: [Alignment::Fill; 2] }
    }

    pub fn align(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.align = [horizontal, vertical];
        self
    }

    /// Index one past the last covered track on `axis`.
    #[inline]
    fn end(&self, axis: Axis) -> usize {
        self.pos[axis.index()] + self.span[axis.index()]
    }
}

// ── AdvancedGridLayout ────────────────────────────────────────────────────

/// Grid with explicitly configured tracks.
///
/// Every column and row has a base size and a stretch factor. A base size of
/// zero makes the track grow to fit the single-cell children placed in it.
/// Children are placed by [`Anchor`], keyed by their index among the
/// container's children; spare space goes to tracks by stretch factor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdvancedGridLayout {
    cols: Vec<f32>,
    rows: Vec<f32>,
    col_stretch: Vec<f32>,
    row_stretch: Vec<f32>,
    anchors: BTreeMap<usize, Anchor>,
    margin: f32,
}

impl AdvancedGridLayout {
    /// Tracks with the given base sizes and no stretch.
    pub fn new(cols: Vec<f32>, rows: Vec<f32>, margin: f32) -> Self {
        Self {
            col_stretch: vec![0.0; cols.len()],
            row_stretch: vec![0.0; rows.len()],
            cols,
            rows,
            anchors: BTreeMap::new(),
            margin,
        }
    }

    /// Builder form of [`set_anchor`](Self::set_anchor).
    pub fn with_anchor(mut self, child: usize, anchor: Anchor) -> Self {
        self.set_anchor(child, anchor);
        self
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin;
    }

    pub fn col_count(&self) -> usize {
        self.cols.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn append_col(&mut self, size: f32, stretch: f32) {
        self.cols.push(size);
        self.col_stretch.push(stretch);
    }

    pub fn append_row(&mut self, size: f32, stretch: f32) {
        self.rows.push(size);
        self.row_stretch.push(stretch);
    }

    /// Ignored with a warning when `col` does not exist.
    pub fn set_col_stretch(&mut self, col: usize, stretch: f32) {
        match self.col_stretch.get_mut(col) {
            Some(s) => *s = stretch,
            None => log::warn!("advanced grid: no column {col} to stretch"),
        }
    }

    /// Ignored with a warning when `row` does not exist.
    pub fn set_row_stretch(&mut self, row: usize, stretch: f32) {
        match self.row_stretch.get_mut(row) {
            Some(s) => *s = stretch,
            None => log::warn!("advanced grid: no row {row} to stretch"),
        }
    }

    pub fn set_anchor(&mut self, child: usize, anchor: Anchor) {
        self.anchors.insert(child, anchor);
    }

    pub fn anchor(&self, child: usize) -> Option<Anchor> {
        self.anchors.get(&child).copied()
    }

    fn tracks(&self, axis: Axis) -> (&[f32], &[f32]) {
        match axis {
            Axis::Horizontal => (&self.cols, &self.col_stretch),
            Axis::Vertical => (&self.rows, &self.row_stretch),
        }
    }

    /// Margins plus the title bar of a titled container.
    fn extra(&self, container: &ContainerGeometry) -> Size {
        let mut extra = Size::new(2.0 * self.margin, 2.0 * self.margin);
        if container.is_titled() {
            extra.height += container.header_height - self.margin / 2.0;
        }
        extra
    }

    /// Index and anchor of every visible child that can be placed, in child order.
    ///
    /// Runs once per pass: children without an anchor, or with an anchor past
    /// the configured tracks, are reported here and left out of the pass.
    fn placements(&self, children: &[Element]) -> Vec<(usize, Anchor)> {
        children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.visible())
            .filter_map(|(i, child)| {
                let Some(anchor) = self.anchor(i) else {
                    log::warn!("advanced grid: child {i} ({}) has no anchor, skipped", child.kind());
                    return None;
                };
                if !self.fits(&anchor) {
                    log::warn!("advanced grid: anchor {anchor:?} of child {i} is out of bounds, skipped");
                    return None;
                }
                Some((i, anchor))
            })
            .collect()
    }

    fn fits(&self, anchor: &Anchor) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            let count = self.tracks(axis).0.len();
            anchor.span[axis.index()] > 0 && anchor.end(axis) <= count
        })
    }

    /// Final size of every track on `axis`.
    fn compute_axis(
        &self,
        ctx: &LayoutCtx,
        axis: Axis,
        available: f32,
        children: &[Element],
        placed: &[(usize, Anchor)],
    ) -> Vec<f32> {
        let (sizes, stretch) = self.tracks(axis);
        let mut grid = sizes.to_vec();

        // Single-cell children first, so spanning children see grown tracks.
        for single in [true, false] {
            for &(index, anchor) in placed {
                let child = &children[index];
                let start = anchor.pos[axis.index()];
                let span = anchor.span[axis.index()];
                if (span == 1) != single {
                    continue;
                }

                let target = child.target_size(ctx).get(axis);
                let range = start..start + span;

                if single && sizes[start] == 0.0 {
                    grid[start] = grid[start].max(target);
                }
                let current: f32 = grid[range.clone()].iter().sum();
                let total_stretch: f32 = stretch[range.clone()].iter().sum();
                if target <= current {
                    continue;
                }
                if total_stretch == 0.0 {
                    log::warn!(
                        "advanced grid: {} needs {target} on {axis:?} but tracks {range:?} give {current} and cannot stretch",
                        child.kind()
                    );
                    continue;
                }

                let amount = (target - current) / total_stretch;
                for i in range {
                    grid[i] += (amount * stretch[i]).round();
                }
            }
        }

        let current: f32 = grid.iter().sum();
        let total_stretch: f32 = stretch.iter().sum();
        if current < available && total_stretch != 0.0 {
            let amount = (available - current) / total_stretch;
            for (cell, s) in grid.iter_mut().zip(stretch) {
                *cell += (amount * s).round();
            }
        }
        grid
    }

    fn compute_layout(
        &self,
        ctx: &LayoutCtx,
        container: &ContainerGeometry,
        children: &[Element],
        placed: &[(usize, Anchor)],
    ) -> [Vec<f32>; 2] {
        let available = container.available() - self.extra(container);
        Axis::ALL.map(|axis| self.compute_axis(ctx, axis, available.get(axis), children, placed))
    }
}

impl Layout for AdvancedGridLayout {
    fn preferred_size(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &[Element]) -> Size {
        // Only configured and content sizes count; the container's own size
        // must not feed back into its preferred size.
        let r#unsized = ContainerGeometry { fixed_size: Size::ZERO, size: Size::ZERO, ..*container };
        let placed = self.placements(children);
        let [cols, rows] = self.compute_layout(ctx, &r#unsized, children, &placed);
        let size = Size::new(cols.iter().sum(), rows.iter().sum()) + self.extra(container);
        log::trace!("advanced grid preferred size {size:?}");
        size
    }

    fn perform_layout(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &mut [Element]) {
        let placed = self.placements(children);
        let grid = self.compute_layout(ctx, container, children, &placed);

        let row_start = if container.is_titled() {
            container.header_height + self.margin / 2.0
        } else {
            self.margin
        };
        let offsets = [(Axis::Horizontal, self.margin), (Axis::Vertical, row_start)].map(|(axis, start)| {
            let mut edges = Vec::with_capacity(grid[axis.index()].len() + 1);
            edges.push(start);
            for cell in &grid[axis.index()] {
                let last = edges[edges.len() - 1];
                edges.push(last + cell);
            }
            edges
        });

        for (index, anchor) in placed {
            let child = &mut children[index];
            let fixed = child.fixed_size();
            let mut target = fixed.fixed_or(child.preferred_size(ctx));
            let mut pos = Vec2::zero();

            for axis in Axis::ALL {
                let edges = &offsets[axis.index()];
                let start = edges[anchor.pos[axis.index()]];
                let cell = edges[anchor.end(axis)] - start;
                let (offset, length) = anchor.align[axis.index()].place(cell, target.get(axis), fixed.get(axis));
                pos.set(axis, start + offset);
                target.set(axis, length);
            }

            child.set_position(pos);
            child.set_size(target);
            child.perform_layout(ctx);
        }
    }
}
