use lattice_engine::coords::{Size, Vec2};

use crate::context::LayoutCtx;
use crate::layout::{Alignment, ContainerGeometry, Layout, Orientation};
use crate::widget::Element;

/// Lays children out one after another along a single axis.
///
/// Children are separated by `spacing` and surrounded by `margin` on every
/// side. `alignment` decides where each child sits on the cross axis.
///
/// # Example
/// ```rust,ignore
/// Panel::new()
///     .layout(BoxLayout::new(Orientation::Horizontal, Alignment::Center).margin(10.0).spacing(5.0))
///     .child(ok_button)
///     .child(cancel_button)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxLayout {
    orientation: Orientation,
    alignment: Alignment,
    margin: f32,
    spacing: f32,
}

impl BoxLayout {
    pub fn new(orientation: Orientation, alignment: Alignment) -> Self {
        Self { orientation, alignment, margin: 0.0, spacing: 0.0 }
    }

    pub fn margin(mut self, v: f32) -> Self {
        self.margin = v;
        self
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin;
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self::new(Orientation::Horizontal, Alignment::Center)
    }
}

impl Layout for BoxLayout {
    fn preferred_size(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &[Element]) -> Size {
        let axis1 = self.orientation;
        let axis2 = axis1.cross();
        let mut size = Size::new(2.0 * self.margin, 2.0 * self.margin);

        // A header sits on top: it extends the main run of a column, and
        // pushes a row's cross extent down.
        let mut y_offset = 0.0;
        if container.is_titled() {
            if axis1 == Orientation::Vertical {
                size.height += container.header_height - self.margin / 2.0;
            } else {
                y_offset = container.header_height;
            }
        }

        let mut first = true;
        for child in children.iter().filter(|c| c.visible()) {
            if !first {
                *size.get_mut(axis1) += self.spacing;
            }
            first = false;

            let target = child.target_size(ctx);
            *size.get_mut(axis1) += target.get(axis1);
            let cross = size.get(axis2).max(target.get(axis2) + 2.0 * self.margin);
            size.set(axis2, cross);
        }

        size.height += y_offset;
        log::trace!("box layout preferred size {size:?}");
        size
    }

    fn perform_layout(&self, ctx: &LayoutCtx, container: &ContainerGeometry, children: &mut [Element]) {
        let axis1 = self.orientation;
        let axis2 = axis1.cross();
        let mut container_size = container.available();

        let mut position = self.margin;
        let mut y_offset = 0.0;
        if container.is_titled() {
            if axis1 == Orientation::Vertical {
                position += container.header_height - self.margin / 2.0;
            } else {
                y_offset = container.header_height;
                container_size.height -= y_offset;
            }
        }

        let mut first = true;
        for child in children.iter_mut().filter(|c| c.visible()) {
            if !first {
                position += self.spacing;
            }
            first = false;

            let fixed = child.fixed_size();
            let mut target = fixed.fixed_or(child.preferred_size(ctx));
            let mut pos = Vec2::new(0.0, y_offset);
            pos.set(axis1, position);

            let cross_slot = container_size.get(axis2);
            let cross_pos = pos.get_mut(axis2);
            match self.alignment {
                Alignment::Minimum => *cross_pos += self.margin,
                Alignment::Center => *cross_pos += (cross_slot - target.get(axis2)) / 2.0,
                Alignment::Maximum => {
                    *cross_pos += cross_slot - target.get(axis2) - 2.0 * self.margin;
                }
                Alignment::Fill => {
                    *cross_pos += self.margin;
                    let stretched = if fixed.get(axis2) != 0.0 {
                        fixed.get(axis2)
                    } else {
                        cross_slot - 2.0 * self.margin
                    };
                    target.set(axis2, stretched);
                }
            }

            child.set_position(pos);
            child.set_size(target);
            child.perform_layout(ctx);

            position += target.get(axis1);
        }
    }
}
