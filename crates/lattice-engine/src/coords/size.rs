use core::ops::{Add, Sub};

use super::Axis;

/// Width/height pair in logical pixels.
///
/// Doubles as the *fixed size* of a widget, where zero on an axis means
/// "no override" (see [`Size::fixed_or`]).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::Horizontal => &mut self.width,
            Axis::Vertical => &mut self.height,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, v: f32) {
        *self.get_mut(axis) = v;
    }

    /// Treats `self` as a fixed-size override: each non-zero axis wins,
    /// zero axes fall back to `preferred`.
    #[inline]
    #[must_use]
    pub fn fixed_or(self, preferred: Size) -> Size {
        Size::new(
            if self.width != 0.0 { self.width } else { preferred.width },
            if self.height != 0.0 { self.height } else { preferred.height },
        )
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

impl Add for Size {
    type Output = Size;
    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Size;
    #[inline]
    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_or_prefers_non_zero_axes() {
        let fixed = Size::new(40.0, 0.0);
        let preferred = Size::new(10.0, 12.0);
        assert_eq!(fixed.fixed_or(preferred), Size::new(40.0, 12.0));
    }

    #[test]
    fn fixed_or_zero_is_preferred() {
        let preferred = Size::new(10.0, 12.0);
        assert_eq!(Size::ZERO.fixed_or(preferred), preferred);
    }

    #[test]
    fn axis_accessors() {
        let mut s = Size::new(3.0, 4.0);
        assert_eq!(s.get(Axis::Horizontal), 3.0);
        assert_eq!(s.get(Axis::Vertical), 4.0);
        *s.get_mut(Axis::Vertical) += 1.0;
        s.set(Axis::Horizontal, 9.0);
        assert_eq!(s, Size::new(9.0, 5.0));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Size::new(1.0, 2.0) + Size::new(3.0, 4.0), Size::new(4.0, 6.0));
        assert_eq!(Size::new(5.0, 5.0) - Size::new(1.0, 2.0), Size::new(4.0, 3.0));
        assert!(Size::ZERO.is_zero());
        assert!(!Size::new(0.0, 1.0).is_zero());
    }
}
