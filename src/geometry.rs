//! Box geometry shared by the resolver and the surface adapter
//!
//! All rectangles live in one viewport-relative coordinate space, with y
//! growing downwards.

/// An axis-aligned rectangle, stored by its edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rect extent");
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Create a rectangle from its four edges
    pub fn from_edges(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        debug_assert!(right >= left && bottom >= top, "inverted rect edges");
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// A rectangle of the given size anchored at the origin
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Move the rectangle by `dx`, `dy` without changing its size
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            top: self.top + dy,
            left: self.left + dx,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Check whether `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }
}

/// The axis a direction pushes the popper along
///
/// For `Vertical`, the primary coordinate is `top` and the cross coordinate
/// is `left`; `Horizontal` swaps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Extent of `rect` along the primary axis
    pub fn primary_size(self, rect: &Rect) -> f64 {
        match self {
            Axis::Vertical => rect.height(),
            Axis::Horizontal => rect.width(),
        }
    }

    /// Extent of `rect` along the cross axis
    pub fn secondary_size(self, rect: &Rect) -> f64 {
        match self {
            Axis::Vertical => rect.width(),
            Axis::Horizontal => rect.height(),
        }
    }

    pub fn primary_min(self, rect: &Rect) -> f64 {
        match self {
            Axis::Vertical => rect.top,
            Axis::Horizontal => rect.left,
        }
    }

    pub fn primary_max(self, rect: &Rect) -> f64 {
        match self {
            Axis::Vertical => rect.bottom,
            Axis::Horizontal => rect.right,
        }
    }

    pub fn secondary_min(self, rect: &Rect) -> f64 {
        match self {
            Axis::Vertical => rect.left,
            Axis::Horizontal => rect.top,
        }
    }

    pub fn secondary_max(self, rect: &Rect) -> f64 {
        match self {
            Axis::Vertical => rect.right,
            Axis::Horizontal => rect.bottom,
        }
    }

    /// Map a (primary, secondary) coordinate pair back to (top, left)
    pub fn to_top_left(self, primary: f64, secondary: f64) -> (f64, f64) {
        match self {
            Axis::Vertical => (primary, secondary),
            Axis::Horizontal => (secondary, primary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_derived_size() {
        let r = Rect::from_edges(100.0, 100.0, 150.0, 130.0);
        assert_eq!(r.width(), 50.0);
        assert_eq!(r.height(), 30.0);
    }

    #[test]
    fn test_rect_translate_keeps_size() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0).translate(5.0, -5.0);
        assert_eq!(r, Rect::from_edges(15.0, 15.0, 45.0, 55.0));
        assert_eq!(r.width(), 30.0);
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::sized(100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains_rect(&Rect::new(90.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_axis_vertical() {
        let r = Rect::new(1.0, 2.0, 30.0, 40.0);
        assert_eq!(Axis::Vertical.primary_size(&r), 40.0);
        assert_eq!(Axis::Vertical.secondary_size(&r), 30.0);
        assert_eq!(Axis::Vertical.primary_min(&r), 2.0);
        assert_eq!(Axis::Vertical.secondary_max(&r), 31.0);
        assert_eq!(Axis::Vertical.to_top_left(7.0, 9.0), (7.0, 9.0));
    }

    #[test]
    fn test_axis_horizontal() {
        let r = Rect::new(1.0, 2.0, 30.0, 40.0);
        assert_eq!(Axis::Horizontal.primary_size(&r), 30.0);
        assert_eq!(Axis::Horizontal.secondary_size(&r), 40.0);
        assert_eq!(Axis::Horizontal.primary_max(&r), 31.0);
        assert_eq!(Axis::Horizontal.secondary_min(&r), 2.0);
        assert_eq!(Axis::Horizontal.to_top_left(7.0, 9.0), (9.0, 7.0));
    }
}
