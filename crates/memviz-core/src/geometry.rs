//! Geometric primitives for positioning illustration elements.
//!
//! The coordinate system matches SVG: origin at the top-left, x increasing
//! rightward, y increasing downward. All values are `f32` pixels.
//!
//! - [`Point`] - a 2D coordinate
//! - [`Size`] - width and height
//! - [`Bounds`] - an axis-aligned rectangle given by min/max coordinates
//! - [`Insets`] - per-side padding values

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Component-wise addition.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Component-wise subtraction.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// The point halfway between this point and `other`.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance from the origin.
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Treats this point as a center and expands it into bounds of the given
    /// size.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// The component-wise maximum of two sizes.
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Grows this size by the given insets on each side.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Multiplies both dimensions by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// True if both dimensions are zero.
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// An axis-aligned rectangle given by its minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds centered on `center` with the given size.
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates bounds from a top-left corner and a size.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// The center point of the bounds.
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// The top-left corner.
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// The smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by `offset`.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }
}

/// Spacing around an element, with potentially different values per side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same inset on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric insets: `vertical` on top/bottom, `horizontal` on
    /// left/right.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Sum of the left and right insets.
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 2.0);

        let sum = a.add_point(b);
        assert_eq!(sum, Point::new(4.0, 6.0));

        let diff = a.sub_point(b);
        assert_eq!(diff, Point::new(2.0, 2.0));

        assert_eq!(a.hypot(), 5.0);
        assert_eq!(a.scale(2.0), Point::new(6.0, 8.0));
    }

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(4.0, 6.0));
        assert_eq!(mid, Point::new(2.0, 3.0));
    }

    #[test]
    fn test_point_to_bounds_centers() {
        let bounds = Point::new(10.0, 20.0).to_bounds(Size::new(6.0, 8.0));
        assert_eq!(bounds.min_x(), 7.0);
        assert_eq!(bounds.min_y(), 16.0);
        assert_eq!(bounds.max_x(), 13.0);
        assert_eq!(bounds.max_y(), 24.0);
        assert_eq!(bounds.center(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_size_operations() {
        let size = Size::new(10.0, 20.0);

        assert_eq!(size.max(Size::new(15.0, 18.0)), Size::new(15.0, 20.0));
        assert_eq!(size.scale(0.5), Size::new(5.0, 10.0));
        assert!(!size.is_zero());
        assert!(Size::default().is_zero());
    }

    #[test]
    fn test_size_add_padding() {
        let padded = Size::new(10.0, 20.0).add_padding(Insets::uniform(5.0));
        assert_eq!(padded, Size::new(20.0, 30.0));

        let asym = Size::new(10.0, 20.0).add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(asym, Size::new(16.0, 24.0));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(bounds.min_point(), Point::new(10.0, 20.0));
        assert_eq!(bounds.max_x(), 40.0);
        assert_eq!(bounds.max_y(), 60.0);
        assert_eq!(bounds.to_size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_bounds_merge() {
        let a = Bounds::new_from_top_left(Point::new(1.0, 2.0), Size::new(4.0, 4.0));
        let b = Bounds::new_from_top_left(Point::new(3.0, 0.0), Size::new(5.0, 4.0));

        let merged = a.merge(&b);
        assert_eq!(merged.min_x(), 1.0);
        assert_eq!(merged.min_y(), 0.0);
        assert_eq!(merged.max_x(), 8.0);
        assert_eq!(merged.max_y(), 6.0);
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::new_from_top_left(Point::new(1.0, 2.0), Size::new(4.0, 4.0));
        let moved = bounds.translate(Point::new(3.0, -1.0));

        assert_eq!(moved.min_x(), 4.0);
        assert_eq!(moved.min_y(), 1.0);
        assert_eq!(moved.width(), 4.0);
        assert_eq!(moved.height(), 4.0);
    }

    #[test]
    fn test_insets_sums() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal_sum(), 6.0);
        assert_eq!(insets.vertical_sum(), 4.0);

        let sym = Insets::symmetric(2.0, 6.0);
        assert_eq!(sym.top(), 2.0);
        assert_eq!(sym.bottom(), 2.0);
        assert_eq!(sym.left(), 6.0);
        assert_eq!(sym.right(), 6.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    /// Addition is commutative.
    fn check_point_add_is_commutative(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let a = p1.add_point(p2);
        let b = p2.add_point(p1);
        prop_assert!(approx_eq!(f32, a.x(), b.x()));
        prop_assert!(approx_eq!(f32, a.y(), b.y()));
        Ok(())
    }

    /// The midpoint lies within the bounding box of both points.
    fn check_midpoint_is_between(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let mid = p1.midpoint(p2);
        prop_assert!(mid.x() >= p1.x().min(p2.x()) && mid.x() <= p1.x().max(p2.x()));
        prop_assert!(mid.y() >= p1.y().min(p2.y()) && mid.y() <= p1.y().max(p2.y()));
        Ok(())
    }

    /// Merged bounds contain both inputs.
    fn check_merge_contains_both(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged = b1.merge(&b2);
        for b in [b1, b2] {
            prop_assert!(merged.min_x() <= b.min_x() + 0.001);
            prop_assert!(merged.min_y() <= b.min_y() + 0.001);
            prop_assert!(merged.max_x() >= b.max_x() - 0.001);
            prop_assert!(merged.max_y() >= b.max_y() - 0.001);
        }
        Ok(())
    }

    /// Center/size round-trips through `Bounds::new_from_center`.
    fn check_center_roundtrip(p: Point) -> Result<(), TestCaseError> {
        let bounds = p.to_bounds(Size::new(40.0, 30.0));
        let center = bounds.center();
        prop_assert!(approx_eq!(f32, center.x(), p.x(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, center.y(), p.y(), epsilon = 0.001));
        Ok(())
    }

    proptest! {
        #[test]
        fn point_add_is_commutative(p1 in point_strategy(), p2 in point_strategy()) {
            check_point_add_is_commutative(p1, p2)?;
        }

        #[test]
        fn midpoint_is_between(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_between(p1, p2)?;
        }

        #[test]
        fn merge_contains_both(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_merge_contains_both(b1, b2)?;
        }

        #[test]
        fn center_roundtrip(p in point_strategy()) {
            check_center_roundtrip(p)?;
        }
    }
}
