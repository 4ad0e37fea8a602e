//! Small value types for positions and extents.
//!
//! # Overview
//!
//! - [`Point`]: a position, or a vector between two positions
//! - [`Size`]: width and height
//! - [`Bounds`]: an axis-aligned box
//! - [`Insets`]: margins on four sides
//! - [`Interval`]: a closed range on one axis
//!
//! # Coordinate Systems
//!
//! Two coordinate systems meet in this crate. Shapes in a
//! [`Diagram`](crate::diagram::Diagram) are placed in *data space*, where
//! Y increases upward like a chart axis. Rendering maps them through a
//! [`Viewport`](crate::draw::Viewport) into *pixel space*, which follows SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use abacus_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Component-wise sum.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Component-wise difference, `self - other`.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Length of the vector from the origin.
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the vector rotated a quarter turn: `(x, y)` becomes `(y, -x)`.
    ///
    /// In pixel space this turns a rightward vector into an upward one.
    ///
    /// ```
    /// # use abacus_core::geometry::Point;
    /// let right = Point::new(4.0, 0.0);
    /// assert_eq!(right.perpendicular(), Point::new(0.0, -4.0));
    /// ```
    pub fn perpendicular(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }

    /// A box of `size` centered here.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Width and height, in whatever unit the caller works in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Whether both dimensions are exactly zero.
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// An axis-aligned box stored as its two extreme corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
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

    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates the smallest bounds containing all `points`.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let seed = Self::new_from_center(first, Size::default());
        Some(points.fold(seed, |acc, p| {
            acc.merge(&Self::new_from_center(p, Size::default()))
        }))
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

    /// Width and height of the box.
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns true if `point` lies inside or on the edge of the bounds.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use abacus_core::geometry::{Bounds, Point, Size};
    /// let title = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let axes = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = title.merge(&axes);
    /// assert_eq!(combined.min_x(), 0.0);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// The overlap of two bounds, or `None` when they do not touch.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let overlap = Self {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        };
        (overlap.min_x <= overlap.max_x && overlap.min_y <= overlap.max_y).then_some(overlap)
    }

    /// Grows the box outward by `insets`.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }
}

/// Margins on the four sides of a box, in CSS order.
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

    /// The same margin on every side.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
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

    /// `left + right`
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// A closed interval `[min, max]` on a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min: f32,
    max: f32,
}

impl Interval {
    /// Creates an interval, swapping the ends if they are given in reverse.
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(self) -> f32 {
        self.min
    }

    pub fn max(self) -> f32 {
        self.max
    }

    /// Length of the interval, never negative.
    pub fn length(self) -> f32 {
        self.max - self.min
    }

    /// Position of `value` within the interval as a fraction, 0.0 at `min`.
    ///
    /// A degenerate interval maps every value to 0.5.
    pub fn fraction(self, value: f32) -> f32 {
        let length = self.length();
        if length <= f32::EPSILON {
            return 0.5;
        }
        (value - self.min) / length
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.add_point(p2), Point::new(4.0, 6.0));
        assert_eq!(p2.sub_point(p1), Point::new(2.0, 2.0));
        assert_eq!(p1.scale(2.0), Point::new(2.0, 4.0));
        assert_approx_eq!(f32, Point::new(3.0, 4.0).hypot(), 5.0);
    }

    #[test]
    fn test_point_perpendicular_turns_left_in_pixel_space() {
        // A leftward vector turns downward (positive y in pixel space).
        let left = Point::new(-2.0, 0.0);
        assert_eq!(left.perpendicular(), Point::new(0.0, 2.0));
    }

    #[test]
    fn test_bounds_from_points() {
        assert!(Bounds::from_points(Vec::new()).is_none());

        let bounds = Bounds::from_points([
            Point::new(1.0, 5.0),
            Point::new(-2.0, 3.0),
            Point::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(bounds.min_x(), -2.0);
        assert_eq!(bounds.max_x(), 4.0);
        assert_eq!(bounds.min_y(), -1.0);
        assert_eq!(bounds.max_y(), 5.0);
    }

    #[test]
    fn test_bounds_intersect() {
        let axes = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 50.0));
        let arc = Bounds::new_from_top_left(Point::new(60.0, -1e7), Size::new(1e8, 2e7));

        let clipped = axes.intersect(&arc).unwrap();
        assert_eq!(clipped.min_x(), 60.0);
        assert_eq!(clipped.max_x(), 100.0);
        assert_eq!(clipped.min_y(), 0.0);
        assert_eq!(clipped.max_y(), 50.0);

        let outside = Bounds::new_from_top_left(Point::new(200.0, 0.0), Size::new(5.0, 5.0));
        assert!(axes.intersect(&outside).is_none());
    }

    #[test]
    fn test_bounds_padding_and_contains() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(20.0, 10.0));
        let padded = bounds.add_padding(Insets::uniform(5.0));
        assert_eq!((padded.min_x(), padded.min_y()), (5.0, 5.0));
        assert_eq!(padded.to_size(), Size::new(30.0, 20.0));
        assert!(padded.contains(Point::new(5.0, 25.0)));
        assert!(!bounds.contains(Point::new(5.0, 25.0)));
        assert_eq!(bounds.center(), Point::new(20.0, 15.0));
    }

    #[test]
    fn test_size_scale() {
        assert_eq!(Size::new(10.0, 3.0).scale(120.0), Size::new(1200.0, 360.0));
        assert!(Size::default().is_zero());
        assert!(!Size::new(0.0, 1.0).is_zero());

        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((insets.horizontal_sum(), insets.vertical_sum()), (6.0, 4.0));
    }

    #[test]
    fn test_interval() {
        let interval = Interval::new(4.0, -6.0);
        assert_eq!(interval.min(), -6.0);
        assert_eq!(interval.max(), 4.0);
        assert_approx_eq!(f32, interval.length(), 10.0);
        assert_approx_eq!(f32, interval.fraction(-1.0), 0.5);
        assert_approx_eq!(f32, Interval::new(2.0, 2.0).fraction(9.0), 0.5);
    }
}
