//! Mapping from data space onto a pixel rectangle.

use crate::geometry::{Bounds, Interval, Point};

const POINTS_PER_INCH: f32 = 72.0;

/// Maps data coordinates (Y up) into a pixel-space plot area (Y down).
///
/// The viewport also carries the output resolution so that sizes given in
/// typographic points (font sizes, stroke widths, marker diameters) can be
/// converted to pixels consistently.
///
/// # Examples
///
/// ```
/// # use abacus_core::draw::Viewport;
/// # use abacus_core::geometry::{Bounds, Interval, Point, Size};
/// let area = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 50.0));
/// let viewport = Viewport::new(Interval::new(0.0, 10.0), Interval::new(0.0, 5.0), area, 72.0);
///
/// let top_right = viewport.to_pixel(Point::new(10.0, 5.0));
/// assert_eq!(top_right, Point::new(100.0, 0.0));
/// assert_eq!(viewport.points(12.0), 12.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    x_range: Interval,
    y_range: Interval,
    area: Bounds,
    px_per_pt: f32,
}

impl Viewport {
    /// Creates a viewport for the given data ranges, pixel area and resolution.
    pub fn new(x_range: Interval, y_range: Interval, area: Bounds, dpi: f32) -> Self {
        Self {
            x_range,
            y_range,
            area,
            px_per_pt: dpi / POINTS_PER_INCH,
        }
    }

    /// The pixel rectangle the data ranges are mapped onto.
    pub fn area(&self) -> Bounds {
        self.area
    }

    /// Maps a data-space point to pixel space.
    pub fn to_pixel(&self, point: Point) -> Point {
        Point::new(
            self.area.min_x() + self.x_range.fraction(point.x()) * self.area.width(),
            self.area.max_y() - self.y_range.fraction(point.y()) * self.area.height(),
        )
    }

    /// Converts a horizontal data length to pixels.
    pub fn scale_x(&self, length: f32) -> f32 {
        length * self.area.width() / self.x_range.length().max(f32::EPSILON)
    }

    /// Converts a vertical data length to pixels.
    pub fn scale_y(&self, length: f32) -> f32 {
        length * self.area.height() / self.y_range.length().max(f32::EPSILON)
    }

    /// Converts a length in typographic points to pixels.
    pub fn points(&self, points: f32) -> f32 {
        points * self.px_per_pt
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::geometry::Size;

    fn viewport() -> Viewport {
        let area = Bounds::new_from_top_left(Point::new(20.0, 10.0), Size::new(200.0, 100.0));
        Viewport::new(Interval::new(-5.0, 5.0), Interval::new(0.0, 2.0), area, 120.0)
    }

    #[test]
    fn test_to_pixel_flips_y() {
        let vp = viewport();
        let bottom_left = vp.to_pixel(Point::new(-5.0, 0.0));
        assert_approx_eq!(f32, bottom_left.x(), 20.0);
        assert_approx_eq!(f32, bottom_left.y(), 110.0);

        let center = vp.to_pixel(Point::new(0.0, 1.0));
        assert_approx_eq!(f32, center.x(), 120.0);
        assert_approx_eq!(f32, center.y(), 60.0);
    }

    #[test]
    fn test_scales() {
        let vp = viewport();
        assert_approx_eq!(f32, vp.scale_x(1.0), 20.0);
        assert_approx_eq!(f32, vp.scale_y(1.0), 50.0);
        assert_approx_eq!(f32, vp.points(72.0), 120.0);
    }
}
