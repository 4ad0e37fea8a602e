//! Row-major dot grid shared by the grouping and combine figures.

use abacus_core::geometry::{Interval, Point, Size};

const MIN_COLUMNS: i64 = 6;
const MAX_COLUMNS: i64 = 20;

/// A grid of unit cells holding `total` items, filled left to right and
/// top to bottom.
///
/// # Examples
///
/// ```
/// # use abacus::figure::DotGrid;
/// # use abacus_core::geometry::Point;
/// let grid = DotGrid::new(20, 12);
/// assert_eq!((grid.cols(), grid.rows()), (12, 2));
///
/// // The first item sits in the top-left cell.
/// assert_eq!(grid.center(0), Point::new(0.5, 1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotGrid {
    cols: i64,
    rows: i64,
}

impl DotGrid {
    /// Lays out `total` items with `items_per_row` clamped to 6..=20 columns.
    ///
    /// An empty grid still has one row.
    pub fn new(total: i64, items_per_row: i64) -> Self {
        let cols = items_per_row.clamp(MIN_COLUMNS, MAX_COLUMNS);
        let rows = if total > 0 {
            total.saturating_add(cols - 1) / cols
        } else {
            1
        };
        Self { cols, rows }
    }

    pub fn cols(&self) -> i64 {
        self.cols
    }

    pub fn rows(&self) -> i64 {
        self.rows
    }

    /// Center of the cell holding item `index`.
    pub fn center(&self, index: i64) -> Point {
        let row = index / self.cols;
        let col = index % self.cols;
        Point::new(
            col as f32 + 0.5,
            (self.rows - 1 - row) as f32 + 0.5,
        )
    }

    /// Data range of the x axis.
    pub fn x_range(&self) -> Interval {
        Interval::new(0.0, self.cols as f32)
    }

    /// Data range of the y axis, with one spare row on top for text.
    pub fn y_range(&self) -> Interval {
        Interval::new(0.0, self.rows as f32 + 1.0)
    }

    /// Figure size in inches, capped at `max_width` × `max_height`.
    pub fn figure_size(&self, max_width: f32, max_height: f32) -> Size {
        Size::new(
            (1.0 + self.cols as f32 * 0.6).min(max_width),
            (1.0 + self.rows as f32 * 0.7).min(max_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_columns_are_clamped() {
        assert_eq!(DotGrid::new(10, 2).cols(), 6);
        assert_eq!(DotGrid::new(10, 50).cols(), 20);
        assert_eq!(DotGrid::new(10, 12).cols(), 12);
    }

    #[test]
    fn test_rows() {
        assert_eq!(DotGrid::new(0, 12).rows(), 1);
        assert_eq!(DotGrid::new(12, 12).rows(), 1);
        assert_eq!(DotGrid::new(13, 12).rows(), 2);
        assert_eq!(DotGrid::new(63, 12).rows(), 6);
    }

    #[test]
    fn test_centers_fill_top_row_first() {
        let grid = DotGrid::new(14, 12);
        assert_eq!(grid.center(11), Point::new(11.5, 1.5));
        assert_eq!(grid.center(12), Point::new(0.5, 0.5));
    }

    #[test]
    fn test_figure_size_is_capped() {
        let grid = DotGrid::new(400, 20);
        let size = grid.figure_size(14.0, 8.0);
        assert_approx_eq!(f32, size.width(), 13.0);
        assert_approx_eq!(f32, size.height(), 8.0);
    }
}
