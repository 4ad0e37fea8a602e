//! Rows × columns array for multiplication.

use log::{debug, warn};

use abacus_core::{
    diagram::{Axis, Diagram, DiagramKind, Tick},
    draw::{Rect, Shape, StrokeDefinition},
    geometry::{Interval, Point, Size},
};

use super::{Figure, titled};
use crate::{request::ArrayRequest, theme::Theme};

const CELL_INCHES: f32 = 0.7;

/// Normalized dimensions and fill count of an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayModel {
    rows: i64,
    cols: i64,
    filled: i64,
}

impl ArrayModel {
    /// Normalizes `request`: a non-positive dimension collapses the array to
    /// 1 × 1, and the fill count is clamped to the number of cells.
    pub fn new(request: &ArrayRequest) -> Self {
        let (mut rows, mut cols) = (request.rows(), request.cols());
        if rows <= 0 || cols <= 0 {
            warn!(rows, cols; "Array dimensions must be positive, using 1 x 1");
            rows = 1;
            cols = 1;
        }

        let total = rows.saturating_mul(cols);
        let requested = request.fill_until().unwrap_or(total);
        let filled = requested.clamp(0, total);
        if filled != requested {
            warn!(requested, filled; "Clamped array fill count");
        }

        debug!(rows, cols, filled; "Array model");
        Self { rows, cols, filled }
    }

    pub fn rows(&self) -> i64 {
        self.rows
    }

    pub fn cols(&self) -> i64 {
        self.cols
    }

    /// Number of cells.
    pub fn total(&self) -> i64 {
        self.rows.saturating_mul(self.cols)
    }

    /// Number of colored cells.
    pub fn filled(&self) -> i64 {
        self.filled
    }

    /// Whether the cell at `row`, `col` (row 0 on top) is colored.
    pub fn is_filled(&self, row: i64, col: i64) -> bool {
        row * self.cols + col < self.filled
    }
}

impl Figure for ArrayRequest {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Array
    }

    fn build(&self, theme: &Theme) -> Diagram {
        let model = ArrayModel::new(self);
        let (rows, cols) = (model.rows(), model.cols());
        let border = StrokeDefinition::new(theme.border(), 2.0);

        let mut shapes: Vec<Shape> = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let fill = if model.is_filled(row, col) {
                    theme.palette().get(row as usize)
                } else {
                    theme.empty()
                };
                let origin = Point::new(col as f32, (rows - 1 - row) as f32);
                let cell = Rect::new(origin, Size::new(1.0, 1.0), fill).with_stroke(border.clone());
                shapes.push(cell.into());
            }
        }

        let unlabeled = |count: i64| -> Vec<Tick> {
            (0..=count).map(|v| Tick::unlabeled(v as f32)).collect()
        };
        let figure_size = Size::new(
            (cols as f32 * CELL_INCHES).clamp(4.0, 14.0),
            (rows as f32 * CELL_INCHES).clamp(3.0, 10.0),
        );

        let diagram = Diagram::new(
            DiagramKind::Array,
            figure_size,
            Axis::new(Interval::new(0.0, cols as f32), unlabeled(cols)),
            Axis::new(Interval::new(0.0, rows as f32), unlabeled(rows)),
            shapes,
        );
        titled(diagram, self.title())
    }
}
