//! Two sets of dots joined together, or with some taken away.

use log::{debug, warn};

use abacus_core::{
    color::Color,
    diagram::{Axis, Diagram, DiagramKind},
    draw::{Circle, HorizontalAlign, Label, Shape, StrokeDefinition, VerticalAlign},
    geometry::Point,
};

use super::{DotGrid, Figure, titled};
use crate::{
    request::{CombineRequest, DotsMode},
    theme::Theme,
};

const DOT_RADIUS: f32 = 0.28;
const REMOVED_ALPHA: f32 = 0.3;
const CROSS: &str = "✖";

/// Counts and grid of a combine/takeaway figure.
///
/// # Examples
///
/// ```
/// # use abacus::figure::CombineModel;
/// # use abacus::request::{CombineRequest, DotsMode};
/// let model = CombineModel::new(&CombineRequest::new(12, 4, DotsMode::Subtract), 12);
/// assert_eq!((model.total(), model.removed()), (12, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombineModel {
    mode: DotsMode,
    count_a: i64,
    count_b: i64,
    total: i64,
    removed: i64,
    grid: DotGrid,
}

impl CombineModel {
    /// Normalizes `request`; `default_per_row` is used when the request does
    /// not set a row width.
    pub fn new(request: &CombineRequest, default_per_row: i64) -> Self {
        let count_a = request.count_a().max(0);
        let count_b = request.count_b().max(0);
        if count_a != request.count_a() || count_b != request.count_b() {
            warn!(count_a = request.count_a(), count_b = request.count_b(); "Negative dot count, using 0");
        }

        let mode = request.mode();
        let (total, removed) = match mode {
            DotsMode::Add => (count_a.saturating_add(count_b), 0),
            DotsMode::Subtract => (count_a, count_a.min(count_b)),
        };

        let grid = DotGrid::new(total, request.items_per_row().unwrap_or(default_per_row));
        debug!(mode = mode.to_string(), total, removed; "Combine model");

        Self {
            mode,
            count_a,
            count_b,
            total,
            removed,
            grid,
        }
    }

    pub fn mode(&self) -> DotsMode {
        self.mode
    }

    pub fn count_a(&self) -> i64 {
        self.count_a
    }

    pub fn count_b(&self) -> i64 {
        self.count_b
    }

    /// Number of dots drawn.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Number of dots crossed out, always the leading ones.
    pub fn removed(&self) -> i64 {
        self.removed
    }

    pub fn grid(&self) -> DotGrid {
        self.grid
    }

    pub fn is_removed(&self, index: i64) -> bool {
        index < self.removed
    }
}

impl Figure for CombineRequest {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Combine
    }

    fn build(&self, theme: &Theme) -> Diagram {
        let model = CombineModel::new(self, theme.items_per_row());
        let grid = model.grid();
        let palette = theme.palette();

        let mut shapes: Vec<Shape> = Vec::new();
        for index in 0..model.total() {
            let center = grid.center(index);
            let fill = match model.mode() {
                DotsMode::Add if index < model.count_a() => palette.get(0),
                DotsMode::Add => palette.get(2),
                DotsMode::Subtract => palette.get(0),
            };

            if model.is_removed(index) {
                shapes.push(dot(center, fill, theme.border(), REMOVED_ALPHA));
                let cross = Label::new(center, CROSS, theme.text(18.0, true, theme.ink()))
                    .with_align(HorizontalAlign::Center, VerticalAlign::Center);
                shapes.push(cross.into());
            } else {
                shapes.push(dot(center, fill, theme.border(), 1.0));
            }
        }

        let diagram = Diagram::new(
            DiagramKind::Combine,
            grid.figure_size(14.0, 8.0),
            Axis::bare(grid.x_range()),
            Axis::bare(grid.y_range()),
            shapes,
        );
        titled(diagram, self.title())
    }
}

/// A bordered dot; `alpha` fades fill and border together.
fn dot(center: Point, fill: Color, border: Color, alpha: f32) -> Shape {
    let (fill, border) = if alpha < 1.0 {
        (fill.with_alpha(alpha), border.with_alpha(alpha))
    } else {
        (fill, border)
    };
    let stroke = StrokeDefinition::new(border, 2.0);
    Circle::new(center, DOT_RADIUS, fill)
        .with_stroke(stroke)
        .into()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_seven_plus_five() {
        let theme = Theme::default();
        let diagram = CombineRequest::new(7, 5, DotsMode::Add).build(&theme);

        assert_eq!(diagram.circles().count(), 12);
        let first = diagram.circles().filter(|c| c.fill() == theme.palette().get(0)).count();
        let second = diagram.circles().filter(|c| c.fill() == theme.palette().get(2)).count();
        assert_eq!((first, second), (7, 5));
        assert!(diagram.find_label(CROSS).is_none());
    }

    #[test]
    fn test_twelve_take_away_four() {
        let theme = Theme::default();
        let diagram = CombineRequest::new(12, 4, DotsMode::Subtract).build(&theme);

        assert_eq!(diagram.circles().count(), 12);
        let faded: Vec<bool> = diagram.circles().map(|c| c.fill().alpha() < 1.0).collect();
        assert_eq!(faded.iter().filter(|f| **f).count(), 4);
        assert!(faded[..4].iter().all(|f| *f));
        assert_eq!(diagram.labels().filter(|l| l.content() == CROSS).count(), 4);
    }

    #[test]
    fn test_cannot_remove_more_than_present() {
        let model = CombineModel::new(&CombineRequest::new(3, 10, DotsMode::Subtract), 12);
        assert_eq!((model.total(), model.removed()), (3, 3));
    }

    #[test]
    fn test_negative_counts_become_zero() {
        let model = CombineModel::new(&CombineRequest::new(-4, 6, DotsMode::Add), 12);
        assert_eq!((model.count_a(), model.total()), (0, 6));

        let diagram = CombineRequest::new(-1, -1, DotsMode::Add).build(&Theme::default());
        assert_eq!(diagram.circles().count(), 0);
        assert_eq!(diagram.y_axis().range().max(), 2.0);
    }

    #[test]
    fn test_items_per_row_override() {
        let request = CombineRequest::new(10, 0, DotsMode::Add).with_items_per_row(6);
        let model = CombineModel::new(&request, 12);
        assert_eq!((model.grid().cols(), model.grid().rows()), (6, 2));
    }

    proptest! {
        #[test]
        fn leading_dots_are_removed(a in 0i64..80, b in 0i64..80) {
            let theme = Theme::default();
            let diagram = CombineRequest::new(a, b, DotsMode::Subtract).build(&theme);
            let removed = a.min(b) as usize;

            let faded: Vec<bool> = diagram.circles().map(|c| c.fill().alpha() < 1.0).collect();
            prop_assert_eq!(faded.len(), a as usize);
            prop_assert!(faded[..removed].iter().all(|f| *f));
            prop_assert!(faded[removed..].iter().all(|f| !*f));
        }

        #[test]
        fn add_mode_draws_both_sets(a in 0i64..80, b in 0i64..80) {
            let diagram = CombineRequest::new(a, b, DotsMode::Add).build(&Theme::default());
            prop_assert_eq!(diagram.circles().count() as i64, a + b);
        }

        #[test]
        fn identical_requests_build_identical_diagrams(
            a in -5i64..60,
            b in -5i64..60,
            subtract in any::<bool>(),
        ) {
            let mode = if subtract { DotsMode::Subtract } else { DotsMode::Add };
            let request = CombineRequest::new(a, b, mode);
            let theme = Theme::default();
            prop_assert_eq!(request.build(&theme), request.build(&theme));
        }
    }
}
