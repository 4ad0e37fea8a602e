//! Equal groups for division, with the remainder set apart.

use log::{debug, warn};

use abacus_core::{
    diagram::{Axis, Diagram, DiagramKind},
    draw::{Circle, HorizontalAlign, Label, Shape, StrokeDefinition, VerticalAlign},
    geometry::Point,
};

use super::{DotGrid, Figure, titled};
use crate::{request::GroupingRequest, theme::Theme};

const DOT_RADIUS: f32 = 0.25;

/// How a single item in a grouping figure is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// Part of the complete group with this index, already shown.
    Grouped(i64),
    /// Part of a complete group that is not shown yet.
    Pending,
    /// Left over after the last complete group.
    Remainder,
}

/// Quotient, remainder and grid of a grouping figure.
///
/// # Examples
///
/// ```
/// # use abacus::figure::GroupingModel;
/// # use abacus::request::GroupingRequest;
/// let model = GroupingModel::new(&GroupingRequest::new(20, 6), 12);
/// assert_eq!((model.quotient(), model.remainder()), (3, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingModel {
    total: i64,
    group_size: i64,
    quotient: i64,
    remainder: i64,
    shown_groups: i64,
    grid: DotGrid,
}

impl GroupingModel {
    /// Normalizes `request`; `default_per_row` is used when the request does
    /// not set a row width.
    pub fn new(request: &GroupingRequest, default_per_row: i64) -> Self {
        let total = request.total().max(0);
        if total != request.total() {
            warn!(total = request.total(); "Negative total, using 0");
        }
        let group_size = request.group_size().max(1);
        if group_size != request.group_size() {
            warn!(group_size = request.group_size(); "Group size must be at least 1, using 1");
        }

        let quotient = total / group_size;
        let remainder = total % group_size;

        let requested = request.step_groups().unwrap_or(quotient);
        let shown_groups = requested.clamp(0, quotient);
        if shown_groups != requested {
            warn!(requested, shown_groups; "Clamped number of groups shown");
        }

        let grid = DotGrid::new(total, request.items_per_row().unwrap_or(default_per_row));
        debug!(total, group_size, quotient, remainder, shown_groups; "Grouping model");

        Self {
            total,
            group_size,
            quotient,
            remainder,
            shown_groups,
            grid,
        }
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn group_size(&self) -> i64 {
        self.group_size
    }

    /// Number of complete groups.
    pub fn quotient(&self) -> i64 {
        self.quotient
    }

    pub fn remainder(&self) -> i64 {
        self.remainder
    }

    /// Number of complete groups drawn in color.
    pub fn shown_groups(&self) -> i64 {
        self.shown_groups
    }

    pub fn grid(&self) -> DotGrid {
        self.grid
    }

    /// State of item `index`, counting from the top-left dot.
    pub fn item_state(&self, index: i64) -> ItemState {
        let group = index / self.group_size;
        if index >= self.quotient * self.group_size {
            ItemState::Remainder
        } else if group < self.shown_groups {
            ItemState::Grouped(group)
        } else {
            ItemState::Pending
        }
    }

    /// The line of text shown above the dots.
    pub fn summary(&self) -> String {
        format!(
            "Group size: {}  |  Groups made: {}/{}  |  Remainder: {}",
            self.group_size, self.shown_groups, self.quotient, self.remainder
        )
    }
}

impl Figure for GroupingRequest {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Grouping
    }

    fn build(&self, theme: &Theme) -> Diagram {
        let model = GroupingModel::new(self, theme.items_per_row());
        let grid = model.grid();
        let border = StrokeDefinition::new(theme.border(), 2.0);

        let mut shapes: Vec<Shape> = Vec::new();
        for index in 0..model.total() {
            let fill = match model.item_state(index) {
                ItemState::Grouped(group) => theme.palette().get(group as usize),
                ItemState::Pending => theme.empty(),
                ItemState::Remainder => theme.remainder(),
            };
            let dot = Circle::new(grid.center(index), DOT_RADIUS, fill).with_stroke(border.clone());
            shapes.push(dot.into());
        }

        let summary = Label::new(
            Point::new(0.0, grid.rows() as f32 + 0.4),
            model.summary(),
            theme.text(14.0, true, theme.ink()),
        )
        .with_align(HorizontalAlign::Left, VerticalAlign::Bottom);
        shapes.push(summary.into());

        let diagram = Diagram::new(
            DiagramKind::Grouping,
            grid.figure_size(14.0, 10.0),
            Axis::bare(grid.x_range()),
            Axis::bare(grid.y_range()),
            shapes,
        );
        titled(diagram, self.title())
    }
}
