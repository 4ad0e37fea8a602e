//! Number line with one curved arrow per jump.

use log::{debug, warn};

use abacus_core::{
    color::Color,
    diagram::{Axis, Diagram, DiagramKind, Tick},
    draw::{
        Arrow, HorizontalAlign, Label, Line, Marker, Shape, StrokeCap, StrokeDefinition,
        StrokeJoin, VerticalAlign,
    },
    geometry::{Interval, Point, Size},
};

use super::{Figure, titled};
use crate::{request::NumberLineRequest, theme::Theme};

const FIGURE_SIZE: (f32, f32) = (10.0, 3.0);
const Y_RANGE: (f32, f32) = (-1.0, 1.6);
const MIN_SPAN: i64 = 5;
const MIN_PAD: i64 = 2;
const MAX_TICKS: i64 = 40;
const START_MARKER_AREA: f32 = 60.0;
const END_MARKER_AREA: f32 = 80.0;
const CAPTION_Y: f32 = -0.4;

/// Running positions and visible tick range of a number line.
///
/// # Examples
///
/// ```
/// # use abacus::figure::NumberLineModel;
/// # use abacus::request::NumberLineRequest;
/// let model = NumberLineModel::new(&NumberLineRequest::new(7, vec![1; 5]));
/// assert_eq!(model.end(), 12);
/// assert_eq!((model.tick_min(), model.tick_max()), (5, 14));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLineModel {
    positions: Vec<i64>,
    tick_min: i64,
    tick_max: i64,
}

impl NumberLineModel {
    pub fn new(request: &NumberLineRequest) -> Self {
        let origin = request.origin();
        let mut positions = Vec::with_capacity(request.jumps().len() + 1);
        positions.push(origin);
        let mut current = origin;
        for &jump in request.jumps() {
            current = current.saturating_add(jump);
            positions.push(current);
        }

        let min_pos = positions.iter().copied().min().unwrap_or(origin);
        let max_pos = positions.iter().copied().max().unwrap_or(origin);
        let span = max_pos.saturating_sub(min_pos).max(MIN_SPAN);
        let pad = (span / 5).max(MIN_PAD);

        let mut tick_min = request
            .tick_min()
            .unwrap_or_else(|| min_pos.saturating_sub(pad));
        let mut tick_max = request
            .tick_max()
            .unwrap_or_else(|| max_pos.saturating_add(pad));
        if tick_min > tick_max {
            warn!(tick_min, tick_max; "Tick range is reversed, swapping bounds");
            std::mem::swap(&mut tick_min, &mut tick_max);
        }

        debug!(min_pos, max_pos, tick_min, tick_max; "Number line range");
        Self {
            positions,
            tick_min,
            tick_max,
        }
    }

    /// Origin followed by the position after each jump.
    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    pub fn origin(&self) -> i64 {
        self.positions[0]
    }

    /// Position after the last jump.
    pub fn end(&self) -> i64 {
        self.positions[self.positions.len() - 1]
    }

    /// Number of jumps.
    pub fn jump_count(&self) -> usize {
        self.positions.len() - 1
    }

    pub fn tick_min(&self) -> i64 {
        self.tick_min
    }

    pub fn tick_max(&self) -> i64 {
        self.tick_max
    }

    /// Distance between labeled ticks, chosen to keep at most about 40.
    pub fn tick_step(&self) -> i64 {
        let span = self.tick_max.saturating_sub(self.tick_min).max(1);
        (span / MAX_TICKS).max(1)
    }

    /// Tick values from `tick_min` up to and including `tick_max`.
    pub fn ticks(&self) -> impl Iterator<Item = i64> + '_ {
        let step = usize::try_from(self.tick_step()).unwrap_or(usize::MAX);
        (self.tick_min..=self.tick_max).step_by(step)
    }

    /// Jumps paired with their start and end positions.
    fn hops(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.positions.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl Figure for NumberLineRequest {
    fn kind(&self) -> DiagramKind {
        DiagramKind::NumberLine
    }

    fn build(&self, theme: &Theme) -> Diagram {
        let model = NumberLineModel::new(self);
        let left = model.tick_min() as f32 - 0.5;
        let right = model.tick_max() as f32 + 0.5;
        let mut shapes: Vec<Shape> = Vec::new();

        let mut baseline = StrokeDefinition::new(theme.ink(), 2.0);
        baseline.set_cap(StrokeCap::Square);
        baseline.set_join(StrokeJoin::Round);
        shapes.push(Line::new(Point::new(left, 0.0), Point::new(right, 0.0), baseline).into());

        for (index, (from, to)) in model.hops().enumerate() {
            let color = theme.palette().get(index);
            let jump = to.saturating_sub(from);
            let arrow = Arrow::new(Point::new(from as f32, 0.0), Point::new(to as f32, 0.0), color);
            shapes.push(arrow.into());

            let height = 0.9 + 0.15 * (index % 3) as f32;
            let mid = (from as f32 + to as f32) / 2.0;
            shapes.push(
                Label::new(
                    Point::new(mid, height),
                    format!("{jump:+}"),
                    theme.text(14.0, true, color),
                )
                .with_align(HorizontalAlign::Center, VerticalAlign::Bottom)
                .into(),
            );
        }

        let origin = model.origin();
        let start = Point::new(origin as f32, 0.0);
        shapes.push(Marker::new(start, START_MARKER_AREA, theme.ink()).into());
        shapes.push(caption(theme, origin, format!("start {origin}")));

        if model.jump_count() > 0 {
            let end = model.end();
            let finish = Point::new(end as f32, 0.0);
            shapes.push(Marker::new(finish, END_MARKER_AREA, theme.ink()).into());
            shapes.push(caption(theme, end, format!("end {end}")));
        }

        let ticks = model
            .ticks()
            .map(|value| Tick::labeled(value as f32, value.to_string()))
            .collect();

        let diagram = Diagram::new(
            DiagramKind::NumberLine,
            Size::new(FIGURE_SIZE.0, FIGURE_SIZE.1),
            Axis::new(Interval::new(left, right), ticks),
            Axis::bare(Interval::new(Y_RANGE.0, Y_RANGE.1)),
            shapes,
        );
        titled(diagram, self.title())
    }
}

/// A plain caption under the baseline at `value`.
fn caption(theme: &Theme, value: i64, content: String) -> Shape {
    Label::new(
        Point::new(value as f32, CAPTION_Y),
        content,
        theme.text(12.0, false, Color::default()),
    )
    .with_align(HorizontalAlign::Center, VerticalAlign::Top)
    .into()
}
