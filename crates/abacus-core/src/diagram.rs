//! The in-memory scene produced by every figure renderer.
//!
//! A [`Diagram`] is a flat list of [`Shape`] records in data space plus the
//! axes they are drawn against. It carries no rendering state: exporters read
//! it, nothing writes to it after construction.

use std::fmt;

use crate::{
    draw::{Arrow, Circle, Label, Line, Marker, Rect, Shape},
    geometry::{Interval, Size},
};

/// Which figure a diagram depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    NumberLine,
    Array,
    Grouping,
    Combine,
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NumberLine => "number-line",
            Self::Array => "array",
            Self::Grouping => "grouping",
            Self::Combine => "combine",
        };
        write!(f, "{name}")
    }
}

/// A tick mark on an axis, optionally labeled.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    value: f32,
    label: Option<String>,
}

impl Tick {
    /// A tick mark with a text label under (or beside) it.
    pub fn labeled(value: f32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }

    /// A bare tick mark.
    pub fn unlabeled(value: f32) -> Self {
        Self { value, label: None }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Visible data range and tick marks of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    range: Interval,
    ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(range: Interval, ticks: Vec<Tick>) -> Self {
        Self { range, ticks }
    }

    /// An axis without tick marks.
    pub fn bare(range: Interval) -> Self {
        Self::new(range, Vec::new())
    }

    pub fn range(&self) -> Interval {
        self.range
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }
}

/// A finished picture description.
///
/// # Examples
///
/// ```
/// use abacus_core::color::Color;
/// use abacus_core::diagram::{Axis, Diagram, DiagramKind};
/// use abacus_core::draw::Circle;
/// use abacus_core::geometry::{Interval, Point, Size};
///
/// let dot = Circle::new(Point::new(0.5, 0.5), 0.25, Color::default());
/// let diagram = Diagram::new(
///     DiagramKind::Combine,
///     Size::new(4.6, 1.7),
///     Axis::bare(Interval::new(0.0, 6.0)),
///     Axis::bare(Interval::new(0.0, 2.0)),
///     vec![dot.into()],
/// )
/// .with_title("1 + 0 = 1");
///
/// assert_eq!(diagram.circles().count(), 1);
/// assert_eq!(diagram.title(), Some("1 + 0 = 1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    kind: DiagramKind,
    title: Option<String>,
    figure_size: Size,
    x_axis: Axis,
    y_axis: Axis,
    shapes: Vec<Shape>,
}

impl Diagram {
    /// Creates a diagram. `figure_size` is in inches.
    pub fn new(
        kind: DiagramKind,
        figure_size: Size,
        x_axis: Axis,
        y_axis: Axis,
        shapes: Vec<Shape>,
    ) -> Self {
        Self {
            kind,
            title: None,
            figure_size,
            x_axis,
            y_axis,
            shapes,
        }
    }

    /// Sets the title; an empty string means no title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Figure size in inches, before cropping.
    pub fn figure_size(&self) -> Size {
        self.figure_size
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// All shapes in painting order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn arrows(&self) -> impl Iterator<Item = &Arrow> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Arrow(arrow) => Some(arrow),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Label(label) => Some(label),
            _ => None,
        })
    }

    /// Finds the first label whose text equals `content`.
    pub fn find_label(&self, content: &str) -> Option<&Label> {
        self.labels().find(|label| label.content() == content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Color,
        draw::{StrokeDefinition, TextDefinition},
        geometry::Point,
    };

    fn sample() -> Diagram {
        let ink = Color::new("#2D2D2D").unwrap();
        let shapes: Vec<Shape> = vec![
            Line::new(
                Point::new(-0.5, 0.0),
                Point::new(5.5, 0.0),
                StrokeDefinition::new(ink, 2.0),
            )
            .into(),
            Arrow::new(Point::new(0.0, 0.0), Point::new(3.0, 0.0), ink).into(),
            Marker::new(Point::new(0.0, 0.0), 60.0, ink).into(),
            Marker::new(Point::new(3.0, 0.0), 80.0, ink).into(),
            Label::new(Point::new(0.0, -0.4), "start 0", TextDefinition::new()).into(),
            Label::new(Point::new(3.0, -0.4), "end 3", TextDefinition::new()).into(),
        ];
        Diagram::new(
            DiagramKind::NumberLine,
            Size::new(10.0, 3.0),
            Axis::new(
                Interval::new(-0.5, 5.5),
                vec![Tick::labeled(0.0, "0"), Tick::labeled(5.0, "5")],
            ),
            Axis::bare(Interval::new(-1.0, 1.6)),
            shapes,
        )
    }

    #[test]
    fn test_shape_filters() {
        let diagram = sample();
        assert_eq!(diagram.shapes().len(), 6);
        assert_eq!(diagram.lines().count(), 1);
        assert_eq!(diagram.arrows().count(), 1);
        assert_eq!(diagram.markers().count(), 2);
        assert_eq!(diagram.labels().count(), 2);
        assert_eq!(diagram.circles().count(), 0);
        assert_eq!(diagram.rects().count(), 0);
    }

    #[test]
    fn test_find_label() {
        let diagram = sample();
        let end = diagram.find_label("end 3").unwrap();
        assert_eq!(end.position(), Point::new(3.0, -0.4));
        assert!(diagram.find_label("end 4").is_none());
    }

    #[test]
    fn test_title_empty_means_none() {
        assert_eq!(sample().with_title("").title(), None);
        assert_eq!(sample().with_title("Hop!").title(), Some("Hop!"));
    }

    #[test]
    fn test_axes_and_kind() {
        let diagram = sample();
        assert_eq!(diagram.kind(), DiagramKind::NumberLine);
        assert_eq!(diagram.kind().to_string(), "number-line");
        assert_eq!(diagram.x_axis().ticks().len(), 2);
        assert_eq!(diagram.x_axis().ticks()[1].label(), Some("5"));
        assert!(diagram.y_axis().ticks().is_empty());
        assert_eq!(diagram.figure_size(), Size::new(10.0, 3.0));
    }
}
