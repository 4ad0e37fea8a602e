//! Outline styles.
//!
//! Widths are typographic points, so a 2pt cell border looks the same at
//! any output resolution. The [`Viewport`](crate::draw::Viewport) converts
//! them to pixels when the SVG is written.

use crate::color::Color;

/// How the ends of an open line are drawn (SVG `stroke-linecap`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    /// Extends past each end by half the stroke width.
    Square,
}

impl StrokeCap {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// How corners between segments are drawn (SVG `stroke-linejoin`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Color, width and end styles of an outline.
///
/// # Examples
///
/// ```
/// use abacus_core::color::Color;
/// use abacus_core::draw::{StrokeCap, StrokeDefinition};
///
/// let mut baseline = StrokeDefinition::new(Color::new("#2D2D2D").unwrap(), 2.0);
/// baseline.set_cap(StrokeCap::Square);
/// assert_eq!(baseline.cap(), StrokeCap::Square);
/// assert_eq!(baseline.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// A stroke `width` points wide with butt caps and miter joins.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Width in points.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    pub fn set_join(&mut self, join: StrokeJoin) {
        self.join = join;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Sets the `stroke-*` attributes of an SVG element from a
/// [`StrokeDefinition`], converting the width to pixels.
///
/// # Examples
///
/// ```
/// use abacus_core::color::Color;
/// use abacus_core::draw::{StrokeDefinition, Viewport};
/// use abacus_core::geometry::{Bounds, Interval, Point, Size};
/// use svg::node::element as svg_element;
///
/// let area = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
/// let viewport = Viewport::new(Interval::new(0.0, 1.0), Interval::new(0.0, 1.0), area, 144.0);
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
/// let line = abacus_core::apply_stroke!(line, &stroke, &viewport);
/// assert!(line.to_string().contains("stroke-width=\"4\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr, $viewport:expr) => {{
        let stroke = $stroke;
        $element
            .set("stroke", stroke.color().to_hex())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", $viewport.points(stroke.width()))
            .set("stroke-linecap", stroke.cap().to_svg_value())
            .set("stroke-linejoin", stroke.join().to_svg_value())
    }};
}
