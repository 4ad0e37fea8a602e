//! Primitive shape records and their rendering.
//!
//! A [`Shape`] is a plain description of something to paint, placed in data
//! space. Figure renderers only build these records; turning them into SVG
//! is done here, through the [`Drawable`] trait, once a [`Viewport`] is known.
//!
//! Sizes that should not stretch with the axes (stroke widths, marker
//! diameters, arrow heads, fonts) are given in typographic points.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, HorizontalAlign, LayeredOutput, RenderLayer, StrokeDefinition, Text,
        TextDefinition, VerticalAlign, Viewport,
    },
    geometry::{Bounds, Insets, Point, Size},
};

/// A straight line segment, used for baselines and tick marks.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    from: Point,
    to: Point,
    stroke: StrokeDefinition,
}

impl Line {
    pub fn new(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self { from, to, stroke }
    }

    pub fn start(&self) -> Point {
        self.from
    }

    pub fn end(&self) -> Point {
        self.to
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Drawable for Line {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let from = viewport.to_pixel(self.from);
        let to = viewport.to_pixel(self.to);

        let line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        let line = apply_stroke!(line, &self.stroke, viewport);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Axes, Box::new(line));
        output
    }

    fn pixel_bounds(&self, viewport: &Viewport) -> Bounds {
        let half_width = viewport.points(self.stroke.width()) / 2.0;
        Bounds::from_points([viewport.to_pixel(self.from), viewport.to_pixel(self.to)])
            .unwrap_or_default()
            .add_padding(Insets::uniform(half_width))
    }
}

/// An axis-aligned rectangle given by its lower-left corner and size.
///
/// Array cells are unit rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    origin: Point,
    size: Size,
    fill: Color,
    stroke: Option<StrokeDefinition>,
}

impl Rect {
    pub fn new(origin: Point, size: Size, fill: Color) -> Self {
        Self {
            origin,
            size,
            fill,
            stroke: None,
        }
    }

    /// Adds an outline to the rectangle.
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    fn pixel_rect(&self, viewport: &Viewport) -> Bounds {
        let opposite = self
            .origin
            .add_point(Point::new(self.size.width(), self.size.height()));
        Bounds::from_points([viewport.to_pixel(self.origin), viewport.to_pixel(opposite)])
            .unwrap_or_default()
    }
}

impl Drawable for Rect {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let rect = self.pixel_rect(viewport);

        let mut element = svg_element::Rectangle::new()
            .set("x", rect.min_x())
            .set("y", rect.min_y())
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", self.fill.to_hex())
            .set("fill-opacity", self.fill.alpha());
        if let Some(stroke) = &self.stroke {
            element = apply_stroke!(element, stroke, viewport);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(element));
        output
    }

    fn pixel_bounds(&self, viewport: &Viewport) -> Bounds {
        let half_width = self
            .stroke
            .as_ref()
            .map_or(0.0, |s| viewport.points(s.width()) / 2.0);
        self.pixel_rect(viewport)
            .add_padding(Insets::uniform(half_width))
    }
}

/// A filled circle with a radius in data units.
///
/// The radius is converted with the smaller of the two axis scales so the
/// circle stays round when the axes are not equally scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
    fill: Color,
    stroke: Option<StrokeDefinition>,
}

impl Circle {
    pub fn new(center: Point, radius: f32, fill: Color) -> Self {
        Self {
            center,
            radius,
            fill,
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    fn pixel_radius(&self, viewport: &Viewport) -> f32 {
        viewport
            .scale_x(self.radius)
            .min(viewport.scale_y(self.radius))
    }
}

impl Drawable for Circle {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let center = viewport.to_pixel(self.center);

        let mut element = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", self.pixel_radius(viewport))
            .set("fill", self.fill.to_hex())
            .set("fill-opacity", self.fill.alpha());
        if let Some(stroke) = &self.stroke {
            element = apply_stroke!(element, stroke, viewport);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(element));
        output
    }

    fn pixel_bounds(&self, viewport: &Viewport) -> Bounds {
        let stroke_half = self
            .stroke
            .as_ref()
            .map_or(0.0, |s| viewport.points(s.width()) / 2.0);
        let diameter = 2.0 * (self.pixel_radius(viewport) + stroke_half);
        viewport
            .to_pixel(self.center)
            .to_bounds(Size::new(diameter, diameter))
    }
}

/// A scatter-style point marker whose size does not depend on the axes.
///
/// `area` is the marker area in square points, so the diameter in points is
/// its square root.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    center: Point,
    area: f32,
    fill: Color,
}

impl Marker {
    pub fn new(center: Point, area: f32, fill: Color) -> Self {
        Self { center, area, fill }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn area(&self) -> f32 {
        self.area
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    fn pixel_radius(&self, viewport: &Viewport) -> f32 {
        viewport.points(self.area.max(0.0).sqrt()) / 2.0
    }
}

impl Drawable for Marker {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let center = viewport.to_pixel(self.center);
        let element = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", self.pixel_radius(viewport))
            .set("fill", self.fill.to_hex())
            .set("fill-opacity", self.fill.alpha());

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Marker, Box::new(element));
        output
    }

    fn pixel_bounds(&self, viewport: &Viewport) -> Bounds {
        let diameter = 2.0 * self.pixel_radius(viewport);
        viewport
            .to_pixel(self.center)
            .to_bounds(Size::new(diameter, diameter))
    }
}

/// Dimensions of a jump arrow, in points except for `bend`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    /// Width of the curved shaft.
    pub tail_width: f32,
    /// Length of the triangular head along the curve.
    pub head_length: f32,
    /// Width of the head at its base.
    pub head_width: f32,
    /// Distance of the curve's control point from the chord midpoint,
    /// as a fraction of the chord length.
    pub bend: f32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            tail_width: 2.0,
            head_length: 10.0,
            head_width: 6.0,
            bend: 0.25,
        }
    }
}

/// A curved arrow between two points on the same baseline.
///
/// The curve bulges to the left of the direction of travel as seen on
/// screen, so rightward (non-negative) jumps arc upward and leftward jumps
/// arc downward.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    from: Point,
    to: Point,
    color: Color,
    style: ArrowStyle,
}

impl Arrow {
    pub fn new(from: Point, to: Point, color: Color) -> Self {
        Self {
            from,
            to,
            color,
            style: ArrowStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ArrowStyle) -> Self {
        self.style = style;
        self
    }

    pub fn start(&self) -> Point {
        self.from
    }

    pub fn end(&self) -> Point {
        self.to
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn style(&self) -> ArrowStyle {
        self.style
    }

    /// Pixel-space geometry of this arrow, or `None` for a zero-length jump.
    pub fn geometry(&self, viewport: &Viewport) -> Option<ArrowGeometry> {
        ArrowGeometry::new(
            viewport.to_pixel(self.from),
            viewport.to_pixel(self.to),
            self.style,
            viewport,
        )
    }
}

impl Drawable for Arrow {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let Some(geometry) = self.geometry(viewport) else {
            return output;
        };

        let shaft_end = geometry.shaft_end();
        let shaft = svg_element::Path::new()
            .set(
                "d",
                format!(
                    "M {} {} Q {} {} {} {}",
                    geometry.start.x(),
                    geometry.start.y(),
                    geometry.control.x(),
                    geometry.control.y(),
                    shaft_end.x(),
                    shaft_end.y()
                ),
            )
            .set("fill", "none")
            .set("stroke", self.color.to_hex())
            .set("stroke-opacity", self.color.alpha())
            .set("stroke-width", viewport.points(self.style.tail_width));

        let [tip, left, right] = geometry.head;
        let head = svg_element::Polygon::new()
            .set(
                "points",
                format!(
                    "{},{} {},{} {},{}",
                    tip.x(),
                    tip.y(),
                    left.x(),
                    left.y(),
                    right.x(),
                    right.y()
                ),
            )
            .set("fill", self.color.to_hex())
            .set("fill-opacity", self.color.alpha());

        output.add_to_layer(RenderLayer::Arrow, Box::new(shaft));
        output.add_to_layer(RenderLayer::Arrow, Box::new(head));
        output
    }

    fn pixel_bounds(&self, viewport: &Viewport) -> Bounds {
        match self.geometry(viewport) {
            Some(geometry) => geometry
                .bounds()
                .add_padding(Insets::uniform(viewport.points(self.style.tail_width) / 2.0)),
            None => viewport.to_pixel(self.from).to_bounds(Size::default()),
        }
    }
}

/// Resolved pixel-space geometry of an [`Arrow`].
///
/// The shaft is the quadratic Bézier `start → control → end`; the head is a
/// triangle whose tip sits on `end`, pointing along the curve's end tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    pub start: Point,
    pub control: Point,
    pub end: Point,
    /// Tip, left base corner, right base corner.
    pub head: [Point; 3],
    head_length: f32,
}

impl ArrowGeometry {
    /// Computes the geometry between two pixel-space points.
    ///
    /// Returns `None` when the points coincide.
    pub fn new(start: Point, end: Point, style: ArrowStyle, viewport: &Viewport) -> Option<Self> {
        let chord = end.sub_point(start);
        if chord.hypot() <= f32::EPSILON {
            return None;
        }

        let control = start
            .midpoint(end)
            .add_point(chord.perpendicular().scale(style.bend));

        let tangent = end.sub_point(control);
        let direction = tangent.scale(1.0 / tangent.hypot());
        let head_length = viewport.points(style.head_length);
        let half_head = viewport.points(style.head_width) / 2.0;

        let base = end.sub_point(direction.scale(head_length));
        let normal = direction.perpendicular().scale(half_head);
        let head = [end, base.add_point(normal), base.sub_point(normal)];

        Some(Self {
            start,
            control,
            end,
            head,
            head_length,
        })
    }

    /// Point on the shaft curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> Point {
        let u = 1.0 - t;
        self.start
            .scale(u * u)
            .add_point(self.control.scale(2.0 * u * t))
            .add_point(self.end.scale(t * t))
    }

    /// Tight bounds of the curve and the head.
    ///
    /// A quadratic Bézier reaches its extreme on each axis either at an end
    /// point or where its derivative vanishes, so only those parameters are
    /// evaluated.
    pub fn bounds(&self) -> Bounds {
        let extremum = |p0: f32, p1: f32, p2: f32| {
            let denominator = p0 - 2.0 * p1 + p2;
            if denominator.abs() <= f32::EPSILON {
                return None;
            }
            let t = (p0 - p1) / denominator;
            (0.0..=1.0).contains(&t).then_some(t)
        };

        let mut points = vec![self.start, self.end];
        let candidates = [
            extremum(self.start.x(), self.control.x(), self.end.x()),
            extremum(self.start.y(), self.control.y(), self.end.y()),
        ];
        points.extend(candidates.into_iter().flatten().map(|t| self.point_at(t)));
        points.extend(self.head);

        Bounds::from_points(points).unwrap_or_default()
    }

    /// Where the drawn shaft stops so it does not poke out past the head.
    fn shaft_end(&self) -> Point {
        let chord = self.end.sub_point(self.start).hypot();
        if chord <= self.head_length {
            return self.end;
        }
        let tangent = self.end.sub_point(self.control);
        self.end
            .sub_point(tangent.scale(self.head_length / tangent.hypot()))
    }
}

/// A text label anchored at a data-space point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    position: Point,
    content: String,
    definition: TextDefinition,
    halign: HorizontalAlign,
    valign: VerticalAlign,
}

impl Label {
    /// Creates a label centered on `position`.
    pub fn new(position: Point, content: impl Into<String>, definition: TextDefinition) -> Self {
        Self {
            position,
            content: content.into(),
            definition,
            halign: HorizontalAlign::default(),
            valign: VerticalAlign::default(),
        }
    }

    pub fn with_align(mut self, halign: HorizontalAlign, valign: VerticalAlign) -> Self {
        self.halign = halign;
        self.valign = valign;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    pub fn halign(&self) -> HorizontalAlign {
        self.halign
    }

    pub fn valign(&self) -> VerticalAlign {
        self.valign
    }

    fn text(&self) -> Text<'_> {
        Text::new(&self.definition, &self.content)
    }
}

impl Drawable for Label {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let anchor = viewport.to_pixel(self.position);
        let element = self
            .text()
            .to_svg(anchor, self.halign, self.valign, viewport);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(element));
        output
    }

    fn pixel_bounds(&self, viewport: &Viewport) -> Bounds {
        let anchor = viewport.to_pixel(self.position);
        self.text()
            .bounds(anchor, self.halign, self.valign, viewport)
    }
}

/// Any primitive that can appear in a diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Arrow(Arrow),
    Rect(Rect),
    Circle(Circle),
    Marker(Marker),
    Label(Label),
}

impl Shape {
    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Self::Line(line) => line,
            Self::Arrow(arrow) => arrow,
            Self::Rect(rect) => rect,
            Self::Circle(circle) => circle,
            Self::Marker(marker) => marker,
            Self::Label(label) => label,
        }
    }
}

impl Drawable for Shape {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        self.as_drawable().render_to_layers(viewport)
    }

    fn pixel_bounds(&self, viewport: &Viewport) -> Bounds {
        self.as_drawable().pixel_bounds(viewport)
    }
}

impl From<Line> for Shape {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<Arrow> for Shape {
    fn from(value: Arrow) -> Self {
        Self::Arrow(value)
    }
}

impl From<Rect> for Shape {
    fn from(value: Rect) -> Self {
        Self::Rect(value)
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Marker> for Shape {
    fn from(value: Marker) -> Self {
        Self::Marker(value)
    }
}

impl From<Label> for Shape {
    fn from(value: Label) -> Self {
        Self::Label(value)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::geometry::Interval;

    /// 10 x 4 data units onto 1000 x 400 pixels at 72 dpi (1px == 1pt).
    fn viewport() -> Viewport {
        let area = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(1000.0, 400.0));
        Viewport::new(Interval::new(0.0, 10.0), Interval::new(-2.0, 2.0), area, 72.0)
    }

    fn ink() -> Color {
        Color::new("#2D2D2D").unwrap()
    }

    fn render(shape: &dyn Drawable) -> String {
        let mut doc = svg::Document::new();
        for node in shape.render_to_layers(&viewport()).render() {
            doc = doc.add(node);
        }
        doc.to_string()
    }

    #[test]
    fn test_line_renders_on_axes_layer() {
        let line = Line::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            StrokeDefinition::new(ink(), 2.0),
        );
        let svg = render(&line);
        assert!(svg.contains("data-layer=\"axes\""));
        assert!(svg.contains("stroke=\"#2d2d2d\""));

        let bounds = line.pixel_bounds(&viewport());
        assert_approx_eq!(f32, bounds.min_y(), 199.0);
        assert_approx_eq!(f32, bounds.max_y(), 201.0);
    }

    #[test]
    fn test_rect_bounds_flip_to_pixel_space() {
        let cell = Rect::new(Point::new(1.0, 0.0), Size::new(1.0, 1.0), ink());
        let bounds = cell.pixel_bounds(&viewport());
        assert_approx_eq!(f32, bounds.min_x(), 100.0);
        assert_approx_eq!(f32, bounds.max_x(), 200.0);
        assert_approx_eq!(f32, bounds.min_y(), 100.0);
        assert_approx_eq!(f32, bounds.max_y(), 200.0);
    }

    #[test]
    fn test_circle_uses_smaller_scale() {
        let circle = Circle::new(Point::new(5.0, 0.0), 0.25, ink());
        let bounds = circle.pixel_bounds(&viewport());
        assert_approx_eq!(f32, bounds.width(), 50.0);
        assert_approx_eq!(f32, bounds.height(), 50.0);
    }

    #[test]
    fn test_marker_diameter_from_area() {
        let marker = Marker::new(Point::new(5.0, 0.0), 64.0, ink());
        let bounds = marker.pixel_bounds(&viewport());
        assert_approx_eq!(f32, bounds.width(), 8.0);
        assert!(render(&marker).contains("data-layer=\"marker\""));
    }

    #[test]
    fn test_forward_arrow_arcs_up_backward_arrow_arcs_down() {
        let vp = viewport();
        let forward = Arrow::new(Point::new(2.0, 0.0), Point::new(5.0, 0.0), ink());
        let geometry = forward.geometry(&vp).unwrap();
        // Pixel y decreases upward.
        assert!(geometry.control.y() < geometry.start.y());

        let backward = Arrow::new(Point::new(5.0, 0.0), Point::new(2.0, 0.0), ink());
        let geometry = backward.geometry(&vp).unwrap();
        assert!(geometry.control.y() > geometry.start.y());
    }

    #[test]
    fn test_arrow_head_tip_at_end() {
        let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), ink());
        let geometry = arrow.geometry(&viewport()).unwrap();
        assert_eq!(geometry.head[0], geometry.end);
        assert_approx_eq!(f32, geometry.end.x(), 400.0);
    }

    #[test]
    fn test_zero_length_arrow_draws_nothing() {
        let arrow = Arrow::new(Point::new(3.0, 0.0), Point::new(3.0, 0.0), ink());
        assert!(arrow.geometry(&viewport()).is_none());
        assert!(arrow.render_to_layers(&viewport()).is_empty());
        assert!(arrow.pixel_bounds(&viewport()).to_size().is_zero());
    }

    #[test]
    fn test_arrow_bounds_include_arc_peak() {
        let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(8.0, 0.0), ink());
        let vp = viewport();
        let geometry = arrow.geometry(&vp).unwrap();
        let peak = geometry.point_at(0.5);
        let bounds = arrow.pixel_bounds(&vp);
        assert!(bounds.contains(peak));
        assert!(bounds.min_y() < geometry.start.y() - 50.0);
    }

    #[test]
    fn test_shape_dispatch() {
        let label: Shape = Label::new(Point::new(5.0, 1.0), "+3", TextDefinition::new()).into();
        let svg = render(&label);
        assert!(svg.contains("data-layer=\"text\""));
        assert!(svg.contains("+3"));

        let dot: Shape = Circle::new(Point::new(1.0, 1.0), 0.28, ink()).into();
        assert!(render(&dot).contains("data-layer=\"content\""));
    }

    proptest! {
        #[test]
        fn arrow_bounds_contain_curve(
            from in -20i32..20,
            jump in -15i32..15,
            t in 0.0f32..=1.0,
        ) {
            prop_assume!(jump != 0);
            let area = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(1200.0, 360.0));
            let vp = Viewport::new(Interval::new(-40.0, 40.0), Interval::new(-1.0, 1.6), area, 120.0);
            let arrow = Arrow::new(
                Point::new(from as f32, 0.0),
                Point::new((from + jump) as f32, 0.0),
                ink(),
            );
            let geometry = arrow.geometry(&vp).unwrap();
            let bounds = geometry.bounds().add_padding(Insets::uniform(0.01));
            prop_assert!(bounds.contains(geometry.point_at(t)));
        }
    }
}
