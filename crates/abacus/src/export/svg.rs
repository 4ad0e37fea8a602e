//! SVG backend: page layout, decorations and cropping.
//!
//! A diagram is placed on a page the size of its figure (inches × DPI). The
//! plot area ("axes") fills the page minus a margin for the title and tick
//! labels. Shapes are mapped into the plot area through a [`Viewport`];
//! titles and ticks are drawn around it. Cells, dots, arrows and markers are
//! clipped to the plot area; lines and labels are kept to the page. The final
//! canvas is the tight box around everything visible, padded by 0.1 inch, so
//! the figure size sets the scale of a picture but not the size of the image.

use log::{debug, info, trace};
use svg::{Document, node::element as svg_element};

use abacus_core::{
    apply_stroke,
    color::Color,
    diagram::{Axis, Diagram},
    draw::{
        Drawable, HorizontalAlign, LayeredOutput, RenderLayer, Shape, StrokeDefinition, Text,
        TextDefinition, VerticalAlign, Viewport,
    },
    geometry::{Bounds, Insets, Interval, Point, Size},
};

use super::{Error, Exporter};
use crate::theme::Theme;

/// Space kept free around the decorations, in points.
const LAYOUT_PAD: f32 = 10.8;
const TITLE_SIZE: f32 = 18.0;
/// Gap between the top of the plot area and the title, in points.
const TITLE_PAD: f32 = 16.0;
const TICK_LENGTH: f32 = 3.5;
const TICK_WIDTH: f32 = 0.8;
const TICK_PAD: f32 = 3.5;
const TICK_LABEL_SIZE: f32 = 12.0;
const CROP_PADDING_INCHES: f32 = 0.1;
/// How far clipped shapes may reach past the plot area, in points.
const CLIP_ALLOWANCE: f32 = 4.0;
const PLOT_CLIP_ID: &str = "plot-area";

/// A diagram laid out on a page and rendered into layers.
pub struct Page {
    viewport: Viewport,
    clip: Bounds,
    canvas: Bounds,
    output: LayeredOutput,
}

impl Page {
    /// Mapping from data space onto the plot area.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The region cells, dots, arrows and markers are clipped to, in pixels.
    pub fn clip(&self) -> Bounds {
        self.clip
    }

    /// The cropped, padded region that becomes the image, in pixels.
    pub fn canvas(&self) -> Bounds {
        self.canvas
    }
}

/// Writes diagrams as SVG documents.
#[derive(Debug, Clone, Copy)]
pub struct SvgExporter<'a> {
    theme: &'a Theme,
}

impl<'a> SvgExporter<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn points(&self, points: f32) -> f32 {
        points * self.theme.dpi() / 72.0
    }

    fn title_definition(&self) -> TextDefinition {
        self.theme.text(TITLE_SIZE, true, self.theme.ink())
    }

    fn tick_label_definition(&self) -> TextDefinition {
        self.theme.text(TICK_LABEL_SIZE, false, Color::default())
    }

    /// Lays out `diagram` and renders its shapes and decorations.
    pub fn compose(&self, diagram: &Diagram) -> Page {
        let figure = diagram.figure_size().scale(self.theme.dpi());
        let axes = self.axes_area(diagram, figure);
        let viewport = Viewport::new(
            diagram.x_axis().range(),
            diagram.y_axis().range(),
            axes,
            self.theme.dpi(),
        );
        debug!(
            figure_width = figure.width(),
            figure_height = figure.height(),
            axes_width = axes.width(),
            axes_height = axes.height();
            "Page layout"
        );

        let mut output = LayeredOutput::new();
        let axes_patch = svg_element::Rectangle::new()
            .set("x", axes.min_x())
            .set("y", axes.min_y())
            .set("width", axes.width())
            .set("height", axes.height())
            .set("fill", self.theme.axes().to_hex())
            .set("fill-opacity", self.theme.axes().alpha());
        output.add_to_layer(RenderLayer::Background, Box::new(axes_patch));

        let clip = axes.add_padding(Insets::uniform(self.points(CLIP_ALLOWANCE)));
        for layer in [RenderLayer::Content, RenderLayer::Arrow, RenderLayer::Marker] {
            output.clip_layer(layer, PLOT_CLIP_ID);
        }
        let page = Bounds::new_from_top_left(Point::default(), figure).merge(&clip);

        let mut content = axes;
        content = content.merge(&self.render_x_ticks(diagram.x_axis(), &viewport, &mut output));
        content = content.merge(&self.render_y_ticks(diagram.y_axis(), &viewport, &mut output));
        if let Some(title) = diagram.title() {
            content = content.merge(&self.render_title(title, &viewport, &mut output));
        }

        for shape in diagram.shapes() {
            output.merge(shape.render_to_layers(&viewport));
            let visible = match shape {
                Shape::Line(_) | Shape::Label(_) => page,
                _ => clip,
            };
            match shape.pixel_bounds(&viewport).intersect(&visible) {
                Some(bounds) => content = content.merge(&bounds),
                None => trace!(shape:? = shape; "Shape outside the visible area"),
            }
        }

        let padding = CROP_PADDING_INCHES * self.theme.dpi();
        let padded = content.add_padding(Insets::uniform(padding));
        let min = Point::new(padded.min_x().floor(), padded.min_y().floor());
        let size = Size::new(
            (padded.max_x() - min.x()).ceil().max(1.0),
            (padded.max_y() - min.y()).ceil().max(1.0),
        );
        let canvas = Bounds::new_from_top_left(min, size);

        Page {
            viewport,
            clip,
            canvas,
            output,
        }
    }

    /// Renders `diagram` to a complete SVG document.
    pub fn render_document(&self, diagram: &Diagram) -> Document {
        info!(diagram_kind = diagram.kind().to_string(); "Rendering SVG");
        let page = self.compose(diagram);
        let canvas = page.canvas;
        debug!(width = canvas.width(), height = canvas.height(); "Canvas size");

        let background = svg_element::Rectangle::new()
            .set("x", canvas.min_x())
            .set("y", canvas.min_y())
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", self.theme.background().to_hex())
            .set("fill-opacity", self.theme.background().alpha());

        let clip = page.clip;
        let clip_rect = svg_element::Rectangle::new()
            .set("x", clip.min_x())
            .set("y", clip.min_y())
            .set("width", clip.width())
            .set("height", clip.height());
        let definitions = svg_element::Definitions::new().add(
            svg_element::ClipPath::new()
                .set("id", PLOT_CLIP_ID)
                .add(clip_rect),
        );

        let mut document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    canvas.min_x(),
                    canvas.min_y(),
                    canvas.width(),
                    canvas.height()
                ),
            )
            .set("width", canvas.width())
            .set("height", canvas.height())
            .add(definitions)
            .add(background);

        for node in page.output.render() {
            document = document.add(node);
        }
        trace!(document:% = document; "SVG document");
        document
    }

    /// The plot area: the page minus room for the title and tick labels.
    fn axes_area(&self, diagram: &Diagram, figure: Size) -> Bounds {
        let pad = self.points(LAYOUT_PAD);
        let mut margins = Insets::uniform(pad);

        if let Some(title) = diagram.title() {
            let definition = self.title_definition();
            let height = self.measure(&definition, title).height();
            margins = Insets::new(
                margins.top() + height + self.points(TITLE_PAD),
                margins.right(),
                margins.bottom(),
                margins.left(),
            );
        }

        let label_definition = self.tick_label_definition();
        let x_ticks = diagram.x_axis().ticks();
        if !x_ticks.is_empty() {
            let label_height = x_ticks
                .iter()
                .filter_map(|tick| tick.label())
                .map(|label| self.measure(&label_definition, label).height())
                .fold(0.0_f32, f32::max);
            let extra = if label_height > 0.0 {
                self.points(TICK_PAD) + label_height
            } else {
                0.0
            };
            margins = Insets::new(
                margins.top(),
                margins.right(),
                margins.bottom() + self.points(TICK_LENGTH) + extra,
                margins.left(),
            );
        }

        let y_ticks = diagram.y_axis().ticks();
        if !y_ticks.is_empty() {
            let label_width = y_ticks
                .iter()
                .filter_map(|tick| tick.label())
                .map(|label| self.measure(&label_definition, label).width())
                .fold(0.0_f32, f32::max);
            let extra = if label_width > 0.0 {
                self.points(TICK_PAD) + label_width
            } else {
                0.0
            };
            margins = Insets::new(
                margins.top(),
                margins.right(),
                margins.bottom(),
                margins.left() + self.points(TICK_LENGTH) + extra,
            );
        }

        let size = Size::new(
            (figure.width() - margins.horizontal_sum()).max(1.0),
            (figure.height() - margins.vertical_sum()).max(1.0),
        );
        Bounds::new_from_top_left(Point::new(margins.left(), margins.top()), size)
    }

    fn measure(&self, definition: &TextDefinition, content: &str) -> Size {
        // Text sizes depend only on the resolution, not on the data ranges.
        let unit = Bounds::new_from_top_left(Point::default(), Size::new(1.0, 1.0));
        let unit_range = Interval::new(0.0, 1.0);
        let viewport = Viewport::new(unit_range, unit_range, unit, self.theme.dpi());
        Text::new(definition, content).calculate_size(&viewport)
    }

    /// Draws tick marks below the plot area and their labels; returns the
    /// area they cover.
    fn render_x_ticks(&self, axis: &Axis, viewport: &Viewport, output: &mut LayeredOutput) -> Bounds {
        let area = viewport.area();
        let stroke = StrokeDefinition::new(Color::default(), TICK_WIDTH);
        let definition = self.tick_label_definition();
        let length = viewport.points(TICK_LENGTH);
        let mut covered = area;

        for tick in axis.ticks() {
            if !in_range(axis, tick.value()) {
                continue;
            }
            let x = viewport.to_pixel(Point::new(tick.value(), axis.range().min())).x();
            let mark = svg_element::Line::new()
                .set("x1", x)
                .set("y1", area.max_y())
                .set("x2", x)
                .set("y2", area.max_y() + length);
            output.add_to_layer(RenderLayer::Axes, Box::new(apply_stroke!(mark, &stroke, viewport)));
            covered = covered.merge(&Bounds::new_from_top_left(
                Point::new(x, area.max_y()),
                Size::new(0.0, length),
            ));

            if let Some(label) = tick.label() {
                let anchor = Point::new(x, area.max_y() + length + viewport.points(TICK_PAD));
                let text = Text::new(&definition, label);
                let element = text.to_svg(anchor, HorizontalAlign::Center, VerticalAlign::Top, viewport);
                output.add_to_layer(RenderLayer::Text, Box::new(element));
                covered = covered.merge(&text.bounds(
                    anchor,
                    HorizontalAlign::Center,
                    VerticalAlign::Top,
                    viewport,
                ));
            }
        }
        covered
    }

    /// Draws tick marks left of the plot area and their labels; returns the
    /// area they cover.
    fn render_y_ticks(&self, axis: &Axis, viewport: &Viewport, output: &mut LayeredOutput) -> Bounds {
        let area = viewport.area();
        let stroke = StrokeDefinition::new(Color::default(), TICK_WIDTH);
        let definition = self.tick_label_definition();
        let length = viewport.points(TICK_LENGTH);
        let mut covered = area;

        for tick in axis.ticks() {
            if !in_range(axis, tick.value()) {
                continue;
            }
            let y = viewport.to_pixel(Point::new(0.0, tick.value())).y();
            let mark = svg_element::Line::new()
                .set("x1", area.min_x() - length)
                .set("y1", y)
                .set("x2", area.min_x())
                .set("y2", y);
            output.add_to_layer(RenderLayer::Axes, Box::new(apply_stroke!(mark, &stroke, viewport)));
            covered = covered.merge(&Bounds::new_from_top_left(
                Point::new(area.min_x() - length, y),
                Size::new(length, 0.0),
            ));

            if let Some(label) = tick.label() {
                let anchor = Point::new(area.min_x() - length - viewport.points(TICK_PAD), y);
                let text = Text::new(&definition, label);
                let element = text.to_svg(anchor, HorizontalAlign::Right, VerticalAlign::Center, viewport);
                output.add_to_layer(RenderLayer::Text, Box::new(element));
                covered = covered.merge(&text.bounds(
                    anchor,
                    HorizontalAlign::Right,
                    VerticalAlign::Center,
                    viewport,
                ));
            }
        }
        covered
    }

    /// Draws the title centered above the plot area; returns its bounds.
    fn render_title(&self, title: &str, viewport: &Viewport, output: &mut LayeredOutput) -> Bounds {
        let area = viewport.area();
        let anchor = Point::new(area.center().x(), area.min_y() - viewport.points(TITLE_PAD));
        let definition = self.title_definition();
        let text = Text::new(&definition, title);

        let element = text.to_svg(anchor, HorizontalAlign::Center, VerticalAlign::Bottom, viewport);
        output.add_to_layer(RenderLayer::Text, Box::new(element));
        text.bounds(anchor, HorizontalAlign::Center, VerticalAlign::Bottom, viewport)
    }
}

/// Whether a tick lies inside the visible range of its axis.
fn in_range(axis: &Axis, value: f32) -> bool {
    let range = axis.range();
    let slack = range.length() * 1e-6;
    value >= range.min() - slack && value <= range.max() + slack
}

impl Exporter for SvgExporter<'_> {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn export(&self, diagram: &Diagram) -> Result<Vec<u8>, Error> {
        Ok(self.render_document(diagram).to_string().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        figure::Figure,
        request::{ArrayRequest, CombineRequest, DotsMode, NumberLineRequest},
    };

    fn contains(outer: Bounds, inner: Bounds) -> bool {
        outer.min_x() <= inner.min_x() + 1e-3
            && outer.min_y() <= inner.min_y() + 1e-3
            && outer.max_x() >= inner.max_x() - 1e-3
            && outer.max_y() >= inner.max_y() - 1e-3
    }

    #[test]
    fn test_canvas_contains_every_shape() {
        let theme = Theme::default();
        let exporter = SvgExporter::new(&theme);
        let diagram = NumberLineRequest::new(0, vec![8, -3, 6])
            .with_title("Hops")
            .build(&theme);

        let page = exporter.compose(&diagram);
        let padding = CROP_PADDING_INCHES * theme.dpi();
        for shape in diagram.shapes() {
            let bounds = shape.pixel_bounds(page.viewport());
            assert!(contains(page.canvas(), bounds), "{shape:?} escapes the canvas");
            assert!(page.canvas().min_x() <= bounds.min_x() - padding + 1.0);
        }
        assert!(contains(page.canvas(), page.viewport().area()));
    }

    #[test]
    fn test_far_jump_is_clipped_to_plot_area() {
        let theme = Theme::default();
        let exporter = SvgExporter::new(&theme);
        let diagram = NumberLineRequest::new(0, vec![1_000_000])
            .with_tick_min(0)
            .with_tick_max(10)
            .build(&theme);

        let page = exporter.compose(&diagram);
        let figure = diagram.figure_size().scale(theme.dpi());
        let padding = CROP_PADDING_INCHES * theme.dpi();
        assert!(page.canvas().width() <= figure.width() + 2.0 * padding + 2.0);
        assert!(page.canvas().height() <= figure.height() + 2.0 * padding + 2.0);
        assert!(contains(page.clip(), page.viewport().area()));

        let svg = exporter.render_document(&diagram).to_string();
        assert!(svg.contains("<clipPath"));
        assert!(svg.contains("url(#plot-area)"));
    }

    #[test]
    fn test_canvas_has_whole_pixels() {
        let theme = Theme::default();
        let diagram = ArrayRequest::new(3, 4).build(&theme);
        let canvas = SvgExporter::new(&theme).compose(&diagram).canvas();
        assert_eq!(canvas.width().fract(), 0.0);
        assert_eq!(canvas.height().fract(), 0.0);
        assert_eq!(canvas.min_x().fract(), 0.0);
    }

    #[test]
    fn test_title_adds_top_margin() {
        let theme = Theme::default();
        let exporter = SvgExporter::new(&theme);
        let plain = CombineRequest::new(3, 2, DotsMode::Add).build(&theme);
        let titled = plain.clone().with_title("3 + 2 = 5");

        let plain_area = exporter.compose(&plain).viewport().area();
        let titled_area = exporter.compose(&titled).viewport().area();
        assert!(titled_area.min_y() > plain_area.min_y());
    }

    #[test]
    fn test_document_structure() {
        let theme = Theme::default();
        let diagram = NumberLineRequest::new(7, vec![1; 5])
            .with_title("Start 7 and hop +1, 5 times")
            .build(&theme);
        let svg = SvgExporter::new(&theme).render_document(&diagram).to_string();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox="));
        assert!(svg.contains("data-layer=\"background\""));
        assert!(svg.contains("data-layer=\"arrow\""));
        assert!(svg.contains("data-layer=\"marker\""));
        assert!(svg.contains("end 12"));
        assert!(svg.contains("Start 7 and hop +1, 5 times"));
        assert!(svg.contains("#fff8f0"));

        let background = svg.find("data-layer=\"background\"").unwrap();
        let text = svg.find("data-layer=\"text\"").unwrap();
        assert!(background < text);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let theme = Theme::default();
        let exporter = SvgExporter::new(&theme);
        let diagram = CombineRequest::new(12, 4, DotsMode::Subtract).build(&theme);
        assert_eq!(exporter.export(&diagram).unwrap(), exporter.export(&diagram).unwrap());
        assert_eq!(exporter.extension(), "svg");
    }
}
