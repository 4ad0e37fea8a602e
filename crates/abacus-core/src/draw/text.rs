//! Text styling and measurement for picture labels.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style (font, size in points, weight, color)
//! - [`Text`] - Content paired with a definition, measurable and renderable
//! - [`HorizontalAlign`] / [`VerticalAlign`] - How text sits relative to its anchor
//!
//! Measurement uses real font metrics from `cosmic-text`, so the exporter can
//! crop the picture around titles and captions without clipping them.
//!
//! # Quick Start
//!
//! ```
//! # use abacus_core::draw::{HorizontalAlign, Text, TextDefinition, VerticalAlign, Viewport};
//! # use abacus_core::geometry::{Bounds, Interval, Point, Size};
//! let mut style = TextDefinition::new();
//! style.set_font_size(14.0);
//! style.set_bold(true);
//!
//! let area = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
//! let viewport = Viewport::new(Interval::new(0.0, 1.0), Interval::new(0.0, 1.0), area, 120.0);
//!
//! let text = Text::new(&style, "+3");
//! let size = text.calculate_size(&viewport);
//! assert!(size.width() > 0.0);
//! assert!(size.height() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::{info, warn};
use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::Viewport,
    geometry::{Bounds, Point, Size},
};

/// Ratio of line height to font size used for measurement.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Average glyph advance relative to font size, used when no font is available.
const FALLBACK_ADVANCE_FACTOR: f32 = 0.55;

/// Horizontal placement of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Anchor is at the left edge of the text
    Left,
    /// Anchor is at the horizontal center of the text
    #[default]
    Center,
    /// Anchor is at the right edge of the text
    Right,
}

impl HorizontalAlign {
    /// Returns the SVG `text-anchor` value.
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Vertical placement of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// Anchor is at the top of the text box; text hangs below it
    Top,
    /// Anchor is at the vertical center of the text box
    #[default]
    Center,
    /// Anchor is at the bottom of the text box; text sits above it
    Bottom,
}

/// Defines the visual style of a text element.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `12` pt |
/// | Bold | `false` |
/// | Color | black |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    bold: bool,
    color: Color,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font family (e.g. "Arial", "DejaVu Sans", "sans-serif").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 12.0,
            bold: false,
            color: Color::default(),
        }
    }
}

/// A piece of text paired with its style.
///
/// Sizes and positions produced by `Text` are in pixel space; font sizes are
/// converted from points through the [`Viewport`].
#[derive(Debug, Clone, Copy)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Calculates the pixel size needed to display this text.
    pub fn calculate_size(&self, viewport: &Viewport) -> Size {
        let font_size_px = viewport.points(self.definition.font_size());
        text_manager().calculate_text_size(self.content, self.definition, font_size_px)
    }

    /// The pixel-space box the text covers when placed at `anchor`.
    pub fn bounds(
        &self,
        anchor: Point,
        halign: HorizontalAlign,
        valign: VerticalAlign,
        viewport: &Viewport,
    ) -> Bounds {
        let size = self.calculate_size(viewport);
        let center_x = match halign {
            HorizontalAlign::Left => anchor.x() + size.width() / 2.0,
            HorizontalAlign::Center => anchor.x(),
            HorizontalAlign::Right => anchor.x() - size.width() / 2.0,
        };
        let center_y = anchor.y() + vertical_offset(valign, size);
        Bounds::new_from_center(Point::new(center_x, center_y), size)
    }

    /// Builds the SVG `<text>` element anchored at the pixel-space `anchor`.
    pub fn to_svg(
        &self,
        anchor: Point,
        halign: HorizontalAlign,
        valign: VerticalAlign,
        viewport: &Viewport,
    ) -> svg_element::Text {
        let size = self.calculate_size(viewport);
        let color = self.definition.color();

        let mut element = svg_element::Text::new("")
            .set("x", anchor.x())
            .set("y", anchor.y() + vertical_offset(valign, size))
            .set("text-anchor", halign.to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", viewport.points(self.definition.font_size()))
            .set("fill", color.to_hex())
            .set("fill-opacity", color.alpha());

        if self.definition.bold() {
            element = element.set("font-weight", "bold");
        }

        element.add(SvgText::new(self.content))
    }
}

/// Distance from the anchor to the vertical center of the text box.
fn vertical_offset(valign: VerticalAlign, size: Size) -> f32 {
    match valign {
        VerticalAlign::Top => size.height() / 2.0,
        VerticalAlign::Center => 0.0,
        VerticalAlign::Bottom => -size.height() / 2.0,
    }
}

/// Measures text with a shared `FontSystem`.
///
/// Loading system fonts is slow, so one instance is created lazily and reused
/// for the lifetime of the process.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Calculates the pixel size of `text` using shaped font metrics.
    ///
    /// Falls back to an estimate from the character count when no glyphs
    /// could be shaped, e.g. on a machine without fonts installed.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition, font_size_px: f32) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let line_height = font_size_px * LINE_HEIGHT_FACTOR;
        let line_count = text.lines().count().max(1);
        let fallback = Size::new(
            text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as f32
                * font_size_px
                * FALLBACK_ADVANCE_FACTOR,
            line_count as f32 * line_height,
        );

        // The font database stays valid even if a holder panicked.
        let mut font_system = match self.font_system.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("FontSystem lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };

        let metrics = Metrics::new(font_size_px, line_height);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if text_def.bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(weight);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width <= 0.0 {
            return fallback;
        }

        Size::new(max_width, total_height.max(line_height))
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

fn text_manager() -> &'static TextManager {
    TEXT_MANAGER.get_or_init(TextManager::new)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::geometry::Interval;

    fn viewport(dpi: f32) -> Viewport {
        let area = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        Viewport::new(Interval::new(0.0, 1.0), Interval::new(0.0, 1.0), area, dpi)
    }

    #[test]
    fn test_text_definition_defaults_and_setters() {
        let mut def = TextDefinition::new();
        assert_eq!(def.font_family(), "Arial");
        assert_approx_eq!(f32, def.font_size(), 12.0);
        assert!(!def.bold());

        def.set_font_family("DejaVu Sans");
        def.set_font_size(18.0);
        def.set_bold(true);
        def.set_color(Color::new("#2D2D2D").unwrap());
        assert_eq!(def.font_family(), "DejaVu Sans");
        assert_approx_eq!(f32, def.font_size(), 18.0);
        assert!(def.bold());
        assert_eq!(def.color().to_hex(), "#2d2d2d");
    }

    #[test]
    fn test_empty_text_has_zero_size() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size(&viewport(72.0));
        assert!(size.is_zero());
    }

    #[test]
    fn test_longer_text_is_wider() {
        let def = TextDefinition::new();
        let vp = viewport(72.0);
        let short = Text::new(&def, "+1").calculate_size(&vp);
        let long = Text::new(&def, "Group size: 6  |  Groups made: 3/3").calculate_size(&vp);
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_size_scales_with_dpi() {
        let def = TextDefinition::new();
        let low = Text::new(&def, "end 12").calculate_size(&viewport(72.0));
        let high = Text::new(&def, "end 12").calculate_size(&viewport(144.0));
        assert!(high.height() > low.height());
    }

    #[test]
    fn test_bounds_follow_alignment() {
        let def = TextDefinition::new();
        let vp = viewport(72.0);
        let text = Text::new(&def, "start 7");
        let anchor = Point::new(50.0, 50.0);

        let left = text.bounds(anchor, HorizontalAlign::Left, VerticalAlign::Center, &vp);
        assert_approx_eq!(f32, left.min_x(), 50.0, epsilon = 0.001);

        let right = text.bounds(anchor, HorizontalAlign::Right, VerticalAlign::Center, &vp);
        assert_approx_eq!(f32, right.max_x(), 50.0, epsilon = 0.001);

        let top = text.bounds(anchor, HorizontalAlign::Center, VerticalAlign::Top, &vp);
        assert_approx_eq!(f32, top.min_y(), 50.0, epsilon = 0.001);

        let bottom = text.bounds(anchor, HorizontalAlign::Center, VerticalAlign::Bottom, &vp);
        assert_approx_eq!(f32, bottom.max_y(), 50.0, epsilon = 0.001);
    }

    #[test]
    fn test_to_svg_attributes() {
        let mut def = TextDefinition::new();
        def.set_bold(true);
        def.set_font_size(14.0);
        let svg = Text::new(&def, "-2")
            .to_svg(
                Point::new(10.0, 20.0),
                HorizontalAlign::Center,
                VerticalAlign::Center,
                &viewport(144.0),
            )
            .to_string();

        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("font-size=\"28\""));
        assert!(svg.contains("-2"));
    }
}
