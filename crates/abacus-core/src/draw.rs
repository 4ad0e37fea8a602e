//! Visual definitions for picture elements.
//!
//! Figure renderers describe what to draw as plain [`Shape`] records placed
//! in data space. Nothing here knows about a particular figure: the records
//! are turned into SVG nodes through the [`Drawable`] trait once a
//! [`Viewport`] fixes how data space maps onto pixels.

mod layer;
mod shape;
mod stroke;
mod text;
mod viewport;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{Arrow, ArrowGeometry, ArrowStyle, Circle, Label, Line, Marker, Rect, Shape};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
pub use text::{HorizontalAlign, Text, TextDefinition, VerticalAlign};
pub use viewport::Viewport;

use crate::geometry::Bounds;

/// A trait for anything that can be rendered onto SVG layers.
pub trait Drawable {
    /// Renders the element, mapping data coordinates through `viewport`.
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput;

    /// The area the rendered element covers, in pixel space.
    ///
    /// Used to crop the final picture tightly around its content.
    fn pixel_bounds(&self, viewport: &Viewport) -> Bounds;
}
