//! Layer-based rendering system for SVG output.
//!
//! Drawables do not control the order in which a picture is painted. Each of
//! their SVG nodes is tagged with a [`RenderLayer`] and [`LayeredOutput`]
//! sorts them into z-order when the document is assembled, so a jump label is
//! never hidden behind the arrow drawn after it.
//!
//! # Example
//!
//! ```
//! # use abacus_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Text};
//!
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("+3")));
//! output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
//!
//! // Content renders first, then Text
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Figure and axes backgrounds - renders first
    Background,
    /// Baselines, tick marks and other axis furniture
    Axes,
    /// Cells and dots - default layer
    Content,
    /// Jump arrows on a number line
    Arrow,
    /// Start and end markers drawn over arrows
    Marker,
    /// Text labels, captions and overlays
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Axes => "axes",
            Self::Content => "content",
            Self::Arrow => "arrow",
            Self::Marker => "marker",
            Self::Text => "text",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// When rendered, nodes are emitted in layer order (bottom to top) and, within
/// a layer, in insertion order.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
    clips: Vec<(RenderLayer, String)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Clips everything on `layer` to the `<clipPath>` with id `clip_id`.
    ///
    /// The clip path itself must be defined elsewhere in the document.
    pub fn clip_layer(&mut self, layer: RenderLayer, clip_id: impl Into<String>) {
        self.clips.retain(|(clipped, _)| *clipped != layer);
        self.clips.push((layer, clip_id.into()));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
        for (layer, clip_id) in other.clips {
            self.clip_layer(layer, clip_id);
        }
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let clips = self.clips;
        let group_for = |layer: RenderLayer| {
            let group = svg_element::Group::new().set("data-layer", layer.name());
            match clips.iter().find(|(clipped, _)| *clipped == layer) {
                Some((_, clip_id)) => group.set("clip-path", format!("url(#{clip_id})")),
                None => group,
            }
        };

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = group_for(current_layer);

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = group_for(layer);
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Circle, Line, Text};

    fn render_to_string(output: LayeredOutput) -> String {
        let mut document = svg::Document::new();
        for node in output.render() {
            document = document.add(node);
        }
        document.to_string()
    }

    #[test]
    fn test_layered_output_add_and_len() {
        let mut output = LayeredOutput::new();
        assert!(output.is_empty());

        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));
        assert!(!output.is_empty());
        assert_eq!(output.len(), 2);
        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_layered_output_merge() {
        let mut dots = LayeredOutput::new();
        dots.add_to_layer(RenderLayer::Content, Box::new(Circle::new()));

        let mut labels = LayeredOutput::new();
        labels.add_to_layer(RenderLayer::Text, Box::new(Text::new("end 12")));

        dots.merge(labels);
        assert_eq!(dots.render().len(), 2);
    }

    #[test]
    fn test_layers_render_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("+1")));
        output.add_to_layer(RenderLayer::Axes, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Circle::new()));

        let svg = render_to_string(output);
        let background = svg.find("data-layer=\"background\"").unwrap();
        let axes = svg.find("data-layer=\"axes\"").unwrap();
        let text = svg.find("data-layer=\"text\"").unwrap();
        assert!(background < axes);
        assert!(axes < text);
    }

    #[test]
    fn test_clipped_layer_references_clip_path() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Arrow, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("end 3")));
        output.clip_layer(RenderLayer::Arrow, "plot-area");

        let svg = render_to_string(output);
        assert!(svg.contains(r##"clip-path="url(#plot-area)""##));
        assert_eq!(svg.matches("clip-path").count(), 1);
    }
}
