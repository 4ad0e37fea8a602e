//! Abacus - pictures of arithmetic for young learners.
//!
//! Turns small arithmetic requests into figures: hops along a number line,
//! filled arrays for multiplication, items sorted into groups for division,
//! and dots joined or crossed out for addition and subtraction. Figures are
//! built as plain [`Diagram`](diagram::Diagram) values and exported to SVG
//! or PNG.

pub mod config;
pub mod export;
pub mod figure;
pub mod lesson;
pub mod request;

mod error;
mod theme;

pub use abacus_core::{color, diagram, draw, geometry};

pub use error::AbacusError;
pub use theme::Theme;

use log::{debug, info, trace};

use config::AppConfig;
use diagram::Diagram;
use export::{Exporter, raster::PngExporter, svg::SvgExporter};
use figure::Figure;
use lesson::Lesson;
use request::{ArrayRequest, CombineRequest, DiagramRequest, GroupingRequest, NumberLineRequest};

/// Builder for drawing and exporting Abacus figures.
///
/// # Examples
///
/// ```
/// use abacus::{DiagramBuilder, config::AppConfig, request::NumberLineRequest};
///
/// let builder = DiagramBuilder::new(AppConfig::default()).expect("valid config");
///
/// let diagram = builder.number_line(&NumberLineRequest::new(3, vec![4, -2]));
/// assert_eq!(diagram.arrows().count(), 2);
///
/// let svg = builder.render_svg(&diagram);
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct DiagramBuilder {
    config: AppConfig,
    theme: Theme,
}

impl DiagramBuilder {
    /// Create a builder from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AbacusError::Config`] if a color, the palette or the
    /// resolution in `config` is invalid.
    pub fn new(config: AppConfig) -> Result<Self, AbacusError> {
        let theme = Theme::from_config(&config)?;
        Ok(Self { config, theme })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Build the diagram for any request.
    pub fn build(&self, request: &DiagramRequest) -> Diagram {
        info!(kind:% = request.kind(); "Building figure");
        let diagram = request.build(&self.theme);
        debug!(shapes = diagram.shapes().len(); "Figure built");
        trace!(diagram:?; "Built diagram");
        diagram
    }

    /// Hops along a number line.
    pub fn number_line(&self, request: &NumberLineRequest) -> Diagram {
        self.build(&request.clone().into())
    }

    /// A rows-by-columns grid of cells.
    pub fn array(&self, request: &ArrayRequest) -> Diagram {
        self.build(&request.clone().into())
    }

    /// Items sorted into equal groups with a remainder.
    pub fn grouping(&self, request: &GroupingRequest) -> Diagram {
        self.build(&request.clone().into())
    }

    /// Two sets of dots, joined or taken away.
    pub fn combine(&self, request: &CombineRequest) -> Diagram {
        self.build(&request.clone().into())
    }

    /// Build every figure of a lesson, in order.
    pub fn lesson(&self, lesson: &Lesson) -> Vec<Diagram> {
        info!(lesson:% = lesson.kind(), figures = lesson.requests().len(); "Building lesson");
        lesson.requests().iter().map(|request| self.build(request)).collect()
    }

    /// Parse an arithmetic prompt such as `7 + 5` and pick its lesson.
    ///
    /// `step` is forwarded to [`Lesson::from_problem`].
    ///
    /// # Errors
    ///
    /// Returns [`AbacusError::Parse`] carrying the prompt when it is not a
    /// valid problem.
    pub fn lesson_for_prompt(&self, prompt: &str, step: Option<i64>) -> Result<Lesson, AbacusError> {
        info!(prompt; "Parsing prompt");
        let problem = abacus_parser::parse_problem(prompt)
            .map_err(|err| AbacusError::new_parse_error(err, prompt))?;
        Ok(Lesson::from_problem(&problem, step))
    }

    /// Render a diagram to an SVG document string.
    pub fn render_svg(&self, diagram: &Diagram) -> String {
        let svg = SvgExporter::new(&self.theme).render_document(diagram).to_string();
        info!(bytes = svg.len(); "SVG rendered");
        svg
    }

    /// Render a diagram to PNG bytes at the configured resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AbacusError::Export`] if rasterization or encoding fails.
    pub fn render_png(&self, diagram: &Diagram) -> Result<Vec<u8>, AbacusError> {
        let png = PngExporter::new(&self.theme).export(diagram)?;
        info!(bytes = png.len(); "PNG rendered");
        Ok(png)
    }
}

impl Default for DiagramBuilder {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            theme: Theme::default(),
        }
    }
}
