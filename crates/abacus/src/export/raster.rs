//! PNG backend: the SVG output rasterized with resvg.

use std::sync::{Arc, OnceLock};

use log::{debug, info, warn};

use abacus_core::diagram::Diagram;

use super::{Error, Exporter, svg::SvgExporter};
use crate::theme::Theme;

/// Largest canvas that is rasterized, in pixels.
const MAX_PIXELS: u64 = 1 << 26;

static FONT_DATABASE: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

/// System fonts, scanned once per process.
fn font_database() -> Arc<usvg::fontdb::Database> {
    FONT_DATABASE
        .get_or_init(|| {
            let mut database = usvg::fontdb::Database::new();
            database.load_system_fonts();
            info!(faces = database.len(); "Loaded system fonts");
            Arc::new(database)
        })
        .clone()
}

/// Writes diagrams as PNG images at the theme's resolution.
///
/// The SVG canvas is already measured in output pixels, so it is
/// rasterized at scale 1.
#[derive(Debug, Clone, Copy)]
pub struct PngExporter<'a> {
    svg: SvgExporter<'a>,
    theme: &'a Theme,
}

impl<'a> PngExporter<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            svg: SvgExporter::new(theme),
            theme,
        }
    }
}

impl Exporter for PngExporter<'_> {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn export(&self, diagram: &Diagram) -> Result<Vec<u8>, Error> {
        let svg = self.svg.render_document(diagram).to_string();
        svg_to_png(&svg, self.theme.font_family())
    }
}

/// Rasterizes an SVG document into PNG bytes.
///
/// System fonts are loaded for text; `font_family` is used for text whose
/// family is not installed.
///
/// # Errors
///
/// Returns [`Error::Svg`] if `svg` cannot be parsed, [`Error::PixmapAlloc`]
/// if the canvas is empty or too large, and [`Error::PngEncode`] if
/// encoding fails.
pub fn svg_to_png(svg: &str, font_family: &str) -> Result<Vec<u8>, Error> {
    let mut options = usvg::Options::default();
    options.fontdb = font_database();
    options.font_family = font_family.to_string();

    let tree = usvg::Tree::from_str(svg, &options)?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    info!(width, height; "Rasterizing SVG");

    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        warn!(width, height, max_pixels = MAX_PIXELS; "Canvas too large to rasterize");
        return Err(Error::PixmapAlloc { width, height });
    }

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(Error::PixmapAlloc { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|err| Error::PngEncode(err.to_string()))?;
    debug!(bytes = png.len(); "PNG encoded");
    Ok(png)
}
