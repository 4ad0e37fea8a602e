//! Export of finished diagrams.
//!
//! This module provides the [`Exporter`] trait, the last stage of the
//! pipeline:
//!
//! ```text
//! DiagramRequest
//!     ↓ figure
//! Diagram (shapes in data space)
//!     ↓ export (this module)
//! SVG text or PNG bytes
//! ```
//!
//! # Available Backends
//!
//! - [`svg::SvgExporter`] lays the diagram out on a page and writes SVG.
//! - [`raster::PngExporter`] rasterizes that SVG into a PNG.
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. Producing SVG cannot fail; every
//! variant comes from rasterization. [`Error`] converts into
//! [`AbacusError::Export`](crate::AbacusError::Export) at the crate boundary.

pub mod raster;
pub mod svg;

use thiserror::Error;

use abacus_core::diagram::Diagram;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// File extension of the produced format, without the dot.
    fn extension(&self) -> &'static str;

    /// Serializes `diagram` into the backend's format.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the output cannot be produced.
    fn export(&self, diagram: &Diagram) -> Result<Vec<u8>, Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug, Error)]
pub enum Error {
    /// The generated SVG could not be read back for rasterization.
    #[error("failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),

    /// The pixel buffer could not be created: the canvas is empty or over
    /// the pixel budget.
    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },

    /// The pixel buffer could not be encoded as PNG.
    #[error("failed to encode PNG: {0}")]
    PngEncode(String),
}
