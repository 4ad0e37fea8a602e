//! Figure renderers: requests in, [`Diagram`]s out.
//!
//! Each request type implements [`Figure`]. Building a figure first derives
//! a small numeric model (positions, counts, grid size) from the request,
//! normalizing any out-of-range input, then lays the model out as shapes in
//! data space. No pixels are involved until export.

mod array;
mod combine;
mod grid;
mod grouping;
mod number_line;

pub use array::ArrayModel;
pub use combine::CombineModel;
pub use grid::DotGrid;
pub use grouping::{GroupingModel, ItemState};
pub use number_line::NumberLineModel;

use abacus_core::diagram::{Diagram, DiagramKind};

use crate::{request::DiagramRequest, theme::Theme};

/// Something that can be drawn as a [`Diagram`].
pub trait Figure {
    /// Which kind of diagram [`Figure::build`] produces.
    fn kind(&self) -> DiagramKind;

    /// Builds the diagram. Never fails: inputs are normalized.
    fn build(&self, theme: &Theme) -> Diagram;
}

impl Figure for DiagramRequest {
    fn kind(&self) -> DiagramKind {
        match self {
            Self::NumberLine(request) => request.kind(),
            Self::Array(request) => request.kind(),
            Self::Grouping(request) => request.kind(),
            Self::Combine(request) => request.kind(),
        }
    }

    fn build(&self, theme: &Theme) -> Diagram {
        match self {
            Self::NumberLine(request) => request.build(theme),
            Self::Array(request) => request.build(theme),
            Self::Grouping(request) => request.build(theme),
            Self::Combine(request) => request.build(theme),
        }
    }
}

/// Attaches an optional request title to a finished diagram.
fn titled(diagram: Diagram, title: Option<&str>) -> Diagram {
    match title {
        Some(title) => diagram.with_title(title),
        None => diagram,
    }
}
