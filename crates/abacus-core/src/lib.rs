//! Abacus Core Types and Definitions
//!
//! This crate provides the foundational types used to describe arithmetic
//! pictures. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`]) and
//!   cycling palettes ([`color::Palette`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Typed shape records and their SVG rendering ([`draw`] module)
//! - **Diagram**: The scene produced by a figure renderer ([`diagram`] module)

pub mod color;
pub mod diagram;
pub mod draw;
pub mod geometry;
