//! Configuration types for Abacus rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field has a default, so an empty file is a valid
//! configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and render settings.
//! - [`StyleConfig`] - Colors and font used by every figure.
//! - [`RenderConfig`] - Output resolution and dot grid width.
//!
//! Colors are kept as strings here and validated when a
//! [`Theme`](crate::Theme) is built from the configuration.
//!
//! # Example
//!
//! ```
//! # use abacus::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().dpi(), 120.0);
//! assert_eq!(config.style().palette().len(), 8);
//! ```

use serde::Deserialize;

use abacus_core::color::DEFAULT_PALETTE;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, render: RenderConfig) -> Self {
        Self { style, render }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Colors and font shared by all figures, as CSS color strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    palette: Vec<String>,
    background_color: String,
    axes_color: String,
    ink_color: String,
    empty_color: String,
    remainder_color: String,
    border_color: String,
    font_family: String,
}

impl StyleConfig {
    /// Colors cycled through for rows, groups and jumps.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Color of the figure around the plot area.
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    /// Fill of the plot area.
    pub fn axes_color(&self) -> &str {
        &self.axes_color
    }

    /// Color of baselines, markers, summaries and titles.
    pub fn ink_color(&self) -> &str {
        &self.ink_color
    }

    /// Color of unfilled cells and not yet grouped items.
    pub fn empty_color(&self) -> &str {
        &self.empty_color
    }

    /// Color of the items left over after division.
    pub fn remainder_color(&self) -> &str {
        &self.remainder_color
    }

    /// Outline of cells and dots.
    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            background_color: "white".to_string(),
            axes_color: "#FFF8F0".to_string(),
            ink_color: "#2D2D2D".to_string(),
            empty_color: "#E7E2DC".to_string(),
            remainder_color: "#BBBBBB".to_string(),
            border_color: "#FFFFFF".to_string(),
            font_family: "Arial".to_string(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output resolution in pixels per inch.
    dpi: f32,
    /// Default number of dots per row for grouping and combine figures.
    items_per_row: i64,
}

impl RenderConfig {
    pub fn new(dpi: f32, items_per_row: i64) -> Self {
        Self { dpi, items_per_row }
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    pub fn items_per_row(&self) -> i64 {
        self.items_per_row
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 120.0,
            items_per_row: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.render().dpi(), 120.0);
        assert_eq!(config.render().items_per_row(), 12);
        assert_eq!(config.style().ink_color(), "#2D2D2D");
        assert_eq!(config.style().palette()[0], "#FF6F61");
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            palette = ["red", "#00ff00"]
            font_family = "DejaVu Sans"

            [render]
            dpi = 96.0
            "##,
        )
        .unwrap();

        assert_eq!(config.style().palette(), ["red", "#00ff00"]);
        assert_eq!(config.style().font_family(), "DejaVu Sans");
        assert_eq!(config.style().axes_color(), "#FFF8F0");
        assert_eq!(config.render().dpi(), 96.0);
        assert_eq!(config.render().items_per_row(), 12);
    }
}
