//! Resolved visual style shared by every figure.

use log::debug;

use abacus_core::{
    color::{Color, Palette},
    draw::TextDefinition,
};

use crate::{config::AppConfig, error::AbacusError};

/// Immutable, validated style values.
///
/// A `Theme` is built once from an [`AppConfig`] and passed by reference to
/// every figure renderer and exporter. Building it is the only place where
/// color strings are parsed, so a bad config fails early and loudly.
///
/// # Examples
///
/// ```
/// # use abacus::{Theme, config::AppConfig};
/// let theme = Theme::from_config(&AppConfig::default()).unwrap();
/// assert_eq!(theme.dpi(), 120.0);
/// assert_eq!(theme.palette().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    palette: Palette,
    background: Color,
    axes: Color,
    ink: Color,
    empty: Color,
    remainder: Color,
    border: Color,
    font_family: String,
    dpi: f32,
    items_per_row: i64,
}

impl Theme {
    /// Validates `config` and resolves it into a theme.
    ///
    /// # Errors
    ///
    /// Returns [`AbacusError::Config`] for an invalid or empty palette, an
    /// unparsable color, or a non-positive DPI.
    pub fn from_config(config: &AppConfig) -> Result<Self, AbacusError> {
        let style = config.style();
        let color = |name: &str, value: &str| {
            Color::new(value).map_err(|err| AbacusError::Config(format!("style.{name}: {err}")))
        };

        let palette = Palette::parse(style.palette())
            .map_err(|err| AbacusError::Config(format!("style.palette: {err}")))?;

        let dpi = config.render().dpi();
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(AbacusError::Config(format!(
                "render.dpi must be a positive number, got {dpi}"
            )));
        }

        let theme = Self {
            palette,
            background: color("background_color", style.background_color())?,
            axes: color("axes_color", style.axes_color())?,
            ink: color("ink_color", style.ink_color())?,
            empty: color("empty_color", style.empty_color())?,
            remainder: color("remainder_color", style.remainder_color())?,
            border: color("border_color", style.border_color())?,
            font_family: style.font_family().to_string(),
            dpi,
            items_per_row: config.render().items_per_row(),
        };
        debug!(dpi = theme.dpi, palette_len = theme.palette.len(); "Theme resolved");
        Ok(theme)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn axes(&self) -> Color {
        self.axes
    }

    pub fn ink(&self) -> Color {
        self.ink
    }

    pub fn empty(&self) -> Color {
        self.empty
    }

    pub fn remainder(&self) -> Color {
        self.remainder
    }

    pub fn border(&self) -> Color {
        self.border
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Output resolution in pixels per inch.
    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    /// Dot grid width used when a request does not give one.
    pub fn items_per_row(&self) -> i64 {
        self.items_per_row
    }

    /// Text style in the theme font with the given size (points), weight
    /// and color.
    pub fn text(&self, size: f32, bold: bool, color: Color) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(&self.font_family);
        definition.set_font_size(size);
        definition.set_bold(bold);
        definition.set_color(color);
        definition
    }
}

impl Default for Theme {
    fn default() -> Self {
        // The built-in configuration holds only valid colors and a positive DPI.
        Self::from_config(&AppConfig::default()).expect("default configuration is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RenderConfig, StyleConfig};

    fn config_from(toml_text: &str) -> AppConfig {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.ink(), Color::new("#2D2D2D").unwrap());
        assert_eq!(theme.empty(), Color::new("#E7E2DC").unwrap());
        assert_eq!(theme.items_per_row(), 12);
        assert_eq!(theme.font_family(), "Arial");
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let config = config_from("[style]\nink_color = \"not-a-color\"");
        let err = Theme::from_config(&config).unwrap_err();
        assert!(matches!(&err, AbacusError::Config(msg) if msg.starts_with("style.ink_color")));
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        let config = config_from("[style]\npalette = []");
        assert!(matches!(
            Theme::from_config(&config),
            Err(AbacusError::Config(_))
        ));
    }

    #[test]
    fn test_non_positive_dpi_is_rejected() {
        let config = AppConfig::new(StyleConfig::default(), RenderConfig::new(0.0, 12));
        assert!(Theme::from_config(&config).is_err());
    }

    #[test]
    fn test_text_definition() {
        let theme = Theme::default();
        let text = theme.text(14.0, true, theme.ink());
        assert_eq!(text.font_size(), 14.0);
        assert!(text.bold());
        assert_eq!(text.font_family(), "Arial");
    }
}
