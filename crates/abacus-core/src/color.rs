//! Color handling for Abacus pictures
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the [`Palette`] used to tell rows, groups and
//! jumps apart.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
///
/// Two colors are equal when their sRGB components are, however they were
/// written: `red`, `#ff0000` and `red` with its alpha set to 1 all compare
/// equal.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    fn srgb_components(self) -> [f32; 4] {
        // `+ 0.0` folds -0.0 into 0.0 so equal colors hash alike
        self.color
            .to_alpha_color::<Srgb>()
            .components
            .map(|component| component + 0.0)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.srgb_components() == other.srgb_components()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in self.srgb_components() {
            component.to_bits().hash(state);
        }
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use abacus_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use abacus_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let faded = red.with_alpha(0.3);
    /// assert!((faded.alpha() - 0.3).abs() < 1e-6);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// 0.0 is fully transparent, 1.0 fully opaque.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns the opaque sRGB part of this color as `#rrggbb`.
    ///
    /// SVG paint attributes take this value while the alpha goes into the
    /// matching `*-opacity` attribute, so transparency is never applied twice.
    ///
    /// ```
    /// use abacus_core::color::Color;
    ///
    /// let coral = Color::new("#FF6F61").unwrap().with_alpha(0.3);
    /// assert_eq!(coral.to_hex(), "#ff6f61");
    /// ```
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// Soft, high-contrast colors that stay distinguishable for young readers.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#FF6F61", // coral
    "#4BC0C0", // teal
    "#FFD166", // sunflower
    "#6C5CE7", // purple
    "#06D6A0", // green
    "#F78C6B", // peach
    "#118AB2", // blue
    "#EF476F", // pink-red
];

/// An ordered, non-empty list of colors indexed cyclically.
///
/// # Examples
///
/// ```
/// use abacus_core::color::Palette;
///
/// let palette = Palette::default();
/// assert_eq!(palette.len(), 8);
/// assert_eq!(palette.get(0), palette.get(8));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from the given colors.
    ///
    /// # Errors
    ///
    /// Returns an error when `colors` is empty, since cyclic lookup needs at
    /// least one entry.
    pub fn new(colors: Vec<Color>) -> Result<Self, String> {
        if colors.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }
        Ok(Self { colors })
    }

    /// Parses a palette from CSS color strings.
    ///
    /// # Errors
    ///
    /// Returns an error for the first string that is not a valid color, or
    /// when the list is empty.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, String> {
        let colors = colors
            .iter()
            .map(|c| Color::new(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Returns the color at `index`, wrapping around the palette length.
    pub fn get(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Number of distinct colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; a palette cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::parse(&DEFAULT_PALETTE).expect("default palette colors are valid CSS colors")
    }
}
