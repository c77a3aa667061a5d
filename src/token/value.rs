//! Token values.

use serde::{Deserialize, Serialize};

/// The logical value of a token.
///
/// Values are either literals, composites built from literals, or a
/// reference to exactly one other token by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum TokenValue {
    Color(ColorValue),
    Dimension(Dimension),
    Number(f64),
    Text(String),
    Shadow(Vec<ShadowLayer>),
    Border(BorderValue),
    Gradient(GradientValue),
    Typography(TypographyValue),
    /// Id of another token whose value this token takes.
    Reference(String),
}

impl TokenValue {
    /// A pixel dimension.
    pub fn px(measure: f64) -> Self {
        TokenValue::Dimension(Dimension::new(measure, Unit::Pixels))
    }

    /// A textual value.
    pub fn text(value: impl Into<String>) -> Self {
        TokenValue::Text(value.into())
    }

    /// A reference to the token with the given id.
    pub fn reference(id: impl Into<String>) -> Self {
        TokenValue::Reference(id.into())
    }

    /// Returns the referenced token id, if this is a reference.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            TokenValue::Reference(id) => Some(id),
            _ => None,
        }
    }
}

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `0.0..=1.0`.
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl ColorValue {
    /// An opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// A color with explicit alpha.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    ///
    /// Returns `None` for any other length or non-hex digits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokencss::ColorValue;
    ///
    /// assert_eq!(ColorValue::from_hex("#f00"), Some(ColorValue::rgb(255, 0, 0)));
    /// assert_eq!(ColorValue::from_hex("00ff0080").map(|c| c.g), Some(255));
    /// assert_eq!(ColorValue::from_hex("#12345"), None);
    /// ```
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return None,
        };

        let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        let a = if expanded.len() == 8 {
            byte(6)? as f64 / 255.0
        } else {
            1.0
        };

        Some(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a,
        })
    }

    /// Returns `true` when alpha is 1 (or more).
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    pub(crate) fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Units a [`Dimension`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "px")]
    Pixels,
    #[serde(rename = "rem")]
    Rem,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "pt")]
    Points,
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "s")]
    Seconds,
    /// Unitless.
    #[serde(rename = "raw")]
    Raw,
}

impl Unit {
    /// CSS suffix for the unit; empty for [`Unit::Raw`].
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Pixels => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::Points => "pt",
            Unit::Milliseconds => "ms",
            Unit::Seconds => "s",
            Unit::Raw => "",
        }
    }
}

/// A measure with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub measure: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn new(measure: f64, unit: Unit) -> Self {
        Self { measure, unit }
    }
}

/// One layer of a shadow. Offsets, blur and spread are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowLayer {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    #[serde(default)]
    pub spread: f64,
    pub color: ColorValue,
    #[serde(default)]
    pub inset: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderValue {
    pub width: Dimension,
    /// CSS border style keyword, e.g. `solid`.
    pub style: String,
    pub color: ColorValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientKind {
    Linear,
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient in `0.0..=1.0`.
    pub position: f64,
    pub color: ColorValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientValue {
    pub kind: GradientKind,
    /// Angle in degrees; ignored for radial gradients.
    #[serde(default)]
    pub angle: f64,
    pub stops: Vec<GradientStop>,
}

/// Composite typography value, rendered as the CSS `font` shorthand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyValue {
    pub font_family: String,
    pub font_weight: String,
    pub font_size: Dimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Dimension>,
}
