//! Exporter configuration.
//!
//! [`ExporterConfig`] is the resolved, read-only configuration threaded
//! through every conversion. It derives serde traits with the camelCase
//! option names exporters use, and every field has a default, so a partial
//! document deserializes into a complete configuration.
//!
//! ```rust
//! use tokencss::{ExporterConfig, NameStructure};
//!
//! let config = ExporterConfig {
//!     token_name_structure: NameStructure::NameOnly,
//!     global_name_prefix: Some("ds".into()),
//!     ..ExporterConfig::default()
//! };
//! assert!(config.use_references);
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::token::TokenType;

/// Case style applied to generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameStyle {
    /// `primaryColor500`
    CamelCase,
    /// `primary-color-500`
    #[default]
    KebabCase,
    /// `primary_color_500`
    SnakeCase,
    /// `PrimaryColor500`
    PascalCase,
    /// `PRIMARY_COLOR_500`
    ConstantCase,
}

/// Which parts of the token's context appear in its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameStructure {
    /// Prefix, group ancestry, token name.
    #[default]
    PathAndName,
    /// Prefix and token name only.
    NameOnly,
    /// Prefix with the collection name, group ancestry, token name.
    CollectionPathAndName,
}

/// Output format for color values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorFormat {
    /// `#rrggbb`, alpha dropped.
    Hex6,
    /// `#rrggbbaa`
    Hex8,
    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    #[default]
    SmartHex,
    /// `rgb(r, g, b)`, alpha dropped.
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `rgb(...)` when opaque, `rgba(...)` otherwise.
    SmartRgba,
    /// `hsl(h, s%, l%)`, alpha dropped.
    Hsl,
    /// `hsla(h, s%, l%, a)`
    Hsla,
    /// `hsl(...)` when opaque, `hsla(...)` otherwise.
    SmartHsla,
}

/// Indentation unit for declaration lines.
///
/// Accepts either a number of spaces or a literal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Indent {
    Spaces(usize),
    Literal(String),
}

impl Indent {
    /// The indentation string to prefix lines with.
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            Indent::Spaces(n) => Cow::Owned(" ".repeat(*n)),
            Indent::Literal(s) => Cow::Borrowed(s),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

/// Resolved configuration for converting tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExporterConfig {
    /// Use `token_prefixes` instead of the built-in defaults.
    pub customize_token_prefixes: bool,
    pub token_prefixes: HashMap<TokenType, String>,
    pub token_name_style: NameStyle,
    pub token_name_structure: NameStructure,
    /// Prepended to every generated name.
    pub global_name_prefix: Option<String>,
    /// Render references as `var(--name)` instead of inlining the literal.
    pub use_references: bool,
    /// Decimal places for color alpha and HSL components.
    pub color_precision: usize,
    pub color_format: ColorFormat,
    /// Convert `px` dimensions to `rem`.
    pub force_rem_unit: bool,
    pub rem_base: f64,
    pub show_descriptions: bool,
    pub indent: Indent,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            customize_token_prefixes: false,
            token_prefixes: HashMap::new(),
            token_name_style: NameStyle::default(),
            token_name_structure: NameStructure::default(),
            global_name_prefix: None,
            use_references: true,
            color_precision: 3,
            color_format: ColorFormat::default(),
            force_rem_unit: false,
            rem_base: 16.0,
            show_descriptions: true,
            indent: Indent::default(),
        }
    }
}
