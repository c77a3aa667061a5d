//! Value-to-text formatting.
//!
//! [`ValueFormatter`] turns a [`TokenValue`] into its CSS text. It knows
//! nothing about names: references are either handed to a caller-supplied
//! resolver (which decides how a referenced token is written) or, when
//! references are disabled, inlined by formatting the target's own value.

use std::fmt;

use crate::config::{ColorFormat, ExporterConfig};
use crate::error::{ConvertError, Result};
use crate::token::{
    BorderValue, ColorValue, Dimension, GradientKind, GradientValue, ShadowLayer, Token, TokenMap,
    TokenType, TokenValue, TypographyValue, Unit,
};
use crate::util::format_number;

use super::color::format_color;

/// Maximum reference chain followed when inlining references.
pub const MAX_REFERENCE_DEPTH: usize = 32;

/// Fractional digits kept for dimensions and plain numbers.
const MEASURE_DECIMALS: usize = 4;

/// Options controlling value formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatOptions {
    /// Hand references to the resolver instead of inlining them.
    pub allow_references: bool,
    /// Fractional digits for color alpha and HSL components.
    pub decimals: usize,
    pub color_format: ColorFormat,
    /// Convert `px` dimensions to `rem`.
    pub force_rem_unit: bool,
    pub rem_base: f64,
}

impl FormatOptions {
    /// Takes the value-related options from an exporter configuration.
    pub fn from_config(config: &ExporterConfig) -> Self {
        Self {
            allow_references: config.use_references,
            decimals: config.color_precision,
            color_format: config.color_format,
            force_rem_unit: config.force_rem_unit,
            rem_base: config.rem_base,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::from_config(&ExporterConfig::default())
    }
}

/// Formats token values as CSS text.
///
/// # Example
///
/// ```rust
/// use tokencss::value::{FormatOptions, ValueFormatter};
/// use tokencss::{token_map, Token, TokenType, TokenValue};
///
/// let tokens = token_map(vec![
///     Token::new("base", "base", TokenType::Space, TokenValue::px(8.0), "g"),
///     Token::new("gap", "gap", TokenType::Space, TokenValue::reference("base"), "g"),
/// ]);
///
/// let formatter = ValueFormatter::new(FormatOptions::default(), &tokens);
/// let out = formatter
///     .format(&tokens["gap"], &mut |target: &Token| Ok(format!("var(--{})", target.name)))
///     .unwrap();
/// assert_eq!(out, "var(--base)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValueFormatter<'a> {
    options: FormatOptions,
    tokens: &'a TokenMap,
}

impl<'a> ValueFormatter<'a> {
    pub fn new(options: FormatOptions, tokens: &'a TokenMap) -> Self {
        Self { options, tokens }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats a token's value.
    ///
    /// `resolve` is called with the referenced token whenever the value is a
    /// reference and references are allowed; its output is used verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnresolvedReference`] when a referenced id is
    /// not in the token map, [`ConvertError::ReferenceDepthExceeded`] when an
    /// inlined chain is too deep, and any error returned by `resolve`.
    pub fn format<F>(&self, token: &Token, resolve: &mut F) -> Result<String>
    where
        F: FnMut(&Token) -> Result<String>,
    {
        self.format_at_depth(token, 0, resolve)
    }

    fn format_at_depth<F>(&self, token: &Token, depth: usize, resolve: &mut F) -> Result<String>
    where
        F: FnMut(&Token) -> Result<String>,
    {
        let value = match &token.value {
            TokenValue::Reference(target_id) => {
                let target = self.tokens.get(target_id).ok_or_else(|| {
                    ConvertError::UnresolvedReference {
                        token: token.id.clone(),
                        target: target_id.clone(),
                    }
                })?;

                if self.options.allow_references {
                    return resolve(target);
                }
                if depth >= MAX_REFERENCE_DEPTH {
                    return Err(ConvertError::ReferenceDepthExceeded {
                        token: token.id.clone(),
                        limit: MAX_REFERENCE_DEPTH,
                    });
                }
                return self.format_at_depth(target, depth + 1, resolve);
            }
            TokenValue::Color(color) => self.color(color),
            TokenValue::Dimension(dimension) => self.dimension(dimension),
            TokenValue::Number(n) => self.number(*n),
            TokenValue::Text(text) => self.text(text, token.token_type),
            TokenValue::Shadow(layers) => self.shadow(layers),
            TokenValue::Border(border) => self.border(border),
            TokenValue::Gradient(gradient) => self.gradient(gradient),
            TokenValue::Typography(typography) => self.typography(typography),
        };
        Ok(value)
    }

    pub fn color(&self, color: &ColorValue) -> String {
        format_color(color, self.options.color_format, self.options.decimals)
    }

    pub fn number(&self, n: f64) -> String {
        format_number(n, MEASURE_DECIMALS)
    }

    /// Formats a dimension, converting `px` to `rem` when forced.
    ///
    /// A non-positive or non-finite `rem_base` leaves pixels untouched.
    pub fn dimension(&self, dimension: &Dimension) -> String {
        let Dimension { measure, unit } = *dimension;

        if unit == Unit::Pixels && self.options.force_rem_unit {
            let base = self.options.rem_base;
            if base.is_finite() && base > 0.0 {
                return format!("{}{}", self.number(measure / base), Unit::Rem.suffix());
            }
            tracing::warn!(rem_base = base, "invalid rem base, keeping px units");
        }

        format!("{}{}", self.number(measure), unit.suffix())
    }

    /// Formats text as a CSS string, or verbatim for keyword types.
    pub fn text(&self, text: &str, token_type: TokenType) -> String {
        if token_type.is_keyword() {
            text.to_string()
        } else {
            css_string(text)
        }
    }

    fn px(&self, measure: f64) -> String {
        self.dimension(&Dimension::new(measure, Unit::Pixels))
    }

    fn shadow(&self, layers: &[ShadowLayer]) -> String {
        layers
            .iter()
            .map(|layer| {
                let body = format!(
                    "{} {} {} {} {}",
                    self.px(layer.x),
                    self.px(layer.y),
                    self.px(layer.blur),
                    self.px(layer.spread),
                    self.color(&layer.color)
                );
                if layer.inset {
                    format!("inset {}", body)
                } else {
                    body
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn border(&self, border: &BorderValue) -> String {
        format!(
            "{} {} {}",
            self.dimension(&border.width),
            border.style,
            self.color(&border.color)
        )
    }

    fn gradient(&self, gradient: &GradientValue) -> String {
        let stops = gradient
            .stops
            .iter()
            .map(|stop| {
                format!(
                    "{} {}%",
                    self.color(&stop.color),
                    self.number(stop.position * 100.0)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        match gradient.kind {
            GradientKind::Linear => {
                format!("linear-gradient({}deg, {})", self.number(gradient.angle), stops)
            }
            GradientKind::Radial => format!("radial-gradient(circle, {})", stops),
        }
    }

    fn typography(&self, typography: &TypographyValue) -> String {
        let size = match &typography.line_height {
            Some(line_height) => format!(
                "{}/{}",
                self.dimension(&typography.font_size),
                self.dimension(line_height)
            ),
            None => self.dimension(&typography.font_size),
        };
        format!(
            "{} {} {}",
            typography.font_weight,
            size,
            css_string(&typography.font_family)
        )
    }
}

/// Quotes and escapes text as a CSS string literal.
fn css_string(text: &str) -> String {
    CssString(text).to_string()
}

struct CssString<'a>(&'a str);

impl fmt::Display for CssString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cssparser::serialize_string(self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{token_map, GradientStop};

    fn no_refs(_: &Token) -> Result<String> {
        panic!("resolver should not be called")
    }

    fn format_one(value: TokenValue, token_type: TokenType, options: FormatOptions) -> String {
        let tokens = TokenMap::new();
        let token = Token::new("t", "t", token_type, value, "g");
        ValueFormatter::new(options, &tokens)
            .format(&token, &mut no_refs)
            .unwrap()
    }

    fn fmt(value: TokenValue, token_type: TokenType) -> String {
        format_one(value, token_type, FormatOptions::default())
    }

    #[test]
    fn test_dimension_trims_zeros() {
        assert_eq!(fmt(TokenValue::px(8.0), TokenType::Space), "8px");
        assert_eq!(fmt(TokenValue::px(1.5), TokenType::Space), "1.5px");
        let percent = TokenValue::Dimension(Dimension::new(50.0, Unit::Percent));
        assert_eq!(fmt(percent, TokenType::Size), "50%");
        let raw = TokenValue::Dimension(Dimension::new(1.25, Unit::Raw));
        assert_eq!(fmt(raw, TokenType::LineHeight), "1.25");
    }

    #[test]
    fn test_force_rem_converts_px_only() {
        let options = FormatOptions {
            force_rem_unit: true,
            ..FormatOptions::default()
        };
        assert_eq!(format_one(TokenValue::px(24.0), TokenType::Size, options), "1.5rem");
        assert_eq!(format_one(TokenValue::px(1.0), TokenType::Size, options), "0.0625rem");
        let em = TokenValue::Dimension(Dimension::new(2.0, Unit::Em));
        assert_eq!(format_one(em, TokenType::Size, options), "2em");
    }

    #[test]
    fn test_force_rem_respects_base() {
        let options = FormatOptions {
            force_rem_unit: true,
            rem_base: 10.0,
            ..FormatOptions::default()
        };
        assert_eq!(format_one(TokenValue::px(24.0), TokenType::Size, options), "2.4rem");
    }

    #[test]
    fn test_force_rem_ignores_invalid_base() {
        let options = FormatOptions {
            force_rem_unit: true,
            rem_base: 0.0,
            ..FormatOptions::default()
        };
        assert_eq!(format_one(TokenValue::px(24.0), TokenType::Size, options), "24px");
    }

    #[test]
    fn test_text_is_quoted_and_escaped() {
        assert_eq!(fmt(TokenValue::text("Inter"), TokenType::FontFamily), "\"Inter\"");
        assert_eq!(
            fmt(TokenValue::text("say \"hi\""), TokenType::String),
            "\"say \\\"hi\\\"\""
        );
    }

    #[test]
    fn test_keyword_text_is_verbatim() {
        assert_eq!(fmt(TokenValue::text("uppercase"), TokenType::TextCase), "uppercase");
    }

    #[test]
    fn test_number() {
        assert_eq!(fmt(TokenValue::Number(0.8), TokenType::Opacity), "0.8");
        assert_eq!(fmt(TokenValue::Number(10.0), TokenType::ZIndex), "10");
    }

    #[test]
    fn test_color_precision_leaves_measures_alone() {
        let options = FormatOptions {
            decimals: 1,
            ..FormatOptions::default()
        };
        assert_eq!(format_one(TokenValue::Number(0.1234), TokenType::Opacity, options), "0.1234");
        assert_eq!(format_one(TokenValue::px(1.125), TokenType::Space, options), "1.125px");
    }

    #[test]
    fn test_shadow_layers() {
        let layers = vec![
            ShadowLayer {
                x: 0.0,
                y: 2.0,
                blur: 4.0,
                spread: 0.0,
                color: ColorValue::rgba(0, 0, 0, 0.25),
                inset: false,
            },
            ShadowLayer {
                x: 1.0,
                y: 1.0,
                blur: 0.0,
                spread: 1.0,
                color: ColorValue::rgb(255, 255, 255),
                inset: true,
            },
        ];
        assert_eq!(
            fmt(TokenValue::Shadow(layers), TokenType::Shadow),
            "0px 2px 4px 0px #00000040, inset 1px 1px 0px 1px #ffffff"
        );
    }

    #[test]
    fn test_force_rem_applies_to_shadow_lengths() {
        let options = FormatOptions {
            force_rem_unit: true,
            ..FormatOptions::default()
        };
        let layers = vec![ShadowLayer {
            x: 16.0,
            y: 32.0,
            blur: 8.0,
            spread: 0.0,
            color: ColorValue::rgb(0, 0, 0),
            inset: false,
        }];
        assert_eq!(
            format_one(TokenValue::Shadow(layers), TokenType::Shadow, options),
            "1rem 2rem 0.5rem 0rem #000000"
        );

        let border = BorderValue {
            width: Dimension::new(16.0, Unit::Pixels),
            style: "solid".into(),
            color: ColorValue::rgb(0, 0, 0),
        };
        assert_eq!(
            format_one(TokenValue::Border(border), TokenType::Border, options),
            "1rem solid #000000"
        );
    }

    #[test]
    fn test_border() {
        let border = BorderValue {
            width: Dimension::new(1.0, Unit::Pixels),
            style: "solid".into(),
            color: ColorValue::rgb(0, 0, 0),
        };
        assert_eq!(fmt(TokenValue::Border(border), TokenType::Border), "1px solid #000000");
    }

    #[test]
    fn test_gradients() {
        let stops = vec![
            GradientStop {
                position: 0.0,
                color: ColorValue::rgb(255, 0, 0),
            },
            GradientStop {
                position: 1.0,
                color: ColorValue::rgb(0, 0, 255),
            },
        ];
        let linear = GradientValue {
            kind: GradientKind::Linear,
            angle: 90.0,
            stops: stops.clone(),
        };
        assert_eq!(
            fmt(TokenValue::Gradient(linear), TokenType::Gradient),
            "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)"
        );

        let radial = GradientValue {
            kind: GradientKind::Radial,
            angle: 0.0,
            stops,
        };
        assert_eq!(
            fmt(TokenValue::Gradient(radial), TokenType::Gradient),
            "radial-gradient(circle, #ff0000 0%, #0000ff 100%)"
        );
    }

    #[test]
    fn test_typography_shorthand() {
        let mut typography = TypographyValue {
            font_family: "Inter".into(),
            font_weight: "600".into(),
            font_size: Dimension::new(16.0, Unit::Pixels),
            line_height: Some(Dimension::new(24.0, Unit::Pixels)),
        };
        assert_eq!(
            fmt(TokenValue::Typography(typography.clone()), TokenType::Typography),
            "600 16px/24px \"Inter\""
        );

        typography.line_height = None;
        assert_eq!(
            fmt(TokenValue::Typography(typography), TokenType::Typography),
            "600 16px \"Inter\""
        );
    }

    #[test]
    fn test_reference_goes_to_resolver() {
        let tokens = token_map(vec![
            Token::new("a", "a", TokenType::Color, TokenValue::reference("b"), "g"),
            Token::new("b", "b", TokenType::Color, TokenValue::Color(ColorValue::rgb(1, 2, 3)), "g"),
        ]);
        let formatter = ValueFormatter::new(FormatOptions::default(), &tokens);

        let mut seen = Vec::new();
        let out = formatter
            .format(&tokens["a"], &mut |target: &Token| {
                seen.push(target.id.clone());
                Ok("var(--b)".to_string())
            })
            .unwrap();

        assert_eq!(out, "var(--b)");
        assert_eq!(seen, vec!["b".to_string()]);
    }

    #[test]
    fn test_reference_inlined_when_disabled() {
        let tokens = token_map(vec![
            Token::new("a", "a", TokenType::Color, TokenValue::reference("b"), "g"),
            Token::new("b", "b", TokenType::Color, TokenValue::reference("c"), "g"),
            Token::new("c", "c", TokenType::Color, TokenValue::Color(ColorValue::rgb(1, 2, 3)), "g"),
        ]);
        let options = FormatOptions {
            allow_references: false,
            ..FormatOptions::default()
        };
        let out = ValueFormatter::new(options, &tokens)
            .format(&tokens["a"], &mut no_refs)
            .unwrap();
        assert_eq!(out, "#010203");
    }

    #[test]
    fn test_unknown_reference_fails() {
        let tokens = token_map(vec![Token::new(
            "a",
            "a",
            TokenType::Color,
            TokenValue::reference("ghost"),
            "g",
        )]);
        let err = ValueFormatter::new(FormatOptions::default(), &tokens)
            .format(&tokens["a"], &mut no_refs)
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnresolvedReference {
                token: "a".into(),
                target: "ghost".into(),
            }
        );
    }

    #[test]
    fn test_inlined_cycle_is_bounded() {
        let tokens = token_map(vec![
            Token::new("a", "a", TokenType::Color, TokenValue::reference("b"), "g"),
            Token::new("b", "b", TokenType::Color, TokenValue::reference("a"), "g"),
        ]);
        let options = FormatOptions {
            allow_references: false,
            ..FormatOptions::default()
        };
        let err = ValueFormatter::new(options, &tokens)
            .format(&tokens["a"], &mut no_refs)
            .unwrap_err();
        assert!(matches!(err, ConvertError::ReferenceDepthExceeded { limit: MAX_REFERENCE_DEPTH, .. }));
    }
}
