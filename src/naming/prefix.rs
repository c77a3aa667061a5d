//! Per-type name prefixes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::ExporterConfig;
use crate::error::{ConvertError, Result};
use crate::token::TokenType;

static DEFAULT_PREFIXES: Lazy<HashMap<TokenType, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (TokenType::Color, "color"),
        (TokenType::Dimension, "dimension"),
        (TokenType::Size, "size"),
        (TokenType::Space, "space"),
        (TokenType::Opacity, "opacity"),
        (TokenType::FontSize, "font-size"),
        (TokenType::LineHeight, "line-height"),
        (TokenType::LetterSpacing, "letter-spacing"),
        (TokenType::ParagraphSpacing, "paragraph-spacing"),
        (TokenType::BorderWidth, "border-width"),
        (TokenType::Radius, "radius"),
        (TokenType::Duration, "duration"),
        (TokenType::ZIndex, "z-index"),
        (TokenType::Shadow, "shadow"),
        (TokenType::Border, "border"),
        (TokenType::Gradient, "gradient"),
        (TokenType::Typography, "typography"),
        (TokenType::String, "string"),
        (TokenType::FontFamily, "font-family"),
        (TokenType::FontWeight, "font-weight"),
        (TokenType::TextCase, "text-case"),
        (TokenType::TextDecoration, "text-decoration"),
        (TokenType::Visibility, "visibility"),
        (TokenType::Blur, "blur"),
    ])
});

/// Returns the built-in prefix for a token type.
pub fn default_prefix(token_type: TokenType) -> Option<&'static str> {
    DEFAULT_PREFIXES.get(&token_type).copied()
}

/// Resolves the name prefix for a token type.
///
/// With `customize_token_prefixes` set, only the configured table is
/// consulted; otherwise only the built-in one is.
///
/// # Errors
///
/// Returns [`ConvertError::UnresolvedPrefix`] when the consulted table has no
/// entry for `token_type`.
///
/// # Example
///
/// ```rust
/// use tokencss::{resolve_prefix, ExporterConfig, TokenType};
///
/// let config = ExporterConfig::default();
/// assert_eq!(resolve_prefix(TokenType::FontSize, &config).unwrap(), "font-size");
/// ```
pub fn resolve_prefix(token_type: TokenType, config: &ExporterConfig) -> Result<&str> {
    let prefix = if config.customize_token_prefixes {
        config.token_prefixes.get(&token_type).map(String::as_str)
    } else {
        default_prefix(token_type)
    };
    prefix.ok_or(ConvertError::UnresolvedPrefix { token_type })
}
