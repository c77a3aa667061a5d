//! Legacy per-type prefixes removed from final names.
//!
//! Older exports baked a type word into names (`font-size-body`,
//! `spacing-small`). Those words are still produced by general name
//! construction, and are removed here for the types in [`LEGACY_PREFIXES`].

use crate::token::TokenType;

/// Token types whose names lose a leading legacy prefix.
///
/// | Type | Prefix removed |
/// |------|----------------|
/// | `borderWidth` | `border-width-` |
/// | `fontSize` | `font-size-` |
/// | `letterSpacing` | `letter-spacing-` |
/// | `lineHeight` | `line-height-` |
/// | `radius` | `border-radius-` |
/// | `size` | `sizing-` |
/// | `space` | `spacing-` |
/// | `fontFamily` | `font-family-` |
/// | `fontWeight` | `font-weight-` |
pub const LEGACY_PREFIXES: [(TokenType, &str); 9] = [
    (TokenType::BorderWidth, "border-width-"),
    (TokenType::FontSize, "font-size-"),
    (TokenType::LetterSpacing, "letter-spacing-"),
    (TokenType::LineHeight, "line-height-"),
    (TokenType::Radius, "border-radius-"),
    (TokenType::Size, "sizing-"),
    (TokenType::Space, "spacing-"),
    (TokenType::FontFamily, "font-family-"),
    (TokenType::FontWeight, "font-weight-"),
];

/// Returns the legacy prefix removed for `token_type`, if any.
pub fn legacy_prefix(token_type: TokenType) -> Option<&'static str> {
    LEGACY_PREFIXES
        .iter()
        .find(|(ty, _)| *ty == token_type)
        .map(|(_, prefix)| *prefix)
}

/// Removes the legacy prefix for `token_type` from the start of `name`, once.
///
/// Names that don't start with the prefix, and types without one, are
/// returned unchanged.
///
/// # Example
///
/// ```rust
/// use tokencss::{strip_legacy_prefix, TokenType};
///
/// assert_eq!(strip_legacy_prefix("font-size-body", TokenType::FontSize), "body");
/// assert_eq!(strip_legacy_prefix("space-small", TokenType::Space), "space-small");
/// assert_eq!(strip_legacy_prefix("color-red", TokenType::Color), "color-red");
/// ```
pub fn strip_legacy_prefix(name: &str, token_type: TokenType) -> &str {
    legacy_prefix(token_type)
        .and_then(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}
