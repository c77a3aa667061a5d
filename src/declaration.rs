//! Declaration line formatting.

use crate::config::ExporterConfig;
use crate::token::Token;

/// Formats a custom-property declaration for a token.
///
/// Produces `{indent}--{name}: {value};`. When descriptions are enabled and
/// the token has a non-blank description, a `{indent}/* description */` line
/// comes first, with runs of whitespace (line breaks included) folded into
/// single spaces. There is never a trailing newline.
///
/// # Example
///
/// ```rust
/// use tokencss::{format_declaration, ExporterConfig, Token, TokenType, TokenValue};
///
/// let token = Token::new("t", "brand", TokenType::Color, TokenValue::text("x"), "g")
///     .with_description("Primary brand color");
/// let config = ExporterConfig::default();
///
/// assert_eq!(
///     format_declaration(&token, "color-brand", "#ff0000", &config),
///     "  /* Primary brand color */\n  --color-brand: #ff0000;"
/// );
/// ```
pub fn format_declaration(token: &Token, name: &str, value: &str, config: &ExporterConfig) -> String {
    let indent = config.indent.as_str();
    let declaration = format!("{}--{}: {};", indent, name, value);

    match description(token, config) {
        Some(text) => format!("{}/* {} */\n{}", indent, text, declaration),
        None => declaration,
    }
}

/// The comment text for a token, if one should be written.
fn description(token: &Token, config: &ExporterConfig) -> Option<String> {
    if !config.show_descriptions {
        return None;
    }
    token
        .description
        .as_deref()
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty())
        // keep the comment closed exactly once
        .map(|text| text.replace("*/", "* /"))
}
