//! Token value rendering.

use crate::config::ExporterConfig;
use crate::error::Result;
use crate::naming::variable_name;
use crate::token::{Collection, Token, TokenGroup, TokenMap, TokenType, TokenValue};

use super::format::{FormatOptions, ValueFormatter, MAX_REFERENCE_DEPTH};

/// Wraps a custom-property name in a `var()` lookup.
///
/// ```rust
/// assert_eq!(tokencss::value::var_reference("space-small"), "var(--space-small)");
/// ```
pub fn var_reference(name: &str) -> String {
    format!("var(--{})", name)
}

/// Renders the value of a token as CSS text.
///
/// References become `var(--name)` lookups, with the name produced by
/// [`variable_name`] for the referenced token, so the lookup always matches
/// that token's own declaration. The referenced value itself is never
/// rendered in that case. With `use_references` off, referenced literals are
/// inlined instead.
///
/// Textual font-weight values (including inlined text) are normalized to a
/// bare number when their text parses as one (`"700"` becomes `700`).
///
/// # Errors
///
/// Fails when a referenced token is missing from `tokens`, or when naming a
/// referenced token fails (missing parent group, unresolved prefix).
///
/// # Example
///
/// ```rust
/// use tokencss::value::render_value;
/// use tokencss::{token_map, ExporterConfig, Token, TokenGroup, TokenType, TokenValue};
///
/// let groups = vec![TokenGroup::root("g", "Space")];
/// let tokens = token_map(vec![
///     Token::new("s", "small", TokenType::Space, TokenValue::px(8.0), "g"),
///     Token::new("gap", "gap", TokenType::Space, TokenValue::reference("s"), "g"),
/// ]);
/// let config = ExporterConfig::default();
///
/// let value = render_value(&tokens["gap"], &tokens, &groups, &[], &config).unwrap();
/// assert_eq!(value, "var(--space-small)");
/// ```
pub fn render_value(
    token: &Token,
    tokens: &TokenMap,
    groups: &[TokenGroup],
    collections: &[Collection],
    config: &ExporterConfig,
) -> Result<String> {
    let formatter = ValueFormatter::new(FormatOptions::from_config(config), tokens);
    let rendered = formatter.format(token, &mut |target: &Token| {
        variable_name(target, groups, collections, config).map(|name| var_reference(&name))
    })?;

    if token.token_type == TokenType::FontWeight && renders_text(token, tokens, config) {
        return Ok(normalize_font_weight(rendered));
    }
    Ok(rendered)
}

/// Whether a token's rendered value is text, following inlined references.
fn renders_text(token: &Token, tokens: &TokenMap, config: &ExporterConfig) -> bool {
    let mut value = &token.value;
    for _ in 0..=MAX_REFERENCE_DEPTH {
        match value {
            TokenValue::Text(_) => return true,
            TokenValue::Reference(id) if !config.use_references => match tokens.get(id) {
                Some(target) => value = &target.value,
                None => return false,
            },
            _ => return false,
        }
    }
    false
}

/// Replaces a quoted numeric font weight with the bare number.
///
/// All `"` characters are removed and the rest is parsed as a decimal
/// number. A finite result replaces the value; anything else (keywords,
/// `var()` lookups, empty text) leaves the rendered value unchanged.
///
/// ```rust
/// use tokencss::value::normalize_font_weight;
///
/// assert_eq!(normalize_font_weight("\"700\"".to_string()), "700");
/// assert_eq!(normalize_font_weight("\"bold-custom\"".to_string()), "\"bold-custom\"");
/// ```
pub fn normalize_font_weight(rendered: String) -> String {
    let unquoted = rendered.replace('"', "");
    let candidate = unquoted.trim();
    if candidate.is_empty() {
        return rendered;
    }

    match candidate.parse::<f64>() {
        Ok(weight) if weight.is_finite() => weight.to_string(),
        _ => {
            tracing::debug!(value = %rendered, "font weight is not numeric, keeping text");
            rendered
        }
    }
}
