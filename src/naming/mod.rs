//! Token name construction.
//!
//! This module provides:
//!
//! - [`resolve_prefix`]: Type prefix lookup (configured or built-in)
//! - [`build_name`]: Prefix, group ancestry and token name in one identifier
//! - [`strip_legacy_prefix`]: Removal of historical per-type prefixes
//! - [`variable_name`]: Both of the above, the name used in output
//!
//! [`variable_name`] is the single source of custom-property names: it names
//! declared tokens and referenced tokens alike, so a `var(--x)` lookup always
//! matches the `--x` declaration it points at.

mod builder;
mod case;
mod legacy;
mod prefix;

pub use builder::{build_name, parent_group, resolve_collection};
pub use case::{code_safe_name, split_words};
pub use legacy::{legacy_prefix, strip_legacy_prefix, LEGACY_PREFIXES};
pub use prefix::{default_prefix, resolve_prefix};

use crate::config::ExporterConfig;
use crate::error::Result;
use crate::token::{Collection, Token, TokenGroup};

/// Returns the custom-property name of a token, without the leading `--`.
///
/// # Example
///
/// ```rust
/// use tokencss::naming::variable_name;
/// use tokencss::{ExporterConfig, Token, TokenGroup, TokenType, TokenValue};
///
/// let groups = vec![TokenGroup::root("g", "Font size")];
/// let token = Token::new("t", "body", TokenType::FontSize, TokenValue::px(16.0), "g");
///
/// // "font-size-body" loses its legacy prefix
/// let name = variable_name(&token, &groups, &[], &ExporterConfig::default()).unwrap();
/// assert_eq!(name, "body");
/// ```
pub fn variable_name(
    token: &Token,
    groups: &[TokenGroup],
    collections: &[Collection],
    config: &ExporterConfig,
) -> Result<String> {
    let name = build_name(token, groups, collections, config)?;
    Ok(strip_legacy_prefix(&name, token.token_type).to_string())
}
