//! Hierarchical name construction.

use std::borrow::Cow;

use crate::config::{ExporterConfig, NameStructure};
use crate::error::{ConvertError, Result};
use crate::token::{Collection, Token, TokenGroup};

use super::case::code_safe_name;
use super::prefix::resolve_prefix;

/// Finds the token's parent group.
///
/// # Errors
///
/// Returns [`ConvertError::MissingParentGroup`] when no group has the
/// token's `parent_group_id`.
pub fn parent_group<'a>(token: &Token, groups: &'a [TokenGroup]) -> Result<&'a TokenGroup> {
    groups
        .iter()
        .find(|g| g.id == token.parent_group_id)
        .ok_or_else(|| ConvertError::MissingParentGroup {
            token: token.id.clone(),
            group: token.parent_group_id.clone(),
        })
}

/// Finds a collection by persistent id, falling back to a placeholder named
/// after the raw id.
pub fn resolve_collection<'a>(collections: &'a [Collection], id: &str) -> Cow<'a, Collection> {
    match collections.iter().find(|c| c.persistent_id == id) {
        Some(collection) => Cow::Borrowed(collection),
        None => {
            tracing::debug!(collection = id, "collection not found, using raw id as its name");
            Cow::Owned(Collection::placeholder(id))
        }
    }
}

/// Builds the code-safe name of a token, before legacy prefix stripping.
///
/// The name is made of a prefix segment (global prefix, type prefix and, for
/// [`NameStructure::CollectionPathAndName`], the collection name), the parent
/// group's ancestry (omitted for [`NameStructure::NameOnly`]) and the token
/// name, joined in the configured [`NameStyle`](crate::NameStyle).
///
/// # Errors
///
/// Fails when the parent group is missing, the type prefix can't be
/// resolved, or nothing in the name survives case conversion. An unknown
/// collection id never fails.
///
/// # Example
///
/// ```rust
/// use tokencss::{build_name, ExporterConfig, Token, TokenGroup, TokenType, TokenValue};
///
/// let groups = vec![TokenGroup::new("g", "Brand")];
/// let token = Token::new("t", "Primary", TokenType::Color, TokenValue::text("x"), "g");
///
/// let name = build_name(&token, &groups, &[], &ExporterConfig::default()).unwrap();
/// assert_eq!(name, "color-brand-primary");
/// ```
pub fn build_name(
    token: &Token,
    groups: &[TokenGroup],
    collections: &[Collection],
    config: &ExporterConfig,
) -> Result<String> {
    let parent = parent_group(token, groups)?;
    let structure = config.token_name_structure;

    let collection = match (structure, token.collection_id.as_deref()) {
        (NameStructure::CollectionPathAndName, Some(id)) => {
            Some(resolve_collection(collections, id))
        }
        _ => None,
    };

    let type_prefix = resolve_prefix(token.token_type, config)?;
    let prefix = [
        config.global_name_prefix.as_deref(),
        Some(type_prefix),
        collection.as_ref().map(|c| c.name.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|segment| !segment.is_empty())
    .collect::<Vec<_>>()
    .join("-");

    let ancestry = match structure {
        NameStructure::NameOnly => Vec::new(),
        NameStructure::PathAndName | NameStructure::CollectionPathAndName => parent.ancestry(),
    };

    let fragments = std::iter::once(prefix.as_str())
        .chain(ancestry)
        .chain(std::iter::once(token.name.as_str()));

    let name = code_safe_name(fragments, config.token_name_style);
    if name.is_empty() {
        return Err(ConvertError::EmptyName {
            token: token.id.clone(),
        });
    }
    Ok(name)
}
