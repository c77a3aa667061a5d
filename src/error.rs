//! Conversion errors.

use crate::token::TokenType;

/// Error returned when a token cannot be converted into a declaration.
///
/// Every variant is local to the token being converted. Converting other
/// tokens with the same inputs is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The token's parent group is not in the supplied group list.
    #[error("token '{token}' belongs to group '{group}', which was not supplied")]
    MissingParentGroup { token: String, group: String },

    /// Custom prefixes are enabled but none is configured for this type.
    #[error("no prefix configured for token type '{token_type}'")]
    UnresolvedPrefix { token_type: TokenType },

    /// Prefix, ancestry and token name contain no letters or digits.
    #[error("token '{token}' produces an empty name")]
    EmptyName { token: String },

    /// A token value references an id that is not in the token map.
    #[error("token '{token}' references unknown token '{target}'")]
    UnresolvedReference { token: String, target: String },

    /// Inlining a reference chain went deeper than the limit (usually a cycle).
    #[error("reference chain from token '{token}' is deeper than {limit} levels")]
    ReferenceDepthExceeded { token: String, limit: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
