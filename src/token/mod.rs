//! Token model consumed by the converter.
//!
//! This module provides the input contract:
//!
//! - [`Token`]: A named, typed design value
//! - [`TokenType`]: The closed set of token types
//! - [`TokenValue`]: Literal, composite or reference values
//! - [`TokenGroup`]: A node in the group hierarchy, used for name ancestry
//! - [`Collection`]: A named partition of tokens, referenced by persistent id
//!
//! All types are plain data. The converter only ever borrows them.

mod group;
mod value;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use group::{Collection, TokenGroup};
pub use value::{
    BorderValue, ColorValue, Dimension, GradientKind, GradientStop, GradientValue, ShadowLayer,
    TokenValue, TypographyValue, Unit,
};

/// Lookup from token id to token, used to resolve references.
pub type TokenMap = HashMap<String, Token>;

/// Builds a [`TokenMap`] keyed by each token's id.
pub fn token_map<I: IntoIterator<Item = Token>>(tokens: I) -> TokenMap {
    tokens.into_iter().map(|t| (t.id.clone(), t)).collect()
}

/// The type of a design token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    Color,
    Dimension,
    Size,
    Space,
    Opacity,
    FontSize,
    LineHeight,
    LetterSpacing,
    ParagraphSpacing,
    BorderWidth,
    Radius,
    Duration,
    ZIndex,
    Shadow,
    Border,
    Gradient,
    Typography,
    String,
    FontFamily,
    FontWeight,
    TextCase,
    TextDecoration,
    Visibility,
    Blur,
}

impl TokenType {
    /// Every token type, in declaration order.
    pub const ALL: [TokenType; 24] = [
        TokenType::Color,
        TokenType::Dimension,
        TokenType::Size,
        TokenType::Space,
        TokenType::Opacity,
        TokenType::FontSize,
        TokenType::LineHeight,
        TokenType::LetterSpacing,
        TokenType::ParagraphSpacing,
        TokenType::BorderWidth,
        TokenType::Radius,
        TokenType::Duration,
        TokenType::ZIndex,
        TokenType::Shadow,
        TokenType::Border,
        TokenType::Gradient,
        TokenType::Typography,
        TokenType::String,
        TokenType::FontFamily,
        TokenType::FontWeight,
        TokenType::TextCase,
        TokenType::TextDecoration,
        TokenType::Visibility,
        TokenType::Blur,
    ];

    /// Returns the camelCase name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Color => "color",
            TokenType::Dimension => "dimension",
            TokenType::Size => "size",
            TokenType::Space => "space",
            TokenType::Opacity => "opacity",
            TokenType::FontSize => "fontSize",
            TokenType::LineHeight => "lineHeight",
            TokenType::LetterSpacing => "letterSpacing",
            TokenType::ParagraphSpacing => "paragraphSpacing",
            TokenType::BorderWidth => "borderWidth",
            TokenType::Radius => "radius",
            TokenType::Duration => "duration",
            TokenType::ZIndex => "zIndex",
            TokenType::Shadow => "shadow",
            TokenType::Border => "border",
            TokenType::Gradient => "gradient",
            TokenType::Typography => "typography",
            TokenType::String => "string",
            TokenType::FontFamily => "fontFamily",
            TokenType::FontWeight => "fontWeight",
            TokenType::TextCase => "textCase",
            TokenType::TextDecoration => "textDecoration",
            TokenType::Visibility => "visibility",
            TokenType::Blur => "blur",
        }
    }

    /// Returns `true` if textual values of this type are CSS keywords.
    ///
    /// Keyword values (`uppercase`, `underline`, `hidden`) are written
    /// verbatim; every other textual value is written as a quoted CSS string.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenType::TextCase | TokenType::TextDecoration | TokenType::Visibility
        )
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named, typed design value.
///
/// # Example
///
/// ```rust
/// use tokencss::{Token, TokenType, TokenValue};
///
/// let token = Token::new("t1", "small", TokenType::Space, TokenValue::px(8.0), "grp-space")
///     .with_description("Gap between inline items");
///
/// assert_eq!(token.parent_group_id, "grp-space");
/// assert!(token.collection_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: TokenValue,
    pub parent_group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Token {
    /// Creates a token without collection or description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        token_type: TokenType,
        value: TokenValue,
        parent_group_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            token_type,
            value,
            parent_group_id: parent_group_id.into(),
            collection_id: None,
            description: None,
        }
    }

    /// Sets the collection persistent id, returning the token for chaining.
    pub fn with_collection(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    /// Sets the description, returning the token for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
