//! Token to declaration conversion.

use crate::config::ExporterConfig;
use crate::declaration::format_declaration;
use crate::error::Result;
use crate::naming::variable_name;
use crate::token::{Collection, Token, TokenGroup, TokenMap};
use crate::value::render_value;

/// Converts tokens into custom-property declarations.
///
/// A converter only borrows its inputs and holds no state between calls, so
/// tokens can be converted in any order, or from several threads at once.
///
/// # Example
///
/// ```rust
/// use tokencss::{
///     token_map, Converter, ExporterConfig, NameStructure, Token, TokenGroup, TokenType,
///     TokenValue,
/// };
///
/// let groups = vec![TokenGroup::new("g", "Layout")];
/// let tokens = token_map(vec![Token::new(
///     "t",
///     "small",
///     TokenType::Space,
///     TokenValue::px(8.0),
///     "g",
/// )]);
/// let config = ExporterConfig {
///     token_name_structure: NameStructure::NameOnly,
///     ..ExporterConfig::default()
/// };
///
/// let converter = Converter::new(&config, &tokens, &groups, &[]);
/// assert_eq!(converter.convert(&tokens["t"]).unwrap(), "  --space-small: 8px;");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    config: &'a ExporterConfig,
    tokens: &'a TokenMap,
    groups: &'a [TokenGroup],
    collections: &'a [Collection],
}

impl<'a> Converter<'a> {
    pub fn new(
        config: &'a ExporterConfig,
        tokens: &'a TokenMap,
        groups: &'a [TokenGroup],
        collections: &'a [Collection],
    ) -> Self {
        Self {
            config,
            tokens,
            groups,
            collections,
        }
    }

    pub fn config(&self) -> &'a ExporterConfig {
        self.config
    }

    /// Custom-property name of a token, without the leading `--`.
    pub fn name_of(&self, token: &Token) -> Result<String> {
        variable_name(token, self.groups, self.collections, self.config)
    }

    /// Rendered CSS value of a token.
    pub fn value_of(&self, token: &Token) -> Result<String> {
        render_value(
            token,
            self.tokens,
            self.groups,
            self.collections,
            self.config,
        )
    }

    /// Converts one token into its declaration (one or two lines).
    pub fn convert(&self, token: &Token) -> Result<String> {
        let name = self.name_of(token)?;
        let value = self.value_of(token)?;
        Ok(format_declaration(token, &name, &value, self.config))
    }

    /// Converts every token, keeping results in input order.
    ///
    /// A failing token yields an `Err` in its slot and does not stop the
    /// others.
    pub fn convert_all<'t, I>(&self, tokens: I) -> Vec<Result<String>>
    where
        I: IntoIterator<Item = &'t Token>,
    {
        tokens
            .into_iter()
            .map(|token| {
                let result = self.convert(token);
                if let Err(err) = &result {
                    tracing::debug!(token = %token.id, error = %err, "token conversion failed");
                }
                result
            })
            .collect()
    }
}

/// Converts a single token with a one-shot [`Converter`].
pub fn convert_token(
    token: &Token,
    tokens: &TokenMap,
    groups: &[TokenGroup],
    collections: &[Collection],
    config: &ExporterConfig,
) -> Result<String> {
    Converter::new(config, tokens, groups, collections).convert(token)
}
