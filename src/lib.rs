//! # tokencss - Design tokens as CSS custom properties
//!
//! `tokencss` turns design tokens (colors, spacing, font sizes, ...) into
//! custom-property declarations:
//!
//! ```css
//!   /* Primary brand color */
//!   --color-brand-primary: #0055ff;
//!   --color-action: var(--color-brand-primary);
//! ```
//!
//! It is the formatting layer of a token exporter. Loading tokens and
//! configuration, bundling declarations into a stylesheet and writing files
//! are left to the caller.
//!
//! ## Pipeline
//!
//! For each token:
//!
//! 1. **Prefix**: the token type picks a prefix, from configuration or built-in defaults
//! 2. **Name**: prefix, group ancestry and token name are joined in the configured case style
//! 3. **Legacy prefixes**: a fixed table of historical prefixes is stripped from the name
//! 4. **Value**: the value is rendered; references become `var(--name)` lookups
//!    using the exact name from steps 1-3 for the referenced token
//! 5. **Declaration**: indentation, optional description comment, `--name: value;`
//!
//! Every step is a pure function of borrowed inputs and an [`ExporterConfig`].
//!
//! ## Quick Start
//!
//! ```rust
//! use tokencss::{
//!     token_map, ColorValue, Converter, ExporterConfig, Token, TokenGroup, TokenType, TokenValue,
//! };
//!
//! let groups = vec![TokenGroup::new("brand", "Brand")];
//! let tokens = token_map(vec![
//!     Token::new(
//!         "primary",
//!         "Primary",
//!         TokenType::Color,
//!         TokenValue::Color(ColorValue::rgb(0, 0x55, 0xff)),
//!         "brand",
//!     )
//!     .with_description("Primary brand color"),
//!     Token::new("action", "Action", TokenType::Color, TokenValue::reference("primary"), "brand"),
//! ]);
//!
//! let config = ExporterConfig::default();
//! let converter = Converter::new(&config, &tokens, &groups, &[]);
//!
//! assert_eq!(
//!     converter.convert(&tokens["primary"]).unwrap(),
//!     "  /* Primary brand color */\n  --color-brand-primary: #0055ff;"
//! );
//! assert_eq!(
//!     converter.convert(&tokens["action"]).unwrap(),
//!     "  --color-brand-action: var(--color-brand-primary);"
//! );
//! ```
//!
//! ## Failures
//!
//! Conversion of a single token fails with a [`ConvertError`] when its parent
//! group is missing, when a custom prefix table lacks its type, when its name
//! ends up with no letters or digits, or when a reference points nowhere. An unknown collection id is not an error: the raw
//! id is used as the collection name.

pub mod config;
mod convert;
mod declaration;
mod error;
pub mod naming;
pub mod token;
mod util;
pub mod value;

pub use config::{ColorFormat, ExporterConfig, Indent, NameStructure, NameStyle};
pub use convert::{convert_token, Converter};
pub use declaration::format_declaration;
pub use error::{ConvertError, Result};
pub use naming::{build_name, resolve_prefix, strip_legacy_prefix, variable_name};
pub use token::{
    token_map, Collection, ColorValue, Dimension, Token, TokenGroup, TokenMap, TokenType,
    TokenValue, Unit,
};
pub use util::{format_number, rgb_to_hex, rgb_to_hsl};
pub use value::render_value;
