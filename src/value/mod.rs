//! Value rendering.
//!
//! - [`ValueFormatter`]: Value-to-text conversion with pluggable reference handling
//! - [`render_value`]: The formatter wired to token naming, plus font-weight normalization
//! - [`format_color`]: Color output in every [`ColorFormat`](crate::ColorFormat)

mod color;
mod format;
mod render;

pub use color::format_color;
pub use format::{FormatOptions, ValueFormatter, MAX_REFERENCE_DEPTH};
pub use render::{normalize_font_weight, render_value, var_reference};
