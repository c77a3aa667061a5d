//! Color output formats.

use crate::config::ColorFormat;
use crate::token::ColorValue;
use crate::util::{format_number, rgb_to_hex, rgb_to_hsl};

/// Writes a color in the requested format.
///
/// `decimals` bounds the fractional digits of alpha and HSL components.
/// RGB channels are always integers.
///
/// # Example
///
/// ```rust
/// use tokencss::value::format_color;
/// use tokencss::{ColorFormat, ColorValue};
///
/// let teal = ColorValue::rgba(0, 128, 128, 0.5);
/// assert_eq!(format_color(&teal, ColorFormat::SmartHex, 3), "#00808080");
/// assert_eq!(format_color(&teal, ColorFormat::Rgba, 3), "rgba(0, 128, 128, 0.5)");
/// ```
pub fn format_color(color: &ColorValue, format: ColorFormat, decimals: usize) -> String {
    let opaque = color.is_opaque();
    match format {
        ColorFormat::Hex6 => hex(color, false),
        ColorFormat::Hex8 => hex(color, true),
        ColorFormat::SmartHex => hex(color, !opaque),
        ColorFormat::Rgb => rgb(color, None),
        ColorFormat::Rgba => rgb(color, Some(decimals)),
        ColorFormat::SmartRgba => rgb(color, (!opaque).then_some(decimals)),
        ColorFormat::Hsl => hsl(color, decimals, false),
        ColorFormat::Hsla => hsl(color, decimals, true),
        ColorFormat::SmartHsla => hsl(color, decimals, !opaque),
    }
}

fn hex(color: &ColorValue, with_alpha: bool) -> String {
    rgb_to_hex(color.channels(), with_alpha.then_some(color.a))
}

fn alpha(color: &ColorValue, decimals: usize) -> String {
    format_number(color.a.clamp(0.0, 1.0), decimals)
}

fn rgb(color: &ColorValue, alpha_decimals: Option<usize>) -> String {
    let (r, g, b) = color.channels();
    match alpha_decimals {
        Some(decimals) => format!("rgba({}, {}, {}, {})", r, g, b, alpha(color, decimals)),
        None => format!("rgb({}, {}, {})", r, g, b),
    }
}

fn hsl(color: &ColorValue, decimals: usize, with_alpha: bool) -> String {
    let (h, s, l) = rgb_to_hsl(color.channels());
    let h = format_number(h, decimals);
    let s = format_number(s, decimals);
    let l = format_number(l, decimals);
    if with_alpha {
        format!("hsla({}, {}%, {}%, {})", h, s, l, alpha(color, decimals))
    } else {
        format!("hsl({}, {}%, {}%)", h, s, l)
    }
}
