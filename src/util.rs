//! Utility functions for numeric formatting and color conversion.

/// Formats a number with at most `decimals` fractional digits.
///
/// Trailing zeros and a dangling decimal point are removed, and negative
/// zero prints as `0`, so the output is the shortest stable form of the
/// rounded value.
///
/// # Example
///
/// ```rust
/// use tokencss::format_number;
///
/// assert_eq!(format_number(8.0, 3), "8");
/// assert_eq!(format_number(0.5, 3), "0.5");
/// assert_eq!(format_number(1.23456, 2), "1.23");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let mut s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Converts an RGB triplet to hue (degrees), saturation and lightness (percent).
///
/// # Example
///
/// ```rust
/// use tokencss::rgb_to_hsl;
///
/// assert_eq!(rgb_to_hsl((255, 0, 0)), (0.0, 100.0, 50.0));
/// assert_eq!(rgb_to_hsl((255, 255, 255)), (0.0, 0.0, 100.0));
/// ```
pub fn rgb_to_hsl((r, g, b): (u8, u8, u8)) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, lightness * 100.0);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (hue * 60.0, saturation * 100.0, lightness * 100.0)
}

/// Formats an RGB triplet as lowercase hex, appending an alpha byte when given.
///
/// # Example
///
/// ```rust
/// use tokencss::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex((255, 0, 128), None), "#ff0080");
/// assert_eq!(rgb_to_hex((255, 0, 128), Some(0.5)), "#ff008080");
/// ```
pub fn rgb_to_hex((r, g, b): (u8, u8, u8), alpha: Option<f64>) -> String {
    match alpha {
        Some(a) => format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha_to_byte(a)),
        None => format!("#{:02x}{:02x}{:02x}", r, g, b),
    }
}

/// Maps an alpha in `0.0..=1.0` onto `0..=255`, clamping out-of-range input.
pub(crate) fn alpha_to_byte(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}
