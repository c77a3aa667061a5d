//! Case conversion for generated names.
//!
//! Input fragments are transliterated to ASCII with `deunicode`, split into
//! words, and re-joined in the requested [`NameStyle`]. Word boundaries are:
//!
//! - any character that is not an ASCII letter or digit
//! - a lowercase letter or digit followed by an uppercase letter (`fontSize`)
//! - an uppercase letter followed by an uppercase-then-lowercase pair (`XMLHttp`)
//!
//! Digits never start a new word on their own, so `space100` stays one word.

use deunicode::deunicode;

use crate::config::NameStyle;

/// Splits text into words, transliterating non-ASCII characters first.
///
/// # Example
///
/// ```rust
/// use tokencss::naming::split_words;
///
/// assert_eq!(split_words("Brand / Primary 500"), vec!["Brand", "Primary", "500"]);
/// assert_eq!(split_words("fontSize"), vec!["font", "Size"]);
/// assert_eq!(split_words("Crème brûlée"), vec!["Creme", "brulee"]);
/// ```
pub fn split_words(text: &str) -> Vec<String> {
    let ascii = deunicode(text);
    let chars: Vec<char> = ascii.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_ascii_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Joins name fragments into one identifier in the given style.
///
/// Empty fragments contribute nothing. The result only contains ASCII
/// letters, digits, `-` and `_`.
///
/// # Example
///
/// ```rust
/// use tokencss::naming::code_safe_name;
/// use tokencss::NameStyle;
///
/// let fragments = ["color", "Brand", "Primary 500"];
/// assert_eq!(code_safe_name(fragments, NameStyle::KebabCase), "color-brand-primary-500");
/// assert_eq!(code_safe_name(fragments, NameStyle::CamelCase), "colorBrandPrimary500");
/// ```
pub fn code_safe_name<'a, I>(fragments: I, style: NameStyle) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let words: Vec<String> = fragments.into_iter().flat_map(split_words).collect();

    match style {
        NameStyle::KebabCase => join_lower(&words, "-"),
        NameStyle::SnakeCase => join_lower(&words, "_"),
        NameStyle::ConstantCase => words
            .iter()
            .map(|w| w.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
        NameStyle::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
        NameStyle::CamelCase => words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i == 0 {
                    w.to_ascii_lowercase()
                } else {
                    capitalize(w)
                }
            })
            .collect(),
    }
}

fn join_lower(words: &[String], separator: &str) -> String {
    words
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize(word: &str) -> String {
    let mut out = word.to_ascii_lowercase();
    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    out
}
