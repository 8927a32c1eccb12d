//! Word capitalization
//!
//! Uppercases the first character of a string, or of every word in it.

use crate::error::FormatError;

/// Capitalize a string
///
/// With `all_words` set, the first character of every word is uppercased and
/// the words are rejoined with single spaces, so irregular whitespace runs
/// collapse. Otherwise only the first character of the trimmed string is
/// uppercased and the rest is left unchanged.
///
/// # Errors
///
/// Returns [`FormatError::BlankText`] when `text` is empty or
/// all-whitespace.
///
/// # Examples
///
/// ```
/// use humantext::capitalize;
///
/// assert_eq!(capitalize("hello world", true).unwrap(), "Hello World");
/// assert_eq!(capitalize("hello world", false).unwrap(), "Hello world");
/// assert!(capitalize("   ", true).is_err());
/// ```
pub fn capitalize(text: &str, all_words: bool) -> Result<String, FormatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FormatError::BlankText);
    }

    if all_words {
        Ok(trimmed.split_whitespace().map(capitalize_first).collect::<Vec<_>>().join(" "))
    } else {
        Ok(capitalize_first(trimmed))
    }
}

/// Uppercase the first character, leaving the rest unchanged. Uppercasing is
/// Unicode-aware and may expand to multiple characters.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
