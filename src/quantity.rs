//! Quantity phrasing with unit pluralization
//!
//! Joins a qualifier prefix, a numeric or worded value, and a pluralized
//! unit noun into a single phrase ("about two hours").

use crate::number::number_to_words;

/// Tolerance for deciding whether a quantity has a fractional component.
const FRACTION_EPSILON: f64 = f64::EPSILON * 100.0;

/// Format a quantity with a given unit
///
/// With `as_words` set, the quantity is qualified and converted to English
/// words: values below one render as `"less than one <unit>"`, and values
/// with a fractional component are prefixed with `"about"`. Worded values
/// truncate toward zero. Without `as_words`, the raw numeric value is used.
///
/// The unit is pluralized unless the rendered quantity is exactly one;
/// units ending in `"y"` take the `"ies"` plural ("century" ->
/// "centuries").
///
/// # Examples
///
/// ```
/// use humantext::format_quantity;
///
/// assert_eq!(format_quantity(1.0, "day", false), "1 day");
/// assert_eq!(format_quantity(2.0, "century", false), "2 centuries");
/// assert_eq!(format_quantity(0.5, "hour", true), "less than one hour");
/// assert_eq!(format_quantity(2.5, "hour", true), "about two hours");
/// ```
pub fn format_quantity(quantity: f64, unit: &str, as_words: bool) -> String {
    let mut prefix = "";

    let (quantity_str, singular) = if as_words {
        if quantity < 1.0 {
            prefix = "less than";
        } else if quantity.fract().abs() > FRACTION_EPSILON {
            prefix = "about";
        }

        // Truncate toward zero; sub-one quantities read as "less than one".
        let whole = if quantity < 1.0 { 1 } else { quantity.trunc() as i64 };
        (number_to_words(whole), whole == 1)
    } else {
        (quantity.to_string(), quantity == 1.0)
    };

    let unit_str = if singular { unit.to_string() } else { pluralize(unit) };

    format!("{prefix} {quantity_str} {unit_str}").trim().to_string()
}

/// English plural with the trailing-y heuristic.
fn pluralize(unit: &str) -> String {
    match unit.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{unit}s"),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for quantity.
    use super::*;

    /// Validates `format_quantity` behavior for the numeric scenario.
    ///
    /// Assertions:
    /// - Confirms `format_quantity(1.0, "day", false)` equals `"1 day"`.
    /// - Confirms `format_quantity(2.0, "day", false)` equals `"2 days"`.
    /// - Confirms `format_quantity(0.5, "hour", false)` equals `"0.5 hours"`.
    #[test]
    fn test_numeric_quantities() {
        assert_eq!(format_quantity(1.0, "day", false), "1 day");
        assert_eq!(format_quantity(2.0, "day", false), "2 days");
        assert_eq!(format_quantity(0.5, "hour", false), "0.5 hours");
    }

    /// Validates `format_quantity` behavior for the irregular plural
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `format_quantity(2.0, "century", false)` equals `"2
    ///   centuries"`.
    /// - Confirms `format_quantity(1.0, "century", false)` equals `"1
    ///   century"`.
    #[test]
    fn test_trailing_y_plural() {
        assert_eq!(format_quantity(2.0, "century", false), "2 centuries");
        assert_eq!(format_quantity(1.0, "century", false), "1 century");
        assert_eq!(format_quantity(3.0, "day", false), "3 days");
    }

    /// Validates `format_quantity` behavior for the worded scenario.
    ///
    /// Assertions:
    /// - Confirms `format_quantity(2.0, "hour", true)` equals `"two hours"`.
    /// - Confirms `format_quantity(1.0, "hour", true)` equals `"one hour"`.
    /// - Confirms `format_quantity(21.0, "day", true)` equals `"twenty-one
    ///   days"`.
    #[test]
    fn test_worded_quantities() {
        assert_eq!(format_quantity(2.0, "hour", true), "two hours");
        assert_eq!(format_quantity(1.0, "hour", true), "one hour");
        assert_eq!(format_quantity(21.0, "day", true), "twenty-one days");
    }

    /// Validates `format_quantity` behavior for the sub-one prefix scenario.
    ///
    /// Assertions:
    /// - Confirms `format_quantity(0.5, "hour", true)` equals `"less than
    ///   one hour"`.
    /// - Confirms zero and negative quantities take the same prefix.
    #[test]
    fn test_less_than_prefix() {
        assert_eq!(format_quantity(0.5, "hour", true), "less than one hour");
        assert_eq!(format_quantity(0.0, "minute", true), "less than one minute");
        assert_eq!(format_quantity(-3.0, "day", true), "less than one day");
    }

    /// Validates `format_quantity` behavior for the fractional prefix
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `format_quantity(2.5, "hour", true)` starts with `"about"`.
    /// - Ensures whole quantities take no prefix.
    #[test]
    fn test_about_prefix() {
        assert_eq!(format_quantity(2.5, "hour", true), "about two hours");
        assert!(format_quantity(12.3, "day", true).starts_with("about"));
        assert_eq!(format_quantity(12.0, "day", true), "twelve days");
    }

    /// Validates `format_quantity` behavior for the out-of-range word
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms quantities above 99 fall back to digits even when worded.
    #[test]
    fn test_worded_fallback_to_digits() {
        assert_eq!(format_quantity(120.0, "day", true), "120 days");
    }
}
