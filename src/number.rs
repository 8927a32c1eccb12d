//! Integer-to-words conversion
//!
//! Provides the English names for small integers ("seven", "twenty-one").

/// Names for 1..=19, indexed by value minus one.
const ONES: [&str; 19] = [
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens bases paired with their names, descending so the largest base wins.
const TENS: [(i64, &str); 8] = [
    (90, "ninety"),
    (80, "eighty"),
    (70, "seventy"),
    (60, "sixty"),
    (50, "fifty"),
    (40, "forty"),
    (30, "thirty"),
    (20, "twenty"),
];

/// Convert an integer into its English words
///
/// Covers 1 through 99; anything outside that range falls back to the
/// decimal representation.
///
/// # Examples
///
/// ```
/// use humantext::number_to_words;
///
/// assert_eq!(number_to_words(7), "seven");
/// assert_eq!(number_to_words(21), "twenty-one");
/// assert_eq!(number_to_words(100), "100");
/// ```
pub fn number_to_words(n: i64) -> String {
    if !(1..=99).contains(&n) {
        return n.to_string();
    }

    if (1..=19).contains(&n) {
        return ONES[(n - 1) as usize].to_string();
    }

    // n is 20..=99 here, so the descending scan always finds a base.
    let (base, name) =
        TENS.into_iter().find(|&(base, _)| n >= base).unwrap_or(TENS[TENS.len() - 1]);

    let remainder = n - base;
    if remainder == 0 {
        name.to_string()
    } else {
        format!("{}-{}", name, ONES[(remainder - 1) as usize])
    }
}
