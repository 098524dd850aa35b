//! Normalization and display formatting of card numbers.
//!
//! [`normalize`] is the first step of every classification: it strips the
//! separators people type (spaces and hyphens) and nothing else. Any other
//! character survives and makes the number fail downstream checks.
//!
//! The display helpers group digits at the positions a brand declares in its
//! `gaps` metadata, falling back to groups of four.
//!
//! # Example
//!
//! ```
//! use card_validator::format::{format_card_number, format_with_separator, normalize};
//!
//! assert_eq!(normalize("4111 1111-1111 1111"), "4111111111111111");
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_with_separator("4111111111111111", "-"), "4111-1111-1111-1111");
//! ```

use crate::detect::detect_rule;

/// Grouping positions used when a brand declares none.
pub const DEFAULT_GAPS: &[u8] = &[4, 8, 12, 16];

/// Removes every space and hyphen from `input`.
///
/// Other characters are kept as-is.
#[inline]
pub fn normalize(input: &str) -> String {
    input.chars().filter(|&c| c != ' ' && c != '-').collect()
}

/// Returns true if `input` only contains digits, spaces and hyphens.
///
/// # Example
///
/// ```
/// use card_validator::format::is_valid_format;
///
/// assert!(is_valid_format("4111 1111-1111 1111"));
/// assert!(!is_valid_format("4111.1111.1111.1111"));
/// ```
pub fn is_valid_format(input: &str) -> bool {
    input.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

/// Formats a card number for display, separated by spaces.
pub fn format_card_number(input: &str) -> String {
    format_with_separator(input, " ")
}

/// Formats a card number for display with a custom separator.
///
/// The number is normalized first; the grouping comes from the detected
/// brand's gaps, or [`DEFAULT_GAPS`].
pub fn format_with_separator(input: &str, separator: &str) -> String {
    let number = normalize(input);
    let gaps = detect_rule(&number)
        .and_then(|rule| rule.gaps)
        .unwrap_or(DEFAULT_GAPS);

    insert_gaps(&number, gaps, separator)
}

/// Inserts `separator` before each character position listed in `gaps`.
///
/// Positions at or beyond the end of the number are ignored.
///
/// # Example
///
/// ```
/// use card_validator::format::insert_gaps;
///
/// assert_eq!(insert_gaps("378282246310005", &[4, 10], " "), "3782 822463 10005");
/// assert_eq!(insert_gaps("41111", &[4, 8, 12], " "), "4111 1");
/// ```
pub fn insert_gaps(number: &str, gaps: &[u8], separator: &str) -> String {
    let mut result = String::with_capacity(number.len() + gaps.len() * separator.len());

    for (i, c) in number.chars().enumerate() {
        if i > 0 && gaps.iter().any(|&g| g as usize == i) {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}

/// Splits a card number into its display groups.
///
/// # Example
///
/// ```
/// use card_validator::format::split_into_groups;
///
/// assert_eq!(
///     split_into_groups("6375131234567890"),
///     vec!["6375", "1312", "3456", "7890"]
/// );
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    format_with_separator(input, " ")
        .split(' ')
        .filter(|g| !g.is_empty())
        .map(String::from)
        .collect()
}
