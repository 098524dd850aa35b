//! Card brand detection by walking the brand rule table.
//!
//! Pattern rules are tested against the whole normalized number; range rules
//! compare the BIN (the leading digits, at most 6) against inclusive bounds.
//! The first rule that matches wins.

use crate::card::{BrandRule, CardBrand, Recognition};
use crate::rules::brand_rules;

/// Number of leading characters read as the BIN for range rules.
pub const BIN_LENGTH: usize = 6;

/// Detects the brand rule matching a normalized card number.
///
/// Returns `None` when no rule matches. When a range rule is reached and the
/// number has no leading digits to read a BIN from, detection stops there
/// and returns `None` without trying later rules.
///
/// # Example
///
/// ```
/// use card_validator::detect::detect_rule;
/// use card_validator::CardBrand;
///
/// let rule = detect_rule("4026000000000000").unwrap();
/// assert_eq!(rule.brand, CardBrand::VisaElectron);
///
/// assert!(detect_rule("1234567890123456").is_none());
/// ```
pub fn detect_rule(number: &str) -> Option<&'static BrandRule> {
    for rule in brand_rules() {
        match &rule.recognition {
            Recognition::Pattern(re) => {
                if re.is_match(number) {
                    return Some(rule);
                }
            }
            Recognition::Ranges(ranges) => {
                let bin = parse_bin(number)?;
                if ranges.iter().any(|&range| range_contains(range, bin)) {
                    return Some(rule);
                }
            }
        }
    }
    None
}

/// Detects the card brand of a normalized card number.
///
/// # Example
///
/// ```
/// use card_validator::detect::detect_brand;
/// use card_validator::CardBrand;
///
/// assert_eq!(detect_brand("378282246310005"), Some(CardBrand::Amex));
/// assert_eq!(detect_brand("5500000000000004"), Some(CardBrand::Mastercard));
/// ```
#[inline]
pub fn detect_brand(number: &str) -> Option<CardBrand> {
    detect_rule(number).map(|rule| rule.brand)
}

/// Reads the BIN from the start of a number.
///
/// Takes the run of ASCII digits at the start of the first [`BIN_LENGTH`]
/// characters. Returns `None` if there is no such run.
///
/// # Example
///
/// ```
/// use card_validator::detect::parse_bin;
///
/// assert_eq!(parse_bin("5105105105105100"), Some(510510));
/// assert_eq!(parse_bin("6011"), Some(6011));
/// assert_eq!(parse_bin("x5105"), None);
/// ```
pub fn parse_bin(number: &str) -> Option<u32> {
    let digits: Vec<u32> = number
        .chars()
        .take(BIN_LENGTH)
        .map_while(|c| c.to_digit(10))
        .collect();

    if digits.is_empty() {
        return None;
    }
    Some(digits.iter().fold(0, |acc, &d| acc * 10 + d))
}

/// Range membership; a zero bound disables the range.
#[inline]
fn range_contains((low, high): (u32, u32), bin: u32) -> bool {
    low != 0 && high != 0 && low <= bin && bin <= high
}
