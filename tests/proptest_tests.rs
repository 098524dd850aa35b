//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_validator::{
    card_details, classify, cvv, expiry::check_expiry, format, luhn, mask, BaseDate, CardBrand,
    CardValidator, ValidationError,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Brands paired with a prefix that only their rule matches and a valid length.
fn brand_prefix_strategy() -> impl Strategy<Value = (CardBrand, &'static str, usize)> {
    prop_oneof![
        Just((CardBrand::Visa, "4111", 16)),
        Just((CardBrand::Mastercard, "51", 16)),
        Just((CardBrand::Mastercard, "2221", 16)),
        Just((CardBrand::Amex, "37", 15)),
        Just((CardBrand::Discover, "6011", 16)),
        Just((CardBrand::Jcb, "3530", 16)),
        Just((CardBrand::DinersClubInternational, "36", 14)),
        Just((CardBrand::UnionPay, "6213", 16)),
        Just((CardBrand::UnionPay, "6213", 19)),
        Just((CardBrand::Maestro, "6759", 12)),
        Just((CardBrand::Maestro, "6759", 19)),
    ]
}

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

fn to_digits(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| (b'0' + d) as char).collect()
}

/// Completes `prefix` with random digits and a Luhn check digit.
fn luhn_valid_card(prefix: &'static str, len: usize) -> impl Strategy<Value = String> {
    digit_string(len - prefix.len() - 1).prop_map(move |body| {
        let mut digits = to_digits(prefix);
        digits.extend(to_digits(&body));
        digits.push(luhn::generate_check_digit(&digits));
        to_string(&digits)
    })
}

/// Generates a valid card together with its expected brand.
fn valid_card_strategy() -> impl Strategy<Value = (CardBrand, String)> {
    brand_prefix_strategy().prop_flat_map(|(brand, prefix, len)| {
        luhn_valid_card(prefix, len).prop_map(move |card| (brand, card))
    })
}

/// Generates a string with separators (spaces, dashes) mixed in.
fn card_with_separators(card: String) -> impl Strategy<Value = String> {
    let len = card.len();
    proptest::collection::vec(
        prop_oneof![Just(""), Just(" "), Just("-"), Just("  "), Just(" - "),],
        len + 1,
    )
    .prop_map(move |seps| {
        let mut result = String::new();
        for (i, c) in card.chars().enumerate() {
            result.push_str(seps.get(i).unwrap_or(&""));
            result.push(c);
        }
        result.push_str(seps.last().unwrap_or(&""));
        result
    })
}

fn base(month: u32, year: i32) -> BaseDate {
    BaseDate::new(Some(month), Some(year)).unwrap()
}

// =============================================================================
// LUHN ALGORITHM PROPERTIES
// =============================================================================

proptest! {
    /// Property: Adding a check digit makes any digit sequence valid.
    #[test]
    fn check_digit_makes_valid(prefix in digit_string_range(11..=18)) {
        let mut digits = to_digits(&prefix);
        digits.push(luhn::generate_check_digit(&digits));
        prop_assert!(luhn::validate(&digits));
        prop_assert!(luhn::is_valid_luhn(&to_string(&digits)));
    }

    /// Property: Changing any single digit invalidates Luhn.
    #[test]
    fn single_digit_change_invalidates_luhn(
        (_, card) in valid_card_strategy(),
        change_pos in 0usize..19usize,
        delta in 1u8..=9u8,
    ) {
        let digits = to_digits(&card);
        if change_pos < digits.len() {
            let mut modified = digits.clone();
            modified[change_pos] = (modified[change_pos] + delta) % 10;
            prop_assert!(!luhn::validate(&modified),
                "Changing digit at position {} should invalidate Luhn", change_pos);
        }
    }

    /// Property: The slice and string checkers agree.
    #[test]
    fn slice_and_string_luhn_agree(number in digit_string_range(1..=19)) {
        prop_assert_eq!(luhn::validate(&to_digits(&number)), luhn::is_valid_luhn(&number));
    }

    /// Property: Any non-digit character fails the checksum.
    #[test]
    fn non_digit_fails_luhn(
        number in digit_string_range(1..=18),
        pos in 0usize..19usize,
        bad in prop::char::range('a', 'z'),
    ) {
        let mut chars: Vec<char> = number.chars().collect();
        let pos = pos.min(chars.len());
        chars.insert(pos, bad);
        let s: String = chars.into_iter().collect();
        prop_assert!(!luhn::is_valid_luhn(&s));
    }
}

// =============================================================================
// CLASSIFICATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: Luhn-valid numbers with a brand prefix and length classify
    /// as that brand and are valid.
    #[test]
    fn valid_cards_classify_to_brand((brand, card) in valid_card_strategy()) {
        let details = classify(&card);
        prop_assert_eq!(details.brand, Some(brand), "{}", card);
        prop_assert!(details.valid, "{}", card);
    }

    /// Property: Separators never change the classification.
    #[test]
    fn separators_do_not_change_result(
        formatted in valid_card_strategy()
            .prop_flat_map(|(_, card)| card_with_separators(card))
    ) {
        let plain = format::normalize(&formatted);
        prop_assert_eq!(card_details(&formatted).unwrap(), classify(&plain));
    }

    /// Property: `valid` is exactly `luhn_valid && length_valid`.
    #[test]
    fn valid_is_conjunction(number in digit_string_range(1..=22)) {
        let details = classify(&number);
        prop_assert_eq!(details.valid, details.luhn_valid && details.length_valid);
    }

    /// Property: Unknown numbers are never valid.
    #[test]
    fn unknown_is_never_valid(number in "[0-9]{0,22}") {
        let details = classify(&number);
        if details.is_unknown() {
            prop_assert!(!details.valid);
            prop_assert!(!details.length_valid);
            prop_assert!(details.cvv_length.is_empty());
            prop_assert!(details.supported_lengths.is_empty());
        }
    }

    /// Property: Classification never panics and non-empty input never errors.
    #[test]
    fn classification_never_panics(input in any::<String>()) {
        let result = card_details(&input);
        prop_assert_eq!(result.is_err(), input.is_empty());
    }

    /// Property: Classification is deterministic.
    #[test]
    fn classification_is_deterministic(input in "[0-9 -]{1,25}") {
        let mut validator = CardValidator::new(input.clone());
        let first = validator.get_card_details().unwrap();
        let second = validator.get_card_details().unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, card_details(&input).unwrap());
    }
}

// =============================================================================
// CVV PROPERTIES
// =============================================================================

proptest! {
    /// Property: For a brand, a numeric CVV is valid iff its length is listed.
    #[test]
    fn numeric_cvv_valid_iff_length_listed(
        brand in prop::sample::select(CardBrand::ALL.to_vec()),
        cvv in "[0-9]{1,6}",
    ) {
        let rule = brand.rule();
        let expected = rule.cvv_length.iter().any(|&l| l as usize == cvv.len());
        prop_assert_eq!(cvv::check_cvv(Some(rule), &cvv), Ok(expected));
    }

    /// Property: Any CVV containing a non-digit is rejected with an error.
    #[test]
    fn non_numeric_cvv_is_error(
        brand in prop::sample::select(CardBrand::ALL.to_vec()),
        cvv in "[0-9]{0,3}[a-zA-Z .]{1,2}[0-9]{0,3}",
    ) {
        prop_assert_eq!(
            cvv::check_cvv(Some(brand.rule()), &cvv),
            Err(ValidationError::NonNumericCvv)
        );
    }
}

// =============================================================================
// EXPIRY PROPERTIES
// =============================================================================

proptest! {
    /// Property: Well-formed expiries are valid iff not before the baseline.
    #[test]
    fn well_formed_expiry_compares_with_baseline(
        month in 1u32..=12,
        year in 2000i32..=2999,
        base_month in 1u32..=12,
        base_year in 2000i32..=2999,
    ) {
        let value = format!("{:02}/{}", month, year);
        let expected = year > base_year || (year == base_year && month >= base_month);
        prop_assert_eq!(
            check_expiry(&value, base(base_month, base_year)),
            Ok(expected),
            "{} against {}/{}", value, base_month, base_year
        );
    }

    /// Property: Expiry checking never panics.
    #[test]
    fn expiry_never_panics(value in any::<String>()) {
        let _ = check_expiry(&value, base(6, 2025));
    }

    /// Property: Months outside 1-12 are rejected as a baseline.
    #[test]
    fn baseline_month_out_of_range(month in 13u32..) {
        prop_assert_eq!(
            BaseDate::new(Some(month), Some(2025)),
            Err(ValidationError::InvalidBaselineFormat)
        );
    }
}

// =============================================================================
// MASKING AND FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Masking keeps exactly the last four digits.
    #[test]
    fn mask_keeps_only_last_four((_, card) in valid_card_strategy()) {
        let masked = mask::mask_string(&card);
        prop_assert_eq!(masked.chars().filter(|c| c.is_ascii_digit()).count(), 4);
        prop_assert!(masked.ends_with(&card[card.len() - 4..]));
    }

    /// Property: Formatting only inserts separators.
    #[test]
    fn formatting_preserves_digits(number in digit_string_range(1..=19)) {
        let formatted = format::format_card_number(&number);
        prop_assert_eq!(format::normalize(&formatted), number);
    }
}
