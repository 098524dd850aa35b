//! Main classification orchestration for card numbers.
//!
//! This module combines brand detection, the Luhn checksum and the brand's
//! length rule into a single [`CardDetails`] record.

use crate::card::{BrandRule, CardDetails};
use crate::detect::detect_rule;
use crate::error::ValidationError;
use crate::format::normalize;
use crate::luhn::is_valid_luhn;
use crate::mask::mask_string;

/// Classifies a normalized card number.
///
/// Brand detection and the Luhn check run independently. When a brand
/// matches, its length and CVV metadata are copied into the result and the
/// length is checked; otherwise the card type is `"unknown"` and
/// `length_valid` is false whatever the checksum says.
///
/// # Example
///
/// ```
/// use card_validator::validate::classify;
///
/// let details = classify("4111111111111111");
/// assert_eq!(details.card_type(), "visa");
/// assert!(details.valid);
///
/// let details = classify("1234567890123456");
/// assert_eq!(details.card_type(), "unknown");
/// assert!(!details.valid);
/// ```
pub fn classify(number: &str) -> CardDetails {
    classify_with_rule(number).0
}

/// Classifies a normalized card number and also returns the matched rule.
pub fn classify_with_rule(number: &str) -> (CardDetails, Option<&'static BrandRule>) {
    let rule = detect_rule(number);
    let luhn_valid = is_valid_luhn(number);

    let details = match rule {
        Some(rule) => {
            let length_valid = rule.is_valid_length(number.chars().count());
            CardDetails {
                brand: Some(rule.brand),
                valid: luhn_valid && length_valid,
                luhn_valid,
                length_valid,
                cvv_length: rule.cvv_length,
                supported_lengths: rule.valid_length,
            }
        }
        None => CardDetails {
            brand: None,
            valid: false,
            luhn_valid,
            length_valid: false,
            cvv_length: &[],
            supported_lengths: &[],
        },
    };

    tracing::trace!(
        card = %mask_string(number),
        card_type = details.card_type(),
        luhn_valid = details.luhn_valid,
        length_valid = details.length_valid,
        "classified card number"
    );

    (details, rule)
}

/// Normalizes and classifies a raw card number.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyInput`] if `input` is empty.
///
/// # Example
///
/// ```
/// use card_validator::card_details;
///
/// let details = card_details("4111 1111-1111 1111").unwrap();
/// assert_eq!(details.card_type(), "visa");
/// assert!(card_details("").is_err());
/// ```
pub fn card_details(input: &str) -> Result<CardDetails, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(classify(&normalize(input)))
}

/// Quickly checks if a raw card number is valid (Luhn and length).
///
/// Empty input is reported as invalid rather than as an error.
///
/// # Example
///
/// ```
/// use card_validator::is_valid;
///
/// assert!(is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("4111-1111-1111-1112"));
/// assert!(!is_valid(""));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    card_details(input).is_ok_and(|d| d.valid)
}

/// Checks only the Luhn checksum of a raw card number.
///
/// # Example
///
/// ```
/// use card_validator::passes_luhn;
///
/// assert!(passes_luhn("4111 1111 1111 1111"));
/// assert!(!passes_luhn("4111111111111112"));
/// ```
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    is_valid_luhn(&normalize(input))
}
