//! CVV/CVC/CID validation against a classified card.
//!
//! The accepted CVV lengths come from the matched brand's rule. A brand whose
//! CVV lengths include `0` (Maestro) also accepts an empty CVV. When no brand
//! matched there are no accepted lengths, so every non-empty CVV is rejected.
//!
//! # Example
//!
//! ```
//! use card_validator::cvv::check_cvv;
//! use card_validator::CardBrand;
//!
//! let amex = Some(CardBrand::Amex.rule());
//! assert_eq!(check_cvv(amex, "1234"), Ok(true));
//! assert_eq!(check_cvv(amex, "123"), Ok(false));
//!
//! let maestro = Some(CardBrand::Maestro.rule());
//! assert_eq!(check_cvv(maestro, ""), Ok(true));
//! ```

use crate::card::BrandRule;
use crate::error::ValidationError;

/// Checks a CVV against the rule of the detected brand.
///
/// # Errors
///
/// - [`ValidationError::NonNumericCvv`] if `cvv` is non-empty and not all digits.
/// - [`ValidationError::EmptyCvv`] if `cvv` is empty and the brand does not
///   make the CVV optional (including when no brand matched).
pub fn check_cvv(rule: Option<&BrandRule>, cvv: &str) -> Result<bool, ValidationError> {
    if !cvv.is_empty() && !is_numeric(cvv) {
        return Err(ValidationError::NonNumericCvv);
    }

    if let Some(rule) = rule.filter(|r| r.cvv_optional()) {
        return Ok(cvv.is_empty() || rule.is_valid_cvv_length(cvv.len()));
    }

    if cvv.is_empty() {
        return Err(ValidationError::EmptyCvv);
    }

    Ok(rule.is_some_and(|r| r.is_valid_cvv_length(cvv.len())))
}

/// Returns true if `value` consists only of ASCII digits.
#[inline]
pub(crate) fn is_numeric(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardBrand;

    fn rule(brand: CardBrand) -> Option<&'static BrandRule> {
        Some(brand.rule())
    }

    #[test]
    fn test_three_digit_brands() {
        for brand in [CardBrand::Visa, CardBrand::Mastercard, CardBrand::Discover] {
            assert_eq!(check_cvv(rule(brand), "123"), Ok(true));
            assert_eq!(check_cvv(rule(brand), "12"), Ok(false));
            assert_eq!(check_cvv(rule(brand), "1234"), Ok(false));
        }
    }

    #[test]
    fn test_amex_requires_four_digits() {
        assert_eq!(check_cvv(rule(CardBrand::Amex), "1234"), Ok(true));
        assert_eq!(check_cvv(rule(CardBrand::Amex), "123"), Ok(false));
    }

    #[test]
    fn test_laser_accepts_three_or_four() {
        assert_eq!(check_cvv(rule(CardBrand::Laser), "123"), Ok(true));
        assert_eq!(check_cvv(rule(CardBrand::Laser), "1234"), Ok(true));
        assert_eq!(check_cvv(rule(CardBrand::Laser), "12345"), Ok(false));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(check_cvv(rule(CardBrand::Visa), "007"), Ok(true));
        assert_eq!(check_cvv(rule(CardBrand::Amex), "0001"), Ok(true));
    }

    #[test]
    fn test_empty_cvv_is_an_error() {
        assert_eq!(
            check_cvv(rule(CardBrand::Visa), ""),
            Err(ValidationError::EmptyCvv)
        );
        assert_eq!(check_cvv(None, ""), Err(ValidationError::EmptyCvv));
    }

    #[test]
    fn test_maestro_cvv_optional() {
        assert_eq!(check_cvv(rule(CardBrand::Maestro), ""), Ok(true));
        assert_eq!(check_cvv(rule(CardBrand::Maestro), "123"), Ok(true));
        assert_eq!(check_cvv(rule(CardBrand::Maestro), "12"), Ok(false));
        assert_eq!(check_cvv(rule(CardBrand::Maestro), "1234"), Ok(false));
    }

    #[test]
    fn test_non_numeric_cvv() {
        for cvv in ["12a", "abc", "1 2", "-12", "12.5"] {
            assert_eq!(
                check_cvv(rule(CardBrand::Visa), cvv),
                Err(ValidationError::NonNumericCvv),
                "{}",
                cvv
            );
        }
        assert_eq!(
            check_cvv(rule(CardBrand::Maestro), "abc"),
            Err(ValidationError::NonNumericCvv)
        );
    }

    #[test]
    fn test_unknown_brand_rejects_every_cvv() {
        assert_eq!(check_cvv(None, "123"), Ok(false));
        assert_eq!(check_cvv(None, "1234"), Ok(false));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0123456789"));
        assert!(is_numeric(""));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("١٢٣"));
    }
}
