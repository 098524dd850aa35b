//! Per-card validation session.
//!
//! A [`CardValidator`] owns one card number and answers every question about
//! it: the classification, the CVV and the expiry date. The first check that
//! needs a classification computes it and caches it on the session; later
//! CVV and expiry checks reuse the cached result. The card number cannot be
//! changed after construction, so the cache never goes stale.
//!
//! # Example
//!
//! ```
//! use card_validator::CardValidator;
//!
//! let mut validator = CardValidator::new("4111 1111 1111 1111");
//! assert!(validator.validate_card().unwrap());
//! assert!(validator.validate_cvv("123").unwrap());
//!
//! validator.set_baseline(Some(6), Some(2025)).unwrap();
//! assert!(validator.validate_expiry("06/2025").unwrap());
//! assert!(!validator.validate_expiry("05/2025").unwrap());
//! ```

use crate::card::{BrandRule, CardBrand, CardDetails};
use crate::cvv::check_cvv;
use crate::error::ValidationError;
use crate::expiry::{check_expiry, BaseDate};
use crate::format::normalize;
use crate::mask::mask_string;
use crate::validate::classify_with_rule;
use std::fmt;
use zeroize::Zeroize;

/// A validation session for a single card number.
///
/// # Security
///
/// - The raw and normalized card numbers are zeroed on drop
/// - `Debug` output shows the masked number only
/// - Log events carry the masked number, never the full number, CVV or expiry
pub struct CardValidator {
    card_number: String,
    normalized: String,
    details: Option<CardDetails>,
    rule: Option<&'static BrandRule>,
    baseline: Option<BaseDate>,
}

impl CardValidator {
    /// Creates a session for `card_number`.
    ///
    /// Never fails; an empty card number is reported by the first check that
    /// needs it.
    pub fn new(card_number: impl Into<String>) -> Self {
        let card_number = card_number.into();
        let normalized = normalize(&card_number);
        Self {
            card_number,
            normalized,
            details: None,
            rule: None,
            baseline: None,
        }
    }

    /// Classifies the card number and caches the result.
    ///
    /// Every call recomputes the classification from the stored number, so
    /// repeated calls return identical results.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyInput`] if the card number is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use card_validator::CardValidator;
    ///
    /// let mut validator = CardValidator::new("378282246310005");
    /// let details = validator.get_card_details().unwrap();
    /// assert_eq!(details.card_type(), "amex");
    /// assert_eq!(details.cvv_length, &[4]);
    ///
    /// assert!(CardValidator::new("").get_card_details().is_err());
    /// ```
    pub fn get_card_details(&mut self) -> Result<CardDetails, ValidationError> {
        self.ensure_card_number()?;

        let (details, rule) = classify_with_rule(&self.normalized);
        tracing::debug!(
            card = %mask_string(&self.normalized),
            card_type = details.card_type(),
            valid = details.valid,
            "card classified"
        );

        self.details = Some(details.clone());
        self.rule = rule;
        Ok(details)
    }

    /// Returns true if the card number passes the Luhn check and has a valid
    /// length for its brand.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyInput`] if the card number is empty.
    pub fn validate_card(&mut self) -> Result<bool, ValidationError> {
        self.get_card_details().map(|details| details.valid)
    }

    /// Checks a CVV against the card's brand.
    ///
    /// Classifies the card first if that has not happened yet.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyInput`] if the card number is empty.
    /// - [`ValidationError::NonNumericCvv`] if `cvv` contains non-digits.
    /// - [`ValidationError::EmptyCvv`] if `cvv` is empty and the brand
    ///   requires one.
    pub fn validate_cvv(&mut self, cvv: &str) -> Result<bool, ValidationError> {
        self.ensure_card_number()?;
        self.ensure_classified()?;

        let result = check_cvv(self.rule, cvv);
        tracing::debug!(
            card = %mask_string(&self.normalized),
            ok = matches!(result, Ok(true)),
            "cvv checked"
        );
        result
    }

    /// Checks an `MM/YYYY` expiry date against the baseline.
    ///
    /// Classifies the card first if that has not happened yet, and pins the
    /// baseline to the current month if none was set.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyInput`] if the card number is empty.
    /// - [`ValidationError::EmptyExpiry`] if `value` is empty.
    /// - [`ValidationError::MalformedExpiry`] if the month or year part is
    ///   missing or not numeric.
    ///
    /// # Example
    ///
    /// ```
    /// use card_validator::{CardValidator, ValidationError};
    ///
    /// let mut validator = CardValidator::new("4111111111111111");
    /// validator.set_baseline(Some(6), Some(2025)).unwrap();
    ///
    /// assert_eq!(validator.validate_expiry("12/2026"), Ok(true));
    /// assert_eq!(validator.validate_expiry("1/2030"), Ok(false));
    /// assert_eq!(
    ///     validator.validate_expiry("ab/2030"),
    ///     Err(ValidationError::MalformedExpiry)
    /// );
    /// ```
    pub fn validate_expiry(&mut self, value: &str) -> Result<bool, ValidationError> {
        self.ensure_card_number()?;
        if value.is_empty() {
            return Err(ValidationError::EmptyExpiry);
        }
        self.ensure_classified()?;

        let base = *self.baseline.get_or_insert_with(BaseDate::now);
        let result = check_expiry(value, base);
        tracing::debug!(
            card = %mask_string(&self.normalized),
            baseline = %base,
            ok = matches!(result, Ok(true)),
            "expiry checked"
        );
        result
    }

    /// Sets the baseline month and year for expiry checks.
    ///
    /// An omitted month or year (`None`, or a year of `0`) takes the current
    /// wall-clock value. On error the previous baseline is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBaselineFormat`] if the month is
    /// outside 1-12.
    pub fn set_baseline(
        &mut self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<(), ValidationError> {
        self.store_baseline(BaseDate::new(month, year)?);
        Ok(())
    }

    /// Sets the baseline from text fields, where an empty field is omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBaselineFormat`] if a field is not
    /// numeric or the month is outside 1-12.
    ///
    /// # Example
    ///
    /// ```
    /// use card_validator::CardValidator;
    ///
    /// let mut validator = CardValidator::new("4111111111111111");
    /// validator.set_baseline_str("06", "2025").unwrap();
    /// assert_eq!(validator.baseline().map(|b| b.month()), Some(6));
    ///
    /// assert!(validator.set_baseline_str("June", "2025").is_err());
    /// ```
    pub fn set_baseline_str(&mut self, month: &str, year: &str) -> Result<(), ValidationError> {
        self.store_baseline(BaseDate::parse(month, year)?);
        Ok(())
    }

    /// Returns the baseline, if one has been set or established.
    #[inline]
    pub fn baseline(&self) -> Option<BaseDate> {
        self.baseline
    }

    /// Returns the brand from the cached classification.
    ///
    /// `None` until the card has been classified, or when no brand matched.
    #[inline]
    pub fn brand(&self) -> Option<CardBrand> {
        self.details.as_ref().and_then(|d| d.brand)
    }

    /// Returns the masked card number, safe for display.
    #[inline]
    pub fn masked(&self) -> String {
        mask_string(&self.normalized)
    }

    fn store_baseline(&mut self, base: BaseDate) {
        tracing::debug!(baseline = %base, "baseline set");
        self.baseline = Some(base);
    }

    fn ensure_card_number(&self) -> Result<(), ValidationError> {
        if self.card_number.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(())
    }

    fn ensure_classified(&mut self) -> Result<(), ValidationError> {
        if self.details.is_none() {
            self.validate_card()?;
        }
        Ok(())
    }
}

impl fmt::Debug for CardValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardValidator")
            .field("number", &self.masked())
            .field("details", &self.details)
            .field("baseline", &self.baseline)
            .finish()
    }
}

impl Drop for CardValidator {
    fn drop(&mut self) {
        self.card_number.zeroize();
        self.normalized.zeroize();
    }
}
