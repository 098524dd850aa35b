//! Expiry date validation against a baseline date.
//!
//! The baseline is the "current" month and year an expiry is compared with.
//! It defaults to the wall clock (local time) but can be pinned, which keeps
//! results reproducible.
//!
//! Expiry values must be written `MM/YYYY` with a zero-padded month and a
//! year starting with `2`.
//!
//! # Example
//!
//! ```
//! use card_validator::expiry::{check_expiry, BaseDate};
//!
//! let base = BaseDate::new(Some(6), Some(2025)).unwrap();
//! assert_eq!(check_expiry("06/2025", base), Ok(true));
//! assert_eq!(check_expiry("05/2025", base), Ok(false));
//! assert_eq!(check_expiry("06/2024", base), Ok(false));
//! ```

use crate::cvv::is_numeric;
use crate::error::ValidationError;
use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EXPIRY_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/2[0-9]{3}$").expect("expiry pattern must compile")
});

/// The reference month and year for expiry checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BaseDate {
    month: u32,
    year: i32,
}

impl BaseDate {
    /// Builds a baseline, filling omitted parts from the wall clock.
    ///
    /// A year of `0` counts as omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBaselineFormat`] if a provided month
    /// is outside 1-12.
    pub fn new(month: Option<u32>, year: Option<i32>) -> Result<Self, ValidationError> {
        if let Some(m) = month {
            if !(1..=12).contains(&m) {
                return Err(ValidationError::InvalidBaselineFormat);
            }
        }

        let year = year.filter(|&y| y != 0);
        let (month, year) = match (month, year) {
            (Some(m), Some(y)) => (m, y),
            (m, y) => {
                let now = Self::now();
                (m.unwrap_or(now.month), y.unwrap_or(now.year))
            }
        };

        Ok(Self { month, year })
    }

    /// Builds a baseline from text fields.
    ///
    /// Surrounding whitespace is ignored and an empty field counts as omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBaselineFormat`] if a field is not
    /// numeric or the month is outside 1-12.
    ///
    /// # Example
    ///
    /// ```
    /// use card_validator::expiry::BaseDate;
    ///
    /// let base = BaseDate::parse("06", "2025").unwrap();
    /// assert_eq!((base.month(), base.year()), (6, 2025));
    ///
    /// assert!(BaseDate::parse("13", "2025").is_err());
    /// assert!(BaseDate::parse("ab", "2025").is_err());
    /// ```
    pub fn parse(month: &str, year: &str) -> Result<Self, ValidationError> {
        let month = parse_field::<u32>(month)?;
        let year = parse_field::<i32>(year)?;
        Self::new(month, year)
    }

    /// Returns the current month and year from the local wall clock.
    pub fn now() -> Self {
        let today = Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for BaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

fn parse_field<T: std::str::FromStr>(value: &str) -> Result<Option<T>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if !is_numeric(value) {
        return Err(ValidationError::InvalidBaselineFormat);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::InvalidBaselineFormat)
}

/// Checks an expiry value against a baseline.
///
/// The value is split on `/` into a month and a year part. A month earlier
/// than the baseline month in the baseline year is expired and returns
/// `false` straight away. Otherwise the value is valid only if it matches
/// `MM/YYYY` exactly, the month is 1-12 and the year is not before the
/// baseline year.
///
/// # Errors
///
/// - [`ValidationError::EmptyExpiry`] if `value` is empty.
/// - [`ValidationError::MalformedExpiry`] if the month or year part is
///   missing or not numeric.
pub fn check_expiry(value: &str, base: BaseDate) -> Result<bool, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyExpiry);
    }

    let parts: Vec<&str> = value.split('/').collect();
    let month = parse_part(parts.first().copied())?;
    let year = parse_part(parts.get(1).copied())?;

    let base_month = i64::from(base.month);
    let base_year = i64::from(base.year);

    // Expired earlier in the baseline year; decided before the format check
    if parts.len() == 2 && year == base_year && month < base_month {
        return Ok(false);
    }

    Ok(EXPIRY_FORMAT.is_match(value) && (1..=12).contains(&month) && year >= base_year)
}

/// Parses one side of an expiry value.
fn parse_part(part: Option<&str>) -> Result<i64, ValidationError> {
    let part = part.map(str::trim).unwrap_or_default();
    if part.is_empty() || !is_numeric(part) {
        return Err(ValidationError::MalformedExpiry);
    }
    // Digits only, so the parse can only fail on overflow
    Ok(part.parse().unwrap_or(i64::MAX))
}
