//! Error types for card validation.
//!
//! Every failure is local and synchronous. An unknown brand or a `false`
//! validity flag is a normal result, not an error.

use std::fmt;

/// Errors that can occur while validating a card number, CVV or expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The session was created with an empty card number.
    EmptyInput,

    /// The baseline month or year is not numeric, or the month is outside 1-12.
    InvalidBaselineFormat,

    /// The CVV is non-empty but contains something other than digits.
    NonNumericCvv,

    /// The CVV is empty and the detected brand requires one.
    EmptyCvv,

    /// The expiry value is empty.
    EmptyExpiry,

    /// The expiry value could not be split into numeric month and year parts.
    MalformedExpiry,
}

impl ValidationError {
    /// Returns true if the error concerns the CVV field.
    #[inline]
    pub const fn is_cvv_error(&self) -> bool {
        matches!(self, Self::NonNumericCvv | Self::EmptyCvv)
    }

    /// Returns true if the error concerns the expiry field.
    #[inline]
    pub const fn is_expiry_error(&self) -> bool {
        matches!(self, Self::EmptyExpiry | Self::MalformedExpiry)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Invalid cardNumber property set"),
            Self::InvalidBaselineFormat => {
                write!(f, "Invalid date format. Use MM, YYYY format")
            }
            // Both CVV failures surface the same message to form users
            Self::NonNumericCvv | Self::EmptyCvv => write!(f, "CVV should be a number"),
            Self::EmptyExpiry => write!(f, "Expiry should not be empty"),
            Self::MalformedExpiry => write!(f, "Expiry should be in MM/YYYY format"),
        }
    }
}

impl std::error::Error for ValidationError {}
