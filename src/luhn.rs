//! Luhn algorithm implementation for card number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! The check is independent of the card brand. Non-digit characters make the
//! checksum fail; an empty input sums to zero and therefore passes, so callers
//! reject empty card numbers before reaching this point.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a normalized card number string with the Luhn algorithm.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use card_validator::luhn::is_valid_luhn;
///
/// assert!(is_valid_luhn("4111111111111111"));
/// assert!(!is_valid_luhn("4111111111111112"));
/// assert!(!is_valid_luhn("411111111111111x"));
/// ```
pub fn is_valid_luhn(number: &str) -> bool {
    let mut sum: u32 = 0;

    for (i, c) in number.chars().rev().enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 1 {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit
        };
    }

    sum % 10 == 0
}

/// Validates a slice of digits (0-9 values, not ASCII) with the Luhn algorithm.
///
/// # Example
///
/// ```
/// use card_validator::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.iter().any(|&d| d > 9) {
        return false;
    }
    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
///
/// Digits must be in `0..=9`.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            // The rightmost digit is position 0 and is not doubled
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Example
///
/// ```
/// use card_validator::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Appending a zero shifts every digit one position left, which is where
    // they will sit once the check digit is in place
    let mut padded = Vec::with_capacity(digits.len() + 1);
    padded.extend_from_slice(digits);
    padded.push(0);

    let sum = compute_checksum(&padded);
    ((10 - (sum % 10)) % 10) as u8
}
