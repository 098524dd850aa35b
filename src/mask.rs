//! Masking utilities for card numbers.
//!
//! Card data never reaches logs or `Debug` output in clear text; everything
//! the crate logs goes through [`mask_string`], which keeps only the last
//! four characters.
//!
//! # Example
//!
//! ```
//! use card_validator::mask::mask_string;
//!
//! assert_eq!(mask_string("4111 1111 1111 1111"), "****-****-****-1111");
//! ```

/// Masks a card number showing only the last 4 digits.
///
/// Spaces and hyphens are ignored; inputs of four characters or fewer are
/// masked completely.
pub fn mask_string(input: &str) -> String {
    let chars: Vec<char> = input.chars().filter(|&c| c != ' ' && c != '-').collect();
    let len = chars.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    // Add masked portion with grouping
    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Add separator before last 4 if needed
    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.extend(&chars[len - 4..]);
    result
}

/// Extracts the last 4 characters of a card number, ignoring separators.
///
/// Returns an empty string if there are fewer than 4.
pub fn last_four(input: &str) -> String {
    let chars: Vec<char> = input.chars().filter(|&c| c != ' ' && c != '-').collect();
    if chars.len() >= 4 {
        chars[chars.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
