//! Fuzz target for Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use card_validator::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    if digits.is_empty() {
        return;
    }

    // The slice and string forms must agree
    let text: String = digits.iter().map(|d| (b'0' + d) as char).collect();
    assert_eq!(
        luhn::validate(&digits),
        luhn::is_valid_luhn(&text),
        "slice/string validation mismatch"
    );

    // Test check digit generation
    if digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        // Adding check digit should make it valid
        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }
});
