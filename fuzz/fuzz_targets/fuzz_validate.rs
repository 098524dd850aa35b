//! Fuzz target for card classification.
//!
//! Tests that classification never panics on arbitrary input.

#![no_main]

use card_validator::{card_details, classify, format, is_valid, passes_luhn, CardValidator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let _ = is_valid(data);
    let _ = passes_luhn(data);

    match card_details(data) {
        Ok(details) => {
            assert!(!data.is_empty());
            assert_eq!(details.valid, details.luhn_valid && details.length_valid);
            assert_eq!(details, classify(&format::normalize(data)));
            if details.is_unknown() {
                assert!(!details.valid);
            }
        }
        Err(_) => assert!(data.is_empty()),
    }

    let mut validator = CardValidator::new(data);
    let _ = validator.validate_card();
    let debug = format!("{:?}", validator);
    if data.len() > 8 && data.bytes().all(|b| b.is_ascii_digit()) {
        assert!(!debug.contains(data), "Debug output must be masked");
    }
});
