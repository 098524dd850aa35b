//! Fuzz target for expiry validation.
//!
//! Tests that baseline parsing and expiry checks never panic on arbitrary
//! input.

#![no_main]

use arbitrary::Arbitrary;
use card_validator::{expiry, CardValidator};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    month: Option<u32>,
    year: Option<i32>,
    month_text: &'a str,
    year_text: &'a str,
    value: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    if let Ok(base) = expiry::BaseDate::new(input.month, input.year) {
        assert!((1..=12).contains(&base.month()));
        let _ = expiry::check_expiry(input.value, base);
    }

    if let Ok(base) = expiry::BaseDate::parse(input.month_text, input.year_text) {
        assert!((1..=12).contains(&base.month()));
        let _ = expiry::check_expiry(input.value, base);
    }

    let mut validator = CardValidator::new("4111111111111111");
    let _ = validator.set_baseline_str(input.month_text, input.year_text);
    let result = validator.validate_expiry(input.value);
    if input.value.is_empty() {
        assert!(result.is_err());
    }
});
