//! Fuzz target for card formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use card_validator::{format, mask};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_with_separator(data, "-");
    let _ = format::format_with_separator(data, "");
    let _ = format::split_into_groups(data);
    let _ = format::is_valid_format(data);
    let _ = mask::mask_string(data);
    let _ = mask::last_four(data);

    // Formatting only inserts separators
    let formatted = format::format_card_number(data);
    assert_eq!(
        format::normalize(&formatted),
        format::normalize(data),
        "Format roundtrip should preserve characters"
    );
});
