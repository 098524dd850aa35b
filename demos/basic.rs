//! Basic card validation example.
//!
//! Run with: `cargo run --example basic`

use card_validator::{brand_rules, card_details, is_valid, CardValidator, ValidationError};

fn main() {
    println!("=== Basic Card Validation ===\n");

    // Example 1: Classify a Visa card
    let visa_number = "4111-1111-1111-1111";
    println!("Classifying: {}", visa_number);

    match card_details(visa_number) {
        Ok(details) => {
            println!("  Card Type: {}", details.card_type());
            println!("  Luhn Valid: {}", details.luhn_valid);
            println!("  Length Valid: {}", details.length_valid);
            println!("  Supported Lengths: {:?}", details.supported_lengths);
            println!("  CVV Lengths: {:?}", details.cvv_length);
            println!("  Valid: {}", if details.valid { "yes" } else { "no" });
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Example 2: Quick boolean check
    let test_cards = [
        ("4111111111111111", "Visa"),
        ("5500000000000004", "Mastercard"),
        ("378282246310005", "Amex"),
        ("6011111111111117", "Discover"),
        ("4111111111111112", "Invalid (bad checksum)"),
        ("1234567890123456", "Unknown brand"),
    ];

    println!("Quick validation checks:");
    for (number, description) in test_cards {
        let valid = is_valid(number);
        println!(
            "  {} - {}: {}",
            number,
            description,
            if valid { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 3: A full session with CVV and expiry
    println!("Session checks (baseline 06/2025):");
    let mut validator = CardValidator::new("3782 822463 10005");
    if let Err(e) = validator.set_baseline(Some(6), Some(2025)) {
        println!("  Baseline error: {}", e);
        return;
    }

    println!("  Card: {}", validator.masked());
    println!("  validate_card: {:?}", validator.validate_card());
    for cvv in ["1234", "123", "12a"] {
        println!("  validate_cvv({:?}): {:?}", cvv, validator.validate_cvv(cvv));
    }
    for expiry in ["06/2025", "05/2025", "1/2030", "ab/2030", ""] {
        println!(
            "  validate_expiry({:?}): {:?}",
            expiry,
            validator.validate_expiry(expiry)
        );
    }
    println!();

    // Example 4: Handling errors
    println!("Error handling examples:");
    let mut empty = CardValidator::new("");
    match empty.validate_card() {
        Ok(_) => println!("  Empty card: unexpectedly accepted"),
        Err(e) => {
            let error_type = match e {
                ValidationError::EmptyInput => "EmptyInput",
                ValidationError::InvalidBaselineFormat => "InvalidBaselineFormat",
                ValidationError::NonNumericCvv => "NonNumericCvv",
                ValidationError::EmptyCvv => "EmptyCvv",
                ValidationError::EmptyExpiry => "EmptyExpiry",
                ValidationError::MalformedExpiry => "MalformedExpiry",
            };
            println!("  Empty card: {} - {}", error_type, e);
        }
    }
    if let Err(e) = validator.set_baseline_str("13", "2025") {
        println!("  Month 13: {}", e);
    }
    println!();

    // Example 5: Supported brands in detection order
    println!("Supported brands:");
    for rule in brand_rules() {
        println!("  {:<28} {:?}", rule.brand.name(), rule.valid_length);
    }
}
