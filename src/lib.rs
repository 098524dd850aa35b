//! # card_validator
//!
//! Payment card classification and validation for Rust.
//!
//! ## Features
//!
//! - Brand detection from an ordered rule table (13 brands)
//! - Luhn checksum and per-brand length validation
//! - CVV validation against the detected brand
//! - `MM/YYYY` expiry validation against a pinnable baseline date
//! - Card number masking for logs and display
//! - Library and CLI interfaces
//!
//! ## Quick Start
//!
//! ```rust
//! use card_validator::{card_details, is_valid, CardBrand};
//!
//! let details = card_details("4111-1111-1111-1111").unwrap();
//! assert_eq!(details.brand, Some(CardBrand::Visa));
//! assert_eq!(details.card_type(), "visa");
//! assert!(details.valid);
//!
//! // Quick boolean check
//! assert!(is_valid("4111111111111111"));
//! assert!(!is_valid("4111111111111112"));
//! ```
//!
//! ## Validation Sessions
//!
//! A [`CardValidator`] holds one card number and checks it together with
//! its CVV and expiry date.
//!
//! ```rust
//! use card_validator::{CardValidator, ValidationError};
//!
//! let mut validator = CardValidator::new("378282246310005");
//! assert_eq!(validator.validate_card(), Ok(true));
//!
//! // Amex requires 4 digits
//! assert_eq!(validator.validate_cvv("1234"), Ok(true));
//! assert_eq!(validator.validate_cvv("123"), Ok(false));
//! assert_eq!(validator.validate_cvv("12a"), Err(ValidationError::NonNumericCvv));
//!
//! // Pin the baseline for reproducible expiry checks
//! validator.set_baseline(Some(6), Some(2025)).unwrap();
//! assert_eq!(validator.validate_expiry("06/2025"), Ok(true));
//! assert_eq!(validator.validate_expiry("06/2024"), Ok(false));
//! ```
//!
//! ## Card Formatting
//!
//! ```rust
//! use card_validator::format;
//!
//! let formatted = format::format_card_number("4111111111111111");
//! assert_eq!(formatted, "4111 1111 1111 1111");
//!
//! let digits = format::normalize("4111-1111-1111-1111");
//! assert_eq!(digits, "4111111111111111");
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use card_validator::batch;
//!
//! let cards = vec!["4111111111111111", "5500000000000004", "invalid"];
//! let results = batch::classify_all(&cards);
//! assert_eq!(results.len(), 3);
//!
//! let (valid_count, _) = batch::count_valid(&cards);
//! assert_eq!(valid_count, 2);
//! ```
//!
//! ## Supported Card Brands
//!
//! Rules are tried in this order; the first match wins.
//!
//! | Brand | Prefix | Length | CVV |
//! |-------|--------|--------|-----|
//! | American Express | 34, 37 | 15 | 4 |
//! | Diners Club Carte Blanche | 300-305 | 14 | 3 |
//! | Diners Club International | 36, 38, 39, 309 | 14 | 3 |
//! | JCB | 3528-3589 | 16 | 3 |
//! | Laser | 6304, 6706, 6709, 6771 | 16-19 | 3, 4 |
//! | Visa Electron | 4026, 417500, 4508, 4844, 4913, 4917 | 16 | 3 |
//! | Visa | 4 | 16 | 3 |
//! | Mastercard | 222100-272099, 510000-559999 | 16 | 3 |
//! | Maestro | 5018, 5020, 5038, 6304, 6759, ... | 12-19 | optional, 3 |
//! | RuPay | BIN ranges | 16 | 3 |
//! | Discover | 6011, 622126-622925, 644-649, 65 | 16 | 3 |
//! | Sodexo | 637513 | 16 | 3 |
//! | UnionPay | 60, 62, 68, 69, some 9xxx | 16-19 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for results and brands |
//! | `parallel` | Rayon-based batch processing |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - Card numbers held by [`CardValidator`] are zeroed on drop
//! - `Debug` output and log events show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod cvv;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod rules;
pub mod validate;
pub mod validator;

// Re-export main types at crate root
pub use card::{BrandRule, CardBrand, CardDetails, Recognition, UNKNOWN_CARD_TYPE};
pub use error::ValidationError;
pub use expiry::BaseDate;
pub use rules::brand_rules;
pub use validate::{card_details, classify, is_valid, passes_luhn};
pub use validator::CardValidator;

pub use mask::mask_string;
