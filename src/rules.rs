//! The brand rule table.
//!
//! Rules are checked in declaration order and the first match wins, so more
//! specific prefixes must come before general ones (Visa Electron before
//! Visa, for instance). The table is built once on first use and never
//! mutated afterwards, which makes it safe to share between threads.

use crate::card::{BrandRule, CardBrand, Recognition};
use once_cell::sync::Lazy;
use regex::Regex;

const MASTERCARD_RANGES: &[(u32, u32)] = &[(222100, 272099), (510000, 559999)];

const RUPAY_RANGES: &[(u32, u32)] = &[
    (508500, 508999),
    (606985, 607384),
    (607385, 607484),
    (607485, 607984),
    (608001, 608100),
    (608101, 608200),
    (608201, 608300),
    (608301, 608350),
    (608351, 608500),
    (652150, 652849),
    (652850, 653049),
    (653050, 653149),
    (817200, 819899),
    (819900, 820199),
];

fn pattern(re: &str) -> Recognition {
    // Patterns are compile-time constants covered by tests
    Recognition::Pattern(Regex::new(re).expect("brand pattern must compile"))
}

static BRAND_RULES: Lazy<[BrandRule; 13]> = Lazy::new(|| {
    [
        BrandRule {
            brand: CardBrand::Amex,
            recognition: pattern(r"^3[47]"),
            valid_length: &[15],
            cvv_length: &[4],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::DinersClubCarteBlanche,
            recognition: pattern(r"^30[0-5]"),
            valid_length: &[14],
            cvv_length: &[3],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::DinersClubInternational,
            recognition: pattern(r"^3([689]|09)"),
            valid_length: &[14],
            cvv_length: &[3],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::Jcb,
            recognition: pattern(r"^35(2[89]|[3-8][0-9])"),
            valid_length: &[16],
            cvv_length: &[3],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::Laser,
            recognition: pattern(r"^(6304|670[69]|6771)"),
            valid_length: &[16, 17, 18, 19],
            // TODO: 4-digit Laser CVVs are unconfirmed, drop once issuer docs say otherwise
            cvv_length: &[3, 4],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::VisaElectron,
            recognition: pattern(r"^(4026|417500|4508|4844|491(3|7))"),
            valid_length: &[16],
            cvv_length: &[3],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::Visa,
            recognition: pattern(r"^4"),
            valid_length: &[16],
            cvv_length: &[3],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::Mastercard,
            recognition: Recognition::Ranges(MASTERCARD_RANGES),
            valid_length: &[16],
            cvv_length: &[3],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::Maestro,
            recognition: pattern(
                r"^(5018|5081|5044|5020|5038|603845|6304|6759|676[1-3]|6220|504834|504817|504645)\d*",
            ),
            valid_length: &[12, 13, 14, 15, 16, 17, 18, 19],
            cvv_length: &[0, 3],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::RuPay,
            recognition: Recognition::Ranges(RUPAY_RANGES),
            valid_length: &[16],
            cvv_length: &[3],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::Discover,
            recognition: pattern(
                r"^(6011|622(12[6-9]|1[3-9][0-9]|[2-8][0-9]{2}|9[0-1][0-9]|92[0-5]|64[4-9])|65)",
            ),
            valid_length: &[16],
            cvv_length: &[3],
            gaps: None,
        },
        BrandRule {
            brand: CardBrand::Sodexo,
            recognition: pattern(r"^(637513)"),
            valid_length: &[16],
            cvv_length: &[3],
            gaps: Some(&[4, 8, 12]),
        },
        BrandRule {
            brand: CardBrand::UnionPay,
            recognition: pattern(r"^(6[0289]|9[0245689][014568][0123568])\d*"),
            valid_length: &[16, 17, 18, 19],
            cvv_length: &[3],
            gaps: None,
        },
    ]
});

/// Returns the brand rule table in matching order.
///
/// # Example
///
/// ```
/// use card_validator::rules::brand_rules;
///
/// let names: Vec<_> = brand_rules().iter().map(|r| r.name()).collect();
/// assert_eq!(names.first(), Some(&"amex"));
/// assert!(names.contains(&"visa_electron"));
/// ```
#[inline]
pub fn brand_rules() -> &'static [BrandRule] {
    &BRAND_RULES[..]
}

/// Returns the rule for a brand.
#[inline]
pub fn rule_for(brand: CardBrand) -> &'static BrandRule {
    // Table order mirrors the enum declaration order
    &BRAND_RULES[brand as usize]
}
