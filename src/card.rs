//! Core card types.
//!
//! This module provides the `CardBrand` enum for identifying card networks,
//! the `BrandRule` descriptor the rule table is built from, and `CardDetails`,
//! the classification record produced for a card number.

use regex::Regex;
use std::fmt;

/// Supported card brands/networks.
///
/// Each variant corresponds to exactly one entry of the brand rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBrand {
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Diners Club Carte Blanche - Prefix 300-305, length 14
    DinersClubCarteBlanche,
    /// Diners Club International - Prefix 36, 38, 39, 309, length 14
    DinersClubInternational,
    /// JCB - Prefix 3528-3589, length 16
    Jcb,
    /// Laser - Prefix 6304, 6706, 6709, 6771, length 16-19
    Laser,
    /// Visa Electron - Prefix 4026, 417500, 4508, 4844, 4913, 4917, length 16
    VisaElectron,
    /// Visa - Prefix 4, length 16
    Visa,
    /// Mastercard - BIN 222100-272099, 510000-559999, length 16
    Mastercard,
    /// Maestro - various 50xx/6xxx prefixes, length 12-19, CVV optional
    Maestro,
    /// RuPay - Indian payment system, BIN ranges in 50x, 60x, 65x, 81x, 82x
    RuPay,
    /// Discover - Prefix 6011, 622126-622925, 644-649, 65, length 16
    Discover,
    /// Sodexo - Prefix 637513, length 16
    Sodexo,
    /// UnionPay - Prefix 60, 62, 68, 69 and some 9xxx ranges, length 16-19
    UnionPay,
}

impl CardBrand {
    /// All brands, in rule table order.
    pub const ALL: [CardBrand; 13] = [
        Self::Amex,
        Self::DinersClubCarteBlanche,
        Self::DinersClubInternational,
        Self::Jcb,
        Self::Laser,
        Self::VisaElectron,
        Self::Visa,
        Self::Mastercard,
        Self::Maestro,
        Self::RuPay,
        Self::Discover,
        Self::Sodexo,
        Self::UnionPay,
    ];

    /// Returns the stable identifier used in classification results
    /// (e.g. `"visa_electron"`).
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Amex => "amex",
            Self::DinersClubCarteBlanche => "diners_club_carte_blanche",
            Self::DinersClubInternational => "diners_club_international",
            Self::Jcb => "jcb",
            Self::Laser => "laser",
            Self::VisaElectron => "visa_electron",
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Maestro => "maestro",
            Self::RuPay => "rupay",
            Self::Discover => "discover",
            Self::Sodexo => "sodexo",
            Self::UnionPay => "unionpay",
        }
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Amex => "American Express",
            Self::DinersClubCarteBlanche => "Diners Club Carte Blanche",
            Self::DinersClubInternational => "Diners Club International",
            Self::Jcb => "JCB",
            Self::Laser => "Laser",
            Self::VisaElectron => "Visa Electron",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Maestro => "Maestro",
            Self::RuPay => "RuPay",
            Self::Discover => "Discover",
            Self::Sodexo => "Sodexo",
            Self::UnionPay => "UnionPay",
        }
    }

    /// Looks a brand up by its identifier (`"amex"`, `"visa"`, ...).
    pub fn from_identifier(id: &str) -> Option<CardBrand> {
        Self::ALL.iter().copied().find(|b| b.as_str() == id)
    }

    /// Returns the rule table entry describing this brand.
    #[inline]
    pub fn rule(&self) -> &'static BrandRule {
        crate::rules::rule_for(*self)
    }

    /// Returns the valid total lengths for this brand.
    #[inline]
    pub fn valid_lengths(&self) -> &'static [u8] {
        self.rule().valid_length
    }

    /// Returns the valid CVV lengths for this brand.
    #[inline]
    pub fn cvv_lengths(&self) -> &'static [u8] {
        self.rule().cvv_length
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardBrand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Identifier reported when no rule matches.
pub const UNKNOWN_CARD_TYPE: &str = "unknown";

/// How a brand is recognised from a normalized card number.
///
/// A rule carries exactly one mechanism.
#[derive(Debug)]
pub enum Recognition {
    /// A prefix pattern tested against the whole normalized number.
    Pattern(Regex),
    /// Inclusive `(low, high)` ranges tested against the leading 6 digits.
    Ranges(&'static [(u32, u32)]),
}

/// An entry of the brand rule table.
#[derive(Debug)]
pub struct BrandRule {
    /// The brand this rule identifies.
    pub brand: CardBrand,
    /// The recognition mechanism.
    pub recognition: Recognition,
    /// Acceptable total digit counts.
    pub valid_length: &'static [u8],
    /// Acceptable CVV digit counts. A `0` entry makes the CVV optional.
    pub cvv_length: &'static [u8],
    /// Display grouping positions, cosmetic only.
    pub gaps: Option<&'static [u8]>,
}

impl BrandRule {
    /// Returns the brand identifier.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.brand.as_str()
    }

    /// Returns true if `length` is one of the brand's valid lengths.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.valid_length.iter().any(|&l| l as usize == length)
    }

    /// Returns true if a CVV of `length` digits is accepted.
    #[inline]
    pub fn is_valid_cvv_length(&self, length: usize) -> bool {
        self.cvv_length.iter().any(|&l| l as usize == length)
    }

    /// Returns true if this brand accepts an empty CVV.
    #[inline]
    pub fn cvv_optional(&self) -> bool {
        self.cvv_length.contains(&0)
    }
}

/// The classification record for one card number.
///
/// Built fresh by [`crate::validate::classify`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardDetails {
    /// The matched brand, `None` when no rule matched.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "card_type", serialize_with = "serialize_card_type")
    )]
    pub brand: Option<CardBrand>,
    /// `luhn_valid && length_valid`.
    pub valid: bool,
    /// Result of the Luhn checksum.
    pub luhn_valid: bool,
    /// Whether the length is valid for the matched brand.
    pub length_valid: bool,
    /// CVV lengths accepted by the matched brand.
    pub cvv_length: &'static [u8],
    /// Total lengths accepted by the matched brand.
    pub supported_lengths: &'static [u8],
}

impl CardDetails {
    /// Returns the brand identifier, or `"unknown"`.
    #[inline]
    pub fn card_type(&self) -> &'static str {
        self.brand.map_or(UNKNOWN_CARD_TYPE, |b| b.as_str())
    }

    /// Returns true if no brand rule matched.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.brand.is_none()
    }
}

#[cfg(feature = "serde")]
fn serialize_card_type<S: serde::Serializer>(
    brand: &Option<CardBrand>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(brand.map_or(UNKNOWN_CARD_TYPE, |b| b.as_str()))
}
