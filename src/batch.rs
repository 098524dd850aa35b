//! Batch classification of many card numbers.
//!
//! Each card is normalized and classified on its own; the only shared state
//! is the read-only brand rule table, so batches can also be processed in
//! parallel with rayon under the `parallel` feature.

use crate::card::CardDetails;
use crate::error::ValidationError;
use crate::validate::card_details;

/// Classifies a slice of raw card numbers.
///
/// Returns a vector of results in the same order as the input. Empty entries
/// produce [`ValidationError::EmptyInput`].
///
/// # Example
///
/// ```
/// use card_validator::batch::classify_all;
///
/// let cards = ["4111111111111111", "", "1234567890123456"];
/// let results = classify_all(&cards);
/// assert!(results[0].as_ref().unwrap().valid);
/// assert!(results[1].is_err());
/// assert_eq!(results[2].as_ref().unwrap().card_type(), "unknown");
/// ```
#[inline]
pub fn classify_all<S: AsRef<str>>(cards: &[S]) -> Vec<Result<CardDetails, ValidationError>> {
    let results: Vec<_> = cards.iter().map(|c| card_details(c.as_ref())).collect();
    tracing::debug!(cards = results.len(), "batch classified");
    results
}

/// Classifies a slice of raw card numbers in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn classify_all_parallel<S: AsRef<str> + Sync>(
    cards: &[S],
) -> Vec<Result<CardDetails, ValidationError>> {
    use rayon::prelude::*;
    let results: Vec<_> = cards.par_iter().map(|c| card_details(c.as_ref())).collect();
    tracing::debug!(cards = results.len(), "batch classified in parallel");
    results
}

/// Counts valid and invalid cards in a batch.
///
/// Empty entries count as invalid.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
///
/// # Example
///
/// ```
/// use card_validator::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "5500000000000004"];
/// let (valid, invalid) = count_valid(&cards);
/// assert_eq!(valid, 2);
/// assert_eq!(invalid, 1);
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards.iter().filter(|c| is_valid_card(c.as_ref())).count();
    (valid, cards.len() - valid)
}

/// Counts valid and invalid cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid: usize = cards
        .par_iter()
        .filter(|c| is_valid_card(c.as_ref()))
        .count();

    (valid, cards.len() - valid)
}

#[inline]
fn is_valid_card(card: &str) -> bool {
    card_details(card).is_ok_and(|d| d.valid)
}
