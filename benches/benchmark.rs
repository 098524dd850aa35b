//! Benchmarks for card_validator performance testing.
//!
//! Run with: cargo bench

use card_validator::{
    batch::{classify_all, count_valid},
    card_details, classify,
    detect::detect_rule,
    luhn, CardValidator,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111-1111-1111-1111";
const MASTERCARD: &str = "5500000000000004";
const AMEX: &str = "378282246310005";
const UNIONPAY: &str = "6213000000000000";
const UNKNOWN: &str = "1234567890123456";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

/// Benchmark single card classification
fn bench_single_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_classification");

    group.bench_function("visa_16_raw", |b| b.iter(|| classify(black_box(VISA_16))));

    group.bench_function("visa_16_formatted", |b| {
        b.iter(|| card_details(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("mastercard_range", |b| {
        b.iter(|| classify(black_box(MASTERCARD)))
    });

    group.bench_function("amex_15", |b| b.iter(|| classify(black_box(AMEX))));

    group.finish();
}

/// Benchmark brand detection at both ends of the rule table
fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    group.bench_function("first_rule", |b| b.iter(|| detect_rule(black_box(AMEX))));

    group.bench_function("last_rule", |b| {
        b.iter(|| detect_rule(black_box(UNIONPAY)))
    });

    group.bench_function("no_match", |b| b.iter(|| detect_rule(black_box(UNKNOWN))));

    group.finish();
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("luhn_16_str", |b| {
        b.iter(|| luhn::is_valid_luhn(black_box(VISA_16)))
    });

    group.bench_function("luhn_16_digits", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.finish();
}

/// Benchmark a full session: card, CVV and expiry
fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    group.bench_function("card_cvv_expiry", |b| {
        b.iter(|| {
            let mut validator = CardValidator::new(black_box(VISA_16_FORMATTED));
            let _ = validator.set_baseline(Some(6), Some(2025));
            let card = validator.validate_card();
            let cvv = validator.validate_cvv(black_box("123"));
            let expiry = validator.validate_expiry(black_box("06/2027"));
            (card, cvv, expiry)
        })
    });

    group.finish();
}

/// Benchmark batch classification with various sizes
fn bench_batch_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_classification");

    for size in [10, 100, 1000, 10000].iter() {
        let cards: Vec<&str> = (0..*size)
            .map(|i| match i % 4 {
                0 => VISA_16,
                1 => MASTERCARD,
                2 => AMEX,
                _ => UNKNOWN,
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("classify_all", size), &cards, |b, cards| {
            b.iter(|| classify_all(black_box(cards)))
        });

        group.bench_with_input(BenchmarkId::new("count_valid", size), &cards, |b, cards| {
            b.iter(|| count_valid(black_box(cards)))
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    use card_validator::batch::{classify_all_parallel, count_valid_parallel};

    let mut group = c.benchmark_group("parallel");

    for size in [1000, 10000, 100000].iter() {
        let cards: Vec<String> = (0..*size).map(|_| VISA_16.to_string()).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("classify_parallel", size),
            &cards,
            |b, cards| b.iter(|| classify_all_parallel(black_box(cards))),
        );

        group.bench_with_input(
            BenchmarkId::new("count_parallel", size),
            &cards,
            |b, cards| b.iter(|| count_valid_parallel(black_box(cards))),
        );
    }

    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_parallel(_c: &mut Criterion) {
    // Parallel benchmarks disabled - enable 'parallel' feature
}

criterion_group!(
    benches,
    bench_single_classification,
    bench_detection,
    bench_luhn,
    bench_session,
    bench_batch_classification,
    bench_parallel,
);

criterion_main!(benches);
