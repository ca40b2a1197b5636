use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scamscan::{ScamscanConfig, Scanner};
use std::hint::black_box;

const PHISHING: &str = "URGENT: We detected unusual activity on your account. Verify your \
    account within 24 hours at https://paypa1-secure-login.com/verify or call (555) 123-4567. \
    Reply to support@mailinator.com to claim your refund!!!";

const BENIGN: &str = "Hi team, the meeting moved to Thursday. Notes are on the wiki at \
    https://docs.rs/regex and lunch is on me. Thanks!";

fn message_of_len(chars: usize) -> String {
    PHISHING
        .chars()
        .chain(" ".chars())
        .chain(BENIGN.chars())
        .chain(" ".chars())
        .cycle()
        .take(chars)
        .collect()
}

fn bench_scan_messages(c: &mut Criterion) {
    let scanner = Scanner::new(&ScamscanConfig::default()).unwrap();

    c.bench_function("scan_phishing_message", |b| {
        b.iter(|| scanner.scan(black_box(PHISHING)).unwrap())
    });
    c.bench_function("scan_benign_message", |b| {
        b.iter(|| scanner.scan(black_box(BENIGN)).unwrap())
    });
}

fn bench_scan_by_length(c: &mut Criterion) {
    let scanner = Scanner::new(&ScamscanConfig::default()).unwrap();
    let mut group = c.benchmark_group("scan_by_length");

    for len in [256, 2_048, 10_000] {
        let text = message_of_len(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| scanner.scan(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_scanner_construction(c: &mut Criterion) {
    let config = ScamscanConfig::default();
    c.bench_function("scanner_new", |b| {
        b.iter(|| Scanner::new(black_box(&config)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_scan_messages,
    bench_scan_by_length,
    bench_scanner_construction
);
criterion_main!(benches);
