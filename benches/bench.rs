//! Criterion benchmarks for lexsieve.
//!
//! Covers the three hot paths of a cleaning run:
//! - Tokenization with the English pipeline
//! - The per-token filter decision
//! - Batch cleaning across thread counts

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lexsieve::analysis::pipeline::{EnglishPipeline, LanguagePipeline};
use lexsieve::cleaner::{FilterConfiguration, TextCleaner, TokenFilterPolicy, WordLists};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "I",
        "love",
        "running",
        "to",
        "the",
        "store",
        "http://example.com",
        "RT",
        "42",
        "twelve",
        "café",
        "!",
        "studies",
        "were",
        "great",
        "movies",
        "she",
        "www.rust-lang.org",
        "and",
        "walked",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 20 + (i % 40); // Variable length documents
        let doc_words: Vec<&str> = (0..doc_length)
            .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
            .collect();
        documents.push(doc_words.join(" "));
    }

    documents
}

/// Benchmark tokenization.
fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let pipeline = EnglishPipeline::new();
    let texts = generate_test_documents(100);

    group.bench_function("tokenize_single_document", |b| {
        b.iter(|| black_box(pipeline.tokenize(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("tokenize_batch", |b| {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        b.iter(|| black_box(pipeline.tokenize_all(black_box(&refs))))
    });

    group.finish();
}

/// Benchmark the filter decision on pre-tokenized text.
fn bench_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy");

    let config = FilterConfiguration::default();
    let policy = TokenFilterPolicy::new(config.clone(), WordLists::load(&config));
    let tokens = EnglishPipeline::new()
        .tokenize(&generate_test_documents(1)[0])
        .unwrap();

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("check_tokens", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(policy.check(black_box(token)));
            }
        })
    });
    group.bench_function("apply", |b| b.iter(|| black_box(policy.apply(&tokens))));

    group.finish();
}

/// Benchmark batch cleaning with different thread counts.
fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");
    group.sample_size(20);

    let texts = generate_test_documents(2000);
    group.throughput(Throughput::Elements(texts.len() as u64));

    for threads in [1, 2, 4] {
        let config = FilterConfiguration::default().with_num_threads(threads);
        let cleaner = TextCleaner::with_pipeline(config, Arc::new(EnglishPipeline::new())).unwrap();

        group.bench_with_input(BenchmarkId::new("threads", threads), &texts, |b, texts| {
            b.iter(|| black_box(cleaner.clean(black_box(texts))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_policy, bench_clean);
criterion_main!(benches);
