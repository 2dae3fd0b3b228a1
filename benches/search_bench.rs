//! Criterion benchmarks for the Apothecary search pipeline.
//!
//! Covers the three hot paths:
//! - One-time index construction over a synthetic corpus
//! - Exact-term query execution
//! - Prefix-fallback query execution

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use apothecary::corpus::{DocKind, Document};
use apothecary::index::IndexBuilder;
use apothecary::search::QueryEngine;

/// Generate a mixed synthetic corpus.
fn generate_corpus(count: usize) -> Vec<Document> {
    let words = [
        "substance", "profile", "archive", "report", "festival", "dosage", "onset", "duration",
        "tolerance", "interaction", "serotonin", "dopamine", "stimulant", "psychedelic",
        "dissociative", "empathogen", "harm", "reduction", "legal", "status",
    ];

    (0..count)
        .map(|i| {
            let kind = if i % 3 == 0 {
                DocKind::Substance
            } else {
                DocKind::Post
            };
            let content: Vec<&str> = (0..80).map(|j| words[(i + j) % words.len()]).collect();

            let builder = Document::builder(format!("doc-{i}"), kind)
                .title(format!("{} {}", words[i % words.len()], i))
                .category(words[(i + 7) % words.len()])
                .content(content.join(" "));

            if kind == DocKind::Substance {
                builder
                    .alternative_names([
                        format!("alias-{i}"),
                        format!("alias-{}", i + 1),
                        words[(i + 3) % words.len()].to_string(),
                    ])
                    .build()
            } else {
                builder.author(format!("author-{}", i % 17)).build()
            }
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let corpus = generate_corpus(1000);

    let mut group = c.benchmark_group("index_build");
    group.throughput(Throughput::Elements(corpus.len() as u64));
    group.bench_function("build_1000_docs", |b| {
        b.iter(|| IndexBuilder::new().build(black_box(&corpus)).unwrap())
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let engine = QueryEngine::new(generate_corpus(1000)).unwrap();

    let mut group = c.benchmark_group("query");
    group.bench_function("exact_single_term", |b| {
        b.iter(|| engine.execute(black_box("serotonin")).unwrap())
    });
    group.bench_function("exact_two_terms", |b| {
        b.iter(|| engine.execute(black_box("harm reduction")).unwrap())
    });
    group.bench_function("prefix_fallback", |b| {
        b.iter(|| engine.execute(black_box("seroto")).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_query);
criterion_main!(benches);
