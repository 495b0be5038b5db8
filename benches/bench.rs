//! Criterion benchmarks for Corrige.
//!
//! Covers the distance metric family on word pairs and the three selection
//! methods scanning a synthetic glossary.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use corrige::distance::DistanceMetric;
use corrige::engine::{EngineConfig, PropositionEngine};
use corrige::glossary::Glossary;
use corrige::selector::SelectionMethod;

const WORDS: [&str; 16] = [
    "search",
    "engine",
    "document",
    "query",
    "algorithm",
    "glossary",
    "proposition",
    "distance",
    "phonetic",
    "selection",
    "frequency",
    "correction",
    "spelling",
    "alphabet",
    "character",
    "dictionary",
];

/// Generate a glossary of `count` distinct words derived from a small vocabulary.
fn generate_glossary(count: usize) -> Glossary {
    (0..count)
        .map(|i| {
            let base = WORDS[i % WORDS.len()];
            let suffix = (b'a' + (i / WORDS.len() % 26) as u8) as char;
            (format!("{base}{suffix}{}", i / (WORDS.len() * 26)), (count - i) as u64)
        })
        .collect()
}

fn all_metrics() -> Vec<DistanceMetric> {
    vec![
        DistanceMetric::Null,
        DistanceMetric::Hamming,
        DistanceMetric::NGram { n: 2 },
        DistanceMetric::Levenshtein,
        DistanceMetric::soundex(),
        DistanceMetric::soundex_with(DistanceMetric::Levenshtein),
        DistanceMetric::Jaro { winkler: false },
        DistanceMetric::Jaro { winkler: true },
    ]
}

fn bench_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_metrics");
    let pairs = [
        ("kitten", "sitting"),
        ("documnet", "document"),
        ("algortihm", "algorithm"),
        ("Robert", "Rupert"),
    ];

    group.throughput(Throughput::Elements(pairs.len() as u64));
    for metric in all_metrics() {
        let id = match &metric {
            DistanceMetric::Soundex { inner: Some(_) } => "soundex+inner",
            other => other.name(),
        };
        group.bench_function(id, |b| {
            b.iter(|| {
                for (a, w) in &pairs {
                    black_box(metric.distance(black_box(a), black_box(w)));
                }
            })
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    group.sample_size(20);

    let glossary = generate_glossary(5_000);
    let metric = DistanceMetric::Levenshtein;

    group.throughput(Throughput::Elements(glossary.len() as u64));
    for method in SelectionMethod::ALL {
        group.bench_with_input(
            BenchmarkId::new(method.name(), glossary.len()),
            &method,
            |b, method| {
                b.iter(|| black_box(method.select(black_box("serach"), &glossary, &metric, 5)))
            },
        );
    }

    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sample_size(20);

    let glossary = generate_glossary(5_000);
    let misspellings = ["searc", "engin", "documnet", "qurey", "algortihm"];

    let soundex = PropositionEngine::new(glossary.clone(), EngineConfig::new(DistanceMetric::soundex()))
        .expect("valid config");
    let ngram = PropositionEngine::new(glossary, EngineConfig::default()).expect("valid config");

    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("soundex_index_batch", |b| {
        b.iter(|| black_box(soundex.propose_batch(black_box(misspellings))))
    });
    group.bench_function("ngram_exact_batch", |b| {
        b.iter(|| black_box(ngram.propose_batch(black_box(misspellings))))
    });

    group.finish();
}

criterion_group!(benches, bench_distances, bench_selection, bench_engine);
criterion_main!(benches);
