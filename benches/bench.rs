//! Criterion benchmarks for the Teczka classification engine.
//!
//! Covers the two hot paths:
//! - `learn`, which retrains the whole model on every call past the
//!   two-label threshold
//! - `predict`, which vectorizes the input and scores it against every
//!   known label

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use teczka::classify::ClassificationEngine;

/// Generate labeled test documents for benchmarking.
fn generate_labeled_documents(count: usize) -> Vec<(String, String)> {
    let vocabularies: &[(&str, &[&str])] = &[
        (
            "Finanse",
            &[
                "invoice", "payment", "account", "statement", "tax", "budget", "receipt",
                "balance", "expense", "audit",
            ],
        ),
        (
            "Sluzbowe",
            &[
                "meeting", "project", "review", "agenda", "contract", "training", "policy",
                "milestone", "proposal", "schedule",
            ],
        ),
        (
            "Prywatne",
            &[
                "grocery", "vacation", "birthday", "recipe", "family", "dentist", "gym",
                "hobby", "garden", "weekend",
            ],
        ),
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let (label, words) = vocabularies[i % vocabularies.len()];
        let doc_length = 8 + (i % 16); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push((doc_words.join(" "), label.to_string()));
    }

    documents
}

fn bench_learn(c: &mut Criterion) {
    let documents = generate_labeled_documents(100);

    let mut group = c.benchmark_group("learn");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("learn_100_documents", |b| {
        b.iter(|| {
            let mut engine = ClassificationEngine::new().unwrap();
            for (text, label) in &documents {
                engine.learn(black_box(text), black_box(label)).unwrap();
            }
            engine
        })
    });
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let documents = generate_labeled_documents(300);
    let mut engine = ClassificationEngine::new().unwrap();
    for (text, label) in &documents {
        engine.learn(text, label).unwrap();
    }

    let mut group = c.benchmark_group("predict");
    group.throughput(Throughput::Elements(1));
    group.bench_function("predict_trained_300", |b| {
        b.iter(|| {
            engine
                .predict(black_box("invoice payment for project meeting review"))
                .unwrap()
        })
    });
    group.bench_function("predict_novel_vocabulary", |b| {
        b.iter(|| engine.predict(black_box("zupełnie nieznane słowa 🎉")).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_learn, bench_predict);
criterion_main!(benches);
