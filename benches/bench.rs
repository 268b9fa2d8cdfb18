//! Criterion benchmarks for recognition and checking throughput.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use tsheg::{Checker, Recognizer};

const SENTENCE: &str = "ཞི་ཅིན་ཕིང་གིས་ཏི་ས་ནཱ་ཡ་ཁེས་སི་རི་ལན་ཁའི་ཙུང་ཐུང་གི་འགན་བཞེས་པར་རྟེན་འབྲེལ་གློག་འཕྲིན་བཏང་གནང་བ།";

fn bench_recognize_syllable(c: &mut Criterion) {
    let recognizer = Recognizer::new();
    let mut group = c.benchmark_group("recognize_syllable");
    for syllable in ["ཀ", "མི", "འགན", "འཕྲིན", "བསྒྲུབས"] {
        group.bench_function(syllable, |b| {
            b.iter(|| recognizer.recognize_syllable(black_box(syllable)))
        });
    }
    group.finish();
}

fn bench_check_text(c: &mut Criterion) {
    let checker = Checker::new();
    let mut group = c.benchmark_group("check_text");
    group.throughput(Throughput::Bytes(SENTENCE.len() as u64));
    group.bench_function("sentence", |b| {
        b.iter(|| checker.check_text(black_box(SENTENCE)).unwrap())
    });
    group.finish();
}

fn bench_check_corpus(c: &mut Criterion) {
    let checker = Checker::new();
    let documents: Vec<&str> = std::iter::repeat_n(SENTENCE, 64).collect();
    let mut group = c.benchmark_group("check_corpus");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("64_documents", |b| {
        b.iter(|| checker.check_corpus(black_box(&documents)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_recognize_syllable,
    bench_check_text,
    bench_check_corpus
);
criterion_main!(benches);
