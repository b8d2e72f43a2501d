use criterion::{criterion_group, criterion_main, Criterion};
use findex::{rank, InvertedIndex};

fn bench_search(c: &mut Criterion) {
    let text = include_str!("../README.md");
    let docs: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    c.bench_function("build_index_readme", |b| {
        b.iter(|| InvertedIndex::build(&docs))
    });
    c.bench_function("rank_readme", |b| {
        b.iter(|| rank("inverted index retrieval", &docs, 10))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
