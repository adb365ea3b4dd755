use criterion::{criterion_group, criterion_main, Criterion};
use tfrank_core::tokenizer::parse_query;
use tfrank_core::{search, Corpus, SearchOptions};

fn synthetic_corpus() -> Corpus {
    let words = ["market", "plays", "childhood", "science", "travel", "health", "history", "river"];
    Corpus::from_texts((0..50).map(|i| {
        let text: Vec<&str> = (0..400).map(|j| words[(i * 7 + j * 3) % words.len()]).collect();
        (format!("doc{i}.txt"), text.join(" "))
    }))
}

fn bench_search(c: &mut Criterion) {
    let corpus = synthetic_corpus();
    let query = parse_query("plays childhood market").expect("non-empty query");
    let options = SearchOptions::default();
    c.bench_function("search_50_docs", |b| b.iter(|| search(&corpus, &query, &options)));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
