use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jisho_core::{
    Document, Segment, parse_example_page_html, parse_kanji_page_html, parse_phrase_scrape_page_html, reconstruct,
};

fn bench_parse(c: &mut Criterion) {
    let kanji = std::fs::read_to_string("../../tests/fixtures/kanji_car.html").unwrap();
    let examples = std::fs::read_to_string("../../tests/fixtures/examples_car.html").unwrap();
    let word = std::fs::read_to_string("../../tests/fixtures/word_car.html").unwrap();

    let mut group = c.benchmark_group("parse");

    group.bench_with_input(BenchmarkId::new("kanji", "page"), &kanji, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("examples", "page"), &examples, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("word", "page"), &word, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.finish();
}

fn bench_kanji_extraction(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/kanji_car.html").unwrap();

    c.bench_function("kanji_extraction", |b| b.iter(|| parse_kanji_page_html(black_box(&html), "車")));
}

fn bench_example_extraction(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/examples_car.html").unwrap();

    c.bench_function("example_extraction", |b| b.iter(|| parse_example_page_html(black_box(&html), "車")));
}

fn bench_word_extraction(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/word_car.html").unwrap();

    c.bench_function("word_extraction", |b| b.iter(|| parse_phrase_scrape_page_html(black_box(&html), "車")));
}

fn bench_reconstruct(c: &mut Criterion) {
    let segments: Vec<Segment> = (0..50)
        .flat_map(|_| {
            [
                Segment::Ruby { lifted: "じどうしゃ".into(), unlifted: "自動車".into() },
                Segment::Plain("で".into()),
                Segment::Ruby { lifted: "い".into(), unlifted: "行きましょう".into() },
            ]
        })
        .collect();

    c.bench_function("ruby_reconstruct", |b| b.iter(|| reconstruct(black_box(&segments))));
}

criterion_group!(
    benches,
    bench_parse,
    bench_kanji_extraction,
    bench_example_extraction,
    bench_word_extraction,
    bench_reconstruct
);
criterion_main!(benches);
