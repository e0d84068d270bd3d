use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thaibreak::Tokenizer;

const WORDS: &str = "สวัสดี\nครับ\nมา\nมาน\nนคร\nนครราชสีมา\nราช\nสีมา\nกิน\nข้าว\n";

fn bench_break_text(c: &mut Criterion) {
    let tokenizer = Tokenizer::from_reader(WORDS.as_bytes()).unwrap();
    let text = "สวัสดีครับ ผค 5555 นครราชสีมา กินข้าว xx ".repeat(64);

    c.bench_function("break_text", |b| {
        b.iter(|| tokenizer.break_text(black_box(&text)))
    });
    c.bench_function("tokenize", |b| b.iter(|| tokenizer.tokenize(black_box(&text))));
}

criterion_group!(benches, bench_break_text);
criterion_main!(benches);
