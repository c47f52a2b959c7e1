//! Benchmarks for anaume formatting performance.
//!
//! Run with: cargo bench

use anaume::{format_batch, format_question, Submission};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Builds a question with `blank_count` blanks in mixed notations.
fn create_test_question(blank_count: usize) -> (String, String) {
    const IDIOMS: [&str; 4] = ["（　）", "___", "【 】", "[ ]"];

    let mut question = String::from("**次の文章**について答えてください。\n\n");
    let mut answer = String::new();

    for i in 0..blank_count {
        question.push_str(&format!(
            "第{}段階では{}が関与しています。T細胞とA型の違いは何ですか。",
            i + 1,
            IDIOMS[i % IDIOMS.len()]
        ));
        answer.push_str(&format!("{}. 解答{}\n", i + 1, i + 1));
    }

    (question, answer)
}

/// Benchmark a single question at various blank counts.
fn bench_format_question(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_question");

    for blank_count in [1, 5, 26].iter() {
        let (question, answer) = create_test_question(*blank_count);

        group.throughput(Throughput::Bytes((question.len() + answer.len()) as u64));
        group.bench_with_input(
            BenchmarkId::new("blanks", blank_count),
            &(question, answer),
            |b, (question, answer)| {
                b.iter(|| format_question(black_box(question), black_box(answer)));
            },
        );
    }

    group.finish();
}

/// Benchmark parallel batch formatting.
fn bench_format_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_batch");

    for batch_size in [10, 100, 1000].iter() {
        let submissions: Vec<Submission> = (0..*batch_size)
            .map(|i| {
                let (question, answer) = create_test_question(i % 6 + 1);
                Submission::new(question, answer)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("submissions", batch_size),
            &submissions,
            |b, submissions| {
                b.iter(|| format_batch(black_box(submissions)));
            },
        );
    }

    group.finish();
}

/// Benchmark answer parsing alone.
fn bench_answer_parsing(c: &mut Criterion) {
    c.bench_function("answer_circled", |b| {
        b.iter(|| anaume::format_answer(black_box("①赤血球 ②白血球 ③血小板 ④血漿"), 4));
    });

    c.bench_function("answer_space_separated", |b| {
        b.iter(|| {
            anaume::format_answer(black_box("A. 赤血球 (RBC) B. 白血球 (WBC) C. 血小板"), 3)
        });
    });
}

criterion_group!(
    benches,
    bench_format_question,
    bench_format_batch,
    bench_answer_parsing,
);
criterion_main!(benches);
