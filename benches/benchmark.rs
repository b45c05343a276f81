use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tf_idf_label_matcher::{find_similar, Corpus, StopWords, VectorSpaceModel};

const LABELS: &[&str] = &["INTJ", "INTP", "ENFP", "ISFJ", "ESTP", "INFJ", "ENTJ", "ISTP"];

/// Synthetic corpus with a skewed word distribution
fn synthetic_corpus(docs: usize, words_per_doc: usize) -> Corpus {
    let mut state: u32 = 0x1234_5678;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..docs)
        .map(|i| {
            let text = (0..words_per_doc)
                .map(|_| {
                    // square the draw to favor low word ids
                    let r = (next() % 1000) as u64;
                    format!("w{}", r * r / 100)
                })
                .collect::<Vec<_>>()
                .join(" ");
            (LABELS[i % LABELS.len()], format!("{}|||{}", text, LABELS[i % LABELS.len()]))
        })
        .collect()
}

fn build_and_query_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(2_000, 200);

    c.bench_function("build", |b| {
        b.iter(|| {
            let model: VectorSpaceModel =
                VectorSpaceModel::build(black_box(&corpus), 10_000, StopWords::english()).unwrap();
            model
        });
    });

    let model: VectorSpaceModel = VectorSpaceModel::build(&corpus, 10_000, StopWords::english()).unwrap();
    let query = "w1 w4 w9 w16 w25 w100 w2500 unknownword";

    c.bench_function("find_similar", |b| {
        b.iter(|| find_similar(&model, black_box(query), 5).unwrap());
    });
}

criterion_group!(benches, build_and_query_benchmark);
criterion_main!(benches);
