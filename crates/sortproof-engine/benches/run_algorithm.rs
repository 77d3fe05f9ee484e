//! Benchmark: full trace generation per engine.
//!
//! Every frame clones the working row, so a run costs roughly
//! `frames * n` token clones on top of the O(n²) comparisons. The CLI feeds
//! hand-typed lists, so the sizes below are well past realistic input; the
//! point is to catch regressions in the recorder's de-duplication path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sortproof_engine::run_algorithm;
use sortproof_types::{Algorithm, Order, Token, TokenList, TryNew};

/// Deterministic mixed input: numbers interleaved with letters, reversed.
fn input(len: usize) -> TokenList {
    let tokens = (0..len)
        .rev()
        .map(|i| {
            if i % 5 == 0 {
                let letter = char::from(b'A' + (i % 26) as u8);
                Token::new(letter.to_string())
            } else {
                Token::new(i.to_string())
            }
        })
        .collect();
    match TokenList::try_new(tokens) {
        Ok(list) => list,
        Err(e) => panic!("benchmark input must be non-empty: {e}"),
    }
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_algorithm");

    for len in [8usize, 32, 128] {
        group.throughput(Throughput::Elements(len as u64));

        for algorithm in Algorithm::ALL {
            let values = input(len);
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), len),
                &values,
                |b, values| {
                    b.iter(|| {
                        black_box(run_algorithm(
                            values.clone(),
                            Order::Ascending,
                            algorithm,
                        ))
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
