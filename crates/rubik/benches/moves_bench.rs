//! Criterion benchmarks for single-move application.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rubik::api::{apply_move, draw_scramble, CubeState, Move, ReplayToken};

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves");
    let start = {
        let mut cube = CubeState::solved();
        cube.apply_all(draw_scramble(30, ReplayToken { seed: 42, index: 0 }));
        cube
    };
    for m in [Move::ALL[0], Move::ALL[7], Move::ALL[17]] {
        group.bench_with_input(BenchmarkId::new("apply", m.to_string()), &m, |b, &m| {
            b.iter_batched(
                || start,
                |mut cube| {
                    apply_move(&mut cube, m);
                    cube
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function("is_solved", |b| b.iter(|| start.is_solved()));
    group.finish();
}

criterion_group!(benches, bench_moves);
criterion_main!(benches);
