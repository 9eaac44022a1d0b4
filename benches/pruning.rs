use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_minimax::games::connect383::Connect383;
use rust_minimax::{select_move, AdjacencyHeuristic, SearchConfig};

fn opening() -> Connect383 {
    Connect383::builder().rows(5).cols(6).block(4, 2).build().unwrap()
}

fn bench_depth_limited_4(c: &mut Criterion) {
    let game = opening();
    let config = SearchConfig::depth_limited(4);
    c.bench_function("depth-limited depth 4", |b| {
        b.iter(|| black_box(select_move(&game, &config, AdjacencyHeuristic).unwrap()))
    });
}

fn bench_alpha_beta_4(c: &mut Criterion) {
    let game = opening();
    let config = SearchConfig::alpha_beta(4);
    c.bench_function("alpha-beta depth 4", |b| {
        b.iter(|| black_box(select_move(&game, &config, AdjacencyHeuristic).unwrap()))
    });
}

fn bench_alpha_beta_6(c: &mut Criterion) {
    let game = opening();
    let config = SearchConfig::alpha_beta(6);
    c.bench_function("alpha-beta depth 6", |b| {
        b.iter(|| black_box(select_move(&game, &config, AdjacencyHeuristic).unwrap()))
    });
}

criterion_group!(benches, bench_depth_limited_4, bench_alpha_beta_4, bench_alpha_beta_6);
criterion_main!(benches);
