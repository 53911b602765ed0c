use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_ttt::core::{Board, Cell, GameRng, Symbol};
use rust_ttt::search::{choose_random, Minimax, SearchConfig};

const X: Cell = Cell::Occupied(Symbol::X);
const E: Cell = Cell::Empty;

fn criterion_benchmark(c: &mut Criterion) {
    let empty = Board::new();
    let corner = Board::from_cells([X, E, E, E, E, E, E, E, E]);

    let mut plain = Minimax::new(SearchConfig::default());
    c.bench_function("minimax on empty board", |b| {
        b.iter(|| plain.search(black_box(&empty), Symbol::X, Symbol::O))
    });

    let mut pruned = Minimax::new(SearchConfig::default().with_alpha_beta(true));
    c.bench_function("alpha-beta on empty board", |b| {
        b.iter(|| pruned.search(black_box(&empty), Symbol::X, Symbol::O))
    });

    c.bench_function("minimax reply to corner", |b| {
        b.iter(|| plain.search(black_box(&corner), Symbol::O, Symbol::X))
    });

    let mut rng = GameRng::new(42);
    c.bench_function("random on empty board", |b| {
        b.iter(|| choose_random(black_box(&empty), &mut rng))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
