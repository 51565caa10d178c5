//! Throughput of the hot snapshot operations: cloning a state and
//! applying the play transition.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ace_engine::GameState;

fn dealt_game(players: usize, seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    for i in 0..players {
        state = state.add_player(&format!("p{i}"));
    }
    state.start()
}

fn bench_snapshot_clone(c: &mut Criterion) {
    let state = dealt_game(4, 42);
    c.bench_function("snapshot_clone", |b| b.iter(|| black_box(state.clone())));
}

fn bench_play_card(c: &mut Criterion) {
    let state = dealt_game(4, 42);
    // the leading play of a trick is always legal
    let leader = state.current_player;
    c.bench_function("play_card", |b| {
        b.iter(|| black_box(state.play_card(leader, 0)))
    });
}

criterion_group!(benches, bench_snapshot_clone, bench_play_card);
criterion_main!(benches);
