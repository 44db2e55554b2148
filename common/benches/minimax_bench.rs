use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{
    best_move, evaluate_winner, is_full, select_move_as, Board, Difficulty, Mark,
};

fn bench_best_move_empty_board() {
    black_box(best_move(black_box(&Board::new())));
}

fn bench_best_move_mid_game() {
    let board: Board = "X../.O./..X".parse().unwrap();
    black_box(best_move(black_box(&board)));
}

fn bench_insane_self_play() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;
    let mut session_rng = SessionRng::new(42);

    while evaluate_winner(&board).is_none() && !is_full(&board) {
        let Some(index) = select_move_as(&board, current_mark, Difficulty::Insane, &mut session_rng)
        else {
            break;
        };
        board = board.with_mark(index, current_mark);
        current_mark = current_mark.opponent().unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("best_move_empty", |b| {
        b.iter(bench_best_move_empty_board)
    });

    group.bench_function("best_move_mid_game", |b| {
        b.iter(bench_best_move_mid_game)
    });

    group.bench_function("insane_self_play", |b| {
        b.iter(bench_insane_self_play)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
