use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use magnetite::board::{perft, Board, Color, MoveGen};
use magnetite::evaluation::Heuristic;
use magnetite::rules::OthelloRules;
use magnetite::search::SearchEngine;

const MIDGAME: &str = "--------------------------XOO------XXO-------O------------------ X";

fn bench_search(c: &mut Criterion) {
    let board = Board::default();
    let budget = Duration::from_secs(600);

    c.bench_function("search_depth_4_startpos", |b| {
        let mut engine = SearchEngine::new(OthelloRules, Heuristic, 4);
        b.iter(|| engine.select_move(&board, Color::Black, budget))
    });

    let midgame: Board = MIDGAME.parse().unwrap();
    c.bench_function("search_depth_5_midgame", |b| {
        let mut engine = SearchEngine::new(OthelloRules, Heuristic, 5);
        b.iter(|| engine.select_move(&midgame, Color::Black, budget))
    });
}

fn bench_movegen(c: &mut Criterion) {
    let board = Board::default();
    c.bench_function("movegen_startpos", |b| {
        b.iter(|| MoveGen::new_legal(&board, Color::Black).count())
    });

    c.bench_function("perft_6_startpos", |b| b.iter(|| perft(&board, 6)));
}

criterion_group!(benches, bench_search, bench_movegen);
criterion_main!(benches);
