use criterion::{criterion_group, criterion_main, Criterion};
use magnetite::board::{Board, Color};
use magnetite::evaluation::evaluate;

fn bench_evaluation(c: &mut Criterion) {
    let positions = vec![
        ("startpos", Board::default()),
        ("midgame", "--------------------------XOO------XXO-------O------------------ X".parse().unwrap()),
        ("endgame", "XXXXXXXOXXOOOOOOXOXOXOO-XOOXOOO-XOXXOXO-XXOXXOO-XXXOO----XXXO--- O".parse().unwrap()),
        ("finished", format!("{}{} X", "X".repeat(40), "O".repeat(24)).parse().unwrap()),
    ];
    for (name, board) in &positions {
        c.bench_function(&format!("eval_{}", name), |b| {
            b.iter(|| evaluate(board, Color::Black))
        });
    }
}

criterion_group!(benches, bench_evaluation);
criterion_main!(benches);
