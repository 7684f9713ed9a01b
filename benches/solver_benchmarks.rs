use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use necto::{
    solver::{
        heuristics::{
            value::{LeastConstrainingValue, UnorderedValues, ValueOrdering},
            variable::{FirstUnassigned, MinimumRemainingValues, VariableSelection},
        },
        inference::{ArcConsistency, ForwardChecking, InferenceStrategy, NoInference},
        search::backtracking_search,
    },
    sudoku,
};

const EASY_BOARD: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

fn solve_with(
    board: &str,
    select: &mut dyn VariableSelection<char>,
    order: &dyn ValueOrdering<char>,
    inference: &dyn InferenceStrategy<char>,
) {
    let csp = sudoku::build(board).unwrap();
    let (solution, _stats) = backtracking_search(&csp, select, order, inference);
    assert!(solution.is_some());
}

fn sudoku_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sudoku");

    group.bench_with_input(
        BenchmarkId::new("easy", "baseline"),
        &EASY_BOARD,
        |b, board| {
            b.iter(|| {
                solve_with(
                    black_box(board),
                    &mut FirstUnassigned,
                    &UnorderedValues,
                    &NoInference,
                )
            })
        },
    );

    group.bench_with_input(
        BenchmarkId::new("easy", "fc_mrv_lcv"),
        &EASY_BOARD,
        |b, board| {
            b.iter(|| {
                solve_with(
                    black_box(board),
                    &mut MinimumRemainingValues::with_seed(0),
                    &LeastConstrainingValue,
                    &ForwardChecking,
                )
            })
        },
    );

    group.bench_with_input(
        BenchmarkId::new("easy", "ac3_mrv_lcv"),
        &EASY_BOARD,
        |b, board| {
            b.iter(|| {
                solve_with(
                    black_box(board),
                    &mut MinimumRemainingValues::with_seed(0),
                    &LeastConstrainingValue,
                    &ArcConsistency,
                )
            })
        },
    );

    group.finish();
}

criterion_group!(benches, sudoku_benchmarks);
criterion_main!(benches);
