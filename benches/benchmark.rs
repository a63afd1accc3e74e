use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sudoku_play::SudokuGrid;
use sudoku_play::rules;

// A full 9x9 solution with one hole at the bottom-right corner, so the
// checker scans are measured against a worst-case crowded grid.
const NEARLY_FULL: &str = "3;\
    4,5,6,2,1,7,3,9,8,\
    8,1,2,9,6,3,5,4,7,\
    9,7,3,4,5,8,6,1,2,\
    1,2,5,6,7,4,9,8,3,\
    3,6,4,8,9,1,2,7,5,\
    7,9,8,5,3,2,4,6,1,\
    6,4,1,7,2,5,8,3,9,\
    5,3,9,1,8,6,7,2,4,\
    2,8,7,3,4,9,1,5,";

fn benchmark_check_placement(c: &mut Criterion) {
    let grid = SudokuGrid::parse(NEARLY_FULL).unwrap();

    c.bench_function("check placement on a crowded grid", |b| b.iter(||
        rules::check_placement(black_box(&grid), 8, 8, 6)));
}

fn benchmark_grid_respects_rules(c: &mut Criterion) {
    let grid = SudokuGrid::parse(NEARLY_FULL).unwrap();

    c.bench_function("whole-grid rule check", |b| b.iter(||
        rules::grid_respects_rules(black_box(&grid))));
}

fn benchmark_is_full(c: &mut Criterion) {
    let grid = SudokuGrid::parse(NEARLY_FULL).unwrap();

    c.bench_function("fullness rescan", |b| b.iter(||
        black_box(&grid).is_full()));
}

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse grid code", |b| b.iter(||
        SudokuGrid::parse(black_box(NEARLY_FULL)).unwrap()));
}

criterion_group!(benches, benchmark_check_placement,
    benchmark_grid_respects_rules, benchmark_is_full, benchmark_parse);
criterion_main!(benches);
