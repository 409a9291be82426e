//! Chess Engine Benchmarks
//!
//! Performance benchmarks for move generation and move application using Criterion.

use chess_engine::api::commit_move;
use chess_engine::{valid_moves_at, Board, Color, Coord, Piece, PieceType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sq(notation: &str) -> Coord {
    notation.parse().unwrap()
}

/// Destinations for every piece of `color`
fn all_moves(board: &Board, color: Color) -> usize {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(at, _)| valid_moves_at(board, at).len())
        .sum()
}

fn open_position() -> Board {
    Board::with_pieces(&[
        (Piece::new(PieceType::Queen, Color::White), sq("d4")),
        (Piece::new(PieceType::Rook, Color::White), sq("a1")),
        (Piece::new(PieceType::Bishop, Color::White), sq("c3")),
        (Piece::new(PieceType::Knight, Color::White), sq("f3")),
        (Piece::new(PieceType::King, Color::White), sq("g1")),
        (Piece::new(PieceType::Queen, Color::Black), sq("e6")),
        (Piece::new(PieceType::Rook, Color::Black), sq("h8")),
        (Piece::new(PieceType::King, Color::Black), sq("e8")),
    ])
}

fn bench_new_board(c: &mut Criterion) {
    c.bench_function("new_board", |b| b.iter(|| black_box(Board::new())));
}

fn bench_move_generation_starting(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("valid_moves_starting_position", |b| {
        b.iter(|| black_box(all_moves(&board, Color::White)))
    });
}

fn bench_move_generation_open(c: &mut Criterion) {
    let board = open_position();

    c.bench_function("valid_moves_open_position", |b| {
        b.iter(|| {
            let white = all_moves(&board, Color::White);
            let black = all_moves(&board, Color::Black);
            black_box((white, black))
        })
    });
}

fn bench_select_and_commit(c: &mut Criterion) {
    let board = Board::new();
    let from = sq("e2");

    c.bench_function("select_and_commit", |b| {
        b.iter(|| {
            let destinations = valid_moves_at(&board, from);
            let highlighted = board.with_highlights(&destinations);
            black_box(commit_move(&highlighted, from, destinations[1]))
        })
    });
}

criterion_group!(
    benches,
    bench_new_board,
    bench_move_generation_starting,
    bench_move_generation_open,
    bench_select_and_commit,
);
criterion_main!(benches);
