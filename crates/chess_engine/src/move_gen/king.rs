//! King move generation
//!
//! Kings move one square in any direction. No castling, and no check: a king
//! may step onto a square the opponent attacks.

use crate::board::Board;
use crate::types::{Color, Coord};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Generate king moves from a given square
pub fn generate_king_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Coord>) {
    super::generate_step_moves(board, from, color, &KING_OFFSETS, moves);
}
