//! Queen move generation
//!
//! Queens combine the movement patterns of rooks and bishops. The two sets
//! never overlap, so the union is a plain concatenation.

use super::bishop;
use super::rook;
use crate::board::Board;
use crate::types::{Color, Coord};

/// Generate queen moves from a given square: rook rays first, then bishop rays
pub fn generate_queen_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Coord>) {
    rook::generate_rook_moves(board, from, color, moves);
    bishop::generate_bishop_moves(board, from, color, moves);
}
