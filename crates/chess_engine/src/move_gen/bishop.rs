//! Bishop move generation
//!
//! Bishops slide along the four diagonals with the same stop and capture rule
//! as rooks.

use super::sliding;
use crate::board::Board;
use crate::types::{Color, Coord};

/// Generate bishop moves from a given square
pub fn generate_bishop_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Coord>) {
    sliding::generate_sliding_moves(board, from, color, &sliding::DIAGONAL_DIRS, moves);
}
