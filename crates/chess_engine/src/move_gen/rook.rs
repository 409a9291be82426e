//! Rook move generation
//!
//! Rooks slide along ranks and files until blocked by a piece or the board
//! edge, capturing the first opposing piece they meet.

use super::sliding;
use crate::board::Board;
use crate::types::{Color, Coord};

/// Generate rook moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_rook_moves(&board, "a1".parse()?, Color::White, &mut moves);
/// ```
pub fn generate_rook_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Coord>) {
    sliding::generate_sliding_moves(board, from, color, &sliding::ORTHOGONAL_DIRS, moves);
}
