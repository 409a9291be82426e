//! Knight move generation
//!
//! Knights move in an L-shape: two squares in one direction, then one square
//! perpendicular. They jump, so only the destination square matters.

use crate::board::Board;
use crate::types::{Color, Coord};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (-1, -2),
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
];

/// Generate knight moves from a given square
pub fn generate_knight_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Coord>) {
    super::generate_step_moves(board, from, color, &KNIGHT_OFFSETS, moves);
}
