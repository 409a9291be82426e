//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens). Each ray
//! is walked outward from the origin:
//! 1. Empty square: valid move, keep going
//! 2. Opponent piece: valid capture, ray ends here
//! 3. Own piece: not a destination, ray ends here
//! 4. Board edge: ray ends

use crate::board::Board;
use crate::types::{Color, Coord};

pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk every ray in `directions` and append the reachable squares
pub fn generate_sliding_moves(
    board: &Board,
    from: Coord,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Coord>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;

        while let Some(next) = current.offset(d_row, d_col) {
            match board.color_at(next) {
                None => moves.push(next),
                Some(occupant) => {
                    if occupant != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
