//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, onto an empty square
//! - **Double push**: from the starting row (6 for White, 1 for Black), two
//!   squares forward when both squares are empty
//! - **Captures**: one square diagonally forward, only onto an opposing piece
//! - No en passant. Promotion happens when the move is committed, not here.

use crate::board::Board;
use crate::types::{Color, Coord};

/// Generate pawn moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&Board::new(), "e2".parse()?, Color::White, &mut moves);
/// // e2-e3 and e2-e4
/// ```
pub fn generate_pawn_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Coord>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            moves.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty(two_step) {
                        moves.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(forward, d_col) {
            // Diagonal moves are captures only
            if board.color_at(target) == Some(color.opponent()) {
                moves.push(target);
            }
        }
    }
}
