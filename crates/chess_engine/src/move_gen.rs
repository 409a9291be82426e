//! Move generation
//!
//! Computes the destination squares a piece may be highlighted for. Generation
//! is pure: it reads the board, never changes it, and always returns the same
//! squares in the same order for the same input.
//!
//! Rules shared by every piece:
//! - destinations are always on the board
//! - a square holding a piece of the mover's color is never a destination
//! - a square holding an opposing piece is a destination (capture)
//!
//! There is no check detection; a king may step next to the enemy king, and a
//! move that leaves one's own king en prise is still offered.

use crate::board::Board;
use crate::types::{Color, Coord, Piece, PieceType};

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;


/// Destinations for `piece` standing on `from`
///
/// `piece` need not match what the board holds at `from`; the generator only
/// looks at the other squares.
pub fn valid_moves(board: &Board, from: Coord, piece: Piece) -> Vec<Coord> {
    let mut moves = Vec::new();

    match piece.kind {
        PieceType::Pawn => pawn::generate_pawn_moves(board, from, piece.color, &mut moves),
        PieceType::Rook => rook::generate_rook_moves(board, from, piece.color, &mut moves),
        PieceType::Knight => knight::generate_knight_moves(board, from, piece.color, &mut moves),
        PieceType::Bishop => bishop::generate_bishop_moves(board, from, piece.color, &mut moves),
        PieceType::Queen => queen::generate_queen_moves(board, from, piece.color, &mut moves),
        PieceType::King => king::generate_king_moves(board, from, piece.color, &mut moves),
    }

    moves
}

/// Destinations for whatever stands on `from`; empty for an empty square
pub fn valid_moves_at(board: &Board, from: Coord) -> Vec<Coord> {
    board
        .piece_at(from)
        .map(|piece| valid_moves(board, from, piece))
        .unwrap_or_default()
}

pub fn is_valid_destination(board: &Board, from: Coord, to: Coord) -> bool {
    valid_moves_at(board, from).contains(&to)
}

/// Empty, or held by the other side
#[inline]
fn can_land_on(board: &Board, to: Coord, color: Color) -> bool {
    board.color_at(to) != Some(color)
}

/// Single-hop generation for knights and kings
fn generate_step_moves(
    board: &Board,
    from: Coord,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Coord>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if can_land_on(board, to, color) {
                moves.push(to);
            }
        }
    }
}
