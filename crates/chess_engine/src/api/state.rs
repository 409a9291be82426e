//! Game-end and promotion rules
//!
//! The game ends only when a king is captured. A pawn reaching its promotion
//! row always becomes a queen of its own color; there is no choice.

use crate::board::Board;
use crate::types::{Color, Coord, Piece, PieceType};

/// Winner implied by `mover` taking `captured`, if that was a king of the
/// other color
pub fn winner_by_capture(mover: Color, captured: Option<Piece>) -> Option<Color> {
    captured
        .filter(|piece| piece.is_king() && piece.color != mover)
        .map(|_| mover)
}

/// The piece that ends up on `to`: pawns on their promotion row become queens
pub fn promoted(piece: Piece, to: Coord) -> Piece {
    if piece.kind == PieceType::Pawn && to.row() == piece.color.promotion_row() {
        Piece::new(PieceType::Queen, piece.color)
    } else {
        piece
    }
}

/// Winner read off the board: the side whose opponent has no king left.
/// `None` while both kings stand (or, degenerate, when neither does).
pub fn winner_on_board(board: &Board) -> Option<Color> {
    match (
        board.king_count(Color::White) > 0,
        board.king_count(Color::Black) > 0,
    ) {
        (true, false) => Some(Color::White),
        (false, true) => Some(Color::Black),
        _ => None,
    }
}
