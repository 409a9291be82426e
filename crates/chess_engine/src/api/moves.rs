//! Move execution
//!
//! Two ways a piece reaches a new square:
//! - [`commit_move`] for moves chosen from the generated destinations
//! - [`place_external`] for moves described by the external mover, applied
//!   leniently as described on the function

use super::state::{promoted, winner_by_capture};
use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{Color, Coord, Piece};

/// Result of committing a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitResult {
    /// Board after the move, highlights cleared
    pub board: Board,
    /// Piece that left the origin (before promotion)
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// The moved pawn became a queen
    pub promoted: bool,
    /// Set when the captured piece was the opposing king
    pub winner: Option<Color>,
}

/// Execute a move on the board
///
/// Moves whatever stands on `from` to `to`, clearing `from`. A captured king
/// of the other color decides the game; a pawn landing on its promotion row is
/// replaced by a queen. Legality is not checked here.
///
/// # Errors
///
/// [`ChessEngineError::NoPieceAtSquare`] when `from` is empty.
///
/// # Examples
///
/// ```rust,ignore
/// let result = commit_move(&Board::new(), "e2".parse()?, "e4".parse()?)?;
/// assert!(result.board.is_empty("e2".parse()?));
/// ```
pub fn commit_move(board: &Board, from: Coord, to: Coord) -> ChessEngineResult<CommitResult> {
    let moved = board
        .piece_at(from)
        .ok_or_else(|| ChessEngineError::NoPieceAtSquare {
            square: from.to_algebraic(),
        })?;
    let captured = board.piece_at(to);
    let landed = promoted(moved, to);

    let board = board
        .without_piece(from)
        .with_piece(to, Some(landed))
        .cleared_highlights();

    Ok(CommitResult {
        board,
        moved,
        captured,
        promoted: landed != moved,
        winner: winner_by_capture(moved.color, captured),
    })
}

/// Result of applying an externally supplied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub board: Board,
    /// The origin held the claimed piece and was emptied
    pub origin_cleared: bool,
    /// Whatever was overwritten on the destination, own pieces included
    pub captured: Option<Piece>,
    pub winner: Option<Color>,
}

/// Apply a move described by the external mover
///
/// The description is trusted only as far as the board agrees with it:
/// - the origin is cleared only if it holds exactly `piece` (kind and color);
///   otherwise it is left alone and the piece effectively appears from nowhere
/// - `piece` is put on `to` unconditionally, even over a piece of its own color
/// - taking the opposing king sets the winner
/// - no promotion is applied
pub fn place_external(board: &Board, piece: Piece, from: Coord, to: Coord) -> Placement {
    let origin_cleared = board.piece_at(from) == Some(piece);
    let captured = board.piece_at(to);

    let board = if origin_cleared {
        board.without_piece(from)
    } else {
        *board
    };

    Placement {
        board: board.with_piece(to, Some(piece)).cleared_highlights(),
        origin_cleared,
        captured,
        winner: winner_by_capture(piece.color, captured),
    }
}
