//! Board model: an 8×8 grid of squares
//!
//! Each square holds at most one piece and a transient highlight flag. The
//! board is a plain value (`Copy`); every change produces a new board so the
//! turn controller can publish snapshots without anyone mutating them behind
//! its back.

use crate::types::{Color, Coord, Piece, PieceType};
use serde::{Deserialize, Serialize};

/// A single square of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub piece: Option<Piece>,
    /// Currently a legal destination for the selected piece
    pub highlighted: bool,
}

impl Square {
    pub const EMPTY: Square = Square {
        piece: None,
        highlighted: false,
    };
}

/// The 8×8 board. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Standard starting position
    pub fn new() -> Self {
        let mut squares = [[Square::EMPTY; 8]; 8];

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            squares[0][col].piece = Some(Piece::new(kind, Color::Black));
            squares[1][col].piece = Some(Piece::new(PieceType::Pawn, Color::Black));
            squares[6][col].piece = Some(Piece::new(PieceType::Pawn, Color::White));
            squares[7][col].piece = Some(Piece::new(kind, Color::White));
        }

        Board { squares }
    }

    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            squares: [[Square::EMPTY; 8]; 8],
        }
    }

    /// Empty board with the given pieces placed. Later entries win on
    /// duplicate coordinates.
    pub fn with_pieces(pieces: &[(Piece, Coord)]) -> Self {
        pieces
            .iter()
            .fold(Board::empty(), |board, &(piece, at)| board.with_piece(at, Some(piece)))
    }

    pub fn square(&self, at: Coord) -> &Square {
        &self.squares[at.row() as usize][at.col() as usize]
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.square(at).piece
    }

    pub fn is_empty(&self, at: Coord) -> bool {
        self.piece_at(at).is_none()
    }

    pub fn color_at(&self, at: Coord) -> Option<Color> {
        self.piece_at(at).map(|piece| piece.color)
    }

    pub fn is_highlighted(&self, at: Coord) -> bool {
        self.square(at).highlighted
    }

    /// Rows of squares, top (row 0) first
    pub fn rows(&self) -> &[[Square; 8]; 8] {
        &self.squares
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |at| self.piece_at(at).map(|piece| (at, piece)))
    }

    /// Squares currently highlighted
    pub fn highlighted(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&at| self.is_highlighted(at))
    }

    pub fn find_king(&self, color: Color) -> Option<Coord> {
        self.pieces()
            .find(|(_, piece)| piece.is_king() && piece.color == color)
            .map(|(at, _)| at)
    }

    pub fn king_count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.is_king() && piece.color == color)
            .count()
    }

    /// New board with `at` set to `piece` (or cleared for `None`)
    #[must_use]
    pub fn with_piece(mut self, at: Coord, piece: Option<Piece>) -> Board {
        self.squares[at.row() as usize][at.col() as usize].piece = piece;
        self
    }

    #[must_use]
    pub fn without_piece(self, at: Coord) -> Board {
        self.with_piece(at, None)
    }

    /// New board where exactly `targets` are highlighted
    #[must_use]
    pub fn with_highlights(self, targets: &[Coord]) -> Board {
        let mut board = self.cleared_highlights();
        for at in targets {
            board.squares[at.row() as usize][at.col() as usize].highlighted = true;
        }
        board
    }

    #[must_use]
    pub fn cleared_highlights(mut self) -> Board {
        for square in self.squares.iter_mut().flatten() {
            square.highlighted = false;
        }
        self
    }

    /// Piece-only view used when describing the position to the external mover
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot(self.squares.map(|row| row.map(|square| square.piece)))
    }
}

/// Serializable piece layout without highlight state
///
/// Serializes as an 8×8 JSON array of `{"type":"R","color":"black"}` or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot(pub [[Option<Piece>; 8]; 8]);

impl From<BoardSnapshot> for Board {
    fn from(snapshot: BoardSnapshot) -> Self {
        let mut board = Board::empty();
        for (row, pieces) in snapshot.0.iter().enumerate() {
            for (col, piece) in pieces.iter().enumerate() {
                board.squares[row][col].piece = *piece;
            }
        }
        board
    }
}
