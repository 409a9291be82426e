//! Core value types: colors, piece kinds, pieces and board coordinates
//!
//! Coordinates follow the board's screen orientation: row 0 is Black's back
//! rank at the top, row 7 is White's back rank at the bottom, and column 0 is
//! the "a" file. Algebraic notation maps onto this grid with `row = 8 - rank`.

use crate::error::{ChessEngineError, ChessEngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of a piece or player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step: White moves up the grid, Black down
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns start (and may double-step from)
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Opponent's back rank, where pawns of this color promote
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind, serialized as its single-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    #[serde(rename = "P")]
    Pawn,
    #[serde(rename = "R")]
    Rook,
    #[serde(rename = "N")]
    Knight,
    #[serde(rename = "B")]
    Bishop,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Single-letter code ('P', 'R', 'N', 'B', 'Q', 'K')
    pub fn code(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Parse a single-letter code. Unknown codes yield `None`.
    pub fn from_code(code: char) -> Option<PieceType> {
        PieceType::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Full English name as used in the external mover's replies
    pub fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "Pawn",
            PieceType::Rook => "Rook",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        }
    }

    /// Parse a full piece name. Matching is exact and case-sensitive:
    /// "Knight" is recognised, "knight" and "Kt" are not.
    pub fn from_name(name: &str) -> Option<PieceType> {
        PieceType::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceType {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceType::from_name(s).ok_or_else(|| ChessEngineError::UnknownPiece {
            name: s.to_string(),
        })
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceType, color: Color) -> Self {
        Piece { kind, color }
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceType::King
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// Board coordinate, always within the 8×8 grid
///
/// Constructed only through [`Coord::new`], [`Coord::try_new`],
/// [`Coord::offset`] or parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawCoord {
    row: i32,
    col: i32,
}

impl TryFrom<RawCoord> for Coord {
    type Error = ChessEngineError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::try_new(raw.row, raw.col)
    }
}

impl Coord {
    /// Bounds-checked constructor
    pub fn new(row: u8, col: u8) -> Option<Coord> {
        (row < 8 && col < 8).then_some(Coord { row, col })
    }

    /// Row index, 0 at the top (rank 8)
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index, 0 at file `a`
    pub fn col(self) -> u8 {
        self.col
    }

    /// Like [`Coord::new`] but reports the offending pair
    pub fn try_new(row: i32, col: i32) -> ChessEngineResult<Coord> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessEngineError::OutOfBounds { row, col })
        }
    }

    /// Step by a row/column delta, `None` when the result leaves the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        Coord::try_new(self.row as i32 + d_row as i32, self.col as i32 + d_col as i32).ok()
    }

    /// All 64 squares, row by row from the top-left
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Coord { row, col }))
    }

    /// Parse algebraic notation, `None` when malformed.
    ///
    /// "e2" → (6, 4), "a8" → (0, 0). Only the first two characters are read.
    pub fn from_algebraic(notation: &str) -> Option<Coord> {
        notation.parse().ok()
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

impl FromStr for Coord {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidSquare {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank)) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return Err(invalid()),
        };
        let rank = rank.to_digit(10).ok_or_else(invalid)? as i32;

        Coord::try_new(8 - rank, col as i32)
    }
}
