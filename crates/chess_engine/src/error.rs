//! Error types for chess engine
//!
//! Covers notation parsing and the few board operations that can be handed
//! inconsistent input (committing a move from an empty square).

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Square notation could not be read (e.g. "z9", "e")
    #[error("Invalid square notation: {notation:?}")]
    InvalidSquare { notation: String },

    /// Row/column pair outside the 8×8 board
    #[error("Square ({row}, {col}) is off the board (must be 0-7)")]
    OutOfBounds { row: i32, col: i32 },

    /// Piece name or code not recognised
    #[error("Unknown piece: {name:?}")]
    UnknownPiece { name: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
