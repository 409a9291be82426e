//! King-capture chess rules engine
//!
//! Pure game logic for an 8×8 chess variant in which the game ends only when a
//! king is taken. There is no check, checkmate or stalemate; pawns promote to a
//! queen automatically on the far rank.
//!
//! ## Module Organization
//!
//! - `types` - Colors, piece kinds, pieces and board coordinates
//! - `board` - The 8×8 grid of squares (value type, copy-on-write)
//! - `move_gen` - Destination squares per piece type
//! - `api` - Committing moves: captures, promotion, king capture detection
//! - `error` - Engine error types
//!
//! Nothing in this crate knows about turns, selection or the external mover;
//! those live in the application's turn controller.

pub mod api;
pub mod board;
pub mod error;
pub mod move_gen;
pub mod types;

pub use board::{Board, BoardSnapshot, Square};
pub use error::{ChessEngineError, ChessEngineResult};
pub use move_gen::{is_valid_destination, valid_moves, valid_moves_at};
pub use types::{Color, Coord, Piece, PieceType};
