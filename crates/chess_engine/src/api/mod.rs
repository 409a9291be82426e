//! Move application
//!
//! Turns a chosen move into a new board and reports what happened. Nothing
//! here checks legality; callers decide which moves to allow.
//!
//! ## Module Organization
//!
//! - `moves` - Committing a move (capture, promotion, king capture) and the
//!   lenient placement used for externally supplied moves
//! - `state` - Game-end and promotion rules shared by both paths

mod moves;
mod state;

pub use moves::{commit_move, place_external, CommitResult, Placement};
pub use state::{promoted, winner_by_capture, winner_on_board};
