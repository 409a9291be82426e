//! Error types for game module
//!
//! Only misuse of the controller ends up here. Failures of the external mover
//! are never errors: they become a skipped turn.

use chess_engine::ChessEngineError;

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Engine rejected a notation or move
    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    /// A second external move was requested while one is outstanding
    #[error("An external move request is already in flight")]
    RequestInFlight,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
