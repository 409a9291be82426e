//! Game flow - turn control and the external opponent
//!
//! # Module Organization
//!
//! - `turn_state` - [`TurnPhase`] and validated transitions
//! - `pending` - Single in-flight guard for the external move request
//! - `controller` - [`TurnController`]: selection, commit, external move application
//! - `session` - [`GameSession`]: async driver pairing a controller with a provider
//! - `ai` - External move adapter (prompt, reply parsing, providers)
//! - `error` - [`GameError`]
//!
//! Board rules live in the `chess_engine` crate; this module decides who may
//! move when.

pub mod ai;
pub mod controller;
pub mod error;
pub mod pending;
pub mod session;
pub mod turn_state;

pub use controller::{
    ClickOutcome, CommitReport, ExternalOutcome, ExternalReport, IgnoreReason, SelectedPiece,
    SkipReason, TurnController,
};
pub use error::{GameError, GameResult};
pub use pending::{ExternalMoveRequest, PendingExternalMove, Ticket};
pub use session::{GameSession, TurnReport};
pub use turn_state::{TurnPhase, TurnState};
