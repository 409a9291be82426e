//! Turn controller
//!
//! Owns the board and drives one game: selection and highlighting on the
//! first click, commit on the second, then one outstanding request for the
//! opposing move. The controller is synchronous; whoever drives it performs
//! the request and hands the reply back through
//! [`TurnController::apply_external_move`].
//!
//! ```text
//!   Idle ──click piece──▶ Selected ──click highlight──▶ AwaitingExternalMove
//!    ▲                       │                             │
//!    └──────cancel───────────┘◀──────applied / skipped─────┘
//!                            │                             │
//!                            └──── king captured ──▶ GameOver ◀┘
//! ```

use super::ai::AIMove;
use super::error::{GameError, GameResult};
use super::pending::{ExternalMoveRequest, PendingExternalMove, Ticket};
use super::turn_state::{TurnPhase, TurnState};
use chess_engine::api::{commit_move, place_external};
use chess_engine::{valid_moves_at, Board, Color, Coord, Piece};
use tracing::{debug, info, warn};

/// The piece currently held by the human
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPiece {
    pub origin: Coord,
    pub piece: Piece,
    pub destinations: Vec<Coord>,
}

/// Why a click did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    GameOver,
    AwaitingExternalMove,
}

/// What a human move did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub from: Coord,
    pub to: Coord,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
    pub winner: Option<Color>,
    /// Present unless the move ended the game
    pub request: Option<ExternalMoveRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored(IgnoreReason),
    /// Click on an empty square with nothing selected
    Cleared,
    Selected {
        origin: Coord,
        destinations: Vec<Coord>,
    },
    /// Another piece of the same color was picked instead
    Reselected {
        origin: Coord,
        destinations: Vec<Coord>,
    },
    Cancelled,
    Committed(CommitReport),
}

/// Why the opposing turn passed without a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The provider could not be reached or gave no usable reply
    Unavailable,
    /// The reply was missing the piece or one of the squares
    Incomplete,
}

impl SkipReason {
    pub fn message(self) -> &'static str {
        match self {
            SkipReason::Unavailable => {
                "We had trouble contacting the move service, so you get a free turn."
            }
            SkipReason::Incomplete => {
                "The opponent's move was only partially understood. You got lucky, it's your turn again."
            }
        }
    }
}

/// What the opposing move did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReport {
    pub piece: Piece,
    pub from: Coord,
    pub to: Coord,
    /// False when the claimed piece was not on `from`
    pub origin_cleared: bool,
    pub captured: Option<Piece>,
    pub winner: Option<Color>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalOutcome {
    Applied(ExternalReport),
    Skipped(SkipReason),
    /// The ticket was not the outstanding one (reset in between, or a repeat)
    Stale,
}

#[derive(Debug)]
pub struct TurnController {
    board: Board,
    turn: TurnState,
    selected: Option<SelectedPiece>,
    winner: Option<Color>,
    message: Option<String>,
    pending: PendingExternalMove,
    external_color: Color,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Standard starting position, the external mover plays Black
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Start from an arbitrary position
    pub fn with_board(board: Board) -> Self {
        Self {
            board: board.cleared_highlights(),
            turn: TurnState::default(),
            selected: None,
            winner: None,
            message: None,
            pending: PendingExternalMove::default(),
            external_color: Color::Black,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    pub fn move_number(&self) -> u32 {
        self.turn.move_number
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn selected(&self) -> Option<&SelectedPiece> {
        self.selected.as_ref()
    }

    /// Last informational message for the player
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn external_color(&self) -> Color {
        self.external_color
    }

    /// Ticket of the outstanding external request, if any
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.outstanding()
    }

    /// Fresh board, nothing selected; an outstanding request becomes stale
    pub fn reset(&mut self) {
        if let Some(ticket) = self.pending.cancel() {
            info!("[TURN] Reset while request {} was outstanding", ticket);
        }
        self.board = Board::new();
        self.turn.reset();
        self.selected = None;
        self.winner = None;
        self.message = None;
        info!("[TURN] Board reset");
    }

    /// Handle a click on a square
    ///
    /// # Errors
    ///
    /// Only on internal inconsistency (a commit from an empty origin or a
    /// second request while one is outstanding); ordinary clicks never fail.
    pub fn click(&mut self, at: Coord) -> GameResult<ClickOutcome> {
        match self.turn.phase {
            TurnPhase::GameOver => {
                debug!("[TURN] Ignoring click on {}: game over", at);
                Ok(ClickOutcome::Ignored(IgnoreReason::GameOver))
            }
            TurnPhase::AwaitingExternalMove => {
                debug!("[TURN] Ignoring click on {}: awaiting external move", at);
                Ok(ClickOutcome::Ignored(IgnoreReason::AwaitingExternalMove))
            }
            TurnPhase::Idle => Ok(self.click_idle(at)),
            TurnPhase::Selected => self.click_selected(at),
        }
    }

    fn click_idle(&mut self, at: Coord) -> ClickOutcome {
        match self.board.piece_at(at) {
            None => {
                self.board = self.board.cleared_highlights();
                ClickOutcome::Cleared
            }
            Some(piece) => {
                let destinations = self.select(at, piece);
                self.turn.transition_to(TurnPhase::Selected);
                ClickOutcome::Selected {
                    origin: at,
                    destinations,
                }
            }
        }
    }

    fn click_selected(&mut self, at: Coord) -> GameResult<ClickOutcome> {
        let Some(selected) = self.selected.clone() else {
            warn!("[TURN] Selected phase without a selection, cancelling");
            self.cancel();
            return Ok(ClickOutcome::Cancelled);
        };

        if at != selected.origin && self.board.is_highlighted(at) {
            return self.commit(selected.origin, at).map(ClickOutcome::Committed);
        }

        match self.board.piece_at(at) {
            Some(piece) if at != selected.origin && piece.color == selected.piece.color => {
                let destinations = self.select(at, piece);
                self.turn.transition_to(TurnPhase::Selected);
                Ok(ClickOutcome::Reselected {
                    origin: at,
                    destinations,
                })
            }
            _ => {
                self.cancel();
                Ok(ClickOutcome::Cancelled)
            }
        }
    }

    fn select(&mut self, origin: Coord, piece: Piece) -> Vec<Coord> {
        let destinations = valid_moves_at(&self.board, origin);
        debug!(
            "[TURN] Selected {} on {} with {} destinations",
            piece,
            origin,
            destinations.len()
        );
        self.board = self.board.with_highlights(&destinations);
        self.selected = Some(SelectedPiece {
            origin,
            piece,
            destinations: destinations.clone(),
        });
        destinations
    }

    fn cancel(&mut self) {
        self.board = self.board.cleared_highlights();
        self.selected = None;
        self.turn.transition_to(TurnPhase::Idle);
    }

    fn commit(&mut self, from: Coord, to: Coord) -> GameResult<CommitReport> {
        let result = commit_move(&self.board, from, to)?;
        let ticket = match result.winner {
            Some(_) => None,
            None => Some(self.pending.request().ok_or(GameError::RequestInFlight)?),
        };
        info!(
            "[TURN] {} {} -> {}{}",
            result.moved,
            from,
            to,
            result
                .captured
                .map(|p| format!(" captures {}", p))
                .unwrap_or_default()
        );

        self.board = result.board;
        self.selected = None;
        self.message = None;

        let mut report = CommitReport {
            from,
            to,
            moved: result.moved,
            captured: result.captured,
            promoted: result.promoted,
            winner: result.winner,
            request: None,
        };

        let Some(ticket) = ticket else {
            if let Some(winner) = result.winner {
                self.finish(winner);
            }
            return Ok(report);
        };

        self.turn.transition_to(TurnPhase::AwaitingExternalMove);
        debug!("[TURN] Requesting external move {}", ticket);

        report.request = Some(ExternalMoveRequest {
            ticket,
            board: self.board,
            mover: self.external_color,
        });
        Ok(report)
    }

    fn finish(&mut self, winner: Color) {
        info!("[TURN] {} captured the king and wins", winner);
        self.winner = Some(winner);
        self.message = Some(format!("{} wins!", capitalize(winner.name())));
        self.turn.transition_to(TurnPhase::GameOver);
    }

    /// Apply the reply to an external move request
    ///
    /// `None` (nothing obtained) and a reply missing the piece or a square
    /// both leave the board untouched and hand the turn back with a message.
    /// Otherwise the move is placed leniently; see
    /// [`chess_engine::api::place_external`].
    pub fn apply_external_move(&mut self, ticket: Ticket, reply: Option<AIMove>) -> ExternalOutcome {
        if !self.pending.resolve(ticket) {
            warn!("[TURN] Discarding stale external move {}", ticket);
            return ExternalOutcome::Stale;
        }

        let reply = match reply {
            None => return self.skip(SkipReason::Unavailable),
            Some(reply) => reply,
        };
        let Some((piece, from, to)) = reply.complete() else {
            debug!("[TURN] Incomplete external move: {:?}", reply);
            return self.skip(SkipReason::Incomplete);
        };

        let placement = place_external(&self.board, piece, from, to);
        if !placement.origin_cleared {
            warn!(
                "[TURN] External move claims {} on {} but the square disagrees; origin left as is",
                piece, from
            );
        }
        info!("[TURN] External move {} {} -> {}", piece, from, to);

        self.board = placement.board;
        self.turn.move_number += 1;
        self.message = reply.explanation.clone();

        if let Some(winner) = placement.winner {
            self.finish(winner);
        } else {
            self.turn.transition_to(TurnPhase::Idle);
        }

        ExternalOutcome::Applied(ExternalReport {
            piece,
            from,
            to,
            origin_cleared: placement.origin_cleared,
            captured: placement.captured,
            winner: placement.winner,
            explanation: reply.explanation,
        })
    }

    fn skip(&mut self, reason: SkipReason) -> ExternalOutcome {
        info!("[TURN] External turn skipped: {:?}", reason);
        self.board = self.board.cleared_highlights();
        self.message = Some(reason.message().to_string());
        self.turn.move_number += 1;
        self.turn.transition_to(TurnPhase::Idle);
        ExternalOutcome::Skipped(reason)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
