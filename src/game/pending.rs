//! Single in-flight guard for the external move
//!
//! Every request gets a fresh [`Ticket`]. Only the outstanding ticket can be
//! resolved, so a reply that arrives after a reset (or twice) is recognised
//! as stale and dropped.

use chess_engine::{Board, Color};
use std::fmt;

/// Identifies one external move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the external mover is asked to answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalMoveRequest {
    pub ticket: Ticket,
    /// Snapshot taken right after the human move
    pub board: Board,
    /// Side the external mover plays
    pub mover: Color,
}

#[derive(Debug, Default)]
pub struct PendingExternalMove {
    pending: Option<Ticket>,
    issued: u64,
}

impl PendingExternalMove {
    /// Hand out a new ticket, or `None` while one is outstanding
    pub fn request(&mut self) -> Option<Ticket> {
        if self.pending.is_some() {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Clear the guard if `ticket` is the outstanding one
    pub fn resolve(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the outstanding ticket, returning it
    pub fn cancel(&mut self) -> Option<Ticket> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn outstanding(&self) -> Option<Ticket> {
        self.pending
    }
}
