//! Async driver around [`TurnController`]
//!
//! `click` runs the human click and, if it produced an external move request,
//! awaits the provider and applies the reply before returning. Taking
//! `&mut self` for the whole round-trip means no other click can interleave.

use super::ai::MoveProvider;
use super::controller::{ClickOutcome, ExternalOutcome, TurnController};
use super::error::GameResult;
use chess_engine::Coord;
use std::time::Duration;
use tracing::warn;

/// Everything one click caused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub click: ClickOutcome,
    /// Set when the click committed a move and the opposing turn was resolved
    pub external: Option<ExternalOutcome>,
}

pub struct GameSession<P> {
    controller: TurnController,
    provider: P,
    timeout: Duration,
}

impl<P: MoveProvider> GameSession<P> {
    pub fn new(provider: P, timeout: Duration) -> Self {
        Self::with_controller(TurnController::new(), provider, timeout)
    }

    pub fn with_controller(controller: TurnController, provider: P, timeout: Duration) -> Self {
        Self {
            controller,
            provider,
            timeout,
        }
    }

    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Click a square given in algebraic notation
    pub async fn click_notation(&mut self, notation: &str) -> GameResult<TurnReport> {
        let at: Coord = notation.trim().parse()?;
        self.click(at).await
    }

    pub async fn click(&mut self, at: Coord) -> GameResult<TurnReport> {
        let click = self.controller.click(at)?;

        let request = match &click {
            ClickOutcome::Committed(report) => report.request.clone(),
            _ => None,
        };
        let Some(request) = request else {
            return Ok(TurnReport {
                click,
                external: None,
            });
        };

        let reply = match tokio::time::timeout(
            self.timeout,
            self.provider.request_move(&request.board, request.mover),
        )
        .await
        {
            Ok(reply) => reply,
            Err(_) => {
                warn!("[AI] No reply within {:?}", self.timeout);
                None
            }
        };

        let external = self.controller.apply_external_move(request.ticket, reply);
        Ok(TurnReport {
            click,
            external: Some(external),
        })
    }
}
