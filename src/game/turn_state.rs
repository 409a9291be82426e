//! Turn phase tracking
//!
//! Tracks where we are within the current turn so the controller can refuse
//! input while the external move is outstanding and after the game ends.

use tracing::error;

/// Fine-grained turn flow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnPhase {
    /// No piece selected
    ///
    /// Valid transitions: → Selected
    #[default]
    Idle,

    /// A piece is selected and its destinations are highlighted
    ///
    /// Valid transitions: → Idle (cancel), → Selected (reselect),
    /// → AwaitingExternalMove (commit), → GameOver (king captured)
    Selected,

    /// The human move is committed and the opposing move is outstanding
    ///
    /// Valid transitions: → Idle (applied or skipped), → GameOver
    AwaitingExternalMove,

    /// A king was captured
    ///
    /// Terminal state; only a reset leaves it
    GameOver,
}

impl TurnPhase {
    /// Check if this state allows human input
    pub fn accepts_input(&self) -> bool {
        matches!(self, TurnPhase::Idle | TurnPhase::Selected)
    }

    /// Check if the opposing move is outstanding
    pub fn is_awaiting_external(&self) -> bool {
        matches!(self, TurnPhase::AwaitingExternalMove)
    }

    fn can_transition_to(self, next: TurnPhase) -> bool {
        matches!(
            (self, next),
            (TurnPhase::Idle, TurnPhase::Selected)
                | (TurnPhase::Selected, TurnPhase::Idle)
                | (TurnPhase::Selected, TurnPhase::Selected)
                | (TurnPhase::Selected, TurnPhase::AwaitingExternalMove)
                | (TurnPhase::Selected, TurnPhase::GameOver)
                | (TurnPhase::AwaitingExternalMove, TurnPhase::Idle)
                | (TurnPhase::AwaitingExternalMove, TurnPhase::GameOver)
        )
    }
}

/// Current phase plus the move counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnState {
    pub phase: TurnPhase,

    /// Full moves played (incremented when the opposing turn resolves)
    pub move_number: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            phase: TurnPhase::Idle,
            move_number: 1,
        }
    }
}

impl TurnState {
    /// Transition to the next turn phase
    ///
    /// # Errors
    /// Logs an error if the transition is invalid but allows it to proceed.
    /// Invalid transitions indicate logic errors; debug builds panic on them.
    pub fn transition_to(&mut self, next_phase: TurnPhase) {
        if !self.phase.can_transition_to(next_phase) {
            error!(
                "[TURN] Invalid turn state transition: {:?} -> {:?}",
                self.phase, next_phase
            );
            #[cfg(debug_assertions)]
            {
                panic!(
                    "Invalid turn state transition: {:?} -> {:?}",
                    self.phase, next_phase
                );
            }
        }

        self.phase = next_phase;
    }

    /// Back to the first move, nothing selected
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_phase_accepts_input() {
        assert!(TurnPhase::Idle.accepts_input());
        assert!(TurnPhase::Selected.accepts_input());
        assert!(!TurnPhase::AwaitingExternalMove.accepts_input());
        assert!(!TurnPhase::GameOver.accepts_input());
    }

    #[test]
    fn test_valid_transitions() {
        let mut state = TurnState::default();

        state.transition_to(TurnPhase::Selected);
        state.transition_to(TurnPhase::Selected);
        state.transition_to(TurnPhase::AwaitingExternalMove);
        assert!(state.phase.is_awaiting_external());

        state.transition_to(TurnPhase::Idle);
        state.transition_to(TurnPhase::Selected);
        state.transition_to(TurnPhase::GameOver);
        assert_eq!(state.phase, TurnPhase::GameOver);

        state.reset();
        assert_eq!(state, TurnState::default());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Invalid turn state transition")]
    fn test_invalid_transition_panics() {
        let mut state = TurnState::default();
        // Nothing selected yet, so nothing can be committed
        state.transition_to(TurnPhase::AwaitingExternalMove);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Invalid turn state transition")]
    fn test_game_over_is_terminal() {
        let mut state = TurnState {
            phase: TurnPhase::GameOver,
            move_number: 3,
        };
        state.transition_to(TurnPhase::Idle);
    }
}
