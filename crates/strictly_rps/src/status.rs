//! Per-player status shown next to each player's controls.

use super::phases::Outcome;
use serde::{Deserialize, Serialize};

/// What a player should be told about the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Round incomplete and it's the other player's turn.
    Waiting,
    /// Round incomplete and it's this player's turn.
    YourTurn,
    /// Round complete, with the outcome from this player's perspective.
    Finished(Outcome),
    /// Round reports complete but has no result. Unreachable in practice.
    UndefinedState,
}

impl PlayerStatus {
    /// Returns the outcome once the round is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            PlayerStatus::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
