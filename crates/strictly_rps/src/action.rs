//! First-class choice actions.
//!
//! A choice is a player's intent to throw a move. It can be validated
//! against a round before it is applied.

use super::types::{Move, Player};
use serde::{Deserialize, Serialize};

/// A player throwing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// The player choosing.
    pub player: Player,
    /// The move thrown.
    pub mv: Move,
}

impl Choice {
    /// Creates a new choice.
    pub fn new(player: Player, mv: Move) -> Self {
        Self { player, mv }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.mv)
    }
}

/// Why a strict choice was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ChooseError {
    /// Both players have already chosen.
    #[display("Round is already complete")]
    RoundComplete,

    /// The player is not the active player.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),

    /// A postcondition failed after applying the choice.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
