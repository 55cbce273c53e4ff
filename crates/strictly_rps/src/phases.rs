//! Round phases and results.
//!
//! Everything here is derived from the round's selections; none of it is
//! stored independently.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Neither player has chosen.
    Empty,
    /// Exactly one player has chosen.
    OneChosen,
    /// Both players have chosen; the result is fixed until reset.
    Complete,
}

impl RoundPhase {
    /// Returns true once both selections are in.
    pub fn is_complete(&self) -> bool {
        matches!(self, RoundPhase::Complete)
    }
}

/// Result of a complete round, always from player one's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Player one's move beats player two's.
    Win,
    /// Player two's move beats player one's.
    Loss,
    /// Both players threw the same move.
    Draw,
}

impl RoundResult {
    /// Maps the result onto `player`'s perspective.
    pub fn outcome_for(self, player: Player) -> Outcome {
        match (self, player) {
            (RoundResult::Draw, _) => Outcome::Draw,
            (RoundResult::Win, Player::One) | (RoundResult::Loss, Player::Two) => Outcome::Win,
            (RoundResult::Loss, Player::One) | (RoundResult::Win, Player::Two) => Outcome::Lose,
        }
    }

    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundResult::Win => Some(Player::One),
            RoundResult::Loss => Some(Player::Two),
            RoundResult::Draw => None,
        }
    }
}

/// A round result as seen by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The asking player won.
    Win,
    /// The asking player lost.
    Lose,
    /// Nobody won.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "Win"),
            Outcome::Lose => write!(f, "Lose"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
