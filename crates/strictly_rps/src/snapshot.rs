//! Serializable view of a round for presentation layers.
//!
//! Moves stay hidden until the round is complete, so a snapshot can be
//! handed to either player's view without leaking the other's choice.

use super::controller::GameController;
use super::phases::{RoundPhase, RoundResult};
use super::status::PlayerStatus;
use super::types::{Move, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Immutable picture of the round after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Lifecycle phase.
    phase: RoundPhase,
    /// Player currently allowed to choose.
    active_player: Player,
    /// Player one's move, present only once the round is complete.
    first_move: Option<Move>,
    /// Player two's move, present only once the round is complete.
    second_move: Option<Move>,
    /// Result from player one's perspective, once complete.
    result: Option<RoundResult>,
    /// Player one's status.
    first_status: PlayerStatus,
    /// Player two's status.
    second_status: PlayerStatus,
}

impl RoundSnapshot {
    /// Returns the revealed move for `player`.
    pub fn revealed_move(&self, player: Player) -> Option<Move> {
        match player {
            Player::One => self.first_move,
            Player::Two => self.second_move,
        }
    }

    /// Returns `player`'s status.
    pub fn status(&self, player: Player) -> PlayerStatus {
        match player {
            Player::One => self.first_status,
            Player::Two => self.second_status,
        }
    }

    /// Returns true once both players have chosen.
    pub fn is_complete(&self) -> bool {
        self.phase.is_complete()
    }

    /// Serializes the snapshot as JSON.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&GameController> for RoundSnapshot {
    fn from(controller: &GameController) -> Self {
        let round = controller.round();
        Self {
            phase: round.phase(),
            active_player: round.active_player(),
            first_move: controller.revealed_move(Player::One),
            second_move: controller.revealed_move(Player::Two),
            result: round.evaluate_result(),
            first_status: controller.status(Player::One),
            second_status: controller.status(Player::Two),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn test_moves_hidden_until_complete() {
        let mut controller = GameController::new();
        controller.choose(Move::Rock, Player::One);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase(), &RoundPhase::OneChosen);
        assert_eq!(snapshot.revealed_move(Player::One), None);
        assert_eq!(snapshot.result(), &None);
        assert!(!snapshot.to_json().unwrap().contains("Rock"));
    }

    #[test]
    fn test_complete_snapshot_round_trips_through_json() {
        let mut controller = GameController::new();
        controller.choose(Move::Paper, Player::One);
        controller.choose(Move::Scissors, Player::Two);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status(Player::One), PlayerStatus::Finished(Outcome::Lose));
        assert_eq!(snapshot.status(Player::Two), PlayerStatus::Finished(Outcome::Win));

        let json = snapshot.to_json().unwrap();
        let parsed: RoundSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
