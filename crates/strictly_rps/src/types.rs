//! Core domain types for rock-paper-scissors.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A move a player can throw.
///
/// The set is fixed. Iteration order (`Move::iter()`) is Rock, Scissors,
/// Paper and is the order in which moves are offered to players. The
/// discriminants also index [`crate::BEATS`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Move {
    /// Rock (beats Scissors).
    Rock,
    /// Scissors (beats Paper).
    Scissors,
    /// Paper (beats Rock).
    Paper,
}

impl Move {
    /// Returns every move in offer order.
    pub fn all() -> Vec<Move> {
        Move::iter().collect()
    }

    /// Returns the move this one defeats.
    #[instrument]
    pub fn beats_move(self) -> Move {
        super::rules::defeated_by(self)
    }

    /// Returns the move that defeats this one.
    #[instrument]
    pub fn beaten_by(self) -> Move {
        super::rules::winner_against(self)
    }

    /// Returns true if this move defeats `other`.
    pub fn beats(self, other: Move) -> bool {
        super::rules::beats(self, other)
    }
}

/// One of the two seats at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player one (always chooses first after a reset).
    #[strum(to_string = "Player 1")]
    One,
    /// Player two.
    #[strum(to_string = "Player 2")]
    Two,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}
