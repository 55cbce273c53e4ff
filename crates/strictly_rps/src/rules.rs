//! Game rules for rock-paper-scissors.
//!
//! Pure functions over moves. The beats relation lives here so the
//! round state and the invariant checks read from one table.

use super::phases::RoundResult;
use super::types::Move;
use tracing::instrument;

/// The beats relation as `(winner, loser)` pairs, one entry per move.
///
/// Indexed by `Move` discriminant: `BEATS[mv as usize].0 == mv`.
pub const BEATS: [(Move, Move); 3] = [
    (Move::Rock, Move::Scissors),
    (Move::Scissors, Move::Paper),
    (Move::Paper, Move::Rock),
];

/// Returns the move that `mv` defeats.
pub fn defeated_by(mv: Move) -> Move {
    BEATS[mv as usize].1
}

/// Returns the move that defeats `mv`.
///
/// In a 3-cycle the move two steps along the relation beats `mv`.
pub fn winner_against(mv: Move) -> Move {
    defeated_by(defeated_by(mv))
}

/// Returns true if `a` defeats `b`.
pub fn beats(a: Move, b: Move) -> bool {
    defeated_by(a) == b
}

/// Evaluates a complete round from player one's perspective.
#[instrument]
pub fn evaluate(first: Move, second: Move) -> RoundResult {
    if first == second {
        RoundResult::Draw
    } else if beats(first, second) {
        RoundResult::Win
    } else {
        RoundResult::Loss
    }
}
