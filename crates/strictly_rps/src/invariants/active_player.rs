//! Active player invariant: player two only gets the turn after player one has chosen.

use super::super::{Player, Round, RoundPhase};
use super::Invariant;

/// Invariant: an empty round is player one's turn, and player two can only
/// be active once player one has a selection.
pub struct ActivePlayerInvariant;

impl Invariant<Round> for ActivePlayerInvariant {
    fn holds(round: &Round) -> bool {
        if round.phase() == RoundPhase::Empty && round.active_player() != Player::One {
            return false;
        }

        round.active_player() == Player::One || round.selection(Player::One).is_some()
    }

    fn description() -> &'static str {
        "Player two is active only after player one has chosen"
    }
}
