//! Contract-based validation for strict choices.
//!
//! The soft path (`Round::record_selection`) accepts anything and ignores
//! late input. Contracts back the strict path, where out-of-turn or late
//! choices are rejected with an error instead.

use super::action::{ChooseError, Choice};
use super::invariants::{InvariantSet, RoundInvariants};
use super::Round;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ChooseError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ChooseError>;
}

/// Precondition: the round must still accept selections.
pub struct RoundOpen;

impl RoundOpen {
    /// Fails once both players have chosen.
    #[instrument(skip(round))]
    pub fn check(round: &Round) -> Result<(), ChooseError> {
        if round.is_complete() {
            Err(ChooseError::RoundComplete)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails unless the choosing player is active.
    #[instrument(skip(round))]
    pub fn check(choice: &Choice, round: &Round) -> Result<(), ChooseError> {
        if choice.player != round.active_player() {
            Err(ChooseError::NotYourTurn(choice.player))
        } else {
            Ok(())
        }
    }
}

/// Contract for strict choices.
///
/// Preconditions:
/// - Round is not complete
/// - Choosing player is active
///
/// Postconditions:
/// - Exactly one more selection than before
/// - All round invariants hold
pub struct ChooseContract;

impl Contract<Round, Choice> for ChooseContract {
    fn pre(round: &Round, choice: &Choice) -> Result<(), ChooseError> {
        RoundOpen::check(round)?;
        PlayersTurn::check(choice, round)?;
        Ok(())
    }

    fn post(before: &Round, after: &Round) -> Result<(), ChooseError> {
        if after.selections().count() != before.selections().count() + 1 {
            warn!(
                before = before.selections().count(),
                after = after.selections().count(),
                "Selection count did not advance"
            );
            return Err(ChooseError::InvariantViolation(
                "Postcondition failed: selection count did not advance by one".to_string(),
            ));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ChooseError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
