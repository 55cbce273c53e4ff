//! Result consistency invariant: the settled result matches the selections.

use super::super::rules::BEATS;
use super::super::{Round, RoundResult};
use super::Invariant;

/// Invariant: a result is settled exactly when both players have chosen,
/// and it agrees with the beats table for the recorded moves.
///
/// Reads the table directly rather than going through `rules::evaluate`,
/// so a stale or mis-evaluated result is caught.
pub struct ResultConsistentInvariant;

impl Invariant<Round> for ResultConsistentInvariant {
    fn holds(round: &Round) -> bool {
        match (round.selections().both(), round.evaluate_result()) {
            (None, None) => true,
            (Some((first, second)), Some(result)) => {
                let expected = if first == second {
                    RoundResult::Draw
                } else if BEATS.contains(&(first, second)) {
                    RoundResult::Win
                } else if BEATS.contains(&(second, first)) {
                    RoundResult::Loss
                } else {
                    return false;
                };
                result == expected
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Result is settled exactly when both players have chosen and matches the beats table"
    }
}
