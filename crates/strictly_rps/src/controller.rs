//! Game controller: the single live round and the queries presentation renders.
//!
//! The controller gates what each player sees. It never rejects input on the
//! soft path: `choose` forwards straight to the round, and the round ignores
//! late selections. Presentation is expected to offer only
//! [`GameController::allowed_moves`].

use super::action::{ChooseError, Choice};
use super::contracts::{ChooseContract, Contract};
use super::invariants::{InvariantSet, RoundInvariants};
use super::round::Round;
use super::snapshot::RoundSnapshot;
use super::status::PlayerStatus;
use super::types::{Move, Player};
use tracing::{debug, info, instrument, warn};

/// Handle returned by [`GameController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&RoundSnapshot)>;

/// Mediates between presentation and the round.
#[derive(Default)]
pub struct GameController {
    round: Round,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("round", &self.round)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameController {
    /// Creates a controller with an empty round.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating GameController");
        Self::default()
    }

    /// Returns the underlying round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the moves `player` may pick right now.
    ///
    /// All moves if it's their turn and the round is open, otherwise none.
    #[instrument(skip(self))]
    pub fn allowed_moves(&self, player: Player) -> Vec<Move> {
        if self.round.active_player() == player && !self.round.is_complete() {
            Move::all()
        } else {
            Vec::new()
        }
    }

    /// Returns what `player` should be told about the round.
    #[instrument(skip(self))]
    pub fn status(&self, player: Player) -> PlayerStatus {
        if !self.round.is_complete() {
            return if self.round.active_player() == player {
                PlayerStatus::YourTurn
            } else {
                PlayerStatus::Waiting
            };
        }

        match self.round.evaluate_result() {
            Some(result) => PlayerStatus::Finished(result.outcome_for(player)),
            None => {
                warn!("Round complete without a result");
                PlayerStatus::UndefinedState
            }
        }
    }

    /// Returns `player`'s move once the round is complete.
    ///
    /// Moves are hidden until both players have committed.
    pub fn revealed_move(&self, player: Player) -> Option<Move> {
        if self.round.is_complete() {
            self.round.selection(player)
        } else {
            None
        }
    }

    /// Returns true once both players have chosen.
    pub fn is_complete(&self) -> bool {
        self.round.is_complete()
    }

    /// Records `mv` for `player`.
    ///
    /// Out-of-turn choices are recorded too; late choices are ignored.
    #[instrument(skip(self))]
    pub fn choose(&mut self, mv: Move, player: Player) {
        info!(%player, %mv, "Player chose move");
        self.round.record_selection(player, mv);
        self.changed();
    }

    /// Records `mv` for `player`, rejecting out-of-turn or late choices.
    ///
    /// # Errors
    ///
    /// - `ChooseError::RoundComplete` if both players have already chosen.
    /// - `ChooseError::NotYourTurn` if `player` is not the active player.
    /// - `ChooseError::InvariantViolation` if a postcondition fails (debug
    ///   builds). The round is rolled back and observers are not notified.
    #[instrument(skip(self))]
    pub fn try_choose(&mut self, mv: Move, player: Player) -> Result<(), ChooseError> {
        let choice = Choice::new(player, mv);
        if let Err(e) = ChooseContract::pre(&self.round, &choice) {
            debug!(error = %e, "Choice rejected");
            return Err(e);
        }

        let before = self.round.clone();

        info!(%choice, "Player chose move");
        self.round.record_selection(player, mv);

        if cfg!(debug_assertions) {
            self.commit(before)
        } else {
            self.changed();
            Ok(())
        }
    }

    /// Checks the postcondition against `before`, restoring it on failure.
    fn commit(&mut self, before: Round) -> Result<(), ChooseError> {
        if let Err(e) = ChooseContract::post(&before, &self.round) {
            warn!(error = %e, "Postcondition failed, rolling back choice");
            self.round = before;
            return Err(e);
        }

        self.changed();
        Ok(())
    }

    /// Starts a fresh round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting round");
        self.round.reset();
        self.changed();
    }

    /// Returns a serializable view of the round.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from(self)
    }

    /// Registers `observer` to be called after every mutating call.
    #[instrument(skip(self, observer))]
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&RoundSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(?id, count = self.observers.len(), "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        before != self.observers.len()
    }

    fn changed(&mut self) {
        if let Err(violations) = RoundInvariants::check_all(&self.round) {
            for violation in &violations {
                warn!(description = %violation.description, "Round invariant violated");
            }
            debug_assert!(violations.is_empty(), "Round invariants violated");
        }

        if self.observers.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        for (_, observer) in &mut self.observers {
            observer(&snapshot);
        }
    }
}
