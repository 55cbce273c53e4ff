//! Round state: the two selections, whose turn it is, and the settled result.
//!
//! Every operation here is total. Late input is ignored and queries on an
//! incomplete round return `None` rather than failing.

use super::phases::{RoundPhase, RoundResult};
use super::rules;
use super::types::{Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Both players' selections. `None` means not chosen yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    pub(crate) first: Option<Move>,
    pub(crate) second: Option<Move>,
}

impl Selections {
    /// Returns `player`'s selection.
    pub fn get(&self, player: Player) -> Option<Move> {
        match player {
            Player::One => self.first,
            Player::Two => self.second,
        }
    }

    fn set(&mut self, player: Player, mv: Move) {
        match player {
            Player::One => self.first = Some(mv),
            Player::Two => self.second = Some(mv),
        }
    }

    /// Returns both selections once both are in.
    pub fn both(&self) -> Option<(Move, Move)> {
        self.first.zip(self.second)
    }

    /// Number of selections made so far.
    pub fn count(&self) -> usize {
        usize::from(self.first.is_some()) + usize::from(self.second.is_some())
    }
}

/// A single round of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) selections: Selections,
    pub(crate) active_player: Player,
    /// Settled when the second selection lands; cleared by `reset`.
    pub(crate) result: Option<RoundResult>,
}

impl Round {
    /// Creates an empty round with player one to choose.
    #[instrument]
    pub fn new() -> Self {
        Self {
            selections: Selections::default(),
            active_player: Player::One,
            result: None,
        }
    }

    /// Records `player`'s selection.
    ///
    /// Ignored once the round is complete. Returns whether the selection
    /// was recorded.
    ///
    /// After recording, the turn passes to player two only if player one
    /// just acted and has a selection; every other case hands the turn to
    /// player one.
    #[instrument(skip(self), fields(active = ?self.active_player))]
    pub fn record_selection(&mut self, player: Player, mv: Move) -> bool {
        if self.is_complete() {
            warn!("Round already complete, ignoring selection");
            return false;
        }

        self.selections.set(player, mv);
        self.active_player = if self.selections.first.is_some() && player == Player::One {
            Player::Two
        } else {
            Player::One
        };
        self.result = self
            .selections
            .both()
            .map(|(first, second)| rules::evaluate(first, second));

        debug!(
            next = ?self.active_player,
            phase = ?self.phase(),
            "Selection recorded"
        );
        true
    }

    /// Returns true once both players have chosen.
    pub fn is_complete(&self) -> bool {
        self.selections.both().is_some()
    }

    /// Evaluates the round from player one's perspective.
    ///
    /// Returns `None` until both players have chosen.
    pub fn evaluate_result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Clears both selections and hands the turn back to player one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.selections = Selections::default();
        self.active_player = Player::One;
        self.result = None;
        debug!("Round reset");
    }

    /// Returns the player currently allowed to choose.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns `player`'s selection, revealed or not.
    pub fn selection(&self, player: Player) -> Option<Move> {
        self.selections.get(player)
    }

    /// Returns both selections.
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> RoundPhase {
        match self.selections.count() {
            0 => RoundPhase::Empty,
            1 => RoundPhase::OneChosen,
            _ => RoundPhase::Complete,
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_is_empty() {
        let round = Round::new();
        assert_eq!(round.phase(), RoundPhase::Empty);
        assert_eq!(round.active_player(), Player::One);
        assert!(!round.is_complete());
        assert_eq!(round.evaluate_result(), None);
    }

    #[test]
    fn test_player_one_then_two() {
        let mut round = Round::new();
        assert!(round.record_selection(Player::One, Move::Rock));
        assert_eq!(round.active_player(), Player::Two);
        assert_eq!(round.phase(), RoundPhase::OneChosen);

        assert!(round.record_selection(Player::Two, Move::Scissors));
        assert_eq!(round.active_player(), Player::One);
        assert!(round.is_complete());
        assert_eq!(round.evaluate_result(), Some(RoundResult::Win));
    }

    #[test]
    fn test_player_two_first_keeps_turn_with_player_one() {
        let mut round = Round::new();
        assert!(round.record_selection(Player::Two, Move::Paper));
        assert_eq!(round.active_player(), Player::One);
        assert_eq!(round.phase(), RoundPhase::OneChosen);
    }

    #[test]
    fn test_player_one_may_change_mind_before_completion() {
        let mut round = Round::new();
        round.record_selection(Player::One, Move::Rock);
        round.record_selection(Player::One, Move::Paper);
        assert_eq!(round.selection(Player::One), Some(Move::Paper));
        assert_eq!(round.active_player(), Player::Two);
        assert_eq!(round.phase(), RoundPhase::OneChosen);
    }

    #[test]
    fn test_selection_after_completion_is_ignored() {
        let mut round = Round::new();
        round.record_selection(Player::One, Move::Paper);
        round.record_selection(Player::Two, Move::Rock);
        let before = round.clone();

        assert!(!round.record_selection(Player::One, Move::Scissors));
        assert!(!round.record_selection(Player::Two, Move::Scissors));
        assert_eq!(round, before);
    }

    #[test]
    fn test_loss_and_draw() {
        let mut round = Round::new();
        round.record_selection(Player::One, Move::Rock);
        round.record_selection(Player::Two, Move::Paper);
        assert_eq!(round.evaluate_result(), Some(RoundResult::Loss));

        round.reset();
        round.record_selection(Player::One, Move::Paper);
        round.record_selection(Player::Two, Move::Paper);
        assert_eq!(round.evaluate_result(), Some(RoundResult::Draw));
    }

    #[test]
    fn test_reset_restores_empty_round() {
        let mut round = Round::new();
        round.record_selection(Player::One, Move::Rock);
        round.record_selection(Player::Two, Move::Rock);
        round.reset();
        assert_eq!(round, Round::new());
    }
}
