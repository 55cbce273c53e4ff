//! Beats cycle invariant: the dominance relation is a 3-cycle.

use super::super::rules::{self, BEATS};
use super::super::{Move, Round};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: every move beats exactly one other move and loses to exactly one.
///
/// No move beats itself, and following the relation three times from any
/// move returns to it.
pub struct BeatsCycleInvariant;

impl BeatsCycleInvariant {
    /// Checks the relation itself, independent of any round.
    pub fn relation_holds() -> bool {
        Move::iter().all(|mv| {
            let wins = Move::iter().filter(|other| rules::beats(mv, *other)).count();
            let losses = Move::iter().filter(|other| rules::beats(*other, mv)).count();
            let cycled = rules::defeated_by(rules::defeated_by(rules::defeated_by(mv)));
            let in_table = BEATS.iter().filter(|(winner, _)| *winner == mv).count();
            let indexed = BEATS[mv as usize].0 == mv;

            wins == 1
                && losses == 1
                && !rules::beats(mv, mv)
                && cycled == mv
                && in_table == 1
                && indexed
        })
    }
}

impl Invariant<Round> for BeatsCycleInvariant {
    fn holds(_round: &Round) -> bool {
        Self::relation_holds()
    }

    fn description() -> &'static str {
        "Beats relation is a 3-cycle (each move beats exactly one other)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_holds() {
        assert!(BeatsCycleInvariant::relation_holds());
    }

    #[test]
    fn test_only_three_pairs_beat() {
        let pairs: Vec<(Move, Move)> = Move::iter()
            .flat_map(|a| Move::iter().map(move |b| (a, b)))
            .filter(|(a, b)| rules::beats(*a, *b))
            .collect();
        assert_eq!(pairs.len(), 3);
        for pair in BEATS {
            assert!(pairs.contains(&pair));
        }
    }
}
