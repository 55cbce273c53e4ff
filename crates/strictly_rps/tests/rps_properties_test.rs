//! Property tests over arbitrary sequences of choices and resets.

use proptest::prelude::*;
use strictly_rps::{
    GameController, InvariantSet, Move, Player, PlayerStatus, RoundInvariants, RoundPhase,
};

#[derive(Debug, Clone, Copy)]
enum Step {
    Choose(Move, Player),
    Reset,
}

fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![Just(Move::Rock), Just(Move::Paper), Just(Move::Scissors)]
}

fn any_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::One), Just(Player::Two)]
}

fn any_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (any_move(), any_player()).prop_map(|(mv, player)| Step::Choose(mv, player)),
        1 => Just(Step::Reset),
    ]
}

fn apply(game: &mut GameController, step: Step) {
    match step {
        Step::Choose(mv, player) => game.choose(mv, player),
        Step::Reset => game.reset(),
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_any_sequence(steps in prop::collection::vec(any_step(), 0..24)) {
        let mut game = GameController::new();
        for step in steps {
            apply(&mut game, step);
            prop_assert!(RoundInvariants::check_all(game.round()).is_ok());
        }
    }

    #[test]
    fn complete_round_ignores_further_choices(
        first in any_move(),
        second in any_move(),
        late in prop::collection::vec((any_move(), any_player()), 1..8),
    ) {
        let mut game = GameController::new();
        game.choose(first, Player::One);
        game.choose(second, Player::Two);
        let before = game.snapshot();

        for (mv, player) in late {
            game.choose(mv, player);
        }

        prop_assert_eq!(game.revealed_move(Player::One), Some(first));
        prop_assert_eq!(game.revealed_move(Player::Two), Some(second));
        prop_assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn at_most_one_player_is_offered_moves(steps in prop::collection::vec(any_step(), 0..24)) {
        let mut game = GameController::new();
        for step in steps {
            apply(&mut game, step);
            let offered = [Player::One, Player::Two]
                .into_iter()
                .filter(|p| !game.allowed_moves(*p).is_empty())
                .count();
            if game.is_complete() {
                prop_assert_eq!(offered, 0);
            } else {
                prop_assert_eq!(offered, 1);
            }
        }
    }

    #[test]
    fn outcomes_mirror_each_other(first in any_move(), second in any_move()) {
        let mut game = GameController::new();
        game.choose(first, Player::One);
        game.choose(second, Player::Two);

        let one = game.status(Player::One).outcome();
        let two = game.status(Player::Two).outcome();
        prop_assert!(one.is_some() && two.is_some());
        prop_assert_eq!(one == two, first == second);
        prop_assert_eq!(game.round().phase(), RoundPhase::Complete);
        prop_assert_ne!(game.status(Player::One), PlayerStatus::UndefinedState);
    }

    #[test]
    fn hidden_moves_until_complete(steps in prop::collection::vec(any_step(), 0..24)) {
        let mut game = GameController::new();
        for step in steps {
            apply(&mut game, step);
            if !game.is_complete() {
                prop_assert_eq!(game.revealed_move(Player::One), None);
                prop_assert_eq!(game.revealed_move(Player::Two), None);
            }
        }
    }
}
