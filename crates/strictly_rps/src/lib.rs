//! Strictly RPS - type-safe rock-paper-scissors round logic
//!
//! A two-player, single-round game: each player throws one move, and once
//! both have chosen the round is scored. Rendering is left to the caller;
//! this crate owns the turn gating and the outcome.
//!
//! # Architecture
//!
//! - **Round**: the two selections, the active player, and derived result
//! - **Controller**: turn-gated queries for presentation, reset, and change notification
//! - **Invariants / Contracts**: properties checked after every mutation, and
//!   the preconditions behind the strict `try_choose`
//! - **Settings**: display labels, loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_rps::{GameController, Move, Outcome, Player, PlayerStatus};
//!
//! let mut game = GameController::new();
//! game.choose(Move::Rock, Player::One);
//! assert!(game.allowed_moves(Player::One).is_empty());
//!
//! game.choose(Move::Scissors, Player::Two);
//! assert_eq!(game.status(Player::One), PlayerStatus::Finished(Outcome::Win));
//! assert_eq!(game.revealed_move(Player::Two), Some(Move::Scissors));
//!
//! game.reset();
//! assert!(!game.is_complete());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod controller;
mod invariants;
mod phases;
mod round;
mod rules;
mod settings;
mod snapshot;
mod status;
mod types;

// Crate-level exports - Domain types
pub use types::{Move, Player};

// Crate-level exports - Rules
pub use rules::{BEATS, beats, evaluate};

// Crate-level exports - Round state
pub use phases::{Outcome, RoundPhase, RoundResult};
pub use round::{Round, Selections};

// Crate-level exports - Actions and contracts
pub use action::{ChooseError, Choice};
pub use contracts::{ChooseContract, Contract, PlayersTurn, RoundOpen};

// Crate-level exports - Invariants
pub use invariants::{
    ActivePlayerInvariant, BeatsCycleInvariant, Invariant, InvariantSet, InvariantViolation,
    ResultConsistentInvariant, RoundInvariants,
};

// Crate-level exports - Controller
pub use controller::{GameController, SubscriptionId};
pub use snapshot::RoundSnapshot;
pub use status::PlayerStatus;

// Crate-level exports - Display settings
pub use settings::{ConfigError, DisplaySettings, MoveLabels, StatusLabels};
