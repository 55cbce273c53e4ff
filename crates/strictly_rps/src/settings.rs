//! Display settings: the text presentation shows for moves and statuses.
//!
//! Defaults match the classic two-sided touch layout: hand emoji for the
//! moves, a blank status for the player whose turn it is, and an ellipsis
//! for the player who is waiting.

use super::controller::GameController;
use super::phases::Outcome;
use super::status::PlayerStatus;
use super::types::{Move, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Labels for each move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveLabels {
    /// Label for Rock.
    rock: String,
    /// Label for Scissors.
    scissors: String,
    /// Label for Paper.
    paper: String,
}

impl Default for MoveLabels {
    fn default() -> Self {
        Self {
            rock: "✊🏽".to_string(),
            scissors: "✌🏽".to_string(),
            paper: "👋🏽".to_string(),
        }
    }
}

/// Labels for each player status.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    /// Shown to the player whose turn it is.
    your_turn: String,
    /// Shown to the player who is waiting.
    waiting: String,
    /// Shown to the winner.
    win: String,
    /// Shown to the loser.
    lose: String,
    /// Shown to both players on a draw.
    draw: String,
    /// Shown if the round is complete without a result.
    undefined: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            your_turn: String::new(),
            waiting: "...".to_string(),
            win: "You Win!".to_string(),
            lose: "You Lose!".to_string(),
            draw: "Draw!".to_string(),
            undefined: "Undefined State".to_string(),
        }
    }
}

/// All user-facing text, loadable from TOML.
///
/// Every section and key is optional; anything missing keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Text on the button that starts a new round.
    reset: String,
    /// Move labels.
    moves: MoveLabels,
    /// Status labels.
    status: StatusLabels,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            reset: "Retry 🔄".to_string(),
            moves: MoveLabels::default(),
            status: StatusLabels::default(),
        }
    }
}

impl DisplaySettings {
    /// Creates settings with the default labels.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse display settings: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading display settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read display settings file: {}", e))
        })?;

        let settings = Self::from_toml_str(&content)?;
        info!("Display settings loaded");
        Ok(settings)
    }

    /// Renders the settings back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize display settings: {}", e)))
    }

    /// Returns the label for `mv`.
    pub fn move_label(&self, mv: Move) -> &str {
        match mv {
            Move::Rock => &self.moves.rock,
            Move::Scissors => &self.moves.scissors,
            Move::Paper => &self.moves.paper,
        }
    }

    /// Returns the label for `status`.
    pub fn status_label(&self, status: PlayerStatus) -> &str {
        match status {
            PlayerStatus::YourTurn => &self.status.your_turn,
            PlayerStatus::Waiting => &self.status.waiting,
            PlayerStatus::Finished(Outcome::Win) => &self.status.win,
            PlayerStatus::Finished(Outcome::Lose) => &self.status.lose,
            PlayerStatus::Finished(Outcome::Draw) => &self.status.draw,
            PlayerStatus::UndefinedState => &self.status.undefined,
        }
    }

    /// Returns the label of `player`'s revealed move, or an empty string
    /// while moves are hidden.
    pub fn final_move_label(&self, controller: &GameController, player: Player) -> &str {
        controller
            .revealed_move(player)
            .map_or("", |mv| self.move_label(mv))
    }

    /// Returns the reset button text. Presentation shows it while the round is complete.
    pub fn reset_label(&self) -> &str {
        &self.reset
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
