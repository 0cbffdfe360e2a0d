use crate::data_fetcher::processors::round_half_up;
use serde::{Deserialize, Serialize};

/// Score of one player whose statistics were fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerResult {
    pub handle: String,
    pub is_captain: bool,
    pub raw_delta: f64,
    /// `raw_delta` minus the player's deduction.
    pub adjusted: f64,
    /// `adjusted`, multiplied for captains.
    pub boosted: f64,
}

impl PlayerResult {
    pub fn display_line(&self) -> String {
        if self.is_captain {
            format!(
                "{} (c): {} → {}",
                self.handle,
                round_half_up(self.adjusted),
                round_half_up(self.boosted)
            )
        } else {
            format!("{}: {}", self.handle, round_half_up(self.adjusted))
        }
    }
}

/// What happened to a single roster entry during aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerOutcome {
    Scored(PlayerResult),
    /// No usable user id; no statistics call was made.
    MissingId { handle: String },
    /// Deduction cell was not a number; no statistics call was made.
    InvalidDeduction { handle: String, raw: String },
    /// Statistics call or decoding failed.
    FetchError { handle: String },
}

impl PlayerOutcome {
    pub fn display_line(&self) -> String {
        match self {
            PlayerOutcome::Scored(result) => result.display_line(),
            PlayerOutcome::MissingId { handle } => format!("{handle}: missing ID"),
            PlayerOutcome::InvalidDeduction { handle, .. } => {
                format!("{handle}: invalid deduction")
            }
            PlayerOutcome::FetchError { handle } => format!("{handle}: fetch error"),
        }
    }

    /// Unrounded amount added to the team total.
    pub fn contribution(&self) -> f64 {
        match self {
            PlayerOutcome::Scored(result) => result.boosted,
            _ => 0.0,
        }
    }
}

/// Aggregated score for one side of a game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamScore {
    pub total: i64,
    pub lines: Vec<String>,
}

/// One scored game as persisted. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub team1: String,
    pub team2: String,
    pub score1: i64,
    pub score2: i64,
    pub roster1: Vec<String>,
    pub roster2: Vec<String>,
}

impl GameResult {
    pub fn new(team1: &str, team2: &str, side1: TeamScore, side2: TeamScore) -> Self {
        Self {
            team1: team1.to_string(),
            team2: team2.to_string(),
            score1: side1.total,
            score2: side2.total,
            roster1: side1.lines,
            roster2: side2.lines,
        }
    }
}

/// Top-level persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GamesDocument {
    pub games: Vec<GameResult>,
}
